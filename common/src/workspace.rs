//! Six-slot widget configuration workspace behind the dashboard creation view.
//!
//! The workspace owns one [`WidgetDraft`] per layout slot. Edits are applied
//! through methods that enforce the per-kind defaults (changing the chart kind
//! clears the columns, pie forces `count`, table forces no aggregation) and the
//! column arity of the kind. [`Workspace::submit`] validates every populated
//! slot and assembles the single creation payload.

use thiserror::Error;

use crate::layout::DASHBOARD_LAYOUT;
use crate::model::dashboard::{Aggregation, ChartType, Widget};
use crate::model::data_file::{ColumnAnalysis, VisualizationSuggestion};
use crate::requests::CreateDashboardPayload;
use crate::validation::{validate_widget, WidgetIssue};

/// Editable configuration of one slot. `chart_type == None` means the slot is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDraft {
    pub position: u8,
    pub chart_type: Option<ChartType>,
    pub title: String,
    pub columns: Vec<String>,
    pub aggregation: Option<Aggregation>,
}

impl WidgetDraft {
    pub fn empty(position: u8) -> Self {
        Self {
            position,
            chart_type: None,
            title: String::new(),
            columns: Vec::new(),
            aggregation: None,
        }
    }

    pub fn is_populated(&self) -> bool {
        self.chart_type.is_some()
    }

    /// Role of an already selected column in an ordered-pair chart.
    pub fn column_role(&self, column: &str) -> Option<ColumnRole> {
        let chart = self.chart_type?;
        let index = self.columns.iter().position(|c| c == column)?;
        if !chart.is_series() {
            return Some(ColumnRole::Selected);
        }
        Some(if index == 0 {
            ColumnRole::Category
        } else {
            ColumnRole::Value
        })
    }

    /// Whether another column may be picked under the kind's arity.
    pub fn can_add_column(&self) -> bool {
        match self.chart_type {
            Some(chart) => chart.arity().max().is_none_or(|max| self.columns.len() < max),
            None => false,
        }
    }

    fn effective_title(&self, chart: ChartType) -> String {
        let title = self.title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
        if self.columns.is_empty() {
            chart.label().to_string()
        } else {
            format!("{} · {}", chart.label(), self.columns.join(" / "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Category,
    Value,
    Selected,
}

impl ColumnRole {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnRole::Category => "Categoría",
            ColumnRole::Value => "Valor",
            ColumnRole::Selected => "✓",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("El nombre del dashboard es requerido")]
    MissingName,

    #[error("Agrega al menos un widget al dashboard")]
    NoWidgets,

    #[error("Revisa los widgets en posición {}", join_positions(.0))]
    InvalidWidgets(Vec<u8>),
}

fn join_positions(positions: &[u8]) -> String {
    positions.iter().map(u8::to_string).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    slots: Vec<WidgetDraft>,
    selected: Option<u8>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            slots: DASHBOARD_LAYOUT.iter().map(|s| WidgetDraft::empty(s.position)).collect(),
            selected: None,
        }
    }

    pub fn slots(&self) -> &[WidgetDraft] {
        &self.slots
    }

    pub fn slot(&self, position: u8) -> Option<&WidgetDraft> {
        self.slots.iter().find(|s| s.position == position)
    }

    fn slot_mut(&mut self, position: u8) -> Option<&mut WidgetDraft> {
        self.slots.iter_mut().find(|s| s.position == position)
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&WidgetDraft> {
        self.selected.and_then(|p| self.slot(p))
    }

    /// Selects a slot for editing. Positions outside the layout are ignored.
    pub fn select(&mut self, position: u8) {
        if self.slot(position).is_some() {
            self.selected = Some(position);
        }
    }

    /// Changes the chart kind, dropping the columns picked for the previous kind
    /// and applying the kind's forced aggregation.
    pub fn set_chart_type(&mut self, position: u8, chart: ChartType) {
        if let Some(slot) = self.slot_mut(position) {
            slot.chart_type = Some(chart);
            slot.columns.clear();
            if let Some(forced) = chart.forced_aggregation() {
                slot.aggregation = forced;
            }
        }
    }

    pub fn set_title(&mut self, position: u8, title: String) {
        if let Some(slot) = self.slot_mut(position) {
            slot.title = title;
        }
    }

    /// Picks or unpicks a column. Picking is refused once the arity is reached;
    /// pick order is preserved so the first column stays the category.
    pub fn toggle_column(&mut self, position: u8, column: &str) {
        let Some(slot) = self.slot_mut(position) else {
            return;
        };
        if let Some(index) = slot.columns.iter().position(|c| c == column) {
            slot.columns.remove(index);
        } else if slot.can_add_column() {
            slot.columns.push(column.to_string());
        }
    }

    /// Sets the aggregation. Kinds with a forced aggregation ignore the request.
    pub fn set_aggregation(&mut self, position: u8, aggregation: Option<Aggregation>) {
        if let Some(slot) = self.slot_mut(position) {
            let forced = slot.chart_type.and_then(|c| c.forced_aggregation());
            if forced.is_none() {
                slot.aggregation = aggregation;
            }
        }
    }

    /// Fills a slot from a server suggestion, through the same rules as manual edits.
    pub fn apply_suggestion(&mut self, position: u8, suggestion: &VisualizationSuggestion) {
        self.set_chart_type(position, suggestion.chart_type);
        self.set_title(position, suggestion.title.clone());
        for column in &suggestion.columns {
            self.toggle_column(position, column);
        }
        self.set_aggregation(position, suggestion.aggregation);
    }

    pub fn clear(&mut self, position: u8) {
        if let Some(slot) = self.slot_mut(position) {
            *slot = WidgetDraft::empty(position);
        }
    }

    pub fn populated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_populated()).count()
    }

    pub fn issues(&self, position: u8, columns: &[ColumnAnalysis]) -> Vec<WidgetIssue> {
        self.slot(position)
            .map(|slot| validate_widget(slot, columns))
            .unwrap_or_default()
    }

    /// Validates the whole workspace and builds the creation payload.
    pub fn submit(
        &self,
        name: &str,
        template_id: &str,
        data_id: &str,
        columns: &[ColumnAnalysis],
    ) -> Result<CreateDashboardPayload, SubmitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubmitError::MissingName);
        }

        let populated: Vec<&WidgetDraft> = self.slots.iter().filter(|s| s.is_populated()).collect();
        if populated.is_empty() {
            return Err(SubmitError::NoWidgets);
        }

        let invalid: Vec<u8> = populated
            .iter()
            .filter(|slot| !validate_widget(slot, columns).is_empty())
            .map(|slot| slot.position)
            .collect();
        if !invalid.is_empty() {
            return Err(SubmitError::InvalidWidgets(invalid));
        }

        let widgets = populated
            .into_iter()
            .filter_map(|slot| {
                let chart = slot.chart_type?;
                Some(Widget {
                    position: slot.position,
                    chart_type: chart,
                    title: slot.effective_title(chart),
                    columns: slot.columns.clone(),
                    aggregation: slot.aggregation,
                    filters: None,
                })
            })
            .collect();

        Ok(CreateDashboardPayload {
            template_id: template_id.to_string(),
            data_id: data_id.to_string(),
            name: name.to_string(),
            widgets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::arrange;
    use crate::validation::tests::sample_columns;

    #[test]
    fn starts_with_six_empty_slots() {
        let ws = Workspace::new();
        let positions: Vec<u8> = ws.slots().iter().map(|s| s.position).collect();
        assert_eq!(positions, [1, 2, 3, 4, 5, 6]);
        assert_eq!(ws.populated_count(), 0);
        assert_eq!(ws.selected(), None);
    }

    #[test]
    fn select_ignores_unknown_positions() {
        let mut ws = Workspace::new();
        ws.select(7);
        assert_eq!(ws.selected(), None);
        ws.select(4);
        assert_eq!(ws.selected_slot().map(|s| s.position), Some(4));
    }

    #[test]
    fn changing_kind_resets_columns_and_applies_defaults() {
        let mut ws = Workspace::new();
        ws.set_chart_type(1, ChartType::Bar);
        ws.set_aggregation(1, Some(Aggregation::Sum));
        ws.toggle_column(1, "Region");
        ws.toggle_column(1, "Total");

        ws.set_chart_type(1, ChartType::Pie);
        let slot = ws.slot(1).unwrap();
        assert!(slot.columns.is_empty());
        assert_eq!(slot.aggregation, Some(Aggregation::Count));

        ws.set_chart_type(1, ChartType::Table);
        assert_eq!(ws.slot(1).unwrap().aggregation, None);

        // Kinds without a forced value keep whatever was there.
        ws.set_chart_type(2, ChartType::Kpi);
        ws.set_aggregation(2, Some(Aggregation::Max));
        ws.set_chart_type(2, ChartType::Line);
        assert_eq!(ws.slot(2).unwrap().aggregation, Some(Aggregation::Max));
    }

    #[test]
    fn forced_aggregation_cannot_be_overridden() {
        let mut ws = Workspace::new();
        ws.set_chart_type(3, ChartType::Pie);
        ws.set_aggregation(3, Some(Aggregation::Sum));
        assert_eq!(ws.slot(3).unwrap().aggregation, Some(Aggregation::Count));
    }

    #[test]
    fn column_picks_are_capped_and_ordered() {
        let mut ws = Workspace::new();
        ws.set_chart_type(5, ChartType::Line);
        ws.toggle_column(5, "Fecha");
        ws.toggle_column(5, "Total");
        ws.toggle_column(5, "Cantidad");
        let slot = ws.slot(5).unwrap();
        assert_eq!(slot.columns, ["Fecha", "Total"]);
        assert_eq!(slot.column_role("Fecha"), Some(ColumnRole::Category));
        assert_eq!(slot.column_role("Total"), Some(ColumnRole::Value));
        assert_eq!(slot.column_role("Cantidad"), None);
        assert!(!slot.can_add_column());

        ws.toggle_column(5, "Fecha");
        assert_eq!(ws.slot(5).unwrap().columns, ["Total"]);
        assert_eq!(ws.slot(5).unwrap().column_role("Total"), Some(ColumnRole::Category));
    }

    #[test]
    fn tables_take_any_number_of_columns() {
        let mut ws = Workspace::new();
        ws.set_chart_type(4, ChartType::Table);
        for c in ["A", "B", "C", "D"] {
            ws.toggle_column(4, c);
        }
        assert_eq!(ws.slot(4).unwrap().columns.len(), 4);
        assert_eq!(ws.slot(4).unwrap().column_role("C"), Some(ColumnRole::Selected));
    }

    #[test]
    fn empty_slots_cannot_pick_columns() {
        let mut ws = Workspace::new();
        ws.toggle_column(2, "Total");
        assert!(ws.slot(2).unwrap().columns.is_empty());
    }

    #[test]
    fn suggestions_fill_a_slot_under_the_same_rules() {
        let mut ws = Workspace::new();
        let suggestion = VisualizationSuggestion {
            chart_type: ChartType::Pie,
            title: "Por región".into(),
            description: String::new(),
            columns: vec!["Region".into(), "Total".into()],
            aggregation: Some(Aggregation::Sum),
            priority: 1,
        };
        ws.apply_suggestion(3, &suggestion);
        let slot = ws.slot(3).unwrap();
        assert_eq!(slot.chart_type, Some(ChartType::Pie));
        assert_eq!(slot.title, "Por región");
        assert_eq!(slot.columns, ["Region"]);
        assert_eq!(slot.aggregation, Some(Aggregation::Count));
    }

    #[test]
    fn clear_restores_an_empty_slot() {
        let mut ws = Workspace::new();
        ws.set_chart_type(6, ChartType::Kpi);
        ws.set_title(6, "Total".into());
        ws.clear(6);
        assert_eq!(ws.slot(6), Some(&WidgetDraft::empty(6)));
    }

    #[test]
    fn submit_requires_name_and_widgets() {
        let ws = Workspace::new();
        let cols = sample_columns();
        assert_eq!(ws.submit("  ", "t", "d", &cols), Err(SubmitError::MissingName));
        assert_eq!(ws.submit("Ventas", "t", "d", &cols), Err(SubmitError::NoWidgets));
    }

    #[test]
    fn submit_lists_offending_positions() {
        let mut ws = Workspace::new();
        let cols = sample_columns();
        ws.set_chart_type(1, ChartType::Kpi);
        ws.toggle_column(1, "Region");
        ws.set_aggregation(1, Some(Aggregation::Sum));
        ws.set_chart_type(4, ChartType::Table);
        ws.toggle_column(4, "Region");
        ws.set_chart_type(6, ChartType::Bar);

        let err = ws.submit("Ventas", "t", "d", &cols).unwrap_err();
        assert_eq!(err, SubmitError::InvalidWidgets(vec![1, 6]));
        assert_eq!(err.to_string(), "Revisa los widgets en posición 1, 6");
    }

    #[test]
    fn submit_builds_payload_in_slot_order() {
        let mut ws = Workspace::new();
        let cols = sample_columns();
        ws.set_chart_type(5, ChartType::Pie);
        ws.toggle_column(5, "Region");
        ws.set_chart_type(2, ChartType::Kpi);
        ws.toggle_column(2, "Total");
        ws.set_aggregation(2, Some(Aggregation::Sum));
        ws.set_title(2, "  Ventas totales ".into());

        let payload = ws.submit(" Q4 ", "tpl", "data", &cols).unwrap();
        assert_eq!(payload.name, "Q4");
        assert_eq!(payload.template_id, "tpl");
        assert_eq!(payload.data_id, "data");
        let positions: Vec<u8> = payload.widgets.iter().map(|w| w.position).collect();
        assert_eq!(positions, [2, 5]);
        assert_eq!(payload.widgets[0].title, "Ventas totales");
        assert_eq!(payload.widgets[1].title, "Pastel · Region");
        assert_eq!(payload.widgets[1].aggregation, Some(Aggregation::Count));
        assert!(payload.widgets.iter().all(|w| w.filters.is_none()));
    }

    #[test]
    fn created_positions_survive_into_the_rendered_layout() {
        let mut ws = Workspace::new();
        let cols = sample_columns();
        for position in [3, 4, 6] {
            ws.set_chart_type(position, ChartType::Table);
            ws.toggle_column(position, "Region");
        }
        let payload = ws.submit("Layout", "t", "d", &cols).unwrap();

        let arranged = arrange(payload.widgets.clone(), |w| w.position);
        let cells: Vec<Vec<Option<u8>>> = arranged
            .iter()
            .map(|(_, row)| row.iter().map(|cell| cell.as_ref().map(|w| w.position)).collect())
            .collect();
        assert_eq!(
            cells,
            [vec![None, None, Some(3)], vec![Some(4)], vec![None, Some(6)]]
        );
    }
}
