use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart kind of a dashboard widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Kpi,
    Bar,
    Line,
    Area,
    Pie,
    Table,
}

/// How many columns a chart kind takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnArity {
    Exactly(usize),
    AtLeast(usize),
}

impl ColumnArity {
    /// Upper bound on selectable columns, `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        match self {
            ColumnArity::Exactly(n) => Some(*n),
            ColumnArity::AtLeast(_) => None,
        }
    }

    pub fn accepts(&self, count: usize) -> bool {
        match self {
            ColumnArity::Exactly(n) => count == *n,
            ColumnArity::AtLeast(n) => count >= *n,
        }
    }

    /// Short hint shown next to the column picker, e.g. `"2 requeridas"`.
    pub fn hint(&self) -> String {
        match self {
            ColumnArity::Exactly(1) => "1 requerida".to_string(),
            ColumnArity::Exactly(n) => format!("{} requeridas", n),
            ColumnArity::AtLeast(n) => format!("{}+ requeridas", n),
        }
    }
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Kpi,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Area,
        ChartType::Pie,
        ChartType::Table,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Kpi => "kpi",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
            ChartType::Table => "table",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        ChartType::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Kpi => "KPI",
            ChartType::Bar => "Barras",
            ChartType::Line => "Líneas",
            ChartType::Area => "Área",
            ChartType::Pie => "Pastel",
            ChartType::Table => "Tabla",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartType::Kpi => "Métrica única",
            ChartType::Bar => "Comparar categorías",
            ChartType::Line => "Tendencias",
            ChartType::Area => "Volumen",
            ChartType::Pie => "Distribución",
            ChartType::Table => "Datos detallados",
        }
    }

    /// Material icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            ChartType::Kpi => "tag",
            ChartType::Bar => "bar_chart",
            ChartType::Line => "show_chart",
            ChartType::Area => "area_chart",
            ChartType::Pie => "pie_chart",
            ChartType::Table => "table_chart",
        }
    }

    pub fn arity(&self) -> ColumnArity {
        match self {
            ChartType::Kpi | ChartType::Pie => ColumnArity::Exactly(1),
            ChartType::Bar | ChartType::Line | ChartType::Area => ColumnArity::Exactly(2),
            ChartType::Table => ColumnArity::AtLeast(1),
        }
    }

    /// Category/value pair charts, where column order carries meaning.
    pub fn is_series(&self) -> bool {
        matches!(self, ChartType::Bar | ChartType::Line | ChartType::Area)
    }

    /// Aggregation forced when the kind is selected. `None` means the user chooses.
    pub fn forced_aggregation(&self) -> Option<Option<Aggregation>> {
        match self {
            ChartType::Pie => Some(Some(Aggregation::Count)),
            ChartType::Table => Some(None),
            _ => None,
        }
    }
}

/// Reduction applied to a numeric column when the server computes widget data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl Aggregation {
    pub const ALL: [Aggregation; 5] = [
        Aggregation::Sum,
        Aggregation::Avg,
        Aggregation::Count,
        Aggregation::Min,
        Aggregation::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Count => "count",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Aggregation::ALL.into_iter().find(|a| a.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Aggregation::Sum => "Suma",
            Aggregation::Avg => "Promedio",
            Aggregation::Count => "Contar",
            Aggregation::Min => "Mínimo",
            Aggregation::Max => "Máximo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Aggregation::Sum => "Total acumulado",
            Aggregation::Avg => "Valor medio",
            Aggregation::Count => "Total de registros",
            Aggregation::Min => "Valor más bajo",
            Aggregation::Max => "Valor más alto",
        }
    }
}

/// Widget configuration as persisted inside a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub position: u8,
    pub chart_type: ChartType,
    pub title: String,
    pub columns: Vec<String>,
    pub aggregation: Option<Aggregation>,
    /// Reserved by the API, always sent as `null`.
    #[serde(default)]
    pub filters: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub template_id: String,
    pub data_id: String,
    pub name: String,
    #[serde(default)]
    pub layout_type: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Read-time projection of a dashboard as sent by `GET /api/dashboards/{id}/data`.
///
/// `data` is kept as raw JSON here; it is decoded per widget into
/// [`crate::widgets::payload::WidgetPayload`] before reaching any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDataRaw {
    pub dashboard_id: String,
    pub name: String,
    #[serde(default)]
    pub layout_type: String,
    #[serde(default)]
    pub widgets: Vec<RawWidgetData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWidgetData {
    pub position: u8,
    /// Kept as a string so an unsupported kind degrades to an error card.
    pub chart_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_types_round_trip_through_strings() {
        for chart in ChartType::ALL {
            assert_eq!(ChartType::parse(chart.as_str()), Some(chart));
        }
        assert_eq!(ChartType::parse("radar"), None);
    }

    #[test]
    fn arity_per_kind() {
        assert_eq!(ChartType::Kpi.arity(), ColumnArity::Exactly(1));
        assert_eq!(ChartType::Line.arity().max(), Some(2));
        assert_eq!(ChartType::Table.arity().max(), None);
        assert!(ChartType::Table.arity().accepts(4));
        assert!(!ChartType::Table.arity().accepts(0));
        assert_eq!(ChartType::Area.arity().hint(), "2 requeridas");
        assert_eq!(ChartType::Table.arity().hint(), "1+ requeridas");
    }

    #[test]
    fn forced_aggregations() {
        assert_eq!(ChartType::Pie.forced_aggregation(), Some(Some(Aggregation::Count)));
        assert_eq!(ChartType::Table.forced_aggregation(), Some(None));
        assert_eq!(ChartType::Bar.forced_aggregation(), None);
    }

    #[test]
    fn widget_serializes_null_filters() {
        let widget = Widget {
            position: 4,
            chart_type: ChartType::Table,
            title: "Detalle".into(),
            columns: vec!["A".into()],
            aggregation: None,
            filters: None,
        };
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["chart_type"], "table");
        assert!(json["aggregation"].is_null());
        assert!(json["filters"].is_null());
    }
}
