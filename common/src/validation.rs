//! Client-side validation of widget configurations.
//!
//! | kind          | columns | type constraint                             | aggregation   |
//! |---------------|---------|---------------------------------------------|---------------|
//! | kpi           | 1       | numeric                                     | required      |
//! | bar/line/area | 2       | first text or date, second numeric          | required      |
//! | pie           | 1       | text, at most 10 distinct values when known | must be count |
//! | table         | 1+      | none                                        | must be absent|
//!
//! Validation is pure: the same draft and analysis always yield the same
//! issues, and nothing here touches the network.

use thiserror::Error;

use crate::model::dashboard::{Aggregation, ChartType};
use crate::model::data_file::ColumnAnalysis;
use crate::model::template::ColumnType;
use crate::workspace::WidgetDraft;

/// Pie charts with more distinct categories than this are rejected.
pub const MAX_PIE_CATEGORIES: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetIssue {
    #[error("Selecciona un tipo de gráfico")]
    MissingChartType,

    #[error("Selecciona al menos una columna")]
    NoColumns,

    #[error("{} requiere exactamente {expected} {}", chart_label(.chart), column_noun(.expected))]
    WrongColumnCount { chart: ChartType, expected: usize },

    #[error("La columna \"{0}\" debe ser numérica")]
    NotNumeric(String),

    #[error("La primera columna (\"{0}\") debe ser texto o fecha")]
    NotCategory(String),

    #[error("Falta la columna de valor")]
    MissingValueColumn,

    #[error("La columna \"{0}\" debe ser de texto")]
    NotText(String),

    #[error("La columna \"{column}\" tiene {unique} valores únicos; el gráfico de pastel admite hasta 10")]
    TooManyCategories { column: String, unique: u64 },

    #[error("Requiere una agregación")]
    MissingAggregation,

    #[error("El gráfico de pastel requiere la agregación 'count'")]
    PieRequiresCount,

    #[error("La tabla no debe tener agregación")]
    TableWithAggregation,
}

fn chart_label(chart: &ChartType) -> &'static str {
    chart.label()
}

fn column_noun(count: &usize) -> &'static str {
    if *count == 1 { "columna" } else { "columnas" }
}

/// Returns every rule the draft breaks. An empty list means the widget is accepted.
pub fn validate_widget(draft: &WidgetDraft, columns: &[ColumnAnalysis]) -> Vec<WidgetIssue> {
    let Some(chart) = draft.chart_type else {
        return vec![WidgetIssue::MissingChartType];
    };

    if draft.columns.is_empty() {
        let mut issues = vec![WidgetIssue::NoColumns];
        issues.extend(aggregation_issue(chart, draft.aggregation));
        return issues;
    }

    let mut issues = Vec::new();

    if !chart.arity().accepts(draft.columns.len()) {
        if let Some(expected) = chart.arity().max() {
            issues.push(WidgetIssue::WrongColumnCount { chart, expected });
        }
    }

    let type_of = |name: &str| lookup(columns, name).map(|c| c.column_type);

    match chart {
        ChartType::Kpi => {
            let first = &draft.columns[0];
            if type_of(first) != Some(ColumnType::Number) {
                issues.push(WidgetIssue::NotNumeric(first.clone()));
            }
        }
        ChartType::Bar | ChartType::Line | ChartType::Area => {
            let first = &draft.columns[0];
            if !matches!(type_of(first), Some(ColumnType::Text | ColumnType::Date)) {
                issues.push(WidgetIssue::NotCategory(first.clone()));
            }
            match draft.columns.get(1) {
                Some(second) if type_of(second) != Some(ColumnType::Number) => {
                    issues.push(WidgetIssue::NotNumeric(second.clone()));
                }
                Some(_) => {}
                None => issues.push(WidgetIssue::MissingValueColumn),
            }
        }
        ChartType::Pie => {
            let first = &draft.columns[0];
            match lookup(columns, first) {
                Some(analysis) if analysis.column_type == ColumnType::Text => {
                    if let Some(unique) = analysis.unique_count.filter(|u| *u > MAX_PIE_CATEGORIES) {
                        issues.push(WidgetIssue::TooManyCategories {
                            column: first.clone(),
                            unique,
                        });
                    }
                }
                _ => issues.push(WidgetIssue::NotText(first.clone())),
            }
        }
        ChartType::Table => {}
    }

    issues.extend(aggregation_issue(chart, draft.aggregation));
    issues
}

fn aggregation_issue(chart: ChartType, aggregation: Option<Aggregation>) -> Option<WidgetIssue> {
    match (chart, aggregation) {
        (ChartType::Table, Some(_)) => Some(WidgetIssue::TableWithAggregation),
        (ChartType::Table, None) => None,
        (ChartType::Pie, Some(Aggregation::Count)) => None,
        (ChartType::Pie, _) => Some(WidgetIssue::PieRequiresCount),
        (_, None) => Some(WidgetIssue::MissingAggregation),
        (_, Some(_)) => None,
    }
}

fn lookup<'a>(columns: &'a [ColumnAnalysis], name: &str) -> Option<&'a ColumnAnalysis> {
    columns.iter().find(|c| c.column_name == name)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn analysis(name: &str, column_type: ColumnType, unique: Option<u64>) -> ColumnAnalysis {
        ColumnAnalysis {
            column_name: name.to_string(),
            column_type,
            total_count: 100,
            non_null_count: 100,
            null_count: 0,
            null_percentage: 0.0,
            unique_count: unique,
            is_categorical: unique.is_some(),
            sample_values: Vec::new(),
            min: None,
            max: None,
            avg: None,
            sum: None,
        }
    }

    pub(crate) fn sample_columns() -> Vec<ColumnAnalysis> {
        vec![
            analysis("Region", ColumnType::Text, Some(4)),
            analysis("Fecha", ColumnType::Date, None),
            analysis("Total", ColumnType::Number, None),
            analysis("Cantidad", ColumnType::Number, None),
            analysis("Cliente", ColumnType::Text, Some(250)),
            analysis("Activo", ColumnType::Boolean, None),
        ]
    }

    fn draft(chart: ChartType, columns: &[&str], aggregation: Option<Aggregation>) -> WidgetDraft {
        WidgetDraft {
            position: 1,
            chart_type: Some(chart),
            title: String::new(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            aggregation,
        }
    }

    #[test]
    fn valid_configurations_have_no_issues() {
        let cols = sample_columns();
        let valid = [
            draft(ChartType::Kpi, &["Total"], Some(Aggregation::Sum)),
            draft(ChartType::Bar, &["Region", "Total"], Some(Aggregation::Avg)),
            draft(ChartType::Line, &["Fecha", "Cantidad"], Some(Aggregation::Max)),
            draft(ChartType::Area, &["Fecha", "Total"], Some(Aggregation::Min)),
            draft(ChartType::Pie, &["Region"], Some(Aggregation::Count)),
            draft(ChartType::Table, &["Region", "Activo", "Total"], None),
        ];
        for d in &valid {
            let issues = validate_widget(d, &cols);
            assert!(issues.is_empty(), "{:?}: {:?}", d.chart_type, issues);
        }
    }

    #[test]
    fn kpi_rules() {
        let cols = sample_columns();
        assert_eq!(
            validate_widget(&draft(ChartType::Kpi, &["Region"], None), &cols),
            vec![WidgetIssue::NotNumeric("Region".into()), WidgetIssue::MissingAggregation]
        );
        assert_eq!(
            validate_widget(&draft(ChartType::Kpi, &["Total", "Cantidad"], Some(Aggregation::Sum)), &cols),
            vec![WidgetIssue::WrongColumnCount {
                chart: ChartType::Kpi,
                expected: 1
            }]
        );
    }

    #[test]
    fn series_rules_depend_on_pick_order() {
        let cols = sample_columns();
        let reversed = draft(ChartType::Bar, &["Total", "Region"], Some(Aggregation::Sum));
        assert_eq!(
            validate_widget(&reversed, &cols),
            vec![WidgetIssue::NotCategory("Total".into()), WidgetIssue::NotNumeric("Region".into())]
        );

        let single = draft(ChartType::Line, &["Fecha"], Some(Aggregation::Sum));
        assert_eq!(
            validate_widget(&single, &cols),
            vec![
                WidgetIssue::WrongColumnCount {
                    chart: ChartType::Line,
                    expected: 2
                },
                WidgetIssue::MissingValueColumn
            ]
        );
    }

    #[test]
    fn pie_boundary_at_ten_categories() {
        let mut cols = sample_columns();
        cols.push(analysis("Diez", ColumnType::Text, Some(10)));
        cols.push(analysis("Once", ColumnType::Text, Some(11)));

        let ten = draft(ChartType::Pie, &["Diez"], Some(Aggregation::Count));
        assert!(validate_widget(&ten, &cols).is_empty());

        let eleven = draft(ChartType::Pie, &["Once"], Some(Aggregation::Count));
        assert_eq!(
            validate_widget(&eleven, &cols),
            vec![WidgetIssue::TooManyCategories {
                column: "Once".into(),
                unique: 11
            }]
        );
    }

    #[test]
    fn pie_requires_text_and_count() {
        let cols = sample_columns();
        let pie = draft(ChartType::Pie, &["Total"], Some(Aggregation::Sum));
        assert_eq!(
            validate_widget(&pie, &cols),
            vec![WidgetIssue::NotText("Total".into()), WidgetIssue::PieRequiresCount]
        );
    }

    #[test]
    fn pie_with_unknown_cardinality_is_accepted() {
        let cols = vec![analysis("Libre", ColumnType::Text, None)];
        let pie = draft(ChartType::Pie, &["Libre"], Some(Aggregation::Count));
        assert!(validate_widget(&pie, &cols).is_empty());
    }

    #[test]
    fn table_rejects_aggregation_and_empty_columns() {
        let cols = sample_columns();
        assert_eq!(
            validate_widget(&draft(ChartType::Table, &["Region"], Some(Aggregation::Count)), &cols),
            vec![WidgetIssue::TableWithAggregation]
        );
        assert_eq!(
            validate_widget(&draft(ChartType::Table, &[], None), &cols),
            vec![WidgetIssue::NoColumns]
        );
        // Columns absent from the analysis carry no constraint for tables.
        assert!(validate_widget(&draft(ChartType::Table, &["Desconocida"], None), &cols).is_empty());
    }

    #[test]
    fn unknown_columns_fail_typed_kinds() {
        let cols = sample_columns();
        assert_eq!(
            validate_widget(&draft(ChartType::Kpi, &["Fantasma"], Some(Aggregation::Sum)), &cols),
            vec![WidgetIssue::NotNumeric("Fantasma".into())]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let cols = sample_columns();
        let d = draft(ChartType::Bar, &["Total"], None);
        let first = validate_widget(&d, &cols);
        let second = validate_widget(&d, &cols);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn empty_draft_asks_for_a_chart_type() {
        let d = WidgetDraft::empty(3);
        assert_eq!(validate_widget(&d, &sample_columns()), vec![WidgetIssue::MissingChartType]);
    }

    #[test]
    fn messages_are_human_readable() {
        let issue = WidgetIssue::WrongColumnCount {
            chart: ChartType::Bar,
            expected: 2,
        };
        assert_eq!(issue.to_string(), "Barras requiere exactamente 2 columnas");
        let issue = WidgetIssue::WrongColumnCount {
            chart: ChartType::Kpi,
            expected: 1,
        };
        assert_eq!(issue.to_string(), "KPI requiere exactamente 1 columna");
    }
}
