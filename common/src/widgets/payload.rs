//! Decoding of server-computed widget data into one variant per chart kind.
//!
//! The dashboard data endpoint returns `data` as loosely shaped JSON. Each
//! widget is decoded here once, at the API boundary, so renderers only ever
//! see a [`WidgetPayload`]. A widget that fails to decode keeps its position
//! and title and carries a [`PayloadError`] for the error card.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::dashboard::{ChartType, DashboardDataRaw, RawWidgetData};
use crate::model::data_file::cell_label;

/// One category/value pair of a bar, line, area or pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiData {
    pub value: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetPayload {
    Kpi(KpiData),
    Bar(Vec<SeriesPoint>),
    Line(Vec<SeriesPoint>),
    Area(Vec<SeriesPoint>),
    Pie(Vec<SeriesPoint>),
    Table(TableData),
}

impl WidgetPayload {
    pub fn chart_type(&self) -> ChartType {
        match self {
            WidgetPayload::Kpi(_) => ChartType::Kpi,
            WidgetPayload::Bar(_) => ChartType::Bar,
            WidgetPayload::Line(_) => ChartType::Line,
            WidgetPayload::Area(_) => ChartType::Area,
            WidgetPayload::Pie(_) => ChartType::Pie,
            WidgetPayload::Table(_) => ChartType::Table,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("No se recibieron datos para este widget")]
    MissingData,

    #[error("Tipo de gráfico no soportado: {0}")]
    Unsupported(String),

    #[error("El valor del KPI falta o no es numérico")]
    InvalidKpiValue,

    #[error("Los datos del gráfico tienen una estructura inválida (se esperan 'labels' y 'data')")]
    InvalidSeries,

    #[error("Las etiquetas ({labels}) y los datos ({data}) no coinciden en cantidad")]
    LengthMismatch { labels: usize, data: usize },

    #[error("El dato en la posición {index} no es numérico")]
    NonNumeric { index: usize },

    #[error("Los datos de la tabla tienen una estructura inválida (se esperan 'columns' y 'rows')")]
    InvalidTable,

    #[error("La tabla no tiene columnas definidas")]
    NoTableColumns,
}

/// A widget of the dashboard data response after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWidget {
    pub position: u8,
    pub title: String,
    pub payload: Result<WidgetPayload, PayloadError>,
}

impl DecodedWidget {
    pub fn decode(raw: &RawWidgetData) -> Self {
        Self {
            position: raw.position,
            title: raw.title.clone(),
            payload: decode_payload(&raw.chart_type, raw.data.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub dashboard_id: String,
    pub name: String,
    pub layout_type: String,
    pub widgets: Vec<DecodedWidget>,
}

impl From<DashboardDataRaw> for DashboardView {
    fn from(raw: DashboardDataRaw) -> Self {
        let widgets = raw.widgets.iter().map(DecodedWidget::decode).collect();
        Self {
            dashboard_id: raw.dashboard_id,
            name: raw.name,
            layout_type: raw.layout_type,
            widgets,
        }
    }
}

pub fn decode_payload(chart_type: &str, data: Option<&Value>) -> Result<WidgetPayload, PayloadError> {
    let chart = ChartType::parse(chart_type).ok_or_else(|| PayloadError::Unsupported(chart_type.to_string()))?;
    let data = match data {
        None | Some(Value::Null) => return Err(PayloadError::MissingData),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(match chart {
                ChartType::Kpi => PayloadError::InvalidKpiValue,
                ChartType::Table => PayloadError::InvalidTable,
                _ => PayloadError::InvalidSeries,
            });
        }
    };

    match chart {
        ChartType::Kpi => decode_kpi(data).map(WidgetPayload::Kpi),
        ChartType::Bar => decode_series(data).map(WidgetPayload::Bar),
        ChartType::Line => decode_series(data).map(WidgetPayload::Line),
        ChartType::Area => decode_series(data).map(WidgetPayload::Area),
        ChartType::Pie => decode_series(data).map(WidgetPayload::Pie),
        ChartType::Table => decode_table(data).map(WidgetPayload::Table),
    }
}

fn decode_kpi(data: &Map<String, Value>) -> Result<KpiData, PayloadError> {
    let value = data
        .get("value")
        .and_then(Value::as_f64)
        .ok_or(PayloadError::InvalidKpiValue)?;
    let label = data
        .get("label")
        .and_then(Value::as_str)
        .filter(|l| !l.is_empty())
        .map(str::to_string);
    Ok(KpiData { value, label })
}

fn decode_series(data: &Map<String, Value>) -> Result<Vec<SeriesPoint>, PayloadError> {
    let (Some(Value::Array(labels)), Some(Value::Array(values))) = (data.get("labels"), data.get("data")) else {
        return Err(PayloadError::InvalidSeries);
    };
    if labels.len() != values.len() {
        return Err(PayloadError::LengthMismatch {
            labels: labels.len(),
            data: values.len(),
        });
    }

    labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (label, value))| {
            let value = value.as_f64().ok_or(PayloadError::NonNumeric { index })?;
            Ok(SeriesPoint {
                label: cell_label(Some(label)),
                value,
            })
        })
        .collect()
}

fn decode_table(data: &Map<String, Value>) -> Result<TableData, PayloadError> {
    let (Some(Value::Array(columns)), Some(Value::Array(rows))) = (data.get("columns"), data.get("rows")) else {
        return Err(PayloadError::InvalidTable);
    };
    if columns.is_empty() {
        return Err(PayloadError::NoTableColumns);
    }

    let columns: Vec<String> = columns.iter().map(|c| cell_label(Some(c))).collect();
    let rows = rows
        .iter()
        .map(|row| match row {
            Value::Array(cells) => Ok(cells.clone()),
            _ => Err(PayloadError::InvalidTable),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TableData { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kpi_decodes_value_and_label() {
        let payload = decode_payload("kpi", Some(&json!({"value": 1234.5, "label": "sum de Total"}))).unwrap();
        assert_eq!(
            payload,
            WidgetPayload::Kpi(KpiData {
                value: 1234.5,
                label: Some("sum de Total".into())
            })
        );
        assert_eq!(
            decode_payload("kpi", Some(&json!({"value": null}))),
            Err(PayloadError::InvalidKpiValue)
        );
    }

    #[test]
    fn length_mismatch_is_an_error_not_a_panic() {
        let result = decode_payload("bar", Some(&json!({"labels": ["a", "b"], "data": [1]})));
        let err = result.unwrap_err();
        assert_eq!(err, PayloadError::LengthMismatch { labels: 2, data: 1 });
        assert_eq!(err.to_string(), "Las etiquetas (2) y los datos (1) no coinciden en cantidad");
    }

    #[test]
    fn series_variants_follow_the_chart_kind() {
        let data = json!({"labels": ["Norte", 2024], "data": [10, 2.5]});
        let points = vec![
            SeriesPoint {
                label: "Norte".into(),
                value: 10.0,
            },
            SeriesPoint {
                label: "2024".into(),
                value: 2.5,
            },
        ];
        assert_eq!(decode_payload("line", Some(&data)), Ok(WidgetPayload::Line(points.clone())));
        assert_eq!(decode_payload("pie", Some(&data)), Ok(WidgetPayload::Pie(points)));
    }

    #[test]
    fn series_rejects_null_values_and_missing_arrays() {
        assert_eq!(
            decode_payload("area", Some(&json!({"labels": ["a", "b"], "data": [1, null]}))),
            Err(PayloadError::NonNumeric { index: 1 })
        );
        assert_eq!(
            decode_payload("bar", Some(&json!({"labels": "a", "data": [1]}))),
            Err(PayloadError::InvalidSeries)
        );
        assert_eq!(decode_payload("bar", Some(&json!([1, 2]))), Err(PayloadError::InvalidSeries));
    }

    #[test]
    fn table_keeps_rows_positional() {
        let payload = decode_payload(
            "table",
            Some(&json!({"columns": ["Region", "Activo"], "rows": [["Norte", true], ["Sur", null]]})),
        )
        .unwrap();
        let WidgetPayload::Table(table) = payload else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, ["Region", "Activo"]);
        assert_eq!(table.rows[1], vec![json!("Sur"), Value::Null]);

        assert_eq!(
            decode_payload("table", Some(&json!({"columns": [], "rows": []}))),
            Err(PayloadError::NoTableColumns)
        );
        assert_eq!(
            decode_payload("table", Some(&json!({"columns": ["a"], "rows": [{"a": 1}]}))),
            Err(PayloadError::InvalidTable)
        );
    }

    #[test]
    fn missing_data_and_unknown_kinds() {
        assert_eq!(decode_payload("bar", None), Err(PayloadError::MissingData));
        assert_eq!(decode_payload("kpi", Some(&Value::Null)), Err(PayloadError::MissingData));
        assert_eq!(
            decode_payload("radar", Some(&json!({}))),
            Err(PayloadError::Unsupported("radar".into()))
        );
    }

    #[test]
    fn one_bad_widget_does_not_affect_the_others() {
        let raw: DashboardDataRaw = serde_json::from_value(json!({
            "dashboard_id": "d1",
            "name": "Ventas",
            "layout_type": "grid_3_1_2",
            "widgets": [
                {"position": 1, "chart_type": "kpi", "title": "Total", "data": {"value": 5}},
                {"position": 4, "chart_type": "bar", "title": "Roto", "data": {"labels": ["a", "b"], "data": [1]}},
                {"position": 6, "chart_type": "table", "title": "Detalle", "data": {"columns": ["a"], "rows": []}}
            ]
        }))
        .unwrap();

        let view = DashboardView::from(raw);
        assert_eq!(view.widgets.len(), 3);
        assert!(view.widgets[0].payload.is_ok());
        assert_eq!(view.widgets[1].position, 4);
        assert_eq!(view.widgets[1].title, "Roto");
        assert!(view.widgets[1].payload.is_err());
        assert_eq!(
            view.widgets[2].payload.as_ref().map(WidgetPayload::chart_type),
            Ok(ChartType::Table)
        );
    }
}
