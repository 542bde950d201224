use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::dashboard::{Aggregation, ChartType};
use crate::model::template::ColumnType;

/// One uploaded file as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    pub data_id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    pub name: String,
    pub num_rows: u64,
    pub num_columns: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub created_at: String,
}

/// Analysis of an uploaded file: per-column profile plus chart suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFileDetail {
    pub data_id: String,
    pub template_id: String,
    #[serde(default)]
    pub name: String,
    pub num_rows: u64,
    pub num_columns: u64,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub column_analyses: Vec<ColumnAnalysis>,
    #[serde(default)]
    pub visualization_suggestions: Vec<VisualizationSuggestion>,
}

impl DataFileDetail {
    pub fn column(&self, name: &str) -> Option<&ColumnAnalysis> {
        self.column_analyses.iter().find(|c| c.column_name == name)
    }

    /// Suggestions ordered by priority, 1 first. Ties keep server order.
    pub fn ranked_suggestions(&self) -> Vec<&VisualizationSuggestion> {
        let mut ranked: Vec<&VisualizationSuggestion> = self.visualization_suggestions.iter().collect();
        ranked.sort_by_key(|s| s.priority);
        ranked
    }
}

/// Statistical profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    pub column_name: String,
    pub column_type: ColumnType,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub non_null_count: u64,
    #[serde(default)]
    pub null_count: u64,
    #[serde(default)]
    pub null_percentage: f64,
    #[serde(default)]
    pub unique_count: Option<u64>,
    #[serde(default)]
    pub is_categorical: bool,
    #[serde(default)]
    pub sample_values: Vec<Value>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub sum: Option<f64>,
}

impl ColumnAnalysis {
    pub fn is_numeric(&self) -> bool {
        self.column_type == ColumnType::Number
    }

    /// Sample values rendered as plain strings (JSON strings unquoted).
    pub fn sample_labels(&self) -> Vec<String> {
        self.sample_values.iter().map(value_to_label).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSuggestion {
    pub chart_type: ChartType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub aggregation: Option<Aggregation>,
    #[serde(default)]
    pub priority: u32,
}

/// First rows of an uploaded file, keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPreview {
    #[serde(default)]
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
    #[serde(default)]
    pub num_rows: u64,
    #[serde(default)]
    pub preview_rows: u64,
}

/// Acknowledgement of `POST /api/data/upload`. Only the id is relied upon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub data_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Cell text used by tabular views: null or missing becomes `-`.
pub fn cell_label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(v) => value_to_label(v),
    }
}

fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail() -> DataFileDetail {
        serde_json::from_value(json!({
            "data_id": "d1",
            "template_id": "t1",
            "name": "ventas.csv",
            "num_rows": 120,
            "num_columns": 2,
            "column_analyses": [
                {"column_name": "Region", "column_type": "text", "unique_count": 4,
                 "is_categorical": true, "sample_values": ["Norte", "Sur"]},
                {"column_name": "Total", "column_type": "number", "min": 1.0, "max": 90.5,
                 "avg": 20.0, "sum": 2400.0, "null_count": 3, "null_percentage": 2.5}
            ],
            "visualization_suggestions": [
                {"chart_type": "bar", "title": "B", "columns": ["Region", "Total"], "aggregation": "sum", "priority": 2},
                {"chart_type": "kpi", "title": "K", "columns": ["Total"], "aggregation": "sum", "priority": 1}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn detail_decodes_profiles() {
        let detail = detail();
        let total = detail.column("Total").unwrap();
        assert!(total.is_numeric());
        assert_eq!(total.max, Some(90.5));
        assert_eq!(detail.column("Region").unwrap().sample_labels(), ["Norte", "Sur"]);
        assert!(detail.column("Missing").is_none());
    }

    #[test]
    fn suggestions_are_ranked_by_priority() {
        let detail = detail();
        let titles: Vec<&str> = detail.ranked_suggestions().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["K", "B"]);
    }

    #[test]
    fn upload_receipt_tolerates_extra_fields() {
        let receipt: UploadReceipt =
            serde_json::from_value(json!({"data_id": "d9", "num_rows": 10, "message": "ok"})).unwrap();
        assert_eq!(receipt.data_id.as_deref(), Some("d9"));
        let empty: UploadReceipt = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, UploadReceipt::default());
    }

    #[test]
    fn cell_labels() {
        assert_eq!(cell_label(None), "-");
        assert_eq!(cell_label(Some(&Value::Null)), "-");
        assert_eq!(cell_label(Some(&json!("a"))), "a");
        assert_eq!(cell_label(Some(&json!(3.5))), "3.5");
        assert_eq!(cell_label(Some(&json!(true))), "true");
    }
}
