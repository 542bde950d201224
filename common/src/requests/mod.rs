//! Request payloads and endpoint paths of the remote API.
//!
//! Paths are relative to [`crate::config::ClientConfig::api_base_url`].

use serde::Serialize;

use crate::model::dashboard::Widget;
use crate::model::template::ColumnMap;

/// Login credentials. Sent form-encoded, not as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// `application/x-www-form-urlencoded` body.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of template create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePayload {
    pub name: String,
    pub columns: ColumnMap,
}

/// Single atomic dashboard creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDashboardPayload {
    pub template_id: String,
    pub data_id: String,
    pub name: String,
    pub widgets: Vec<Widget>,
}

pub mod endpoints {
    pub const LOGIN: &str = "/api/auth/login";
    pub const REGISTER: &str = "/api/auth/register";
    pub const ME: &str = "/api/auth/me";
    pub const TEMPLATES: &str = "/api/templates/";
    pub const DATA: &str = "/api/data/";
    pub const DATA_UPLOAD: &str = "/api/data/upload";
    pub const DASHBOARDS: &str = "/api/dashboards/";

    pub fn template(id: &str) -> String {
        format!("/api/templates/{}", id)
    }

    pub fn template_download(id: &str) -> String {
        format!("/api/templates/{}/download", id)
    }

    pub fn data_analysis(id: &str) -> String {
        format!("/api/data/{}/analysis", id)
    }

    pub fn data_preview(id: &str, rows: usize) -> String {
        format!("/api/data/{}/preview?rows={}", id, rows)
    }

    pub fn dashboard_data(id: &str) -> String {
        format!("/api/dashboards/{}/data", id)
    }
}

/// Percent-encodes form fields as `application/x-www-form-urlencoded`.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => out.push(byte as char),
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dashboard::{Aggregation, ChartType};
    use crate::model::template::ColumnType;

    #[test]
    fn login_is_form_encoded() {
        let login = LoginRequest {
            username: "ana maría".into(),
            password: "p&ss=1".into(),
        };
        assert_eq!(encode_form(&login.form_fields()), "username=ana+mar%C3%ADa&password=p%26ss%3D1");
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::template("abc"), "/api/templates/abc");
        assert_eq!(endpoints::template_download("abc"), "/api/templates/abc/download");
        assert_eq!(endpoints::data_preview("d1", 30), "/api/data/d1/preview?rows=30");
        assert_eq!(endpoints::dashboard_data("x"), "/api/dashboards/x/data");
        assert_eq!(endpoints::data_analysis("d1"), "/api/data/d1/analysis");
    }

    #[test]
    fn dashboard_payload_shape() {
        let payload = CreateDashboardPayload {
            template_id: "t".into(),
            data_id: "d".into(),
            name: "Ventas".into(),
            widgets: vec![Widget {
                position: 1,
                chart_type: ChartType::Kpi,
                title: "Total".into(),
                columns: vec!["Total".into()],
                aggregation: Some(Aggregation::Sum),
                filters: None,
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["widgets"][0]["aggregation"], "sum");
        assert_eq!(json["widgets"][0]["position"], 1);
    }

    #[test]
    fn template_payload_keeps_column_order() {
        let mut columns = ColumnMap::new();
        columns.insert("Zeta", ColumnType::Text);
        columns.insert("Alfa", ColumnType::Number);
        let payload = TemplatePayload {
            name: "T".into(),
            columns,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"T","columns":{"Zeta":"text","Alfa":"number"}}"#
        );
    }
}
