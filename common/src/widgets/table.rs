use serde_json::Value;

use crate::model::data_file::cell_label;

/// The data endpoint caps table widgets at this many rows.
pub const TABLE_ROW_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    /// Rendered as a `Sí`/`No` badge.
    Flag(bool),
    Text(String),
}

impl CellDisplay {
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(b)) => CellDisplay::Flag(*b),
            other => CellDisplay::Text(cell_label(other)),
        }
    }

    pub fn text(&self) -> String {
        match self {
            CellDisplay::Flag(true) => "Sí".to_string(),
            CellDisplay::Flag(false) => "No".to_string(),
            CellDisplay::Text(t) => t.clone(),
        }
    }
}

/// Row-count badge: `1 fila`, `3 filas`.
pub fn row_count_label(rows: usize) -> String {
    if rows == 1 {
        "1 fila".to_string()
    } else {
        format!("{} filas", rows)
    }
}

/// Whether the server truncated the rows to the limit.
pub fn is_limited(rows: usize) -> bool {
    rows == TABLE_ROW_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells() {
        assert_eq!(CellDisplay::of(Some(&json!(true))).text(), "Sí");
        assert_eq!(CellDisplay::of(Some(&json!(false))), CellDisplay::Flag(false));
        assert_eq!(CellDisplay::of(Some(&Value::Null)).text(), "-");
        assert_eq!(CellDisplay::of(None).text(), "-");
        assert_eq!(CellDisplay::of(Some(&json!(12))).text(), "12");
    }

    #[test]
    fn badges() {
        assert_eq!(row_count_label(0), "0 filas");
        assert_eq!(row_count_label(1), "1 fila");
        assert_eq!(row_count_label(42), "42 filas");
        assert!(is_limited(100));
        assert!(!is_limited(99));
    }
}
