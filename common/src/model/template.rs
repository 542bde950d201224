use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declared type of a template column.
///
/// The same vocabulary is used by the data analysis endpoint for the
/// detected type of each uploaded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Date,
    Boolean,
    Email,
    #[serde(other)]
    Other,
}

impl ColumnType {
    /// Types offered by the template builder, in display order.
    pub const SELECTABLE: [ColumnType; 5] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Date,
        ColumnType::Boolean,
        ColumnType::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Email => "email",
            ColumnType::Other => "other",
        }
    }

    /// Spanish label shown in badges and selectors.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Text => "Texto",
            ColumnType::Number => "Número",
            ColumnType::Date => "Fecha",
            ColumnType::Boolean => "Sí/No",
            ColumnType::Email => "Email",
            ColumnType::Other => "Otro",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "text" => ColumnType::Text,
            "number" => ColumnType::Number,
            "date" => ColumnType::Date,
            "boolean" => ColumnType::Boolean,
            "email" => ColumnType::Email,
            _ => ColumnType::Other,
        }
    }
}

/// Ordered mapping of column name to declared type.
///
/// Serialized as a JSON object whose key order follows insertion order, so
/// the column order chosen in the builder survives a round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap(Vec<(String, ColumnType)>);

impl ColumnMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or replaces a column. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, column_type: ColumnType) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = column_type,
            None => self.0.push((name, column_type)),
        }
    }

    pub fn get(&self, name: &str) -> Option<ColumnType> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, t)| *t)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.0.iter().map(|(n, t)| (n.as_str(), *t))
    }
}

impl FromIterator<(String, ColumnType)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (String, ColumnType)>>(iter: I) -> Self {
        let mut map = ColumnMap::new();
        for (name, column_type) in iter {
            map.insert(name, column_type);
        }
        map
    }
}

impl Serialize for ColumnMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, column_type) in &self.0 {
            map.serialize_entry(name, column_type)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnMapVisitor;

        impl<'de> Visitor<'de> for ColumnMapVisitor {
            type Value = ColumnMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping column names to column types")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColumnMap, A::Error> {
                let mut columns = ColumnMap::new();
                while let Some((name, column_type)) = access.next_entry::<String, ColumnType>()? {
                    columns.insert(name, column_type);
                }
                Ok(columns)
            }
        }

        deserializer.deserialize_map(ColumnMapVisitor)
    }
}

/// A user-defined schema that uploaded files are validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    pub columns: ColumnMap,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_map_keeps_server_order() {
        let json = r#"{"Name":"text","Age":"number","Joined":"date"}"#;
        let columns: ColumnMap = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = columns.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Name", "Age", "Joined"]);
        assert_eq!(serde_json::to_string(&columns).unwrap(), json);
    }

    #[test]
    fn unknown_column_types_are_tolerated() {
        let columns: ColumnMap = serde_json::from_str(r#"{"Blob":"binary"}"#).unwrap();
        assert_eq!(columns.get("Blob"), Some(ColumnType::Other));
    }

    #[test]
    fn template_accepts_mongo_id() {
        let json = r#"{"_id":"t1","user_id":"u1","name":"Ventas","columns":{"Age":"number"},
                      "created_at":"2024-01-01T10:00:00","updated_at":"2024-01-01T10:00:00"}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, "t1");
        assert_eq!(template.columns.get("Age"), Some(ColumnType::Number));
    }
}
