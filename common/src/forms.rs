//! Form state that is validated before anything is sent: the template column
//! builder shared by the create and edit views, and the signup form.

use thiserror::Error;

use crate::model::template::{ColumnMap, ColumnType, Template};
use crate::requests::{RegisterRequest, TemplatePayload};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    #[error("El nombre de la columna es requerido")]
    EmptyName,

    #[error("Ya existe una columna con ese nombre")]
    Duplicate,

    #[error("El nombre del template es requerido")]
    MissingTemplateName,

    #[error("Debes agregar al menos una columna")]
    NoColumns,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub name: String,
    pub column_type: ColumnType,
}

/// Ordered list of template columns under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnBuilder {
    columns: Vec<ColumnEntry>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing template, keeping the server's column order.
    pub fn from_template(template: &Template) -> Self {
        Self {
            columns: template
                .columns
                .iter()
                .map(|(name, column_type)| ColumnEntry {
                    name: name.to_string(),
                    column_type,
                })
                .collect(),
        }
    }

    pub fn columns(&self) -> &[ColumnEntry] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Appends a column. Names are trimmed and compared case-insensitively.
    pub fn add(&mut self, name: &str, column_type: ColumnType) -> Result<(), ColumnError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ColumnError::EmptyName);
        }
        let lowered = name.to_lowercase();
        if self.columns.iter().any(|c| c.name.to_lowercase() == lowered) {
            return Err(ColumnError::Duplicate);
        }
        self.columns.push(ColumnEntry {
            name: name.to_string(),
            column_type,
        });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.columns.len() {
            self.columns.remove(index);
        }
    }

    pub fn to_column_map(&self) -> ColumnMap {
        self.columns.iter().map(|c| (c.name.clone(), c.column_type)).collect()
    }

    /// Checks the whole form and builds the create/update body.
    pub fn payload(&self, template_name: &str) -> Result<TemplatePayload, ColumnError> {
        let name = template_name.trim();
        if name.is_empty() {
            return Err(ColumnError::MissingTemplateName);
        }
        if self.columns.is_empty() {
            return Err(ColumnError::NoColumns);
        }
        Ok(TemplatePayload {
            name: name.to_string(),
            columns: self.to_column_map(),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("El nombre de usuario es requerido")]
    MissingUsername,

    #[error("El correo electrónico es requerido")]
    MissingEmail,

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    #[error("La contraseña debe tener al menos 8 caracteres")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, SignupError> {
        if self.username.trim().is_empty() {
            return Err(SignupError::MissingUsername);
        }
        if self.email.trim().is_empty() {
            return Err(SignupError::MissingEmail);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_with(columns: &[(&str, ColumnType)]) -> Template {
        Template {
            id: "t1".into(),
            user_id: "u1".into(),
            name: "Clientes".into(),
            columns: columns.iter().map(|(n, t)| (n.to_string(), *t)).collect(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn add_trims_and_rejects_duplicates_case_insensitively() {
        let mut builder = ColumnBuilder::new();
        assert_eq!(builder.add("  Nombre ", ColumnType::Text), Ok(()));
        assert_eq!(builder.columns()[0].name, "Nombre");
        assert_eq!(builder.add("nombre", ColumnType::Number), Err(ColumnError::Duplicate));
        assert_eq!(builder.add("   ", ColumnType::Text), Err(ColumnError::EmptyName));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn editing_keeps_order_and_appends() {
        let template = template_with(&[("Age", ColumnType::Number), ("Name", ColumnType::Text)]);
        let mut builder = ColumnBuilder::from_template(&template);
        builder.add("Email", ColumnType::Email).unwrap();

        let payload = builder.payload("Clientes").unwrap();
        let entries: Vec<(&str, ColumnType)> = payload.columns.iter().collect();
        assert_eq!(
            entries,
            [
                ("Age", ColumnType::Number),
                ("Name", ColumnType::Text),
                ("Email", ColumnType::Email)
            ]
        );

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Clientes","columns":{"Age":"number","Name":"text","Email":"email"}}"#
        );
    }

    #[test]
    fn remove_by_index() {
        let mut builder = ColumnBuilder::new();
        builder.add("A", ColumnType::Text).unwrap();
        builder.add("B", ColumnType::Date).unwrap();
        builder.remove(0);
        builder.remove(5);
        assert_eq!(builder.columns()[0].name, "B");
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn payload_requires_name_and_columns() {
        let mut builder = ColumnBuilder::new();
        assert_eq!(builder.payload("X"), Err(ColumnError::NoColumns));
        builder.add("A", ColumnType::Boolean).unwrap();
        assert_eq!(builder.payload(" "), Err(ColumnError::MissingTemplateName));
        assert!(builder.payload("X").is_ok());
    }

    #[test]
    fn signup_rules() {
        let mut form = SignupForm {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "secreto123".into(),
            confirm_password: "secreto124".into(),
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));

        form.password = "corta".into();
        form.confirm_password = "corta".into();
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort));

        form.password = "12345678".into();
        form.confirm_password = "12345678".into();
        let request = form.validate().unwrap();
        assert_eq!(request.username, "ana");

        form.email = " ".into();
        assert_eq!(form.validate(), Err(SignupError::MissingEmail));
    }
}
