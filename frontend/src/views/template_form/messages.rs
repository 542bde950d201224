use common::error::ApiError;
use common::model::template::{ColumnType, Template};

pub enum Msg {
    Load,
    Loaded(Result<Template, ApiError>),
    SetName(String),
    SetColumnName(String),
    SetColumnType(ColumnType),
    AddColumn,
    RemoveColumn(usize),
    Save,
    Saved(Result<Template, ApiError>),
}
