use common::forms::ColumnBuilder;
use common::model::template::ColumnType;
use common::status::LoadState;

pub struct TemplateForm {
    /// `Ready(())` once there is something to edit; a new template is ready at once.
    pub loaded: LoadState<()>,
    pub editing: bool,
    pub name: String,
    pub columns: ColumnBuilder,
    pub column_name: String,
    pub column_type: ColumnType,
    /// Inline message under the column inputs.
    pub column_error: Option<String>,
    /// Inline message above the save button.
    pub form_error: Option<String>,
    pub saving: bool,
}

impl TemplateForm {
    pub fn new(editing: bool) -> Self {
        Self {
            loaded: if editing { LoadState::Loading } else { LoadState::Ready(()) },
            editing,
            name: String::new(),
            columns: ColumnBuilder::new(),
            column_name: String::new(),
            column_type: ColumnType::Text,
            column_error: None,
            form_error: None,
            saving: false,
        }
    }
}
