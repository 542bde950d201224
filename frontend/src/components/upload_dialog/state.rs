use common::model::template::Template;
use common::status::LoadState;

pub struct UploadDialog {
    pub templates: LoadState<Vec<Template>>,
    pub template_id: Option<String>,
    pub file: Option<web_sys::File>,
    /// Why the chosen file was refused, shown under the input.
    pub file_error: Option<String>,
    pub uploading: bool,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self {
            templates: LoadState::Loading,
            template_id: None,
            file: None,
            file_error: None,
            uploading: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(|f| f.name())
    }
}
