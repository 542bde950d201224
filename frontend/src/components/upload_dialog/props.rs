use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadDialogProps {
    /// Whether the sheet is shown. Opening it reloads the templates and clears the form.
    pub open: bool,
    pub on_close: Callback<()>,
    /// Fired after the server accepts a file.
    pub on_uploaded: Callback<()>,
}
