use common::error::ApiError;
use common::model::data_file::UploadReceipt;
use common::model::template::Template;

pub enum Msg {
    LoadTemplates,
    TemplatesLoaded(Result<Vec<Template>, ApiError>),
    SelectTemplate(String),
    /// The file input changed; `None` when the selection was cleared.
    FileChosen(Option<web_sys::File>),
    Submit,
    Uploaded(Result<UploadReceipt, ApiError>),
    Close,
}
