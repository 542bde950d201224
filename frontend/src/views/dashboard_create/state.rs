use common::model::data_file::{ColumnAnalysis, DataFileDetail};
use common::status::LoadState;
use common::workspace::{SubmitError, Workspace};

pub struct DashboardCreate {
    /// File the dashboard is built over, from `?data_id=`.
    pub data_id: Option<String>,
    pub analysis: LoadState<DataFileDetail>,
    pub workspace: Workspace,
    pub name: String,
    pub saving: bool,
    /// Outcome of the last save attempt that failed locally.
    pub submit_error: Option<SubmitError>,
}

impl DashboardCreate {
    pub fn new(data_id: Option<String>) -> Self {
        Self {
            data_id,
            analysis: LoadState::Loading,
            workspace: Workspace::new(),
            name: String::new(),
            saving: false,
            submit_error: None,
        }
    }

    pub fn columns(&self) -> &[ColumnAnalysis] {
        self.analysis
            .ready()
            .map(|a| a.column_analyses.as_slice())
            .unwrap_or_default()
    }
}
