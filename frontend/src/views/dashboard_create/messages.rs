use common::error::ApiError;
use common::model::dashboard::{Aggregation, ChartType, Dashboard};
use common::model::data_file::DataFileDetail;

pub enum Msg {
    LoadAnalysis,
    AnalysisLoaded(Result<DataFileDetail, ApiError>),
    SetName(String),
    SelectSlot(u8),
    /// The remaining edits apply to the selected slot.
    SetChartType(ChartType),
    SetTitle(String),
    ToggleColumn(String),
    SetAggregation(Option<Aggregation>),
    /// Index into the ranked suggestions.
    ApplySuggestion(usize),
    ClearSlot,
    Save,
    Saved(Result<Dashboard, ApiError>),
}
