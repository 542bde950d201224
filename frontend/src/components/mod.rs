pub mod shell;
pub mod top_sheet;
pub mod upload_dialog;
pub mod widgets;
pub mod workspace_grid;
