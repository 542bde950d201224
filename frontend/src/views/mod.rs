//! One module per route.

pub mod dashboard_create;
pub mod dashboard_detail;
pub mod dashboards;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
pub mod table;
pub mod table_manager;
pub mod template_detail;
pub mod template_form;
pub mod templates;
pub mod upload;
pub mod upload_detail;
pub mod upload_preview;
