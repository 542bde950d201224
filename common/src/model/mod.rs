pub mod dashboard;
pub mod data_file;
pub mod template;
pub mod user;
