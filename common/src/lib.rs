//! Platform-independent core of the KeepDM client: API models and payloads,
//! session and routing policy, widget validation and the dashboard workspace,
//! and the pure half of every renderer.

pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod forms;
pub mod layout;
pub mod model;
pub mod preview;
pub mod requests;
pub mod routing;
pub mod session;
pub mod status;
pub mod theme;
pub mod upload;
pub mod validation;
pub mod widgets;
pub mod workspace;
