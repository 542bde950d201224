//! Widget data decoding and the pure parts of widget rendering.

pub mod chart;
pub mod format;
pub mod payload;
pub mod table;
