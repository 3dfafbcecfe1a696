//! Schema types for caseflow
//!
//! Field names match the JSON document the items have always been stored in.

mod config;
mod item;
mod status;

pub use config::Config;
pub use item::{Comment, Timestamp, WorkItem};
pub use status::Status;
