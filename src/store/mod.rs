//! Persistence collaborator and the service that drives the lifecycle
//! engine against it

mod backend;
mod clock;
mod service;

pub use backend::{ItemStore, JsonFileStore, MemoryStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use service::{DetailsPatch, ItemService, NewItem, TransitionRequest};
