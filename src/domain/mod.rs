//! Domain logic for the complaint workflow: transition policy, lifecycle
//! engine and the timing model

mod invariants;
mod lifecycle;
mod policy;
mod timing;
mod validation;


pub use invariants::{check_collection, check_item};
pub use lifecycle::{add_comment, allocate, move_to, pick_up};
pub use policy::{
    allowed_targets, check_transition, initial_status, is_allowed, is_allowed_str, is_terminal,
};
pub use timing::{current_elapsed, has_open_session, span_ms, total_spent};
pub use validation::{active_item_for, ensure_actor_free, is_held_by, require_non_empty};
