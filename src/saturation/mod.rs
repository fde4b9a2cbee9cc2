//! Resolution saturation: clause ids, the clause store, resolvent
//! construction and the main loop.

mod context;
mod engine;
mod resolvent;
mod store;

pub use context::GenerationContext;
pub use engine::{ClauseLimit, Outcome, Saturation};
pub use resolvent::{build_resolvent, self_resolve, Renamer};
pub use store::ClauseStore;
