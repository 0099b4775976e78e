//! Entity record storage under a data root.
//!
//! Records are one pretty-printed JSON document per entity:
//!
//! ```text
//! <root>/player/<id>.json
//! <root>/account/<id>.json
//! ```
//!
//! Entity files are always JSON; the format negotiation of [`crate::file`] does
//! not apply here.

mod kind;
mod store;

pub use kind::{EntityKind, EntityRef};
pub use store::RecordStore;
