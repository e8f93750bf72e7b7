//! Task document construction.
//!
//! A task is built as a typed record tree (route → waypoints → actions) and
//! rendered to the wire shape in a separate, pure step. Construction never
//! fails; validation is the service's concern.

mod action;
mod document;
mod point;

pub use action::{ActionKind, ActionRecord};
pub use document::TaskBuilder;
pub use point::{Poi, TaskPoint};
