//! Domain Layer
//!
//! The defaulting engine itself: no I/O, no configuration loading.
//!
//! ## Structure
//!
//! - `value_objects/` - Quantity, IntOrString, resource lists
//! - `entities/` - The typed API object model
//! - `object` - Object kinds and the schema table the walker follows
//! - `registry` - Per-kind ordered defaulting procedures
//! - `walker` - Depth-first graph walk that runs them
//! - `policies/` - The policy table and its registration

pub mod entities;
pub mod object;
pub mod policies;
pub mod registry;
pub mod value_objects;
pub mod walker;
