//! Dashboard document transformation
//!
//! Documents are treated as opaque JSON trees; the only transformation
//! applied is [`strip_volatile_fields`].

pub mod strip;

pub use strip::{strip_volatile_fields, VOLATILE_FIELDS};
