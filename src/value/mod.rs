//! Row values and their text coercion
//!
//! A row value is whatever a source driver decoded for one column. Sinks that
//! need text share a single normalization rule, [`stringify`].
//!
//! # Invariants
//!
//! - Coercion is total: every value renders, nothing fails
//! - Coercion is deterministic: equal values render to equal text
//! - Coercion never consults the declared column type

mod stringify;
mod value;

pub use stringify::stringify;
pub use value::Value;
