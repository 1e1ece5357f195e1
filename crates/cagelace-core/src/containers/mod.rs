//! Generic containers parameterized by index semantics.
//!
//! This module provides the generic 9-element containers used throughout the
//! cage calculator:
//!
//! - [`BitSet9`]: a 9-bit set with named membership operations
//! - [`Array9`]: a 9-element array indexed by semantic values
//!
//! Both are parameterized by an [`Index9Semantics`](crate::index::Index9Semantics)
//! type so that indexing by domain values (such as digits 1-9) is checked by
//! the type system rather than by raw bit arithmetic at each call site.

pub use self::{array_9::Array9, bit_set_9::BitSet9};

mod array_9;
mod bit_set_9;
