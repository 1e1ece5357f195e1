//! Core data structures for killer sudoku cage arithmetic.
//!
//! This crate provides the fundamental types shared by the cage combination
//! solver and the interactive calculator application.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Core types** - Fundamental domain types
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9, and the
//!      [`HOUSE_SUM`] domain constant (digits 1-9 sum to 45)
//!
//! 2. **Index semantics** - Define how values map to indices in containers
//!    - [`index`]: [`Index9`] and semantics types such as [`DigitSemantics`]
//!      that map digits 1-9 to internal indices 0-8
//!
//! 3. **Generic containers** - Containers parameterized by semantics
//!    - [`containers`]: [`BitSet9`] (a 9-bit set with named membership
//!      operations) and [`Array9`] (a 9-element array indexed by semantic
//!      values)
//!    - [`digit_set`]: [`DigitSet`], the specialization of [`BitSet9`] used
//!      for cage exclusion masks
//!
//! [`Index9`]: index::Index9
//! [`DigitSemantics`]: index::DigitSemantics
//! [`BitSet9`]: containers::BitSet9
//! [`Array9`]: containers::Array9
//!
//! # Examples
//!
//! ```
//! use cagelace_core::{Digit, DigitSet};
//!
//! // Digits 4 and 7 are already placed in the cage's row,
//! // so they cannot appear in the cage.
//! let mut excluded = DigitSet::new();
//! excluded.insert(Digit::D4);
//! excluded.insert(Digit::D7);
//!
//! assert!(excluded.contains(Digit::D4));
//! assert!(!excluded.contains(Digit::D1));
//! ```

pub mod containers;
pub mod digit;
pub mod digit_set;
pub mod index;

// Re-export commonly used types
pub use self::{
    digit::{Digit, HOUSE_SUM},
    digit_set::DigitSet,
};
