//! A set of digits 1-9, used for cage exclusion masks.
//!
//! This module provides [`DigitSet`], a specialized instance of
//! [`BitSet9`] for representing sets of [`Digit`] values.
//!
//! The [`DigitSemantics`] type (defined in [`index`](crate::index))
//! implements [`Index9Semantics`](crate::index::Index9Semantics) to map
//! digits 1-9 to internal bit indices 0-8.
//!
//! # Examples
//!
//! ```
//! use cagelace_core::{Digit, DigitSet};
//!
//! let mut excluded = DigitSet::new();
//! excluded.insert(Digit::D1);
//! excluded.insert(Digit::D5);
//! excluded.insert(Digit::D9);
//!
//! assert_eq!(excluded.len(), 3);
//! assert!(excluded.contains(Digit::D5));
//! assert!(!excluded.contains(Digit::D2));
//!
//! excluded.remove(Digit::D5);
//! assert_eq!(excluded.len(), 2);
//! ```

#[cfg(doc)]
use crate::digit::Digit;
use crate::{containers::BitSet9, index::DigitSemantics};

/// A set of digits 1-9, represented as a 9-bit mask.
///
/// In cage arithmetic this is the *exclusion mask*: the set of digits that
/// cannot appear in a cage because they are already placed in the same row,
/// column, or box. The mask is immutable for the duration of one search.
///
/// # Examples
///
/// ```
/// use cagelace_core::{Digit, DigitSet};
///
/// // Start with every digit available, then rule some out
/// let mut available = DigitSet::FULL;
/// available.remove(Digit::D5);
/// available.remove(Digit::D7);
///
/// assert_eq!(available.len(), 7);
/// assert!(!available.contains(Digit::D5));
/// assert!(available.contains(Digit::D1));
/// ```
///
/// # Set Operations
///
/// ```
/// use cagelace_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// // Union
/// let union = a | b;
/// assert_eq!(
///     union,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4])
/// );
///
/// // Intersection
/// let intersection = a & b;
/// assert_eq!(intersection, DigitSet::from_iter([Digit::D2, Digit::D3]));
///
/// // Difference
/// let diff = a.difference(b);
/// assert_eq!(diff, DigitSet::from_iter([Digit::D1]));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;
