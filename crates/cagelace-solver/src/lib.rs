//! Cage combination search for killer sudoku.
//!
//! This crate enumerates the digit combinations that can fill a killer
//! sudoku cage: given a target sum, a number of free cells (spots), and a
//! mask of digits ruled out by the surrounding grid, [`search`](fn@search)
//! finds every admissible filling. A companion operation computes box-total
//! complements against the house sum.
//!
//! # Overview
//!
//! - [`cage`]: the request model - [`CageRequest`], the [`CageMode`]
//!   constraint policy (standard vs. overlapping cages), and
//!   [`RequestError`]
//! - [`search`](mod@search): the recursive backtracking enumerator
//! - [`combination`]: [`Combination`] and [`ResultSet`], with their text
//!   serialization
//! - [`solve`]: the entry operations the command interpreter calls -
//!   [`solve_cage`] and [`solve_complement`]
//!
//! # Examples
//!
//! ```
//! use cagelace_core::{Digit, DigitSet};
//! use cagelace_solver::{CageMode, CageRequest, search};
//!
//! // A two-cell cage summing to 10, with 1 already placed nearby.
//! let excluded = DigitSet::new().with(Digit::D1);
//! let request = CageRequest::new(10, 2, excluded, CageMode::Standard)?;
//!
//! let results = search(&request);
//! assert_eq!(results.to_text(), "2 8\n3 7\n4 6\n");
//! # Ok::<(), cagelace_solver::RequestError>(())
//! ```

pub mod cage;
pub mod combination;
pub mod search;
pub mod solve;

// Re-export commonly used types
pub use self::{
    cage::{CageMode, CageRequest, DUPLICATE_CAP, MAX_SPOTS, RequestError},
    combination::{Combination, ResultSet},
    search::search,
    solve::{box_total_complement, solve_cage, solve_complement},
};
