//! Entry operations for the command interpreter.
//!
//! These functions are the boundary the interactive prompt calls through:
//! they accept already-validated numeric arguments, run the search or the
//! complement arithmetic, and return the output text.

use cagelace_core::{DigitSet, HOUSE_SUM};

use crate::{
    cage::{CageMode, CageRequest, RequestError},
    search::search,
};

/// Enumerates the combinations for a cage and serializes them to text.
///
/// `overlapping` selects [`CageMode::Overlapping`] (digits may repeat up to
/// twice) instead of [`CageMode::Standard`]. The returned text holds one
/// combination per line; a cage with no solutions yields an empty string,
/// which is a successful result.
///
/// # Errors
///
/// Returns [`RequestError::SpotCountOutOfRange`] if `spot_count` exceeds
/// nine.
///
/// # Examples
///
/// ```
/// use cagelace_core::DigitSet;
/// use cagelace_solver::solve_cage;
///
/// let text = solve_cage(10, 2, DigitSet::EMPTY, false)?;
/// assert_eq!(text, "1 9\n2 8\n3 7\n4 6\n");
///
/// let text = solve_cage(10, 2, DigitSet::EMPTY, true)?;
/// assert_eq!(text, "1 9\n2 8\n3 7\n4 6\n5 5\n");
/// # Ok::<(), cagelace_solver::RequestError>(())
/// ```
pub fn solve_cage(
    target_sum: u32,
    spot_count: u8,
    excluded: DigitSet,
    overlapping: bool,
) -> Result<String, RequestError> {
    let mode = if overlapping {
        CageMode::Overlapping
    } else {
        CageMode::Standard
    };
    let request = CageRequest::new(target_sum, spot_count, excluded, mode)?;
    Ok(search(&request).to_text())
}

/// Computes the digit implied by a box total.
///
/// When the total of a box's cage sums is known, the amount it exceeds the
/// house sum (digits 1-9 sum to 45) is the digit shared out of the box. The
/// result can be negative for totals below 45; interpreting it is the
/// caller's concern.
///
/// # Examples
///
/// ```
/// use cagelace_solver::box_total_complement;
///
/// assert_eq!(box_total_complement(50), 5);
/// assert_eq!(box_total_complement(45), 0);
/// assert_eq!(box_total_complement(40), -5);
/// ```
#[must_use]
pub const fn box_total_complement(box_total: i32) -> i32 {
    box_total - HOUSE_SUM as i32
}

/// Computes a box-total complement and serializes it to text.
///
/// The output is the complement followed by a line terminator. Pure
/// arithmetic; always succeeds.
///
/// # Examples
///
/// ```
/// use cagelace_solver::solve_complement;
///
/// assert_eq!(solve_complement(50), "5\n");
/// ```
#[must_use]
pub fn solve_complement(box_total: i32) -> String {
    format!("{}\n", box_total_complement(box_total))
}

#[cfg(test)]
mod tests {
    use cagelace_core::Digit;

    use super::*;

    #[test]
    fn test_solve_cage_modes() {
        let standard = solve_cage(10, 2, DigitSet::EMPTY, false).unwrap();
        assert_eq!(standard, "1 9\n2 8\n3 7\n4 6\n");

        let overlapping = solve_cage(10, 2, DigitSet::EMPTY, true).unwrap();
        assert_eq!(overlapping, "1 9\n2 8\n3 7\n4 6\n5 5\n");
    }

    #[test]
    fn test_solve_cage_no_solutions_is_empty_text() {
        let text = solve_cage(3, 2, DigitSet::new().with(Digit::D1), false).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_solve_cage_rejects_bad_spot_count() {
        let result = solve_cage(10, 10, DigitSet::EMPTY, false);
        assert_eq!(
            result,
            Err(RequestError::SpotCountOutOfRange { spots: 10 })
        );
    }

    #[test]
    fn test_complement() {
        assert_eq!(box_total_complement(50), 5);
        assert_eq!(box_total_complement(45), 0);
        assert_eq!(box_total_complement(0), -45);
        assert_eq!(solve_complement(50), "5\n");
        assert_eq!(solve_complement(44), "-1\n");
    }
}
