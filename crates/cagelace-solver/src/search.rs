//! The recursive cage combination search engine.

use cagelace_core::{Digit, containers::Array9, index::DigitSemantics};
use tinyvec::ArrayVec;

use crate::{
    cage::CageRequest,
    combination::{Combination, ResultSet},
};

/// Per-digit usage counters, scoped to one search invocation.
///
/// Counters follow an acquire/release discipline: a branch increments its
/// digit's counter on entry and decrements it unconditionally when that
/// branch's exploration ends, so sibling branches always observe counts that
/// reflect exactly the current path.
#[derive(Debug, Default)]
struct UseCounts(Array9<u8, DigitSemantics>);

impl UseCounts {
    fn count(&self, digit: Digit) -> u8 {
        self.0[digit]
    }

    fn acquire(&mut self, digit: Digit) {
        self.0[digit] += 1;
    }

    fn release(&mut self, digit: Digit) {
        self.0[digit] -= 1;
    }
}

/// Enumerates every admissible combination for a cage request.
///
/// The search walks digits 1-9 in ascending order, extending the current
/// path while the remaining sum and spot count allow it. The mode's cursor
/// discipline (strictly increasing for [`CageMode::Standard`], non-decreasing
/// for [`CageMode::Overlapping`]) guarantees each admissible multiset or
/// bounded-repeat sequence is emitted exactly once, in lexicographically
/// ascending order.
///
/// The function is a pure function of the request: all mutable state lives on
/// this invocation's call stack, it always terminates (depth and branching
/// are both bounded by 9), and a request with no solutions yields an empty
/// [`ResultSet`], not an error.
///
/// [`CageMode::Standard`]: crate::CageMode::Standard
/// [`CageMode::Overlapping`]: crate::CageMode::Overlapping
///
/// # Examples
///
/// ```
/// use cagelace_core::{Digit, DigitSet};
/// use cagelace_solver::{CageMode, CageRequest, search};
///
/// let request = CageRequest::new(12, 2, DigitSet::new().with(Digit::D4), CageMode::Standard)?;
/// let results = search(&request);
///
/// // 3+9 and 5+7; 4+8 is ruled out by the exclusion mask.
/// assert_eq!(results.to_text(), "3 9\n5 7\n");
/// # Ok::<(), cagelace_solver::RequestError>(())
/// ```
#[must_use]
pub fn search(request: &CageRequest) -> ResultSet {
    let mut state = Search {
        request,
        path: ArrayVec::new(),
        counts: UseCounts::default(),
        results: ResultSet::new(),
    };
    state.descend(request.target_sum(), Digit::D1.value());
    state.results
}

/// The mutable state of one search invocation.
struct Search<'a> {
    request: &'a CageRequest,
    path: ArrayVec<[u8; 9]>,
    counts: UseCounts,
    results: ResultSet,
}

impl Search<'_> {
    fn descend(&mut self, remaining: u32, start: u8) {
        let spots = usize::from(self.request.spot_count());

        // Exact sum consumed with every spot filled: emit and stop here.
        if remaining == 0 && self.path.len() == spots {
            self.results.push(Combination::from_values(self.path));
            return;
        }

        if self.path.len() >= spots {
            return;
        }

        for value in start..=Digit::D9.value() {
            // Digits only grow from here, so no larger digit can help.
            if u32::from(value) > remaining {
                break;
            }

            let digit = Digit::from_value(value);
            if self.request.excluded().contains(digit) {
                continue;
            }
            if self.counts.count(digit) >= self.request.mode().digit_use_cap() {
                continue;
            }

            self.counts.acquire(digit);
            self.path.push(value);

            self.descend(
                remaining - u32::from(value),
                self.request.mode().next_start_value(value),
            );

            self.path.pop();
            self.counts.release(digit);
        }
    }
}
