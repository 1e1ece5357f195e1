//! Cage requests and the mode-specific constraint policy.

use cagelace_core::DigitSet;

/// The maximum number of spots (free cells) in a cage.
///
/// No more than nine distinct grid cells feed one cage in this model. The
/// cap applies in both modes; overlapping cages could conceptually hold more
/// repeated digits, but requests beyond nine spots are rejected regardless.
pub const MAX_SPOTS: u8 = 9;

/// The maximum number of times one digit may be used in an overlapping cage.
pub const DUPLICATE_CAP: u8 = 2;

/// The duplicate-use policy of a cage.
///
/// The mode determines how often a digit may repeat within one combination
/// and how the search cursor advances, which together decide whether results
/// are strict combinations or bounded-repeat sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CageMode {
    /// A cage contained in one box: each digit is used at most once, and
    /// combinations are enumerated in strictly increasing digit order.
    Standard,
    /// A cage crossing box boundaries: a digit may repeat up to
    /// [`DUPLICATE_CAP`] times, and sequences are non-decreasing.
    Overlapping,
}

impl CageMode {
    /// Returns how many times a single digit may be used in one combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagelace_solver::CageMode;
    ///
    /// assert_eq!(CageMode::Standard.digit_use_cap(), 1);
    /// assert_eq!(CageMode::Overlapping.digit_use_cap(), 2);
    /// ```
    #[must_use]
    pub const fn digit_use_cap(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Overlapping => DUPLICATE_CAP,
        }
    }

    /// Returns the smallest digit value the search may try after choosing
    /// `value`.
    ///
    /// Standard cages advance strictly (`value + 1`), so each combination is
    /// reported once regardless of arrangement. Overlapping cages stay on
    /// `value`, allowing back-to-back repeats of the same digit.
    #[must_use]
    pub const fn next_start_value(self, value: u8) -> u8 {
        match self {
            Self::Standard => value + 1,
            Self::Overlapping => value,
        }
    }
}

/// A structurally invalid cage request.
///
/// "No solutions" is never an error; this type covers only requests that
/// violate the cage model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RequestError {
    /// The requested spot count exceeds the nine cells a cage can hold.
    #[display("cage spot count must be at most 9, got {spots}")]
    SpotCountOutOfRange {
        /// The rejected spot count.
        spots: u8,
    },
}

/// A request to enumerate the digit combinations that can fill one cage.
///
/// A request is immutable, drives exactly one [`search`](crate::search)
/// invocation, and holds no state afterwards.
///
/// # Examples
///
/// ```
/// use cagelace_core::DigitSet;
/// use cagelace_solver::{CageMode, CageRequest};
///
/// let request = CageRequest::new(10, 2, DigitSet::EMPTY, CageMode::Standard)?;
/// assert_eq!(request.target_sum(), 10);
/// assert_eq!(request.spot_count(), 2);
/// # Ok::<(), cagelace_solver::RequestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CageRequest {
    target_sum: u32,
    spot_count: u8,
    excluded: DigitSet,
    mode: CageMode,
}

impl CageRequest {
    /// Creates a cage request.
    ///
    /// The interpreter layer is expected to validate user input before
    /// constructing a request; this check is defensive.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::SpotCountOutOfRange`] if `spot_count`
    /// exceeds [`MAX_SPOTS`].
    pub fn new(
        target_sum: u32,
        spot_count: u8,
        excluded: DigitSet,
        mode: CageMode,
    ) -> Result<Self, RequestError> {
        if spot_count > MAX_SPOTS {
            return Err(RequestError::SpotCountOutOfRange { spots: spot_count });
        }
        Ok(Self {
            target_sum,
            spot_count,
            excluded,
            mode,
        })
    }

    /// Returns the sum the cage's digits must reach.
    #[must_use]
    pub const fn target_sum(&self) -> u32 {
        self.target_sum
    }

    /// Returns the number of free cells in the cage.
    #[must_use]
    pub const fn spot_count(&self) -> u8 {
        self.spot_count
    }

    /// Returns the digits ruled out by the surrounding grid.
    #[must_use]
    pub const fn excluded(&self) -> DigitSet {
        self.excluded
    }

    /// Returns the cage's duplicate-use policy.
    #[must_use]
    pub const fn mode(&self) -> CageMode {
        self.mode
    }
}
