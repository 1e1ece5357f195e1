//! Parsing of calculator commands.
//!
//! The prompt accepts three command keywords:
//!
//! - `cc <total> <spots> [excluded]*` - standard cage
//! - `co <total> <spots> [excluded]*` - overlapping cage
//! - `x3 <boxTotal>` - box-total complement
//!
//! plus `quit` (or `q`) to leave the prompt. Validation of user input lives
//! here, not in the solver: totals must be non-negative, spot counts must be
//! in 0-9, and excluded-digit arguments outside 1-9 are silently ignored.

use std::str::FromStr;

use cagelace_core::{Digit, DigitSet};

/// A parsed calculator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Enumerate the combinations that can fill a cage.
    Cage {
        target_sum: u32,
        spot_count: u8,
        excluded: DigitSet,
        overlapping: bool,
    },
    /// Compute a box-total complement.
    Complement { box_total: i32 },
    /// Leave the prompt.
    Quit,
}

/// A command line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandError {
    /// The line held no tokens at all.
    #[display("empty command")]
    Empty,
    /// The first token is not a known command keyword.
    #[display("unknown command: {keyword}")]
    UnknownCommand { keyword: String },
    /// A required argument was not given.
    #[display("missing {what} argument")]
    MissingArgument { what: &'static str },
    /// An argument could not be read as a number.
    #[display("invalid number: {token}")]
    InvalidNumber { token: String },
    /// The cage total was negative.
    #[display("cage total must be non-negative, got {total}")]
    NegativeTotal { total: i64 },
    /// The spot count was outside 0-9.
    #[display("cage spot count must be between 0 and 9, got {spots}")]
    SpotsOutOfRange { spots: i64 },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?;
        match keyword {
            "cc" => parse_cage(tokens, false),
            "co" => parse_cage(tokens, true),
            "x3" => parse_complement(tokens),
            "quit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::UnknownCommand {
                keyword: keyword.to_owned(),
            }),
        }
    }
}

fn parse_number(token: &str) -> Result<i64, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber {
        token: token.to_owned(),
    })
}

fn parse_cage<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    overlapping: bool,
) -> Result<Command, CommandError> {
    let token = tokens.next().ok_or(CommandError::MissingArgument {
        what: "cage total",
    })?;
    let total = parse_number(token)?;
    if total < 0 {
        return Err(CommandError::NegativeTotal { total });
    }
    let target_sum = u32::try_from(total).map_err(|_| CommandError::InvalidNumber {
        token: token.to_owned(),
    })?;

    let token = tokens.next().ok_or(CommandError::MissingArgument {
        what: "cage spot count",
    })?;
    let spots = parse_number(token)?;
    if !(0..=9).contains(&spots) {
        return Err(CommandError::SpotsOutOfRange { spots });
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let spot_count = spots as u8;

    let mut excluded = DigitSet::new();
    for token in tokens {
        let value = parse_number(token)?;
        // Out-of-range excluded digits are ignored, not errors.
        if let Ok(value) = u8::try_from(value)
            && let Some(digit) = Digit::try_from_value(value)
        {
            excluded.insert(digit);
        }
    }

    Ok(Command::Cage {
        target_sum,
        spot_count,
        excluded,
        overlapping,
    })
}

fn parse_complement<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    let token = tokens.next().ok_or(CommandError::MissingArgument {
        what: "box total",
    })?;
    let box_total =
        i32::try_from(parse_number(token)?).map_err(|_| CommandError::InvalidNumber {
            token: token.to_owned(),
        })?;
    Ok(Command::Complement { box_total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_cage() {
        let command: Command = "cc 10 2".parse().unwrap();
        assert_eq!(
            command,
            Command::Cage {
                target_sum: 10,
                spot_count: 2,
                excluded: DigitSet::EMPTY,
                overlapping: false,
            }
        );
    }

    #[test]
    fn test_parse_overlapping_cage_with_exclusions() {
        let command: Command = "co 20 3 4 7".parse().unwrap();
        assert_eq!(
            command,
            Command::Cage {
                target_sum: 20,
                spot_count: 3,
                excluded: DigitSet::from_iter([Digit::D4, Digit::D7]),
                overlapping: true,
            }
        );
    }

    #[test]
    fn test_out_of_range_exclusions_are_ignored() {
        let command: Command = "cc 10 2 0 15 1 -3".parse().unwrap();
        assert_eq!(
            command,
            Command::Cage {
                target_sum: 10,
                spot_count: 2,
                excluded: DigitSet::new().with(Digit::D1),
                overlapping: false,
            }
        );
    }

    #[test]
    fn test_parse_complement() {
        assert_eq!(
            "x3 50".parse::<Command>().unwrap(),
            Command::Complement { box_total: 50 }
        );
        // Negative box totals are accepted; the complement is just arithmetic.
        assert_eq!(
            "x3 -5".parse::<Command>().unwrap(),
            Command::Complement { box_total: -5 }
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_whitespace_handling() {
        let command: Command = "  cc   10  2  ".parse().unwrap();
        assert_eq!(
            command,
            Command::Cage {
                target_sum: 10,
                spot_count: 2,
                excluded: DigitSet::EMPTY,
                overlapping: false,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   \n".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "xyz 1".parse::<Command>(),
            Err(CommandError::UnknownCommand {
                keyword: "xyz".to_owned()
            })
        );
        assert_eq!(
            "cc".parse::<Command>(),
            Err(CommandError::MissingArgument {
                what: "cage total"
            })
        );
        assert_eq!(
            "cc 10".parse::<Command>(),
            Err(CommandError::MissingArgument {
                what: "cage spot count"
            })
        );
        assert_eq!(
            "cc ten 2".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                token: "ten".to_owned()
            })
        );
        assert_eq!(
            "cc -5 2".parse::<Command>(),
            Err(CommandError::NegativeTotal { total: -5 })
        );
        assert_eq!(
            "cc 10 12".parse::<Command>(),
            Err(CommandError::SpotsOutOfRange { spots: 12 })
        );
        assert_eq!(
            "cc 10 -1".parse::<Command>(),
            Err(CommandError::SpotsOutOfRange { spots: -1 })
        );
        assert_eq!(
            "x3".parse::<Command>(),
            Err(CommandError::MissingArgument { what: "box total" })
        );
        assert_eq!(
            "cc 10 2 five".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                token: "five".to_owned()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::UnknownCommand {
                keyword: "xyz".to_owned()
            }
            .to_string(),
            "unknown command: xyz"
        );
        assert_eq!(
            CommandError::NegativeTotal { total: -5 }.to_string(),
            "cage total must be non-negative, got -5"
        );
    }
}
