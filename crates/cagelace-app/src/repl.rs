//! The interactive prompt loop.

use std::io::{self, BufRead, Write};

use cagelace_solver::{solve_cage, solve_complement};

use crate::command::{Command, CommandError};

const PROMPT: &str = "> ";

/// Parses and executes one input line, writing result text or an error
/// message to `output`.
///
/// Returns `false` when the line asks to leave the prompt.
pub(crate) fn eval_line<W>(line: &str, output: &mut W) -> io::Result<bool>
where
    W: Write,
{
    match line.parse::<Command>() {
        Ok(Command::Quit) => return Ok(false),
        Ok(Command::Cage {
            target_sum,
            spot_count,
            excluded,
            overlapping,
        }) => {
            log::debug!(
                "cage request: total={target_sum} spots={spot_count} \
                 excluded={excluded:?} overlapping={overlapping}"
            );
            match solve_cage(target_sum, spot_count, excluded, overlapping) {
                // No combinations serialize to empty text, which prints
                // nothing; that presentation choice lives here, not in the
                // solver.
                Ok(text) => output.write_all(text.as_bytes())?,
                Err(err) => writeln!(output, "{err}")?,
            }
        }
        Ok(Command::Complement { box_total }) => {
            log::debug!("complement request: box total={box_total}");
            output.write_all(solve_complement(box_total).as_bytes())?;
        }
        // A blank line just prompts again.
        Err(CommandError::Empty) => {}
        Err(err) => writeln!(output, "{err}")?,
    }
    Ok(true)
}

/// Runs the prompt loop until end of input or a quit command.
pub(crate) fn run<R, W>(mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input.
            return Ok(());
        }

        if !eval_line(&line, &mut output)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_cage_and_complement_session() {
        let output = session("cc 10 2\nx3 50\nquit\n");
        assert_eq!(output, "> 1 9\n2 8\n3 7\n4 6\n> 5\n> ");
    }

    #[test]
    fn test_overlapping_cage() {
        let output = session("co 10 2\n");
        assert_eq!(output, "> 1 9\n2 8\n3 7\n4 6\n5 5\n> ");
    }

    #[test]
    fn test_exclusions_from_prompt() {
        let output = session("cc 10 2 1 9\nquit\n");
        assert_eq!(output, "> 2 8\n3 7\n4 6\n> ");
    }

    #[test]
    fn test_no_solutions_prints_nothing() {
        let output = session("cc 3 2 1\n");
        assert_eq!(output, "> > ");
    }

    #[test]
    fn test_ends_at_end_of_input() {
        // No quit command: the loop ends when input runs out.
        let output = session("x3 45\n");
        assert_eq!(output, "> 0\n> ");
    }

    #[test]
    fn test_blank_lines_prompt_again() {
        let output = session("\n\nx3 50\n");
        assert_eq!(output, "> > > 5\n> ");
    }

    #[test]
    fn test_error_messages_keep_session_alive() {
        let output = session("bogus\ncc\ncc 10 2\n");
        assert_eq!(
            output,
            "> unknown command: bogus\n> missing cage total argument\n> 1 9\n2 8\n3 7\n4 6\n> "
        );
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(session("q\nx3 50\n"), "> ");
        assert_eq!(session("quit\n"), "> ");
    }

    #[test]
    fn test_eval_line_reports_quit() {
        let mut output = Vec::new();
        assert!(eval_line("x3 50", &mut output).unwrap());
        assert!(!eval_line("quit", &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "5\n");
    }
}
