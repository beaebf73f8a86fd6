//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads one line per guess from any
//! `BufRead` and writes the board to any `Write`, so it runs the same against
//! stdin/stdout and in tests.

use crate::game::Session;
use crate::output::{write_board, write_outcome, write_rejection};
use crate::wordlists::Dictionary;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Commands: `quit`/`exit` leave, `new` starts over with a fresh secret.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, W, G>(
    dictionary: &Dictionary,
    rng: &mut G,
    mut reader: R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "  🔠 W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "Guess the secret 5-letter word. You have 6 tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit")?;

    let mut session = Session::start(dictionary, rng);
    write_board(out, &session)?;

    loop {
        let prompt = if session.is_over() {
            "Play again? ('new' or 'quit')"
        } else {
            "Your guess"
        };
        let Some(input) = read_line(&mut reader, out, prompt)? else {
            log::debug!("Input closed, leaving game loop");
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                session.restart(dictionary, rng);
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, &session)?;
            }
            "" => {}
            guess => match session.submit(guess, dictionary).map(|_| ()) {
                Ok(()) => {
                    write_board(out, &session)?;
                    write_outcome(out, &session)?;
                }
                Err(err) => write_rejection(out, &err)?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
