//! Raw-terminal line reader with Tab completion cycling.
//!
//! This is the line-editing side of the completion protocol: each Tab
//! press asks the engine for one candidate, repeated presses walk the
//! attempt index, and any edit starts a new cycle. Engine errors abort
//! the read; they are reported, never downgraded to "no matches".

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use tracing::debug;

use tether_session::CodeCompleter;

/// Tab-cycling state: the text that started the cycle and the attempt
/// index the next press will ask for.
///
/// The engine is always queried with the cycle's origin text, not the
/// buffer a previous candidate was inserted into; that keeps its
/// `(text, attempt)` cache hot across one cycle.
#[derive(Debug, Default)]
struct CycleState {
    origin: Option<String>,
    attempt: usize,
}

impl CycleState {
    /// Query for this Tab press, starting a new cycle from `buffer` if
    /// none is active.
    fn query(&mut self, buffer: &str) -> (String, usize) {
        let origin = self.origin.get_or_insert_with(|| buffer.to_string());
        (origin.clone(), self.attempt)
    }

    /// A candidate was accepted; the next press asks for the following one.
    fn advance(&mut self) {
        self.attempt += 1;
    }

    /// The engine reported exhaustion. Returns `true` when the cycle had
    /// already produced candidates and should wrap to the first one;
    /// a cycle that is empty at attempt 0 simply ends.
    fn exhausted(&mut self) -> bool {
        if self.attempt == 0 {
            self.origin = None;
            false
        } else {
            self.attempt = 0;
            true
        }
    }

    /// The buffer was edited; the next Tab starts a fresh cycle.
    fn reset(&mut self) {
        self.origin = None;
        self.attempt = 0;
    }
}

/// Read one line with Tab completion against `completer`.
///
/// Enter accepts the buffer, Ctrl-C and Ctrl-D abort with
/// [`io::ErrorKind::Interrupted`]. Completer failures surface as errors
/// after the terminal is restored.
pub fn read_code(completer: &mut CodeCompleter, prompt: &str) -> io::Result<String> {
    terminal::enable_raw_mode()?;
    let result = read_loop(completer, prompt);
    terminal::disable_raw_mode()?;
    if let Err(e) = &result {
        if e.kind() != io::ErrorKind::Interrupted {
            eprintln!("completion failed: {e}");
        }
    }
    result
}

fn read_loop(completer: &mut CodeCompleter, prompt: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    let mut cycle = CycleState::default();

    loop {
        redraw(&mut stdout, prompt, &buffer)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "input aborted"));
            }
            (KeyCode::Enter, _) => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(buffer);
            }
            (KeyCode::Backspace, _) => {
                buffer.pop();
                cycle.reset();
            }
            (KeyCode::Tab, _) => {
                let (text, attempt) = cycle.query(&buffer);
                match complete_step(completer, &text, attempt)? {
                    Some(candidate) => {
                        buffer = candidate;
                        cycle.advance();
                    }
                    None if cycle.exhausted() => {
                        // Wrap around to the first candidate.
                        let (text, attempt) = cycle.query(&buffer);
                        if let Some(candidate) = complete_step(completer, &text, attempt)? {
                            buffer = candidate;
                            cycle.advance();
                        }
                    }
                    None => {}
                }
            }
            (KeyCode::Char(ch), mods)
                if !ch.is_control() && !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buffer.push(ch);
                cycle.reset();
            }
            _ => {}
        }
    }
}

fn complete_step(
    completer: &mut CodeCompleter,
    text: &str,
    attempt: usize,
) -> io::Result<Option<String>> {
    debug!(text, attempt, "requesting candidate");
    completer.complete(text, attempt).map_err(io::Error::other)
}

fn redraw(out: &mut impl Write, prompt: &str, buffer: &str) -> io::Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::CurrentLine))?;
    write!(out, "{prompt}{buffer}")?;
    out.flush()
}
