// src/shell.rs
//! Session driver.
//!
//! Two-phase state machine: startup-script execution, then an
//! interactive read-eval loop. Both phases feed lines through the same
//! dispatch path. The loop blocks on input; there is no concurrent work
//! to coordinate, so the whole driver is synchronous.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::commands::{dispatch, CommandResult, Outcome};
use crate::session::Session;

enum Phase {
    Script(std::vec::IntoIter<String>),
    Interactive,
    Terminated(i32),
}

pub struct Shell {
    session: Session,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the full session: startup script first (if the path was given
    /// and exists), then the interactive loop until `exit` or end of
    /// input. Returns the process exit status.
    pub fn run<R: BufRead, O: Write, E: Write>(
        &mut self,
        script: Option<&Path>,
        input: &mut R,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<i32> {
        let mut phase = match script {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(path)?;
                let lines: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
                Phase::Script(lines.into_iter())
            }
            _ => Phase::Interactive,
        };

        loop {
            phase = match phase {
                Phase::Script(mut lines) => match lines.next() {
                    Some(line) => match self.eval(&line, out, err)? {
                        Some(code) => Phase::Terminated(code),
                        None => Phase::Script(lines),
                    },
                    None => Phase::Interactive,
                },
                Phase::Interactive => {
                    out.write_all(self.session.prompt().as_bytes())?;
                    out.flush()?;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        // End of input: terminate without a farewell.
                        Phase::Terminated(0)
                    } else {
                        match self.eval(line.trim(), out, err)? {
                            Some(code) => Phase::Terminated(code),
                            None => Phase::Interactive,
                        }
                    }
                }
                Phase::Terminated(code) => return Ok(code),
            };
        }
    }

    /// Dispatch one line and print its output. Returns the exit status
    /// when the line ended the session.
    fn eval<O: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<Option<i32>> {
        match dispatch(&mut self.session, line) {
            Outcome::Continue(result) => {
                print_result(&result, out, err)?;
                Ok(None)
            }
            Outcome::Exit(result) => {
                print_result(&result, out, err)?;
                Ok(Some(0))
            }
        }
    }
}

fn print_result<O: Write, E: Write>(
    result: &CommandResult,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    if !result.stdout.is_empty() {
        out.write_all(result.stdout.as_bytes())?;
        out.flush()?;
    }
    if !result.stderr.is_empty() {
        err.write_all(result.stderr.as_bytes())?;
        err.flush()?;
    }
    Ok(())
}
