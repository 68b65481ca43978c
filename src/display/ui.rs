use std::io::{self, BufRead, BufReader, Write};

use crate::core::error::CertsError;

const MARKER: &str = " ▸    ";

/// Console streams of one invocation: results on `out`, progress, warnings
/// and errors on `err`, confirmation answers from `input`.
pub struct Ui {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    input: Box<dyn BufRead>,
}

impl Ui {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self { out, err, input }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            Box::new(BufReader::new(io::stdin())),
        )
    }

    pub fn print(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    /// Runs `task` between a `<message>... ` prefix and `done` or `!!!`.
    pub fn action<T>(
        &mut self,
        message: &str,
        task: impl FnOnce() -> Result<T, CertsError>,
    ) -> Result<T, CertsError> {
        let _ = write!(self.err, "{message}... ");
        let _ = self.err.flush();
        let result = task();
        let status = if result.is_ok() { "done" } else { "!!!" };
        let _ = writeln!(self.err, "{status}");
        let _ = self.err.flush();
        result
    }

    pub fn warn(&mut self, message: &str) {
        for line in message.lines() {
            let _ = writeln!(self.err, "{MARKER}{line}");
        }
        let _ = self.err.flush();
    }

    pub fn warnings(&mut self, warnings: &[String]) {
        for warning in warnings {
            self.warn(&format!("WARNING: {warning}"));
        }
    }

    pub fn error(&mut self, err: &CertsError) {
        self.warn(&err.to_string());
    }

    /// Requires the operator to name the app before a destructive action.
    pub fn confirm_app(
        &mut self,
        app: &str,
        confirm: Option<&str>,
        message: &str,
    ) -> Result<(), CertsError> {
        let answer = match confirm {
            Some(given) => given.to_string(),
            None => {
                self.warn(message);
                self.warn(&format!(
                    "To proceed, type {app} or re-run this command with --confirm {app}"
                ));
                let _ = write!(self.err, "\n> ");
                let _ = self.err.flush();
                let mut line = String::new();
                self.input.read_line(&mut line).map_err(CertsError::Prompt)?;
                line.trim().to_string()
            }
        };

        if answer == app {
            Ok(())
        } else {
            Err(CertsError::ConfirmationMismatch {
                given: answer,
                app: app.to_string(),
            })
        }
    }
}
