//! Line-oriented prompting over any reader/writer pair.
//!
//! Numeric prompts repeat until a usable value is entered; the calculation
//! code only ever sees finite numbers (and strictly positive ones when asked).

use std::io::{self, BufRead, Write};

use tracing::warn;

use beam_core::{CalcError, CalcResult};

fn terminal_error(operation: &str, e: io::Error) -> CalcError {
    CalcError::file_error(operation, "<terminal>", e.to_string())
}

/// Parse one line of numeric input.
///
/// ```text
/// "10"      -> 10.0
/// " 2e-4 "  -> 0.0002
/// "abc"     -> could not convert string to float: 'abc'
/// "-10"     -> Value must be positive   (when positive_only)
/// ```
pub fn parse_numeric(text: &str, positive_only: bool) -> CalcResult<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        CalcError::invalid_input(
            "value",
            trimmed,
            format!("could not convert string to float: '{}'", trimmed),
        )
    })?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input("value", trimmed, "Value must be finite"));
    }
    if positive_only && value <= 0.0 {
        return Err(CalcError::invalid_input("value", trimmed, "Value must be positive"));
    }
    Ok(value)
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writer for result lines printed between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> CalcResult<()> {
        writeln!(self.output, "{}", line).map_err(|e| terminal_error("write", e))
    }

    /// Show `prompt` and read one line. `None` means end of input.
    pub fn ask(&mut self, prompt: &str) -> CalcResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| terminal_error("write", e))?;
        self.output.flush().map_err(|e| terminal_error("flush", e))?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| terminal_error("read", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a menu entry, trimmed. End of input is an error.
    pub fn menu_choice(&mut self, prompt: &str) -> CalcResult<String> {
        let line = self.ask(prompt)?.ok_or(CalcError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    /// Ask until a number is entered; with `positive_only`, until it is > 0.
    pub fn numeric(&mut self, prompt: &str, positive_only: bool) -> CalcResult<f64> {
        loop {
            let line = self.ask(prompt)?.ok_or(CalcError::InputClosed)?;
            match parse_numeric(&line, positive_only) {
                Ok(value) => return Ok(value),
                Err(CalcError::InvalidInput { value, reason, .. }) => {
                    warn!(input = %value, %reason, "rejected numeric input");
                    self.say(&format!("Invalid input: {}. Please try again.", reason))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Yes/no question; only "y" (any case) is a yes. End of input is a no.
    pub fn confirm(&mut self, prompt: &str) -> CalcResult<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false))
    }
}
