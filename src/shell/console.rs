use crate::utils::error::{Result, RosterError};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompt/answer over any reader and writer.
///
/// Every `ask*` method returns `Ok(None)` at end of input.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like `ask`, with surrounding whitespace removed.
    pub fn ask_text(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.ask(prompt)?.map(|answer| answer.trim().to_string()))
    }

    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, field: &str) -> Result<Option<T>> {
        let Some(answer) = self.ask_text(prompt)? else {
            return Ok(None);
        };
        answer
            .parse::<T>()
            .map(Some)
            .map_err(|_| RosterError::InputFormat {
                field: field.to_string(),
                expected: "a whole number".to_string(),
                value: answer,
            })
    }

    pub fn ask_real(&mut self, prompt: &str, field: &str) -> Result<Option<f64>> {
        let Some(answer) = self.ask_text(prompt)? else {
            return Ok(None);
        };
        match answer.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(RosterError::InputFormat {
                field: field.to_string(),
                expected: "a number".to_string(),
                value: answer,
            }),
        }
    }
}
