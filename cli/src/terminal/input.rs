use std::io::{self, BufRead, Write};

use revip_common::warn;

/// Blocking question/answer over any line-based input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question` without a newline and returns the trimmed answer.
    ///
    /// A closed input yields an empty answer. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer: Vec<u8> = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            warn!("Input closed, continuing with an empty answer");
        }
        Ok(String::from_utf8_lossy(&answer).trim().to_string())
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(is_affirmative(&self.ask(question)?))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// `y` and `yes` in any case; everything else is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
