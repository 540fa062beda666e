// Interactive console: collects parameters and keyword occurrences from a user.
//
// All prompting, parsing and retry loops live here. Malformed input is never
// fatal: the user is told what went wrong and asked again. End of input at
// any prompt is treated like typing "done".
//
// Generic over BufRead/Write so tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::config::validate_param;
use crate::occurrence::store::KeywordOccurrenceStore;
use crate::occurrence::Occurrence;

const SENTINEL: &str = "done";

/// Everything the user entered in one interactive session.
#[derive(Debug)]
pub struct Session {
    pub alpha: f64,
    pub delta: f64,
    pub store: KeywordOccurrenceStore,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the full session: alpha, delta, then keywords until "done".
    pub fn run(&mut self, default_alpha: f64, default_delta: f64) -> Result<Session> {
        writeln!(self.output, "Spatiotemporal Mutual Exclusivity Simulator")?;

        let alpha = self.read_param(
            &format!("Set alpha (temporal weight, default {default_alpha:?}): "),
            "alpha",
            default_alpha,
        )?;
        let delta = self.read_param(
            &format!("Set delta (distance threshold, default {default_delta:?}): "),
            "delta",
            default_delta,
        )?;

        let store = self.read_keywords()?;
        Ok(Session {
            alpha,
            delta,
            store,
        })
    }

    /// Prompt for a parameter. Blank input (or EOF) takes the default.
    pub fn read_param(&mut self, prompt: &str, name: &str, default: f64) -> Result<f64> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(default);
            };
            if line.is_empty() {
                return Ok(default);
            }
            match line.parse::<f64>() {
                Ok(value) if validate_param(name, value).is_ok() => return Ok(value),
                _ => writeln!(
                    self.output,
                    "Invalid {name}. Please enter a non-negative number or leave blank for the default."
                )?,
            }
        }
    }

    /// Collect keywords and their occurrences until "done".
    pub fn read_keywords(&mut self) -> Result<KeywordOccurrenceStore> {
        let mut store = KeywordOccurrenceStore::new();

        loop {
            let Some(keyword) = self.prompt("Enter keyword (or 'done' to finish): ")? else {
                break;
            };
            if is_sentinel(&keyword) {
                break;
            }
            if keyword.is_empty() {
                continue;
            }

            let occurrences = self.read_occurrences()?;
            writeln!(
                self.output,
                "Added {} occurrences for '{keyword}'.\n",
                occurrences.len()
            )?;
            store.add_keyword_occurrences(&keyword, occurrences);
        }

        Ok(store)
    }

    /// Collect `x,y,z,t` lines until "done". Bad lines are reported and skipped.
    pub fn read_occurrences(&mut self) -> Result<Vec<Occurrence>> {
        writeln!(
            self.output,
            "Enter occurrences as x,y,z,t (comma-separated). Type 'done' when finished."
        )?;

        let mut occurrences = Vec::new();
        while let Some(line) = self.prompt("Occurrence: ")? {
            if is_sentinel(&line) {
                break;
            }
            match Occurrence::parse(&line) {
                Ok(o) => occurrences.push(o),
                Err(e) => {
                    debug!(error = %e, "Rejected occurrence line");
                    writeln!(self.output, "Invalid input. Please enter as x,y,z,t or 'done'.")?;
                }
            }
        }
        Ok(occurrences)
    }

    /// Print a prompt and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case(SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_blank_params_take_defaults() {
        let mut c = console("\n\ndone\n");
        let session = c.run(1.0, 5.0).unwrap();
        assert!((session.alpha - 1.0).abs() < 1e-12);
        assert!((session.delta - 5.0).abs() < 1e-12);
        assert!(session.store.is_empty());
    }

    #[test]
    fn test_invalid_param_reprompts() {
        let mut c = console("abc\n-2\n0.5\n");
        let value = c.read_param("alpha? ", "alpha", 1.0).unwrap();
        assert!((value - 0.5).abs() < 1e-12);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Invalid alpha").count(), 2);
    }

    #[test]
    fn test_bad_occurrence_line_is_skipped() {
        let mut c = console("1,2,3,4\n1,2\nfoo,1,2,3\n5,6,7,8\nDONE\n");
        let occurrences = c.read_occurrences().unwrap();
        assert_eq!(occurrences.len(), 2);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_eof_ends_collection() {
        let mut c = console("A\n0,0,0,0\n");
        let store = c.read_keywords().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.occurrences("A").map(<[_]>::len), Some(1));
    }
}
