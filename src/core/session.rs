use crate::core::{InputPolicy, SideSource};
use crate::domain::model::{SideLabel, Sides, Verdict};
use crate::utils::error::{Result, TriangleError};
use std::io::Write;

/// Asks for three sides, evaluates them and writes the verdict line.
pub struct PromptSession<S, P, W> {
    source: S,
    policy: P,
    output: W,
}

impl<S, P, W> PromptSession<S, P, W>
where
    S: SideSource,
    P: InputPolicy,
    W: Write,
{
    pub fn new(source: S, policy: P, output: W) -> Self {
        Self {
            source,
            policy,
            output,
        }
    }

    pub fn run(&mut self) -> Result<Verdict> {
        tracing::debug!(
            "Starting session (interactive: {}, reprompt: {}, max attempts: {})",
            self.source.interactive(),
            self.policy.reprompt_on_invalid(),
            self.policy.max_attempts()
        );

        let [first, second, third] = SideLabel::ALL;
        let a = self.read_side(first)?;
        let b = self.read_side(second)?;
        let c = self.read_side(third)?;

        // Widened so that sums of extreme i64 values cannot overflow.
        let sides = Sides::new(i128::from(a), i128::from(b), i128::from(c));
        let verdict = sides.verdict();
        tracing::info!("Sides ({}, {}, {}) -> {:?}", a, b, c, verdict);

        writeln!(self.output, "{}", verdict)?;
        self.output.flush()?;
        Ok(verdict)
    }

    /// Consumes the session and hands back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_side(&mut self, label: SideLabel) -> Result<i64> {
        let reprompt = self.policy.reprompt_on_invalid() && self.source.interactive();
        let max_attempts = if reprompt {
            self.policy.max_attempts().max(1)
        } else {
            1
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            if self.source.interactive() {
                writeln!(self.output, "{}", label.prompt())?;
                self.output.flush()?;
            }

            let line = self
                .source
                .next_line(label)?
                .ok_or(TriangleError::MissingInputError { side: label })?;

            match parse_side(label, &line) {
                Ok(value) => {
                    tracing::debug!("Read {} = {}", label, value);
                    return Ok(value);
                }
                Err(e) if reprompt => {
                    tracing::warn!("Attempt {}/{} for {}: {}", attempt, max_attempts, label, e);
                    if attempt >= max_attempts {
                        return Err(TriangleError::TooManyAttemptsError {
                            side: label,
                            attempts: attempt,
                        });
                    }
                    writeln!(
                        self.output,
                        "Invalid integer: '{}'. Please try again.",
                        line.trim()
                    )?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Parses one side as a signed integer, ignoring surrounding whitespace.
pub fn parse_side(label: SideLabel, raw: &str) -> Result<i64> {
    let input = raw.trim();
    input
        .parse::<i64>()
        .map_err(|source| TriangleError::ParseError {
            side: label,
            input: input.to_string(),
            source,
        })
}
