//! Terminal operator: shows each post and asks whether to discard it.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use sift_core::RawPost;
use sift_pipeline::{CurationSummary, Decision, Operator, ReviewPosition};

use crate::notify;

const SEPARATOR: &str =
    "------------------------------------------------------------------------";
const PROMPT: &str = "Discard this tweet? [y/n]: ";

pub struct ConsoleOperator<R, W> {
    input: R,
    output: W,
    intro: Option<String>,
    bell: bool,
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            intro: None,
            bell: false,
        }
    }

    /// Text printed once the search is done, before the first post.
    #[must_use]
    pub fn with_intro(mut self, intro: String) -> Self {
        self.intro = Some(intro);
        self
    }

    /// Ring the terminal bell when the search is done.
    #[must_use]
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    fn ask(&mut self) -> io::Result<Decision> {
        loop {
            write!(self.output, "\n{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a decision was made",
                ));
            }
            match parse_answer(&line) {
                Some(decision) => return Ok(decision),
                None => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn begin(&mut self, total: usize) -> io::Result<()> {
        if self.bell {
            notify::ring(&mut self.output, 1, Duration::ZERO)?;
        }
        if total == 0 {
            writeln!(self.output, "\nNo posts matched the search.\n")?;
        } else if let Some(intro) = self.intro.take() {
            writeln!(self.output, "\n{intro}\n")?;
        }
        Ok(())
    }

    fn review(&mut self, position: ReviewPosition, post: &RawPost) -> io::Result<Decision> {
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "({position}) Tweet by {}:\n", post.handle)?;
        writeln!(self.output, "{}", post.text)?;
        if let Some(caption) = post.caption() {
            writeln!(self.output, "\nHas an image/video attached: {caption}")?;
        }

        let decision = self.ask()?;
        match decision {
            Decision::Discard => writeln!(self.output, "Discarded tweet by {}.\n", post.handle)?,
            Decision::Keep => writeln!(self.output, "Kept tweet by {}.\n", post.handle)?,
        }
        Ok(decision)
    }

    fn finish(&mut self, summary: &CurationSummary) -> io::Result<()> {
        writeln!(self.output, "Finished manual removal of unrelated posts.")?;
        writeln!(
            self.output,
            "Total number of discarded posts: {}",
            summary.discarded
        )?;
        writeln!(
            self.output,
            "Total number of remaining posts: {}",
            summary.retained
        )?;
        self.output.flush()
    }
}

/// `y` discards, `n` keeps, case-insensitive; anything else is asked again.
pub(crate) fn parse_answer(line: &str) -> Option<Decision> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" => Some(Decision::Discard),
        "n" => Some(Decision::Keep),
        _ => None,
    }
}
