//! Change-list rendering
//!
//! Prints a [`DiffResult`] run by run. Every run starts with a header of the
//! form `<kind> -<start>,<len> +<start>,<len>`; starts are one-based, and an
//! empty range reports the number of the line it follows (0 at the top of a
//! file). Deleted lines follow with a `-` prefix, inserted lines with `+`,
//! and unchanged lines with a space when they are requested at all. The
//! "No newline at end of file" marker follows whichever side's last line
//! lacks a terminator.

use crate::artifacts::diff::{ChangeRun, DiffResult, RunKind};
use crate::artifacts::lines::{Line, LineSequence};
use colored::Colorize;
use derive_new::new;
use std::io::{self, Write};
use std::ops::Range;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(new)]
pub struct ChangeListRenderer<'w> {
    writer: &'w mut dyn Write,
    show_unchanged: bool,
}

impl ChangeListRenderer<'_> {
    pub fn render(&mut self, result: &DiffResult<'_>) -> io::Result<()> {
        for run in result.runs() {
            if run.kind() == RunKind::Unchanged && run.left().is_empty() {
                continue;
            }
            self.render_run(result, run)?;
        }

        Ok(())
    }

    fn render_run(&mut self, result: &DiffResult<'_>, run: &ChangeRun) -> io::Result<()> {
        writeln!(self.writer, "{}", run_header(run).cyan())?;

        match run.kind() {
            RunKind::Unchanged => {
                if self.show_unchanged {
                    self.render_unchanged(result, run)?;
                }
            }
            RunKind::Deleted => self.render_lines(result.left(), result.left_lines(run), '-')?,
            RunKind::Inserted => self.render_lines(result.right(), result.right_lines(run), '+')?,
            RunKind::Replaced => {
                self.render_lines(result.left(), result.left_lines(run), '-')?;
                self.render_lines(result.right(), result.right_lines(run), '+')?;
            }
        }

        Ok(())
    }

    fn render_unchanged(&mut self, result: &DiffResult<'_>, run: &ChangeRun) -> io::Result<()> {
        let pairs = result.left_lines(run).iter().zip(result.right_lines(run));
        for (left, right) in pairs {
            writeln!(self.writer, " {}", left.text())?;

            if result.left().is_unterminated(left.index())
                || result.right().is_unterminated(right.index())
            {
                writeln!(self.writer, "{NO_NEWLINE_MARKER}")?;
            }
        }

        Ok(())
    }

    fn render_lines(&mut self, file: &LineSequence, lines: &[Line], prefix: char) -> io::Result<()> {
        for line in lines {
            let text = format!("{prefix}{}", line.text());
            if prefix == '-' {
                writeln!(self.writer, "{}", text.red())?;
            } else {
                writeln!(self.writer, "{}", text.green())?;
            }

            if file.is_unterminated(line.index()) {
                writeln!(self.writer, "{NO_NEWLINE_MARKER}")?;
            }
        }

        Ok(())
    }
}

pub fn run_header(run: &ChangeRun) -> String {
    format!(
        "{} -{} +{}",
        run.kind(),
        range_label(run.left()),
        range_label(run.right())
    )
}

fn range_label(range: Range<usize>) -> String {
    let start = if range.is_empty() {
        range.start
    } else {
        range.start + 1
    };
    format!("{},{}", start, range.len())
}
