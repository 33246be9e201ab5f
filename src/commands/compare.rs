use crate::areas::comparison::Comparison;
use crate::areas::workspace::Source;
use crate::artifacts::diff::diff_lines;
use crate::artifacts::lines::LineSequence;
use crate::artifacts::render::ChangeListRenderer;
use anyhow::Context;
use std::io::Write;
use tracing::info;

/// Exit status for anything that kept the comparison from finishing.
pub const TROUBLE_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Different,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Identical => 0,
            Outcome::Different => 1,
        }
    }
}

impl Comparison {
    pub fn compare(&self, left: &Source, right: &Source) -> anyhow::Result<Outcome> {
        if left.is_stdin() && right.is_stdin() {
            anyhow::bail!("standard input can only be compared against a file");
        }

        let left_lines = LineSequence::from_bytes(&self.workspace().read_source(left)?);
        let right_lines = LineSequence::from_bytes(&self.workspace().read_source(right)?);

        let result = diff_lines(&left_lines, &right_lines, self.options())
            .with_context(|| format!("cannot compare {left} and {right}"))?;

        info!(
            changes = result.changes().count(),
            deleted = result.deleted_count(),
            inserted = result.inserted_count(),
            unchanged = result.unchanged_count(),
            "comparison finished"
        );

        if result.is_identical() {
            if self.report().report_identical {
                writeln!(self.writer(), "Files {left} and {right} are identical")?;
            }
            return Ok(Outcome::Identical);
        }

        if self.report().brief {
            writeln!(self.writer(), "Files {left} and {right} differ")?;
        } else {
            let mut writer = self.writer();
            ChangeListRenderer::new(&mut **writer, self.report().show_unchanged)
                .render(&result)?;
        }

        Ok(Outcome::Different)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::comparison::ReportOptions;
    use crate::areas::workspace::Workspace;
    use crate::artifacts::diff::DiffOptions;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::sync::{Arc, Mutex};

    /// Captures everything the comparison writes.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[fixture]
    fn workspace_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        dir.child("old.txt").write_str("a\nb\nc\n").unwrap();
        dir.child("new.txt").write_str("a\nx\nc\n").unwrap();
        dir.child("copy.txt").write_str("a\nb\nc\n").unwrap();
        dir
    }

    fn comparison(
        dir: &TempDir,
        options: DiffOptions,
        report: ReportOptions,
    ) -> (Comparison, SharedBuffer) {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let comparison = Comparison::new(
            Workspace::new(dir.path().into()),
            Box::new(buffer.clone()),
            options,
            report,
        );
        (comparison, buffer)
    }

    #[rstest]
    fn reports_changed_runs(workspace_dir: TempDir) -> anyhow::Result<()> {
        let (comparison, buffer) =
            comparison(&workspace_dir, DiffOptions::default(), ReportOptions::default());

        let outcome = comparison.compare(&Source::parse("old.txt"), &Source::parse("new.txt"))?;

        assert_eq!(outcome, Outcome::Different);
        assert_eq!(
            buffer.contents(),
            "unchanged -1,1 +1,1\nreplaced -2,1 +2,1\n-b\n+x\nunchanged -3,1 +3,1\n"
        );
        Ok(())
    }

    #[rstest]
    fn identical_files_print_nothing_by_default(workspace_dir: TempDir) -> anyhow::Result<()> {
        let (comparison, buffer) =
            comparison(&workspace_dir, DiffOptions::default(), ReportOptions::default());

        let outcome = comparison.compare(&Source::parse("old.txt"), &Source::parse("copy.txt"))?;

        assert_eq!(outcome, Outcome::Identical);
        assert_eq!(buffer.contents(), "");
        Ok(())
    }

    #[rstest]
    #[case::brief_differ(ReportOptions::new(true, false, false), "new.txt", "Files old.txt and new.txt differ\n")]
    #[case::report_identical(ReportOptions::new(false, true, false), "copy.txt", "Files old.txt and copy.txt are identical\n")]
    #[case::brief_identical(ReportOptions::new(true, false, false), "copy.txt", "")]
    fn summary_messages(
        workspace_dir: TempDir,
        #[case] report: ReportOptions,
        #[case] right: &str,
        #[case] expected: &str,
    ) -> anyhow::Result<()> {
        let (comparison, buffer) = comparison(&workspace_dir, DiffOptions::default(), report);

        comparison.compare(&Source::parse("old.txt"), &Source::parse(right))?;

        assert_eq!(buffer.contents(), expected);
        Ok(())
    }

    #[rstest]
    fn ceiling_errors_carry_context(workspace_dir: TempDir) {
        let options = DiffOptions::default().with_max_lines(Some(2));
        let (comparison, buffer) = comparison(&workspace_dir, options, ReportOptions::default());

        let err = comparison
            .compare(&Source::parse("old.txt"), &Source::parse("new.txt"))
            .unwrap_err();

        assert_eq!(
            format!("{err:#}"),
            "cannot compare old.txt and new.txt: input too large: line count of at least 6 exceeds the limit of 2"
        );
        assert_eq!(buffer.contents(), "");
    }

    #[rstest]
    fn stdin_cannot_be_both_sides(workspace_dir: TempDir) {
        let (comparison, _) =
            comparison(&workspace_dir, DiffOptions::default(), ReportOptions::default());

        assert!(
            comparison
                .compare(&Source::Stdin, &Source::Stdin)
                .is_err()
        );
    }

    #[test]
    fn outcomes_map_to_diff_exit_codes() {
        assert_eq!(Outcome::Identical.exit_code(), 0);
        assert_eq!(Outcome::Different.exit_code(), 1);
        assert_eq!(TROUBLE_EXIT_CODE, 2);
    }
}
