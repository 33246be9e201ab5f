use crate::areas::workspace::Workspace;
use crate::artifacts::diff::DiffOptions;
use derive_new::new;
use std::cell::{RefCell, RefMut};

/// How a finished comparison is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct ReportOptions {
    /// Only say whether the inputs differ.
    pub brief: bool,
    /// Say so when the inputs are identical.
    pub report_identical: bool,
    /// Print the lines of unchanged runs too.
    pub show_unchanged: bool,
}

pub struct Comparison {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DiffOptions,
    report: ReportOptions,
}

impl Comparison {
    pub fn new(
        workspace: Workspace,
        writer: Box<dyn std::io::Write>,
        options: DiffOptions,
        report: ReportOptions,
    ) -> Self {
        Comparison {
            workspace,
            writer: RefCell::new(writer),
            options,
            report,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn report(&self) -> &ReportOptions {
        &self.report
    }
}
