use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use ldiff::areas::comparison::{Comparison, ReportOptions};
use ldiff::areas::workspace::{Source, Workspace};
use ldiff::artifacts::core::PagerWriter;
use ldiff::artifacts::diff::DiffOptions;
use ldiff::commands::compare::{Outcome, TROUBLE_EXIT_CODE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LDIFF_LOG";
const NO_PAGER_ENV: &str = "NO_PAGER";

#[derive(Parser)]
#[command(
    name = "ldiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two text files line by line",
    long_about = "Compares two text files line by line and prints the runs of lines \
    that were deleted, inserted or replaced. Exits with 0 when the files match, \
    1 when they differ and 2 when the comparison could not be completed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original file, or - for standard input")]
    left: String,
    #[arg(index = 2, help = "The changed file, or - for standard input")]
    right: String,
    #[arg(short = 'i', long, help = "Ignore case differences")]
    ignore_case: bool,
    #[arg(short = 'w', long = "ignore-all-space", help = "Ignore all whitespace")]
    ignore_all_space: bool,
    #[arg(short = 'q', long, help = "Only report whether the files differ")]
    brief: bool,
    #[arg(
        short = 's',
        long = "report-identical-files",
        help = "Report when the files are identical"
    )]
    report_identical_files: bool,
    #[arg(short = 'a', long, help = "Also print the lines of unchanged runs")]
    all: bool,
    #[arg(long, value_name = "N", help = "Refuse inputs with more than N lines in total")]
    max_lines: Option<usize>,
    #[arg(
        long,
        value_name = "N",
        help = "Give up when more than N lines differ"
    )]
    max_edit_distance: Option<usize>,
    #[arg(long, help = "Never page the output")]
    no_pager: bool,
}

impl Cli {
    fn diff_options(&self) -> DiffOptions {
        DiffOptions::default()
            .with_ignore_case(self.ignore_case)
            .with_ignore_whitespace(self.ignore_all_space)
            .with_max_lines(self.max_lines)
            .with_max_edit_distance(self.max_edit_distance)
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions::new(self.brief, self.report_identical_files, self.all)
    }

    fn use_pager(&self) -> bool {
        !self.no_pager
            && !self.brief
            && std::env::var_os(NO_PAGER_ENV).is_none()
            && std::io::stdout().is_terminal()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let workspace = Workspace::current()?;
    let (left, right) = (Source::parse(&cli.left), Source::parse(&cli.right));

    if !cli.use_pager() {
        let comparison = Comparison::new(
            workspace,
            Box::new(std::io::stdout()),
            cli.diff_options(),
            cli.report_options(),
        );
        return comparison.compare(&left, &right);
    }

    let writer = PagerWriter::titled(&cli.left, &cli.right)?;
    let pager = writer.handle();
    let comparison = Comparison::new(
        workspace,
        Box::new(writer),
        cli.diff_options(),
        cli.report_options(),
    );

    let outcome = comparison.compare(&left, &right)?;
    if outcome == Outcome::Different || cli.report_identical_files {
        pager.page()?;
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("ldiff: {err:#}");
            ExitCode::from(TROUBLE_EXIT_CODE)
        }
    }
}
