use anyhow::Context;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_ARG: &str = "-";

/// One side of a comparison as named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "{STDIN_ARG}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves relative sources against a root directory and reads them.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn current() -> anyhow::Result<Self> {
        let pwd = std::env::current_dir().context("cannot determine the current directory")?;
        Ok(Workspace::new(pwd.into_boxed_path()))
    }

    pub fn read_source(&self, source: &Source) -> anyhow::Result<Vec<u8>> {
        match source {
            Source::Stdin => {
                let mut data = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut data)
                    .context("cannot read standard input")?;
                Ok(data)
            }
            Source::File(path) => self.read_file(path),
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        if file_path.is_dir() {
            anyhow::bail!("{}: is a directory", file_path.display());
        }

        std::fs::read(&file_path).with_context(|| format!("cannot read {}", file_path.display()))
    }
}
