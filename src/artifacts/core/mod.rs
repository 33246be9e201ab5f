//! Paged output for long change-lists

use minus::Pager;
use std::io::{self, Write};

/// Output sink that feeds a `minus` pager.
///
/// A comparison writes into it like any other writer; the pager is only
/// shown once [`PagerWriter::page`] runs, after the whole change-list has
/// been rendered.
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    /// A pager whose prompt names the two compared inputs.
    pub fn titled(left: &str, right: &str) -> anyhow::Result<Self> {
        let pager = Pager::new();
        pager.set_prompt(format!("{left} vs {right}"))?;
        Ok(PagerWriter { pager })
    }

    /// Handle to the same pager, kept by the caller while the writer itself
    /// is boxed away inside the comparison.
    pub fn handle(&self) -> PagerWriter {
        PagerWriter {
            pager: self.pager.clone(),
        }
    }

    pub fn page(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
