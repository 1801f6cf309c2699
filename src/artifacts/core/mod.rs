//! Output plumbing shared by the commands

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `io::Write` adapter that feeds a `minus` pager
///
/// Everything written is buffered in the pager; call [`PagerWriter::page`]
/// once the command is done to display it.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn page(pager: Pager) -> anyhow::Result<()> {
        minus::page_all(pager)?;
        Ok(())
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Paging only makes sense for a human at a terminal
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && io::stdout().is_terminal()
}
