//! Hand-off of the finished mailto link to the user's mail client

use anyhow::Result;

/// Receives the `mailto:` link of an accepted submission
#[cfg_attr(test, mockall::automock)]
pub trait LinkSink {
    fn deliver(&mut self, uri: &str) -> Result<()>;
}

/// Copies the link to the system clipboard
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl LinkSink for ClipboardSink {
    fn deliver(&mut self, uri: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(uri)?;
        Ok(())
    }
}
