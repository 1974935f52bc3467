//! Terminal stand-in for the system clipboard

use barovia_core::{Clipboard, ClipboardError};

/// Prints exported save text to stdout for manual copying
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        println!("{}", text);
        Ok(())
    }
}
