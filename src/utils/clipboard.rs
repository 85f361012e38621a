use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;

/// OSC 52 "set clipboard" sequence; terminals that support it copy
/// the decoded payload to the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

pub fn copy(text: &str) -> Result<()> {
    let mut out = std::io::stdout();
    out.write_all(osc52_sequence(text).as_bytes())
        .context("Writing clipboard sequence")?;
    out.flush().context("Flushing stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("Ankara"), "\x1b]52;c;QW5rYXJh\x07");
    }
}
