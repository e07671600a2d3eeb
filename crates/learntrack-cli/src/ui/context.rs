//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and resolved flags.
    ///
    /// # Arguments
    /// * `plain` - plain output was requested (flag or config)
    /// * `no_color` - color was disabled (flag or config)
    /// * `ascii` - ASCII symbols were requested (flag or config)
    pub fn from_env(plain: bool, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color && !no_color_env && !term_is_dumb;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(plain, is_tty, term_is_dumb);
        // Plain output stays ASCII so piped sessions are byte-stable.
        let unicode = !ascii && mode.is_pretty();

        Self {
            is_tty,
            color,
            unicode,
            width,
            mode,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width from COLUMNS, falling back to 80.
fn terminal_width() -> Option<usize> {
    let cols = std::env::var("COLUMNS").ok()?;
    match cols.parse::<usize>() {
        Ok(width) if width > 0 => Some(width),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_request_forces_plain_mode() {
        let ctx = UiContext::from_env(true, false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_plain_mode_is_ascii_only() {
        let ctx = UiContext::from_env(true, false, false);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, false, false);
        assert!(ctx.width > 0);
    }
}
