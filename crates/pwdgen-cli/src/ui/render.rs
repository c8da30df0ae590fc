//! Rendering helpers for status lines.

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", styles::dim(), ctx.color);
    format!("{} {}", label, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> UiContext {
        UiContext::resolve(false, None, false)
    }

    #[test]
    fn test_badge_plain() {
        assert_eq!(badge(&plain(), Badge::Ok, "done"), "[OK] done");
        assert_eq!(badge(&plain(), Badge::Warn, ""), "[WARN]");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain(), "pwdgen init"), "Hint: pwdgen init");
    }
}
