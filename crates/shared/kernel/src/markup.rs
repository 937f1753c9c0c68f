//! Helpers for the small markup fragments (SVG, HTML) the engine emits.

use std::borrow::Cow;

/// Escapes text for use inside XML/HTML element content and quoted attributes.
///
/// Borrows when nothing needs escaping.
#[must_use]
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Cuts `raw` to `limit` characters; longer text keeps `limit - 3` characters
/// followed by `...`.
#[must_use]
pub fn ellipsize(raw: &str, limit: usize) -> Cow<'_, str> {
    if raw.chars().count() <= limit {
        return Cow::Borrowed(raw);
    }
    let kept: String = raw.chars().take(limit.saturating_sub(3)).collect();
    Cow::Owned(format!("{kept}..."))
}

/// First `limit` characters of `raw`.
#[must_use]
pub fn truncate(raw: &str, limit: usize) -> &str {
    raw.char_indices().nth(limit).map_or(raw, |(end, _)| &raw[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_borrows_clean_text() {
        assert!(matches!(escape("Côte d Ivoire"), Cow::Borrowed(_)));
        assert_eq!(escape("Bosnia & <Herzegovina>"), "Bosnia &amp; &lt;Herzegovina&gt;");
        assert_eq!(escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn ellipsize_keeps_room_for_the_marker() {
        assert_eq!(ellipsize("Short tip", 25), "Short tip");
        assert_eq!(ellipsize("exactly twenty-five chars", 25), "exactly twenty-five chars");
        assert_eq!(ellipsize("Bollards are white with red", 25), "Bollards are white wit...");
        assert_eq!(ellipsize("日本語のテキストはとても長い場合があります。本当に長いです", 25).chars().count(), 25);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Yellow plates", 20), "Yellow plates");
        assert_eq!(truncate("Ελληνικά γράμματα", 8), "Ελληνικά");
        assert_eq!(truncate("abc", 0), "");
    }
}
