//! Standalone-layout padding normalization
//!
//! Pages that render standalone reserve room for their own sidebar with a
//! `pl-[...]` utility class or an inline `padding-left`. Inside the shell
//! that padding would double up with the shell's own chrome, so it is
//! stripped from the fragment markup before injection. Everything else in
//! `class`/`style` attributes is left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches a serialized `class` attribute
static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="([^"]*)""#).expect("static pattern"));

/// Matches a left-padding utility token like `pl-[280px]`
static PAD_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"pl-\[[^\]]+\]").expect("static pattern"));

/// Matches a serialized `style` attribute
static STYLE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"style="([^"]*)""#).expect("static pattern"));

/// Matches an inline `padding-left` declaration
static PAD_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)padding-left\s*:[^;]*;?").expect("static pattern"));

/// Strips left-padding utility classes and inline `padding-left`
/// declarations from fragment markup
///
/// Operates on serialized markup (attribute values are double-quoted and
/// entity-escaped by the serializer, so the attribute regexes cannot run
/// past a value). Class lists are re-joined with single spaces; emptied
/// style attributes are left present but empty, which is inert.
pub fn strip_standalone_padding(html: &str) -> String {
    let html = CLASS_ATTR.replace_all(html, |caps: &Captures<'_>| {
        let cleaned = PAD_CLASS.replace_all(&caps[1], "");
        let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        format!(r#"class="{}""#, cleaned)
    });
    let html = STYLE_ATTR.replace_all(&html, |caps: &Captures<'_>| {
        let cleaned = PAD_STYLE.replace_all(&caps[1], "");
        format!(r#"style="{}""#, cleaned.trim())
    });
    html.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_padding_utility_class() {
        let html = r#"<section class="pl-[280px] p-8 flex"><p>X</p></section>"#;
        assert_eq!(
            strip_standalone_padding(html),
            r#"<section class="p-8 flex"><p>X</p></section>"#
        );
    }

    #[test]
    fn test_strips_arbitrary_padding_values() {
        let html = r#"<div class="pl-[17.5rem]">X</div>"#;
        assert_eq!(strip_standalone_padding(html), r#"<div class="">X</div>"#);
    }

    #[test]
    fn test_strips_inline_padding_left() {
        let html = r#"<div style="padding-left: 280px; color: red">X</div>"#;
        assert_eq!(
            strip_standalone_padding(html),
            r#"<div style="color: red">X</div>"#
        );
    }

    #[test]
    fn test_other_classes_and_styles_untouched() {
        let html = r#"<div class="plain pl-8" style="padding-right: 4px">X</div>"#;
        // `pl-8` is not the bracketed standalone token and stays.
        assert_eq!(strip_standalone_padding(html), html);
    }

    #[test]
    fn test_text_content_untouched() {
        let html = r#"<p>the pl-[280px] token in prose stays</p>"#;
        assert_eq!(strip_standalone_padding(html), html);
    }

    #[test]
    fn test_applies_to_every_element_in_fragment() {
        let html = r#"<div class="pl-[280px]"><span class="pl-[10px] bold">X</span></div>"#;
        assert_eq!(
            strip_standalone_padding(html),
            r#"<div class=""><span class="bold">X</span></div>"#
        );
    }
}
