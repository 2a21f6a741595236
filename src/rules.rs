//! Formatting rules and the ignore set.
//!
//! Every tag the renderer recognises falls in exactly one of two tables:
//! [`IGNORED_TAGS`] drops the subtree, [`FORMAT_RULES`] wraps the rendered
//! children in a prefix and suffix. Anything else is an unknown element.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Literal text placed around an element's rendered children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// Text emitted before the content.
    pub prefix: &'static str,
    /// Text emitted after the content.
    pub suffix: &'static str,
}

impl FormatRule {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Wrap already rendered content.
    #[must_use]
    pub fn wrap(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(content);
        out.push_str(self.suffix);
        out
    }
}

const BLOCK: FormatRule = FormatRule::new("\n", "\n");
const INLINE: FormatRule = FormatRule::new("", " ");
const ROW_GROUP: FormatRule = FormatRule::new("", "\n");
const CELL: FormatRule = FormatRule::new(" ", " |");

/// Tag name → formatting rule, in table order.
pub static FORMAT_RULE_LIST: [(&str, FormatRule); 41] = [
    // Text
    ("p", BLOCK),
    ("span", INLINE),
    ("a", INLINE),
    ("text", INLINE),
    // Headings
    ("h1", FormatRule::new("\n# ", "\n")),
    ("h2", FormatRule::new("\n## ", "\n")),
    ("h3", FormatRule::new("\n### ", "\n")),
    ("h4", FormatRule::new("\n#### ", "\n")),
    ("h5", FormatRule::new("\n##### ", "\n")),
    ("h6", FormatRule::new("\n###### ", "\n")),
    // Lists
    ("ul", BLOCK),
    ("ol", BLOCK),
    ("li", FormatRule::new("\n- ", "")),
    ("dl", BLOCK),
    ("dt", FormatRule::new("\n**", "**")),
    ("dd", FormatRule::new(": ", "\n")),
    // Quotes
    ("blockquote", FormatRule::new("\n> ", "\n")),
    ("q", FormatRule::new("\"", "\"")),
    ("cite", FormatRule::new("_", "_")),
    // Sections
    ("article", BLOCK),
    ("section", BLOCK),
    ("main", BLOCK),
    ("header", BLOCK),
    ("footer", BLOCK),
    ("nav", BLOCK),
    ("aside", BLOCK),
    // Other blocks
    ("div", BLOCK),
    ("pre", FormatRule::new("\n```\n", "\n```\n")),
    ("code", FormatRule::new("`", "`")),
    ("figure", BLOCK),
    ("figcaption", FormatRule::new("_Figure: ", "_\n")),
    // Tables (GFM pipe rows)
    ("table", BLOCK),
    ("thead", ROW_GROUP),
    ("tbody", ROW_GROUP),
    ("tfoot", ROW_GROUP),
    ("tr", FormatRule::new("| ", "\n")),
    ("th", CELL),
    ("td", CELL),
    ("caption", FormatRule::new("\n_", "_\n")),
    ("summary", FormatRule::new("\n**", "**\n")),
    ("details", BLOCK),
];

/// Tags whose whole subtree is dropped.
pub static IGNORED_TAG_LIST: [&str; 25] = [
    // Scripts and styles
    "script", "style", "noscript",
    // Media
    "img", "video", "audio", "svg", "canvas", "picture", "source",
    // Interactive
    "button", "input", "textarea", "select", "option", "form", "iframe",
    // Non-content
    "meta", "link", "br", "hr", "wbr", "template", "slot", "portal",
];

/// `FORMAT_RULE_LIST` as a `HashMap`
pub static FORMAT_RULES: LazyLock<HashMap<&'static str, FormatRule>> =
    LazyLock::new(|| FORMAT_RULE_LIST.into_iter().collect());

/// `IGNORED_TAG_LIST` as a `HashSet`
pub static IGNORED_TAGS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IGNORED_TAG_LIST.into_iter().collect());

/// Formatting rule for `tag`, if it has one.
#[inline]
#[must_use]
pub fn format_rule(tag: &str) -> Option<FormatRule> {
    FORMAT_RULES.get(tag).copied()
}

/// True when `tag` is in the ignore set.
#[inline]
#[must_use]
pub fn is_ignored(tag: &str) -> bool {
    IGNORED_TAGS.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_disjoint() {
        for tag in IGNORED_TAGS.iter() {
            assert!(format_rule(tag).is_none(), "{tag} is both ignored and formatted");
        }
    }

    #[test]
    fn no_duplicate_rules() {
        assert_eq!(FORMAT_RULES.len(), FORMAT_RULE_LIST.len());
    }

    #[test]
    fn lookups() {
        assert_eq!(format_rule("h2"), Some(FormatRule::new("\n## ", "\n")));
        assert_eq!(format_rule("blink"), None);
        assert!(is_ignored("script"));
        assert!(is_ignored("portal"));
        assert!(!is_ignored("p"));
    }

    #[test]
    fn wrap_places_prefix_and_suffix() {
        assert_eq!(format_rule("code").map(|r| r.wrap("x")), Some("`x`".to_string()));
        assert_eq!(format_rule("li").map(|r| r.wrap("item")), Some("\n- item".to_string()));
    }
}
