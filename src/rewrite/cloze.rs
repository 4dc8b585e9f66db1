//! Cloze alias rewriting.
//!
//! Authors write `$$text$$` for the next cloze deletion or `$N$text$$` for
//! an explicitly numbered one. Both become `{{cN::text}}`.

use once_cell::sync::Lazy;
use regex::Regex;

static CLOZE_ALIAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d*)\$(.+?)\$\$").unwrap());

/// A matched cloze alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeAlias {
    /// Explicit number, if the alias carried one
    pub number: Option<String>,
    /// Text payload, untrimmed
    pub text: String,
}

impl ClozeAlias {
    /// Render the alias as cloze markup, using `counter` when unnumbered.
    pub fn to_cloze(&self, counter: usize) -> String {
        let number = match &self.number {
            Some(number) => number.clone(),
            None => counter.to_string(),
        };
        format!("{{{{c{}::{}}}}}", number, self.text.trim())
    }
}

/// Find the leftmost cloze alias in markup.
///
/// Returns the alias with the byte range it occupies.
pub fn find_alias(markup: &str) -> Option<(ClozeAlias, std::ops::Range<usize>)> {
    let caps = CLOZE_ALIAS.captures(markup)?;
    let range = caps.get(0)?.range();
    let number = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|digits| !digits.is_empty())
        .map(String::from);
    let text = caps.get(2).map(|m| m.as_str()).unwrap_or_default().to_string();
    Some((ClozeAlias { number, text }, range))
}

/// Rewrite every cloze alias in serialized cell markup.
///
/// Aliases are consumed left to right. The counter starts at 1 and advances
/// on every alias, numbered or not, so an explicit number never resets it.
pub fn rewrite_cloze_aliases(markup: &str) -> String {
    let mut result = markup.to_string();
    let mut counter = 1;
    while let Some((alias, range)) = find_alias(&result) {
        result.replace_range(range, &alias.to_cloze(counter));
        counter += 1;
    }
    if counter > 1 {
        log::debug!("Rewrote {} cloze aliases", counter - 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_then_explicit() {
        assert_eq!(
            rewrite_cloze_aliases("$$A$$ $2$B$$"),
            "{{c1::A}} {{c2::B}}"
        );
    }

    #[test]
    fn test_explicit_does_not_reset_counter() {
        assert_eq!(
            rewrite_cloze_aliases("$3$A$$ $$B$$"),
            "{{c3::A}} {{c2::B}}"
        );
    }

    #[test]
    fn test_counter_collision_preserved() {
        // The explicit alias still advances the counter, so the third alias is 3.
        assert_eq!(
            rewrite_cloze_aliases("$$a$$ $1$b$$ $$c$$"),
            "{{c1::a}} {{c1::b}} {{c3::c}}"
        );
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(rewrite_cloze_aliases("Capital: $$ Paris $$."), "Capital: {{c1::Paris}}.");
    }

    #[test]
    fn test_nested_markup_preserved() {
        let markup = r#"$$<span style="font-weight:700; ">Madrid</span>$$"#;
        assert_eq!(
            rewrite_cloze_aliases(markup),
            r#"{{c1::<span style="font-weight:700; ">Madrid</span>}}"#
        );
    }

    #[test]
    fn test_no_alias_unchanged() {
        assert_eq!(rewrite_cloze_aliases("costs $5 or $6"), "costs $5 or $6");
        assert_eq!(rewrite_cloze_aliases(""), "");
    }

    #[test]
    fn test_find_alias() {
        let (alias, range) = find_alias("x $12$ten$$ y").unwrap();
        assert_eq!(alias.number.as_deref(), Some("12"));
        assert_eq!(alias.text, "ten");
        assert_eq!(range, 2..11);
        assert!(find_alias("no alias").is_none());
    }
}
