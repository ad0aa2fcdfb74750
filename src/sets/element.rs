use std::sync::OnceLock;

use regex::Regex;

use crate::utils::prelude::*;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Anything a set can hold: hashable for the membership index, totally ordered for listings.
pub trait Element: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

impl<T: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug> Element for T {}

/// An element kind with a textual form, so sets of it can be written down and read back.
pub trait Token: Element + std::fmt::Display {
    /// Short name of the kind, as used by the shell.
    const KIND: &'static str;

    /// Parses a single element from its token.
    fn parse_token(s: &str) -> Result<Self>;
}

impl Token for i64 {
    const KIND: &'static str = "int";

    fn parse_token(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .with_context(|| format!("could not parse element {s} as an integer"))
    }
}

impl Token for String {
    const KIND: &'static str = "text";

    fn parse_token(s: &str) -> Result<Self> {
        // commas, braces and whitespace would be ambiguous in a set literal
        let pattern = match TOKEN_PATTERN.get() {
            Some(pattern) => pattern,
            None => {
                let compiled = Regex::new("^[A-Za-z0-9_.:-]+$")?;
                TOKEN_PATTERN.get_or_init(|| compiled)
            }
        };
        if !pattern.is_match(s) {
            return Err(anyhow!("could not parse element {s:?} as a text token"));
        }
        Ok(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{TOKEN_PATTERN, Token};

    #[test]
    fn integers() {
        assert_eq!(i64::parse_token("-42").unwrap(), -42);
        assert_eq!(i64::parse_token("0").unwrap(), 0);
        assert!(i64::parse_token("4x").is_err());
        assert!(i64::parse_token("").is_err());
    }

    #[test]
    fn text_tokens() {
        assert_eq!(String::parse_token("alpha").unwrap(), "alpha");
        assert_eq!(String::parse_token("a.b:c-d_1").unwrap(), "a.b:c-d_1");
        assert!(String::parse_token("two words").is_err());
        assert!(String::parse_token("a,b").is_err());
        assert!(String::parse_token("{a}").is_err());
        assert!(String::parse_token("").is_err());
    }

    #[test]
    fn text_pattern_is_compiled_once() {
        String::parse_token("first").unwrap();
        let cached = TOKEN_PATTERN.get().unwrap();
        String::parse_token("second").unwrap();
        assert!(String::parse_token("no way").is_err());
        assert!(std::ptr::eq(TOKEN_PATTERN.get().unwrap(), cached));
    }
}
