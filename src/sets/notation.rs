use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::{sets::{Set, Token}, utils::prelude::*};

static LITERAL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Renders the set as a literal, `{a, b, c}`, members ascending.
impl<T: Token> std::fmt::Display for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.members().iter().join(", "))
    }
}

/// Parses a set literal of the form `{a, b, c}`. Whitespace around the braces and
/// elements is ignored, `{}` is the empty set, and repeated elements collapse.
impl<T: Token> std::str::FromStr for Set<T> {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = match LITERAL_PATTERN.get() {
            Some(pattern) => pattern,
            None => {
                let compiled = Regex::new(r"^\{(?<body>[^{}]*)\}$")?;
                LITERAL_PATTERN.get_or_init(|| compiled)
            }
        };
        let Some(matches) = pattern.captures(s.trim()) else {
            return Err(anyhow!("could not parse set literal {s}"));
        };

        let body = matches.name("body").map_or("", |m| m.as_str()).trim();
        if body.is_empty() {
            return Ok(Set::default());
        }

        let mut set = Set::default();
        for tok in body.split(',').map(str::trim) {
            if tok.is_empty() {
                return Err(anyhow!("empty element in set literal {s}"));
            }
            set.add(T::parse_token(tok)?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use crate::sets::{IntSet, StringSet};

    #[test]
    fn display_is_sorted() {
        assert_eq!(IntSet::new([3, -1, 2, 3]).to_string(), "{-1, 2, 3}");
        assert_eq!(IntSet::default().to_string(), "{}");
        assert_eq!(StringSet::new(["pear", "apple"].map(String::from)).to_string(), "{apple, pear}");
    }

    #[test]
    fn parse_literals() {
        let s = "{ 4, 1,1 ,  9 }".parse::<IntSet>().unwrap();
        assert_eq!(s.members(), vec![1, 4, 9]);

        let empty = "  { }".parse::<IntSet>().unwrap();
        assert!(empty.is_empty());

        let words = "{b, a, c.d}".parse::<StringSet>().unwrap();
        assert_eq!(words.members(), vec!["a", "b", "c.d"]);
    }

    #[test]
    fn reject_malformed_literals() {
        assert!("1, 2".parse::<IntSet>().is_err());
        assert!("{1, 2".parse::<IntSet>().is_err());
        assert!("{1,,2}".parse::<IntSet>().is_err());
        assert!("{1, 2,}".parse::<IntSet>().is_err());
        assert!("{1, two}".parse::<IntSet>().is_err());
        assert!("{{1}}".parse::<IntSet>().is_err());
        assert!("{a b}".parse::<StringSet>().is_err());
    }

    #[test]
    fn display_parses_back() {
        let s = StringSet::new(["z", "y:1", "x_0"].map(String::from));
        assert_eq!(s.to_string().parse::<StringSet>().unwrap(), s);
    }
}
