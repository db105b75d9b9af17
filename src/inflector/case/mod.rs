use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use super::CaseError;

/// Provides conversion to and detection of camel case strings.
///
/// Example string `camelCase`
pub mod camel;
pub use camel::is_camel_case;
pub use camel::to_camel_case;

/// Provides conversion to and detection of dot case strings.
///
/// Example string `dot.case`
pub mod dot;
pub use dot::is_dot_case;
pub use dot::to_dot_case;

/// Provides conversion to and detection of kebab case strings.
///
/// Example string `kebab-case`
pub mod kebab;
pub use kebab::is_kebab_case;
pub use kebab::to_kebab_case;

static NARROW_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

static WIDE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]+").unwrap());

/// Which characters split an input into tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Delimiters {
    /// Whitespace, `-` and `_`.
    Narrow,
    /// Whitespace, `_` and every other non-word character.
    Wide,
}

impl Delimiters {
    fn regex(self) -> &'static Regex {
        match self {
            Delimiters::Narrow => &*NARROW_DELIMITERS,
            Delimiters::Wide => &*WIDE_DELIMITERS,
        }
    }
}

/// How a conversion treats input that yields no tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Empty input converts to the empty string; non-strings get a generic type error.
    Lenient,
    /// Empty input is a value error; null is told apart from other non-strings.
    Strict,
}

/// Splits `input` into lowercase tokens.
///
/// Surrounding whitespace is trimmed and runs of delimiters collapse into a
/// single split point. Within each fragment a new token starts at every
/// uppercase letter, except in the uppercase run the fragment opens with, so
/// `HELLO` stays whole while `fooABar` splits into `foo`, `a`, `bar`. An input
/// made only of whitespace or delimiters yields no tokens.
///
/// ```
/// use caseconv::inflector::case::{tokenize, Delimiters};
///
/// assert_eq!(tokenize("fooBar baz", Delimiters::Narrow), ["foo", "bar", "baz"]);
/// assert_eq!(tokenize("HELLO world", Delimiters::Narrow), ["hello", "world"]);
/// assert_eq!(tokenize("hello@world", Delimiters::Narrow), ["hello@world"]);
/// assert_eq!(tokenize("hello@world", Delimiters::Wide), ["hello", "world"]);
/// assert!(tokenize(" _-_ ", Delimiters::Narrow).is_empty());
/// ```
pub fn tokenize(input: &str, delimiters: Delimiters) -> Vec<String> {
    delimiters
        .regex()
        .split(input.trim())
        .flat_map(split_humps)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Splits a delimiter-free fragment before every uppercase letter outside its
/// leading uppercase run.
fn split_humps(fragment: &str) -> Vec<&str> {
    let mut humps = vec![];
    let mut start = 0;
    let mut leading = true;
    for (i, c) in fragment.char_indices() {
        if !is_upper(c) {
            leading = false;
        } else if !leading && i > start {
            humps.push(&fragment[start..i]);
            start = i;
        }
    }
    humps.push(&fragment[start..]);
    humps
}

/// An uppercase letter with a distinct lowercase form.
#[inline]
fn is_upper(c: char) -> bool {
    c.is_uppercase() && c.to_lowercase().ne(std::iter::once(c))
}

/// A target casing convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Case {
    Camel,
    Dot,
    Kebab,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Camel, Case::Dot, Case::Kebab];

    pub fn delimiters(self) -> Delimiters {
        match self {
            Case::Camel | Case::Dot => Delimiters::Narrow,
            Case::Kebab => Delimiters::Wide,
        }
    }

    pub fn validation(self) -> Validation {
        match self {
            Case::Camel | Case::Dot => Validation::Lenient,
            Case::Kebab => Validation::Strict,
        }
    }

    pub fn tokenize(self, input: &str) -> Vec<String> {
        tokenize(input, self.delimiters())
    }

    /// Joins already tokenized words under this convention.
    pub fn join(self, tokens: &[String]) -> String {
        match self {
            Case::Camel => join_camel(tokens),
            Case::Dot => tokens.join("."),
            Case::Kebab => tokens.join("-"),
        }
    }

    /// Tokenizes, validates and joins `input`.
    ///
    /// ```
    /// use caseconv::inflector::case::Case;
    ///
    /// assert_eq!(Case::Dot.convert("fooBarBaz").unwrap(), "foo.bar.baz");
    /// assert_eq!(Case::Camel.convert("   ").unwrap(), "");
    /// assert!(Case::Kebab.convert("   ").is_err());
    /// ```
    pub fn convert(self, input: &str) -> Result<String, CaseError> {
        let tokens = self.tokenize(input);
        if tokens.is_empty() && self.validation() == Validation::Strict {
            return Err(CaseError::Empty);
        }
        Ok(self.join(&tokens))
    }

    /// Determines if `input` is already written in this case.
    pub fn is_case(self, input: &str) -> bool {
        self.convert(input).is_ok_and(|converted| converted == input)
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Dot => "dot.case",
            Case::Kebab => "kebab-case",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case `{0}`, expected one of camelCase, dot.case or kebab-case")]
pub struct UnknownCase(pub String);

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camelCase" | "camel-case" | "camel" => Ok(Case::Camel),
            "dot.case" | "dot-case" | "dot" => Ok(Case::Dot),
            "kebab-case" | "kebab" => Ok(Case::Kebab),
            _ => Err(UnknownCase(s.to_string())),
        }
    }
}

fn join_camel(tokens: &[String]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(String::len).sum());
    let mut tokens = tokens.iter();
    if let Some(first) = tokens.next() {
        result.push_str(first);
    }
    for token in tokens {
        result.push_str(&capitalize(token));
    }
    result
}

#[inline]
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[test]
fn test_tokenize_trims_whitespace() {
    assert_eq!(tokenize("  foo  ", Delimiters::Narrow), ["foo"])
}

#[test]
fn test_tokenize_drops_empty_fragments() {
    assert_eq!(tokenize("foo__--  bar", Delimiters::Narrow), ["foo", "bar"])
}

#[test]
fn test_tokenize_splits_humps() {
    assert_eq!(tokenize("fooBarBaz", Delimiters::Narrow), ["foo", "bar", "baz"])
}

#[test]
fn test_tokenize_splits_after_digit() {
    assert_eq!(tokenize("utf8String", Delimiters::Narrow), ["utf8", "string"])
}

#[test]
fn test_tokenize_keeps_uppercase_runs_together() {
    assert_eq!(tokenize("HELLO WORLD", Delimiters::Narrow), ["hello", "world"])
}

#[test]
fn test_tokenize_splits_every_letter_of_a_trailing_uppercase_run() {
    assert_eq!(
        tokenize("parseHTML", Delimiters::Narrow),
        ["parse", "h", "t", "m", "l"]
    )
}

#[test]
fn test_tokenize_splits_single_letter_humps() {
    assert_eq!(tokenize("fooABar", Delimiters::Narrow), ["foo", "a", "bar"]);
    assert_eq!(tokenize("aBC", Delimiters::Narrow), ["a", "b", "c"]);
}

#[test]
fn test_tokenize_keeps_leading_uppercase_run() {
    assert_eq!(tokenize("ABC1Def", Delimiters::Narrow), ["abc1", "def"])
}

#[test]
fn test_tokenize_splits_after_punctuation() {
    assert_eq!(
        tokenize("robertC.Martin", Delimiters::Narrow),
        ["robert", "c.", "martin"]
    )
}

#[test]
fn test_tokenize_splits_expanded_capitals() {
    assert_eq!(tokenize("aSS", Delimiters::Narrow), ["a", "s", "s"])
}

#[test]
fn test_is_upper() {
    assert!(is_upper('A'));
    assert!(is_upper('Ä'));
    assert!(!is_upper('a'));
    assert!(!is_upper('ß'));
    assert!(!is_upper('1'));
}

#[test]
fn test_camel_output_retokenizes_to_its_tokens() {
    let camel = Case::Camel.convert("foo a bar").unwrap();
    let tokens = tokenize(&camel, Delimiters::Wide);
    assert_eq!(tokens, ["foo", "a", "bar"]);
    assert_eq!(Case::Dot.join(&tokens), "foo.a.bar");
}

#[test]
fn test_tokenize_narrow_keeps_punctuation() {
    assert_eq!(
        tokenize("Robert C. Martin", Delimiters::Narrow),
        ["robert", "c.", "martin"]
    )
}

#[test]
fn test_tokenize_wide_drops_punctuation() {
    assert_eq!(
        tokenize("Robert C. Martin", Delimiters::Wide),
        ["robert", "c", "martin"]
    )
}

#[test]
fn test_tokenize_wide_keeps_non_ascii_letters() {
    assert_eq!(tokenize("café crème", Delimiters::Wide), ["café", "crème"])
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("", Delimiters::Wide).is_empty())
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("world"), "World")
}

#[test]
fn test_capitalize_leaves_digits() {
    assert_eq!(capitalize("2nd"), "2nd")
}

#[test]
fn test_join_camel_single_token() {
    assert_eq!(join_camel(&["hello".to_string()]), "hello")
}

#[test]
fn test_join_camel_no_tokens() {
    assert_eq!(join_camel(&[]), "")
}

#[test]
fn test_case_from_str_aliases() {
    assert_eq!("camel".parse::<Case>(), Ok(Case::Camel));
    assert_eq!("dot.case".parse::<Case>(), Ok(Case::Dot));
    assert_eq!("kebab".parse::<Case>(), Ok(Case::Kebab));
    assert_eq!(
        "snake".parse::<Case>(),
        Err(UnknownCase("snake".to_string()))
    );
}

#[test]
fn test_case_display_parses_back() {
    for case in Case::ALL {
        assert_eq!(case.to_string().parse::<Case>(), Ok(case));
    }
}
