use std::fmt;

use serde::{Deserialize, Serialize};

const LIST_SEPARATOR: char = ',';

/// Space, tab, newline, carriage return, NUL and vertical tab. Other Unicode
/// whitespace such as U+00A0 is part of the value.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// An environment variable after interpretation.
///
/// Serializes without a tag, so JSON output reads `true`, `null`, `"text"`
/// or `["a","b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Bool(bool),
    #[default]
    Null,
    Str(String),
    List(Vec<String>),
}

impl EnvValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// `Str` is split on commas, `List` is returned as is. `Bool` and `Null`
    /// have no list form.
    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            Self::Str(s) => Some(split_list(&s)),
            Self::List(items) => Some(items),
            Self::Bool(_) | Self::Null => None,
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<bool> for EnvValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for EnvValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<String>> for EnvValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<EnvValue>> From<Option<T>> for EnvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Trims `raw` and returns `None` when nothing is left.
pub(crate) fn trim_non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_matches(TRIM_CHARS);
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Interprets a raw value.
///
/// Blank input yields `None` so the caller can substitute its default.
/// `true`, `false` and `null` match case-insensitively; anything else is
/// returned trimmed with its casing untouched.
///
/// ```
/// use trogon_env::{interpret, EnvValue};
///
/// assert_eq!(interpret(" False "), Some(EnvValue::Bool(false)));
/// assert_eq!(interpret("NuLL"), Some(EnvValue::Null));
/// assert_eq!(interpret(" aBc123 "), Some(EnvValue::Str("aBc123".into())));
/// assert_eq!(interpret(" \t "), None);
/// ```
pub fn interpret(raw: &str) -> Option<EnvValue> {
    let trimmed = trim_non_blank(raw)?;

    let value = if trimmed.eq_ignore_ascii_case("false") {
        EnvValue::Bool(false)
    } else if trimmed.eq_ignore_ascii_case("true") {
        EnvValue::Bool(true)
    } else if trimmed.eq_ignore_ascii_case("null") {
        EnvValue::Null
    } else {
        EnvValue::Str(trimmed.to_string())
    };
    Some(value)
}

/// Empty segments are kept: `"a,,b"` is three items.
pub(crate) fn split_list(s: &str) -> Vec<String> {
    s.split(LIST_SEPARATOR).map(str::to_string).collect()
}
