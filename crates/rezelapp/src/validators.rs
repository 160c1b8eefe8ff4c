//! Token validators.
//!
//! A validator turns one whitespace-free token into its canonical value, or
//! rejects it with `None`. Rejection is never an error: the resolver simply
//! leaves that breakpoint slot absent.
//!
//! Enumerated validators return the lower-cased literal token (not its
//! position in the domain), so generated names read like the input.

use crate::domains::{DIMENSION_SIZES, DISPLAY_VALUES, FONT_SIZES, TEXT_ALIGN_VALUES};

/// Signature shared by every value parser.
pub type TokenParser = fn(&str) -> Option<String>;

/// How a key's raw value is interpreted.
#[derive(Debug, Clone, Copy)]
pub enum Validator {
    /// The key is on when present; its value is never inspected.
    Boolean,
    /// Each positional token is run through the parser.
    Parser(TokenParser),
}

impl Validator {
    pub fn is_boolean(&self) -> bool {
        matches!(self, Validator::Boolean)
    }

    /// Validate a single token. Boolean validators accept nothing.
    pub fn check(&self, token: &str) -> Option<String> {
        match self {
            Validator::Boolean => None,
            Validator::Parser(parse) => parse(token),
        }
    }
}

/// Parses the leading integer of a token (`"07"` -> `"7"`, `"3px"` -> `"3"`).
///
/// Zero is rejected along with unparseable input, so `"0"` leaves its slot
/// absent.
pub fn integer(token: &str) -> Option<String> {
    let token = token.trim();
    let (sign, rest) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value: i64 = format!("{}{}", sign, &rest[..end]).parse().ok()?;
    (value != 0).then(|| value.to_string())
}

pub fn dimension(token: &str) -> Option<String> {
    member_of(token, DIMENSION_SIZES)
}

pub fn font(token: &str) -> Option<String> {
    member_of(token, FONT_SIZES)
}

pub fn display(token: &str) -> Option<String> {
    member_of(token, DISPLAY_VALUES)
}

pub fn text_align(token: &str) -> Option<String> {
    member_of(token, TEXT_ALIGN_VALUES)
}

/// Case-insensitive membership check returning the normalized token.
fn member_of(token: &str, domain: &[&str]) -> Option<String> {
    let value = token.trim().to_lowercase();
    domain.contains(&value.as_str()).then_some(value)
}
