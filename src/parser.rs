//! Limit pattern parser: tokenizer, operator peeling and kind classification.
//!
//! A pattern is a list of selectors separated by `:` or `,`. Each selector may
//! carry one leading operator (`&` intersect, `!` exclude); without one it is
//! a union member. A backslash escapes the next character, which lets
//! separators appear inside a selector such as a regex.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::LimitError;
use crate::types::{Entity, EntityKind, OpKind, ParsedLimit};

/// Unicode decimal digits (general category Nd).
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("digit class is a valid regex"));

/// Letters (category L) or `_`, then letters, decimal digits, `_` or `-`.
static GROUPISH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_-]*$").expect("group name class is a valid regex")
});

/// Parse a limit pattern into its `any` / `all` / `not` partitions.
///
/// Fails with [`LimitError::EmptyPattern`] when the pattern is blank or holds
/// only separators, whitespace and bare operators.
///
/// Example:
/// ```rust
/// use hostlimit::{parse_limit_pattern, EntityKind};
/// let parsed = parse_limit_pattern("webservers:&staging:!phoenix").unwrap();
/// assert_eq!(parsed.any[0].raw, "webservers");
/// assert_eq!(parsed.all[0].kind, EntityKind::Group);
/// assert_eq!(parsed.not[0].raw, "phoenix");
/// ```
pub fn parse_limit_pattern(pattern: &str) -> Result<ParsedLimit, LimitError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(LimitError::EmptyPattern);
    }

    let mut parsed = ParsedLimit::default();
    for token in split_top_level_union(pattern) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (op, raw) = peel_ops(token);
        let raw = raw.trim();
        if raw.is_empty() {
            trace!(event = "Parse", token = token, "operator without entity, skipped");
            continue;
        }
        parsed.push(Entity::new(raw, guess_kind(raw), op));
    }

    if parsed.is_empty() {
        return Err(LimitError::EmptyPattern);
    }
    Ok(parsed)
}

/// Split on unescaped `:` and `,`.
///
/// Always yields at least one token and always keeps the trailing token, even
/// when it is empty. A trailing lone backslash is dropped.
pub fn split_top_level_union(pattern: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in pattern.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ':' | ',' => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Strip a single leading operator character from a token.
pub fn peel_ops(token: &str) -> (OpKind, &str) {
    let token = token.trim();
    if let Some(rest) = token.strip_prefix('&') {
        (OpKind::All, rest)
    } else if let Some(rest) = token.strip_prefix('!') {
        (OpKind::Not, rest)
    } else {
        (OpKind::Any, token)
    }
}

/// Classify entity text. Rules are checked in order and the first hit wins.
pub fn guess_kind(raw: &str) -> EntityKind {
    let raw = raw.trim();
    if raw.is_empty() {
        return EntityKind::Unknown;
    }

    if raw.len() > 1 && raw.starts_with('@') {
        return EntityKind::File;
    }
    if raw.len() > 1 && raw.starts_with('~') {
        return EntityKind::Regex;
    }
    if raw.parse::<IpAddr>().is_ok() {
        return EntityKind::Ip;
    }
    if raw.contains('[') && raw.contains(']') {
        return EntityKind::HostPattern;
    }
    if raw.contains(['*', '?']) {
        return EntityKind::HostPattern;
    }
    if raw.contains('.') {
        return EntityKind::Host;
    }
    if DECIMAL_DIGIT.is_match(raw) {
        return EntityKind::Host;
    }
    if is_groupish(raw) {
        return EntityKind::Group;
    }
    EntityKind::Unknown
}

/// Identifier shape: a letter or `_`, then letters, decimal digits, `_` or `-`.
pub fn is_groupish(s: &str) -> bool {
    GROUPISH.is_match(s)
}
