//! Classified, operator-tagged tokens of a limit pattern.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};
use utoipa::ToSchema;

/// Advisory classification of an entity's text.
///
/// Set once at parse time. Matching only looks at the raw text, so this
/// value is informational apart from the `~` and glob-character cases it
/// happens to agree with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    StrumDisplay,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Host,
    Group,
    HostPattern,
    GroupPattern,
    File,
    Regex,
    Ip,
    Unknown,
}

/// The combinator an entity participates in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    StrumDisplay,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpKind {
    /// Union member (no prefix).
    #[default]
    Any,
    /// Intersection member (`&` prefix).
    All,
    /// Exclusion member (`!` prefix).
    Not,
}

impl OpKind {
    /// The prefix character that selects this operator, if any.
    pub fn prefix(&self) -> Option<char> {
        match self {
            OpKind::Any => None,
            OpKind::All => Some('&'),
            OpKind::Not => Some('!'),
        }
    }
}

/// One token of a parsed limit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    /// Token text with the operator stripped and separator escapes resolved.
    pub raw: String,
    pub kind: EntityKind,
    pub op: OpKind,
}

impl Entity {
    pub fn new<S: Into<String>>(raw: S, kind: EntityKind, op: OpKind) -> Self {
        Entity {
            raw: raw.into(),
            kind,
            op,
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.op.prefix() {
            Some(prefix) => write!(f, "{prefix}{}", self.raw),
            None => write!(f, "{}", self.raw),
        }
    }
}
