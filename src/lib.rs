//! Resolve fleet limit patterns against a host inventory.
//!
//! A limit pattern such as `webservers:dbservers:&staging:!phoenix` selects
//! the union of its plain members, intersected with every `&` member, minus
//! every `!` member. Members may name groups (expanded through nested child
//! groups), hosts, shell-style globs, or `~`-prefixed regular expressions.

pub use engine::{match_hosts, match_report};
pub use error::LimitError;
pub use loader::{load_inventory, load_inventory_str};
pub use parser::parse_limit_pattern;
pub use types::{Entity, EntityKind, Group, Inventory, MatchReport, OpKind, ParsedLimit};

pub mod config;
mod engine;
mod error;
mod host_set;
mod index;
mod loader;
pub mod logging;
pub mod parser;
mod timers;
pub mod types;
