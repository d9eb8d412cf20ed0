//! Data model types for limit patterns, inventories and match results.
//!
//! Canonical string forms:
//! - Entity: `raw`, `&raw` or `!raw` depending on its operator
//! - ParsedLimit: entities joined with `:` in evaluation order (any, all, not)
//!
//! `EntityKind` and `OpKind` serialize as their snake_case names
//! (`host_pattern`, `any`, ...).

mod entity;
mod inventory;
mod parsed_limit;
mod report;

pub use entity::{Entity, EntityKind, OpKind};
pub use inventory::{Group, Inventory};
pub use parsed_limit::ParsedLimit;
pub use report::MatchReport;
