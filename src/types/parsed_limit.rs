//! The partitioned result of parsing a limit pattern.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::{Entity, OpKind};

/// Entities of a pattern, split by the operator they carry.
///
/// `any`, `all` and `not` are what the matcher evaluates. `included` and
/// `excluded` are reporting views only: `included` holds the `any` and `all`
/// entities in pattern order, `excluded` mirrors `not`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedLimit {
    pub any: Vec<Entity>,
    pub all: Vec<Entity>,
    pub not: Vec<Entity>,

    pub included: Vec<Entity>,
    pub excluded: Vec<Entity>,
}

impl ParsedLimit {
    /// Append an entity to the partition selected by its operator.
    pub fn push(&mut self, entity: Entity) {
        match entity.op {
            OpKind::All => {
                self.included.push(entity.clone());
                self.all.push(entity);
            }
            OpKind::Not => {
                self.excluded.push(entity.clone());
                self.not.push(entity);
            }
            OpKind::Any => {
                self.included.push(entity.clone());
                self.any.push(entity);
            }
        }
    }

    /// True when no partition holds an entity.
    pub fn is_empty(&self) -> bool {
        self.any.is_empty() && self.all.is_empty() && self.not.is_empty()
    }

    /// Total number of entities across the operator partitions.
    pub fn len(&self) -> usize {
        self.any.len() + self.all.len() + self.not.len()
    }

    /// Iterate over all entities in evaluation order: union, intersection, exclusion.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.any.iter().chain(self.all.iter()).chain(self.not.iter())
    }
}

impl Display for ParsedLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.entities().join(":"))
    }
}
