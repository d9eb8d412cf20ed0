//! Caller-owned inventory input.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A flat host list plus named, possibly nested groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Inventory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

impl Inventory {
    pub fn new<I, S>(hosts: I, groups: Vec<Group>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Inventory {
            hosts: hosts.into_iter().map(Into::into).collect(),
            groups,
        }
    }
}

/// A named group. `children` refer to other groups by name and may form cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Group {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hosts: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<String>,
}

impl Group {
    /// Create a group with no hosts and no children.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Group {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add directly-owned hosts.
    pub fn with_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts.extend(hosts.into_iter().map(Into::into));
        self
    }

    /// Add child group references.
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
