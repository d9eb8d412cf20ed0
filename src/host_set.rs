use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

/// A set of host names borrowed from an inventory, kept in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet<'a>(BTreeSet<&'a str>);

impl<'a> HostSet<'a> {
    pub fn new() -> Self {
        HostSet(BTreeSet::new())
    }

    /// Insert a host name. Empty names are ignored.
    pub fn add(&mut self, host: &'a str) {
        if !host.is_empty() {
            self.0.insert(host);
        }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.0.contains(host)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }

    /// Union with `other`, in place.
    pub fn extend_from(&mut self, other: &HostSet<'a>) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn intersect(&self, other: &HostSet<'a>) -> HostSet<'a> {
        if self.is_empty() || other.is_empty() {
            return HostSet::new();
        }
        let (small, large) = if self.len() > other.len() {
            (other, self)
        } else {
            (self, other)
        };
        small.iter().filter(|h| large.contains(h)).collect()
    }

    pub fn minus(&self, other: &HostSet<'a>) -> HostSet<'a> {
        if other.is_empty() {
            return self.clone();
        }
        self.iter().filter(|h| !other.contains(h)).collect()
    }

    /// Owned host names in lexicographic order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl<'a> FromIterator<&'a str> for HostSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = HostSet::new();
        for host in iter {
            set.add(host);
        }
        set
    }
}

impl Display for HostSet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<'a>(hosts: &[&'a str]) -> HostSet<'a> {
        hosts.iter().copied().collect()
    }

    #[test]
    fn test_add_ignores_empty() {
        let mut s = HostSet::new();
        s.add("");
        s.add("web01");
        s.add("web01");
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_extend_from_is_union() {
        let mut s = set(&["a", "b"]);
        s.extend_from(&set(&["b", "c"]));
        assert_eq!(s, set(&["a", "b", "c"]));
        s.extend_from(&HostSet::new());
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_intersect() {
        assert_eq!(set(&["a", "b", "c"]).intersect(&set(&["b", "c", "d"])), set(&["b", "c"]));
        assert!(set(&["a"]).intersect(&HostSet::new()).is_empty());
        assert!(HostSet::new().intersect(&set(&["a"])).is_empty());
    }

    #[test]
    fn test_minus() {
        assert_eq!(set(&["a", "b", "c"]).minus(&set(&["b"])), set(&["a", "c"]));
        assert_eq!(set(&["a", "b"]).minus(&HostSet::new()), set(&["a", "b"]));
        assert!(HostSet::new().minus(&set(&["a"])).is_empty());
    }

    #[test]
    fn test_sorted_output_and_display() {
        let s = set(&["web02", "db01", "web01"]);
        assert_eq!(s.to_sorted_vec(), vec!["db01", "web01", "web02"]);
        assert_eq!(s.to_string(), "[db01, web01, web02]");
    }
}
