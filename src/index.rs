//! Per-request lookup structures over a caller's inventory.
//!
//! The index borrows from the inventory it was built from and is rebuilt for
//! every match call. Nothing is cached across calls.

use std::collections::{HashMap, HashSet};

use glob::{MatchOptions, Pattern};
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::error::LimitError;
use crate::host_set::HostSet;
use crate::types::{Entity, Inventory};

const GLOB_CHARS: [char; 4] = ['*', '?', '[', ']'];

/// `*` and `?` never match `/`.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Rewrite a shell glob into `glob` crate syntax: `[^...]` becomes `[!...]`
/// and a run of `*` collapses to one, so `**` is a plain wildcard.
fn normalize_glob(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '[' if !in_class => {
                in_class = true;
                if chars.next_if_eq(&'^').is_some() {
                    out.push('!');
                }
            }
            ']' if in_class => in_class = false,
            '*' if !in_class => while chars.next_if_eq(&'*').is_some() {},
            _ => {}
        }
    }
    out
}

/// How an entity's raw text is resolved, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy<'r> {
    /// The text is the exact name of a known group.
    Group,
    /// `~` prefix; carries the expression without the prefix.
    Regex(&'r str),
    /// Contains one of `* ? [ ]`.
    Glob,
    /// Exact host name lookup.
    Host,
}

impl Strategy<'_> {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Group => "group",
            Strategy::Regex(_) => "regex",
            Strategy::Glob => "glob",
            Strategy::Host => "host",
        }
    }
}

#[derive(Debug)]
pub struct InventoryIndex<'a> {
    /// Trimmed, deduplicated hosts in first-seen order.
    hosts: Vec<&'a str>,
    all_hosts: HostSet<'a>,
    /// Every retained group has an entry here, possibly empty.
    group_direct: HashMap<&'a str, HostSet<'a>>,
    /// Only groups with at least one non-empty child reference.
    group_child: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> InventoryIndex<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        let mut hosts = Vec::with_capacity(inventory.hosts.len());
        let mut seen = HashSet::with_capacity(inventory.hosts.len());
        for host in &inventory.hosts {
            let host = host.trim();
            if host.is_empty() || !seen.insert(host) {
                continue;
            }
            hosts.push(host);
        }

        let mut group_direct: HashMap<&'a str, HostSet<'a>> =
            HashMap::with_capacity(inventory.groups.len());
        let mut group_child: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for group in &inventory.groups {
            let name = group.name.trim();
            if name.is_empty() {
                continue;
            }

            let direct = group_direct.entry(name).or_default();
            for host in &group.hosts {
                direct.add(host.trim());
            }

            let children: Vec<&'a str> = group
                .children
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect();
            if !children.is_empty() {
                group_child.insert(name, children);
            }
        }

        let all_hosts = hosts.iter().copied().collect();

        InventoryIndex {
            hosts,
            all_hosts,
            group_direct,
            group_child,
        }
    }

    /// Canonical host list in inventory order.
    pub fn hosts(&self) -> &[&'a str] {
        &self.hosts
    }

    pub fn all_hosts(&self) -> &HostSet<'a> {
        &self.all_hosts
    }

    pub fn group_count(&self) -> usize {
        self.group_direct.len()
    }

    pub fn group_exists(&self, name: &str) -> bool {
        self.group_direct.contains_key(name) || self.group_child.contains_key(name)
    }

    /// Transitive host membership of a group.
    ///
    /// Walks children depth-first, left to right, with an explicit stack. A
    /// group seen earlier in the same walk contributes nothing the second
    /// time, so cycles terminate. Members that are not declared hosts are
    /// dropped, unless the inventory declares no hosts at all.
    pub fn expand_group(&self, name: &str) -> HostSet<'a> {
        let name = name.trim();
        let mut out = HostSet::new();
        if name.is_empty() {
            return out;
        }

        let mut visited = HashSet::new();
        let mut stack = vec![name];
        while let Some(group) = stack.pop() {
            if !visited.insert(group) {
                continue;
            }
            if let Some(direct) = self.group_direct.get(group) {
                out.extend_from(direct);
            }
            if let Some(children) = self.group_child.get(group) {
                stack.extend(children.iter().rev().copied());
            }
        }

        if self.hosts.is_empty() {
            return out;
        }
        out.intersect(&self.all_hosts)
    }

    /// Resolve one entity to the hosts it designates.
    ///
    /// Only an invalid `~` regex is an error. Unknown names and malformed
    /// globs resolve to an empty set.
    pub fn expand_entity(&self, entity: &Entity) -> Result<HostSet<'a>, LimitError> {
        let raw = entity.raw.trim();
        if raw.is_empty() {
            return Ok(HostSet::new());
        }

        let strategy = self.strategy_for(raw);
        trace!(
            event = "Expand",
            entity = raw,
            kind = entity.kind.as_ref(),
            strategy = strategy.name()
        );

        match strategy {
            Strategy::Group => Ok(self.expand_group(raw)),
            Strategy::Regex(expr) => {
                let re = Regex::new(expr).map_err(|e| {
                    warn!(event = "Expand", entity = raw, error = %e, "invalid regex");
                    LimitError::regex_compile(expr, &e)
                })?;
                Ok(self.expand_matching(|candidate| re.is_match(candidate)))
            }
            Strategy::Glob => match Pattern::new(&normalize_glob(raw)) {
                Ok(pattern) => Ok(self.expand_matching(|candidate| {
                    pattern.matches_with(candidate, GLOB_OPTIONS)
                })),
                Err(e) => {
                    debug!(event = "Expand", entity = raw, error = %e, "malformed glob");
                    Ok(HostSet::new())
                }
            },
            Strategy::Host => Ok(self
                .hosts
                .iter()
                .find(|h| **h == raw)
                .map(|h| std::iter::once(*h).collect())
                .unwrap_or_default()),
        }
    }

    fn strategy_for<'r>(&self, raw: &'r str) -> Strategy<'r> {
        if self.group_exists(raw) {
            return Strategy::Group;
        }
        if let Some(expr) = raw.strip_prefix('~').filter(|expr| !expr.is_empty()) {
            return Strategy::Regex(expr);
        }
        if raw.contains(GLOB_CHARS) {
            return Strategy::Glob;
        }
        Strategy::Host
    }

    /// Union of every matching group's expansion and every matching host.
    fn expand_matching<F>(&self, matches: F) -> HostSet<'a>
    where
        F: Fn(&str) -> bool,
    {
        let mut out = HostSet::new();
        for group in self.group_direct.keys() {
            if matches(group) {
                out.extend_from(&self.expand_group(group));
            }
        }
        for &host in &self.hosts {
            if matches(host) {
                out.add(host);
            }
        }
        out
    }
}
