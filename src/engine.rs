use tracing::debug;

use crate::error::LimitError;
use crate::host_set::HostSet;
use crate::index::InventoryIndex;
use crate::parser::parse_limit_pattern;
use crate::timers::{MatchPhases, PhaseTimer};
use crate::types::{Inventory, MatchReport, ParsedLimit};

/// Resolve a limit pattern against an inventory.
///
/// Returns the matched host names sorted and without duplicates. An empty
/// result is not an error. Fails on an empty pattern or an invalid `~` regex.
///
/// Example:
/// ```rust
/// use hostlimit::{match_hosts, Group, Inventory};
/// let inv = Inventory::new(
///     ["h1", "h2", "h3"],
///     vec![Group::new("blue").with_hosts(["h1", "h3"])],
/// );
/// assert_eq!(match_hosts("&blue", &inv).unwrap(), vec!["h1", "h3"]);
/// ```
pub fn match_hosts(pattern: &str, inventory: &Inventory) -> Result<Vec<String>, LimitError> {
    let (_, matched) = run(pattern, inventory)?;
    Ok(matched)
}

/// Resolve a pattern and wrap the result in a [`MatchReport`].
///
/// With `explain` set the report also carries the parsed entities.
pub fn match_report(
    pattern: &str,
    inventory: &Inventory,
    explain: bool,
) -> Result<MatchReport, LimitError> {
    let (parsed, matched) = run(pattern, inventory)?;
    Ok(MatchReport {
        pattern: pattern.to_string(),
        matched,
        parsed: explain.then_some(parsed),
    })
}

fn run(pattern: &str, inventory: &Inventory) -> Result<(ParsedLimit, Vec<String>), LimitError> {
    let mut phases = MatchPhases::default();

    debug!(event = "Match", phase = "Request", pattern = pattern);

    // 1. Parse the pattern into union / intersection / exclusion members
    let parsed = {
        let _timer = PhaseTimer::new(&mut phases.parse);
        parse_limit_pattern(pattern)?
    };

    debug!(
        event = "Match",
        phase = "Parsed",
        entities = parsed.to_string(),
        any = parsed.any.len(),
        all = parsed.all.len(),
        not = parsed.not.len()
    );

    // 2. Build the lookup index, fresh for this request
    let index = {
        let _timer = PhaseTimer::new(&mut phases.index);
        InventoryIndex::new(inventory)
    };

    debug!(
        event = "Match",
        phase = "Indexed",
        hosts = index.hosts().len(),
        groups = index.group_count()
    );

    // 3. Base set, then intersections, then exclusions
    let matched = {
        let _timer = PhaseTimer::new(&mut phases.evaluate);
        evaluate(&parsed, &index)?.to_sorted_vec()
    };

    debug!(event = "Match", phase = "Result", matched = matched.len());
    debug!(
        event = "Match",
        phase = "Timing",
        parse = ?phases.parse,
        index = ?phases.index,
        evaluate = ?phases.evaluate,
        total = ?phases.total()
    );

    Ok((parsed, matched))
}

fn evaluate<'a>(
    parsed: &ParsedLimit,
    index: &InventoryIndex<'a>,
) -> Result<HostSet<'a>, LimitError> {
    // No union members means "start from every host".
    let mut current = if parsed.any.is_empty() {
        index.all_hosts().clone()
    } else {
        let mut base = HostSet::new();
        for entity in &parsed.any {
            base.extend_from(&index.expand_entity(entity)?);
        }
        base
    };
    debug!(event = "Match", phase = "Base", size = current.len());

    for entity in &parsed.all {
        current = current.intersect(&index.expand_entity(entity)?);
        debug!(
            event = "Match",
            phase = "Intersect",
            entity = entity.to_string(),
            size = current.len()
        );
    }

    for entity in &parsed.not {
        current = current.minus(&index.expand_entity(entity)?);
        debug!(
            event = "Match",
            phase = "Exclude",
            entity = entity.to_string(),
            size = current.len()
        );
    }

    Ok(current)
}

#[cfg(test)]
mod tests;
