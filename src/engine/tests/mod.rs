use super::*;
use crate::types::Group;

mod evaluate;

/// The inventory used throughout the selector documentation.
fn fleet() -> Inventory {
    Inventory::new(
        ["web01", "web02", "db01", "phoenix", "misc01"],
        vec![
            Group::new("webservers").with_hosts(["web01", "web02"]),
            Group::new("dbservers").with_hosts(["db01", "phoenix"]),
            Group::new("staging").with_hosts(["web02", "db01", "phoenix"]),
        ],
    )
}

/// Nested groups with a cycle between `east` and `west`.
fn regions() -> Inventory {
    Inventory::new(
        ["e1", "e2", "w1", "w2", "c1", "lonely"],
        vec![
            Group::new("east").with_hosts(["e1", "e2"]).with_children(["west"]),
            Group::new("west").with_hosts(["w1", "w2"]).with_children(["east"]),
            Group::new("central").with_hosts(["c1"]),
            Group::new("global").with_children(["east", "central"]),
            Group::new("empty"),
            Group::new("hollow").with_children(["empty", "missing"]),
        ],
    )
}

fn matched(pattern: &str, inventory: &Inventory) -> Vec<String> {
    match_hosts(pattern, inventory).unwrap()
}
