use super::*;
use yare::parameterized;

#[test]
fn test_union_intersection_exclusion() {
    assert_eq!(
        matched("webservers:dbservers:&staging:!phoenix", &fleet()),
        vec!["db01", "web02"]
    );
}

#[test]
fn test_only_intersection_starts_from_all_hosts() {
    let inv = Inventory::new(
        ["h1", "h2", "h3"],
        vec![Group::new("blue").with_hosts(["h1", "h3"])],
    );
    assert_eq!(matched("&blue", &inv), vec!["h1", "h3"]);
}

#[test]
fn test_only_exclusion_starts_from_all_hosts() {
    assert_eq!(
        matched("!webservers", &fleet()),
        vec!["db01", "misc01", "phoenix"]
    );
}

#[test]
fn test_glob_over_hosts_and_groups() {
    let inv = Inventory::new(
        ["web01", "web02", "db01"],
        vec![Group::new("web").with_hosts(["web01", "web02"])],
    );
    assert_eq!(matched("web*", &inv), vec!["web01", "web02"]);
}

#[test]
fn test_group_children() {
    let inv = Inventory::new(
        ["a1", "a2", "b1"],
        vec![
            Group::new("a").with_hosts(["a1"]),
            Group::new("b").with_hosts(["b1"]),
            Group::new("all_apps")
                .with_children(["a", "b"])
                .with_hosts(["a2"]),
        ],
    );
    assert_eq!(matched("all_apps", &inv), vec!["a1", "a2", "b1"]);
}

#[parameterized(
    single_group = { "webservers", &["web01", "web02"] },
    comma_separator = { "webservers,dbservers", &["db01", "phoenix", "web01", "web02"] },
    single_host = { "misc01", &["misc01"] },
    unknown_name = { "nowhere", &[] },
    host_and_group = { "misc01:webservers", &["misc01", "web01", "web02"] },
    intersect_two_groups = { "&staging:&dbservers", &["db01", "phoenix"] },
    intersect_with_unknown = { "webservers:&nowhere", &[] },
    exclude_unknown = { "webservers:!nowhere", &["web01", "web02"] },
    exclude_everything = { "webservers:!webservers", &[] },
    glob_exclusion = { "staging:!web*", &["db01", "phoenix"] },
    regex_union = { "~^(web|db)0", &["db01", "web01", "web02"] },
    regex_on_group_names = { "~servers$", &["db01", "phoenix", "web01", "web02"] },
    regex_alternation = { r"~^(web01|misc01)$", &["misc01", "web01"] },
    whitespace_tolerated = { "  webservers :  !web01 ", &["web02"] },
    order_independent = { "!phoenix:&staging:dbservers:webservers", &["db01", "web02"] },
)]
fn test_fleet_patterns(pattern: &str, expected: &[&str]) {
    assert_eq!(matched(pattern, &fleet()), expected);
}

#[parameterized(
    cycle_from_east = { "east", &["e1", "e2", "w1", "w2"] },
    cycle_from_west = { "west", &["e1", "e2", "w1", "w2"] },
    nested_through_cycle = { "global", &["c1", "e1", "e2", "w1", "w2"] },
    empty_group = { "empty", &[] },
    children_without_hosts = { "hollow", &[] },
    glob_on_group_names = { "*st", &["e1", "e2", "w1", "w2"] },
    intersect_nested = { "global:&central", &["c1"] },
    exclude_nested = { "!global", &["lonely"] },
)]
fn test_nested_groups(pattern: &str, expected: &[&str]) {
    assert_eq!(matched(pattern, &regions()), expected);
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    separators = { "::,," },
    bare_operators = { "&,!" },
)]
fn test_empty_pattern_errors(pattern: &str) {
    assert_eq!(
        match_hosts(pattern, &fleet()),
        Err(LimitError::EmptyPattern)
    );
}

#[parameterized(
    union_member = { "~(web" },
    intersection_member = { "webservers:&~[z-a]" },
    exclusion_member = { "webservers:!~web(" },
)]
fn test_invalid_regex_aborts_match(pattern: &str) {
    let err = match_hosts(pattern, &fleet()).unwrap_err();
    assert!(
        matches!(err, LimitError::RegexCompile { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_invalid_regex_fails_even_when_set_already_empty() {
    let err = match_hosts("nowhere:&~(", &fleet()).unwrap_err();
    assert!(matches!(err, LimitError::RegexCompile { .. }));
}

#[test]
fn test_malformed_glob_is_not_an_error() {
    assert!(matched("web[", &fleet()).is_empty());
}

#[test]
fn test_undeclared_group_members_are_dropped() {
    let inv = Inventory::new(
        ["web01"],
        vec![Group::new("web").with_hosts(["web01", "web99"])],
    );
    assert_eq!(matched("web", &inv), vec!["web01"]);
}

#[test]
fn test_empty_host_list_keeps_group_members() {
    let inv = Inventory::new(
        Vec::<String>::new(),
        vec![
            Group::new("web").with_hosts(["web02", "web01"]),
            Group::new("db").with_hosts(["db01"]),
        ],
    );
    assert_eq!(matched("web:db", &inv), vec!["db01", "web01", "web02"]);
    // Exact host lookups only see declared hosts, so this exclusion is a no-op.
    assert_eq!(matched("web:!web02", &inv), vec!["web01", "web02"]);
    // With no declared hosts there is no base set to intersect against.
    assert!(matched("&web", &inv).is_empty());
}

#[test]
fn test_group_name_takes_priority_over_glob() {
    let inv = Inventory::new(
        ["web01", "web02", "webx"],
        vec![Group::new("web*").with_hosts(["webx"])],
    );
    assert_eq!(matched("web*", &inv), vec!["webx"]);
    assert_eq!(matched("web0*", &inv), vec!["web01", "web02"]);
}

#[test]
fn test_duplicate_hosts_are_reported_once() {
    let inv = Inventory::new(
        ["h1", " h1", "h2"],
        vec![Group::new("g").with_hosts(["h1", "h1 "])],
    );
    assert_eq!(matched("g:h1:h*", &inv), vec!["h1", "h2"]);
}
