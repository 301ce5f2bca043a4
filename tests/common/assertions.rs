//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert the function file starts with the foundation row for `width`.
pub fn assert_foundation_line(function: &str, width: usize, foundation: &str) {
    let first = function.lines().next().unwrap_or_default();
    assert_eq!(
        first,
        format!(
            "fill ~ ~-1 ~-1 ~{} ~-1 ~-1 {foundation} replace air",
            width - 1
        )
    );
}

/// Assert every line after the first is a `setblock` command.
pub fn assert_only_setblocks(function: &str) {
    for (n, line) in function.lines().enumerate().skip(1) {
        assert!(
            line.starts_with("setblock ~"),
            "Line {} is not a setblock command: {line}",
            n + 1
        );
    }
}

/// Assert a support block sits directly beneath every `block` placement.
pub fn assert_supported(function: &str, block: &str, support: &str) {
    let lines: Vec<&str> = function.lines().collect();
    let mut found = 0;
    for (i, line) in lines.iter().enumerate() {
        if !line.ends_with(&format!(" {block}")) {
            continue;
        }
        found += 1;
        let coords: Vec<i64> = line
            .split_whitespace()
            .skip(1)
            .take(3)
            .map(|c| c.trim_start_matches('~').parse().unwrap_or(0))
            .collect();
        let expected = format!(
            "setblock ~{} ~{} ~{} {support}",
            coords[0],
            coords[1] - 1,
            coords[2]
        );
        assert!(i > 0, "{block} placed without a preceding support line");
        assert_eq!(lines[i - 1], expected);
    }
    assert!(found > 0, "No {block} placements found");
}
