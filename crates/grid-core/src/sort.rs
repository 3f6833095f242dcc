//! Natural string ordering.
//!
//! Values are split into alternating numeric / non-numeric runs. Numeric
//! runs compare numerically, text runs lexicographically, and numeric runs
//! order before text runs at the same position. When one value is a strict
//! prefix of the other at the run level, the shorter run sequence wins.
//! This yields human-friendly ordering for mixed fields: "Item 2" sorts
//! before "Item 10".

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
enum Run {
    Number(f64),
    Text(String),
}

fn runs(value: &str) -> Vec<Run> {
    let mut out = Vec::new();
    let mut buffer = String::new();
    let mut numeric = false;
    for ch in value.chars() {
        let digit = ch.is_ascii_digit();
        if !buffer.is_empty() && digit != numeric {
            out.push(finish_run(&mut buffer, numeric));
        }
        numeric = digit;
        buffer.push(ch);
    }
    if !buffer.is_empty() {
        out.push(finish_run(&mut buffer, numeric));
    }
    out
}

fn finish_run(buffer: &mut String, numeric: bool) -> Run {
    let text = std::mem::take(buffer);
    if numeric {
        // A digit-only run always parses.
        Run::Number(text.parse().unwrap_or(f64::MAX))
    } else {
        Run::Text(text)
    }
}

/// Compare two display values naturally. Total order: consistent with
/// numeric comparison on purely numeric values and lexicographic comparison
/// on purely alphabetic ones.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = runs(a);
    let right = runs(b);
    for (run_a, run_b) in left.iter().zip(right.iter()) {
        let ordering = match (run_a, run_b) {
            (Run::Number(x), Run::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (Run::Number(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Number(_)) => Ordering::Greater,
            (Run::Text(x), Run::Text(y)) => x.cmp(y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}
