//! Best-effort recovery of a complexity value from a violation.
//!
//! Evidence sources are tried in a fixed order and the first one that yields
//! a positive value wins. When every source comes up empty the method still
//! counts, with complexity [`DEFAULT_COMPLEXITY`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::report::RawViolation;

/// Complexity assigned when no evidence source yields a value.
pub const DEFAULT_COMPLEXITY: u32 = 1;

/// Attribute names different PMD versions use for the metric value.
pub const METRIC_ATTRIBUTES: [&str; 4] = ["metricvalue", "metricValue", "value", "violationValue"];

static COMPLEXITY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cyclomatic\s+complexity\s*(?:is|=)?\s*([0-9]+)").expect("valid regex literal")
});

static INTEGER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\b").expect("valid regex literal"));

type Evidence = fn(&RawViolation) -> Option<u32>;

/// Evidence sources in precedence order.
const EVIDENCE: [(&str, Evidence); 3] = [
    ("phrase", from_phrase),
    ("last-number", from_last_number),
    ("attribute", from_metric_attribute),
];

/// Complexity of a violation, never below 1.
#[must_use]
pub fn recover_complexity(violation: &RawViolation) -> u32 {
    for (source, evidence) in EVIDENCE {
        if let Some(cc) = evidence(violation) {
            trace!(source, cc, file = %violation.file, "recovered complexity");
            return cc;
        }
    }
    trace!(file = %violation.file, "no complexity evidence, using default");
    DEFAULT_COMPLEXITY
}

/// `cyclomatic complexity [is|=] N` anywhere in the message.
pub fn from_phrase(violation: &RawViolation) -> Option<u32> {
    COMPLEXITY_PHRASE
        .captures(&violation.text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| positive(m.as_str()))
}

/// The last integer token of the message.
pub fn from_last_number(violation: &RawViolation) -> Option<u32> {
    INTEGER_TOKEN
        .find_iter(&violation.text)
        .last()
        .and_then(|m| positive(m.as_str()))
}

/// The first metric attribute holding only ASCII digits.
pub fn from_metric_attribute(violation: &RawViolation) -> Option<u32> {
    METRIC_ATTRIBUTES.iter().find_map(|name| {
        violation
            .attr(name)
            .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
            .and_then(positive)
    })
}

/// Zero and values that overflow `u32` carry no usable evidence.
fn positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}
