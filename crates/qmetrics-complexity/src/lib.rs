//! # qmetrics-complexity
//!
//! **Tier 2 (Aggregation)**
//!
//! Rolls method-level complexity records up to classes and ranks both.
//!
//! Every class in the fold has at least one contributing method, and its
//! `total_cc` is exactly the sum of its methods' `cc`.

use std::collections::BTreeMap;

use qmetrics_math::safe_mean;
use qmetrics_types::{
    CC_THRESHOLD_HIGH, CC_THRESHOLD_SEVERE, ClassComplexity, ComplexityReport, ComplexityTotals,
    MethodViolation,
};

/// Fold method records into one aggregate per class.
pub fn fold_by_class(methods: &[MethodViolation]) -> BTreeMap<String, ClassComplexity> {
    let mut by_class: BTreeMap<String, ClassComplexity> = BTreeMap::new();
    for method in methods {
        let agg = by_class
            .entry(method.class.clone())
            .or_insert_with(|| empty_aggregate(&method.class));
        agg.total_cc += u64::from(method.cc);
        agg.methods += 1;
        agg.max_cc = agg.max_cc.max(method.cc);
        if method.cc > CC_THRESHOLD_HIGH {
            agg.over_10 += 1;
        }
        if method.cc > CC_THRESHOLD_SEVERE {
            agg.over_15 += 1;
        }
    }
    for agg in by_class.values_mut() {
        agg.avg_cc = safe_mean(agg.total_cc, agg.methods);
    }
    by_class
}

fn empty_aggregate(class: &str) -> ClassComplexity {
    ClassComplexity {
        class: class.to_string(),
        total_cc: 0,
        avg_cc: 0.0,
        max_cc: 0,
        methods: 0,
        over_10: 0,
        over_15: 0,
    }
}

/// Classes by total complexity descending, then class name ascending.
pub fn rank_classes(by_class: BTreeMap<String, ClassComplexity>) -> Vec<ClassComplexity> {
    let mut ranked: Vec<ClassComplexity> = by_class.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total_cc
            .cmp(&a.total_cc)
            .then_with(|| a.class.cmp(&b.class))
    });
    ranked
}

/// The `n` most complex methods; equal values keep extraction order.
pub fn top_methods(methods: &[MethodViolation], n: usize) -> Vec<MethodViolation> {
    let mut sorted = methods.to_vec();
    sorted.sort_by(|a, b| b.cc.cmp(&a.cc));
    sorted.truncate(n);
    sorted
}

/// Headline totals over the ranked classes.
pub fn totals(methods: &[MethodViolation], classes: &[ClassComplexity]) -> ComplexityTotals {
    ComplexityTotals {
        methods: methods.len(),
        classes: classes.len(),
        grand_total: classes.iter().map(|c| c.total_cc).sum(),
        over_10: classes.iter().map(|c| c.over_10).sum(),
        over_15: classes.iter().map(|c| c.over_15).sum(),
    }
}

/// Build the full report: method table, ranked class table and summary data.
pub fn build_complexity_report(methods: Vec<MethodViolation>, top: usize) -> ComplexityReport {
    let classes = rank_classes(fold_by_class(&methods));
    let totals = totals(&methods, &classes);
    let top_methods = top_methods(&methods, top);
    let top_classes = classes.iter().take(top).cloned().collect();
    ComplexityReport {
        methods,
        classes,
        totals,
        top_methods,
        top_classes,
        top,
    }
}
