//! Fuzz target for CK table parsing and ranking.

#![no_main]
use libfuzzer_sys::fuzz_target;
use qmetrics_coupling::{build_coupling_report, parse_coupling_table};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    if let Ok(rows) = parse_coupling_table(data) {
        let n = rows.len();
        let max_cbo = rows.iter().map(|r| r.cbo).max().unwrap_or(0);
        let report = build_coupling_report(rows);
        assert_eq!(report.rows.len(), n);
        assert!(report.factor.sum_cbo >= max_cbo);
        assert!(report.factor.value.is_finite());
        assert!(report.factor.value >= 0.0);
        for row in &report.rows {
            assert!(row.lcom.is_finite() && row.lcom >= 0.0);
        }
    }
});
