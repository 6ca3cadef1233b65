//! Fuzz target for PMD report extraction.
//!
//! Any byte sequence must either extract cleanly or return an error; every
//! extracted record must carry a complexity of at least one.

#![no_main]
use libfuzzer_sys::fuzz_target;
use qmetrics_settings::ExtractSettings;
use qmetrics_violations::extract_violations;

/// Max input size to prevent pathological parse times
const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    if let Ok(xml) = std::str::from_utf8(data) {
        if let Ok(records) = extract_violations(xml, &ExtractSettings::default()) {
            for record in records {
                assert!(record.cc >= 1);
                assert!(record.method.starts_with("method@"));
            }
        }
    }
});
