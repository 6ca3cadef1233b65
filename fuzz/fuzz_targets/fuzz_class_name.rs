#![no_main]
use libfuzzer_sys::fuzz_target;
use qmetrics_path::{DEFAULT_SOURCE_ROOT, DEFAULT_SOURCE_SUFFIX, class_name_for};

/// Max input size to prevent pathological parse times
const MAX_INPUT_SIZE: usize = 4 * 1024; // 4KB for path strings

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    if let Ok(s) = std::str::from_utf8(data) {
        let name = class_name_for(s, DEFAULT_SOURCE_ROOT, DEFAULT_SOURCE_SUFFIX);
        assert!(!name.contains('\\'));

        let _ = class_name_for(s, "", "");
        let _ = class_name_for(s, "/", ".kt");
    }
});
