//! Fuzz target for `qmetrics.toml` parsing.

#![no_main]
use libfuzzer_sys::fuzz_target;
use qmetrics_config::TomlConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = TomlConfig::parse(s);
    }
});
