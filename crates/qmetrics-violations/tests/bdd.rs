//! BDD-style scenario tests for `qmetrics-violations`.
//!
//! Each test follows Given / When / Then structure exercising the public API:
//! - `extract_violations` (in-memory XML)
//! - `read_violations` (via temp-dir fixtures)

use std::io::Write;

use qmetrics_settings::{ExtractSettings, SourceLayout};
use qmetrics_violations::{extract_violations, read_violations};

// ---------------------------------------------------------------------------
// Helper: wrap violation elements in a single-file PMD report
// ---------------------------------------------------------------------------
fn report(file: &str, violations: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<pmd xmlns="http://pmd.sourceforge.net/report/2.0.0" version="7.2.0">
<file name="{file}">
{violations}
</file>
</pmd>
"#
    )
}

// ===========================================================================
// Scenario: numeric recovery precedence
// ===========================================================================
#[test]
fn scenario_phrase_match_beats_last_number() {
    // Given: a message stating the complexity before another number
    let xml = report(
        "/r/src/main/java/a/B.java",
        r#"<violation rule="CyclomaticComplexity" beginline="1" endline="2">cyclomatic complexity is 7, 3 branches</violation>"#,
    );

    // When: we extract
    let got = extract_violations(&xml, &ExtractSettings::default()).unwrap();

    // Then: the phrase value is used
    assert_eq!(got[0].cc, 7);
}

#[test]
fn scenario_last_number_fallback() {
    // Given: no phrase, two numbers
    let xml = report(
        "/r/src/main/java/a/B.java",
        r#"<violation rule="CyclomaticComplexity">has 2 parameters and complexity 9</violation>"#,
    );

    // When / Then: the last number wins
    let got = extract_violations(&xml, &ExtractSettings::default()).unwrap();
    assert_eq!(got[0].cc, 9);
}

#[test]
fn scenario_attribute_fallback() {
    // Given: a message without digits but a metric attribute
    let xml = report(
        "/r/src/main/java/a/B.java",
        r#"<violation rule="CyclomaticComplexity" metricValue="13">method is too complex</violation>"#,
    );

    let got = extract_violations(&xml, &ExtractSettings::default()).unwrap();
    assert_eq!(got[0].cc, 13);
}

#[test]
fn scenario_default_complexity_keeps_the_method() {
    // Given: no evidence at all
    let xml = report(
        "/r/src/main/java/a/B.java",
        r#"<violation rule="CyclomaticComplexity">too complex</violation>"#,
    );

    // When: we extract
    let got = extract_violations(&xml, &ExtractSettings::default()).unwrap();

    // Then: the method is counted with complexity 1
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].cc, 1);
}

// ===========================================================================
// Scenario: record normalization
// ===========================================================================
#[test]
fn scenario_records_keep_document_order_and_skip_other_rules() {
    // Given: mixed rules across two files
    let xml = r#"<pmd>
<file name="/r/src/main/java/p/One.java">
  <violation rule="CyclomaticComplexity" beginline="10" endline="30">cyclomatic complexity of 11</violation>
  <violation rule="UnusedPrivateField" beginline="3">unused 99</violation>
</file>
<file name="/r/src/main/java/p/Two.java">
  <violation rule="CyclomaticComplexity" beginline="5">cyclomatic complexity of 4</violation>
</file>
</pmd>"#;

    // When: we extract
    let got = extract_violations(xml, &ExtractSettings::default()).unwrap();

    // Then: only complexity violations remain, in order, fully normalized
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].class, "p.One");
    assert_eq!(got[0].method, "method@10-30");
    assert_eq!(got[0].cc, 11);
    assert_eq!(got[0].file, "/r/src/main/java/p/One.java");
    assert_eq!(got[0].message, "cyclomatic complexity of 11");
    assert_eq!(got[1].class, "p.Two");
    assert_eq!(got[1].method, "method@5-5");
}

#[test]
fn scenario_unmapped_path_degrades_to_slash_path() {
    // Given: a file outside the Maven layout with Windows separators
    let xml = report(
        r"weird\path\File.java",
        r#"<violation rule="CyclomaticComplexity">5</violation>"#,
    );

    let got = extract_violations(&xml, &ExtractSettings::default()).unwrap();

    // Then: the class identifier is the slash-normalized path
    assert_eq!(got[0].class, "weird/path/File.java");
    assert_eq!(got[0].file, r"weird\path\File.java");
}

#[test]
fn scenario_custom_rule_and_layout() {
    // Given: settings targeting a different rule and a Kotlin layout
    let settings = ExtractSettings {
        rule: "CognitiveComplexity".to_string(),
        layout: SourceLayout {
            source_root: "/src/main/kotlin/".to_string(),
            suffix: ".kt".to_string(),
        },
    };
    let xml = report(
        "/r/src/main/kotlin/k/Svc.kt",
        r#"<violation rule="CognitiveComplexity">score 21</violation>
<violation rule="CyclomaticComplexity">cyclomatic complexity is 3</violation>"#,
    );

    let got = extract_violations(&xml, &settings).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].class, "k.Svc");
    assert_eq!(got[0].cc, 21);
}

// ===========================================================================
// Scenario: reading from disk
// ===========================================================================
#[test]
fn scenario_read_from_file() {
    // Given: a report on disk
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pmd.xml");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(
        report(
            "/r/src/main/java/a/B.java",
            r#"<violation rule="CyclomaticComplexity">cyclomatic complexity = 6</violation>"#,
        )
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    // When: we read it
    let got = read_violations(&path, &ExtractSettings::default()).unwrap();

    // Then: the record is extracted
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].cc, 6);
}

#[test]
fn scenario_missing_file_is_an_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xml");

    let err = read_violations(&path, &ExtractSettings::default()).unwrap_err();

    assert!(format!("{err:#}").contains("absent.xml"));
}

#[test]
fn scenario_malformed_xml_is_an_error() {
    let err = extract_violations("<pmd><file>", &ExtractSettings::default()).unwrap_err();
    assert!(!err.to_string().is_empty());
}
