//! Property-based tests for qmetrics-types contracts.

use std::path::PathBuf;

use proptest::prelude::*;
use qmetrics_types::error::PreconditionError;
use qmetrics_types::{CouplingFactor, MethodViolation};

fn arb_violation() -> impl Strategy<Value = MethodViolation> {
    (
        "[a-z]{1,8}(\\.[A-Z][a-zA-Z]{0,8}){1,3}",
        1u32..500,
        0u64..100_000,
        0u64..1000,
        "[a-zA-Z0-9/._-]{1,40}",
        "[ -~]{0,60}",
    )
        .prop_map(|(class, cc, begin, span, file, message)| MethodViolation {
            class,
            method: MethodViolation::method_id(begin, begin + span),
            cc,
            begin_line: begin,
            end_line: begin + span,
            file,
            message,
        })
}

proptest! {
    #[test]
    fn method_id_encodes_both_lines(begin in 0u64..u64::MAX / 2, end in 0u64..u64::MAX / 2) {
        let id = MethodViolation::method_id(begin, end);
        let span = id.strip_prefix("method@").expect("prefix");
        let (b, e) = span.split_once('-').expect("separator");
        prop_assert_eq!(b.parse::<u64>().unwrap(), begin);
        prop_assert_eq!(e.parse::<u64>().unwrap(), end);
    }

    #[test]
    fn violation_survives_json(v in arb_violation()) {
        let json = serde_json::to_string(&v).unwrap();
        let back: MethodViolation = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn coupling_factor_fields_keep_their_names(classes in 0usize..10_000, sum_cbo in any::<u64>()) {
        let factor = CouplingFactor { classes, sum_cbo, value: 0.5 };
        let value = serde_json::to_value(factor).unwrap();
        prop_assert_eq!(value["classes"].as_u64(), Some(classes as u64));
        prop_assert_eq!(value["sum_cbo"].as_u64(), Some(sum_cbo));
    }

    #[test]
    fn precondition_message_names_the_path(
        artifact in "[A-Za-z ]{1,20}",
        path in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.(xml|csv)",
        missing in any::<bool>(),
    ) {
        let path = PathBuf::from(path);
        let err = if missing {
            PreconditionError::MissingInput { artifact: artifact.clone(), path: path.clone() }
        } else {
            PreconditionError::NotAFile { artifact: artifact.clone(), path: path.clone() }
        };
        prop_assert_eq!(err.path(), path.as_path());
        let rendered = err.to_string();
        prop_assert!(rendered.starts_with(&artifact));
        let shown = path.display().to_string();
        prop_assert!(rendered.contains(&shown));
    }
}
