//! Single-responsibility path helpers: separator normalization and
//! source-path to class-name derivation.

/// Maven/Gradle Java source root.
pub const DEFAULT_SOURCE_ROOT: &str = "/src/main/java/";

/// Java source file suffix.
pub const DEFAULT_SOURCE_SUFFIX: &str = ".java";

/// Normalize path separators to `/`.
///
/// # Examples
///
/// ```
/// use qmetrics_path::normalize_slashes;
///
/// assert_eq!(normalize_slashes(r"foo\bar\Baz.java"), "foo/bar/Baz.java");
/// assert_eq!(normalize_slashes("already/fine"), "already/fine");
/// ```
#[must_use]
pub fn normalize_slashes(path: &str) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Derive a dotted class identifier from a source file path.
///
/// Everything after the last occurrence of `source_root` is kept, `suffix`
/// is stripped once, and the remaining separators become dots. When the
/// marker is absent the slash-normalized path is returned unchanged.
/// Such paths keep their suffix and are not dotted: `weird/path/File.java`
/// stays a path and is never rewritten to `weird.path.File`.
///
/// # Examples
///
/// ```
/// use qmetrics_path::class_name_for;
///
/// assert_eq!(
///     class_name_for("a/b/src/main/java/x/y/Z.java", "/src/main/java/", ".java"),
///     "x.y.Z"
/// );
/// assert_eq!(
///     class_name_for(r"weird\path\File.java", "/src/main/java/", ".java"),
///     "weird/path/File.java"
/// );
/// ```
#[must_use]
pub fn class_name_for(path: &str, source_root: &str, suffix: &str) -> String {
    let normalized = normalize_slashes(path);
    let marker = normalize_slashes(source_root);
    if marker.is_empty() {
        return normalized;
    }
    match normalized.rsplit_once(marker.as_str()) {
        Some((_, rel)) => {
            let rel = if suffix.is_empty() {
                rel
            } else {
                rel.strip_suffix(suffix).unwrap_or(rel)
            };
            rel.replace('/', ".")
        }
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn class_name_strips_root_and_suffix() {
        assert_eq!(
            class_name_for(
                "/home/ci/repo/src/main/java/concordia/app/Payment.java",
                DEFAULT_SOURCE_ROOT,
                DEFAULT_SOURCE_SUFFIX
            ),
            "concordia.app.Payment"
        );
    }

    #[test]
    fn class_name_handles_windows_paths() {
        assert_eq!(
            class_name_for(
                r"C:\work\repo\src\main\java\a\b\C.java",
                DEFAULT_SOURCE_ROOT,
                DEFAULT_SOURCE_SUFFIX
            ),
            "a.b.C"
        );
    }

    #[test]
    fn class_name_uses_last_marker() {
        assert_eq!(
            class_name_for(
                "x/src/main/java/vendored/src/main/java/p/Q.java",
                DEFAULT_SOURCE_ROOT,
                DEFAULT_SOURCE_SUFFIX
            ),
            "p.Q"
        );
    }

    #[test]
    fn class_name_keeps_foreign_suffix() {
        assert_eq!(
            class_name_for(
                "r/src/main/java/p/Gen.kt",
                DEFAULT_SOURCE_ROOT,
                DEFAULT_SOURCE_SUFFIX
            ),
            "p.Gen.kt"
        );
    }

    #[test]
    fn relative_root_without_leading_slash_is_unmapped() {
        assert_eq!(
            class_name_for(
                "src/main/java/p/Q.java",
                DEFAULT_SOURCE_ROOT,
                DEFAULT_SOURCE_SUFFIX
            ),
            "src/main/java/p/Q.java"
        );
    }

    #[test]
    fn empty_marker_returns_normalized_path() {
        assert_eq!(class_name_for(r"a\B.java", "", ".java"), "a/B.java");
    }

    proptest! {
        #[test]
        fn normalize_slashes_no_backslashes(path in "\\PC*") {
            let normalized = normalize_slashes(&path);
            prop_assert!(!normalized.contains('\\'));
        }

        #[test]
        fn normalize_slashes_idempotent(path in "\\PC*") {
            let once = normalize_slashes(&path);
            let twice = normalize_slashes(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn mapped_class_names_have_no_separators(
            prefix in "[a-z]{1,6}(/[a-z]{1,6}){0,3}",
            pkg in "[a-z]{1,6}(/[a-z]{1,6}){0,3}",
            class in "[A-Z][a-zA-Z]{0,8}",
        ) {
            let path = format!("{prefix}/src/main/java/{pkg}/{class}.java");
            let name = class_name_for(&path, DEFAULT_SOURCE_ROOT, DEFAULT_SOURCE_SUFFIX);
            prop_assert!(!name.contains('/'));
            prop_assert!(name.ends_with(&class));
            prop_assert!(!name.ends_with(".java"));
        }
    }
}
