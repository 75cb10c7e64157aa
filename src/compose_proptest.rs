//! Property-based tests for directive parsing and output composition.
//!
//! These tests use proptest to generate random documents and verify that
//! the bucketing and composition invariants hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::compose::{compose, compose_target};
    use crate::directive::parse_document;
    use crate::registry::TargetRegistry;
    use proptest::prelude::*;

    /// Content lines: anything that cannot be mistaken for a directive.
    fn content_line() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _.-]{0,40}"
    }

    fn target_name() -> impl Strategy<Value = String> {
        "[a-z]{1,8}"
    }

    proptest! {
        /// Property: with no directives, every target receives the whole
        /// document, identically, regardless of the registry's contents.
        #[test]
        fn directive_free_documents_reach_every_target_verbatim(
            lines in prop::collection::vec(content_line(), 0..20),
            names in prop::collection::btree_set(target_name(), 1..5),
        ) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let buckets = parse_document(refs.iter().copied()).unwrap();

            let mut registry = TargetRegistry::new();
            for name in &names {
                registry.insert(name.clone(), format!("{name}.md"));
            }

            let mut expected = refs.join("\n").trim_end().to_string();
            expected.push('\n');

            let outputs = compose(&buckets, &registry);
            prop_assert_eq!(outputs.len(), names.len());
            for content in outputs.values() {
                prop_assert_eq!(content, &expected);
            }
        }

        /// Property: targets never named in an open directive all compose to
        /// the same shared-only text.
        #[test]
        fn unmentioned_targets_are_identical(
            shared in prop::collection::vec(content_line(), 0..10),
            scoped in prop::collection::vec(content_line(), 1..10),
        ) {
            let mut doc: Vec<String> = shared.clone();
            doc.push("::only mentioned".to_string());
            doc.extend(scoped);
            doc.push("::end".to_string());

            let buckets = parse_document(doc.iter().map(String::as_str)).unwrap();

            let absent_a = compose_target(&buckets, "absent-a");
            let absent_b = compose_target(&buckets, "absent-b");
            prop_assert_eq!(&absent_a, &absent_b);

            let mut expected = shared.join("\n").trim_end().to_string();
            expected.push('\n');
            prop_assert_eq!(absent_a, expected);
        }

        /// Property: consecutive open directives replace the active scope,
        /// they never accumulate.
        #[test]
        fn open_directives_replace_rather_than_stack(
            first in prop::collection::vec(content_line(), 1..5),
            second in prop::collection::vec(content_line(), 1..5),
        ) {
            let mut doc: Vec<String> = vec!["::only a".to_string()];
            doc.extend(first.clone());
            doc.push("::only b".to_string());
            doc.extend(second.clone());

            let buckets = parse_document(doc.iter().map(String::as_str)).unwrap();

            prop_assert_eq!(buckets.target("a"), first.as_slice());
            prop_assert_eq!(buckets.target("b"), second.as_slice());
        }

        /// Property: trailing text after `::end` changes nothing.
        #[test]
        fn close_directive_ignores_trailing_text(
            lines in prop::collection::vec(content_line(), 1..5),
            suffix in "[a-zA-Z0-9 ]{0,20}",
        ) {
            let build = |close: String| {
                let mut doc: Vec<String> = vec!["::only x".to_string()];
                doc.extend(lines.clone());
                doc.push(close);
                doc.push("after".to_string());
                parse_document(doc.iter().map(String::as_str)).unwrap()
            };

            let bare = build("::end".to_string());
            let suffixed = build(format!("::end{suffix}"));
            prop_assert_eq!(bare, suffixed);
        }

        /// Property: composed output always ends with exactly one newline.
        #[test]
        fn composed_output_ends_with_single_newline(
            lines in prop::collection::vec(content_line(), 0..20),
        ) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let buckets = parse_document(refs.iter().copied()).unwrap();
            let text = compose_target(&buckets, "x");

            prop_assert!(text.ends_with('\n'));
            prop_assert!(!text.ends_with("\n\n"));
        }
    }
}
