//! Property-based tests for LineDocument

use proptest::prelude::*;
use scribe_text::{LineDocument, Locator, Pattern};

proptest! {
    #[test]
    fn split_join_round_trip(text in "[a-z \n]{0,64}") {
        let doc = LineDocument::new(text.clone());
        let rejoined = doc.lines().join("\n");
        prop_assert_eq!(&rejoined, &text);
        let redoc = LineDocument::new(rejoined);
        prop_assert_eq!(redoc.lines(), doc.lines());
    }

    #[test]
    fn insert_at_adds_exactly_one_line(text in "[a-z\n]{0,32}", at in -40isize..40) {
        let mut doc = LineDocument::new(text);
        let before = doc.line_count();
        doc.insert_line("inserted", &Locator::At(at)).unwrap();
        prop_assert_eq!(doc.line_count(), before + 1);
        prop_assert!(doc.lines().contains(&"inserted"));
    }

    #[test]
    fn delete_every_line_leaves_no_match(text in "[ab\n]{0,32}") {
        let mut doc = LineDocument::new(text);
        let pattern = Pattern::from("ab");
        doc.delete_every_line(&pattern);
        prop_assert!(doc.lines().iter().all(|line| !line.contains("ab")));
    }

    #[test]
    fn empty_insert_is_noop(text in "[a-z\n]{0,32}", at in -10isize..10) {
        let mut doc = LineDocument::new(text.clone());
        let empty: [&str; 0] = [];
        doc.insert_lines(&empty, &Locator::At(at)).unwrap();
        prop_assert_eq!(doc.text(), text.as_str());
    }
}
