//! Property-based tests for author name handling.

#[cfg(test)]
mod proptest_tests {
    use crate::author::{parse_author_header, parse_name, sort_key, Author};
    use proptest::prelude::*;

    proptest! {
        /// Property: the nickname is always the leading part of `last_first`
        #[test]
        fn last_first_starts_with_nick(name in "[A-Z][a-z]{1,8}( [A-Za-z][a-z]{0,8}\\.?){0,3}") {
            let author = Author::parse(&name, "", &[]).unwrap();
            prop_assert!(
                author.last_first.starts_with(&author.nick),
                "'{}' does not start with '{}'",
                author.last_first,
                author.nick
            );
        }

        /// Property: no words are lost when a name is split
        #[test]
        fn parse_name_keeps_every_word(name in "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8}){1,3}") {
            let parts = parse_name(&name).unwrap();
            let rejoined = format!("{} {}", parts.forename, parts.surname);
            prop_assert_eq!(rejoined, name);
        }

        /// Property: sort keys of plain ASCII names are lowercase
        #[test]
        fn sort_key_is_lowercase_for_ascii(name in "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,3}") {
            let author = Author::parse(&name, "", &[]).unwrap();
            let key = sort_key(&author);
            prop_assert_eq!(key.to_lowercase(), key);
        }

        /// Property: each angle-bracket citation becomes one author
        #[test]
        fn angled_header_yields_one_entry_per_author(
            names in prop::collection::vec("[A-Z][a-z]{1,6} [A-Z][a-z]{1,6}", 1..5)
        ) {
            let header = names
                .iter()
                .map(|n| format!("{} <{}@example.org>", n, n.replace(' ', ".").to_lowercase()))
                .collect::<Vec<_>>()
                .join(", ");
            let parsed = parse_author_header(&header);
            prop_assert_eq!(parsed.len(), names.len());
            for ((name, _), expected) in parsed.iter().zip(&names) {
                prop_assert_eq!(name, expected);
            }
        }
    }
}
