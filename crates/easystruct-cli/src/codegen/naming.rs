//! Naming of generated symbols.

/// Abbreviate a struct name to the receiver used in generated code.
///
/// Keeps the uppercase letters in order and lowercases them. A name without
/// uppercase letters yields an empty string.
///
/// # Examples
///
/// ```
/// use easystruct_cli::codegen::naming::receiver;
///
/// assert_eq!(receiver("UserProfile"), "up");
/// assert_eq!(receiver("ID"), "id");
/// assert_eq!(receiver("a"), "");
/// ```
pub fn receiver(struct_name: &str) -> String {
    struct_name
        .chars()
        .filter(|c| c.is_uppercase())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn receiver___camel_case___keeps_word_initials() {
        assert_eq!(receiver("UserProfile"), "up");
        assert_eq!(receiver("SearchQuery"), "sq");
        assert_eq!(receiver("Filter"), "f");
    }

    #[test]
    fn receiver___acronym___keeps_every_letter() {
        assert_eq!(receiver("ID"), "id");
        assert_eq!(receiver("HTTPHeaders"), "httph");
    }

    #[test]
    fn receiver___no_uppercase___returns_empty() {
        assert_eq!(receiver("a"), "");
        assert_eq!(receiver("lower_snake"), "");
        assert_eq!(receiver(""), "");
    }

    #[test]
    fn receiver___digits_and_underscores___are_dropped() {
        assert_eq!(receiver("Page2Request_V1"), "prv");
    }

    #[test]
    fn receiver___non_ascii_uppercase___lowercases() {
        assert_eq!(receiver("ÉtatCivil"), "éc");
    }

    proptest! {
        #[test]
        fn receiver___never_contains_uppercase(name in "[A-Za-z0-9_]{0,32}") {
            prop_assert!(!receiver(&name).chars().any(char::is_uppercase));
        }

        #[test]
        fn receiver___length_matches_uppercase_count(name in "[A-Za-z0-9_]{0,32}") {
            let uppercase = name.chars().filter(char::is_ascii_uppercase).count();

            prop_assert_eq!(receiver(&name).len(), uppercase);
        }

        #[test]
        fn receiver___distributes_over_concatenation(
            a in "[A-Za-z]{0,16}",
            b in "[A-Za-z]{0,16}",
        ) {
            let joined = format!("{a}{b}");

            prop_assert_eq!(receiver(&joined), receiver(&a) + &receiver(&b));
        }
    }
}
