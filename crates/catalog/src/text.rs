//! Text shaping for card and cart display.

use std::borrow::Cow;

/// Most characters a card description may show before truncation.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Marker appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Truncate a description for card display.
///
/// Descriptions of up to [`DESCRIPTION_LIMIT`] characters pass through
/// unchanged (borrowed, no allocation). Longer ones are cut to the first
/// [`DESCRIPTION_LIMIT`] characters with [`ELLIPSIS`] appended. The limit
/// counts characters, not bytes, so multi-byte text is never split inside
/// a code point.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        None => Cow::Borrowed(description),
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
            truncated.push_str(&description[..cut]);
            truncated.push_str(ELLIPSIS);
            Cow::Owned(truncated)
        }
    }
}

/// Format a price for the cart panel: fixed two decimals, no separator
/// logic. `19.5` becomes `"19.50"`.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_passes_through_borrowed() {
        let text = "Fits true to size.";
        let out = truncate_description(text);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn exactly_limit_is_untouched() {
        let text = "a".repeat(DESCRIPTION_LIMIT);
        let out = truncate_description(&text);
        assert_eq!(out, text);
        assert!(!out.ends_with(ELLIPSIS));
    }

    #[test]
    fn one_over_limit_is_cut_with_ellipsis() {
        let text = "b".repeat(DESCRIPTION_LIMIT + 1);
        let out = truncate_description(&text);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.len());
        assert!(out.ends_with(ELLIPSIS));
        assert_eq!(&out[..DESCRIPTION_LIMIT], &text[..DESCRIPTION_LIMIT]);
    }

    #[test]
    fn multibyte_text_is_cut_on_character_boundaries() {
        // 120 two-byte characters; a byte-indexed cut would panic or split
        // a code point.
        let text = "é".repeat(120);
        let out = truncate_description(&text);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.len());
        assert!(out.starts_with(&"é".repeat(DESCRIPTION_LIMIT)));
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn empty_description_stays_empty() {
        assert_eq!(truncate_description(""), "");
    }

    #[test]
    fn cart_price_always_shows_two_decimals() {
        assert_eq!(format_price(19.5), "19.50");
        assert_eq!(format_price(100.0), "100.00");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(7.999), "8.00");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: output length and content follow the truncation
            /// contract for any input, including multi-byte text.
            #[test]
            fn truncation_matches_contract(description in any::<String>()) {
                let out = truncate_description(&description);
                let char_count = description.chars().count();

                if char_count <= DESCRIPTION_LIMIT {
                    prop_assert_eq!(out.as_ref(), description.as_str());
                } else {
                    let mut expected: String =
                        description.chars().take(DESCRIPTION_LIMIT).collect();
                    expected.push_str(ELLIPSIS);
                    prop_assert_eq!(out.as_ref(), expected.as_str());
                }
            }

            /// Property: inputs within the limit are returned without
            /// allocating; only oversized inputs produce an owned string.
            #[test]
            fn short_inputs_borrow(description in any::<String>()) {
                let out = truncate_description(&description);
                let within_limit = description.chars().count() <= DESCRIPTION_LIMIT;
                prop_assert_eq!(matches!(out, Cow::Borrowed(_)), within_limit);
            }

            /// Property: formatted prices always carry exactly two decimals.
            #[test]
            fn formatted_price_has_two_decimals(price in 0.0f64..1_000_000.0) {
                let out = format_price(price);
                let (_, decimals) = out.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 2);
            }
        }
    }
}
