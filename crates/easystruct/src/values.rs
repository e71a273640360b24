//! Helpers for list-valued fields

/// Split a raw request value into list items.
///
/// Items are separated by commas and trimmed of surrounding whitespace.
/// Empty items are kept so that `"1,,2"` fails to convert to integers
/// instead of silently shrinking.
///
/// ```
/// let items: Vec<&str> = easystruct::split_values("red, green ,blue").collect();
/// assert_eq!(items, ["red", "green", "blue"]);
/// ```
pub fn split_values(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim)
}
