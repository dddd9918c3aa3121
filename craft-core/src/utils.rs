//! Casing transforms used to derive generated identifiers.
//!
//! All functions are total over their input. Callers are responsible for
//! passing a non-empty segment where the result is used as an identifier.

/// Convert a name to a Go package name (e.g., "OrderItem" -> "orderitem").
///
/// Delimiters are kept as-is; only the case changes.
pub fn to_package_name(s: &str) -> String {
    s.to_lowercase()
}

/// Upper-case the first character and keep the rest verbatim
/// (e.g., "order" -> "Order", "orderItem" -> "OrderItem").
///
/// The whole segment is treated as one word, so "order_item" becomes
/// "Order_item" rather than "OrderItem".
pub fn to_type_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character of a type name (e.g., "OrderItem" -> "orderItem").
pub fn to_instance_name(s: &str) -> String {
    let type_name = to_type_name(s);
    let mut chars = type_name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "OrderItem" -> "order_item").
///
/// An underscore goes before every ASCII upper-case letter except the first
/// character, then the whole result is lower-cased. Existing underscores and
/// dashes are left alone.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            result.push('_');
        }
        result.push(c);
    }
    result.to_lowercase()
}
