//! Address helpers.

/// Returns the trimmed text after the last comma of an address.
///
/// Addresses are written as `street, city, region`, so the last segment is
/// the coarsest place name. Returns `None` when the address has no comma or
/// the last segment is blank.
///
/// # Examples
///
/// ```
/// use courier_portal::utils::address::last_segment;
///
/// assert_eq!(last_segment("123 Broadway Ave, New York, NY 10001"), Some("NY 10001"));
/// assert_eq!(last_segment("Warehouse 9"), None);
/// ```
pub fn last_segment(address: &str) -> Option<&str> {
    let (_, tail) = address.rsplit_once(',')?;
    let tail = tail.trim();
    (!tail.is_empty()).then_some(tail)
}

/// Like [`last_segment`], falling back to `fallback`.
pub fn last_segment_or<'a>(address: &'a str, fallback: &'a str) -> &'a str {
    last_segment(address).unwrap_or(fallback)
}
