//! Enumeration style descriptions

use makernote_common::math::{SafeSub, ToUsize};

/// Label for `value` in a list of labels starting at `base`
///
/// Returns `labels[value - base]` and `None` whenever that index does not
/// exist, including negative indices and overflowing arithmetic.
///
/// ```
/// # use makernote::indexed::resolve;
/// let labels = ["HDR Image", "Original Image"];
/// assert_eq!(resolve(0, 0, &labels), Some("HDR Image"));
/// assert_eq!(resolve(4, 3, &labels), Some("Original Image"));
/// assert_eq!(resolve(2, 0, &labels), None);
/// assert_eq!(resolve(-1, 0, &labels), None);
/// assert_eq!(resolve(0, 0, &[]), None);
/// ```
pub fn resolve<'a>(value: i64, base: i64, labels: &[&'a str]) -> Option<&'a str> {
    let index = value.safe_sub(base).ok()?.usize().ok()?;
    labels.get(index).copied()
}

/// Label for `value` in a sparse table of codes
///
/// ```
/// # use makernote::indexed::resolve_code;
/// let codes = [(0x1000, "Compact Digital Camera"), (0x2000, "High-end NX Camera")];
/// assert_eq!(resolve_code(0x2000, &codes), Some("High-end NX Camera"));
/// assert_eq!(resolve_code(0x3000, &codes), None);
/// ```
pub fn resolve_code<'a>(value: i64, codes: &[(i64, &'a str)]) -> Option<&'a str> {
    codes
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, label)| *label)
}
