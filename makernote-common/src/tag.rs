/// Tag-id within one makernote schema
///
/// Tag-id spaces are per vendor. The same id can mean different things in
/// two schemas.
///
/// ```
/// # use makernote_common::Tag;
/// assert_eq!(Tag(0x0E00).to_string(), "0x0e00");
/// assert_eq!(Tag(0xA).to_string(), "0x000a");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub fn id(self) -> u16 {
        self.0
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
