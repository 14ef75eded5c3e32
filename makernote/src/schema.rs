//! Tag names per vendor
//!
//! A [`TagSchema`] is a constant table. Vendor schemas live in statics and
//! are shared by every [`Directory`](crate::Directory) of that vendor.

pub(crate) mod macros;

use std::collections::HashMap;

use makernote_common::Tag;
use once_cell::sync::OnceCell;

/// Mapping from tag-id to display name for one vendor
///
/// ```
/// # use makernote::{Tag, TagSchema};
/// static SCHEMA: TagSchema = TagSchema::new("Example Makernote", &[(Tag(1), "Version")]);
///
/// assert_eq!(SCHEMA.directory_name(), "Example Makernote");
/// assert_eq!(SCHEMA.name_of(Tag(1)), Some("Version"));
/// assert_eq!(SCHEMA.name_of(Tag(2)), None);
/// ```
pub struct TagSchema {
    name: &'static str,
    tags: &'static [(Tag, &'static str)],
    index: OnceCell<HashMap<Tag, &'static str>>,
}

static_assertions::assert_impl_all!(TagSchema: Send, Sync);

impl TagSchema {
    pub const fn new(name: &'static str, tags: &'static [(Tag, &'static str)]) -> Self {
        Self {
            name,
            tags,
            index: OnceCell::new(),
        }
    }

    /// Display name of the vendor directory, like `Apple Makernote`
    pub fn directory_name(&self) -> &'static str {
        self.name
    }

    pub fn name_of(&self, tag: Tag) -> Option<&'static str> {
        self.index().get(&tag).copied()
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.index().contains_key(&tag)
    }

    /// Known tags in declaration order
    pub fn tags(&self) -> impl Iterator<Item = (Tag, &'static str)> {
        self.tags.iter().copied()
    }

    /// Number of distinct tag-ids
    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn index(&self) -> &HashMap<Tag, &'static str> {
        self.index
            .get_or_init(|| self.tags.iter().copied().collect())
    }
}

impl std::fmt::Debug for TagSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagSchema")
            .field("name", &self.name)
            .field("tags", &self.tags.len())
            .finish()
    }
}
