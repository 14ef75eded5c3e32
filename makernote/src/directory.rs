mod debug;
mod lookup;

use makernote_common::{Tag, Value};

use crate::descriptor::{self, Descriptor, DescriptorTable};
use crate::schema::TagSchema;
use crate::store::TagValueStore;

/// Decoded values of one vendor makernote
///
/// A directory is filled by a byte decoder and read afterwards. It does
/// not lock, writes have to be finished before it is shared.
#[derive(Debug, Clone)]
pub struct Directory {
    schema: &'static TagSchema,
    descriptor_table: &'static DescriptorTable,
    store: TagValueStore,
    errors: Vec<String>,
}

static_assertions::assert_impl_all!(Directory: Send, Sync);

impl Directory {
    /// Empty directory that only uses generic descriptions
    pub fn new(schema: &'static TagSchema) -> Self {
        Self {
            schema,
            descriptor_table: &descriptor::GENERIC,
            store: TagValueStore::new(),
            errors: Vec::new(),
        }
    }

    /// Attaches the vendor specific description handlers
    pub fn set_descriptor(&mut self, descriptor_table: &'static DescriptorTable) {
        self.descriptor_table = descriptor_table;
    }

    /// Formatter for this directory
    pub fn descriptor(&self) -> Descriptor<'_> {
        Descriptor::new(self)
    }

    pub fn descriptor_table(&self) -> &'static DescriptorTable {
        self.descriptor_table
    }

    pub fn schema(&self) -> &'static TagSchema {
        self.schema
    }

    /// Vendor display name, like `Apple Makernote`
    pub fn name(&self) -> &'static str {
        self.schema.directory_name()
    }

    /// Name of the tag in this directory's schema
    ///
    /// Independent of whether a value is stored for the tag.
    pub fn tag_name(&self, tag: Tag) -> Option<&'static str> {
        self.schema.name_of(tag)
    }

    pub fn has_tag_name(&self, tag: Tag) -> bool {
        self.schema.contains(tag)
    }

    /// Stores a value, replacing an existing one
    ///
    /// Tags that are not part of the schema are stored as well, they just
    /// have no name.
    pub fn set(&mut self, tag: Tag, value: impl Into<Value>) {
        if !self.schema.contains(tag) {
            tracing::trace!("Storing tag {tag} that is unknown to '{}'", self.name());
        }

        self.store.set(tag, value);
    }

    pub fn get(&self, tag: Tag) -> Option<&Value> {
        self.store.get(tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.store.contains(tag)
    }

    /// Stored tags in the order they were first set
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.store.tags()
    }

    pub fn tag_count(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &TagValueStore {
        &self.store
    }

    /// No values and no errors
    pub fn is_empty(&self) -> bool {
        self.store.is_empty() && self.errors.is_empty()
    }

    /// Records a problem found while decoding this directory
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Human-readable description of the tag's value
    pub fn description(&self, tag: Tag) -> Option<String> {
        self.descriptor().description(tag)
    }
}

impl std::fmt::Display for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.tag_count();
        let unit = if count == 1 { "tag" } else { "tags" };

        write!(f, "{} Directory ({count} {unit})", self.name())
    }
}
