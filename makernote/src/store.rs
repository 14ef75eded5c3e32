use std::collections::HashMap;

use makernote_common::{Tag, Value};

/// Raw values of one makernote, keyed by tag-id
///
/// Keeps the order in which tags were first stored. Storing a tag again
/// replaces the value in place.
#[derive(Debug, Clone, Default)]
pub struct TagValueStore {
    entries: Vec<(Tag, Value)>,
    index: HashMap<Tag, usize>,
}

impl TagValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `tag` and returns the value it replaced
    pub fn set(&mut self, tag: Tag, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();

        if let Some(position) = self.index.get(&tag) {
            if let Some((_, old)) = self.entries.get_mut(*position) {
                tracing::debug!("Overwriting value of tag {tag}");
                return Some(std::mem::replace(old, value));
            }
        }

        self.index.insert(tag, self.entries.len());
        self.entries.push((tag, value));

        None
    }

    pub fn get(&self, tag: Tag) -> Option<&Value> {
        let position = self.index.get(&tag)?;
        self.entries.get(*position).map(|(_, value)| value)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.index.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags in the order they were first stored
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.iter().map(|(tag, _)| *tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &Value)> {
        self.entries.iter().map(|(tag, value)| (*tag, value))
    }
}
