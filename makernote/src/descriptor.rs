//! Human-readable descriptions of tag values
//!
//! Every [`Directory`] has a [`DescriptorTable`] that maps tag-ids to
//! [`Handler`]s. Tags without a handler get the [generic
//! description](Descriptor::generic_description). Handlers usually call one of
//! the helpers on [`Descriptor`] that fall back to the generic description
//! when the value does not fit.

use std::collections::HashMap;

use makernote_common::Tag;
use once_cell::sync::OnceCell;

use crate::indexed;
use crate::Directory;

/// Vendor specific description of one tag
pub type Handler = fn(&Descriptor<'_>, Tag) -> Option<String>;

/// Tag-id to [`Handler`] dispatch table of one vendor
///
/// ```
/// # use makernote::descriptor::{Descriptor, DescriptorTable};
/// # use makernote::Tag;
/// fn on_off(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
///     descriptor.indexed_description(tag, 0, &["Off", "On"])
/// }
///
/// static TABLE: DescriptorTable = DescriptorTable::new(&[(Tag(0x10), on_off)]);
///
/// assert!(TABLE.handler(Tag(0x10)).is_some());
/// assert!(TABLE.handler(Tag(0x11)).is_none());
/// ```
pub struct DescriptorTable {
    handlers: &'static [(Tag, Handler)],
    index: OnceCell<HashMap<Tag, Handler>>,
}

/// Table without any handlers, everything gets the generic description
pub static GENERIC: DescriptorTable = DescriptorTable::new(&[]);

static_assertions::assert_impl_all!(DescriptorTable: Send, Sync);

impl DescriptorTable {
    pub const fn new(handlers: &'static [(Tag, Handler)]) -> Self {
        Self {
            handlers,
            index: OnceCell::new(),
        }
    }

    pub fn handler(&self, tag: Tag) -> Option<Handler> {
        self.index
            .get_or_init(|| self.handlers.iter().copied().collect())
            .get(&tag)
            .copied()
    }

    /// Tags that have a vendor specific description
    pub fn tags(&self) -> impl Iterator<Item = Tag> {
        self.handlers.iter().map(|(tag, _)| *tag)
    }
}

impl std::fmt::Debug for DescriptorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tags()).finish()
    }
}

/// Labels for [`Descriptor::bit_flag_description`], least significant bit
/// first
#[derive(Debug, Clone, Copy)]
pub enum BitLabel<'l> {
    /// Bit is not reported
    Skip,
    /// Label is only shown if the bit is set
    Set(&'l str),
    /// Labels for a cleared and a set bit
    Either(&'l str, &'l str),
}

const ORIENTATION_LABELS: &[&str] = &[
    "Top, left side (Horizontal / normal)",
    "Top, right side (Mirror horizontal)",
    "Bottom, right side (Rotate 180)",
    "Bottom, left side (Mirror vertical)",
    "Left side, top (Mirror horizontal and rotate 270 CW)",
    "Right side, top (Rotate 90 CW)",
    "Right side, bottom (Mirror horizontal and rotate 90 CW)",
    "Left side, bottom (Rotate 270 CW)",
];

/// Formatter bound to one [`Directory`]
///
/// Has no state besides the directory, descriptions only change if the
/// directory's values change.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<'a> {
    directory: &'a Directory,
}

impl<'a> Descriptor<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &'a Directory {
        self.directory
    }

    /// Description of the tag's value, `None` if the tag is not set
    pub fn description(&self, tag: Tag) -> Option<String> {
        if !self.directory.contains(tag) {
            return None;
        }

        match self.directory.descriptor_table().handler(tag) {
            Some(handler) => handler(self, tag),
            None => self.generic_description(tag),
        }
    }

    /// Description without vendor knowledge
    ///
    /// Arrays with more than 16 entries are summarized.
    pub fn generic_description(&self, tag: Tag) -> Option<String> {
        let value = self.directory.get(tag)?;

        if let Some(len) = value.array_len() {
            if len > 16 {
                return Some(format!("[{len} values]"));
            }
        }

        Some(value.to_string())
    }

    fn or_generic(&self, tag: Tag, description: Option<String>) -> Option<String> {
        description.or_else(|| self.generic_description(tag))
    }

    /// Label from a list of labels for consecutive values starting at `base`
    ///
    /// See [`indexed::resolve`].
    pub fn indexed_description(&self, tag: Tag, base: i64, labels: &[&str]) -> Option<String> {
        let value = self.directory.integer(tag);
        let label = value.and_then(|value| indexed::resolve(value, base, labels));

        if label.is_none() {
            tracing::debug!("No label for value {value:?} of tag {tag}");
        }

        self.or_generic(tag, label.map(ToString::to_string))
    }

    /// Label from a table of sparse codes
    pub fn code_description(&self, tag: Tag, codes: &[(i64, &str)]) -> Option<String> {
        let value = self.directory.integer(tag);
        let label = value.and_then(|value| indexed::resolve_code(value, codes));

        if label.is_none() {
            tracing::debug!("No label for code {value:?} of tag {tag}");
        }

        self.or_generic(tag, label.map(ToString::to_string))
    }

    /// Size of binary data like `(12 bytes)`
    pub fn byte_length_description(&self, tag: Tag) -> Option<String> {
        let description = self.directory.bytes(tag).map(|bytes| {
            let unit = if bytes.len() == 1 { "byte" } else { "bytes" };
            format!("({} {unit})", bytes.len())
        });

        self.or_generic(tag, description)
    }

    pub fn simple_rational_description(&self, tag: Tag) -> Option<String> {
        let description = self
            .directory
            .rational(tag)
            .map(|x| x.to_simple_string(true));

        self.or_generic(tag, description)
    }

    pub fn decimal_rational_description(&self, tag: Tag, places: usize) -> Option<String> {
        let description = self
            .directory
            .rational(tag)
            .and_then(|x| x.checked_f64().ok())
            .map(|x| format!("{x:.places$}"));

        self.or_generic(tag, description)
    }

    pub fn decimal_description(&self, tag: Tag, places: usize) -> Option<String> {
        let description = self
            .directory
            .float(tag)
            .map(|x| format!("{x:.places$}"));

        self.or_generic(tag, description)
    }

    /// Value as integer, also for strings that contain an integer
    pub fn integer_description(&self, tag: Tag) -> Option<String> {
        self.formatted_integer(tag, |x| x.to_string())
    }

    pub fn formatted_integer(&self, tag: Tag, format: impl FnOnce(i64) -> String) -> Option<String> {
        let description = self.directory.integer(tag).map(format);
        self.or_generic(tag, description)
    }

    /// Version numbers stored as four bytes
    ///
    /// See [`version_string`].
    pub fn version_bytes_description(&self, tag: Tag, major_digits: usize) -> Option<String> {
        let description = self
            .directory
            .int_array(tag)
            .map(|x| version_string(&x, major_digits));

        self.or_generic(tag, description)
    }

    /// Labels for the bits of an integer value, joined by `, `
    pub fn bit_flag_description(&self, tag: Tag, labels: &[BitLabel<'_>]) -> Option<String> {
        let Some(value) = self.directory.integer(tag) else {
            return self.generic_description(tag);
        };

        let parts = labels
            .iter()
            .enumerate()
            .filter_map(|(bit, label)| {
                let is_set = u32::try_from(bit)
                    .ok()
                    .and_then(|bit| value.checked_shr(bit))
                    .is_some_and(|x| x & 1 == 1);

                match label {
                    BitLabel::Skip => None,
                    BitLabel::Set(label) => is_set.then_some(*label),
                    BitLabel::Either(clear, set) => Some(if is_set { *set } else { *clear }),
                }
            })
            .collect::<Vec<_>>();

        Some(parts.join(", "))
    }

    /// Text up to the first NULL or non-ASCII byte
    pub fn seven_bit_string_description(&self, tag: Tag) -> Option<String> {
        let description = self.directory.bytes(tag).map(|bytes| {
            let text = bytes
                .into_iter()
                .take_while(|x| *x != 0 && x.is_ascii())
                .collect::<Vec<_>>();

            String::from_utf8_lossy(&text).to_string()
        });

        self.or_generic(tag, description)
    }

    /// TIFF style orientation values `1..=8`
    pub fn orientation_description(&self, tag: Tag) -> Option<String> {
        self.indexed_description(tag, 1, ORIENTATION_LABELS)
    }
}

/// Version from up to four components
///
/// Components can be ASCII digits or plain numbers. A leading zero is
/// dropped and a `.` is placed before the component at `major_digits`.
/// Other values below `'0'`, including negative ones, are shifted by `'0'`
/// as well and end up as punctuation, `-1` becomes `/`.
///
/// ```
/// # use makernote::descriptor::version_string;
/// assert_eq!(version_string(&[0x30, 0x32, 0x31, 0x30], 2), "2.10");
/// assert_eq!(version_string(&[0, 1, 0, 0], 2), "1.00");
/// assert_eq!(version_string(&[0x30, 0x31, 0x30, 0x30, 0x39], 2), "1.00");
/// ```
pub fn version_string(components: &[i64], major_digits: usize) -> String {
    let mut version = String::new();

    for (i, component) in components.iter().take(4).enumerate() {
        if i == major_digits {
            version.push('.');
        }

        let code = if *component < i64::from(b'0') {
            component.checked_add(i64::from(b'0'))
        } else {
            Some(*component)
        };

        let Some(c) = code
            .and_then(|x| u32::try_from(x).ok())
            .and_then(char::from_u32)
        else {
            continue;
        };

        if i == 0 && c == '0' {
            continue;
        }

        version.push(c);
    }

    version
}
