use makernote_common::{Rational, Tag, Value};

use crate::error::{Error, Result, ResultExt};

impl super::Directory {
    fn lookup<'a, T>(
        &'a self,
        tag: Tag,
        expected: &'static str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(value) = self.get(tag) else {
            return Ok(None);
        };

        convert(value)
            .e(|| {
                tracing::debug!("Tag {tag} can't be read as {expected}");
                Error::WrongType {
                    tag,
                    expected,
                    actual: value.kind(),
                }
            })
            .map(Some)
    }

    /// Returns the value as integer
    ///
    /// See [`Value::as_i64`] for the coercions that are applied.
    pub fn lookup_i64(&self, tag: Tag) -> Result<Option<i64>> {
        self.lookup(tag, "integer", Value::as_i64)
    }

    pub fn lookup_f64(&self, tag: Tag) -> Result<Option<f64>> {
        self.lookup(tag, "float", Value::as_f64)
    }

    pub fn lookup_rational(&self, tag: Tag) -> Result<Option<Rational>> {
        self.lookup(tag, "rational", Value::as_rational)
    }

    pub fn lookup_rationals(&self, tag: Tag) -> Result<Option<Vec<Rational>>> {
        self.lookup(tag, "rational array", |x| {
            x.as_rational_array().map(<[_]>::to_vec)
        })
    }

    pub fn lookup_bytes(&self, tag: Tag) -> Result<Option<Vec<u8>>> {
        self.lookup(tag, "byte array", Value::as_bytes)
    }

    pub fn lookup_i64_array(&self, tag: Tag) -> Result<Option<Vec<i64>>> {
        self.lookup(tag, "integer array", Value::as_i64_array)
    }

    /// Returns a value that was stored as string
    ///
    /// In contrast to [`Self::string`], this does not render other values.
    pub fn lookup_str(&self, tag: Tag) -> Result<Option<&str>> {
        self.lookup(tag, "string", Value::as_str)
    }

    #[cfg(feature = "chrono")]
    pub fn lookup_date_time(
        &self,
        tag: Tag,
    ) -> Result<Option<makernote_common::datetime::DateTime>> {
        let Some(s) = self.lookup_str(tag)? else {
            return Ok(None);
        };

        makernote_common::datetime::DateTime::parse(s)
            .e(|| Error::InvalidDateTime {
                tag,
                value: s.to_string(),
            })
            .map(Some)
    }

    pub fn integer(&self, tag: Tag) -> Option<i64> {
        self.lookup_i64(tag).ok().flatten()
    }

    pub fn float(&self, tag: Tag) -> Option<f64> {
        self.lookup_f64(tag).ok().flatten()
    }

    pub fn rational(&self, tag: Tag) -> Option<Rational> {
        self.lookup_rational(tag).ok().flatten()
    }

    pub fn bytes(&self, tag: Tag) -> Option<Vec<u8>> {
        self.lookup_bytes(tag).ok().flatten()
    }

    pub fn int_array(&self, tag: Tag) -> Option<Vec<i64>> {
        self.lookup_i64_array(tag).ok().flatten()
    }

    /// Raw value rendered as text
    ///
    /// This is not trimmed and has no vendor specific interpretation. Use
    /// [`Self::description`] for that.
    pub fn string(&self, tag: Tag) -> Option<String> {
        self.get(tag).map(ToString::to_string)
    }
}
