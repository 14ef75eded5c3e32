use chrono::{NaiveDate, NaiveDateTime};

/// Date and time as found in makernote string values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTime {
    FixedOffset(chrono::DateTime<chrono::FixedOffset>),
    Naive(chrono::NaiveDateTime),
}

/// Formats with time, the fractional seconds part is optional
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y:%m:%d %H:%M:%S%.f",
    "%Y:%m:%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y.%m.%d %H:%M:%S%.f",
    "%Y.%m.%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Date only formats, `%Y%m%d` is used by IPTC
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

impl DateTime {
    /// Parses the date formats used by Exif, XMP and IPTC
    ///
    /// A trailing `Z` or `+hh:mm` offset gives a [`DateTime::FixedOffset`].
    ///
    /// ```
    /// # use makernote_common::datetime::DateTime;
    /// let naive = DateTime::parse("2012:09:16 14:08:04").unwrap();
    /// assert_eq!(naive.to_string(), "2012-09-16 14:08:04");
    ///
    /// let offset = DateTime::parse("2020-07-07T14:08:27.890+02:00").unwrap();
    /// assert_eq!(offset.to_string(), "2020-07-07 14:08:27.890 +02:00");
    ///
    /// assert!(DateTime::parse("    :  :     :  :  ").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim_matches(|c: char| c == '\0' || c.is_whitespace());

        if let Some(naive) = s.strip_suffix('Z') {
            return Self::parse_naive(naive)
                .map(|x| Self::FixedOffset(x.and_utc().fixed_offset()));
        }

        for format in DATE_TIME_FORMATS {
            let format = format!("{format}%:z");
            if let Ok(datetime) = chrono::DateTime::parse_from_str(s, &format) {
                return Some(Self::FixedOffset(datetime));
            }
        }

        Self::parse_naive(s).map(Self::Naive)
    }

    fn parse_naive(s: &str) -> Option<NaiveDateTime> {
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .or_else(|| {
                DATE_FORMATS.iter().find_map(|format| {
                    NaiveDate::parse_from_str(s, format)
                        .ok()
                        .and_then(|x| x.and_hms_opt(0, 0, 0))
                })
            })
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedOffset(d) => write!(f, "{}", d),
            Self::Naive(d) => write!(f, "{}", d),
        }
    }
}
