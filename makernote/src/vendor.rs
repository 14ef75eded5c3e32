//! Makernote vendors with known tag names and descriptions
//!
//! Each vendor module exports a [`Tag`](crate::Tag) constant per known tag,
//! the vendor's `SCHEMA` and its `DESCRIPTOR` table.

pub mod apple;
pub mod kyocera;
pub mod leica;
pub mod reconyx;
pub mod ricoh;
pub mod samsung;
pub mod sanyo;
pub mod sigma;

use crate::descriptor::DescriptorTable;
use crate::schema::TagSchema;
use crate::Directory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Apple,
    Kyocera,
    LeicaType5,
    ReconyxHyperFire,
    Ricoh,
    SamsungType2,
    Sanyo,
    Sigma,
}

impl Vendor {
    pub const ALL: &'static [Self] = &[
        Self::Apple,
        Self::Kyocera,
        Self::LeicaType5,
        Self::ReconyxHyperFire,
        Self::Ricoh,
        Self::SamsungType2,
        Self::Sanyo,
        Self::Sigma,
    ];

    pub fn schema(self) -> &'static TagSchema {
        match self {
            Self::Apple => &apple::SCHEMA,
            Self::Kyocera => &kyocera::SCHEMA,
            Self::LeicaType5 => &leica::SCHEMA,
            Self::ReconyxHyperFire => &reconyx::SCHEMA,
            Self::Ricoh => &ricoh::SCHEMA,
            Self::SamsungType2 => &samsung::SCHEMA,
            Self::Sanyo => &sanyo::SCHEMA,
            Self::Sigma => &sigma::SCHEMA,
        }
    }

    pub fn descriptor_table(self) -> &'static DescriptorTable {
        match self {
            Self::Apple => &apple::DESCRIPTOR,
            Self::Kyocera => &kyocera::DESCRIPTOR,
            Self::LeicaType5 => &leica::DESCRIPTOR,
            Self::ReconyxHyperFire => &reconyx::DESCRIPTOR,
            Self::Ricoh => &ricoh::DESCRIPTOR,
            Self::SamsungType2 => &samsung::DESCRIPTOR,
            Self::Sanyo => &sanyo::DESCRIPTOR,
            Self::Sigma => &sigma::DESCRIPTOR,
        }
    }

    /// Directory name, like `Sanyo Makernote`
    pub fn name(self) -> &'static str {
        self.schema().directory_name()
    }

    /// Empty directory with this vendor's names and descriptions
    ///
    /// ```
    /// # use makernote::vendor::{self, Vendor};
    /// let mut directory = Vendor::Apple.directory();
    /// directory.set(vendor::apple::HDR_IMAGE_TYPE, 3);
    ///
    /// assert_eq!(
    ///     directory.description(vendor::apple::HDR_IMAGE_TYPE).as_deref(),
    ///     Some("HDR Image")
    /// );
    /// ```
    pub fn directory(self) -> Directory {
        let mut directory = Directory::new(self.schema());
        directory.set_descriptor(self.descriptor_table());
        directory
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
