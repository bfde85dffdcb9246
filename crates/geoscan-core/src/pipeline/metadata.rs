//! Metadata decoding and GPS coordinate extraction.

use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use thiserror::Error;

use crate::types::Coordinates;

/// Two-step metadata access used by the scanner.
///
/// `decode` reads the embedded metadata block from an open file and
/// `coordinates` pulls latitude/longitude out of it. The scanner treats a
/// failure at either step as a reason to skip the file.
pub trait MetadataDecoder {
    /// Decoded metadata block
    type Metadata;

    /// Failure from either step
    type Error: std::fmt::Display;

    fn decode(&self, reader: &mut BufReader<File>) -> Result<Self::Metadata, Self::Error>;

    fn coordinates(&self, metadata: &Self::Metadata) -> Result<Coordinates, Self::Error>;
}

/// Errors from [`ExifDecoder`].
#[derive(Error, Debug)]
pub enum ExifError {
    /// The container or EXIF block could not be read
    #[error(transparent)]
    Read(#[from] exif::Error),

    /// A GPS tag is absent
    #[error("missing {0} tag")]
    MissingTag(Tag),

    /// A GPS tag is present but unusable
    #[error("malformed {tag} tag: {reason}")]
    Malformed { tag: Tag, reason: &'static str },
}

/// EXIF decoder backed by `kamadak-exif`.
///
/// Reads any container the library understands (JPEG, PNG, TIFF, HEIF, WebP).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl MetadataDecoder for ExifDecoder {
    type Metadata = exif::Exif;
    type Error = ExifError;

    fn decode(&self, reader: &mut BufReader<File>) -> Result<exif::Exif, ExifError> {
        Ok(Reader::new().read_from_container(reader)?)
    }

    fn coordinates(&self, exif: &exif::Exif) -> Result<Coordinates, ExifError> {
        Ok(Coordinates {
            latitude: gps_coord(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'N', b'S')?,
            longitude: gps_coord(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'E', b'W')?,
        })
    }
}

/// Read one GPS axis as signed decimal degrees.
fn gps_coord(
    exif: &exif::Exif,
    coord_tag: Tag,
    ref_tag: Tag,
    positive: u8,
    negative: u8,
) -> Result<f64, ExifError> {
    let coord = exif
        .get_field(coord_tag, In::PRIMARY)
        .ok_or(ExifError::MissingTag(coord_tag))?;
    let reference = exif
        .get_field(ref_tag, In::PRIMARY)
        .ok_or(ExifError::MissingTag(ref_tag))?;

    let degrees = dms_to_decimal(&coord.value).ok_or(ExifError::Malformed {
        tag: coord_tag,
        reason: "expected three finite rationals",
    })?;

    let sign = match reference_letter(&reference.value) {
        Some(letter) if letter == positive => 1.0,
        Some(letter) if letter == negative => -1.0,
        _ => {
            return Err(ExifError::Malformed {
                tag: ref_tag,
                reason: "unknown hemisphere reference",
            })
        }
    };

    Ok(sign * degrees)
}

/// Convert degrees/minutes/seconds rationals to decimal degrees.
fn dms_to_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(rationals) if rationals.len() >= 3 => {
            let degrees = rationals[0].to_f64();
            let minutes = rationals[1].to_f64();
            let seconds = rationals[2].to_f64();
            let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
            decimal.is_finite().then_some(decimal)
        }
        _ => None,
    }
}

/// First non-blank ASCII letter of a reference tag, upper-cased.
fn reference_letter(value: &Value) -> Option<u8> {
    match value {
        Value::Ascii(parts) => parts
            .iter()
            .flatten()
            .find(|b| !b.is_ascii_whitespace() && **b != 0)
            .map(u8::to_ascii_uppercase),
        _ => None,
    }
}
