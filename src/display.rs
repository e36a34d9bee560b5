//! Turning extracted bit fields into display strings.
//!
//! A [`DisplayType`] picks the textual convention for a field:
//! - **Binary**: `0b` followed by exactly `bit_length` digits, MSB first.
//! - **Decimal**: unsigned decimal.
//! - **Hex**: `0x` followed by lowercase hex digits, no padding.
//! - **Ipv4**: dotted quad, most significant octet first. 32-bit fields only.
//! - **Ascii**: the raw bytes, one `char` per byte. Byte-aligned fields only.
//!
//! Shape mismatches (an IPv4 display on a 16-bit field, ASCII on a field that
//! does not start and end on byte boundaries) are not fatal; they produce no
//! value and the renderer leaves the cell empty.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::{
    bits::read_bits,
    errors::{ExtractError, FormatError},
};

/// Textual rendering convention for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DisplayType {
    Binary,
    Decimal,
    Hex,
    Ipv4,
    Ascii,
}

/// Formats the field at `bit_offset`/`bit_length` of `data` as `display_type`.
///
/// ```
/// use bitgrid::display::{try_format, DisplayType};
///
/// let data = [192, 168, 1, 1];
/// assert_eq!(try_format(&data, DisplayType::Ipv4, 32, 0).unwrap(), "192.168.1.1");
/// assert_eq!(try_format(&data, DisplayType::Binary, 4, 0).unwrap(), "0b1100");
/// ```
pub fn try_format(
    data: &[u8],
    display_type: DisplayType,
    bit_length: usize,
    bit_offset: usize,
) -> Result<String, FormatError> {
    match display_type {
        DisplayType::Binary => {
            let value = read_bits(data, bit_length, bit_offset)?;
            Ok(format!("0b{value:0bit_length$b}"))
        }
        DisplayType::Decimal => Ok(read_bits(data, bit_length, bit_offset)?.to_string()),
        DisplayType::Hex => Ok(format!("{:#x}", read_bits(data, bit_length, bit_offset)?)),
        DisplayType::Ipv4 => {
            if bit_length != 32 {
                return Err(FormatError::NotIpv4Width(bit_length));
            }

            let value = read_bits(data, bit_length, bit_offset)?;
            Ok(Ipv4Addr::from(value as u32).to_string())
        }
        DisplayType::Ascii => {
            if bit_offset % 8 != 0 || bit_length % 8 != 0 {
                return Err(FormatError::NotByteAligned {
                    bit_offset,
                    bit_length,
                });
            }

            let bytes = byte_range(data, bit_offset / 8, bit_length / 8)?;
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Formats a field, returning `None` when it cannot be shown.
///
/// This is the form the renderer uses: every [`FormatError`] becomes an
/// absent value.
pub fn format_field(
    data: &[u8],
    display_type: DisplayType,
    bit_length: usize,
    bit_offset: usize,
) -> Option<String> {
    match try_format(data, display_type, bit_length, bit_offset) {
        Ok(text) => Some(text),
        Err(err) => {
            trace!(?display_type, bit_offset, bit_length, %err, "field has no display value");
            None
        }
    }
}

fn byte_range(data: &[u8], byte_offset: usize, byte_length: usize) -> Result<&[u8], ExtractError> {
    let end = byte_offset.saturating_add(byte_length);

    data.get(byte_offset..end)
        .ok_or(ExtractError::OutOfBounds {
            needed: end,
            available: data.len(),
        })
}
