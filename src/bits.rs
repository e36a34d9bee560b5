//! Bit window extraction from byte slices.
//!
//! Bits are addressed MSB-first: bit 0 is the high bit of the first byte, which
//! matches how network headers are drawn in RFC diagrams.

use tracing::trace;

use crate::errors::ExtractError;

/// Reads `bit_length` bits starting at `bit_offset` as an unsigned value.
///
/// The read loads the smallest 8/16/32/64-bit big-endian container covering
/// `bit_offset % 8 + bit_length` bits, shifts the leading bits of earlier
/// fields out to the left and the trailing bits of later fields out to the
/// right. Only the bytes the window actually touches are read; the rest of
/// the container is zero.
///
/// ```
/// use bitgrid::bits::read_bits;
///
/// // 0000_1010 0100_0101: an 11-bit field starting at bit 5
/// let data = [0x0A, 0x45];
/// assert_eq!(read_bits(&data, 11, 5), Ok(0x245));
/// ```
pub fn read_bits(data: &[u8], bit_length: usize, bit_offset: usize) -> Result<u64, ExtractError> {
    if bit_length == 0 {
        return Err(ExtractError::ZeroWidth);
    }

    let offset_in_byte = (bit_offset % 8) as u32;
    let span = bit_length.saturating_add(offset_in_byte as usize);
    if span > 64 {
        return Err(ExtractError::UnsupportedWidth { span });
    }

    let start = bit_offset / 8;
    let needed = span.div_ceil(8);
    let window = start
        .checked_add(needed)
        .and_then(|end| data.get(start..end))
        .ok_or(ExtractError::OutOfBounds {
            needed: start.saturating_add(needed),
            available: data.len(),
        })?;

    // span <= 64 here, so bit_length fits a u32 shift amount
    let width = bit_length as u32;
    let value = match span {
        0..=8 => u64::from((window[0] << offset_in_byte) >> (8 - width)),
        9..=16 => {
            let word = u16::from_be_bytes(load(window));
            u64::from((word << offset_in_byte) >> (16 - width))
        }
        17..=32 => {
            let word = u32::from_be_bytes(load(window));
            u64::from((word << offset_in_byte) >> (32 - width))
        }
        _ => {
            let word = u64::from_be_bytes(load(window));
            (word << offset_in_byte) >> (64 - width)
        }
    };

    trace!(bit_offset, bit_length, start, needed, value, "read bit window");

    Ok(value)
}

/// Reads a bit window, degrading every failure to `0`.
///
/// Callers are expected to have checked that the window lies inside `data`.
/// A window whose span exceeds 64 bits also yields `0`, so a genuine zero and
/// an unsupported read look the same here; use [`read_bits`] to tell them
/// apart.
pub fn extract_bits(data: &[u8], bit_length: usize, bit_offset: usize) -> u64 {
    read_bits(data, bit_length, bit_offset).unwrap_or_else(|err| {
        trace!(bit_offset, bit_length, %err, "bit window unreadable, using 0");
        0
    })
}

/// Copies `window` into the high end of an `N`-byte big-endian container.
fn load<const N: usize>(window: &[u8]) -> [u8; N] {
    let mut word = [0u8; N];
    word[..window.len()].copy_from_slice(window);
    word
}
