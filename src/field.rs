//! Definition of the named bit fields a [crate::schema::Schema] is built from.

use crate::display::DisplayType;

/// A single named field: where its bits are and how to show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec<'a> {
    /// Label shown in the header row.
    pub name: &'a str,
    /// Width in bits, 1 to 64.
    pub bit_length: usize,
    /// Offset in bits from the start of the buffer, MSB-first.
    pub bit_offset: usize,
    /// How the extracted value is rendered.
    pub display: DisplayType,
}

impl<'a> FieldSpec<'a> {
    pub const fn new(
        name: &'a str,
        bit_length: usize,
        bit_offset: usize,
        display: DisplayType,
    ) -> Self {
        FieldSpec {
            name,
            bit_length,
            bit_offset,
            display,
        }
    }

    /// First bit past the end of the field, saturating at `usize::MAX`.
    pub const fn end_bit(&self) -> usize {
        self.bit_offset.saturating_add(self.bit_length)
    }

    /// Byte index used for the truncation cutoff: `end_bit() / 8`, rounded down.
    ///
    /// A field is shown while this is no greater than the valid length.
    pub const fn cutoff_byte(&self) -> usize {
        self.end_bit() / 8
    }

    /// Number of bytes needed to hold the whole field, counted from byte 0.
    pub const fn byte_span(&self) -> usize {
        self.end_bit().div_ceil(8)
    }

    /// Formats this field's value out of `data`. See [crate::display::format_field].
    pub fn format(&self, data: &[u8]) -> Option<String> {
        crate::display::format_field(data, self.display, self.bit_length, self.bit_offset)
    }
}
