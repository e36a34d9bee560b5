//! Schemas: fixed, hand-curated row-groups of fields, plus the built-in headers.
//!
//! A schema is data, not code. Adding a protocol means adding a `const`
//! [`Schema`]; the extractor, formatter and renderer stay untouched.

use crate::{
    display::DisplayType::{Binary, Decimal, Hex, Ipv4},
    errors::SchemaError,
    field::FieldSpec,
};

/// A cluster of fields shown together as one header row and one value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGroup<'a> {
    /// Fields in display order.
    pub fields: &'a [FieldSpec<'a>],
}

/// An ordered list of row-groups describing one header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema<'a> {
    /// Short protocol name, e.g. `ipv4`.
    pub name: &'a str,
    /// Row-groups in display order.
    pub groups: &'a [RowGroup<'a>],
}

impl<'a> Schema<'a> {
    pub const fn new(name: &'a str, groups: &'a [RowGroup<'a>]) -> Self {
        Schema { name, groups }
    }

    /// Iterates every field of every group in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec<'a>> + '_ {
        self.groups.iter().flat_map(|group| group.fields.iter())
    }

    /// The furthest bit covered by any field.
    pub fn total_bits(&self) -> usize {
        self.fields().map(FieldSpec::end_bit).max().unwrap_or(0)
    }

    /// Checks every field is 1 to 64 bits wide and no group is empty.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (index, group) in self.groups.iter().enumerate() {
            if group.fields.is_empty() {
                return Err(SchemaError::EmptyGroup(index));
            }

            for field in group.fields {
                if field.bit_length == 0 || field.bit_length > 64 {
                    return Err(SchemaError::InvalidFieldSize {
                        field: field.name.to_string(),
                        bit_length: field.bit_length,
                    });
                }
            }
        }

        Ok(())
    }
}

/// IPv4 fixed header (RFC 791), options excluded.
#[rustfmt::skip]
pub const IPV4_HEADER: Schema<'static> = Schema {
    name: "ipv4",
    groups: &[
        RowGroup {
            fields: &[
                FieldSpec { name: "Version", bit_length: 4, bit_offset: 0, display: Decimal },
                FieldSpec { name: "IHL", bit_length: 4, bit_offset: 4, display: Decimal },
                FieldSpec { name: "Type of Service", bit_length: 8, bit_offset: 8, display: Binary },
                FieldSpec { name: "Total Length", bit_length: 16, bit_offset: 16, display: Decimal },
            ],
        },
        RowGroup {
            fields: &[
                FieldSpec { name: "Identification", bit_length: 16, bit_offset: 32, display: Decimal },
                FieldSpec { name: "Flags", bit_length: 3, bit_offset: 48, display: Binary },
                FieldSpec { name: "Fragment Offset", bit_length: 13, bit_offset: 51, display: Decimal },
                FieldSpec { name: "Time To Live", bit_length: 8, bit_offset: 64, display: Decimal },
            ],
        },
        RowGroup {
            fields: &[
                FieldSpec { name: "Protocol", bit_length: 8, bit_offset: 72, display: Decimal },
                FieldSpec { name: "Header Checksum", bit_length: 16, bit_offset: 80, display: Hex },
                FieldSpec { name: "Source Address", bit_length: 32, bit_offset: 96, display: Ipv4 },
                FieldSpec { name: "Destination Address", bit_length: 32, bit_offset: 128, display: Ipv4 },
            ],
        },
    ],
};

/// UDP header (RFC 768).
#[rustfmt::skip]
pub const UDP_HEADER: Schema<'static> = Schema {
    name: "udp",
    groups: &[RowGroup {
        fields: &[
            FieldSpec { name: "Source Port", bit_length: 16, bit_offset: 0, display: Decimal },
            FieldSpec { name: "Destination Port", bit_length: 16, bit_offset: 16, display: Decimal },
            FieldSpec { name: "Length", bit_length: 16, bit_offset: 32, display: Decimal },
            FieldSpec { name: "Checksum", bit_length: 16, bit_offset: 48, display: Hex },
        ],
    }],
};

/// TCP fixed header (RFC 9293), options excluded.
#[rustfmt::skip]
pub const TCP_HEADER: Schema<'static> = Schema {
    name: "tcp",
    groups: &[
        RowGroup {
            fields: &[
                FieldSpec { name: "Source Port", bit_length: 16, bit_offset: 0, display: Decimal },
                FieldSpec { name: "Destination Port", bit_length: 16, bit_offset: 16, display: Decimal },
                FieldSpec { name: "Sequence Number", bit_length: 32, bit_offset: 32, display: Decimal },
                FieldSpec { name: "Acknowledgment Number", bit_length: 32, bit_offset: 64, display: Decimal },
            ],
        },
        RowGroup {
            fields: &[
                FieldSpec { name: "Data Offset", bit_length: 4, bit_offset: 96, display: Decimal },
                FieldSpec { name: "Reserved", bit_length: 4, bit_offset: 100, display: Binary },
                FieldSpec { name: "Flags", bit_length: 8, bit_offset: 104, display: Binary },
                FieldSpec { name: "Window", bit_length: 16, bit_offset: 112, display: Decimal },
            ],
        },
        RowGroup {
            fields: &[
                FieldSpec { name: "Checksum", bit_length: 16, bit_offset: 128, display: Hex },
                FieldSpec { name: "Urgent Pointer", bit_length: 16, bit_offset: 144, display: Decimal },
            ],
        },
    ],
};

/// Every built-in schema.
pub const BUILTIN: &[Schema<'static>] = &[IPV4_HEADER, UDP_HEADER, TCP_HEADER];

/// Looks up a built-in schema by name, ignoring ASCII case.
pub fn builtin(name: &str) -> Option<&'static Schema<'static>> {
    BUILTIN
        .iter()
        .find(|schema| schema.name.eq_ignore_ascii_case(name))
}
