//! Rendering a schema over a captured buffer into a row-grouped table.

use std::io::{self, Write};

use tracing::debug;

use crate::{
    schema::Schema,
    table::{BoxTable, TableStyle, TableWriter},
};

/// Labels and values of one row-group after the truncation cutoff.
///
/// `labels` and `values` always have the same length. A value is `None` when
/// the field could not be shown with its display type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedRow {
    pub labels: Vec<String>,
    pub values: Vec<Option<String>>,
}

impl RenderedRow {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up the value shown under `label`, if the field survived the cutoff.
    pub fn value(&self, label: &str) -> Option<Option<&str>> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i].as_deref())
    }
}

/// Number of bytes that may be read: the requested length, capped by what was captured.
pub fn valid_length(requested: usize, captured: usize) -> usize {
    requested.min(captured)
}

/// Extracts and formats every row-group of `schema` that fits in `valid_length` bytes.
///
/// Within a group, fields are taken in order while
/// `(bit_offset + bit_length) / 8 <= valid_length`; the first field past the
/// cutoff ends the group. Values are read from the first `valid_length` bytes
/// only, so a field that passes the cutoff but still needs one more byte gets
/// an absent value instead of an out-of-bounds read.
pub fn render_rows(schema: &Schema<'_>, data: &[u8], valid_length: usize) -> Vec<RenderedRow> {
    let valid_length = valid_length.min(data.len());
    let data = &data[..valid_length];

    let mut rows = Vec::with_capacity(schema.groups.len());

    for (index, group) in schema.groups.iter().enumerate() {
        let mut row = RenderedRow {
            labels: Vec::with_capacity(group.fields.len()),
            values: Vec::with_capacity(group.fields.len()),
        };

        for field in group.fields {
            if field.cutoff_byte() > valid_length {
                debug!(
                    schema = schema.name,
                    group = index,
                    field = field.name,
                    valid_length,
                    "field past truncation cutoff, dropping rest of group"
                );
                break;
            }

            row.labels.push(field.name.to_string());
            row.values.push(field.format(data));
        }

        rows.push(row);
    }

    rows
}

/// Renders `schema` over `data` as an ASCII table.
///
/// ```
/// use bitgrid::{render::render, schema::UDP_HEADER};
///
/// let datagram = [0x00, 0x35, 0xC3, 0x50, 0x00, 0x1C, 0xAB, 0xCD];
/// let text = render(&UDP_HEADER, &datagram, datagram.len());
///
/// assert!(text.contains("| 53          | 50000            | 28     | 0xabcd   |"));
/// ```
pub fn render(schema: &Schema<'_>, data: &[u8], valid_length: usize) -> String {
    render_with(
        schema,
        data,
        valid_length,
        BoxTable::new(TableStyle::default()),
    )
}

/// Renders `schema` over `data` through any [`TableWriter`].
///
/// Each row-group becomes a separator, a header row, a separator and a value
/// row. Absent values are written as empty cells; a group with no field left
/// after the cutoff is not drawn at all.
pub fn render_with<T: TableWriter>(
    schema: &Schema<'_>,
    data: &[u8],
    valid_length: usize,
    mut table: T,
) -> String {
    let rows = render_rows(schema, data, valid_length);

    for row in rows.iter().filter(|row| !row.is_empty()) {
        let labels: Vec<&str> = row.labels.iter().map(String::as_str).collect();
        let values: Vec<&str> = row.values.iter().map(|v| v.as_deref().unwrap_or("")).collect();

        table.separator();
        table.header_row(&labels);
        table.separator();
        table.value_row(&values);
    }

    debug!(
        schema = schema.name,
        rows = rows.len(),
        fields = rows.iter().map(RenderedRow::len).sum::<usize>(),
        "rendered table"
    );

    table.finish()
}

/// Prints the table for `schema` over `data` to `out`.
///
/// `requested` is the length the caller believes the header has; it is capped
/// by `data.len()`, the bytes actually captured. The table is preceded by an
/// empty line and followed by a newline.
pub fn print_table<W: Write>(
    out: &mut W,
    schema: &Schema<'_>,
    data: &[u8],
    requested: usize,
    style: TableStyle,
) -> io::Result<()> {
    let length = valid_length(requested, data.len());
    let text = render_with(schema, data, length, BoxTable::new(style));

    writeln!(out)?;
    writeln!(out, "{text}")
}
