//! Grid drawing for rendered rows.
//!
//! The renderer only talks to [`TableWriter`]; [`BoxTable`] is the bundled
//! implementation, drawing bordered cells in ASCII or Unicode box glyphs.
//!
//! ```
//! use bitgrid::table::{BoxTable, TableStyle, TableWriter};
//!
//! let mut table = BoxTable::new(TableStyle::Ascii);
//! table.separator();
//! table.header_row(&["Version", "IHL"]);
//! table.separator();
//! table.value_row(&["4", "5"]);
//!
//! assert_eq!(
//!     table.finish(),
//!     "+---------+-----+\n\
//!      | Version | IHL |\n\
//!      +---------+-----+\n\
//!      | 4       | 5   |\n\
//!      +---------+-----+"
//! );
//! ```

/// The narrow interface between the renderer and a table implementation.
pub trait TableWriter {
    /// Appends a horizontal rule.
    fn separator(&mut self);
    /// Appends a row of field labels.
    fn header_row(&mut self, cells: &[&str]);
    /// Appends a row of field values.
    fn value_row(&mut self, cells: &[&str]);
    /// Serializes everything appended so far.
    fn finish(self) -> String;
}

/// Glyph set used by [`BoxTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableStyle {
    /// `+`, `-` and `|`.
    #[default]
    Ascii,
    /// Light box-drawing characters.
    Unicode,
}

struct Glyphs {
    horizontal: char,
    vertical: char,
    /// left, junction, right
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

impl TableStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            TableStyle::Ascii => Glyphs {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            TableStyle::Unicode => Glyphs {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
        }
    }
}

#[derive(Debug, Clone)]
enum Line {
    Separator,
    Row(Vec<String>),
}

/// Bordered grid with columns shared by every row.
///
/// Column widths are the widest cell in each column, counted in `char`s.
/// Rows shorter than the widest row are padded with empty cells. A separator
/// before the first row or after the last one merges into the border.
#[derive(Debug, Clone, Default)]
pub struct BoxTable {
    style: TableStyle,
    lines: Vec<Line>,
}

impl BoxTable {
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            lines: Vec::new(),
        }
    }

    fn push_row(&mut self, cells: &[&str]) {
        self.lines
            .push(Line::Row(cells.iter().map(|cell| cell.to_string()).collect()));
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();

        for line in &self.lines {
            if let Line::Row(cells) = line {
                if widths.len() < cells.len() {
                    widths.resize(cells.len(), 0);
                }

                for (width, cell) in widths.iter_mut().zip(cells) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        widths
    }
}

fn rule(out: &mut String, widths: &[usize], horizontal: char, [left, junction, right]: [char; 3]) {
    out.push(left);

    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction);
        }

        out.extend(std::iter::repeat_n(horizontal, width + 2));
    }

    out.push(right);
}

fn row(out: &mut String, widths: &[usize], vertical: char, cells: &[String]) {
    out.push(vertical);

    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width - cell.chars().count();

        out.push(' ');
        out.push_str(cell);
        out.extend(std::iter::repeat_n(' ', pad + 1));
        out.push(vertical);
    }
}

impl TableWriter for BoxTable {
    fn separator(&mut self) {
        self.lines.push(Line::Separator);
    }

    fn header_row(&mut self, cells: &[&str]) {
        self.push_row(cells);
    }

    fn value_row(&mut self, cells: &[&str]) {
        self.push_row(cells);
    }

    fn finish(self) -> String {
        let widths = self.column_widths();
        if widths.is_empty() {
            return String::new();
        }

        let glyphs = self.style.glyphs();
        let mut out = String::new();
        rule(&mut out, &widths, glyphs.horizontal, glyphs.top);

        // Separators are emitted lazily so leading, trailing and doubled ones
        // collapse into a single rule.
        let mut pending_rule = false;
        let mut any_row = false;

        for line in &self.lines {
            match line {
                Line::Separator => pending_rule = any_row,
                Line::Row(cells) => {
                    if pending_rule {
                        out.push('\n');
                        rule(&mut out, &widths, glyphs.horizontal, glyphs.middle);
                        pending_rule = false;
                    }

                    out.push('\n');
                    row(&mut out, &widths, glyphs.vertical, cells);
                    any_row = true;
                }
            }
        }

        out.push('\n');
        rule(&mut out, &widths, glyphs.horizontal, glyphs.bottom);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let mut table = BoxTable::new(TableStyle::Ascii);
        table.separator();
        assert_eq!(table.finish(), "");
    }

    #[test]
    fn test_columns_shared_across_rows() {
        let mut table = BoxTable::default();
        table.header_row(&["a", "bb"]);
        table.value_row(&["cccc", "d"]);

        assert_eq!(
            table.finish(),
            "+------+----+\n\
             | a    | bb |\n\
             | cccc | d  |\n\
             +------+----+"
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = BoxTable::new(TableStyle::Ascii);
        table.header_row(&["x", "y", "z"]);
        table.separator();
        table.value_row(&["1"]);

        assert_eq!(
            table.finish(),
            "+---+---+---+\n\
             | x | y | z |\n\
             +---+---+---+\n\
             | 1 |   |   |\n\
             +---+---+---+"
        );
    }

    #[test]
    fn test_doubled_and_trailing_separators_collapse() {
        let mut table = BoxTable::new(TableStyle::Ascii);
        table.value_row(&["1"]);
        table.separator();
        table.separator();
        table.value_row(&["2"]);
        table.separator();

        assert_eq!(table.finish(), "+---+\n| 1 |\n+---+\n| 2 |\n+---+");
    }

    #[test]
    fn test_unicode_style() {
        let mut table = BoxTable::new(TableStyle::Unicode);
        table.separator();
        table.header_row(&["IHL", "TTL"]);
        table.separator();
        table.value_row(&["5", "64"]);

        assert_eq!(
            table.finish(),
            "┌─────┬─────┐\n\
             │ IHL │ TTL │\n\
             ├─────┼─────┤\n\
             │ 5   │ 64  │\n\
             └─────┴─────┘"
        );
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let mut table = BoxTable::new(TableStyle::Ascii);
        table.value_row(&["é"]);
        table.value_row(&["ab"]);

        assert_eq!(table.finish(), "+----+\n| é  |\n| ab |\n+----+");
    }
}
