//! # bitgrid
//!
//! Bit-field extraction and tabular rendering for fixed-layout binary headers.
//!
//! Describe a header as row-groups of named fields (bit length, bit offset,
//! display type), hand over the captured bytes, and get back a bordered table
//! with a header row and a value row per group. Fields past the captured
//! length are left out instead of being read out of bounds.
//!
//! ## Example
//!
//! ```
//! use bitgrid::{render::render, schema::IPV4_HEADER};
//!
//! let packet = [
//!     0x45, 0x00, 0x00, 0x3C, 0x1C, 0x46, 0x40, 0x00, 0x40, 0x06,
//!     0xB1, 0xE6, 0xAC, 0x10, 0x0A, 0x63, 0xAC, 0x10, 0x0A, 0x0C,
//! ];
//! let text = render(&IPV4_HEADER, &packet, packet.len());
//!
//! assert!(text.contains("| Version        | IHL             |"));
//! assert!(text.contains("172.16.10.99"));
//! ```

pub mod bits;
pub mod display;
pub mod errors;
pub mod field;
pub mod render;
pub mod schema;
pub mod table;

pub use display::DisplayType;
pub use field::FieldSpec;
pub use render::{RenderedRow, print_table, render, render_rows};
pub use schema::{RowGroup, Schema};
