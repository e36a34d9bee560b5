use bitgrid::{
    DisplayType,
    bits::{extract_bits, read_bits},
    display::try_format,
    errors::ExtractError,
    render, render_rows,
    schema::IPV4_HEADER,
};
use proptest::prelude::*;

/// A buffer plus a bit window guaranteed to lie inside it with a span of at most 64 bits.
fn buffer_and_window() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    (1usize..=64, 0usize..8)
        .prop_filter("span fits a 64-bit container", |(len, shift)| len + shift <= 64)
        .prop_flat_map(|(bit_length, offset_in_byte)| {
            let needed = (offset_in_byte + bit_length).div_ceil(8);
            (0usize..8, 0usize..4).prop_flat_map(move |(start, slack)| {
                prop::collection::vec(any::<u8>(), start + needed + slack).prop_map(move |data| {
                    (data, bit_length, start * 8 + offset_in_byte)
                })
            })
        })
}

/// Bit-by-bit reference reader.
fn reference(data: &[u8], bit_length: usize, bit_offset: usize) -> u64 {
    (bit_offset..bit_offset + bit_length).fold(0u64, |acc, pos| {
        let bit = (data[pos / 8] >> (7 - pos % 8)) & 1;
        (acc << 1) | u64::from(bit)
    })
}

proptest! {
    #[test]
    fn prop_value_fits_width((data, bit_length, bit_offset) in buffer_and_window()) {
        let value = read_bits(&data, bit_length, bit_offset).unwrap();
        if bit_length < 64 {
            prop_assert!(value < 1u64 << bit_length);
        }
    }

    #[test]
    fn prop_matches_bitwise_reference((data, bit_length, bit_offset) in buffer_and_window()) {
        prop_assert_eq!(
            read_bits(&data, bit_length, bit_offset).unwrap(),
            reference(&data, bit_length, bit_offset)
        );
    }

    #[test]
    fn prop_adjacent_fields_rebuild_byte(byte in any::<u8>(), split in 1usize..8) {
        // high field first in the buffer, low field after it
        let data = [byte];
        let high = extract_bits(&data, split, 0);
        let low = extract_bits(&data, 8 - split, split);
        prop_assert_eq!(low | (high << (8 - split)), u64::from(byte));
    }

    #[test]
    fn prop_binary_matches_decimal((data, bit_length, bit_offset) in buffer_and_window()) {
        let binary = try_format(&data, DisplayType::Binary, bit_length, bit_offset).unwrap();
        let decimal = try_format(&data, DisplayType::Decimal, bit_length, bit_offset).unwrap();

        prop_assert_eq!(binary.len(), bit_length + 2);
        prop_assert!(binary.starts_with("0b"));
        let parsed = u64::from_str_radix(&binary[2..], 2).unwrap();
        prop_assert_eq!(parsed.to_string(), decimal);
    }

    #[test]
    fn prop_hex_matches_value((data, bit_length, bit_offset) in buffer_and_window()) {
        let hex = try_format(&data, DisplayType::Hex, bit_length, bit_offset).unwrap();
        let value = read_bits(&data, bit_length, bit_offset).unwrap();
        prop_assert_eq!(u64::from_str_radix(&hex[2..], 16).unwrap(), value);
    }

    #[test]
    fn prop_ipv4_octets_in_network_order(octets in any::<[u8; 4]>(), lead in 0usize..4) {
        let mut data = vec![0u8; lead];
        data.extend_from_slice(&octets);

        let text = try_format(&data, DisplayType::Ipv4, 32, lead * 8).unwrap();
        let expected = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn prop_wide_spans_are_rejected(
        (offset_in_byte, bit_length) in (1usize..8).prop_flat_map(|off| (Just(off), (65 - off)..=64))
    ) {
        let data = [0xFFu8; 16];

        prop_assert_eq!(
            read_bits(&data, bit_length, offset_in_byte),
            Err(ExtractError::UnsupportedWidth { span: bit_length + offset_in_byte })
        );
        prop_assert_eq!(extract_bits(&data, bit_length, offset_in_byte), 0);
    }

    #[test]
    fn prop_render_never_reads_past_valid_length(
        data in prop::collection::vec(any::<u8>(), 0..40),
        valid in 0usize..40
    ) {
        let rows = render_rows(&IPV4_HEADER, &data, valid);
        let limit = valid.min(data.len());

        for (row, group) in rows.iter().zip(IPV4_HEADER.groups) {
            prop_assert_eq!(row.labels.len(), row.values.len());
            prop_assert!(row.len() <= group.fields.len());

            for (field, value) in group.fields.iter().zip(&row.values) {
                prop_assert!(field.cutoff_byte() <= limit);
                if field.byte_span() > limit {
                    prop_assert!(value.is_none());
                }
            }
        }

        prop_assert_eq!(render(&IPV4_HEADER, &data, valid), render(&IPV4_HEADER, &data, valid));
    }
}
