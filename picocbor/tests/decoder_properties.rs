// Behavioural properties of the decoder over hand-built inputs

use hex_literal::hex;
use picocbor::{DecodeError, Decoder, MajorType, RecursionLimit};

/// Writes the shortest header for `value` with the given major type and
/// returns the number of bytes used.
fn write_header(major: u8, value: u64, out: &mut [u8]) -> usize {
    let initial = major << 5;
    if value < 24 {
        out[0] = initial | value as u8;
        return 1;
    }
    let (info, width) = if value <= u8::MAX as u64 {
        (24, 1)
    } else if value <= u16::MAX as u64 {
        (25, 2)
    } else if value <= u32::MAX as u64 {
        (26, 4)
    } else {
        (27, 8)
    };
    out[0] = initial | info;
    out[1..=width].copy_from_slice(&value.to_be_bytes()[8 - width..]);
    1 + width
}

/// Following-byte count of the shortest encoding of `value`.
fn following_bytes(value: u64) -> usize {
    match value {
        0..=23 => 0,
        24..=0xff => 1,
        0x100..=0xffff => 2,
        0x1_0000..=0xffff_ffff => 4,
        _ => 8,
    }
}

macro_rules! unsigned_width_tests {
    ($($ty:ident => $getter:ident),*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_unsigned_ $ty _advances_by_header_length>]() {
                    let max = <$ty>::MAX as u64;
                    for value in [0, 1, 23, 24, 0xff, 0x100, 0xffff, 0x1_0000, max / 2, max] {
                        if value > max {
                            continue;
                        }
                        let mut buf = [0u8; 9];
                        let len = write_header(0, value, &mut buf);
                        let mut decoder = Decoder::new(&buf[..len]);
                        assert_eq!(decoder.$getter(), Ok(value as $ty), "value {}", value);
                        assert_eq!(decoder.position(), 1 + following_bytes(value));
                        assert!(decoder.at_end());
                    }
                }

                #[test]
                fn [<test_unsigned_ $ty _rejects_wider_values>]() {
                    let Some(too_wide) = (<$ty>::MAX as u64).checked_add(1) else {
                        return;
                    };
                    let mut buf = [0u8; 9];
                    let len = write_header(0, too_wide, &mut buf);
                    let mut decoder = Decoder::new(&buf[..len]);
                    assert_eq!(decoder.$getter(), Err(DecodeError::Overflow));
                    assert_eq!(decoder.position(), 0);
                }
            }
        )*
    };
}

unsigned_width_tests!(u8 => get_u8, u16 => get_u16, u32 => get_u32);
#[cfg(feature = "int64")]
unsigned_width_tests!(u64 => get_u64);

macro_rules! negative_width_tests {
    ($($ty:ident => $getter:ident),*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_negative_ $ty _bounds>]() {
                    let bound = <$ty>::MAX as u64;
                    for magnitude in [0, 1, 23, 24, bound / 2, bound] {
                        let mut buf = [0u8; 9];
                        let len = write_header(1, magnitude, &mut buf);
                        let mut decoder = Decoder::new(&buf[..len]);
                        let expected = -(magnitude as i128) - 1;
                        assert_eq!(decoder.$getter().map(i128::from), Ok(expected));
                    }
                    let mut buf = [0u8; 9];
                    let len = write_header(1, bound + 1, &mut buf);
                    let mut decoder = Decoder::new(&buf[..len]);
                    assert_eq!(decoder.$getter(), Err(DecodeError::Overflow));
                }
            }
        )*
    };
}

negative_width_tests!(i8 => get_i8, i16 => get_i16, i32 => get_i32);
#[cfg(feature = "int64")]
negative_width_tests!(i64 => get_i64);

#[test]
fn test_uint8_literal_example() {
    let data = hex!("18 2a");
    let mut decoder = Decoder::new(&data);
    assert_eq!(decoder.get_u8(), Ok(42));
    assert_eq!(decoder.position(), 2);
}

#[test]
fn test_negative_128_does_not_fit_i8() {
    // -129 has magnitude 128
    let data = hex!("38 80");
    assert_eq!(Decoder::new(&data).get_i8(), Err(DecodeError::Overflow));
    assert_eq!(Decoder::new(&data).get_i16(), Ok(-129));
}

#[test]
fn test_map_key_lookup_example() {
    let data = hex!("a1 636b6579 01");
    let mut map = Decoder::new(&data).enter_map().unwrap();
    assert_eq!(map.remaining(), 2);
    assert_eq!(map.get_key_tstr("key"), Ok(()));
    assert_eq!(map.get_type(), Ok(MajorType::Unsigned));
    assert_eq!(map.get_u32(), Ok(1));
    assert!(map.at_end());
}

#[test]
fn test_indefinite_array_example() {
    let data = hex!("9f 01 02 ff");
    let mut decoder = Decoder::new(&data);
    let mut array = decoder.enter_array().unwrap();
    assert!(array.is_indefinite());
    assert_eq!(array.get_u32(), Ok(1));
    assert!(!array.at_end());
    assert_eq!(array.get_u32(), Ok(2));
    assert!(array.at_end());
    assert_eq!(array.position(), 3);
    // Reading at the break is an end condition, not a type error
    assert_eq!(array.get_u32(), Err(DecodeError::End));
    decoder.leave_container(array);
    assert_eq!(decoder.position(), 4);
}

#[test]
fn test_empty_indefinite_array_needs_no_reads() {
    let data = hex!("9f ff");
    let array = Decoder::new(&data).enter_array().unwrap();
    assert!(array.at_end());
}

#[test]
fn test_definite_map_allows_exactly_k_keys() {
    // {"a": 1, "b": 2, "c": 3}
    let data = hex!("a3 6161 01 6162 02 6163 03");
    let mut map = Decoder::new(&data).enter_map().unwrap();
    assert_eq!(map.remaining(), 6);
    let mut keys = 0;
    while !map.at_end() {
        map.get_tstr().unwrap();
        map.skip().unwrap();
        keys += 1;
    }
    assert_eq!(keys, 3);
}

#[test]
fn test_definite_map_stops_before_trailing_data() {
    // {"a": 1} followed by an unrelated item
    let data = hex!("a1 6161 01 6162");
    let mut map = Decoder::new(&data).enter_map().unwrap();
    assert_eq!(map.get_tstr(), Ok(&b"a"[..]));
    assert_eq!(map.get_u8(), Ok(1));
    assert!(map.at_end());
    assert_eq!(map.get_tstr(), Err(DecodeError::End));
}

#[test]
fn test_captured_value_decodes_like_the_original() {
    // [1, {"k": [_ -1, h'ff']}, 4(["x"])], then a trailing 7
    let data = hex!("83 01 a1 616b 9f 20 41ff ff c4 81 6178 07");

    let mut decoder = Decoder::new(&data);
    let captured = decoder.get_subcbor().unwrap();
    assert_eq!(captured, &data[..data.len() - 1]);
    assert_eq!(decoder.get_u8(), Ok(7));

    for input in [&data[..], captured] {
        let mut array = Decoder::new(input).enter_array().unwrap();
        assert_eq!(array.remaining(), 3);
        assert_eq!(array.get_u8(), Ok(1));
        let mut map = array.enter_map().unwrap();
        assert_eq!(map.get_str(), Ok("k"));
        let mut inner = map.enter_array().unwrap();
        assert_eq!(inner.get_i8(), Ok(-1));
        assert_eq!(inner.get_bstr(), Ok(&[0xff][..]));
        assert!(inner.at_end());
        map.leave_container(inner);
        assert!(map.at_end());
        array.leave_container(map);
        assert_eq!(array.get_tag(), Ok(4));
        assert_eq!(array.skip(), Ok(()));
        assert!(array.at_end());
    }
}

#[test]
fn test_depth_at_and_over_the_limit() {
    // Five nested arrays: [[[[[0]]]]]
    let data = hex!("81 81 81 81 81 00");
    assert_eq!(Decoder::<RecursionLimit<5>>::with_config(&data).skip(), Ok(()));
    assert_eq!(
        Decoder::<RecursionLimit<4>>::with_config(&data).skip(),
        Err(DecodeError::Recursion)
    );
}

#[test]
fn test_deep_hostile_nesting_fails_cleanly() {
    let data = [0x9fu8; 100_000];
    let mut decoder = Decoder::new(&data);
    assert_eq!(decoder.skip(), Err(DecodeError::Recursion));
}

#[test]
fn test_sibling_cursor_unaffected_by_failure() {
    let data = hex!("82 f6 01");
    let array = Decoder::new(&data).enter_array().unwrap();
    let mut failing = array;
    let mut sibling = array;
    assert_eq!(failing.get_u8(), Err(DecodeError::InvalidType));
    assert_eq!(sibling.get_null(), Ok(()));
    assert_eq!(sibling.get_u8(), Ok(1));
}
