// Example walking an arbitrary item and printing its structure

use picocbor::{DecodeError, Decoder, MajorType, RecursionLimit};

type Walker<'a> = Decoder<'a, RecursionLimit<4>>;

fn walk(decoder: &mut Walker<'_>, depth: usize) -> Result<(), DecodeError> {
    let indent = "  ".repeat(depth);
    match decoder.get_type()? {
        MajorType::Unsigned | MajorType::Negative => {
            println!("{}Int: {}", indent, decoder.get_i64()?)
        }
        MajorType::Bytes => println!("{}Bytes: {:02x?}", indent, decoder.get_bstr()?),
        MajorType::Text => println!("{}Text: '{}'", indent, decoder.get_str()?),
        MajorType::Tag => {
            println!("{}Tag: {}", indent, decoder.get_tag()?);
            walk(decoder, depth + 1)?;
        }
        major @ (MajorType::Array | MajorType::Map) => {
            if depth >= 4 {
                // Too deep to print, but skip still bounds the nesting
                println!("{}...", indent);
                return decoder.skip();
            }
            let mut container = if major == MajorType::Map {
                decoder.enter_map()?
            } else {
                decoder.enter_array()?
            };
            let kind = if container.is_indefinite() {
                "indefinite"
            } else {
                "definite"
            };
            println!("{}Start{:?} ({})", indent, major, kind);
            while !container.at_end() {
                walk(&mut container, depth + 1)?;
            }
            decoder.leave_container(container);
            println!("{}End{:?}", indent, major);
        }
        MajorType::Float => match decoder.get_bool() {
            Ok(b) => println!("{}Bool: {}", indent, b),
            Err(_) => match decoder.get_simple() {
                Ok(value) => println!("{}Simple: {}", indent, value),
                Err(_) => {
                    println!("{}Float (skipped)", indent);
                    decoder.skip_simple()?;
                }
            },
        },
    }
    Ok(())
}

fn main() -> Result<(), DecodeError> {
    // [_ 1, -2, "three", {"four": [h'04', null]}, 0("2013"), 1.5, [[[[[[]]]]]]]
    let data = [
        0x9f, 0x01, 0x21, 0x65, b't', b'h', b'r', b'e', b'e', 0xa1, 0x64, b'f', b'o', b'u', b'r',
        0x82, 0x41, 0x04, 0xf6, 0xc0, 0x64, b'2', b'0', b'1', b'3', 0xf9, 0x3e, 0x00, 0x81, 0x81,
        0x81, 0x81, 0x81, 0x80, 0xff,
    ];
    println!("Input: {} bytes", data.len());

    let mut decoder = Walker::with_config(&data);
    while !decoder.at_end() {
        walk(&mut decoder, 0)?;
    }

    println!();
    println!("✅ Walked {} bytes", decoder.position());
    Ok(())
}
