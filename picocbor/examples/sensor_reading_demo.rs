// Example decoding a sensor reading by key lookup

use picocbor::{DecodeError, Decoder};

fn main() -> Result<(), DecodeError> {
    // {"id": "s-1", "temp": 4([-2, 2315]), "ok": true, "raw": h'0102'}
    let reading = [
        0xa4, 0x62, b'i', b'd', 0x63, b's', b'-', b'1', 0x64, b't', b'e', b'm', b'p', 0xc4, 0x82,
        0x21, 0x19, 0x09, 0x0b, 0x62, b'o', b'k', 0xf5, 0x63, b'r', b'a', b'w', 0x42, 0x01, 0x02,
    ];
    println!("Input: {:02x?}", reading);

    let map = Decoder::new(&reading).enter_map()?;
    println!("Map with {} entries", map.pairs_remaining());

    // Lookups work on copies, so order does not matter
    let id = map.find_key_tstr("id")?.get_str()?;
    let (exponent, mantissa) = map.find_key_tstr("temp")?.get_decimal_frac()?;
    let ok = map.find_key_tstr("ok")?.get_bool()?;
    let raw = map.find_key_tstr("raw")?.get_bstr()?;

    println!("id: {}", id);
    println!("temp: {}e{}", mantissa, exponent);
    println!("ok: {}", ok);
    println!("raw: {:02x?}", raw);

    match map.find_key_tstr("humidity") {
        Err(DecodeError::NotFound) => println!("humidity: not reported"),
        Err(e) => return Err(e),
        Ok(_) => println!("humidity: present"),
    }

    println!();
    println!("✅ Successfully decoded sensor reading!");
    Ok(())
}
