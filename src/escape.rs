//! @ai:module:intent Query-style percent escaping for inline member comments
//! @ai:module:layer domain
//! @ai:module:public_api escape_comment, unescape_comment
//! @ai:module:stateless true

/// @ai:intent Escape text so it contains no structural characters
/// @ai:post result only contains [A-Za-z0-9-_.~+%]
/// @ai:example ("has a , in it") -> "has+a+%2C+in+it"
/// @ai:effects pure
pub fn escape_comment(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                escaped.push(byte as char)
            }
            b' ' => escaped.push('+'),
            _ => escaped.push_str(&format!("%{:02X}", byte)),
        }
    }

    escaped
}

/// @ai:intent Reverse escape_comment
/// @ai:post malformed %-sequences are kept verbatim
/// @ai:effects pure
pub fn unescape_comment(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi << 4) | lo);
                        i += 3;
                        continue;
                    }
                    _ => decoded.push(b'%'),
                }
            }
            other => decoded.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    match *byte? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
