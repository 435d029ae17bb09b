/// Encode bytes as lowercase hex with a `0x` prefix. Empty input yields `"0x"`.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_bare_prefix() {
        assert_eq!(to_hex(b""), "0x");
    }

    #[test]
    fn output_is_lowercase_two_chars_per_byte() {
        assert_eq!(to_hex([0xABu8, 0xCD, 0x01]), "0xabcd01");
    }

    #[test]
    fn length_and_decode_match_input() {
        let inputs: [&[u8]; 4] = [&[], &[0x00], &[0xff; 7], &[0x12, 0x34, 0x56, 0x78, 0x9a]];
        for bytes in inputs {
            let encoded = to_hex(bytes);
            assert_eq!(encoded.len(), 2 * bytes.len() + 2);
            let decoded = hex::decode(encoded.strip_prefix("0x").unwrap()).unwrap();
            assert_eq!(decoded, bytes);
        }
    }
}
