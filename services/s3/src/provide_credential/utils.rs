use vodsign_core::hash::base64_decode;

/// Decode a settings value that may be stored lightly obfuscated.
///
/// The settings exporter writes secrets either as plain text, as
/// `ENC_<base64>`, or as `REV_ENC_<base64 of the reversed string>`. A value
/// that fails to decode is passed through unchanged so a misconfigured
/// store surfaces as a signing failure rather than a silent credential
/// swap.
pub(crate) fn decode_obfuscated(value: &str) -> String {
    if let Some(encoded) = value.strip_prefix("REV_ENC_") {
        match decode_utf8(encoded) {
            Some(reversed) => return reversed.chars().rev().collect::<String>().trim().to_string(),
            None => {
                log::warn!("failed to decode REV_ENC_ settings value, using it as-is");
                return value.to_string();
            }
        }
    }

    if let Some(encoded) = value.strip_prefix("ENC_") {
        match decode_utf8(encoded) {
            Some(plain) => return plain.trim().to_string(),
            None => {
                log::warn!("failed to decode ENC_ settings value, using it as-is");
                return value.to_string();
            }
        }
    }

    value.to_string()
}

fn decode_utf8(encoded: &str) -> Option<String> {
    let bytes = base64_decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("plain-value" => "plain-value"; "plain value passes through")]
    #[test_case("ENC_c2VjcmV0" => "secret"; "base64 encoded")]
    #[test_case("ENC_IHdKYWxyWFV0bkZFTUkg" => "wJalrXUtnFEMI"; "base64 encoded with padding spaces")]
    #[test_case("REV_ENC_dGVyY2Vz" => "secret"; "reversed base64 encoded")]
    #[test_case("ENC_not base64!!!" => "ENC_not base64!!!"; "broken encoding passes through")]
    fn test_decode_obfuscated(value: &str) -> String {
        decode_obfuscated(value)
    }

    #[test]
    fn test_decode_full_secret() {
        // REV_ENC_ form of a realistic 40 character secret key.
        let encoded = "REV_ENC_WUVLRUxQTUFYRVlDaWZSeFBiL0dORURNN0svSU1FRm50VVhybGFKdw==";
        assert_eq!(
            decode_obfuscated(encoded),
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY"
        );
    }
}
