//! Helper functions for BSON value conversion

use bson::{Binary, DateTime, spec::BinarySubtype};

/// Convert DateTime to an RFC 3339 string
///
/// Dates outside the representable range fall back to epoch milliseconds.
pub fn datetime_to_iso_string(dt: &DateTime) -> String {
    dt.try_to_rfc3339_string()
        .unwrap_or_else(|_| format!("{}", dt.timestamp_millis()))
}

/// Convert Binary data to Base64 string
pub fn binary_to_base64(bin: &Binary) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(&bin.bytes)
}

/// Format UUID binary data in canonical 8-4-4-4-12 form.
///
/// Returns `None` when the value is not a 16-byte UUID subtype.
pub fn binary_to_uuid_string(bin: &Binary) -> Option<String> {
    if !matches!(bin.subtype, BinarySubtype::Uuid | BinarySubtype::UuidOld) || bin.bytes.len() != 16
    {
        return None;
    }

    let hex = hex::encode(&bin.bytes);
    Some(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_to_iso_string() {
        let dt = DateTime::from_millis(1701862788373);
        let iso = datetime_to_iso_string(&dt);
        assert!(iso.starts_with("2023-12-06T"));
    }

    #[test]
    fn test_binary_to_base64() {
        let bin = Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![0x01, 0x02, 0x03],
        };
        assert_eq!(binary_to_base64(&bin), "AQID");
    }

    #[test]
    fn test_binary_to_uuid_string() {
        let bin = Binary {
            subtype: BinarySubtype::Uuid,
            bytes: vec![
                0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x12, 0x34, 0x56, 0x78, 0x9a,
                0xbc, 0xde, 0xf0,
            ],
        };
        assert_eq!(
            binary_to_uuid_string(&bin).as_deref(),
            Some("12345678-9abc-def0-1234-56789abcdef0")
        );
    }

    #[test]
    fn test_generic_binary_is_not_uuid() {
        let bin = Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![0u8; 16],
        };
        assert!(binary_to_uuid_string(&bin).is_none());
    }
}
