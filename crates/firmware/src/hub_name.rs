//! Hub display-name encoding.
//!
//! Firmware built since the 1.1.0 metadata generation reserves a fixed
//! slot for the hub's Bluetooth display name, located by the metadata's
//! hub-name fields. Flashing tools overwrite that slot with the encoded
//! name before sending the image.

use thiserror::Error;

use crate::metadata::{FirmwareMetadata, MetadataVersion};

/// Errors raised while encoding a hub name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HubNameError {
    /// The metadata generation predates name embedding, so the firmware
    /// has no slot to write into.
    #[error("hub name is not supported by metadata version {0}")]
    NotSupported(MetadataVersion),
}

/// Encodes `name` for the hub-name slot that `metadata` declares.
///
/// The returned buffer is exactly the slot size. It holds the UTF-8 bytes
/// of `name` followed by zero padding, and its final byte is always zero,
/// so the firmware reads a terminated C string no matter how long the name
/// was. A name that does not fit is cut at the last character boundary
/// within the slot; a multi-byte character is dropped whole rather than
/// split, so the stored prefix stays valid UTF-8.
///
/// # Example
///
/// ```
/// use pybricks_firmware::{encode_hub_name, FirmwareMetadata};
///
/// let metadata = FirmwareMetadata::parse(
///     r#"{
///         "metadata-version": "2.0.0",
///         "firmware-version": "3.2.0",
///         "device-id": 128,
///         "checksum-type": "sum",
///         "checksum-size": 262144,
///         "hub-name-offset": 21,
///         "hub-name-size": 16
///     }"#,
/// )
/// .unwrap();
///
/// let buffer = encode_hub_name("Herbie", &metadata).unwrap();
/// assert_eq!(buffer.len(), 16);
/// assert_eq!(&buffer[..7], b"Herbie\0");
/// ```
pub fn encode_hub_name(name: &str, metadata: &FirmwareMetadata) -> Result<Vec<u8>, HubNameError> {
    let slot = metadata
        .hub_name_slot()
        .ok_or(HubNameError::NotSupported(metadata.version()))?;

    let size = slot.size as usize;
    let mut buffer = vec![0u8; size];

    // The last byte is reserved for the terminator. Slot size is at least
    // 1, validated at metadata parse.
    let budget = size - 1;
    let mut end = name.len().min(budget);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    buffer[..end].copy_from_slice(&name.as_bytes()[..end]);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::FirmwareMetadata;

    fn metadata_with_slot_16() -> FirmwareMetadata {
        FirmwareMetadata::parse(
            r#"{
                "metadata-version": "2.0.0",
                "firmware-version": "3.2.0",
                "device-id": 128,
                "checksum-type": "sum",
                "checksum-size": 262144,
                "hub-name-offset": 21,
                "hub-name-size": 16
            }"#,
        )
        .unwrap()
    }

    fn metadata_v100() -> FirmwareMetadata {
        FirmwareMetadata::parse(
            r#"{
                "metadata-version": "1.0.0",
                "firmware-version": "v1.4.0",
                "device-id": 64,
                "checksum-type": "xor",
                "mpy-abi-version": 5,
                "mpy-cross-options": ["-mno-unicode"],
                "user-mpy-offset": 171616,
                "max-firmware-size": 225280
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn name_that_exactly_fits_fills_all_but_terminator() {
        let buffer = encode_hub_name("123456789012345", &metadata_with_slot_16()).unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(&buffer[..15], b"123456789012345");
        assert_eq!(buffer[15], 0);
    }

    #[test]
    fn name_one_byte_too_long_is_truncated() {
        let long = encode_hub_name("1234567890123456", &metadata_with_slot_16()).unwrap();
        let fits = encode_hub_name("123456789012345", &metadata_with_slot_16()).unwrap();
        assert_eq!(long, fits);
    }

    #[test]
    fn multibyte_char_is_dropped_whole() {
        // "😀" needs 4 bytes but only 2 remain before the terminator.
        let buffer = encode_hub_name("Pybricks Hub \u{1F600}", &metadata_with_slot_16()).unwrap();
        assert_eq!(&buffer[..13], b"Pybricks Hub ");
        assert_eq!(&buffer[13..], [0, 0, 0]);
    }

    #[test]
    fn empty_name_yields_all_zero_slot() {
        let buffer = encode_hub_name("", &metadata_with_slot_16()).unwrap();
        assert_eq!(buffer, vec![0u8; 16]);
    }

    #[test]
    fn short_name_is_zero_padded() {
        let buffer = encode_hub_name("Herbie", &metadata_with_slot_16()).unwrap();
        assert_eq!(&buffer[..6], b"Herbie");
        assert!(buffer[6..].iter().all(|b| *b == 0));
    }

    #[test]
    fn v100_metadata_has_no_slot() {
        assert_eq!(
            encode_hub_name("Herbie", &metadata_v100()),
            Err(HubNameError::NotSupported(MetadataVersion::V100))
        );
    }
}
