//! Shared fixtures for the integration matrices.
//!
//! Archives are built in memory with the same `zip` crate the reader uses,
//! so the fixtures exercise real central directories rather than canned
//! byte dumps.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use pybricks_firmware::{FIRMWARE_BASE_BIN, FIRMWARE_METADATA_JSON, MAIN_PY, README_OSS_TXT};

/// Canonical `1.0.0` document, shaped like a Move hub v1.x release.
pub const METADATA_V100: &str = r#"{
    "metadata-version": "1.0.0",
    "firmware-version": "v1.4.0",
    "device-id": 64,
    "checksum-type": "xor",
    "mpy-abi-version": 5,
    "mpy-cross-options": ["-mno-unicode"],
    "user-mpy-offset": 171616,
    "max-firmware-size": 225280
}"#;

/// Canonical `1.1.0` document, shaped like a Prime hub v3.1 release.
pub const METADATA_V110: &str = r#"{
    "metadata-version": "1.1.0",
    "firmware-version": "3.1.0",
    "device-id": 129,
    "checksum-type": "crc32",
    "mpy-abi-version": 6,
    "mpy-cross-options": [],
    "user-mpy-offset": 246372,
    "max-firmware-size": 524288,
    "firmware-sha256": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    "hub-name-offset": 334,
    "max-hub-name-size": 16
}"#;

/// Canonical `2.0.0` document, shaped like a Technic hub v3.2 release.
pub const METADATA_V200: &str = r#"{
    "metadata-version": "2.0.0",
    "firmware-version": "3.2.0",
    "device-id": 128,
    "checksum-type": "sum",
    "checksum-size": 262144,
    "hub-name-offset": 21,
    "hub-name-size": 16
}"#;

/// Word-aligned stand-in for a firmware image.
pub const FIRMWARE_BASE: &[u8] = &[0x7b, 0x21, 0x09, 0x08, 0xde, 0xad, 0xbe, 0xef];

pub const MAIN_PY_TEXT: &str = "print(\"Hello, Pybricks!\")\n";

pub const README_TEXT: &str = "This firmware contains open source software.\n";

/// Builds an in-memory ZIP holding `members` in order.
pub fn build_zip(members: &[(&str, &[u8])]) -> Vec<u8> {
    write_zip(members, SimpleFileOptions::default())
}

/// Like [`build_zip`] but stored uncompressed, so tests can locate and
/// corrupt member bytes inside the archive.
pub fn build_zip_stored(members: &[(&str, &[u8])]) -> Vec<u8> {
    write_zip(
        members,
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
    )
}

fn write_zip(members: &[(&str, &[u8])], options: SimpleFileOptions) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in members {
        writer
            .start_file(*name, options.clone())
            .expect("start zip member");
        writer.write_all(data).expect("write zip member");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Builds a complete firmware archive around `metadata_json`, with all
/// four members present.
pub fn build_firmware_zip(metadata_json: &str) -> Vec<u8> {
    build_zip(&[
        (FIRMWARE_BASE_BIN, FIRMWARE_BASE),
        (FIRMWARE_METADATA_JSON, metadata_json.as_bytes()),
        (MAIN_PY, MAIN_PY_TEXT.as_bytes()),
        (README_OSS_TXT, README_TEXT.as_bytes()),
    ])
}

/// Re-serializes `doc` with `field` removed.
pub fn with_field_removed(doc: &str, field: &str) -> String {
    let mut value: serde_json::Value = serde_json::from_str(doc).expect("canonical document");
    value
        .as_object_mut()
        .expect("object document")
        .remove(field)
        .unwrap_or_else(|| panic!("field {field:?} not in document"));
    value.to_string()
}

/// Re-serializes `doc` with `field` replaced by `value`.
pub fn with_field_set(doc: &str, field: &str, value: serde_json::Value) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(doc).expect("canonical document");
    doc.as_object_mut()
        .expect("object document")
        .insert(field.to_string(), value);
    doc.to_string()
}
