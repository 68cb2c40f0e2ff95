/// Firmware image member, `firmware-base.bin`.
pub const FIRMWARE_BASE_BIN: &str = "firmware-base.bin";

/// Metadata document member, `firmware.metadata.json`.
pub const FIRMWARE_METADATA_JSON: &str = "firmware.metadata.json";

/// Default user program member, `main.py`. Optional.
pub const MAIN_PY: &str = "main.py";

/// Open-source license and attribution member, `ReadMe_OSS.txt`.
pub const README_OSS_TXT: &str = "ReadMe_OSS.txt";

/// A well-known member of a firmware archive.
///
/// Member names are a byte-for-byte contract with the firmware build that
/// produces the archives; lookups are exact, with no case folding or path
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirmwareMember {
    FirmwareBaseBin,
    MetadataJson,
    MainPy,
    ReadMeOssTxt,
}

impl FirmwareMember {
    /// Members every archive must contain, in the order they are checked.
    /// Validation reports the first missing one and stops.
    pub const REQUIRED: [FirmwareMember; 3] = [
        FirmwareMember::FirmwareBaseBin,
        FirmwareMember::MetadataJson,
        FirmwareMember::ReadMeOssTxt,
    ];

    /// Exact file name of this member inside the archive.
    pub fn file_name(&self) -> &'static str {
        match self {
            FirmwareMember::FirmwareBaseBin => FIRMWARE_BASE_BIN,
            FirmwareMember::MetadataJson => FIRMWARE_METADATA_JSON,
            FirmwareMember::MainPy => MAIN_PY,
            FirmwareMember::ReadMeOssTxt => README_OSS_TXT,
        }
    }
}
