use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MetadataError;

// ── Hub types ────────────────────────────────────────────────────────────────

/// The closed set of hubs that firmware archives target.
///
/// The discriminant values are the wire values of the `device-id` metadata
/// field, which are also the LEGO hub kind codes advertised over BLE. The
/// set is append-only and codes are never reused, so the enum is
/// exhaustive for every archive published to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HubType {
    /// BOOST Move hub.
    MoveHub = 0x40,
    /// City hub.
    CityHub = 0x41,
    /// Technic hub.
    TechnicHub = 0x80,
    /// SPIKE Prime hub, also sold as the MINDSTORMS Robot Inventor hub.
    PrimeHub = 0x81,
    /// SPIKE Essential hub.
    EssentialHub = 0x83,
}

impl HubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubType::MoveHub => "movehub",
            HubType::CityHub => "cityhub",
            HubType::TechnicHub => "technichub",
            HubType::PrimeHub => "primehub",
            HubType::EssentialHub => "essentialhub",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, MetadataError> {
        match s {
            "movehub" => Ok(HubType::MoveHub),
            "cityhub" => Ok(HubType::CityHub),
            "technichub" => Ok(HubType::TechnicHub),
            "primehub" => Ok(HubType::PrimeHub),
            "essentialhub" => Ok(HubType::EssentialHub),
            _ => Err(MetadataError::UnknownHubType(s.to_string())),
        }
    }

    /// File name under which release tooling distributes this hub's
    /// archive, `movehub.zip` and so on.
    pub fn zip_file_name(&self) -> &'static str {
        match self {
            HubType::MoveHub => "movehub.zip",
            HubType::CityHub => "cityhub.zip",
            HubType::TechnicHub => "technichub.zip",
            HubType::PrimeHub => "primehub.zip",
            HubType::EssentialHub => "essentialhub.zip",
        }
    }
}

impl TryFrom<u8> for HubType {
    type Error = MetadataError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0x40 => Ok(HubType::MoveHub),
            0x41 => Ok(HubType::CityHub),
            0x80 => Ok(HubType::TechnicHub),
            0x81 => Ok(HubType::PrimeHub),
            0x83 => Ok(HubType::EssentialHub),
            _ => Err(MetadataError::UnknownDeviceId(id)),
        }
    }
}

impl From<HubType> for u8 {
    fn from(hub: HubType) -> Self {
        hub as u8
    }
}

impl FromStr for HubType {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HubType::parse_str(s)
    }
}

impl fmt::Display for HubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Checksum types ───────────────────────────────────────────────────────────

/// Firmware checksum scheme named by the `checksum-type` metadata field.
///
/// Every value that ever appeared in a published archive is a distinct
/// variant; parsing and serializing are lossless so a re-encoded document
/// carries the same scheme it arrived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumType {
    /// Byte-wise XOR, acknowledged chunk by chunk by the BLE bootloaders.
    #[serde(rename = "xor")]
    Xor,
    /// 32-bit word-sum complement over the padded flash span.
    #[serde(rename = "sum")]
    Sum,
    /// CRC-32 as computed by the STM32 CRC peripheral.
    #[serde(rename = "crc32")]
    Crc32,
}

impl ChecksumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumType::Xor => "xor",
            ChecksumType::Sum => "sum",
            ChecksumType::Crc32 => "crc32",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, MetadataError> {
        match s {
            "xor" => Ok(ChecksumType::Xor),
            "sum" => Ok(ChecksumType::Sum),
            "crc32" => Ok(ChecksumType::Crc32),
            _ => Err(MetadataError::UnknownChecksumType(s.to_string())),
        }
    }
}

impl FromStr for ChecksumType {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChecksumType::parse_str(s)
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Schema generations ───────────────────────────────────────────────────────

/// The closed set of metadata schema generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataVersion {
    /// `"1.0.0"`, the original schema.
    V100,
    /// `"1.1.0"`, which added the firmware hash and the hub-name slot.
    V110,
    /// `"2.0.0"`, which dropped the user-program fields.
    V200,
}

impl MetadataVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataVersion::V100 => "1.0.0",
            MetadataVersion::V110 => "1.1.0",
            MetadataVersion::V200 => "2.0.0",
        }
    }
}

impl fmt::Display for MetadataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of the hub display-name slot inside the firmware image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubNameSlot {
    /// Byte offset of the slot from the start of the image.
    pub offset: u32,
    /// Slot size in bytes, including the trailing zero terminator.
    /// Always at least 1.
    pub size: u32,
}

// ── Metadata documents ───────────────────────────────────────────────────────

/// Fields of a `"metadata-version": "1.0.0"` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FirmwareMetadataV100 {
    pub firmware_version: String,
    pub device_id: HubType,
    pub checksum_type: ChecksumType,
    /// `MPY_VERSION` of the MicroPython the firmware embeds.
    pub mpy_abi_version: u32,
    /// Options the user program must be cross-compiled with.
    pub mpy_cross_options: Vec<String>,
    /// Offset where flashing tools append the compiled user program.
    pub user_mpy_offset: u32,
    /// Flash span available to firmware plus checksum, in bytes.
    pub max_firmware_size: u32,
}

/// Fields of a `"metadata-version": "1.1.0"` document.
///
/// A superset of the 1.0.0 fields. The additions record the hash of the
/// base firmware and the slot where flashing tools embed the hub name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FirmwareMetadataV110 {
    pub firmware_version: String,
    pub device_id: HubType,
    pub checksum_type: ChecksumType,
    pub mpy_abi_version: u32,
    pub mpy_cross_options: Vec<String>,
    pub user_mpy_offset: u32,
    pub max_firmware_size: u32,
    /// Hex SHA-256 of `firmware-base.bin`, as the build produced it.
    pub firmware_sha256: String,
    pub hub_name_offset: u32,
    pub max_hub_name_size: u32,
}

/// Fields of a `"metadata-version": "2.0.0"` document.
///
/// This generation moved user programs out of the firmware image, so the
/// `mpy-*` and `user-mpy-offset` fields are gone and the flash span field
/// is named for what it bounds, the checksummed region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FirmwareMetadataV200 {
    pub firmware_version: String,
    pub device_id: HubType,
    pub checksum_type: ChecksumType,
    /// Flash span covered by the checksum, in bytes.
    pub checksum_size: u32,
    pub hub_name_offset: u32,
    pub hub_name_size: u32,
}

/// A parsed firmware metadata document.
///
/// The JSON `metadata-version` field is the discriminant: decoding reads it
/// first and then requires the exact field set of that generation. An
/// unknown discriminant is a parse error, never an "unrecognized but
/// loaded" document, so whatever this type holds is fully understood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metadata-version")]
pub enum FirmwareMetadata {
    #[serde(rename = "1.0.0")]
    V100(FirmwareMetadataV100),
    #[serde(rename = "1.1.0")]
    V110(FirmwareMetadataV110),
    #[serde(rename = "2.0.0")]
    V200(FirmwareMetadataV200),
}

impl FirmwareMetadata {
    /// Schema generation of this document.
    pub fn version(&self) -> MetadataVersion {
        match self {
            FirmwareMetadata::V100(_) => MetadataVersion::V100,
            FirmwareMetadata::V110(_) => MetadataVersion::V110,
            FirmwareMetadata::V200(_) => MetadataVersion::V200,
        }
    }

    /// Human-readable firmware version, e.g. `"3.2.0"`.
    pub fn firmware_version(&self) -> &str {
        match self {
            FirmwareMetadata::V100(m) => &m.firmware_version,
            FirmwareMetadata::V110(m) => &m.firmware_version,
            FirmwareMetadata::V200(m) => &m.firmware_version,
        }
    }

    /// Hub this firmware targets.
    pub fn device_id(&self) -> HubType {
        match self {
            FirmwareMetadata::V100(m) => m.device_id,
            FirmwareMetadata::V110(m) => m.device_id,
            FirmwareMetadata::V200(m) => m.device_id,
        }
    }

    /// Checksum scheme the hub's bootloader verifies with.
    pub fn checksum_type(&self) -> ChecksumType {
        match self {
            FirmwareMetadata::V100(m) => m.checksum_type,
            FirmwareMetadata::V110(m) => m.checksum_type,
            FirmwareMetadata::V200(m) => m.checksum_type,
        }
    }

    /// Flash span the checksum is computed over, in bytes.
    ///
    /// The 1.x generations call this `max-firmware-size`; 2.0.0 renamed it
    /// to `checksum-size` without changing its meaning.
    pub fn checksum_size(&self) -> u32 {
        match self {
            FirmwareMetadata::V100(m) => m.max_firmware_size,
            FirmwareMetadata::V110(m) => m.max_firmware_size,
            FirmwareMetadata::V200(m) => m.checksum_size,
        }
    }

    /// Hub-name slot, or `None` for the 1.0.0 generation, which predates
    /// name embedding.
    pub fn hub_name_slot(&self) -> Option<HubNameSlot> {
        match self {
            FirmwareMetadata::V100(_) => None,
            FirmwareMetadata::V110(m) => Some(HubNameSlot {
                offset: m.hub_name_offset,
                size: m.max_hub_name_size,
            }),
            FirmwareMetadata::V200(m) => Some(HubNameSlot {
                offset: m.hub_name_offset,
                size: m.hub_name_size,
            }),
        }
    }

    /// Whether flashing tools can embed a custom hub name.
    pub fn supports_hub_name(&self) -> bool {
        self.hub_name_slot().is_some()
    }
}
