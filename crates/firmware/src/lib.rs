//! Pybricks firmware archives: loading, metadata, and hub-name encoding.
//!
//! Upstream reference: the `@pybricks/firmware` TypeScript package, with
//! the metadata and checksum conventions of `pybricks-micropython`.
//!
//! A firmware release is a ZIP archive holding the raw firmware image
//! (`firmware-base.bin`), a versioned JSON metadata document
//! (`firmware.metadata.json`), the open-source license text
//! (`ReadMe_OSS.txt`), and optionally a default user program (`main.py`).
//! [`FirmwareReader`] validates and reads archives, [`FirmwareMetadata`]
//! models the metadata generations, [`encode_hub_name`] produces the hub
//! display-name bytes flashing tools embed in the image, and the
//! [`checksum`] module computes the image checksums the bootloaders
//! verify.
//!
//! ```no_run
//! use pybricks_firmware::FirmwareReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("technichub.zip")?;
//! let mut reader = FirmwareReader::load(&data)?;
//! let metadata = reader.read_metadata()?;
//! println!("{} for {}", metadata.firmware_version(), metadata.device_id());
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod hub_name;
pub mod metadata;
pub mod reader;

pub use checksum::{crc32_stm32, sum_complement32, xor8, ChecksumError};
pub use hub_name::{encode_hub_name, HubNameError};
pub use metadata::{
    ChecksumType, FirmwareMetadata, FirmwareMetadataV100, FirmwareMetadataV110,
    FirmwareMetadataV200, HubNameSlot, HubType, MetadataError, MetadataVersion,
};
pub use reader::{
    FirmwareMember, FirmwareReader, FirmwareReaderError, FIRMWARE_BASE_BIN,
    FIRMWARE_METADATA_JSON, MAIN_PY, README_OSS_TXT,
};
