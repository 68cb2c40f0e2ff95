//! Versioned firmware metadata schema.
//!
//! Upstream reference: the `firmware.metadata.json` documents generated by
//! `pybricks-micropython/tools/metadata.py` and consumed by the
//! `@pybricks/firmware` package.
//!
//! Three schema generations exist. Each document names its own with the
//! `metadata-version` field, and [`FirmwareMetadata`] preserves that
//! generation as an enum variant so no information is flattened away. The
//! uniform accessors on the enum answer the questions flashing tools ask
//! without matching on the generation themselves.

mod decode;
mod error;
mod types;

pub use error::MetadataError;
pub use types::{
    ChecksumType, FirmwareMetadata, FirmwareMetadataV100, FirmwareMetadataV110,
    FirmwareMetadataV200, HubNameSlot, HubType, MetadataVersion,
};
