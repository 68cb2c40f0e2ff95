use thiserror::Error;
use zip::result::ZipError;

use super::members::FirmwareMember;
use crate::metadata::MetadataError;

/// Errors raised while loading a firmware archive or reading its members.
#[derive(Debug, Error)]
pub enum FirmwareReaderError {
    /// The blob is not a readable ZIP archive, or extracting a listed
    /// member failed partway.
    #[error("invalid firmware archive: {0}")]
    Zip(#[from] ZipError),

    /// A required member is absent. Exactly one member is named: the first
    /// missing one in validation order.
    #[error("firmware archive is missing {:?}", .0.file_name())]
    MissingMember(FirmwareMember),

    /// The metadata member was extracted but its document did not parse.
    #[error("firmware archive metadata is invalid: {0}")]
    Metadata(#[from] MetadataError),
}
