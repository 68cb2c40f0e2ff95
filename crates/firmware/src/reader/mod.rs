//! Firmware archive loading and member access.
//!
//! Upstream reference: `FirmwareReader` in the `@pybricks/firmware`
//! package.
//!
//! A firmware release ships as a ZIP archive with well-known members:
//! the raw firmware image, a JSON metadata document describing it, the
//! open-source license text, and optionally a default user program.
//! [`FirmwareReader::load`] validates the structure up front so that a
//! reader, once constructed, can hand out any required member.

mod error;
mod members;

pub use error::FirmwareReaderError;
pub use members::{
    FirmwareMember, FIRMWARE_BASE_BIN, FIRMWARE_METADATA_JSON, MAIN_PY, README_OSS_TXT,
};

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::metadata::FirmwareMetadata;

/// A validated firmware release archive.
///
/// Borrows the archive bytes; extraction happens per read, so reads are
/// repeatable and independent. Cloning is cheap (the parsed directory is
/// shared) and yields a reader with its own cursor.
#[derive(Debug, Clone)]
pub struct FirmwareReader<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> FirmwareReader<'a> {
    /// Opens `data` as a firmware archive and validates its structure.
    ///
    /// Required members are checked in the order of
    /// [`FirmwareMember::REQUIRED`]; the first missing one fails the load
    /// and later members are not checked. `main.py` is optional and never
    /// reported missing. Member contents are not inspected here, so a
    /// present-but-unparsable metadata document fails at
    /// [`read_metadata`](FirmwareReader::read_metadata), not here.
    pub fn load(data: &'a [u8]) -> Result<Self, FirmwareReaderError> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        let reader = FirmwareReader { archive };
        for member in FirmwareMember::REQUIRED {
            if !reader.contains(member) {
                return Err(FirmwareReaderError::MissingMember(member));
            }
        }
        Ok(reader)
    }

    /// Whether the archive contains `member`.
    pub fn contains(&self, member: FirmwareMember) -> bool {
        self.archive.index_for_name(member.file_name()).is_some()
    }

    /// Reads the raw firmware image, `firmware-base.bin`.
    pub fn read_firmware_base(&mut self) -> Result<Vec<u8>, FirmwareReaderError> {
        self.read_bytes(FirmwareMember::FirmwareBaseBin)
    }

    /// Reads the metadata document text, `firmware.metadata.json`.
    ///
    /// Kept separate from [`read_metadata`](FirmwareReader::read_metadata)
    /// so callers can log or display the raw document when a parse fails.
    pub fn read_metadata_json(&mut self) -> Result<String, FirmwareReaderError> {
        self.read_text(FirmwareMember::MetadataJson)
    }

    /// Reads and parses the metadata document.
    pub fn read_metadata(&mut self) -> Result<FirmwareMetadata, FirmwareReaderError> {
        let text = self.read_metadata_json()?;
        Ok(FirmwareMetadata::parse(&text)?)
    }

    /// Reads the default user program, `main.py`, or `None` when the
    /// archive ships without one.
    pub fn read_main_py(&mut self) -> Result<Option<String>, FirmwareReaderError> {
        if !self.contains(FirmwareMember::MainPy) {
            return Ok(None);
        }
        self.read_text(FirmwareMember::MainPy).map(Some)
    }

    /// Reads the license and attribution text, `ReadMe_OSS.txt`.
    pub fn read_readme_oss(&mut self) -> Result<String, FirmwareReaderError> {
        self.read_text(FirmwareMember::ReadMeOssTxt)
    }

    fn read_bytes(&mut self, member: FirmwareMember) -> Result<Vec<u8>, FirmwareReaderError> {
        let mut file = self.archive.by_name(member.file_name())?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data).map_err(ZipError::from)?;
        Ok(data)
    }

    fn read_text(&mut self, member: FirmwareMember) -> Result<String, FirmwareReaderError> {
        let mut file = self.archive.by_name(member.file_name())?;
        let mut text = String::new();
        file.read_to_string(&mut text).map_err(ZipError::from)?;
        Ok(text)
    }
}
