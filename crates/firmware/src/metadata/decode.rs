use std::str::FromStr;

use super::error::MetadataError;
use super::types::FirmwareMetadata;

impl FirmwareMetadata {
    /// Parses a metadata document from its JSON text.
    ///
    /// The `metadata-version` discriminant is read first and selects the
    /// field set that must be present; a missing or mistyped field of that
    /// generation fails the parse. Fields beyond the generation's set are
    /// ignored, so documents from newer builds that only add fields still
    /// load.
    pub fn parse(text: &str) -> Result<Self, MetadataError> {
        let metadata: FirmwareMetadata = serde_json::from_str(text)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Serializes the document back to JSON, fields in declaration order.
    pub fn to_json(&self) -> String {
        // Serialization of these field types cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    // Constraints that hold for every published archive but that the field
    // types alone cannot express.
    fn validate(&self) -> Result<(), MetadataError> {
        match self {
            FirmwareMetadata::V100(_) => Ok(()),
            FirmwareMetadata::V110(m) if m.max_hub_name_size == 0 => {
                Err(MetadataError::ZeroNameSlot("max-hub-name-size"))
            }
            FirmwareMetadata::V110(_) => Ok(()),
            FirmwareMetadata::V200(m) if m.hub_name_size == 0 => {
                Err(MetadataError::ZeroNameSlot("hub-name-size"))
            }
            FirmwareMetadata::V200(_) => Ok(()),
        }
    }
}

impl FromStr for FirmwareMetadata {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FirmwareMetadata::parse(s)
    }
}
