use thiserror::Error;

/// Errors raised while parsing a firmware metadata document.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The document is not valid JSON, the `metadata-version` discriminant
    /// is unknown, or a field required by that generation is missing or has
    /// the wrong type.
    #[error("invalid metadata document: {0}")]
    Json(#[from] serde_json::Error),

    /// A `device-id` value outside the closed set of hub codes.
    #[error("unknown device id: 0x{0:02x}")]
    UnknownDeviceId(u8),

    /// A hub name that is not one of the known hub type names.
    #[error("unknown hub type: {0:?}")]
    UnknownHubType(String),

    /// A checksum name that is not one of the known checksum types.
    #[error("unknown checksum type: {0:?}")]
    UnknownChecksumType(String),

    /// A hub-name slot declared with zero bytes. The slot always holds at
    /// least the zero terminator.
    #[error("{0} must be at least 1")]
    ZeroNameSlot(&'static str),
}
