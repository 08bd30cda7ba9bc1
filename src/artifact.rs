//! Rendered image artifacts and their `data:` URI encoding.
//!
//! Artifacts are opaque to the report: a MIME type plus bytes. On the wire
//! each one travels as a self-describing `data:<mime>;base64,<payload>` URI.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Image encodings the report renderer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Vector schematic, XML-serialized.
    Svg,
    /// Raster chart snapshot.
    Png,
}

impl ImageFormat {
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/svg+xml" => Some(Self::Svg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Errors raised while decoding a `data:` URI.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("not a base64 data URI")]
    NotDataUri,

    #[error("unsupported image type `{0}`")]
    UnsupportedFormat(String),

    #[error("invalid base64 payload")]
    Decode(#[from] base64::DecodeError),
}

/// One captured image.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl Artifact {
    #[must_use]
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    /// Wraps serialized SVG markup.
    #[must_use]
    pub fn svg(markup: String) -> Self {
        Self::new(ImageFormat::Svg, markup.into_bytes())
    }

    /// Decodes a `data:<mime>;base64,<payload>` URI, as produced by a canvas
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if the URI is not base64-encoded, names an
    /// unsupported image type, or carries an invalid payload.
    pub fn from_data_uri(uri: &str) -> Result<Self, ArtifactError> {
        let rest = uri.strip_prefix("data:").ok_or(ArtifactError::NotDataUri)?;
        let (header, payload) = rest.split_once(',').ok_or(ArtifactError::NotDataUri)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(ArtifactError::NotDataUri)?;
        let format = ImageFormat::from_mime(mime)
            .ok_or_else(|| ArtifactError::UnsupportedFormat(mime.to_owned()))?;

        Ok(Self::new(format, STANDARD.decode(payload)?))
    }

    #[must_use]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encodes this artifact as a `data:` URI.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime(),
            STANDARD.encode(&self.bytes)
        )
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Serialize for Artifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_uri())
    }
}
