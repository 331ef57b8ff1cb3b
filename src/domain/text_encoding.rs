//! Character encoding used for source files and request bodies.

use std::borrow::Cow;
use std::fmt;
use std::io;

use encoding_rs::Encoding;
use serde::{Deserialize, Deserializer};

use crate::domain::AppError;

/// A named character encoding, resolved from a WHATWG label such as `UTF-8`
/// or `windows-1252`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
}

impl TextEncoding {
    pub fn utf8() -> Self {
        Self { encoding: encoding_rs::UTF_8 }
    }

    /// Resolve a label. Encodings that cannot produce their own byte form
    /// (UTF-16 and the replacement encoding) are rejected because request
    /// bodies are percent-encoded from encoder output.
    pub fn for_label(label: &str) -> Result<Self, AppError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| AppError::UnknownEncoding(label.to_string()))?;
        if encoding.output_encoding() != encoding {
            return Err(AppError::InvalidConfig(format!(
                "encoding '{}' cannot be used to encode form data",
                encoding.name()
            )));
        }
        Ok(Self { encoding })
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode a whole buffer, failing on any malformed sequence.
    pub fn decode(&self, bytes: &[u8]) -> io::Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("content is not valid {}", self.encoding.name()),
                )
            })
    }

    /// Encode text, failing when any character is unmappable.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, String> {
        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if had_unmappable {
            return Err(format!("text contains characters not representable in {}", self.name()));
        }
        Ok(bytes)
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl<'de> Deserialize<'de> for TextEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::for_label(&label).map_err(serde::de::Error::custom)
    }
}
