//! Encryption key metadata.

use std::fmt;

use crate::error::Error;

/// Encryption method of an `#EXT-X-KEY` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyMethod {
    /// Segments are not encrypted.
    None,
    /// AES-128 with CBC and PKCS7 padding.
    Aes128,
    /// AES-128 applied to individual media samples.
    SampleAes,
}

impl fmt::Display for KeyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMethod::None => write!(f, "NONE"),
            KeyMethod::Aes128 => write!(f, "AES-128"),
            KeyMethod::SampleAes => write!(f, "SAMPLE-AES"),
        }
    }
}

impl std::str::FromStr for KeyMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(KeyMethod::None),
            "aes-128" => Ok(KeyMethod::Aes128),
            "sample-aes" => Ok(KeyMethod::SampleAes),
            _ => Err(Error::unsupported(format!("key method {}", s))),
        }
    }
}

/// Key metadata carried on a segment and rendered as the value of
/// `#EXT-X-KEY`.
///
/// The decoder never produces one of these; key tags fail decoding. The
/// type exists so playlist producers can emit key lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    /// Encryption method.
    pub method: KeyMethod,
    /// Where to obtain the key. Required unless the method is `NONE`.
    pub uri: Option<String>,
    /// Initialization vector as a hexadecimal literal.
    pub iv: Option<String>,
    /// How the key is represented in the key resource.
    pub key_format: Option<String>,
    /// Key format versions the key applies to.
    pub key_format_versions: Option<String>,
}

impl Key {
    /// Create key metadata for the given method with no other attributes.
    pub fn new(method: KeyMethod) -> Self {
        Self {
            method,
            uri: None,
            iv: None,
            key_format: None,
            key_format_versions: None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "METHOD={}", self.method)?;
        if let Some(ref uri) = self.uri {
            write!(f, ",URI=\"{}\"", uri)?;
        }
        if let Some(ref iv) = self.iv {
            write!(f, ",IV={}", iv)?;
        }
        if let Some(ref key_format) = self.key_format {
            write!(f, ",KEYFORMAT=\"{}\"", key_format)?;
        }
        if let Some(ref versions) = self.key_format_versions {
            write!(f, ",KEYFORMATVERSIONS=\"{}\"", versions)?;
        }
        Ok(())
    }
}
