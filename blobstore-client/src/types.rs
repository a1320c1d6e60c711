/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use core::fmt;
use std::str::FromStr;

/// The checksum algorithms supported by this client.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    /// 32-bit cyclic redundancy check (IEEE polynomial)
    Crc32,
    /// 32-bit cyclic redundancy check (Castagnoli polynomial)
    Crc32C,
    /// 160-bit SHA-1 digest
    Sha1,
    /// 256-bit SHA-2 digest
    Sha256,
}

impl ChecksumAlgorithm {
    /// All supported algorithms in validation precedence order.
    ///
    /// When a response carries several checksums and the algorithm used at
    /// upload time is unknown, validation picks the first populated field in
    /// this order. The order is part of the public contract so that
    /// validation results are reproducible.
    pub const PRECEDENCE: [ChecksumAlgorithm; 4] = [
        ChecksumAlgorithm::Crc32,
        ChecksumAlgorithm::Crc32C,
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha256,
    ];

    /// Returns the name of the algorithm as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Crc32 => "CRC32",
            ChecksumAlgorithm::Crc32C => "CRC32C",
            ChecksumAlgorithm::Sha1 => "SHA1",
            ChecksumAlgorithm::Sha256 => "SHA256",
        }
    }
}

impl AsRef<str> for ChecksumAlgorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algorithm = match s {
            "CRC32" => ChecksumAlgorithm::Crc32,
            "CRC32C" => ChecksumAlgorithm::Crc32C,
            "SHA1" => ChecksumAlgorithm::Sha1,
            "SHA256" => ChecksumAlgorithm::Sha256,
            _ => {
                return Err(crate::error::invalid_input(format!(
                    "unknown checksum algorithm '{}'",
                    s
                )))
            }
        };

        Ok(algorithm)
    }
}

/// When the client computes checksums for outgoing requests.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestChecksumCalculation {
    /// Compute a checksum for every upload-type request (default).
    #[default]
    Always,

    /// Compute a checksum only when the operation requires one.
    WhenRequired,
}

/// When the client validates checksums on responses.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseChecksumValidation {
    /// Validate every downloaded body against the checksums the backend
    /// reports (default).
    #[default]
    Always,

    /// Validate only when a mandatory-checksum condition applies.
    WhenRequired,
}

/// The multipart threshold for an upload request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PartSize {
    /// Automatically configure an optimal threshold based on the execution
    /// environment.
    #[default]
    Auto,

    /// Threshold explicitly given.
    Target(u64),
}

/// A digest computed over one byte stream with one algorithm.
///
/// The value is the standard base64 encoding of the digest: the big-endian
/// 4-byte value for CRC algorithms, the raw digest bytes for SHA algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedChecksum {
    algorithm: ChecksumAlgorithm,
    value: String,
}

impl ComputedChecksum {
    pub(crate) fn new(algorithm: ChecksumAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            value: value.into(),
        }
    }

    /// The algorithm the digest was computed with
    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// The base64 encoded digest value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The set of checksums stored alongside an object.
///
/// A field is populated only when that algorithm was actually used at storage
/// time; an object uploaded without checksums has every field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectChecksums {
    pub(crate) crc32: Option<String>,
    pub(crate) crc32c: Option<String>,
    pub(crate) sha1: Option<String>,
    pub(crate) sha256: Option<String>,
}

impl ObjectChecksums {
    /// The base64 encoded CRC32 checksum, if one was stored
    pub fn crc32(&self) -> Option<&str> {
        self.crc32.as_deref()
    }

    /// The base64 encoded CRC32C checksum, if one was stored
    pub fn crc32_c(&self) -> Option<&str> {
        self.crc32c.as_deref()
    }

    /// The base64 encoded SHA1 checksum, if one was stored
    pub fn sha1(&self) -> Option<&str> {
        self.sha1.as_deref()
    }

    /// The base64 encoded SHA256 checksum, if one was stored
    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }

    /// Get the stored digest for the given algorithm
    pub fn get(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        match algorithm {
            ChecksumAlgorithm::Crc32 => self.crc32.as_deref(),
            ChecksumAlgorithm::Crc32C => self.crc32c.as_deref(),
            ChecksumAlgorithm::Sha1 => self.sha1.as_deref(),
            ChecksumAlgorithm::Sha256 => self.sha256.as_deref(),
        }
    }

    /// Record a digest for its algorithm, replacing any previous value
    pub fn insert(&mut self, checksum: ComputedChecksum) {
        let slot = match checksum.algorithm() {
            ChecksumAlgorithm::Crc32 => &mut self.crc32,
            ChecksumAlgorithm::Crc32C => &mut self.crc32c,
            ChecksumAlgorithm::Sha1 => &mut self.sha1,
            ChecksumAlgorithm::Sha256 => &mut self.sha256,
        };
        *slot = Some(checksum.value);
    }

    /// True if no checksum field is populated
    pub fn is_empty(&self) -> bool {
        self.crc32.is_none() && self.crc32c.is_none() && self.sha1.is_none() && self.sha256.is_none()
    }

    /// The first populated checksum in validation precedence order
    pub(crate) fn preferred(&self) -> Option<ComputedChecksum> {
        ChecksumAlgorithm::PRECEDENCE.iter().find_map(|algorithm| {
            self.get(*algorithm)
                .map(|value| ComputedChecksum::new(*algorithm, value))
        })
    }
}

/// A key/value pair applied to an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Create a new tag from a key and a value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The tag key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The tag value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The collection of tags to apply to an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tagging {
    tag_set: Vec<Tag>,
}

impl Tagging {
    /// Create a new `Tagging` builder
    pub fn builder() -> TaggingBuilder {
        TaggingBuilder::default()
    }

    /// The tags in this set
    pub fn tag_set(&self) -> &[Tag] {
        &self.tag_set
    }

    /// Serialize the tag set into the payload sent to the backend.
    ///
    /// Tags are encoded in the `key=value&key=value` query form, keys and
    /// values verbatim. The payload is never parsed back; it exists so that
    /// mandatory-checksum operations have a deterministic byte body to digest.
    pub(crate) fn to_payload(&self) -> bytes::Bytes {
        let encoded = self
            .tag_set
            .iter()
            .map(|tag| format!("{}={}", tag.key(), tag.value()))
            .collect::<Vec<_>>()
            .join("&");
        bytes::Bytes::from(encoded)
    }
}

/// Fluent builder for [`Tagging`]
#[derive(Debug, Clone, Default)]
pub struct TaggingBuilder {
    tag_set: Vec<Tag>,
}

impl TaggingBuilder {
    /// Appends a tag to the set.
    ///
    /// To override the contents of this collection use
    /// [`set_tag_set`](Self::set_tag_set).
    pub fn tag_set(mut self, input: Tag) -> Self {
        self.tag_set.push(input);
        self
    }

    /// Replace the entire tag set
    pub fn set_tag_set(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tag_set = input.unwrap_or_default();
        self
    }

    /// Consume the builder and construct a [`Tagging`]
    pub fn build(self) -> Tagging {
        Tagging {
            tag_set: self.tag_set,
        }
    }
}
