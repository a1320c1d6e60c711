/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data models for storage operations.

use std::time::SystemTime;

use crate::storage::StorageBody;
use crate::types::{ObjectChecksums, Tagging};

/// Request to store a single object.
#[derive(Debug)]
#[non_exhaustive]
pub struct PutObjectRequest {
    /// Bucket to store the object in.
    pub bucket: String,
    /// Key to store the object under.
    pub key: String,
    /// The object content.
    pub body: StorageBody,
}

impl PutObjectRequest {
    /// Create a new `PutObjectRequest`.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, body: StorageBody) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body,
        }
    }
}

/// Acknowledgment for a stored object.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PutObjectResponse {
    /// Entity tag of the stored object.
    pub e_tag: Option<String>,
    /// Checksums stored with the object, one field per algorithm that was
    /// actually carried on the request.
    pub checksums: ObjectChecksums,
}

/// Request to retrieve a single object.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GetObjectRequest {
    /// Bucket containing the object.
    pub bucket: String,
    /// Key of the object.
    pub key: String,
}

impl GetObjectRequest {
    /// Create a new `GetObjectRequest`.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// A retrieved object: its metadata and a body to stream the content from.
#[derive(Debug)]
#[non_exhaustive]
pub struct GetObjectResponse {
    /// Metadata stored with the object.
    pub metadata: ObjectMetadata,
    /// The object content.
    pub body: StorageBody,
}

impl GetObjectResponse {
    /// Create a new `GetObjectResponse`.
    pub fn new(metadata: ObjectMetadata, body: StorageBody) -> Self {
        Self { metadata, body }
    }
}

/// Object metadata other than the body, returned on both upload
/// acknowledgment and later retrieval.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ObjectMetadata {
    /// Size of the object in bytes.
    pub content_length: u64,
    /// Entity tag of the object.
    pub e_tag: Option<String>,
    /// Last modified time of the object.
    pub last_modified: Option<SystemTime>,
    /// Checksums stored with the object, populated only for algorithms
    /// actually used at storage time.
    pub checksums: ObjectChecksums,
}

/// Request to replace the tag set of an object.
#[derive(Debug)]
#[non_exhaustive]
pub struct PutObjectTaggingRequest {
    /// Bucket containing the object.
    pub bucket: String,
    /// Key of the object.
    pub key: String,
    /// The replacement tag set.
    pub tagging: Tagging,
    /// The serialized tag payload. This operation always carries a checksum;
    /// backends verify the body's trailer checksum over these bytes and
    /// reject the request when it is absent.
    pub body: StorageBody,
}

impl PutObjectTaggingRequest {
    /// Create a new `PutObjectTaggingRequest`.
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        tagging: Tagging,
        body: StorageBody,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            tagging,
            body,
        }
    }
}

/// Acknowledgment for a replaced tag set.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PutObjectTaggingResponse {
    /// The checksum verified over the tag payload.
    pub checksums: ObjectChecksums,
}
