/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! Storage backend seam for the client.
//!
//! This module provides the `StorageBackend` trait the client drives all
//! transfers through. The client consumes "store these bytes, get back the
//! stored object's metadata" and "fetch these bytes with their metadata" as
//! black-box operations; anything that can satisfy the trait (an in-process
//! mock, a network client, a directory on disk) plugs in at
//! [`Config::store`](crate::config::ConfigBuilder::store).

use async_trait::async_trait;
use std::fmt::Debug;

pub mod body;
mod models;

pub use self::body::StorageBody;
pub use self::models::{
    GetObjectRequest, GetObjectResponse, ObjectMetadata, PutObjectRequest, PutObjectResponse,
    PutObjectTaggingRequest, PutObjectTaggingResponse,
};

use crate::error::Error;

/// A storage backend the client transfers objects to and from.
///
/// Request bodies are [`StorageBody`] chunk streams. A backend must drain a
/// request body fully before reading its trailer checksum; the trailer is
/// not observable until the final chunk has been yielded.
#[async_trait]
pub trait StorageBackend: Send + Sync + Debug {
    /// Store an object.
    ///
    /// # Arguments
    ///
    /// * `request` - The bucket, key, and body to store
    ///
    /// # Returns
    ///
    /// The stored object's ETag and whichever checksums were carried on the
    /// request, or an error if the operation fails
    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse, Error>;

    /// Retrieve an object's data and metadata.
    ///
    /// # Arguments
    ///
    /// * `request` - The bucket and key to fetch
    ///
    /// # Returns
    ///
    /// The object metadata and a body to stream the content from, or an
    /// error if the object doesn't exist
    async fn get_object(&self, request: GetObjectRequest) -> Result<GetObjectResponse, Error>;

    /// Replace the tag set of an object.
    ///
    /// # Arguments
    ///
    /// * `request` - The bucket, key, tag set, and serialized tag payload
    ///
    /// # Returns
    ///
    /// The checksum verified over the tag payload, or an error if the
    /// object doesn't exist or the request carried no checksum
    async fn put_object_tagging(
        &self,
        request: PutObjectTaggingRequest,
    ) -> Result<PutObjectTaggingResponse, Error>;
}

// Implement the trait for Arc<dyn StorageBackend> to allow for dynamic dispatch
#[async_trait]
impl StorageBackend for std::sync::Arc<dyn StorageBackend + '_> {
    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse, Error> {
        (**self).put_object(request).await
    }

    async fn get_object(&self, request: GetObjectRequest) -> Result<GetObjectResponse, Error> {
        (**self).get_object(request).await
    }

    async fn put_object_tagging(
        &self,
        request: PutObjectTaggingRequest,
    ) -> Result<PutObjectTaggingResponse, Error> {
        (**self).put_object_tagging(request).await
    }
}
