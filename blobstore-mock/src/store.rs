/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::SystemTime;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};

use blobstore_client::storage::{
    GetObjectRequest, GetObjectResponse, PutObjectRequest, PutObjectResponse,
    PutObjectTaggingRequest, PutObjectTaggingResponse, StorageBackend, StorageBody,
};
use blobstore_client::types::{ObjectChecksums, Tag};

use crate::error::Error;
use crate::integrity;

/// A single stored object with everything recorded at storage time.
#[derive(Debug, Clone)]
struct StoredObject {
    data: Bytes,
    e_tag: String,
    last_modified: SystemTime,
    checksums: ObjectChecksums,
    tags: Vec<Tag>,
}

/// An in-memory [`StorageBackend`].
///
/// Buckets are created implicitly on first write. Request bodies are drained
/// fully before the trailer checksum is read; when a trailer is present the
/// digest is recomputed over the received bytes and the request is rejected
/// on mismatch. Stored checksums are returned verbatim on later retrieval.
#[derive(Debug, Default)]
pub struct MemoryStore {
    // bucket -> key -> object
    buckets: RwLock<HashMap<String, HashMap<String, StoredObject>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a bit in the stored content of an object, leaving its recorded
    /// checksums untouched. Subsequent downloads stream the corrupted bytes
    /// against the original checksums.
    ///
    /// # Panics
    ///
    /// Panics if the object does not exist.
    pub fn corrupt_object(&self, bucket: &str, key: &str) {
        let mut buckets = self.buckets.write().expect("lock poisoned");
        let object = buckets
            .get_mut(bucket)
            .and_then(|objects| objects.get_mut(key))
            .expect("object exists");

        let mut corrupted = BytesMut::from(object.data.as_ref());
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0x01;
        object.data = corrupted.freeze();
        tracing::debug!(bucket, key, "corrupted stored object");
    }

    /// The tag set currently recorded for an object.
    ///
    /// # Panics
    ///
    /// Panics if the object does not exist.
    pub fn tag_set(&self, bucket: &str, key: &str) -> Vec<Tag> {
        let buckets = self.buckets.read().expect("lock poisoned");
        buckets
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .expect("object exists")
            .tags
            .clone()
    }

    /// Drain a request body and verify its trailer checksum over the bytes
    /// received. Returns the content alongside the checksums to record.
    async fn receive_body(
        mut body: StorageBody,
    ) -> Result<(Bytes, ObjectChecksums), blobstore_client::error::Error> {
        let mut received = BytesMut::new();
        while let Some(chunk) = body.next().await {
            received.extend_from_slice(&chunk?);
        }
        let received = received.freeze();

        let mut checksums = ObjectChecksums::default();
        if let Some(trailer) = body.trailer_checksum() {
            let actual = integrity::compute(trailer.algorithm(), &received);
            if actual != trailer.value() {
                return Err(Error::BadDigest {
                    algorithm: trailer.algorithm().to_string(),
                    expected: trailer.value().to_owned(),
                    actual,
                }
                .into());
            }
            checksums.insert(trailer.clone());
        }

        Ok((received, checksums))
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    async fn put_object(
        &self,
        request: PutObjectRequest,
    ) -> Result<PutObjectResponse, blobstore_client::error::Error> {
        let (data, checksums) = Self::receive_body(request.body).await?;
        let e_tag = format!("\"{:x}\"", md5::compute(&data));
        tracing::debug!(
            bucket = %request.bucket,
            key = %request.key,
            content_length = data.len(),
            "stored object"
        );

        let object = StoredObject {
            data,
            e_tag: e_tag.clone(),
            last_modified: SystemTime::now(),
            checksums: checksums.clone(),
            tags: Vec::new(),
        };
        let mut buckets = self.buckets.write().expect("lock poisoned");
        buckets
            .entry(request.bucket)
            .or_default()
            .insert(request.key, object);

        let mut response = PutObjectResponse::default();
        response.e_tag = Some(e_tag);
        response.checksums = checksums;
        Ok(response)
    }

    async fn get_object(
        &self,
        request: GetObjectRequest,
    ) -> Result<GetObjectResponse, blobstore_client::error::Error> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let objects = buckets.get(&request.bucket).ok_or(Error::NoSuchBucket)?;
        let object = objects.get(&request.key).ok_or(Error::NoSuchKey)?;

        let mut metadata = blobstore_client::storage::ObjectMetadata::default();
        metadata.content_length = object.data.len() as u64;
        metadata.e_tag = Some(object.e_tag.clone());
        metadata.last_modified = Some(object.last_modified);
        metadata.checksums = object.checksums.clone();

        Ok(GetObjectResponse::new(
            metadata,
            StorageBody::from_bytes(object.data.clone()),
        ))
    }

    async fn put_object_tagging(
        &self,
        request: PutObjectTaggingRequest,
    ) -> Result<PutObjectTaggingResponse, blobstore_client::error::Error> {
        {
            let buckets = self.buckets.read().expect("lock poisoned");
            let objects = buckets.get(&request.bucket).ok_or(Error::NoSuchBucket)?;
            if !objects.contains_key(&request.key) {
                return Err(Error::NoSuchKey.into());
            }
        }

        // this operation mandates a checksum over the tag payload
        let (_, checksums) = Self::receive_body(request.body).await?;
        if checksums.is_empty() {
            return Err(Error::MissingChecksum.into());
        }

        let mut buckets = self.buckets.write().expect("lock poisoned");
        let object = buckets
            .get_mut(&request.bucket)
            .and_then(|objects| objects.get_mut(&request.key))
            .ok_or(Error::NoSuchKey)?;
        object.tags = request.tagging.tag_set().to_vec();
        tracing::debug!(
            bucket = %request.bucket,
            key = %request.key,
            tags = object.tags.len(),
            "replaced tag set"
        );

        let mut response = PutObjectTaggingResponse::default();
        response.checksums = checksums;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobstore_client::error::ErrorKind;
    use blobstore_client::types::{Tag, Tagging};

    async fn put_plain(store: &MemoryStore, bucket: &str, key: &str, data: &'static [u8]) {
        let body = StorageBody::from_bytes(Bytes::from_static(data));
        store
            .put_object(PutObjectRequest::new(bucket, key, body))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_put_and_get_object() {
        let store = MemoryStore::new();
        put_plain(&store, "bucket", "key", b"test content").await;

        let mut response = store
            .get_object(GetObjectRequest::new("bucket", "key"))
            .await
            .unwrap();
        assert_eq!(response.metadata.content_length, 12);
        assert!(response.metadata.e_tag.is_some());
        // no checksum was carried on the request, none is stored
        assert!(response.metadata.checksums.is_empty());

        let mut received = BytesMut::new();
        while let Some(chunk) = response.body.next().await {
            received.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(received.freeze(), Bytes::from_static(b"test content"));
    }

    #[tokio::test]
    async fn test_get_missing_object() {
        let store = MemoryStore::new();
        put_plain(&store, "bucket", "key", b"content").await;

        let err = store
            .get_object(GetObjectRequest::new("bucket", "other-key"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotFound);

        let err = store
            .get_object(GetObjectRequest::new("other-bucket", "key"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_tagging_requires_checksum() {
        let store = MemoryStore::new();
        put_plain(&store, "bucket", "key", b"content").await;

        let tagging = Tagging::builder().tag_set(Tag::new("env", "dev")).build();
        // a plain body carries no trailer checksum
        let request = PutObjectTaggingRequest::new(
            "bucket",
            "key",
            tagging,
            StorageBody::from_bytes(Bytes::from_static(b"env=dev")),
        );
        let err = store.put_object_tagging(request).await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
    }

    #[tokio::test]
    async fn test_corrupt_object_changes_content_only() {
        let store = MemoryStore::new();
        put_plain(&store, "bucket", "key", b"pristine").await;

        let before = store
            .get_object(GetObjectRequest::new("bucket", "key"))
            .await
            .unwrap();
        store.corrupt_object("bucket", "key");
        let after = store
            .get_object(GetObjectRequest::new("bucket", "key"))
            .await
            .unwrap();

        assert_eq!(before.metadata.e_tag, after.metadata.e_tag);
        assert_eq!(
            before.metadata.content_length,
            after.metadata.content_length
        );
    }
}
