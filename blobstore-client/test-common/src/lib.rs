/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::{BufMut, Bytes, BytesMut};
use sha1::Digest;
use uuid::Uuid;

use blobstore_client::error::Error;
use blobstore_client::operation::download::Body;
use blobstore_client::types::ChecksumAlgorithm;
use blobstore_mock::MemoryStore;

/// Create a client backed by a fresh in-memory store, with default policies.
/// The store is returned alongside so tests can inspect or corrupt it.
pub fn test_client() -> (blobstore_client::Client, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store.clone())
        .build();
    (blobstore_client::Client::new(config), store)
}

/// Compute the base64 digest of `data` independently of the client's own
/// calculator, so tests never verify the client against itself.
pub fn checksum_of(algorithm: ChecksumAlgorithm, data: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Crc32 => BASE64.encode(crc32fast::hash(data).to_be_bytes()),
        ChecksumAlgorithm::Crc32C => BASE64.encode(crc32c::crc32c(data).to_be_bytes()),
        ChecksumAlgorithm::Sha1 => BASE64.encode(sha1::Sha1::digest(data)),
        ChecksumAlgorithm::Sha256 => BASE64.encode(sha2::Sha256::digest(data)),
        _ => unimplemented!("algorithm not covered by test helpers"),
    }
}

/// Generate `len` bytes of random content.
pub fn random_payload(len: usize) -> Bytes {
    let mut data = vec![0u8; len];
    for byte in data.iter_mut() {
        *byte = fastrand::u8(..);
    }
    Bytes::from(data)
}

/// Generate a unique name to avoid conflicts between concurrent test runs.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Drain/consume a download body.
pub async fn drain(body: &mut Body) -> Result<Bytes, Error> {
    let mut data = BytesMut::new();
    while let Some(chunk) = body.next().await {
        data.put(chunk?);
    }
    Ok(data.into())
}
