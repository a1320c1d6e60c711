/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::Write;
use std::sync::Arc;

use blobstore_client::error::ErrorKind;
use blobstore_client::io::InputStream;
use blobstore_client::metrics::unit::ByteUnit;
use blobstore_client::operation::upload::ChecksumStrategy;
use blobstore_client::types::{ChecksumAlgorithm, PartSize, RequestChecksumCalculation};
use blobstore_mock::MemoryStore;
use bytes::Bytes;
use test_common::{checksum_of, random_payload, test_client, unique_name};

/// Calculate ETag as the backend reports it, with the extra quotes and everything
fn calculate_etag(data: &[u8]) -> String {
    let digest = md5::compute(data);
    format!("\"{digest:x}\"")
}

#[tokio::test]
async fn test_default_policy_crc32() {
    let (client, _store) = test_client();
    let payload = random_payload(10 * ByteUnit::Mebibyte.as_bytes_usize());
    let key = unique_name("object");

    let output = client
        .upload()
        .bucket("test-bucket")
        .key(&key)
        .body(InputStream::from(payload.clone()))
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(
        output.checksum_crc32(),
        Some(checksum_of(ChecksumAlgorithm::Crc32, &payload).as_str())
    );
    assert!(output.checksum_crc32_c().is_none());
    assert!(output.checksum_sha1().is_none());
    assert!(output.checksum_sha256().is_none());
    assert_eq!(output.e_tag(), Some(calculate_etag(&payload).as_str()));
}

#[tokio::test]
async fn test_explicit_strategy_overrides_policy() {
    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store)
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .build();
    let client = blobstore_client::Client::new(config);
    let payload = Bytes::from_static(b"strategy beats policy");

    let output = client
        .upload()
        .bucket("test-bucket")
        .key("test-key")
        .body(InputStream::from(payload.clone()))
        .checksum_strategy(ChecksumStrategy::with_calculated_sha1())
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(
        output.checksum_sha1(),
        Some(checksum_of(ChecksumAlgorithm::Sha1, &payload).as_str())
    );
    assert!(output.checksum_crc32().is_none());
}

#[tokio::test]
async fn test_precalculated_value_sent_verbatim() {
    let (client, _store) = test_client();
    let payload = Bytes::from_static(b"precalculated content");
    let precalculated = checksum_of(ChecksumAlgorithm::Sha1, &payload);

    let output = client
        .upload()
        .bucket("test-bucket")
        .key("test-key")
        .body(InputStream::from(payload))
        .checksum_strategy(ChecksumStrategy::with_sha1(&precalculated))
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(output.checksum_sha1(), Some(precalculated.as_str()));
}

#[tokio::test]
async fn test_wrong_precalculated_value_rejected() {
    let (client, _store) = test_client();

    let err = client
        .upload()
        .bucket("test-bucket")
        .key("test-key")
        .body(InputStream::from(Bytes::from_static(b"actual content")))
        .checksum_strategy(ChecksumStrategy::with_crc32("AAAAAA=="))
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::InputInvalid);
}

#[tokio::test]
async fn test_when_required_computes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store)
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .build();
    let client = blobstore_client::Client::new(config);

    let output = client
        .upload()
        .bucket("test-bucket")
        .key("test-key")
        .body(InputStream::from(Bytes::from_static(b"no checksum here")))
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert!(output.checksum_crc32().is_none());
    assert!(output.checksum_crc32_c().is_none());
    assert!(output.checksum_sha1().is_none());
    assert!(output.checksum_sha256().is_none());
    assert_eq!(client.metrics().checksums_calculated(), 0);
}

#[tokio::test]
async fn test_same_bytes_same_checksum() {
    let (client, _store) = test_client();
    let payload = random_payload(ByteUnit::Kibibyte.as_bytes_usize());

    let mut values = Vec::new();
    for key in ["first-copy", "second-copy"] {
        let output = client
            .upload()
            .bucket("test-bucket")
            .key(key)
            .body(InputStream::from(payload.clone()))
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();
        values.push(output.checksum_crc32().unwrap().to_string());
    }

    assert_eq!(values[0], values[1]);
}

#[tokio::test]
async fn test_threshold_body_skips_policy_checksum() {
    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store)
        .multipart_threshold(PartSize::Target(5 * ByteUnit::Mebibyte.as_bytes_u64()))
        .build();
    let client = blobstore_client::Client::new(config);
    let payload = random_payload(5 * ByteUnit::Mebibyte.as_bytes_usize());

    // no explicit strategy: policy-driven calculation stands down quietly
    let output = client
        .upload()
        .bucket("test-bucket")
        .key("big-object")
        .body(InputStream::from(payload))
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert!(output.checksum_crc32().is_none());
    assert!(output.checksum_sha256().is_none());
}

#[tokio::test]
async fn test_threshold_body_rejects_explicit_strategy() {
    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store)
        .multipart_threshold(PartSize::Target(5 * ByteUnit::Mebibyte.as_bytes_u64()))
        .build();
    let client = blobstore_client::Client::new(config);
    let payload = random_payload(5 * ByteUnit::Mebibyte.as_bytes_usize());

    let err = client
        .upload()
        .bucket("test-bucket")
        .key("big-object")
        .body(InputStream::from(payload))
        .checksum_strategy(ChecksumStrategy::with_calculated_crc32())
        .initiate()
        .unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::UnsupportedAlgorithmForOperation);
    // rejected before any bytes moved
    assert_eq!(client.metrics().bytes_uploaded(), 0);
}

#[tokio::test]
async fn test_file_backed_upload_digest() {
    let (client, _store) = test_client();
    let payload = random_payload(ByteUnit::Mebibyte.as_bytes_usize());
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&payload).unwrap();

    let stream = InputStream::from_path(tmp.path()).unwrap();
    let output = client
        .upload()
        .bucket("test-bucket")
        .key("file-object")
        .body(stream)
        .checksum_strategy(ChecksumStrategy::with_calculated_sha256())
        .initiate()
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(
        output.checksum_sha256(),
        Some(checksum_of(ChecksumAlgorithm::Sha256, &payload).as_str())
    );
}

#[tokio::test]
async fn test_abort_upload() {
    let (client, _store) = test_client();
    let payload = random_payload(8 * ByteUnit::Mebibyte.as_bytes_usize());

    let handle = client
        .upload()
        .bucket("test-bucket")
        .key("aborted-object")
        .body(InputStream::from(payload))
        .initiate()
        .unwrap();
    handle.abort().await.unwrap();
}
