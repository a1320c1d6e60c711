/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use blobstore_client::io::InputStream;
use blobstore_client::operation::upload::ChecksumStrategy;
use blobstore_client::types::ChecksumAlgorithm;
use blobstore_mock::MemoryStore;
use bytes::BufMut;
use bytes::BytesMut;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "roundtrip")]
#[command(
    about = "Uploads a local file to an in-memory store and downloads it back with checksum validation."
)]
pub struct Args {
    /// File to upload
    #[arg(required = true)]
    source: PathBuf,

    /// Checksum algorithm to use (CRC32 | CRC32C | SHA1 | SHA256)
    #[arg(long)]
    checksum_algorithm: Option<String>,

    /// Bucket name to store the object under
    #[arg(long, default_value = "demo-bucket")]
    bucket: String,

    /// Key to store the object under
    #[arg(long, default_value = "demo-key")]
    key: String,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let store = Arc::new(MemoryStore::new());
    let config = blobstore_client::Config::builder()
        .store(store)
        .build();
    let client = blobstore_client::Client::new(config);

    let stream = InputStream::from_path(&args.source)?;
    let mut upload = client
        .upload()
        .bucket(&args.bucket)
        .key(&args.key)
        .body(stream);
    if let Some(name) = &args.checksum_algorithm {
        let algorithm: ChecksumAlgorithm = name.parse()?;
        let strategy = ChecksumStrategy::builder().algorithm(algorithm).build()?;
        upload = upload.checksum_strategy(strategy);
    }

    let response = upload.initiate()?.join().await?;
    println!("uploaded: etag={:?}", response.e_tag());
    for algorithm in ChecksumAlgorithm::PRECEDENCE {
        if let Some(value) = response.checksums().get(algorithm) {
            println!("  {algorithm}: {value}");
        }
    }

    let mut output = client
        .download()
        .bucket(&args.bucket)
        .key(&args.key)
        .initiate()?
        .join()
        .await?;

    let mut received = BytesMut::new();
    while let Some(chunk) = output.body_mut().next().await {
        received.put(chunk?);
    }
    println!(
        "downloaded {} bytes, validation: {:?}",
        received.len(),
        output.checksum_validation()
    );

    Ok(())
}
