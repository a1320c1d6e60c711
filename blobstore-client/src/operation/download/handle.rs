/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task::JoinHandle;

use crate::error;
use crate::operation::download::context::DownloadContext;
use crate::operation::download::DownloadOutput;

/// Handle for a single download object request.
///
/// Dropping the handle or calling [`Self::abort`] cancels the in-flight
/// request task; the body and any validation state are released without a
/// finished digest.
#[derive(Debug)]
#[non_exhaustive]
pub struct DownloadHandle {
    /// The task driving the request to completion
    task: JoinHandle<Result<DownloadOutput, crate::error::Error>>,
    /// The context used to drive a download to completion
    pub(crate) ctx: DownloadContext,
}

impl DownloadHandle {
    pub(crate) fn new(
        ctx: DownloadContext,
        task: JoinHandle<Result<DownloadOutput, crate::error::Error>>,
    ) -> Self {
        Self { task, ctx }
    }

    /// Consume the handle and wait for the object metadata and body.
    ///
    /// The body still has to be consumed chunk by chunk afterwards; checksum
    /// validation runs as the chunks flow.
    #[tracing::instrument(skip_all, level = "debug", name = "join-download")]
    pub async fn join(self) -> Result<DownloadOutput, crate::error::Error> {
        match self.task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(error::operation_cancelled()),
            Err(err) => Err(err.into()),
        }
    }

    /// Abort the download and cancel the in-flight request.
    #[tracing::instrument(skip_all, level = "debug", name = "abort-download")]
    pub async fn abort(self) -> Result<(), crate::error::Error> {
        self.task.abort();
        match self.task.await {
            Ok(_) => Ok(()),
            Err(err) if err.is_cancelled() => {
                self.ctx.handle.metrics.increment_operations_failed();
                tracing::debug!(
                    bucket = self.ctx.request().bucket().unwrap_or_default(),
                    key = self.ctx.request().key().unwrap_or_default(),
                    "download aborted"
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
