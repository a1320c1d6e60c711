/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task::JoinHandle;

use crate::error;
use crate::operation::upload::context::UploadContext;
use crate::operation::upload::UploadOutput;

/// Response type for a single upload object request.
///
/// # Cancellation
///
/// The operation can be cancelled either by dropping this handle or by
/// calling [`Self::abort`]. In both cases the in-flight request task is
/// cancelled at its next await point and the body's checksum calculator is
/// released without a finished digest. If the upload already completed
/// before the handle is dropped or aborted, the stored object is not
/// deleted from the backend.
#[derive(Debug)]
#[non_exhaustive]
pub struct UploadHandle {
    /// The task driving the request to completion
    task: JoinHandle<Result<UploadOutput, crate::error::Error>>,
    /// The context used to drive an upload to completion
    pub(crate) ctx: UploadContext,
}

impl UploadHandle {
    pub(crate) fn new(
        ctx: UploadContext,
        task: JoinHandle<Result<UploadOutput, crate::error::Error>>,
    ) -> Self {
        Self { task, ctx }
    }

    /// Consume the handle and wait for the upload to complete
    #[tracing::instrument(skip_all, level = "debug", name = "join-upload")]
    pub async fn join(self) -> Result<UploadOutput, crate::error::Error> {
        match self.task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(error::operation_cancelled()),
            Err(err) => Err(err.into()),
        }
    }

    /// Abort the upload and cancel the in-flight request.
    #[tracing::instrument(skip_all, level = "debug", name = "abort-upload")]
    pub async fn abort(self) -> Result<(), crate::error::Error> {
        self.task.abort();
        match self.task.await {
            // aborting a finished task is a no-op; either outcome is a
            // successful cancellation from the caller's perspective
            Ok(_) => Ok(()),
            Err(err) if err.is_cancelled() => {
                self.ctx.handle.metrics.increment_operations_failed();
                tracing::debug!(
                    bucket = self.ctx.request().bucket().unwrap_or_default(),
                    key = self.ctx.request().key().unwrap_or_default(),
                    "upload aborted"
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UploadHandle;

    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    #[test]
    fn test_handle_properties() {
        is_send::<UploadHandle>();
        is_sync::<UploadHandle>();
    }
}
