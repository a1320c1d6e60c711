/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task::JoinHandle;

use crate::error;
use crate::operation::put_object_tagging::context::PutObjectTaggingContext;
use crate::operation::put_object_tagging::PutObjectTaggingOutput;

/// Handle for a single tag set replacement request.
#[derive(Debug)]
#[non_exhaustive]
pub struct PutObjectTaggingHandle {
    /// The task driving the request to completion
    task: JoinHandle<Result<PutObjectTaggingOutput, crate::error::Error>>,
    /// The context used to drive the request to completion
    pub(crate) ctx: PutObjectTaggingContext,
}

impl PutObjectTaggingHandle {
    pub(crate) fn new(
        ctx: PutObjectTaggingContext,
        task: JoinHandle<Result<PutObjectTaggingOutput, crate::error::Error>>,
    ) -> Self {
        Self { task, ctx }
    }

    /// Consume the handle and wait for the tag set replacement to complete.
    #[tracing::instrument(skip_all, level = "debug", name = "join-put-object-tagging")]
    pub async fn join(self) -> Result<PutObjectTaggingOutput, crate::error::Error> {
        match self.task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(error::operation_cancelled()),
            Err(err) => Err(err.into()),
        }
    }

    /// Abort the request.
    #[tracing::instrument(skip_all, level = "debug", name = "abort-put-object-tagging")]
    pub async fn abort(self) -> Result<(), crate::error::Error> {
        self.task.abort();
        match self.task.await {
            Ok(_) => Ok(()),
            Err(err) if err.is_cancelled() => {
                self.ctx.handle.metrics.increment_operations_failed();
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
