// ABOUTME: Connect-once repository guard safe under concurrent cold-start invocations
// ABOUTME: Wraps an async connector behind a OnceCell so every request can cheaply ensure-connect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Lazy Repository Handle
//!
//! The hosting model is request-per-invocation: every data-touching call
//! does an ensure-connected check before using the store. This wrapper
//! gives that discipline a single shape: connect once, reuse a
//! process-wide handle, no explicit teardown. Concurrent first calls race
//! on the cell, which serializes them and runs the connector exactly once.

use super::ContentRepository;
use crate::errors::AppResult;
use futures_util::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

type Connector = Box<dyn Fn() -> BoxFuture<'static, AppResult<Arc<dyn ContentRepository>>> + Send + Sync>;

/// Lazily-connected repository handle
pub struct LazyRepository {
    cell: OnceCell<Arc<dyn ContentRepository>>,
    connector: Connector,
}

impl LazyRepository {
    /// Create a handle around an async connector
    ///
    /// The connector runs at most once for the lifetime of this handle.
    #[must_use]
    pub fn new<F>(connector: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, AppResult<Arc<dyn ContentRepository>>> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            connector: Box::new(connector),
        }
    }

    /// Create a handle over an already-connected repository (tests,
    /// standalone in-memory runs)
    #[must_use]
    pub fn connected(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            cell: OnceCell::new_with(Some(repository)),
            connector: Box::new(|| {
                Box::pin(async {
                    Err(crate::errors::AppError::internal(
                        "connector invoked on pre-connected repository",
                    ))
                })
            }),
        }
    }

    /// Whether the repository has connected (readiness probes)
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the shared repository, connecting on first use
    ///
    /// # Errors
    /// Propagates the connector's failure; a failed attempt leaves the cell
    /// empty so the next request retries.
    pub async fn get_or_connect(&self) -> AppResult<Arc<dyn ContentRepository>> {
        let repository = self
            .cell
            .get_or_try_init(|| async {
                info!("Connecting content repository");
                (self.connector)().await
            })
            .await?;
        Ok(repository.clone())
    }
}
