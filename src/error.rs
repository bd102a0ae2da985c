// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised while decoding a binary STL
///
/// Every variant is fatal to the load that produced it; no partial mesh is
/// ever handed back alongside one.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The source could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header or triangle count is unreadable, or the count is zero
    #[error("invalid STL: {message}")]
    Format { message: String },

    /// A triangle record ended before all of its bytes were read
    #[error("truncated triangle record {index}: expected {expected} bytes, got {actual}")]
    TruncatedData {
        /// Zero-based index of the first incomplete record
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Storage for the declared triangle count could not be reserved
    #[error("cannot allocate storage for {count} triangles")]
    Allocation { count: u32 },
}

impl MeshError {
    /// Create a `Format` error with the given message
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Index of the offending record for truncation errors
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::TruncatedData { index, .. } => Some(*index),
            _ => None,
        }
    }
}
