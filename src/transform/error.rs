// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::s3::error::Error;
use thiserror::Error;

/// Reason an object could not be read as text
#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error(transparent)]
    Store(#[from] Error),

    #[error("object content is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Errors of a single transform invocation
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("invalid notification: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to read {bucket}/{key}: {source}")]
    StorageRead {
        bucket: String,
        key: String,
        #[source]
        source: ReadFailure,
    },

    #[error("failed to write {bucket}/{key}: {source}")]
    StorageWrite {
        bucket: String,
        key: String,
        #[source]
        source: Error,
    },
}

impl TransformError {
    /// Name of the error kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::InvalidInput(_) => "InvalidInput",
            TransformError::Configuration(_) => "ConfigurationError",
            TransformError::StorageRead { .. } => "StorageReadError",
            TransformError::StorageWrite { .. } => "StorageWriteError",
        }
    }
}
