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

use async_trait::async_trait;
use bytes::Bytes;
use minio_transform::s3::error::{Error, ErrorResponse};
use minio_transform::transform::{MemoryStore, ObjectStore};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A storage call made through a [`RecordingStore`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreCall {
    Get { bucket: String, key: String },
    Put { bucket: String, key: String },
}

/// [`MemoryStore`] that records every call and can be told to fail reads or writes.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    calls: Mutex<Vec<StoreCall>>,
    fail_gets: AtomicBool,
    fail_puts: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<B: Into<Bytes>>(&self, bucket: &str, key: &str, content: B) {
        self.inner.insert(bucket, key, content);
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.inner.object(bucket, key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Makes every following `get` fail with `AccessDenied`.
    pub fn fail_gets(&self) {
        self.fail_gets.store(true, Ordering::SeqCst);
    }

    /// Makes every following `put` fail with a server error.
    pub fn fail_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Get { .. }))
            .count()
    }

    pub fn put_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Put { .. }))
            .count()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, Error> {
        self.record(StoreCall::Get {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        if self.fail_gets.load(Ordering::SeqCst) {
            let resource = format!("/{bucket}/{key}");
            return Err(ErrorResponse::from_status(403, &resource, Some(bucket), Some(key)).into());
        }
        self.inner.get(bucket, key).await
    }

    async fn put(&self, bucket: &str, key: &str, content: Bytes) -> Result<(), Error> {
        self.record(StoreCall::Put {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        if self.fail_puts.load(Ordering::SeqCst) {
            let resource = format!("/{bucket}/{key}");
            return Err(ErrorResponse::from_status(503, &resource, Some(bucket), Some(key)).into());
        }
        self.inner.put(bucket, key, content).await
    }
}
