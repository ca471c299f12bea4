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

use crate::s3::MinioClient;
use crate::s3::error::{Error, ErrorResponse};
use crate::s3::response::a_response_traits::{HasEtagFromHeaders, HasObjectSize};
use crate::s3::types::S3Api;
use crate::s3::utils::{check_bucket_name, check_object_name};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

/// Object storage operations used by the transform.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads the whole content of an object.
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, Error>;

    /// Writes an object, replacing any existing object with the same key.
    async fn put(&self, bucket: &str, key: &str, content: Bytes) -> Result<(), Error>;
}

#[async_trait]
impl ObjectStore for MinioClient {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, Error> {
        let resp = self.get_object(bucket, key).build().send().await?;
        log::debug!("read {} bytes from {bucket}/{key}", resp.object_size());
        Ok(resp.into_bytes())
    }

    async fn put(&self, bucket: &str, key: &str, content: Bytes) -> Result<(), Error> {
        let resp = self
            .put_object_content(bucket, key, content)
            .content_type("text/plain; charset=utf-8".to_string())
            .build()
            .send()
            .await?;
        log::debug!("wrote {bucket}/{key} with etag {}", resp.etag());
        Ok(())
    }
}

/// In-process object store keyed by `(bucket, key)`.
///
/// Buckets spring into existence on first write. Reading a missing object
/// fails with the same `NoSuchKey` error an S3 server returns.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: DashMap<(String, String), Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an object directly.
    pub fn insert<B: Into<Bytes>>(&self, bucket: &str, key: &str, content: B) {
        self.objects
            .insert((bucket.to_string(), key.to_string()), content.into());
    }

    /// Returns the content of an object if it exists.
    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|v| v.value().clone())
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, Error> {
        check_bucket_name(bucket, false)?;
        check_object_name(key)?;
        self.object(bucket, key).ok_or_else(|| {
            ErrorResponse::from_status(
                404,
                &format!("/{bucket}/{key}"),
                Some(bucket),
                Some(key),
            )
            .into()
        })
    }

    async fn put(&self, bucket: &str, key: &str, content: Bytes) -> Result<(), Error> {
        check_bucket_name(bucket, false)?;
        check_object_name(key)?;
        self.insert(bucket, key, content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store
            .put("in-bucket", "a.txt", Bytes::from_static(b"one"))
            .await
            .unwrap();
        store
            .put("in-bucket", "a.txt", Bytes::from_static(b"two"))
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("in-bucket", "a.txt").await.unwrap(), "two");
    }

    #[tokio::test]
    async fn memory_store_missing_object() {
        let store = MemoryStore::new();
        let err = store.get("in-bucket", "missing.txt").await.unwrap_err();
        assert!(err.is_no_such_key());
    }

    #[tokio::test]
    async fn memory_store_rejects_invalid_names() {
        let store = MemoryStore::new();
        let err = store.put("", "a.txt", Bytes::new()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(store.is_empty());
    }
}
