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

use crate::s3::types::NotificationRecords;
use crate::transform::{
    Notification, ObjectStore, ReadFailure, TransformConfig, TransformError, TransformResponse,
    destination_key, uppercase,
};
use bytes::Bytes;
use std::sync::Arc;

/// Where a successful invocation wrote its result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformOutcome {
    pub destination_bucket: String,
    pub destination_key: String,
    pub size: usize,
}

/// Uppercases a newly created object into the destination bucket.
///
/// Holds only the injected configuration and a shared store handle, so one
/// handler may serve concurrent invocations.
#[derive(Debug)]
pub struct TransformHandler<S: ObjectStore + ?Sized> {
    store: Arc<S>,
    config: TransformConfig,
}

impl<S: ObjectStore + ?Sized> Clone for TransformHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: ObjectStore + ?Sized> TransformHandler<S> {
    pub fn new(store: Arc<S>, config: TransformConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Handles a raw JSON event payload.
    pub async fn handle_payload(&self, payload: &[u8]) -> TransformResponse {
        match Notification::from_slice(payload) {
            Ok(notification) => self.handle_notification(&notification).await,
            Err(e) => invalid_notification(e),
        }
    }

    /// Handles a parsed event; only its first record is used.
    pub async fn handle(&self, event: &NotificationRecords) -> TransformResponse {
        match Notification::from_records(event) {
            Ok(notification) => self.handle_notification(&notification).await,
            Err(e) => invalid_notification(e),
        }
    }

    pub async fn handle_notification(&self, notification: &Notification) -> TransformResponse {
        match self.process(notification).await {
            Ok(outcome) => {
                TransformResponse::success(&outcome.destination_bucket, &outcome.destination_key)
            }
            Err(e) => {
                log::error!(
                    "Error processing file {} from bucket {}: {e}",
                    notification.source_key,
                    notification.source_bucket
                );
                TransformResponse::failure(&e)
            }
        }
    }

    /// Reads, uppercases and writes the object named by `notification`.
    ///
    /// Nothing is read when the destination bucket is not configured, and
    /// nothing is written when the read fails.
    pub async fn process(
        &self,
        notification: &Notification,
    ) -> Result<TransformOutcome, TransformError> {
        let destination_bucket = self.config.destination_bucket()?;
        let source_bucket = notification.source_bucket.as_str();
        let source_key = notification.source_key.as_str();

        let content = self
            .read_text(source_bucket, source_key)
            .await
            .map_err(|source| TransformError::StorageRead {
                bucket: source_bucket.to_string(),
                key: source_key.to_string(),
                source,
            })?;

        let transformed = uppercase(&content);
        let dest_key = destination_key(source_key);
        let size = transformed.len();

        self.store
            .put(destination_bucket, &dest_key, Bytes::from(transformed))
            .await
            .map_err(|source| TransformError::StorageWrite {
                bucket: destination_bucket.to_string(),
                key: dest_key.clone(),
                source,
            })?;

        log::info!(
            "File processed successfully: {source_bucket}/{source_key} -> {destination_bucket}/{dest_key}"
        );

        Ok(TransformOutcome {
            destination_bucket: destination_bucket.to_string(),
            destination_key: dest_key,
            size,
        })
    }

    async fn read_text(&self, bucket: &str, key: &str) -> Result<String, ReadFailure> {
        let body = self.store.get(bucket, key).await?;
        Ok(std::str::from_utf8(&body)?.to_string())
    }
}

fn invalid_notification(e: TransformError) -> TransformResponse {
    log::error!("Error processing notification: {e}");
    TransformResponse::failure(&e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::MemoryStore;

    fn event(bucket: &str, key: &str) -> Vec<u8> {
        serde_json::json!({
            "Records": [{
                "eventName": "s3:ObjectCreated:Put",
                "s3": {"bucket": {"name": bucket}, "object": {"key": key}}
            }]
        })
        .to_string()
        .into_bytes()
    }

    #[tokio::test]
    async fn uppercases_into_destination() {
        let store = Arc::new(MemoryStore::new());
        store.insert("in-bucket", "hello.txt", "hello world");
        let handler = TransformHandler::new(store.clone(), TransformConfig::new("out-bucket"));

        let resp = handler.handle_payload(&event("in-bucket", "hello.txt")).await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(
            resp.body,
            "File processed and uploaded to out-bucket/hello.txt-formatted"
        );
        assert_eq!(
            store.object("out-bucket", "hello.txt-formatted").unwrap(),
            "HELLO WORLD"
        );
        assert_eq!(store.object("in-bucket", "hello.txt").unwrap(), "hello world");
    }

    #[tokio::test]
    async fn process_reports_outcome() {
        let store = Arc::new(MemoryStore::new());
        store.insert("in-bucket", "data.csv", "a,b\nc,d\n");
        let handler = TransformHandler::new(store, TransformConfig::new("out-bucket"));

        let notification = Notification {
            source_bucket: "in-bucket".into(),
            source_key: "data.csv".into(),
        };
        let outcome = handler.process(&notification).await.unwrap();
        assert_eq!(
            outcome,
            TransformOutcome {
                destination_bucket: "out-bucket".into(),
                destination_key: "data.csv-formatted".into(),
                size: 8,
            }
        );
    }

    #[tokio::test]
    async fn missing_configuration_skips_storage() {
        let store = Arc::new(MemoryStore::new());
        let handler = TransformHandler::new(store.clone(), TransformConfig::default());

        let notification = Notification {
            source_bucket: "in-bucket".into(),
            source_key: "missing.txt".into(),
        };
        let err = handler.process(&notification).await.unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn non_utf8_content_is_a_read_error() {
        let store = Arc::new(MemoryStore::new());
        store.insert("in-bucket", "image.bin", vec![0xff_u8, 0xfe, 0x00]);
        let handler = TransformHandler::new(store.clone(), TransformConfig::new("out-bucket"));

        let notification = Notification {
            source_bucket: "in-bucket".into(),
            source_key: "image.bin".into(),
        };
        let err = handler.process(&notification).await.unwrap_err();
        assert_eq!(err.kind(), "StorageReadError");
        assert!(matches!(
            err,
            TransformError::StorageRead {
                source: ReadFailure::Decode(_),
                ..
            }
        ));
        assert_eq!(store.len(), 1);
    }
}
