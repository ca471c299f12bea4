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
use crate::transform::TransformError;

/// Location of the object a notification refers to.
///
/// Taken from the first record of the event; further records are ignored.
/// The key is used exactly as delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub source_bucket: String,
    pub source_key: String,
}

impl Notification {
    pub fn from_records(event: &NotificationRecords) -> Result<Self, TransformError> {
        let record = event
            .records
            .first()
            .ok_or_else(|| TransformError::InvalidInput("notification contains no records".into()))?;

        let source_bucket = record.s3.bucket.name.as_str();
        if source_bucket.is_empty() {
            return Err(TransformError::InvalidInput(
                "notification record has no bucket name".into(),
            ));
        }
        let source_key = record.s3.object.key.as_str();
        if source_key.is_empty() {
            return Err(TransformError::InvalidInput(
                "notification record has no object key".into(),
            ));
        }

        if event.records.len() > 1 {
            log::debug!(
                "notification has {} records; only the first one is processed",
                event.records.len()
            );
        }

        Ok(Self {
            source_bucket: source_bucket.to_string(),
            source_key: source_key.to_string(),
        })
    }

    /// Parses a raw JSON event payload.
    pub fn from_slice(payload: &[u8]) -> Result<Self, TransformError> {
        let event: NotificationRecords = serde_json::from_slice(payload)
            .map_err(|e| TransformError::InvalidInput(format!("malformed event payload: {e}")))?;
        Self::from_records(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_wins() {
        let n = Notification::from_slice(
            br#"{"Records":[
                {"s3":{"bucket":{"name":"in-bucket"},"object":{"key":"first.txt"}}},
                {"s3":{"bucket":{"name":"other"},"object":{"key":"second.txt"}}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(n.source_bucket, "in-bucket");
        assert_eq!(n.source_key, "first.txt");
    }

    #[test]
    fn key_is_not_decoded() {
        let n = Notification::from_slice(
            br#"{"Records":[{"s3":{"bucket":{"name":"in-bucket"},"object":{"key":"my+file%281%29.txt"}}}]}"#,
        )
        .unwrap();
        assert_eq!(n.source_key, "my+file%281%29.txt");
    }

    #[test]
    fn null_optional_fields() {
        let n = Notification::from_slice(
            br#"{"Records":[{"eventTime":null,"eventName":"s3:ObjectCreated:Put","s3":{"bucket":{"name":"in-bucket"},"object":{"key":"a.txt","size":null}}}]}"#,
        )
        .unwrap();
        assert_eq!(n.source_bucket, "in-bucket");
        assert_eq!(n.source_key, "a.txt");
    }

    #[test]
    fn invalid_payloads() {
        let cases: [&[u8]; 6] = [
            br#"{"Records":[]}"#,
            br#"{}"#,
            br#"{"Records":[{"s3":{"bucket":{"name":"in-bucket"},"object":{}}}]}"#,
            br#"{"Records":[{"s3":{"bucket":{"name":""},"object":{"key":"a.txt"}}}]}"#,
            b"not json",
            b"[]",
        ];
        for payload in cases {
            let err = Notification::from_slice(payload).unwrap_err();
            assert_eq!(err.kind(), "InvalidInput", "{}", String::from_utf8_lossy(payload));
        }
    }
}
