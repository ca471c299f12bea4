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

use minio_transform::s3::types::NotificationRecords;
use serde_json::{Value, json};

/// Object created event as delivered by a MinIO bucket notification target.
pub fn create_object_created_event(bucket: &str, key: &str) -> Value {
    json!({
        "EventName": "s3:ObjectCreated:Put",
        "Key": format!("{bucket}/{key}"),
        "Records": [{
            "eventVersion": "2.0",
            "eventSource": "minio:s3",
            "awsRegion": "",
            "eventTime": "2024-05-24T10:11:12.345Z",
            "eventName": "s3:ObjectCreated:Put",
            "userIdentity": {"principalId": "minioadmin"},
            "requestParameters": {"principalId": "minioadmin", "region": "", "sourceIPAddress": "127.0.0.1"},
            "responseElements": {"x-amz-request-id": "17D2A5B5C1D0E3F4", "x-minio-origin-endpoint": "http://127.0.0.1:9000"},
            "s3": {
                "s3SchemaVersion": "1.0",
                "configurationId": "Config",
                "bucket": {
                    "name": bucket,
                    "ownerIdentity": {"principalId": "minioadmin"},
                    "arn": format!("arn:aws:s3:::{bucket}")
                },
                "object": {
                    "key": key,
                    "size": 11,
                    "eTag": "5eb63bbbe01eeed093cb22bb8f5acdc3",
                    "contentType": "text/plain",
                    "sequencer": "17D2A5B5C1D0E3F4"
                }
            },
            "source": {"host": "127.0.0.1", "port": "", "userAgent": "MinIO (linux; amd64) minio-go/v7.0.70"}
        }]
    })
}

pub fn create_object_created_payload(bucket: &str, key: &str) -> Vec<u8> {
    create_object_created_event(bucket, key).to_string().into_bytes()
}

pub fn create_object_created_records(bucket: &str, key: &str) -> NotificationRecords {
    serde_json::from_value(create_object_created_event(bucket, key)).unwrap()
}
