// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Bucket notification records, as delivered by MinIO and Amazon S3 event sources

use crate::s3::header_constants::X_AMZ_REQUEST_ID;
use crate::s3::utils::UtcTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// User identity contains principal ID
pub struct UserIdentity {
    #[serde(alias = "principalId", default, deserialize_with = "null_as_default")]
    pub principal_id: String,
}

/// Owner identity contains principal ID
pub type OwnerIdentity = UserIdentity;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// Response elements information: they are represented as a string-to-string
/// map in the MinIO server.
pub struct ResponseElements(HashMap<String, String>);

impl ResponseElements {
    pub fn x_amz_request_id(&self) -> Option<&String> {
        self.0.get(X_AMZ_REQUEST_ID)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// S3 bucket information
pub struct S3Bucket {
    #[serde(alias = "name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "arn", default, deserialize_with = "null_as_default")]
    pub arn: String,
    #[serde(alias = "ownerIdentity", default, deserialize_with = "null_as_default")]
    pub owner_identity: OwnerIdentity,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// S3 object information
pub struct S3Object {
    #[serde(alias = "key", default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(alias = "size")]
    pub size: Option<u64>,
    #[serde(alias = "eTag")]
    pub etag: Option<String>,
    #[serde(alias = "contentType")]
    pub content_type: Option<String>,
    #[serde(alias = "userMetadata")]
    pub user_metadata: Option<HashMap<String, String>>,
    #[serde(alias = "versionId", default, deserialize_with = "null_as_default")]
    pub version_id: String,
    #[serde(alias = "sequencer", default, deserialize_with = "null_as_default")]
    pub sequencer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// S3 definitions for NotificationRecord
pub struct S3 {
    #[serde(alias = "s3SchemaVersion", default, deserialize_with = "null_as_default")]
    pub s3_schema_version: String,
    #[serde(alias = "configurationId", default, deserialize_with = "null_as_default")]
    pub configuration_id: String,
    #[serde(alias = "bucket", default, deserialize_with = "null_as_default")]
    pub bucket: S3Bucket,
    #[serde(alias = "object", default, deserialize_with = "null_as_default")]
    pub object: S3Object,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// Source information
pub struct Source {
    #[serde(alias = "host", default, deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(alias = "port")]
    pub port: Option<String>,
    #[serde(alias = "userAgent", default, deserialize_with = "null_as_default")]
    pub user_agent: String,
}

/// Notification record information
///
/// Only the bucket and object of [`S3`] are needed to act on a record; every
/// other field defaults when absent so that payloads from different event
/// sources deserialize alike.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct NotificationRecord {
    #[serde(alias = "eventVersion", default, deserialize_with = "null_as_default")]
    pub event_version: String,
    #[serde(alias = "eventSource", default, deserialize_with = "null_as_default")]
    pub event_source: String,
    #[serde(alias = "awsRegion", default, deserialize_with = "null_as_default")]
    pub aws_region: String,
    #[serde(
        alias = "eventTime",
        default,
        with = "crate::s3::utils::aws_date_format"
    )]
    pub event_time: UtcTime,
    #[serde(alias = "eventName", default, deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(alias = "userIdentity", default, deserialize_with = "null_as_default")]
    pub user_identity: UserIdentity,
    #[serde(alias = "requestParameters", default, deserialize_with = "null_as_default")]
    pub request_parameters: Option<HashMap<String, String>>,
    #[serde(alias = "responseElements", default, deserialize_with = "null_as_default")]
    pub response_elements: ResponseElements,
    #[serde(alias = "s3", default, deserialize_with = "null_as_default")]
    pub s3: S3,
    #[serde(alias = "source", default, deserialize_with = "null_as_default")]
    pub source: Source,
}

impl NotificationRecord {
    /// Returns true for `s3:ObjectCreated:*` (MinIO) and `ObjectCreated:*` (AWS) events.
    pub fn is_object_created(&self) -> bool {
        self.event_name.starts_with("s3:ObjectCreated:")
            || self.event_name.starts_with("ObjectCreated:")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
/// Contains notification records
pub struct NotificationRecords {
    #[serde(alias = "Records", default, deserialize_with = "null_as_default")]
    pub records: Vec<NotificationRecord>,
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
