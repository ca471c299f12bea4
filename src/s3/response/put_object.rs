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

use crate::impl_from_s3response;
use crate::impl_has_s3fields;
use crate::s3::response::a_response_traits::{
    HasBucket, HasEtagFromHeaders, HasObject, HasRegion, HasVersion,
};
use crate::s3::types::S3Request;
use bytes::Bytes;
use http::HeaderMap;

/// Response of [`put_object_content()`](crate::s3::client::MinioClient::put_object_content) API
#[derive(Clone, Debug)]
pub struct PutObjectContentResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(PutObjectContentResponse);
impl_has_s3fields!(PutObjectContentResponse);

impl HasBucket for PutObjectContentResponse {}
impl HasObject for PutObjectContentResponse {}
impl HasRegion for PutObjectContentResponse {}
impl HasVersion for PutObjectContentResponse {}
impl HasEtagFromHeaders for PutObjectContentResponse {}
