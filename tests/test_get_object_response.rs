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

use bytes::Bytes;
use minio_transform::s3::MinioClient;
use minio_transform::s3::creds::StaticProvider;
use minio_transform::s3::http::BaseUrl;
use minio_transform::s3::response::GetObjectResponse;
use minio_transform::s3::response::a_response_traits::{
    HasBucket, HasEtagFromHeaders, HasObject, HasObjectSize, HasRegion, HasVersion,
};
use minio_transform::s3::types::{FromS3Response, ToS3Request};
use minio_transform_common::utils::get_response_from_bytes;

fn client() -> MinioClient {
    let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    MinioClient::new(base_url, Some(provider)).unwrap()
}

#[tokio::test]
async fn get_object_response_from_bytes() {
    let request = client()
        .get_object("in-bucket", "hello.txt")
        .build()
        .to_s3request()
        .unwrap();
    let response = get_response_from_bytes(Bytes::from_static(b"hello world"));

    let resp = GetObjectResponse::from_s3response(request, Ok(response))
        .await
        .unwrap();

    assert_eq!(resp.bucket(), "in-bucket");
    assert_eq!(resp.object(), "hello.txt");
    // region is only resolved when the request is executed
    assert_eq!(resp.region(), "");
    assert_eq!(resp.etag(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(resp.version_id(), Some("v1"));
    assert_eq!(resp.object_size(), 11);
    assert_eq!(resp.into_bytes(), "hello world");
}

#[tokio::test]
async fn get_object_response_propagates_error() {
    let request = client()
        .get_object("in-bucket", "missing.txt")
        .build()
        .to_s3request()
        .unwrap();
    let err = minio_transform::s3::error::ErrorResponse::from_status(
        404,
        "/in-bucket/missing.txt",
        Some("in-bucket"),
        Some("missing.txt"),
    );

    let result = GetObjectResponse::from_s3response(request, Err(err.into())).await;
    assert!(result.unwrap_err().is_no_such_key());
}
