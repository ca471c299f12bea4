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

use crate::s3::builders::{PutObjectContent, PutObjectContentBldr};
use crate::s3::client::MinioClient;
use bytes::Bytes;

impl MinioClient {
    /// Creates a [`PutObjectContent`] request builder to upload in-memory
    /// content as an object in a single request.
    ///
    /// To execute the request, call [`PutObjectContent::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutObjectContentResponse`](crate::s3::response::PutObjectContentResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_transform::s3::MinioClient;
    /// use minio_transform::s3::creds::StaticProvider;
    /// use minio_transform::s3::http::BaseUrl;
    /// use minio_transform::s3::response::a_response_traits::HasEtagFromHeaders;
    /// use minio_transform::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = MinioClient::new(base_url, Some(provider)).unwrap();
    ///     let resp = client
    ///         .put_object_content("bucket-name", "object-name", "hello world")
    ///         .build().send().await.unwrap();
    ///     println!("uploaded object with etag {}", resp.etag());
    /// }
    /// ```
    pub fn put_object_content<S1: Into<String>, S2: Into<String>, C: Into<Bytes>>(
        &self,
        bucket: S1,
        object: S2,
        content: C,
    ) -> PutObjectContentBldr {
        PutObjectContent::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .content(content)
    }
}
