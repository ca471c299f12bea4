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

use crate::s3::builders::{GetObject, GetObjectBldr};
use crate::s3::client::MinioClient;

impl MinioClient {
    /// Creates a [`GetObject`] request builder to download an object's data.
    ///
    /// To execute the request, call [`GetObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::s3::response::GetObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_transform::s3::MinioClient;
    /// use minio_transform::s3::creds::StaticProvider;
    /// use minio_transform::s3::http::BaseUrl;
    /// use minio_transform::s3::response::GetObjectResponse;
    /// use minio_transform::s3::response::a_response_traits::HasObjectSize;
    /// use minio_transform::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = MinioClient::new(base_url, Some(provider)).unwrap();
    ///     let resp: GetObjectResponse = client
    ///         .get_object("bucket-name", "object-name")
    ///         .build().send().await.unwrap();
    ///     println!("retrieved {} bytes", resp.object_size());
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObjectBldr {
        GetObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
