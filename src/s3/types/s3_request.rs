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

//! S3Request struct and implementation for executing HTTP requests.

use crate::s3::client::MinioClient;
use crate::s3::error::Error;
use crate::s3::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: MinioClient,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default)]
    region: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    /// region computed by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: String,
}

impl S3Request {
    /// Execute the request, returning the response. Only used in [`S3Api::send()`](super::S3Api::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = match &self.region {
            Some(r) if !r.is_empty() => r.clone(),
            _ => self.client.base_url().signing_region().to_string(),
        };

        self.client
            .execute(
                self.method.clone(),
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
            )
            .await
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn region(&self) -> &str {
        &self.inner_region
    }
}
