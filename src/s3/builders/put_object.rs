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

use crate::s3::client::MinioClient;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::CONTENT_TYPE;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutObjectContentResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Maximum size of an object uploaded with a single PUT request (5 GiB).
pub const MAX_SINGLE_PUT_SIZE: u64 = 5 * 1024 * 1024 * 1024;

/// Argument builder for a single-request [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html)
/// of in-memory content.
///
/// The whole object is sent in one request; an existing object with the same
/// key is overwritten.
#[derive(Debug, Clone, TypedBuilder)]
pub struct PutObjectContent {
    #[builder(!default)] // force required
    client: MinioClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required
    content: Bytes,
    #[builder(default, setter(into))]
    content_type: Option<String>,
    /// User metadata, sent as `x-amz-meta-*` headers
    #[builder(default, setter(into))]
    user_metadata: Option<Multimap>,
}

pub type PutObjectContentBldr = PutObjectContentBuilder<(
    (MinioClient,),
    (),
    (),
    (),
    (String,),
    (String,),
    (Bytes,),
    (),
    (),
)>;

impl S3Api for PutObjectContent {
    type S3Response = PutObjectContentResponse;
}

impl ToS3Request for PutObjectContent {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let size = self.content.len() as u64;
        if size > MAX_SINGLE_PUT_SIZE {
            return Err(ValidationErr::InvalidObjectSize(size));
        }

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if let Some(content_type) = self.content_type {
            headers.add(CONTENT_TYPE, content_type);
        }
        if let Some(metadata) = self.user_metadata {
            for (key, values) in metadata.iter_all() {
                let key = key.to_lowercase();
                let key = match key.strip_prefix("x-amz-meta-") {
                    Some(k) => k.to_string(),
                    None => key,
                };
                for value in values {
                    headers.add(format!("x-amz-meta-{key}"), value.as_str());
                }
            }
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.content)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::http::BaseUrl;

    fn client() -> MinioClient {
        let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
        MinioClient::new::<crate::s3::creds::StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn builds_request_with_metadata() {
        let mut metadata = Multimap::new();
        metadata.add("Origin", "transform");
        metadata.add("x-amz-meta-source", "in-bucket/hello.txt");

        let req = client()
            .put_object_content("out-bucket", "hello.txt-formatted", "HELLO WORLD")
            .content_type("text/plain".to_string())
            .user_metadata(metadata)
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.bucket(), Some("out-bucket"));
        assert_eq!(req.object(), Some("hello.txt-formatted"));
        assert_eq!(
            req.headers.get("x-amz-meta-origin").map(String::as_str),
            Some("transform")
        );
        assert_eq!(
            req.headers.get("x-amz-meta-source").map(String::as_str),
            Some("in-bucket/hello.txt")
        );
        assert_eq!(
            req.headers.get(CONTENT_TYPE).map(String::as_str),
            Some("text/plain")
        );
    }

    #[test]
    fn rejects_invalid_bucket() {
        let err = client()
            .put_object_content("ab", "key", Bytes::new())
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidBucketName { .. }));
    }
}
