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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::GetObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`MinioClient::get_object`](crate::s3::client::MinioClient::get_object) method.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GetObject {
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
    #[builder(default, setter(into))]
    version_id: Option<String>,
    #[builder(default, setter(into))]
    offset: Option<u64>,
    #[builder(default, setter(into))]
    length: Option<u64>,
}

pub type GetObjectBldr =
    GetObjectBuilder<((MinioClient,), (), (), (), (String,), (String,), (), (), ())>;

impl S3Api for GetObject {
    type S3Response = GetObjectResponse;
}

impl GetObject {
    fn get_range_header_value(&self) -> Option<String> {
        let (offset, length) = match self.length {
            Some(_) => (Some(self.offset.unwrap_or(0_u64)), self.length),
            None => (self.offset, None),
        };

        let o = offset?;
        let mut range = format!("bytes={o}-");
        if let Some(l) = length {
            range.push_str(&(o + l.max(1) - 1).to_string());
        }
        Some(range)
    }
}

impl ToS3Request for GetObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.clone().unwrap_or_default();
        if let Some(range) = self.get_range_header_value() {
            headers.add("Range", range);
        }

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_version(self.version_id);

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
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
    fn range_header() {
        let req = client()
            .get_object("in-bucket", "hello.txt")
            .offset(5_u64)
            .length(10_u64)
            .build();
        assert_eq!(req.get_range_header_value().as_deref(), Some("bytes=5-14"));

        let req = client().get_object("in-bucket", "hello.txt").offset(5_u64).build();
        assert_eq!(req.get_range_header_value().as_deref(), Some("bytes=5-"));

        let req = client().get_object("in-bucket", "hello.txt").build();
        assert_eq!(req.get_range_header_value(), None);
    }

    #[test]
    fn rejects_invalid_names() {
        let err = client()
            .get_object("In_Bucket", "hello.txt")
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidBucketName { .. }));

        let err = client()
            .get_object("in-bucket", "")
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidObjectName(_)));
    }

    #[test]
    fn builds_request() {
        let req = client()
            .get_object("in-bucket", "docs/hello.txt")
            .version_id("v1".to_string())
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.bucket(), Some("in-bucket"));
        assert_eq!(req.object(), Some("docs/hello.txt"));
        assert_eq!(
            req.query_params.get("versionId").map(String::as_str),
            Some("v1")
        );
    }
}
