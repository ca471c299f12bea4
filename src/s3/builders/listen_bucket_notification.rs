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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::ListenBucketNotificationResponse;
use crate::s3::types::{NotificationRecords, S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use futures_util::Stream;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the MinIO ListenBucketNotification extension API.
///
/// This struct constructs the parameters required for the
/// [`MinioClient::listen_bucket_notification`](crate::s3::client::MinioClient::listen_bucket_notification) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListenBucketNotification {
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
    #[builder(default, setter(into))]
    prefix: Option<String>,
    #[builder(default, setter(into))]
    suffix: Option<String>,
    /// Event types to listen to; created, removed and accessed events when unset
    #[builder(default, setter(into))]
    events: Option<Vec<String>>,
}

pub type ListenBucketNotificationBldr =
    ListenBucketNotificationBuilder<((MinioClient,), (), (), (), (String,), (), (), ())>;

impl S3Api for ListenBucketNotification {
    type S3Response = (
        ListenBucketNotificationResponse,
        Box<dyn Stream<Item = Result<NotificationRecords, Error>> + Unpin + Send>,
    );
}

impl ToS3Request for ListenBucketNotification {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        if self.client.is_aws_host() {
            return Err(ValidationErr::UnsupportedApi(
                "ListenBucketNotification".into(),
            ));
        }

        check_bucket_name(&self.bucket, true)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if let Some(v) = self.prefix {
            query_params.add("prefix", v);
        }
        if let Some(v) = self.suffix {
            query_params.add("suffix", v);
        }
        match self.events {
            Some(events) => {
                for e in events {
                    query_params.add("events", e);
                }
            }
            None => {
                query_params.add("events", "s3:ObjectCreated:*");
                query_params.add("events", "s3:ObjectRemoved:*");
                query_params.add("events", "s3:ObjectAccessed:*");
            }
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;
    use crate::s3::http::BaseUrl;

    fn client(url: &str) -> MinioClient {
        let base_url: BaseUrl = url.parse().unwrap();
        MinioClient::new::<StaticProvider>(base_url, None).unwrap()
    }

    #[test]
    fn default_events() {
        let req = client("http://localhost:9000")
            .listen_bucket_notification("in-bucket")
            .build()
            .to_s3request()
            .unwrap();
        let events = req.query_params.get_vec("events").unwrap();
        assert_eq!(
            events,
            &vec![
                "s3:ObjectCreated:*".to_string(),
                "s3:ObjectRemoved:*".to_string(),
                "s3:ObjectAccessed:*".to_string(),
            ]
        );
    }

    #[test]
    fn explicit_events_and_filters() {
        let req = client("http://localhost:9000")
            .listen_bucket_notification("in-bucket")
            .events(vec!["s3:ObjectCreated:*".to_string()])
            .suffix(".txt".to_string())
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.query_params.get_vec("events").unwrap().len(), 1);
        assert_eq!(
            req.query_params.get("suffix").map(String::as_str),
            Some(".txt")
        );
        assert!(req.query_params.get("prefix").is_none());
    }

    #[test]
    fn unsupported_on_aws() {
        let err = client("https://s3.amazonaws.com")
            .listen_bucket_notification("in-bucket")
            .build()
            .to_s3request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::UnsupportedApi(_)));
    }
}
