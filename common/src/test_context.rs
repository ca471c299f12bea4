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

use minio_transform::s3::{MinioClient, MinioClientBuilder};
use minio_transform::s3::creds::StaticProvider;
use minio_transform::s3::http::BaseUrl;

/// Connection to a live server, configured from the environment.
///
/// Used by tests marked `#[ignore]`; `SOURCE_BUCKET` and `DESTINATION_BUCKET`
/// must name existing buckets.
#[derive(Clone)]
pub struct TestContext {
    pub client: MinioClient,
    pub base_url: BaseUrl,
    pub source_bucket: String,
    pub destination_bucket: String,
}

impl TestContext {
    pub fn new_from_env() -> Self {
        const DEFAULT_SERVER_ENDPOINT: &str = "http://localhost:9000";
        const DEFAULT_ACCESS_KEY: &str = "minioadmin";
        const DEFAULT_SECRET_KEY: &str = "minioadmin";
        const DEFAULT_IGNORE_CERT_CHECK: &str = "false";
        const DEFAULT_SERVER_REGION: &str = "";
        const DEFAULT_SOURCE_BUCKET: &str = "transform-source";
        const DEFAULT_DESTINATION_BUCKET: &str = "transform-destination";

        let host: String =
            std::env::var("SERVER_ENDPOINT").unwrap_or(DEFAULT_SERVER_ENDPOINT.to_string());
        log::debug!("SERVER_ENDPOINT={host}");
        let access_key: String =
            std::env::var("ACCESS_KEY").unwrap_or(DEFAULT_ACCESS_KEY.to_string());
        log::debug!("ACCESS_KEY={access_key}");
        let secret_key: String =
            std::env::var("SECRET_KEY").unwrap_or(DEFAULT_SECRET_KEY.to_string());
        log::debug!("SECRET_KEY=*****");
        let ignore_cert_check: bool = std::env::var("IGNORE_CERT_CHECK")
            .unwrap_or(DEFAULT_IGNORE_CERT_CHECK.to_string())
            .parse()
            .unwrap_or(true);
        log::debug!("IGNORE_CERT_CHECK={ignore_cert_check}");
        let region: String =
            std::env::var("SERVER_REGION").unwrap_or(DEFAULT_SERVER_REGION.to_string());
        log::debug!("SERVER_REGION={region:?}");

        let mut base_url: BaseUrl = host.parse().unwrap();
        base_url.region = region;

        let static_provider = StaticProvider::new(&access_key, &secret_key, None);
        let client = MinioClientBuilder::new(base_url.clone())
            .provider(Some(static_provider))
            .ignore_cert_check(Some(ignore_cert_check))
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            source_bucket: std::env::var("SOURCE_BUCKET")
                .unwrap_or(DEFAULT_SOURCE_BUCKET.to_string()),
            destination_bucket: std::env::var("DESTINATION_BUCKET")
                .unwrap_or(DEFAULT_DESTINATION_BUCKET.to_string()),
        }
    }
}
