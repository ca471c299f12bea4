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

//! S3 client to perform object operations.

use bytes::Bytes;
use http::HeaderMap;
pub use http::Method;
pub use reqwest::Response;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use crate::s3::creds::Provider;
use crate::s3::error::{Error, ErrorResponse, NetworkError, S3ServerError, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{EMPTY_SHA256, sha256_hash, to_amz_date, utc_now};

use crate::s3::signer::sign_v4_s3;

mod get_object;
mod listen_bucket_notification;
mod put_object;

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug)]
pub struct MinioClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ignore_cert_check: Option<bool>,
    timeout: Option<Duration>,
}

impl MinioClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ignore_cert_check: None,
            timeout: None,
        }
    }

    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Timeout for a whole request. Not applied to
    /// [`listen_bucket_notification`](MinioClient::listen_bucket_notification) streams
    /// when left unset.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MinioClient, Error> {
        let mut builder = reqwest::Client::builder().no_gzip();

        let user_agent = String::from("MinIO (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") minio-transform/"
            + env!("CARGO_PKG_VERSION");
        builder = builder.user_agent(user_agent);

        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        Ok(MinioClient {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform object operations.
///
/// If credential provider is passed, all S3 operation requests are signed using
/// AWS Signature Version 4; else they are performed anonymously.
#[derive(Clone, Debug)]
pub struct MinioClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl MinioClient {
    /// Returns a S3 client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_transform::s3::client::MinioClient;
    /// use minio_transform::s3::creds::StaticProvider;
    /// use minio_transform::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "play.min.io".parse().unwrap();
    /// let static_provider = StaticProvider::new(
    ///     "Q3AM3UQ867SPQQA43P2F",
    ///     "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
    ///     None,
    /// );
    /// let client = MinioClient::new(base_url, Some(static_provider)).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        MinioClientBuilder::new(base_url).provider(provider).build()
    }

    /// Returns whether this client uses an AWS host.
    pub fn is_aws_host(&self) -> bool {
        self.shared.base_url.is_aws_host()
    }

    /// Returns the base URL this client sends requests to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Signs and sends a request; non-2xx responses become [`S3ServerError`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket_name, object_name)?;

        headers.add(HOST, url.host_header_value());

        let sha256: String = match method {
            Method::PUT | Method::POST => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.add(CONTENT_TYPE, "application/octet-stream");
                }
                let len = body.as_ref().map_or(0, |b| b.len());
                headers.add(CONTENT_LENGTH, len.to_string());
                match body {
                    None => EMPTY_SHA256.into(),
                    Some(ref v) => sha256_hash(v),
                }
            }
            _ => EMPTY_SHA256.into(),
        };
        headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_s3(
                &method,
                &url.path,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }

        log::debug!("{method} {url}");

        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if matches!(method, Method::PUT | Method::POST) {
            req = req.body(body.unwrap_or_default());
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let mut resp = resp;
        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;

        let e = create_error_response(
            body,
            status_code,
            &headers,
            &method,
            &url.path,
            bucket_name,
            object_name,
        )?;
        Err(Error::S3Server(S3ServerError::S3Error(Box::new(e))))
    }
}

fn create_error_response(
    body: Bytes,
    status_code: u16,
    headers: &HeaderMap,
    method: &Method,
    resource: &str,
    bucket_name: Option<&str>,
    object_name: Option<&str>,
) -> Result<ErrorResponse, Error> {
    let is_xml = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_lowercase().contains("application/xml"));

    if !body.is_empty() && is_xml {
        return Ok(ErrorResponse::parse(body, status_code)?);
    }

    if !body.is_empty() || *method == Method::HEAD {
        log::debug!(
            "{method} {resource} failed with status {status_code} and a non-XML body of {} bytes",
            body.len()
        );
    }

    let mut resp = ErrorResponse::from_status(status_code, resource, bucket_name, object_name);
    resp.request_id = header_text(headers, X_AMZ_REQUEST_ID);
    resp.host_id = header_text(headers, X_AMZ_ID_2);
    if status_code >= 500 && !body.is_empty() {
        // surface the raw server message when it is not an S3 error document
        let text = String::from_utf8_lossy(&body).trim().to_string();
        return Err(S3ServerError::HttpError(status_code, text).into());
    }
    Ok(resp)
}

fn header_text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
