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

//! Error definitions for S3 operations

use crate::s3::utils::get_text_default;
use bytes::{Buf, Bytes};
use std::fmt;
use thiserror::Error;
use xmltree::Element;

/// Error document returned by an S3 server for a failed request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
    pub bucket_name: String,
    pub object_name: String,
}

impl ErrorResponse {
    /// Parses the XML `<Error>` document of a failed S3 response.
    pub fn parse(body: Bytes, status_code: u16) -> Result<ErrorResponse, ValidationErr> {
        let root = Element::parse(body.reader())?;

        Ok(ErrorResponse {
            status_code,
            code: get_text_default(&root, "Code"),
            message: get_text_default(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_default(&root, "BucketName"),
            object_name: get_text_default(&root, "Key"),
        })
    }

    /// Builds an error response for a failure without an XML body, such as
    /// a `HEAD` request or a proxy rejecting the request.
    pub fn from_status(
        status_code: u16,
        resource: &str,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> ErrorResponse {
        let (code, message) = match status_code {
            301 | 307 => ("PermanentRedirect", "Moved Permanently"),
            400 => ("BadRequest", "Bad Request"),
            403 => ("AccessDenied", "Access Denied"),
            404 if object_name.is_some() => ("NoSuchKey", "Object does not exist"),
            404 if bucket_name.is_some() => ("NoSuchBucket", "Bucket does not exist"),
            404 => ("ResourceNotFound", "Request resource not found"),
            405 => ("MethodNotAllowed", "The specified method is not allowed"),
            409 => ("ResourceConflict", "Request resource conflicts"),
            501 => ("NotImplemented", "Not Implemented"),
            _ => ("ServerError", "Server failed to process the request"),
        };

        ErrorResponse {
            status_code,
            code: code.to_string(),
            message: message.to_string(),
            resource: resource.to_string(),
            bucket_name: bucket_name.unwrap_or_default().to_string(),
            object_name: object_name.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    /// S3 error code, e.g. `NoSuchKey`
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}, object_name: {}",
            self.code,
            self.message,
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name,
            self.object_name,
        )
    }
}

/// Errors detected on the client side, before or while handling a request
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {cause}")]
    InvalidBucketName { name: String, cause: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("object size {0} exceeds the single PUT limit of 5 GiB")]
    InvalidObjectSize(u64),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    UrlBuildError(String),

    #[error("{0} API is not supported in Amazon AWS S3")]
    UnsupportedApi(String),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Errors raised while talking to the server
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("network error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Errors reported by the server
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("s3 operation failed; {0}")]
    S3Error(Box<ErrorResponse>),

    #[error("server failed with HTTP status code {0}: {1}")]
    HttpError(u16, String),
}

impl S3ServerError {
    /// S3 error code if the server returned an error document
    pub fn code(&self) -> Option<&str> {
        match self {
            S3ServerError::S3Error(e) => Some(e.code()),
            S3ServerError::HttpError(..) => None,
        }
    }
}

/// Error definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    S3Server(#[from] S3ServerError),
}

impl Error {
    /// Returns true if the server reported that the requested object does not exist.
    pub fn is_no_such_key(&self) -> bool {
        matches!(self, Error::S3Server(e) if e.code() == Some("NoSuchKey"))
    }
}

impl From<ErrorResponse> for Error {
    fn from(value: ErrorResponse) -> Self {
        Error::S3Server(S3ServerError::S3Error(Box::new(value)))
    }
}
