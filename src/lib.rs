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

//! # MinIO object transform (`minio-transform`)
//!
//! Event-triggered transform for MinIO and Amazon S3-compatible object storage:
//! on notification of a newly created object, the object is fetched, its text
//! content is uppercased and the result is written to a destination bucket under
//! the key `{source_key}-formatted`.
//!
//! The crate has two halves:
//! - [`s3`]: a small S3 client (Signature V4, typed request builders, typed responses,
//!   bucket notification records) used as the storage backend.
//! - [`transform`]: the [`TransformHandler`](transform::TransformHandler), its configuration,
//!   its error taxonomy and the [`ObjectStore`](transform::ObjectStore) seam it calls.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use minio_transform::s3::MinioClient;
//! use minio_transform::s3::creds::StaticProvider;
//! use minio_transform::s3::http::BaseUrl;
//! use minio_transform::transform::{TransformConfig, TransformHandler};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
//!     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
//!     let client = MinioClient::new(base_url, Some(provider)).unwrap();
//!
//!     let handler = TransformHandler::new(Arc::new(client), TransformConfig::from_env());
//!     let event = std::fs::read("event.json").unwrap();
//!     let response = handler.handle_payload(&event).await;
//!     println!("{}: {}", response.status_code, response.body);
//! }
//! ```
//!
//! ## Design
//! - Each S3 operation has a request builder implementing [`s3::types::ToS3Request`] and
//!   [`s3::types::S3Api`], with a response implementing [`s3::types::FromS3Response`]
//! - The handler never panics on malformed input; every failure becomes a `500` response

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;
pub mod transform;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
