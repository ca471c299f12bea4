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

//! Event-triggered object transform.
//!
//! A [`TransformHandler`] is invoked once per bucket notification. It reads the
//! object named by the first record of the notification, uppercases its UTF-8
//! text and writes the result to the configured destination bucket under
//! `{source_key}-formatted`. Every outcome is reported as a
//! [`TransformResponse`]; the handler itself never fails.

mod config;
mod error;
mod event;
mod handler;
mod response;
mod store;
mod text;

pub use config::{DESTINATION_BUCKET_ENV, TransformConfig};
pub use error::{ReadFailure, TransformError};
pub use event::Notification;
pub use handler::{TransformHandler, TransformOutcome};
pub use response::TransformResponse;
pub use store::{MemoryStore, ObjectStore};
pub use text::{FORMATTED_SUFFIX, destination_key, uppercase};
