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

//! Responses for [`MinioClient`](crate::s3::client::MinioClient) APIs

pub mod a_response_traits;
mod get_object;
mod listen_bucket_notification;
mod put_object;

pub use get_object::GetObjectResponse;
pub use listen_bucket_notification::{ListenBucketNotificationResponse, NotificationLineParser};
pub use put_object::PutObjectContentResponse;
