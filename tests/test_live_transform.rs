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

use bytes::Bytes;
use minio_transform::s3::types::S3Api;
use minio_transform::transform::{ObjectStore, TransformConfig, TransformHandler};
use minio_transform_common::event::create_object_created_records;
use minio_transform_common::test_context::TestContext;
use minio_transform_common::utils::rand_object_name;
use std::sync::Arc;

/// Needs a running server and existing source and destination buckets.
#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
#[ignore]
async fn transform_on_live_server() {
    let ctx = TestContext::new_from_env();
    let object_name = format!("{}.txt", rand_object_name());

    ctx.client
        .put_object_content(&ctx.source_bucket, &object_name, "hello, world")
        .build()
        .send()
        .await
        .unwrap();

    let handler = TransformHandler::new(
        Arc::new(ctx.client.clone()),
        TransformConfig::new(ctx.destination_bucket.as_str()),
    );
    let resp = handler
        .handle(&create_object_created_records(&ctx.source_bucket, &object_name))
        .await;
    assert!(resp.is_success(), "{}", resp.body);

    let got: Bytes = ctx
        .client
        .get(&ctx.destination_bucket, &format!("{object_name}-formatted"))
        .await
        .unwrap();
    assert_eq!(got, "HELLO, WORLD");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
#[ignore]
async fn missing_object_on_live_server() {
    let ctx = TestContext::new_from_env();
    let err = ctx
        .client
        .get(&ctx.source_bucket, &rand_object_name())
        .await
        .unwrap_err();
    assert!(err.is_no_such_key(), "{err}");
}
