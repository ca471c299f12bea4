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

use crate::transform::TransformError;
use serde::{Deserialize, Serialize};

/// Result of one handler invocation, as returned to the event source.
///
/// Serializes to `{"statusCode": 200, "body": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl TransformResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_ERROR: u16 = 500;

    pub fn success(destination_bucket: &str, destination_key: &str) -> Self {
        Self {
            status_code: Self::OK,
            body: format!("File processed and uploaded to {destination_bucket}/{destination_key}"),
        }
    }

    pub fn failure(err: &TransformError) -> Self {
        Self {
            status_code: Self::INTERNAL_ERROR,
            body: format!("Error processing file: {err}"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let resp = TransformResponse::success("out-bucket", "hello.txt-formatted");
        assert!(resp.is_success());
        assert_eq!(
            resp.to_json().unwrap(),
            r#"{"statusCode":200,"body":"File processed and uploaded to out-bucket/hello.txt-formatted"}"#
        );

        let resp = TransformResponse::failure(&TransformError::InvalidInput("notification contains no records".into()));
        assert!(!resp.is_success());
        let value: serde_json::Value = serde_json::from_str(&resp.to_json().unwrap()).unwrap();
        assert_eq!(value["statusCode"], 500);
        assert_eq!(
            value["body"],
            "Error processing file: invalid notification: notification contains no records"
        );
    }
}
