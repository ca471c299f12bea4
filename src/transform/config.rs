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

/// Environment variable naming the bucket transformed objects are written to.
pub const DESTINATION_BUCKET_ENV: &str = "DESTINATION_BUCKET";

/// Configuration of a [`TransformHandler`](crate::transform::TransformHandler).
///
/// Resolved once by the host and injected into the handler; the handler
/// never reads the process environment itself. A missing destination bucket
/// is accepted here and reported on every invocation as a configuration error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformConfig {
    destination_bucket: Option<String>,
}

impl TransformConfig {
    pub fn new<S: Into<String>>(destination_bucket: S) -> Self {
        Self {
            destination_bucket: Some(destination_bucket.into()),
        }
    }

    /// Resolves the configuration through `lookup`, which returns the value
    /// of an environment variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            destination_bucket: lookup(DESTINATION_BUCKET_ENV),
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Returns the destination bucket, or a configuration error when it is
    /// unset or empty.
    pub fn destination_bucket(&self) -> Result<&str, TransformError> {
        match self.destination_bucket.as_deref() {
            Some(bucket) if !bucket.trim().is_empty() => Ok(bucket),
            _ => Err(TransformError::Configuration(format!(
                "{DESTINATION_BUCKET_ENV} environment variable is not set"
            ))),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.destination_bucket().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([(DESTINATION_BUCKET_ENV, "out-bucket")]);
        let config = TransformConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.destination_bucket().unwrap(), "out-bucket");
        assert!(config.is_complete());
        assert_eq!(config, TransformConfig::new("out-bucket"));
    }

    #[test]
    fn missing_or_empty_destination() {
        let config = TransformConfig::from_lookup(|_| None);
        let err = config.destination_bucket().unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
        assert!(err.to_string().contains(DESTINATION_BUCKET_ENV));

        let config = TransformConfig::new("");
        assert!(!config.is_complete());
    }
}
