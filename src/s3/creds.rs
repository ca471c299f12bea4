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

//! Credential providers

#[derive(Clone, Debug)]
/// Credentials contain access key, secret key and session token optionally
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

/// Provider trait to fetch credentials
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key, secret key and optional session token
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_transform::s3::creds::StaticProvider;
    /// let provider = StaticProvider::new("minioadmin", "minio123", None);
    /// ```
    pub fn new(access_key: &str, secret_key: &str, session_token: Option<&str>) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
                session_token: session_token.map(|v| v.to_string()),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

/// Credential provider backed by the environment of the hosting platform.
///
/// `MINIO_ACCESS_KEY` / `MINIO_SECRET_KEY` take precedence over
/// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`; `AWS_SESSION_TOKEN` is optional.
/// Variables are read on every [`fetch`](Provider::fetch), so rotated
/// credentials are picked up without restarting the process.
#[derive(Clone, Debug, Default)]
pub struct EnvProvider;

impl EnvProvider {
    /// Returns true if an access key and a secret key are both present.
    pub fn is_configured() -> bool {
        Self::lookup(&["MINIO_ACCESS_KEY", "AWS_ACCESS_KEY_ID"]).is_some()
            && Self::lookup(&["MINIO_SECRET_KEY", "AWS_SECRET_ACCESS_KEY"]).is_some()
    }

    fn lookup(names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|n| std::env::var(n).ok())
            .find(|v| !v.is_empty())
    }
}

impl Provider for EnvProvider {
    fn fetch(&self) -> Credentials {
        Credentials {
            access_key: Self::lookup(&["MINIO_ACCESS_KEY", "AWS_ACCESS_KEY_ID"])
                .unwrap_or_default(),
            secret_key: Self::lookup(&["MINIO_SECRET_KEY", "AWS_SECRET_ACCESS_KEY"])
                .unwrap_or_default(),
            session_token: Self::lookup(&["AWS_SESSION_TOKEN"]),
        }
    }
}
