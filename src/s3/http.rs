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

//! HTTP URL definitions

use crate::s3::client::DEFAULT_REGION;
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{match_hostname, urlencode_object_key};
use http::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            write!(f, "{}:{}", self.host, self.port)?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Base URL of an S3 service; requests use path-style addressing
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    pub region: String,
}

impl Default for BaseUrl {
    fn default() -> Self {
        BaseUrl {
            https: false,
            host: "127.0.0.1".into(),
            port: 9000,
            region: String::new(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Accepts `scheme://host[:port]` and `host[:port]`; a missing scheme means HTTPS.
    /// A trailing `/` is allowed, any other path or a query is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_transform::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// assert!(!base_url.https);
    /// assert_eq!(base_url.host(), "localhost");
    /// assert_eq!(base_url.port(), 9000);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let url = if s.contains("://") {
            s.parse::<Uri>()?
        } else {
            format!("https://{s}").parse::<Uri>()?
        };

        let https = match url.scheme_str() {
            Some("http") => false,
            Some("https") => true,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let mut host = match url.host() {
            Some(h) => h,
            None => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let bare = host.trim_start_matches('[').trim_end_matches(']');
        if bare.parse::<std::net::IpAddr>().is_err() && !match_hostname(host) {
            return Err(ValidationErr::InvalidBaseUrl(format!("invalid host {host}")));
        }

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            region: String::new(),
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port of the service; `0` means the scheme default
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Region used for signing; the configured region or [`DEFAULT_REGION`]
    pub fn signing_region(&self) -> &str {
        if self.region.is_empty() {
            DEFAULT_REGION
        } else {
            &self.region
        }
    }

    /// Returns true if the endpoint is Amazon AWS S3
    pub fn is_aws_host(&self) -> bool {
        let host = self.host.to_lowercase();
        host.ends_with(".amazonaws.com") || host.ends_with(".amazonaws.com.cn")
    }

    /// Builds the path-style URL of a bucket or object
    pub fn build_url(
        &self,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        if object_name.is_some() && bucket_name.is_none() {
            return Err(ValidationErr::UrlBuildError(String::from(
                "empty bucket name provided for object name",
            )));
        }

        let mut path = String::from("/");
        if let Some(b) = bucket_name {
            path.push_str(b);
            if let Some(o) = object_name {
                path.push('/');
                path.push_str(&urlencode_object_key(o));
            }
        }

        Ok(Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url() {
        let url: BaseUrl = "http://localhost:9000".parse().unwrap();
        assert!(!url.https);
        assert_eq!(url.host(), "localhost");
        assert_eq!(url.port(), 9000);
        assert_eq!(url.signing_region(), DEFAULT_REGION);

        let url: BaseUrl = "play.min.io".parse().unwrap();
        assert!(url.https);
        assert_eq!(url.port(), 0);

        let url: BaseUrl = "https://s3.amazonaws.com:443/".parse().unwrap();
        assert!(url.is_aws_host());
        assert_eq!(url.port(), 0);

        assert!("ftp://localhost".parse::<BaseUrl>().is_err());
        assert!("http://localhost:9000/bucket".parse::<BaseUrl>().is_err());
        assert!("http://localhost:9000/?a=b".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn build_path_style_url() {
        let base: BaseUrl = "http://localhost:9000".parse().unwrap();
        let url = base
            .build_url(&Multimap::new(), Some("in-bucket"), Some("dir/hello world.txt"))
            .unwrap();
        assert_eq!(url.path, "/in-bucket/dir/hello%20world.txt");
        assert_eq!(url.host_header_value(), "localhost:9000");
        assert_eq!(
            url.to_string(),
            "http://localhost:9000/in-bucket/dir/hello%20world.txt"
        );

        let mut query = Multimap::new();
        query.add("events", "s3:ObjectCreated:*");
        let url = base.build_url(&query, Some("in-bucket"), None).unwrap();
        assert_eq!(
            url.to_string(),
            "http://localhost:9000/in-bucket?events=s3%3AObjectCreated%3A%2A"
        );

        assert!(base.build_url(&Multimap::new(), None, Some("k")).is_err());
    }
}
