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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 hash of an empty payload
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Maximum length in bytes of an object key
pub const MAX_OBJECT_NAME_LENGTH: usize = 1024;

/// Encodes bytes as lowercase hex
pub fn hex_encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S.%3fZ") {
            Ok(d) => d,
            _ => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")?,
        },
        Utc,
    ))
}

/// Serde adapter for the `eventTime` field of notification records.
/// A missing or `null` value deserializes to the Unix epoch.
pub mod aws_date_format {
    use super::{UtcTime, from_iso8601utc, to_iso8601utc};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &UtcTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_iso8601utc(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<UtcTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(s) = Option::<String>::deserialize(deserializer)? else {
            return Ok(UtcTime::default());
        };
        from_iso8601utc(&s)
            .or_else(|_| DateTime::parse_from_rfc3339(&s).map(|d| d.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

/// RFC 3986 unreserved characters are left as is
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'/');

/// Percent-encodes a query key or value
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).collect()
}

/// Percent-encodes an object key for use in a request path; `/` is kept
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Returns the text of the child element `tag`, or an empty string
pub fn get_text_default(element: &Element, tag: &str) -> String {
    element
        .get_child(tag)
        .and_then(|v| v.get_text())
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    for token in value.split('.') {
        if token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
        {
            return false;
        }
    }

    true
}

/// Validates given bucket name
pub fn check_bucket_name(bucket_name: &str, strict: bool) -> Result<(), ValidationErr> {
    lazy_static! {
        static ref VALID_IP_ADDRESS: Regex =
            Regex::new(r"^(\d+\.){3}\d+$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    let invalid = |cause: &str| ValidationErr::InvalidBucketName {
        name: bucket_name.to_string(),
        cause: cause.to_string(),
    };

    if bucket_name.trim().is_empty() {
        return Err(invalid("bucket name cannot be empty"));
    }
    if bucket_name.len() < 3 {
        return Err(invalid("bucket name cannot be less than 3 characters"));
    }
    if bucket_name.len() > 63 {
        return Err(invalid("bucket name cannot be greater than 63 characters"));
    }
    if VALID_IP_ADDRESS.is_match(bucket_name) {
        return Err(invalid("bucket name cannot be an IP address"));
    }
    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(invalid(
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        ));
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return Err(invalid("bucket name does not follow S3 standards strictly"));
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(invalid("bucket name does not follow S3 standards"));
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > MAX_OBJECT_NAME_LENGTH {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name cannot be greater than {MAX_OBJECT_NAME_LENGTH} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sha256_hash() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
        assert_eq!(
            sha256_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_dates() {
        let date = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(to_signer_date(date), "20130524");
        assert_eq!(to_amz_date(date), "20130524T000000Z");
        assert_eq!(to_iso8601utc(date), "2013-05-24T00:00:00.000Z");
        assert_eq!(from_iso8601utc("2013-05-24T00:00:00.000Z").unwrap(), date);
        assert_eq!(from_iso8601utc("2013-05-24T00:00:00Z").unwrap(), date);
    }

    #[test]
    fn test_aws_date_format() {
        #[derive(serde::Deserialize)]
        struct Event {
            #[serde(with = "aws_date_format")]
            time: UtcTime,
        }

        let date = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        let e: Event = serde_json::from_str(r#"{"time": "2013-05-24T00:00:00.000Z"}"#).unwrap();
        assert_eq!(e.time, date);
        let e: Event = serde_json::from_str(r#"{"time": "2013-05-24T02:00:00.000000+02:00"}"#).unwrap();
        assert_eq!(e.time, date);
        assert!(serde_json::from_str::<Event>(r#"{"time": "yesterday"}"#).is_err());

        let e: Event = serde_json::from_str(r#"{"time": null}"#).unwrap();
        assert_eq!(e.time, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("s3:ObjectCreated:*"), "s3%3AObjectCreated%3A%2A");
        assert_eq!(url_encode("a b~c"), "a%20b~c");
        assert_eq!(urlencode_object_key("dir/my file.txt"), "dir/my%20file.txt");
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("in-bucket", true).is_ok());
        assert!(check_bucket_name("my.bucket.01", true).is_ok());
        assert!(check_bucket_name("", true).is_err());
        assert!(check_bucket_name("ab", true).is_err());
        assert!(check_bucket_name(&"a".repeat(64), true).is_err());
        assert!(check_bucket_name("192.168.1.1", true).is_err());
        assert!(check_bucket_name("my..bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", false).is_ok());
        assert!(check_bucket_name("-bucket", false).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("hello.txt").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name(&"k".repeat(MAX_OBJECT_NAME_LENGTH)).is_ok());
        assert!(check_object_name(&"k".repeat(MAX_OBJECT_NAME_LENGTH + 1)).is_err());
    }
}
