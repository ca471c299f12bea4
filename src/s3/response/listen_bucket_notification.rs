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

use crate::impl_has_s3fields;
use crate::s3::error::{Error, NetworkError, ValidationErr};
use crate::s3::response::a_response_traits::{HasBucket, HasRegion};
use crate::s3::types::{FromS3Response, NotificationRecords, S3Request};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use http::HeaderMap;
use std::mem;

/// Response of
/// [listen_bucket_notification()](crate::s3::client::MinioClient::listen_bucket_notification)
/// API
#[derive(Clone, Debug)]
pub struct ListenBucketNotificationResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes, // Note: not used
}

impl_has_s3fields!(ListenBucketNotificationResponse);

impl HasBucket for ListenBucketNotificationResponse {}
impl HasRegion for ListenBucketNotificationResponse {}

/// Splits a chunked byte stream into newline-delimited JSON documents of
/// [`NotificationRecords`].
///
/// Blank lines, including the whitespace keep-alives sent by the server, are
/// skipped. A document split across chunks is held back until its newline
/// arrives. A line that fails to parse is reported in place and consumed, so
/// the documents after it are still delivered.
#[derive(Debug, Default)]
pub struct NotificationLineParser {
    buf: Vec<u8>,
}

impl NotificationLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every line completed by it, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<NotificationRecords, ValidationErr>> {
        self.buf.extend_from_slice(chunk);

        let mut parsed = Vec::new();
        let mut cursor = 0;
        while let Some(pos) = self.buf[cursor..].iter().position(|&b| b == b'\n') {
            let end = cursor + pos;
            if let Some(line) = parse_line(&self.buf[cursor..end]) {
                parsed.push(line);
            }
            cursor = end + 1;
        }

        self.buf.drain(..cursor);
        parsed
    }

    /// Parses whatever remains once the stream has ended.
    pub fn finish(self) -> Option<Result<NotificationRecords, ValidationErr>> {
        parse_line(&self.buf)
    }
}

fn parse_line(line: &[u8]) -> Option<Result<NotificationRecords, ValidationErr>> {
    let line = match std::str::from_utf8(line) {
        Ok(v) => v.trim(),
        Err(e) => return Some(Err(e.into())),
    };
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line).map_err(ValidationErr::from))
}

#[async_trait::async_trait]
impl FromS3Response
    for (
        ListenBucketNotificationResponse,
        Box<dyn Stream<Item = Result<NotificationRecords, Error>> + Unpin + Send>,
    )
{
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;

        let headers: HeaderMap = mem::take(resp.headers_mut());
        let mut byte_stream = resp.bytes_stream();

        // Parse failures are yielded and the stream goes on; a transport
        // failure is yielded last.
        let record_stream = Box::pin(async_stream::stream! {
            let mut parser = NotificationLineParser::new();

            while let Some(chunk) = byte_stream.next().await {
                let chunk = match chunk {
                    Ok(v) => v,
                    Err(e) => {
                        yield Err(Error::from(NetworkError::from(e)));
                        return;
                    }
                };
                for records in parser.push(&chunk) {
                    yield records.map_err(Error::from);
                }
            }

            if let Some(records) = parser.finish() {
                yield records.map_err(Error::from);
            }
        });

        Ok((
            ListenBucketNotificationResponse {
                request,
                headers,
                body: Bytes::new(),
            },
            Box::new(record_stream),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = r#"{"EventName":"s3:ObjectCreated:Put","Key":"in-bucket/hello.txt","Records":[{"eventName":"s3:ObjectCreated:Put","s3":{"bucket":{"name":"in-bucket"},"object":{"key":"hello.txt","size":11}}}]}"#;

    fn keys(parsed: &[Result<NotificationRecords, ValidationErr>]) -> Vec<Option<&str>> {
        parsed
            .iter()
            .map(|r| r.as_ref().ok().map(|v| v.records[0].s3.object.key.as_str()))
            .collect()
    }

    #[test]
    fn skips_keep_alive_lines() {
        let mut parser = NotificationLineParser::new();
        let input = format!(" \n\n{LINE}\n \n");
        let parsed = parser.push(input.as_bytes());
        assert_eq!(keys(&parsed), [Some("hello.txt")]);
        assert!(parser.finish().is_none());
    }

    #[test]
    fn joins_documents_split_across_chunks() {
        let mut parser = NotificationLineParser::new();
        let (head, tail) = LINE.split_at(40);

        assert!(parser.push(head.as_bytes()).is_empty());
        let parsed = parser.push(format!("{tail}\n{LINE}\n").as_bytes());
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed[1].as_ref().unwrap().records[0].s3.bucket.name,
            "in-bucket"
        );
    }

    #[test]
    fn trailing_document_without_newline() {
        let mut parser = NotificationLineParser::new();
        assert!(parser.push(LINE.as_bytes()).is_empty());
        let last = parser.finish().unwrap().unwrap();
        assert_eq!(last.records.len(), 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut parser = NotificationLineParser::new();
        let parsed = parser.push(b"{not json}\n");
        assert_eq!(parsed.len(), 1);
        assert!(matches!(parsed[0], Err(ValidationErr::JsonError(_))));
    }

    #[test]
    fn invalid_line_between_valid_lines() {
        let mut parser = NotificationLineParser::new();

        let parsed = parser.push(format!("{LINE}\n{{bad}}\n").as_bytes());
        assert_eq!(keys(&parsed), [Some("hello.txt"), None]);
        assert!(matches!(parsed[1], Err(ValidationErr::JsonError(_))));

        let parsed = parser.push(format!("{LINE}\n").as_bytes());
        assert_eq!(keys(&parsed), [Some("hello.txt")]);

        let parsed = parser.push(&[0xff, 0xfe, b'\n']);
        assert!(matches!(parsed[..], [Err(ValidationErr::Utf8Error(_))]));
        let parsed = parser.push(format!("{LINE}\n").as_bytes());
        assert_eq!(keys(&parsed), [Some("hello.txt")]);
        assert!(parser.finish().is_none());
    }
}
