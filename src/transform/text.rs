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

/// Suffix appended to the source key to form the destination key.
pub const FORMATTED_SUFFIX: &str = "-formatted";

/// Uppercases `text` with the full Unicode case mapping, independent of locale.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Key under which the transformed object is written.
pub fn destination_key(source_key: &str) -> String {
    format!("{source_key}{FORMATTED_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_examples() {
        assert_eq!(uppercase("hello world"), "HELLO WORLD");
        assert_eq!(uppercase("Hello, World! 123\n"), "HELLO, WORLD! 123\n");
        assert_eq!(uppercase("straße"), "STRASSE");
        assert_eq!(uppercase("ça va"), "ÇA VA");
        assert_eq!(uppercase(""), "");
    }

    #[test]
    fn destination_key_examples() {
        assert_eq!(destination_key("hello.txt"), "hello.txt-formatted");
        assert_eq!(destination_key("dir/a.b.txt"), "dir/a.b.txt-formatted");
        assert_eq!(
            destination_key("hello.txt-formatted"),
            "hello.txt-formatted-formatted"
        );
    }

    quickcheck! {
        fn ascii_uppercase_matches(s: String) -> bool {
            let s: String = s.chars().filter(char::is_ascii).collect();
            uppercase(&s) == s.to_ascii_uppercase()
        }

        fn ascii_uppercase_is_idempotent(s: String) -> bool {
            let s: String = s.chars().filter(char::is_ascii).collect();
            let once = uppercase(&s);
            uppercase(&once) == once
        }

        fn destination_key_appends_suffix(key: String) -> bool {
            let dest = destination_key(&key);
            dest.starts_with(&key)
                && dest.ends_with(FORMATTED_SUFFIX)
                && dest.len() == key.len() + FORMATTED_SUFFIX.len()
        }
    }
}
