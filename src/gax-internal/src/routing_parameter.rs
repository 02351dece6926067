// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers to build the `x-goog-request-params` header.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unencoded in routing values, `/` separates resource name
/// segments and stays readable.
const ROUTING_VALUE: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Format a routing parameter key value pair.
///
/// # Example
/// ```
/// # use google_cloud_functions_gax_internal::routing_parameter::format;
/// let p = format("name", "projects/p/locations/us central1/functions/f");
/// assert_eq!(p, "name=projects/p/locations/us%20central1/functions/f");
/// ```
pub fn format(key: &str, value: &str) -> String {
    format!("{key}={}", utf8_percent_encode(value, &ROUTING_VALUE))
}

/// Joins several routing parameters, skipping empty values.
pub fn join<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    params
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format(k, v))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("projects/p/locations/-", "name=projects/p/locations/-")]
    #[test_case("a b", "name=a%20b")]
    #[test_case("a&b=c", "name=a%26b%3Dc")]
    #[test_case("ünïcode", "name=%C3%BCn%C3%AFcode")]
    #[test_case("", "name=")]
    fn format_value(input: &str, want: &str) {
        assert_eq!(format("name", input), want);
    }

    #[test]
    fn join_params() {
        let got = join([("parent", "projects/p"), ("unused", ""), ("name", "f")]);
        assert_eq!(got, "parent=projects/p&name=f");
        assert_eq!(join([("parent", "")]), "");
    }
}
