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

//! Protocol buffer messages shared by the Cloud Functions clients.
//!
//! These are the subset of `google.rpc`, `google.longrunning`, `google.type`
//! and `google.iam.v1` used by the Cloud Functions API. The field tags match
//! the published `.proto` files, so the messages are wire compatible with any
//! other implementation.

pub mod gtype;
pub mod iam;
pub mod longrunning;
pub mod rpc;

/// Implements [prost::Name] for a message.
///
/// The type URL uses the `type.googleapis.com` prefix, as expected by
/// `google.protobuf.Any` fields in Google APIs.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_name {
    ($type:ty, $package:literal, $name:literal) => {
        impl ::prost::Name for $type {
            const NAME: &'static str = $name;
            const PACKAGE: &'static str = $package;
            fn full_name() -> ::std::string::String {
                ::std::format!("{}.{}", $package, $name)
            }
            fn type_url() -> ::std::string::String {
                ::std::format!("type.googleapis.com/{}.{}", $package, $name)
            }
        }
    };
}
