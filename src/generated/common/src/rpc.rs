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

//! Messages from the `google.rpc` package.

/// The `Status` type defines a logical error model. It is carried in the
/// `grpc-status-details-bin` trailer of failed RPCs and in the `error` field
/// of failed long-running operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    #[prost(int32, tag = "1")]
    pub code: i32,
    /// A developer-facing error message, in English.
    #[prost(string, tag = "2")]
    pub message: String,
    /// A list of messages that carry the error details.
    #[prost(message, repeated, tag = "3")]
    pub details: Vec<prost_types::Any>,
}

crate::impl_name!(Status, "google.rpc", "Status");
