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

//! Messages from the `google.longrunning` package.
//!
//! The clients return [Operation] as an opaque handle. They do not poll it.

use crate::rpc::Status;

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    /// The server-assigned name, unique within the service that returns it.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Service-specific metadata associated with the operation.
    #[prost(message, optional, tag = "2")]
    pub metadata: Option<prost_types::Any>,
    /// If `false`, the operation is still in progress.
    #[prost(bool, tag = "3")]
    pub done: bool,
    /// The operation result, only set when `done` is `true`.
    #[prost(oneof = "operation::Result", tags = "4, 5")]
    pub result: Option<operation::Result>,
}

/// Nested message and enum types in `Operation`.
pub mod operation {
    /// The operation result.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        /// The error result of the operation in case of failure or
        /// cancellation.
        #[prost(message, tag = "4")]
        Error(super::Status),
        /// The normal response of the operation in case of success.
        #[prost(message, tag = "5")]
        Response(prost_types::Any),
    }
}

impl Operation {
    /// The error result, if the operation failed.
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(operation::Result::Error(v)) => Some(v),
            _ => None,
        }
    }

    /// The packed response, if the operation succeeded.
    pub fn response(&self) -> Option<&prost_types::Any> {
        match &self.result {
            Some(operation::Result::Response(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets `result` to an error, replacing any previous result.
    pub fn set_error<T: Into<Status>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Error(v.into()));
        self
    }

    /// Sets `result` to a response, replacing any previous result.
    pub fn set_response<T: Into<prost_types::Any>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Response(v.into()));
        self
    }
}

crate::impl_name!(Operation, "google.longrunning", "Operation");
