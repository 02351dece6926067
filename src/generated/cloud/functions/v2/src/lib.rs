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


//! Google Cloud Client Libraries for Rust - Cloud Functions API (v2)
//!
//! This crate contains traits, types, and functions to interact with the
//! [Cloud Functions API] over gRPC.
//!
//! The main types to work with this crate are the clients:
//!
//! * [FunctionService](client::FunctionService)
//! * [blocking::FunctionService] for synchronous code
//!
//! [cloud functions api]: https://cloud.google.com/functions

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Traits to mock the clients in this library.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

pub mod blocking;

pub(crate) mod tracing;

pub(crate) mod transport;
