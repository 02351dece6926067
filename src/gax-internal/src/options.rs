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

//! Configuration shared by the Cloud Functions clients.
//!
//! The builders in each service crate collect a [ClientConfig], the gRPC
//! transport and the tracing decorator read it back when the client is built.

pub use auth::credentials::Credentials;

/// The settings collected by a client builder.
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

/// Setting this variable to `true` wraps every client in the tracing stub.
pub const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Decides if a new client records a span and an event per RPC.
///
/// Either [ClientConfig::tracing] or [LOGGING_VAR] turns it on.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing || logging_requested(std::env::var(LOGGING_VAR).ok().as_deref())
}

// Only the exact value `true` counts, as the other Google Cloud libraries do.
fn logging_requested(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test_case(None, false)]
    #[test_case(Some(""), false)]
    #[test_case(Some("true"), true)]
    #[test_case(Some("TRUE"), false)]
    #[test_case(Some("1"), false)]
    #[test_case(Some("false"), false)]
    fn logging_values(value: Option<&str>, want: bool) {
        assert_eq!(logging_requested(value), want, "{value:?}");
    }

    #[test]
    #[serial_test::serial]
    fn builder_flag_without_environment() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let mut config = ClientConfig::default();
        assert!(!tracing_enabled(&config));
        config.tracing = true;
        assert!(tracing_enabled(&config));
    }

    #[test]
    #[serial_test::serial]
    fn environment_without_builder_flag() {
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        assert!(tracing_enabled(&ClientConfig::default()));
    }
}
