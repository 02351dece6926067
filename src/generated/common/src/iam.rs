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

//! Messages from the `google.iam` packages.

/// Messages from `google.iam.v1`.
pub mod v1 {
    /// An Identity and Access Management (IAM) policy, which specifies access
    /// controls for Google Cloud resources.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Policy {
        /// Specifies the format of the policy. Valid values are `0`, `1` and
        /// `3`.
        #[prost(int32, tag = "1")]
        pub version: i32,
        /// Associates a list of `members` with a `role`.
        #[prost(message, repeated, tag = "4")]
        pub bindings: Vec<Binding>,
        /// Specifies cloud audit logging configuration for this policy.
        #[prost(message, repeated, tag = "6")]
        pub audit_configs: Vec<AuditConfig>,
        /// Used for optimistic concurrency control, send back the value
        /// received from `GetIamPolicy` in `SetIamPolicy`.
        #[prost(bytes = "vec", tag = "3")]
        pub etag: Vec<u8>,
    }

    /// Associates `members` with a `role`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Binding {
        /// Role that is assigned to the list of `members`, e.g.
        /// `roles/viewer`.
        #[prost(string, tag = "1")]
        pub role: String,
        #[prost(string, repeated, tag = "2")]
        pub members: Vec<String>,
        /// The condition associated with this binding.
        #[prost(message, optional, tag = "3")]
        pub condition: Option<crate::gtype::Expr>,
    }

    impl Binding {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
            self.role = v.into();
            self
        }

        pub fn set_members<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.members = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// The audit logging configuration for a service.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AuditConfig {
        #[prost(string, tag = "1")]
        pub service: String,
        #[prost(message, repeated, tag = "3")]
        pub audit_log_configs: Vec<AuditLogConfig>,
    }

    /// Provides the configuration for logging a type of permissions.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AuditLogConfig {
        #[prost(enumeration = "audit_log_config::LogType", tag = "1")]
        pub log_type: i32,
        #[prost(string, repeated, tag = "2")]
        pub exempted_members: Vec<String>,
    }

    /// Nested message and enum types in `AuditLogConfig`.
    pub mod audit_log_config {
        /// The list of valid permission types for which logging can be
        /// configured.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum LogType {
            Unspecified = 0,
            AdminRead = 1,
            DataWrite = 2,
            DataRead = 3,
        }
    }

    /// Request message for `SetIamPolicy` method.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SetIamPolicyRequest {
        /// The resource for which the policy is being specified.
        #[prost(string, tag = "1")]
        pub resource: String,
        #[prost(message, optional, tag = "2")]
        pub policy: Option<Policy>,
        /// The policy fields to modify. Only the fields in the mask are
        /// modified.
        #[prost(message, optional, tag = "3")]
        pub update_mask: Option<prost_types::FieldMask>,
    }

    /// Request message for `GetIamPolicy` method.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GetIamPolicyRequest {
        /// The resource for which the policy is being requested.
        #[prost(string, tag = "1")]
        pub resource: String,
        #[prost(message, optional, tag = "2")]
        pub options: Option<GetPolicyOptions>,
    }

    /// Encapsulates settings provided to `GetIamPolicy`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GetPolicyOptions {
        /// The maximum policy version that will be used to format the policy.
        #[prost(int32, tag = "1")]
        pub requested_policy_version: i32,
    }

    /// Request message for `TestIamPermissions` method.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TestIamPermissionsRequest {
        #[prost(string, tag = "1")]
        pub resource: String,
        /// The set of permissions to check for the `resource`. Wildcards
        /// such as `*` or `storage.*` are not allowed.
        #[prost(string, repeated, tag = "2")]
        pub permissions: Vec<String>,
    }

    /// Response message for `TestIamPermissions` method.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TestIamPermissionsResponse {
        /// A subset of the requested permissions that the caller holds.
        #[prost(string, repeated, tag = "1")]
        pub permissions: Vec<String>,
    }

    crate::impl_name!(Policy, "google.iam.v1", "Policy");
    crate::impl_name!(SetIamPolicyRequest, "google.iam.v1", "SetIamPolicyRequest");
    crate::impl_name!(GetIamPolicyRequest, "google.iam.v1", "GetIamPolicyRequest");

}
