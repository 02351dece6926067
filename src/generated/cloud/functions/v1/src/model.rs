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

//! Messages of the `google.cloud.functions.v1` package.

use std::collections::HashMap;

pub use common::iam::v1::{
    AuditConfig, AuditLogConfig, Binding, GetIamPolicyRequest, GetPolicyOptions, Policy,
    SetIamPolicyRequest, TestIamPermissionsRequest, TestIamPermissionsResponse, audit_log_config,
};
pub use common::longrunning::Operation;

/// Describes a Cloud Function that contains user computation executed in
/// response to an event.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloudFunction {
    /// A user-defined name of the function, in the form
    /// `projects/*/locations/*/functions/*`.
    #[prost(string, tag = "1")]
    pub name: String,
    /// User-provided description of a function.
    #[prost(string, tag = "2")]
    pub description: String,
    /// The location of the function source code.
    #[prost(oneof = "cloud_function::SourceCode", tags = "3, 4, 16")]
    pub source_code: Option<cloud_function::SourceCode>,
    /// An event that triggers the function.
    #[prost(oneof = "cloud_function::Trigger", tags = "5, 6")]
    pub trigger: Option<cloud_function::Trigger>,
    /// Output only. Status of the function deployment.
    #[prost(enumeration = "CloudFunctionStatus", tag = "7")]
    pub status: i32,
    /// The name of the function (as defined in source code) that is executed.
    #[prost(string, tag = "8")]
    pub entry_point: String,
    /// The runtime in which to run the function, e.g. `nodejs20`.
    #[prost(string, tag = "19")]
    pub runtime: String,
    /// The function execution timeout. Defaults to 60 seconds.
    #[prost(message, optional, tag = "9")]
    pub timeout: Option<prost_types::Duration>,
    /// The amount of memory in MB available for a function. Defaults to 256MB.
    #[prost(int32, tag = "10")]
    pub available_memory_mb: i32,
    /// The email of the function's service account.
    #[prost(string, tag = "11")]
    pub service_account_email: String,
    /// Output only. The last update timestamp of a Cloud Function.
    #[prost(message, optional, tag = "12")]
    pub update_time: Option<prost_types::Timestamp>,
    /// Output only. The version identifier of the Cloud Function.
    #[prost(int64, tag = "14")]
    pub version_id: i64,
    #[prost(map = "string, string", tag = "15")]
    pub labels: HashMap<String, String>,
    /// Environment variables that shall be available during function execution.
    #[prost(map = "string, string", tag = "17")]
    pub environment_variables: HashMap<String, String>,
    /// Build environment variables that shall be available during build time.
    #[prost(map = "string, string", tag = "28")]
    pub build_environment_variables: HashMap<String, String>,
    /// Deprecated: use `vpc_connector`.
    #[prost(string, tag = "18")]
    pub network: String,
    /// The limit on the maximum number of function instances that may coexist
    /// at a given time.
    #[prost(int32, tag = "20")]
    pub max_instances: i32,
    /// A lower bound for the number of function instances that may coexist
    /// at a given time.
    #[prost(int32, tag = "32")]
    pub min_instances: i32,
    /// The VPC Network Connector that this cloud function can connect to.
    #[prost(string, tag = "22")]
    pub vpc_connector: String,
    #[prost(enumeration = "cloud_function::VpcConnectorEgressSettings", tag = "23")]
    pub vpc_connector_egress_settings: i32,
    #[prost(enumeration = "cloud_function::IngressSettings", tag = "24")]
    pub ingress_settings: i32,
    /// Resource name of a KMS crypto key used to encrypt/decrypt function
    /// resources.
    #[prost(string, tag = "25")]
    pub kms_key_name: String,
    /// Name of the Cloud Build Custom Worker Pool that should be used to
    /// build the function.
    #[prost(string, tag = "26")]
    pub build_worker_pool: String,
    /// Output only. The Cloud Build ID of the latest successful deployment.
    #[prost(string, tag = "27")]
    pub build_id: String,
    /// Output only. The Cloud Build Name of the function deployment.
    #[prost(string, tag = "33")]
    pub build_name: String,
    #[prost(message, repeated, tag = "29")]
    pub secret_environment_variables: Vec<SecretEnvVar>,
    #[prost(message, repeated, tag = "30")]
    pub secret_volumes: Vec<SecretVolume>,
    /// Input only. An identifier for Firebase function sources.
    #[prost(string, tag = "31")]
    pub source_token: String,
    /// User managed repository created in Artifact Registry.
    #[prost(string, tag = "34")]
    pub docker_repository: String,
    /// Docker Registry to use for this deployment.
    #[prost(enumeration = "cloud_function::DockerRegistry", tag = "35")]
    pub docker_registry: i32,
}

/// Nested message and enum types in `CloudFunction`.
pub mod cloud_function {
    /// Available egress settings.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum VpcConnectorEgressSettings {
        Unspecified = 0,
        /// Use the VPC Access Connector only for private IP space from
        /// RFC1918.
        PrivateRangesOnly = 1,
        /// Force the use of VPC Access Connector for all egress traffic from
        /// the function.
        AllTraffic = 2,
    }

    /// Available ingress settings.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum IngressSettings {
        Unspecified = 0,
        AllowAll = 1,
        AllowInternalOnly = 2,
        AllowInternalAndGclb = 3,
    }

    /// Docker Registry to use for storing function Docker images.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum DockerRegistry {
        Unspecified = 0,
        ContainerRegistry = 1,
        ArtifactRegistry = 2,
    }

    /// The location of the function source code.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum SourceCode {
        /// The Google Cloud Storage URL, starting with `gs://`, pointing to the
        /// zip archive which contains the function.
        #[prost(string, tag = "3")]
        SourceArchiveUrl(String),
        /// A source repository where a function is hosted.
        #[prost(message, tag = "4")]
        SourceRepository(super::SourceRepository),
        /// The Google Cloud Storage signed URL used for source uploading,
        /// generated by `GenerateUploadUrl`.
        #[prost(string, tag = "16")]
        SourceUploadUrl(String),
    }

    /// An event that triggers the function.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Trigger {
        /// An HTTPS endpoint type of source that can be triggered via URL.
        #[prost(message, tag = "5")]
        HttpsTrigger(super::HttpsTrigger),
        /// A source that fires events in response to a condition in another
        /// service.
        #[prost(message, tag = "6")]
        EventTrigger(super::EventTrigger),
    }
}

impl CloudFunction {
    /// The value of [source_code][CloudFunction::source_code] if it holds a
    /// `SourceArchiveUrl`.
    pub fn source_archive_url(&self) -> Option<&String> {
        match &self.source_code {
            Some(cloud_function::SourceCode::SourceArchiveUrl(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of [source_code][CloudFunction::source_code] if it holds a
    /// `SourceRepository`.
    pub fn source_repository(&self) -> Option<&SourceRepository> {
        match &self.source_code {
            Some(cloud_function::SourceCode::SourceRepository(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of [source_code][CloudFunction::source_code] if it holds a
    /// `SourceUploadUrl`.
    pub fn source_upload_url(&self) -> Option<&String> {
        match &self.source_code {
            Some(cloud_function::SourceCode::SourceUploadUrl(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of [trigger][CloudFunction::trigger] if it holds an
    /// `HttpsTrigger`.
    pub fn https_trigger(&self) -> Option<&HttpsTrigger> {
        match &self.trigger {
            Some(cloud_function::Trigger::HttpsTrigger(v)) => Some(v),
            _ => None,
        }
    }

    /// The value of [trigger][CloudFunction::trigger] if it holds an
    /// `EventTrigger`.
    pub fn event_trigger(&self) -> Option<&EventTrigger> {
        match &self.trigger {
            Some(cloud_function::Trigger::EventTrigger(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets `source_code` to `SourceArchiveUrl`, replacing any other source.
    pub fn set_source_archive_url<T: Into<String>>(mut self, v: T) -> Self {
        self.source_code = Some(cloud_function::SourceCode::SourceArchiveUrl(v.into()));
        self
    }

    /// Sets `source_code` to `SourceRepository`, replacing any other source.
    pub fn set_source_repository<T: Into<SourceRepository>>(mut self, v: T) -> Self {
        self.source_code = Some(cloud_function::SourceCode::SourceRepository(v.into()));
        self
    }

    /// Sets `source_code` to `SourceUploadUrl`, replacing any other source.
    pub fn set_source_upload_url<T: Into<String>>(mut self, v: T) -> Self {
        self.source_code = Some(cloud_function::SourceCode::SourceUploadUrl(v.into()));
        self
    }

    /// Sets `trigger` to `HttpsTrigger`, replacing any other trigger.
    pub fn set_https_trigger<T: Into<HttpsTrigger>>(mut self, v: T) -> Self {
        self.trigger = Some(cloud_function::Trigger::HttpsTrigger(v.into()));
        self
    }

    /// Sets `trigger` to `EventTrigger`, replacing any other trigger.
    pub fn set_event_trigger<T: Into<EventTrigger>>(mut self, v: T) -> Self {
        self.trigger = Some(cloud_function::Trigger::EventTrigger(v.into()));
        self
    }
}

/// Describes the current stage of a deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CloudFunctionStatus {
    Unspecified = 0,
    /// Function has been successfully deployed and is serving.
    Active = 1,
    /// Function deployment failed and the function isn’t serving.
    Offline = 2,
    DeployInProgress = 3,
    DeleteInProgress = 4,
    /// Function deployment failed and the function serving state is
    /// undefined.
    Unknown = 5,
}

impl CloudFunctionStatus {
    /// The enum value name as used in the `.proto` file.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CLOUD_FUNCTION_STATUS_UNSPECIFIED",
            Self::Active => "ACTIVE",
            Self::Offline => "OFFLINE",
            Self::DeployInProgress => "DEPLOY_IN_PROGRESS",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Describes SourceRepository, used to represent parameters related to
/// source repository where a function is hosted.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceRepository {
    /// The URL pointing to the hosted repository where the function is
    /// defined.
    #[prost(string, tag = "1")]
    pub url: String,
    /// Output only. The URL pointing to the hosted repository where the
    /// function was defined at the time of deployment.
    #[prost(string, tag = "2")]
    pub deployed_url: String,
}

/// Describes HttpsTrigger, could be used to connect web hooks to function.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpsTrigger {
    /// Output only. The deployed url for the function.
    #[prost(string, tag = "1")]
    pub url: String,
    /// The security level for the function.
    #[prost(enumeration = "https_trigger::SecurityLevel", tag = "2")]
    pub security_level: i32,
}

/// Nested message and enum types in `HttpsTrigger`.
pub mod https_trigger {
    /// Available security level settings.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SecurityLevel {
        Unspecified = 0,
        /// Requests for a URL that match this handler that do not use HTTPS are
        /// automatically redirected to the HTTPS URL with the same path.
        SecureAlways = 1,
        /// Both HTTP and HTTPS requests with URLs that match the handler
        /// succeed without redirects.
        SecureOptional = 2,
    }
}

/// Describes EventTrigger, used to request events be sent from another
/// service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventTrigger {
    /// The type of event to observe, e.g.
    /// `providers/cloud.storage/eventTypes/object.change`.
    #[prost(string, tag = "1")]
    pub event_type: String,
    /// The resource(s) from which to observe events.
    #[prost(string, tag = "2")]
    pub resource: String,
    /// The hostname of the service that should be observed.
    #[prost(string, tag = "3")]
    pub service: String,
    /// Specifies policy for failed executions.
    #[prost(message, optional, tag = "5")]
    pub failure_policy: Option<FailurePolicy>,
}

/// Describes the policy in case of function's execution failure. If empty,
/// failures are ignored.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailurePolicy {
    /// Defines the action taken in case of a function execution failure.
    #[prost(oneof = "failure_policy::Action", tags = "1")]
    pub action: Option<failure_policy::Action>,
}

/// Nested message and enum types in `FailurePolicy`.
pub mod failure_policy {
    /// Describes the retry policy in case of function's execution failure.
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Retry {}

    /// Defines the action taken in case of a function execution failure.
    #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
    pub enum Action {
        /// If specified, then the function will be retried in case of a
        /// failure.
        #[prost(message, tag = "1")]
        Retry(Retry),
    }
}

impl FailurePolicy {
    /// The policy that retries failed executions.
    pub fn retry() -> Self {
        Self {
            action: Some(failure_policy::Action::Retry(failure_policy::Retry {})),
        }
    }
}

/// Configuration for a secret environment variable.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretEnvVar {
    /// Name of the environment variable.
    #[prost(string, tag = "1")]
    pub key: String,
    /// Project identifier (preferably project number) of the project that
    /// contains the secret.
    #[prost(string, tag = "2")]
    pub project_id: String,
    /// Name of the secret in secret manager (not the full resource name).
    #[prost(string, tag = "3")]
    pub secret: String,
    /// Version of the secret (version number or the string `latest`).
    #[prost(string, tag = "4")]
    pub version: String,
}

/// Configuration for a secret volume.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretVolume {
    /// The path within the container to mount the secret volume.
    #[prost(string, tag = "1")]
    pub mount_path: String,
    #[prost(string, tag = "2")]
    pub project_id: String,
    #[prost(string, tag = "3")]
    pub secret: String,
    /// List of secret versions to mount for this secret. If empty, the
    /// `latest` version of the secret is made available in a file named
    /// after the secret under the mount point.
    #[prost(message, repeated, tag = "4")]
    pub versions: Vec<secret_volume::SecretVersion>,
}

/// Nested message and enum types in `SecretVolume`.
pub mod secret_volume {
    /// Configuration for a single version.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SecretVersion {
        /// Version of the secret (version number or the string `latest`).
        #[prost(string, tag = "1")]
        pub version: String,
        /// Relative path of the file under the mount path where the secret
        /// value for this version will be fetched and made available.
        #[prost(string, tag = "2")]
        pub path: String,
    }
}

/// Request for the `CreateFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFunctionRequest {
    /// The project and location in which the function should be created,
    /// specified in the format `projects/*/locations/*`.
    #[prost(string, tag = "1")]
    pub location: String,
    #[prost(message, optional, tag = "2")]
    pub function: Option<CloudFunction>,
}

/// Request for the `UpdateFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateFunctionRequest {
    /// New version of the function.
    #[prost(message, optional, tag = "1")]
    pub function: Option<CloudFunction>,
    /// The list of fields in `CloudFunction` that have to be updated.
    #[prost(message, optional, tag = "2")]
    pub update_mask: Option<prost_types::FieldMask>,
}

/// Request for the `GetFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFunctionRequest {
    /// The name of the function which details should be obtained.
    #[prost(string, tag = "1")]
    pub name: String,
}

/// Request for the `ListFunctions` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFunctionsRequest {
    /// The project and location from which the function should be listed,
    /// specified in the format `projects/*/locations/*`. Use `-` as the
    /// location to list functions in all locations.
    #[prost(string, tag = "1")]
    pub parent: String,
    /// Maximum number of functions to return per call.
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    /// The value returned by the last `ListFunctionsResponse`; indicates that
    /// this is a continuation of a prior `ListFunctions` call.
    #[prost(string, tag = "3")]
    pub page_token: String,
}

/// Response for the `ListFunctions` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFunctionsResponse {
    /// The functions that match the request.
    #[prost(message, repeated, tag = "1")]
    pub functions: Vec<CloudFunction>,
    /// If not empty, indicates that there may be more functions that match
    /// the request.
    #[prost(string, tag = "2")]
    pub next_page_token: String,
    /// Locations that could not be reached.
    #[prost(string, repeated, tag = "3")]
    pub unreachable: Vec<String>,
}

/// Request for the `DeleteFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFunctionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

/// Request for the `CallFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallFunctionRequest {
    /// The name of the function to be called.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Input to be passed to the function.
    #[prost(string, tag = "2")]
    pub data: String,
}

/// Response of `CallFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallFunctionResponse {
    /// Execution id of function invocation.
    #[prost(string, tag = "1")]
    pub execution_id: String,
    /// Result populated for successful execution of synchronous function.
    #[prost(string, tag = "2")]
    pub result: String,
    /// Either system or user-function generated error.
    #[prost(string, tag = "3")]
    pub error: String,
}

/// Request of `GenerateSourceUploadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateUploadUrlRequest {
    /// The project and location in which the Google Cloud Storage signed URL
    /// should be generated, specified in the format `projects/*/locations/*`.
    #[prost(string, tag = "1")]
    pub parent: String,
    /// Resource name of a KMS crypto key used to encrypt the function source
    /// code objects in intermediate Cloud Storage buckets.
    #[prost(string, tag = "2")]
    pub kms_key_name: String,
}

/// Response of `GenerateSourceUploadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateUploadUrlResponse {
    /// The generated Google Cloud Storage signed URL that should be used for a
    /// function source code upload.
    #[prost(string, tag = "1")]
    pub upload_url: String,
}

/// Request of `GenerateDownloadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateDownloadUrlRequest {
    /// The name of function for which source code Google Cloud Storage signed
    /// URL should be generated.
    #[prost(string, tag = "1")]
    pub name: String,
    /// The optional version of function. If not set, default, current version
    /// is used.
    #[prost(uint64, tag = "2")]
    pub version_id: u64,
}

/// Response of `GenerateDownloadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateDownloadUrlResponse {
    /// The generated Google Cloud Storage signed URL that should be used for
    /// function source code download.
    #[prost(string, tag = "1")]
    pub download_url: String,
}

/// Metadata describing an [Operation] returned by the mutating RPCs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationMetadataV1 {
    /// Target of the operation, for example
    /// `projects/project-1/locations/region-1/functions/function-1`.
    #[prost(string, tag = "1")]
    pub target: String,
    #[prost(enumeration = "OperationType", tag = "2")]
    pub r#type: i32,
    /// The original request that started the operation.
    #[prost(message, optional, tag = "3")]
    pub request: Option<prost_types::Any>,
    /// Version id of the function created or updated by an API call.
    #[prost(int64, tag = "4")]
    pub version_id: i64,
    /// The last update timestamp of the operation.
    #[prost(message, optional, tag = "5")]
    pub update_time: Option<prost_types::Timestamp>,
    /// The Cloud Build ID of the function created or updated by an API call.
    #[prost(string, tag = "6")]
    pub build_id: String,
    /// An identifier for Firebase function sources.
    #[prost(string, tag = "7")]
    pub source_token: String,
    /// The Cloud Build Name of the function deployment.
    #[prost(string, tag = "8")]
    pub build_name: String,
}

/// A type of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    OperationUnspecified = 0,
    CreateFunction = 1,
    UpdateFunction = 2,
    DeleteFunction = 3,
}

common::impl_name!(CloudFunction, "google.cloud.functions.v1", "CloudFunction");
common::impl_name!(
    OperationMetadataV1,
    "google.cloud.functions.v1",
    "OperationMetadataV1"
);
common::impl_name!(
    CreateFunctionRequest,
    "google.cloud.functions.v1",
    "CreateFunctionRequest"
);
common::impl_name!(
    UpdateFunctionRequest,
    "google.cloud.functions.v1",
    "UpdateFunctionRequest"
);
common::impl_name!(
    DeleteFunctionRequest,
    "google.cloud.functions.v1",
    "DeleteFunctionRequest"
);

impl paginator::PageableRequest for ListFunctionsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }

    fn page_token(&self) -> &str {
        &self.page_token
    }
}

impl paginator::PageableResponse for ListFunctionsResponse {
    type PageItem = CloudFunction;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn items(&self) -> &[Self::PageItem] {
        &self.functions
    }

    fn into_items(self) -> Vec<Self::PageItem> {
        self.functions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paginator::{PageableRequest, PageableResponse};
    use pretty_assertions::assert_eq;
    use prost::{Message, Name};

    #[test]
    fn package() {
        assert_eq!(
            CloudFunction::full_name(),
            "google.cloud.functions.v1.CloudFunction"
        );
        assert_eq!(
            OperationMetadataV1::type_url(),
            "type.googleapis.com/google.cloud.functions.v1.OperationMetadataV1"
        );
    }

    #[test]
    fn list_request_wire_format() -> anyhow::Result<()> {
        let request = ListFunctionsRequest {
            parent: "p".into(),
            page_size: 2,
            page_token: "t".into(),
        };
        let bytes = request.encode_to_vec();
        assert_eq!(bytes, vec![0x0a, 0x01, b'p', 0x10, 0x02, 0x1a, 0x01, b't']);
        assert_eq!(ListFunctionsRequest::decode(bytes.as_slice())?, request);
        Ok(())
    }

    #[test]
    fn source_upload_url_uses_tag_16() {
        let function = CloudFunction::default().set_source_upload_url("u");
        // Tag 16, wire type 2, needs a two byte varint key.
        assert_eq!(function.encode_to_vec(), vec![0x82, 0x01, 0x01, b'u']);
    }

    #[test]
    fn source_code_oneof_replaces() {
        let function = CloudFunction::default()
            .set_source_archive_url("gs://bucket/source.zip")
            .set_source_repository(SourceRepository {
                url: "https://source.developers.google.com/projects/p/repos/r".into(),
                ..Default::default()
            });
        assert_eq!(function.source_archive_url(), None);
        assert_eq!(
            function.source_repository().map(|r| r.url.as_str()),
            Some("https://source.developers.google.com/projects/p/repos/r")
        );
        assert_eq!(function.source_upload_url(), None);

        let function = function.set_source_upload_url("https://upload");
        assert_eq!(function.source_repository(), None);
        assert_eq!(
            function.source_upload_url().map(String::as_str),
            Some("https://upload")
        );
    }

    #[test]
    fn trigger_oneof_replaces() -> anyhow::Result<()> {
        let function = CloudFunction::default()
            .set_https_trigger(HttpsTrigger::default())
            .set_event_trigger(EventTrigger {
                event_type: "google.pubsub.topic.publish".into(),
                failure_policy: Some(FailurePolicy::retry()),
                ..Default::default()
            });
        assert_eq!(function.https_trigger(), None);
        let got = CloudFunction::decode(function.encode_to_vec().as_slice())?;
        assert_eq!(got, function);
        let policy = got.event_trigger().and_then(|t| t.failure_policy.as_ref());
        assert_eq!(policy, Some(&FailurePolicy::retry()));
        Ok(())
    }

    #[test]
    fn enums() {
        let mut function = CloudFunction {
            status: CloudFunctionStatus::Active as i32,
            ..Default::default()
        };
        assert_eq!(function.status(), CloudFunctionStatus::Active);
        assert_eq!(function.status().as_str_name(), "ACTIVE");
        function.set_ingress_settings(cloud_function::IngressSettings::AllowInternalOnly);
        assert_eq!(function.ingress_settings, 2);
        function.status = 99;
        assert_eq!(function.status(), CloudFunctionStatus::Unspecified);
    }

    #[test]
    fn maps() -> anyhow::Result<()> {
        let function = CloudFunction {
            labels: HashMap::from([("env".to_string(), "test".to_string())]),
            environment_variables: HashMap::from([("A".to_string(), "1".to_string())]),
            ..Default::default()
        };
        let got = CloudFunction::decode(function.encode_to_vec().as_slice())?;
        assert_eq!(got.labels.get("env").map(String::as_str), Some("test"));
        assert_eq!(got, function);
        Ok(())
    }

    #[test]
    fn pageable() {
        let mut request = ListFunctionsRequest::default();
        request.set_page_token("abc".into());
        assert_eq!(request.page_token(), "abc");

        let response = ListFunctionsResponse {
            functions: vec![CloudFunction {
                name: "f1".into(),
                ..Default::default()
            }],
            next_page_token: "next".into(),
            unreachable: vec!["us-west1".into()],
        };
        assert_eq!(PageableResponse::next_page_token(&response), "next");
        assert_eq!(response.items().len(), 1);
        let names: Vec<String> = response.into_items().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["f1"]);
    }
}
