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


//! Messages of the `google.cloud.functions.v2` package.

use std::collections::HashMap;

pub use common::longrunning::Operation;

/// The environment the function is hosted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Environment {
    Unspecified = 0,
    /// Gen 1
    Gen1 = 1,
    /// Gen 2
    Gen2 = 2,
}

impl Environment {
    /// The enum value name as used in the `.proto` file.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ENVIRONMENT_UNSPECIFIED",
            Self::Gen1 => "GEN_1",
            Self::Gen2 => "GEN_2",
        }
    }
}

/// Describes a Cloud Function that contains user computation executed in
/// response to an event. It encapsulates function and trigger configurations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Function {
    /// A user-defined name of the function, in the form
    /// `projects/{project}/locations/{location}/functions/{function}`.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Describe whether the function is 1st Gen or 2nd Gen.
    #[prost(enumeration = "Environment", tag = "10")]
    pub environment: i32,
    /// User-provided description of a function.
    #[prost(string, tag = "2")]
    pub description: String,
    /// Describes the Build step of the function that builds a container from
    /// the given source.
    #[prost(message, optional, tag = "3")]
    pub build_config: Option<BuildConfig>,
    /// Describes the Service being deployed.
    #[prost(message, optional, tag = "4")]
    pub service_config: Option<ServiceConfig>,
    /// An Eventarc trigger managed by Google Cloud Functions that fires events
    /// in response to a condition in another service.
    #[prost(message, optional, tag = "5")]
    pub event_trigger: Option<EventTrigger>,
    /// Output only. State of the function.
    #[prost(enumeration = "function::State", tag = "6")]
    pub state: i32,
    /// Output only. The last update timestamp of a Cloud Function.
    #[prost(message, optional, tag = "7")]
    pub update_time: Option<prost_types::Timestamp>,
    /// Labels associated with this Cloud Function.
    #[prost(map = "string, string", tag = "8")]
    pub labels: HashMap<String, String>,
    /// Output only. State Messages for this Cloud Function.
    #[prost(message, repeated, tag = "9")]
    pub state_messages: Vec<StateMessage>,
}

/// Nested message and enum types in `Function`.
pub mod function {
    /// Describes the current state of the function.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Unspecified = 0,
        /// Function has been successfully deployed and is serving.
        Active = 1,
        /// Function deployment failed and the function is not serving.
        Failed = 2,
        Deploying = 3,
        Deleting = 4,
        /// Function deployment failed and the function serving state is
        /// undefined. The function should be updated or deleted to move it out
        /// of this state.
        Unknown = 5,
    }

    impl State {
        /// The enum value name as used in the `.proto` file.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "STATE_UNSPECIFIED",
                Self::Active => "ACTIVE",
                Self::Failed => "FAILED",
                Self::Deploying => "DEPLOYING",
                Self::Deleting => "DELETING",
                Self::Unknown => "UNKNOWN",
            }
        }
    }
}

/// Informational messages about the state of the Cloud Function or Operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StateMessage {
    /// Severity of the state message.
    #[prost(enumeration = "state_message::Severity", tag = "1")]
    pub severity: i32,
    /// One-word CamelCase type of the state message.
    #[prost(string, tag = "2")]
    pub r#type: String,
    /// The message.
    #[prost(string, tag = "3")]
    pub message: String,
}

/// Nested message and enum types in `StateMessage`.
pub mod state_message {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Severity {
        Unspecified = 0,
        Error = 1,
        Warning = 2,
        Info = 3,
    }
}

/// Location of the source in an archive file in Google Cloud Storage.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StorageSource {
    /// Google Cloud Storage bucket containing the source.
    #[prost(string, tag = "1")]
    pub bucket: String,
    /// Google Cloud Storage object containing the source.
    #[prost(string, tag = "2")]
    pub object: String,
    /// Google Cloud Storage generation for the object. If the generation is
    /// omitted, the latest generation will be used.
    #[prost(int64, tag = "3")]
    pub generation: i64,
}

/// Location of the source in a Google Cloud Source Repository.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RepoSource {
    /// ID of the project that owns the Cloud Source Repository. If omitted,
    /// the project ID requesting the build is assumed.
    #[prost(string, tag = "1")]
    pub project_id: String,
    /// Name of the Cloud Source Repository.
    #[prost(string, tag = "2")]
    pub repo_name: String,
    /// Directory, relative to the source root, in which to run the build.
    #[prost(string, tag = "6")]
    pub dir: String,
    /// Only trigger a build if the revision regex does NOT match the revision
    /// regex.
    #[prost(bool, tag = "7")]
    pub invert_regex: bool,
    /// A revision within the Cloud Source Repository must be specified in
    /// one of these ways.
    #[prost(oneof = "repo_source::Revision", tags = "3, 4, 5")]
    pub revision: Option<repo_source::Revision>,
}

/// Nested message and enum types in `RepoSource`.
pub mod repo_source {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Revision {
        /// Regex matching branches to build.
        #[prost(string, tag = "3")]
        BranchName(String),
        /// Regex matching tags to build.
        #[prost(string, tag = "4")]
        TagName(String),
        /// Explicit commit SHA to build.
        #[prost(string, tag = "5")]
        CommitSha(String),
    }
}

impl RepoSource {
    pub fn branch_name(&self) -> Option<&String> {
        match &self.revision {
            Some(repo_source::Revision::BranchName(v)) => Some(v),
            _ => None,
        }
    }

    pub fn tag_name(&self) -> Option<&String> {
        match &self.revision {
            Some(repo_source::Revision::TagName(v)) => Some(v),
            _ => None,
        }
    }

    pub fn commit_sha(&self) -> Option<&String> {
        match &self.revision {
            Some(repo_source::Revision::CommitSha(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets `revision` to a branch regex, replacing any other revision.
    pub fn set_branch_name<T: Into<String>>(mut self, v: T) -> Self {
        self.revision = Some(repo_source::Revision::BranchName(v.into()));
        self
    }

    /// Sets `revision` to a tag regex, replacing any other revision.
    pub fn set_tag_name<T: Into<String>>(mut self, v: T) -> Self {
        self.revision = Some(repo_source::Revision::TagName(v.into()));
        self
    }

    /// Sets `revision` to a commit SHA, replacing any other revision.
    pub fn set_commit_sha<T: Into<String>>(mut self, v: T) -> Self {
        self.revision = Some(repo_source::Revision::CommitSha(v.into()));
        self
    }
}

/// The location of the function source code.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Source {
    #[prost(oneof = "source::Source", tags = "1, 2")]
    pub source: Option<source::Source>,
}

/// Nested message and enum types in `Source`.
pub mod source {
    /// Location of the source.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Source {
        /// If provided, get the source from this location in Google Cloud
        /// Storage.
        #[prost(message, tag = "1")]
        StorageSource(super::StorageSource),
        /// If provided, get the source from this location in a Cloud Source
        /// Repository.
        #[prost(message, tag = "2")]
        RepoSource(super::RepoSource),
    }
}

impl Source {
    pub fn storage_source(&self) -> Option<&StorageSource> {
        match &self.source {
            Some(source::Source::StorageSource(v)) => Some(v),
            _ => None,
        }
    }

    pub fn repo_source(&self) -> Option<&RepoSource> {
        match &self.source {
            Some(source::Source::RepoSource(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets the source to a Cloud Storage object, replacing any other source.
    pub fn set_storage_source<T: Into<StorageSource>>(mut self, v: T) -> Self {
        self.source = Some(source::Source::StorageSource(v.into()));
        self
    }

    /// Sets the source to a Cloud Source Repository, replacing any other
    /// source.
    pub fn set_repo_source<T: Into<RepoSource>>(mut self, v: T) -> Self {
        self.source = Some(source::Source::RepoSource(v.into()));
        self
    }
}

/// Provenance of the source. Ways to find the original source, or verify that
/// some source was used for this build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceProvenance {
    /// A copy of the build's `source.storage_source`, if exists, with any
    /// generations resolved.
    #[prost(message, optional, tag = "1")]
    pub resolved_storage_source: Option<StorageSource>,
    /// A copy of the build's `source.repo_source`, if exists, with any
    /// revisions resolved.
    #[prost(message, optional, tag = "2")]
    pub resolved_repo_source: Option<RepoSource>,
}

/// Describes the Build step of the function that builds a container from the
/// given source.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildConfig {
    /// Output only. The Cloud Build name of the latest successful deployment
    /// of the function.
    #[prost(string, tag = "1")]
    pub build: String,
    /// The runtime in which to run the function, e.g. `nodejs20`.
    #[prost(string, tag = "2")]
    pub runtime: String,
    /// The name of the function (as defined in source code) that will be
    /// executed.
    #[prost(string, tag = "3")]
    pub entry_point: String,
    /// The location of the function source code.
    #[prost(message, optional, tag = "4")]
    pub source: Option<Source>,
    /// Output only. A permanent fixed identifier for source.
    #[prost(message, optional, tag = "8")]
    pub source_provenance: Option<SourceProvenance>,
    /// Name of the Cloud Build Custom Worker Pool that should be used to
    /// build the function.
    #[prost(string, tag = "5")]
    pub worker_pool: String,
    /// User-provided build-time environment variables for the function.
    #[prost(map = "string, string", tag = "6")]
    pub environment_variables: HashMap<String, String>,
    /// Repository in Artifact Registry to which the function docker image
    /// will be pushed after it is built by Cloud Build.
    #[prost(string, tag = "7")]
    pub docker_repository: String,
}

/// Describes the Service being deployed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceConfig {
    /// Output only. Name of the service associated with a Function.
    #[prost(string, tag = "1")]
    pub service: String,
    /// The function execution timeout. Defaults to 60 seconds.
    #[prost(int32, tag = "2")]
    pub timeout_seconds: i32,
    /// The amount of memory available for a function, e.g. `256M` or `1Gi`.
    #[prost(string, tag = "13")]
    pub available_memory: String,
    /// Environment variables that shall be available during function
    /// execution.
    #[prost(map = "string, string", tag = "4")]
    pub environment_variables: HashMap<String, String>,
    /// The limit on the maximum number of function instances that may coexist
    /// at a given time.
    #[prost(int32, tag = "5")]
    pub max_instance_count: i32,
    /// The limit on the minimum number of function instances that may coexist
    /// at a given time.
    #[prost(int32, tag = "12")]
    pub min_instance_count: i32,
    /// The Serverless VPC Access connector that this cloud function can
    /// connect to.
    #[prost(string, tag = "6")]
    pub vpc_connector: String,
    #[prost(enumeration = "service_config::VpcConnectorEgressSettings", tag = "7")]
    pub vpc_connector_egress_settings: i32,
    #[prost(enumeration = "service_config::IngressSettings", tag = "8")]
    pub ingress_settings: i32,
    /// Output only. URI of the Service deployed.
    #[prost(string, tag = "9")]
    pub uri: String,
    /// The email of the service's service account.
    #[prost(string, tag = "10")]
    pub service_account_email: String,
    /// Whether 100% of traffic is routed to the latest revision.
    #[prost(bool, tag = "16")]
    pub all_traffic_on_latest_revision: bool,
    /// Secret environment variables configuration.
    #[prost(message, repeated, tag = "17")]
    pub secret_environment_variables: Vec<SecretEnvVar>,
    /// Secret volumes configuration.
    #[prost(message, repeated, tag = "19")]
    pub secret_volumes: Vec<SecretVolume>,
    /// Output only. The name of service revision.
    #[prost(string, tag = "18")]
    pub revision: String,
}

/// Nested message and enum types in `ServiceConfig`.
pub mod service_config {
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
        /// Allow HTTP traffic from public and private sources.
        AllowAll = 1,
        /// Allow HTTP traffic from only private VPC sources.
        AllowInternalOnly = 2,
        /// Allow HTTP traffic from private VPC sources and through GCLB.
        AllowInternalAndGclb = 3,
    }
}

/// Configuration for a secret environment variable.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretEnvVar {
    /// Name of the environment variable.
    #[prost(string, tag = "1")]
    pub key: String,
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
    /// List of secret versions to mount for this secret.
    #[prost(message, repeated, tag = "4")]
    pub versions: Vec<secret_volume::SecretVersion>,
}

/// Nested message and enum types in `SecretVolume`.
pub mod secret_volume {
    /// Configuration for a single version.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SecretVersion {
        #[prost(string, tag = "1")]
        pub version: String,
        /// Relative path of the file under the mount path where the secret
        /// value for this version will be fetched and made available.
        #[prost(string, tag = "2")]
        pub path: String,
    }
}

/// Describes EventTrigger, used to request events to be sent from another
/// service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventTrigger {
    /// Output only. The resource name of the Eventarc trigger.
    #[prost(string, tag = "1")]
    pub trigger: String,
    /// The region that the trigger will be in.
    #[prost(string, tag = "2")]
    pub trigger_region: String,
    /// The type of event to observe, e.g.
    /// `google.cloud.pubsub.topic.v1.messagePublished`.
    #[prost(string, tag = "3")]
    pub event_type: String,
    /// Criteria used to filter events.
    #[prost(message, repeated, tag = "4")]
    pub event_filters: Vec<EventFilter>,
    /// The name of a Pub/Sub topic in the same project that will be used as
    /// the transport topic for the event delivery.
    #[prost(string, tag = "5")]
    pub pubsub_topic: String,
    /// The email of the trigger's service account.
    #[prost(string, tag = "6")]
    pub service_account_email: String,
    /// Describes the retry policy in case of function's execution failure.
    #[prost(enumeration = "event_trigger::RetryPolicy", tag = "7")]
    pub retry_policy: i32,
    /// The name of the channel associated with the trigger.
    #[prost(string, tag = "8")]
    pub channel: String,
}

/// Nested message and enum types in `EventTrigger`.
pub mod event_trigger {
    /// Describes the retry policy in case of function's execution failure.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RetryPolicy {
        Unspecified = 0,
        /// Do not retry.
        DoNotRetry = 1,
        /// Retry on any failure, retry up to 7 days with an exponential
        /// backoff (capped at 10 seconds).
        Retry = 2,
    }
}

/// Filters events based on exact matches on the CloudEvents attributes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventFilter {
    /// The name of a CloudEvents attribute.
    #[prost(string, tag = "1")]
    pub attribute: String,
    /// The value for the attribute.
    #[prost(string, tag = "2")]
    pub value: String,
    /// The operator used for matching the events with the value of the
    /// filter. If not specified, only events that have an exact key-value
    /// pair specified in the filter are matched.
    #[prost(string, tag = "3")]
    pub operator: String,
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
    /// specified in the format `projects/*/locations/*`. If you want to list
    /// functions in all locations, use "-" in place of a location.
    #[prost(string, tag = "1")]
    pub parent: String,
    /// Maximum number of functions to return per call. The largest allowed
    /// page_size is 1,000, if the page_size is omitted or specified as
    /// greater than 1,000 then it will be replaced as 1,000.
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    /// The value returned by the last `ListFunctionsResponse`; indicates that
    /// this is a continuation of a prior `ListFunctions` call, and that the
    /// system should return the next page of data.
    #[prost(string, tag = "3")]
    pub page_token: String,
    /// The filter for Functions that match the filter expression, following
    /// the syntax outlined in <https://google.aip.dev/160>.
    #[prost(string, tag = "4")]
    pub filter: String,
    /// The sorting order of the resources returned.
    #[prost(string, tag = "5")]
    pub order_by: String,
}

/// Response for the `ListFunctions` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFunctionsResponse {
    /// The functions that match the request.
    #[prost(message, repeated, tag = "1")]
    pub functions: Vec<Function>,
    /// A token, which can be sent as `page_token` to retrieve the next page.
    /// If this field is omitted, there are no subsequent pages.
    #[prost(string, tag = "2")]
    pub next_page_token: String,
    /// Locations that could not be reached. The response does not include
    /// any functions from these locations.
    #[prost(string, repeated, tag = "3")]
    pub unreachable: Vec<String>,
}

/// Request for the `CreateFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFunctionRequest {
    /// The project and location in which the function should be created,
    /// specified in the format `projects/*/locations/*`.
    #[prost(string, tag = "1")]
    pub parent: String,
    /// Function to be created.
    #[prost(message, optional, tag = "2")]
    pub function: Option<Function>,
    /// The ID to use for the function, which will become the final component
    /// of the function's resource name.
    #[prost(string, tag = "3")]
    pub function_id: String,
}

/// Request for the `UpdateFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateFunctionRequest {
    /// New version of the function.
    #[prost(message, optional, tag = "1")]
    pub function: Option<Function>,
    /// The list of fields to be updated. If no field mask is provided, all
    /// provided fields in the request will be updated.
    #[prost(message, optional, tag = "2")]
    pub update_mask: Option<prost_types::FieldMask>,
}

/// Request for the `DeleteFunction` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFunctionRequest {
    /// The name of the function which should be deleted.
    #[prost(string, tag = "1")]
    pub name: String,
}

/// Request of `GenerateSourceUploadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateUploadUrlRequest {
    /// The project and location in which the Google Cloud Storage signed URL
    /// should be generated, specified in the format `projects/*/locations/*`.
    #[prost(string, tag = "1")]
    pub parent: String,
}

/// Response of `GenerateSourceUploadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateUploadUrlResponse {
    /// The generated Google Cloud Storage signed URL that should be used for a
    /// function source code upload.
    #[prost(string, tag = "1")]
    pub upload_url: String,
    /// The location of the source code in the upload bucket. Once the archive
    /// is uploaded, pass this value as the source in `CreateFunction` or
    /// `UpdateFunction`.
    #[prost(message, optional, tag = "2")]
    pub storage_source: Option<StorageSource>,
}

/// Request of `GenerateDownloadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateDownloadUrlRequest {
    /// The name of function for which source code Google Cloud Storage signed
    /// URL should be generated.
    #[prost(string, tag = "1")]
    pub name: String,
}

/// Response of `GenerateDownloadUrl` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateDownloadUrlResponse {
    #[prost(string, tag = "1")]
    pub download_url: String,
}

/// Request for the `ListRuntimes` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRuntimesRequest {
    /// The project and location from which the runtimes should be listed,
    /// specified in the format `projects/*/locations/*`.
    #[prost(string, tag = "1")]
    pub parent: String,
    /// The filter for Runtimes that match the filter expression, following
    /// the syntax outlined in <https://google.aip.dev/160>.
    #[prost(string, tag = "2")]
    pub filter: String,
}

/// Response for the `ListRuntimes` method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRuntimesResponse {
    /// The runtimes that match the request.
    #[prost(message, repeated, tag = "1")]
    pub runtimes: Vec<list_runtimes_response::Runtime>,
}

/// Nested message and enum types in `ListRuntimesResponse`.
pub mod list_runtimes_response {
    /// Describes a runtime and any special information (e.g., deprecation
    /// status) related to it.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Runtime {
        /// The name of the runtime, e.g., `go113`, `nodejs12`, etc.
        #[prost(string, tag = "1")]
        pub name: String,
        /// The user facing name, eg `Go 1.13`, `Node.js 12`, etc.
        #[prost(string, tag = "5")]
        pub display_name: String,
        /// The stage of life this runtime is in, e.g., BETA, GA, etc.
        #[prost(enumeration = "RuntimeStage", tag = "2")]
        pub stage: i32,
        /// Warning messages, e.g., a deprecation warning.
        #[prost(string, repeated, tag = "3")]
        pub warnings: Vec<String>,
        /// The environment for the runtime.
        #[prost(enumeration = "super::Environment", tag = "4")]
        pub environment: i32,
    }

    /// The various stages that a runtime can be in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RuntimeStage {
        Unspecified = 0,
        /// The runtime is in development.
        Development = 1,
        /// The runtime is in the Alpha stage.
        Alpha = 2,
        /// The runtime is in the Beta stage.
        Beta = 3,
        /// The runtime is generally available.
        Ga = 4,
        /// The runtime is deprecated.
        Deprecated = 5,
        /// The runtime is no longer supported.
        Decommissioned = 6,
    }
}

/// Represents the metadata of the long-running operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationMetadata {
    /// The time the operation was created.
    #[prost(message, optional, tag = "1")]
    pub create_time: Option<prost_types::Timestamp>,
    /// The time the operation finished running.
    #[prost(message, optional, tag = "2")]
    pub end_time: Option<prost_types::Timestamp>,
    /// Server-defined resource path for the target of the operation.
    #[prost(string, tag = "3")]
    pub target: String,
    /// Name of the verb executed by the operation.
    #[prost(string, tag = "4")]
    pub verb: String,
    /// Human-readable status of the operation, if any.
    #[prost(string, tag = "5")]
    pub status_detail: String,
    /// Identifies whether the user has requested cancellation of the
    /// operation.
    #[prost(bool, tag = "6")]
    pub cancel_requested: bool,
    /// API version used to start the operation.
    #[prost(string, tag = "7")]
    pub api_version: String,
    /// The original request that started the operation.
    #[prost(message, optional, tag = "8")]
    pub request_resource: Option<prost_types::Any>,
    /// Mechanism for reporting in-progress stages.
    #[prost(message, repeated, tag = "9")]
    pub stages: Vec<Stage>,
}

/// Each Stage of the deployment process.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stage {
    #[prost(enumeration = "stage::Name", tag = "1")]
    pub name: i32,
    /// Message describing the Stage.
    #[prost(string, tag = "2")]
    pub message: String,
    /// Current state of the Stage.
    #[prost(enumeration = "stage::State", tag = "3")]
    pub state: i32,
    /// Resource of the Stage.
    #[prost(string, tag = "4")]
    pub resource: String,
    /// Link to the current Stage resource.
    #[prost(string, tag = "5")]
    pub resource_uri: String,
    /// State messages from the current Stage.
    #[prost(message, repeated, tag = "6")]
    pub state_messages: Vec<StateMessage>,
}

/// Nested message and enum types in `Stage`.
pub mod stage {
    /// Possible names for a Stage.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Name {
        Unspecified = 0,
        ArtifactRegistry = 1,
        Build = 2,
        Service = 3,
        Trigger = 4,
        ServiceRollback = 5,
        TriggerRollback = 6,
    }

    /// Possible states for a Stage.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Unspecified = 0,
        NotStarted = 1,
        InProgress = 2,
        Complete = 3,
    }
}

common::impl_name!(Function, "google.cloud.functions.v2", "Function");
common::impl_name!(
    OperationMetadata,
    "google.cloud.functions.v2",
    "OperationMetadata"
);
common::impl_name!(
    CreateFunctionRequest,
    "google.cloud.functions.v2",
    "CreateFunctionRequest"
);
common::impl_name!(
    UpdateFunctionRequest,
    "google.cloud.functions.v2",
    "UpdateFunctionRequest"
);
common::impl_name!(
    DeleteFunctionRequest,
    "google.cloud.functions.v2",
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
    type PageItem = Function;

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
        assert_eq!(Function::full_name(), "google.cloud.functions.v2.Function");
        assert_eq!(
            OperationMetadata::type_url(),
            "type.googleapis.com/google.cloud.functions.v2.OperationMetadata"
        );
    }

    #[test]
    fn list_request_wire_format() -> anyhow::Result<()> {
        let request = ListFunctionsRequest {
            parent: "p".into(),
            filter: "f".into(),
            ..Default::default()
        };
        let bytes = request.encode_to_vec();
        // Default values are not encoded.
        assert_eq!(bytes, vec![0x0a, 0x01, b'p', 0x22, 0x01, b'f']);
        assert_eq!(ListFunctionsRequest::decode(bytes.as_slice())?, request);
        Ok(())
    }

    #[test]
    fn environment_tag_order() {
        let function = Function {
            name: "n".into(),
            environment: Environment::Gen2 as i32,
            description: "d".into(),
            ..Default::default()
        };
        // Fields are written in tag order, `environment` (10) goes last.
        assert_eq!(
            function.encode_to_vec(),
            vec![0x0a, 0x01, b'n', 0x12, 0x01, b'd', 0x50, 0x02]
        );
    }

    #[test]
    fn source_oneof_replaces() -> anyhow::Result<()> {
        let source = Source::default()
            .set_repo_source(RepoSource::default().set_branch_name("main"))
            .set_storage_source(StorageSource {
                bucket: "b".into(),
                object: "o.zip".into(),
                generation: 7,
            });
        assert_eq!(source.repo_source(), None);
        let got = Source::decode(source.encode_to_vec().as_slice())?;
        assert_eq!(got.storage_source().map(|s| s.generation), Some(7));
        Ok(())
    }

    #[test]
    fn revision_oneof() {
        let repo = RepoSource::default()
            .set_branch_name("main")
            .set_commit_sha("abc123");
        assert_eq!(repo.branch_name(), None);
        assert_eq!(repo.tag_name(), None);
        assert_eq!(repo.commit_sha().map(String::as_str), Some("abc123"));
    }

    #[test]
    fn enums() {
        let mut function = Function {
            state: function::State::Deploying as i32,
            ..Default::default()
        };
        assert_eq!(function.state(), function::State::Deploying);
        assert_eq!(function.state().as_str_name(), "DEPLOYING");
        function.set_environment(Environment::Gen1);
        assert_eq!(function.environment().as_str_name(), "GEN_1");
        function.state = 42;
        assert_eq!(function.state(), function::State::Unspecified);

        let mut config = ServiceConfig::default();
        config.set_ingress_settings(service_config::IngressSettings::AllowInternalAndGclb);
        assert_eq!(config.ingress_settings, 3);
    }

    #[test]
    fn operation_metadata() -> anyhow::Result<()> {
        let request = CreateFunctionRequest {
            parent: "projects/p/locations/l".into(),
            function_id: "f".into(),
            ..Default::default()
        };
        let metadata = OperationMetadata {
            target: "projects/p/locations/l/functions/f".into(),
            verb: "create".into(),
            request_resource: Some(prost_types::Any::from_msg(&request)?),
            stages: vec![Stage {
                name: stage::Name::Build as i32,
                state: stage::State::InProgress as i32,
                ..Default::default()
            }],
            ..Default::default()
        };
        let any = prost_types::Any::from_msg(&metadata)?;
        let got = any.to_msg::<OperationMetadata>()?;
        assert_eq!(got.stages[0].name(), stage::Name::Build);
        let got_request = got
            .request_resource
            .as_ref()
            .map(|r| r.to_msg::<CreateFunctionRequest>())
            .transpose()?;
        assert_eq!(got_request, Some(request));
        Ok(())
    }

    #[test]
    fn pageable() {
        let mut request = ListFunctionsRequest::default();
        request.set_page_token("t2".to_string());
        assert_eq!(PageableRequest::page_token(&request), "t2");

        let response = ListFunctionsResponse {
            functions: vec![Function::default(), Function::default()],
            next_page_token: "t3".into(),
            unreachable: vec!["us-east1".into()],
        };
        assert_eq!(response.items().len(), 2);
        assert_eq!(PageableResponse::next_page_token(&response), "t3");
        assert_eq!(response.into_items().len(), 2);
    }
}
