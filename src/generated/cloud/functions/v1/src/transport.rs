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


use crate::Result;

const DEFAULT_HOST: &str = "https://cloudfunctions.googleapis.com";

mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.grpc_header_value()
        };
    }
}

/// The full method names of each RPC.
pub(crate) mod path {
    pub(crate) const LIST_FUNCTIONS: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/ListFunctions";
    pub(crate) const GET_FUNCTION: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/GetFunction";
    pub(crate) const CREATE_FUNCTION: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/CreateFunction";
    pub(crate) const UPDATE_FUNCTION: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/UpdateFunction";
    pub(crate) const DELETE_FUNCTION: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/DeleteFunction";
    pub(crate) const CALL_FUNCTION: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/CallFunction";
    pub(crate) const GENERATE_UPLOAD_URL: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/GenerateUploadUrl";
    pub(crate) const GENERATE_DOWNLOAD_URL: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/GenerateDownloadUrl";
    pub(crate) const SET_IAM_POLICY: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/SetIamPolicy";
    pub(crate) const GET_IAM_POLICY: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/GetIamPolicy";
    pub(crate) const TEST_IAM_PERMISSIONS: &str =
        "/google.cloud.functions.v1.CloudFunctionsService/TestIamPermissions";
}

/// Implements [CloudFunctionsService](super::stub::CloudFunctionsService) using gRPC.
#[derive(Clone)]
pub struct CloudFunctionsService {
    inner: gaxi::grpc::Client,
}

impl std::fmt::Debug for CloudFunctionsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("CloudFunctionsService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl CloudFunctionsService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::CloudFunctionsService for CloudFunctionsService {
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListFunctionsResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::LIST_FUNCTIONS,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::CloudFunction> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::GET_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("location", req.location.as_str())]);
        self.inner
            .execute(
                path::CREATE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([(
            "function.name",
            req.function
                .as_ref()
                .map(|f| f.name.as_str())
                .unwrap_or_default(),
        )]);
        self.inner
            .execute(
                path::UPDATE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::DELETE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn call_function(
        &self,
        req: crate::model::CallFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::CallFunctionResponse> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::CALL_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn generate_upload_url(
        &self,
        req: crate::model::GenerateUploadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateUploadUrlResponse> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::GENERATE_UPLOAD_URL,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn generate_download_url(
        &self,
        req: crate::model::GenerateDownloadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateDownloadUrlResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::GENERATE_DOWNLOAD_URL,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Policy> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("resource", req.resource.as_str())]);
        self.inner
            .execute(
                path::SET_IAM_POLICY,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Policy> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("resource", req.resource.as_str())]);
        self.inner
            .execute(
                path::GET_IAM_POLICY,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::TestIamPermissionsResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("resource", req.resource.as_str())]);
        self.inner
            .execute(
                path::TEST_IAM_PERMISSIONS,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }
}
