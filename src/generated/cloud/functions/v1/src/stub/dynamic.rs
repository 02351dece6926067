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


/// A dyn-compatible, crate-private version of [super::CloudFunctionsService].
#[async_trait::async_trait]
pub trait CloudFunctionsService: std::fmt::Debug + Send + Sync {
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListFunctionsResponse>;

    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::CloudFunction>;

    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn call_function(
        &self,
        req: crate::model::CallFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::CallFunctionResponse>;

    async fn generate_upload_url(
        &self,
        req: crate::model::GenerateUploadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GenerateUploadUrlResponse>;

    async fn generate_download_url(
        &self,
        req: crate::model::GenerateDownloadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GenerateDownloadUrlResponse>;

    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Policy>;

    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Policy>;

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TestIamPermissionsResponse>;
}

/// All implementations of [super::CloudFunctionsService] also implement [CloudFunctionsService].
#[async_trait::async_trait]
impl<T: super::CloudFunctionsService> CloudFunctionsService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListFunctionsResponse> {
        T::list_functions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::CloudFunction> {
        T::get_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::create_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::update_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::delete_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn call_function(
        &self,
        req: crate::model::CallFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::CallFunctionResponse> {
        T::call_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn generate_upload_url(
        &self,
        req: crate::model::GenerateUploadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GenerateUploadUrlResponse> {
        T::generate_upload_url(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn generate_download_url(
        &self,
        req: crate::model::GenerateDownloadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::GenerateDownloadUrlResponse> {
        T::generate_download_url(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Policy> {
        T::set_iam_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Policy> {
        T::get_iam_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::TestIamPermissionsResponse> {
        T::test_iam_permissions(self, req, options).await
    }
}
