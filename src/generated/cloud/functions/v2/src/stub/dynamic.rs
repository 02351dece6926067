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


/// A dyn-compatible, crate-private version of [super::FunctionService].
#[async_trait::async_trait]
pub trait FunctionService: std::fmt::Debug + Send + Sync {
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Function>;

    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListFunctionsResponse>;

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

    async fn list_runtimes(
        &self,
        req: crate::model::ListRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListRuntimesResponse>;
}

/// All implementations of [super::FunctionService] also implement [FunctionService].
#[async_trait::async_trait]
impl<T: super::FunctionService> FunctionService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Function> {
        T::get_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListFunctionsResponse> {
        T::list_functions(self, req, options).await
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
    async fn list_runtimes(
        &self,
        req: crate::model::ListRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListRuntimesResponse> {
        T::list_runtimes(self, req, options).await
    }
}
