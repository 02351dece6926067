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

/// Implements a [FunctionService](super::stub::FunctionService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct FunctionService<T>
where
    T: super::stub::FunctionService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FunctionService<T>
where
    T: super::stub::FunctionService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::FunctionService for FunctionService<T>
where
    T: super::stub::FunctionService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Function> {
        self.inner.get_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListFunctionsResponse> {
        self.inner.list_functions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.create_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.update_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.delete_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn generate_upload_url(
        &self,
        req: crate::model::GenerateUploadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateUploadUrlResponse> {
        self.inner.generate_upload_url(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn generate_download_url(
        &self,
        req: crate::model::GenerateDownloadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateDownloadUrlResponse> {
        self.inner.generate_download_url(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_runtimes(
        &self,
        req: crate::model::ListRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListRuntimesResponse> {
        self.inner.list_runtimes(req, options).await
    }
}
