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


//! A fake `google.cloud.functions.v1.CloudFunctionsService` service.

use crate::{unary, unimplemented};
use functions_v1::model;
use std::convert::Infallible;
use std::sync::Arc;
use tonic::codegen::{Body, BoxFuture, Context, Poll, StdError};

/// The RPCs of `google.cloud.functions.v1.CloudFunctionsService`, as seen by the server.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CloudFunctionsService: Send + Sync + 'static {
    async fn list_functions(
        &self,
        request: tonic::Request<model::ListFunctionsRequest>,
    ) -> Result<tonic::Response<model::ListFunctionsResponse>, tonic::Status>;

    async fn get_function(
        &self,
        request: tonic::Request<model::GetFunctionRequest>,
    ) -> Result<tonic::Response<model::CloudFunction>, tonic::Status>;

    async fn create_function(
        &self,
        request: tonic::Request<model::CreateFunctionRequest>,
    ) -> Result<tonic::Response<model::Operation>, tonic::Status>;

    async fn update_function(
        &self,
        request: tonic::Request<model::UpdateFunctionRequest>,
    ) -> Result<tonic::Response<model::Operation>, tonic::Status>;

    async fn delete_function(
        &self,
        request: tonic::Request<model::DeleteFunctionRequest>,
    ) -> Result<tonic::Response<model::Operation>, tonic::Status>;

    async fn call_function(
        &self,
        request: tonic::Request<model::CallFunctionRequest>,
    ) -> Result<tonic::Response<model::CallFunctionResponse>, tonic::Status>;

    async fn generate_upload_url(
        &self,
        request: tonic::Request<model::GenerateUploadUrlRequest>,
    ) -> Result<tonic::Response<model::GenerateUploadUrlResponse>, tonic::Status>;

    async fn generate_download_url(
        &self,
        request: tonic::Request<model::GenerateDownloadUrlRequest>,
    ) -> Result<tonic::Response<model::GenerateDownloadUrlResponse>, tonic::Status>;

    async fn set_iam_policy(
        &self,
        request: tonic::Request<model::SetIamPolicyRequest>,
    ) -> Result<tonic::Response<model::Policy>, tonic::Status>;

    async fn get_iam_policy(
        &self,
        request: tonic::Request<model::GetIamPolicyRequest>,
    ) -> Result<tonic::Response<model::Policy>, tonic::Status>;

    async fn test_iam_permissions(
        &self,
        request: tonic::Request<model::TestIamPermissionsRequest>,
    ) -> Result<tonic::Response<model::TestIamPermissionsResponse>, tonic::Status>;
}

/// Serves `google.cloud.functions.v1.CloudFunctionsService` using `T`.
pub struct CloudFunctionsServiceServer<T>(Arc<T>);

impl<T> CloudFunctionsServiceServer<T> {
    pub fn new(inner: T) -> Self {
        Self(Arc::new(inner))
    }
}

impl<T> Clone for CloudFunctionsServiceServer<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> tonic::server::NamedService for CloudFunctionsServiceServer<T> {
    const NAME: &'static str = "google.cloud.functions.v1.CloudFunctionsService";
}

impl<T, B> tonic::codegen::Service<http::Request<B>> for CloudFunctionsServiceServer<T>
where
    T: CloudFunctionsService,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.0.clone();
        let method = req
            .uri()
            .path()
            .strip_prefix("/google.cloud.functions.v1.CloudFunctionsService/");
        match method {
            Some("ListFunctions") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.list_functions(r).await }
            }),
            Some("GetFunction") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.get_function(r).await }
            }),
            Some("CreateFunction") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.create_function(r).await }
            }),
            Some("UpdateFunction") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.update_function(r).await }
            }),
            Some("DeleteFunction") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.delete_function(r).await }
            }),
            Some("CallFunction") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.call_function(r).await }
            }),
            Some("GenerateUploadUrl") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.generate_upload_url(r).await }
            }),
            Some("GenerateDownloadUrl") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.generate_download_url(r).await }
            }),
            Some("SetIamPolicy") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.set_iam_policy(r).await }
            }),
            Some("GetIamPolicy") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.get_iam_policy(r).await }
            }),
            Some("TestIamPermissions") => unary(req, move |r| {
                let inner = inner.clone();
                async move { inner.test_iam_permissions(r).await }
            }),
            _ => unimplemented(),
        }
    }
}
