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

/// Implements a [CloudFunctionsService](super::stub::CloudFunctionsService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CloudFunctionsService<T>
where
    T: super::stub::CloudFunctionsService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CloudFunctionsService<T>
where
    T: super::stub::CloudFunctionsService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CloudFunctionsService for CloudFunctionsService<T>
where
    T: super::stub::CloudFunctionsService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListFunctionsResponse> {
        self.inner.list_functions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::CloudFunction> {
        self.inner.get_function(req, options).await
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
    async fn call_function(
        &self,
        req: crate::model::CallFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::CallFunctionResponse> {
        self.inner.call_function(req, options).await
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
    async fn set_iam_policy(
        &self,
        req: crate::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Policy> {
        self.inner.set_iam_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_iam_policy(
        &self,
        req: crate::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Policy> {
        self.inner.get_iam_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::TestIamPermissionsResponse> {
        self.inner.test_iam_permissions(req, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::stub::CloudFunctionsService as _;

    mockall::mock! {
        #[derive(Debug)]
        Stub {}
        impl crate::stub::CloudFunctionsService for Stub {
            async fn call_function(
                &self,
                req: CallFunctionRequest,
                _options: gax::options::RequestOptions,
            ) -> crate::Result<CallFunctionResponse>;
            async fn delete_function(
                &self,
                req: DeleteFunctionRequest,
                _options: gax::options::RequestOptions,
            ) -> crate::Result<Operation>;
        }
    }

    #[tokio::test]
    async fn forwards_calls() -> anyhow::Result<()> {
        let mut mock = MockStub::new();
        mock.expect_call_function()
            .withf(|r, _| r.name == "projects/p/locations/l/functions/f" && r.data == "{}")
            .return_once(|_, _| {
                Ok(CallFunctionResponse {
                    execution_id: "exec-1".into(),
                    ..Default::default()
                })
            });
        mock.expect_delete_function()
            .return_once(|_, _| Err(gax::error::Error::io("simulated")));

        let stub = CloudFunctionsService::new(mock);
        let response = stub
            .call_function(
                CallFunctionRequest {
                    name: "projects/p/locations/l/functions/f".into(),
                    data: "{}".into(),
                },
                gax::options::RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.execution_id, "exec-1");

        let err = stub
            .delete_function(
                DeleteFunctionRequest::default(),
                gax::options::RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }
}
