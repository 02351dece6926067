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


//! A blocking client for the Cloud Functions API.
//!
//! The client owns a multi-threaded [tokio] runtime and runs each request to
//! completion on it. Do not use this client from asynchronous code, calling it
//! inside a runtime panics.
//!
//! # Example
//! ```no_run
//! # use google_cloud_functions_v1::blocking::CloudFunctionsService;
//! # use google_cloud_functions_v1::model::ListFunctionsRequest;
//! # fn sample() -> anyhow::Result<()> {
//! let client = CloudFunctionsService::builder().build()?;
//! let request = ListFunctionsRequest {
//!     parent: "projects/my-project/locations/-".into(),
//!     ..Default::default()
//! };
//! let pager = client.list_functions(request, gax::options::RequestOptions::default())?;
//! for function in pager.items() {
//!     println!("{}", function?.name);
//! }
//! # Ok(()) }
//! ```

use crate::Result;
use crate::model::*;
use gax::options::RequestOptions;
use paginator::blocking::Pager;
use std::sync::Arc;

/// A synchronous version of [crate::client::CloudFunctionsService].
#[derive(Clone, Debug)]
pub struct CloudFunctionsService {
    runtime: Arc<tokio::runtime::Runtime>,
    inner: Arc<dyn crate::stub::dynamic::CloudFunctionsService>,
}

impl CloudFunctionsService {
    /// Returns a builder for [CloudFunctionsService].
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            inner: crate::client::CloudFunctionsService::builder(),
        }
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> gax::client_builder::Result<Self>
    where
        T: crate::stub::CloudFunctionsService + 'static,
    {
        let client = crate::client::CloudFunctionsService::from_stub(stub);
        Ok(Self {
            runtime: Arc::new(new_runtime()?),
            inner: client.inner,
        })
    }

    /// Fetches the first page of functions and returns a pager over all the
    /// pages.
    ///
    /// The following pages are fetched on demand, as the pager advances.
    pub fn list_functions(
        &self,
        request: ListFunctionsRequest,
        options: RequestOptions,
    ) -> Result<Pager<ListFunctionsRequest, ListFunctionsResponse>> {
        let first = self
            .runtime
            .block_on(self.inner.list_functions(request.clone(), options.clone()))?;
        let runtime = self.runtime.clone();
        let stub = self.inner.clone();
        let fetch = move |r: ListFunctionsRequest| {
            runtime.block_on(stub.list_functions(r, options.clone()))
        };
        Ok(Pager::new(fetch, request, first))
    }

    /// Returns a function with the given name from the requested project.
    pub fn get_function(
        &self,
        request: GetFunctionRequest,
        options: RequestOptions,
    ) -> Result<CloudFunction> {
        self.runtime
            .block_on(self.inner.get_function(request, options))
    }

    /// Creates a new function.
    ///
    /// Returns the long-running [Operation] handle without polling it.
    pub fn create_function(
        &self,
        request: CreateFunctionRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        self.runtime
            .block_on(self.inner.create_function(request, options))
    }

    /// Updates existing function.
    pub fn update_function(
        &self,
        request: UpdateFunctionRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        self.runtime
            .block_on(self.inner.update_function(request, options))
    }

    /// Deletes a function with the given name from the specified project.
    pub fn delete_function(
        &self,
        request: DeleteFunctionRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        self.runtime
            .block_on(self.inner.delete_function(request, options))
    }

    /// Synchronously invokes a deployed Cloud Function.
    pub fn call_function(
        &self,
        request: CallFunctionRequest,
        options: RequestOptions,
    ) -> Result<CallFunctionResponse> {
        self.runtime
            .block_on(self.inner.call_function(request, options))
    }

    /// Returns a signed URL for uploading a function source code.
    pub fn generate_upload_url(
        &self,
        request: GenerateUploadUrlRequest,
        options: RequestOptions,
    ) -> Result<GenerateUploadUrlResponse> {
        self.runtime
            .block_on(self.inner.generate_upload_url(request, options))
    }

    pub fn generate_download_url(
        &self,
        request: GenerateDownloadUrlRequest,
        options: RequestOptions,
    ) -> Result<GenerateDownloadUrlResponse> {
        self.runtime
            .block_on(self.inner.generate_download_url(request, options))
    }

    /// Sets the IAM access control policy on the specified function.
    pub fn set_iam_policy(
        &self,
        request: SetIamPolicyRequest,
        options: RequestOptions,
    ) -> Result<Policy> {
        self.runtime
            .block_on(self.inner.set_iam_policy(request, options))
    }

    /// Gets the IAM access control policy for a function.
    pub fn get_iam_policy(
        &self,
        request: GetIamPolicyRequest,
        options: RequestOptions,
    ) -> Result<Policy> {
        self.runtime
            .block_on(self.inner.get_iam_policy(request, options))
    }

    pub fn test_iam_permissions(
        &self,
        request: TestIamPermissionsRequest,
        options: RequestOptions,
    ) -> Result<TestIamPermissionsResponse> {
        self.runtime
            .block_on(self.inner.test_iam_permissions(request, options))
    }
}

/// A builder for the blocking [CloudFunctionsService].
pub struct ClientBuilder {
    inner: crate::builder::cloud_functions_service::ClientBuilder,
}

impl ClientBuilder {
    /// Creates the runtime and initializes the client.
    pub fn build(self) -> gax::client_builder::Result<CloudFunctionsService> {
        let runtime = new_runtime()?;
        let client = runtime.block_on(self.inner.build())?;
        Ok(CloudFunctionsService {
            runtime: Arc::new(runtime),
            inner: client.inner,
        })
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(self, v: V) -> Self {
        Self {
            inner: self.inner.with_endpoint(v),
        }
    }

    /// Enables tracing.
    pub fn with_tracing(self) -> Self {
        Self {
            inner: self.inner.with_tracing(),
        }
    }

    /// Configure the authentication credentials.
    pub fn with_credentials<T: Into<gaxi::options::Credentials>>(self, v: T) -> Self {
        Self {
            inner: self.inner.with_credentials(v),
        }
    }

    /// Configure the retry policy.
    pub fn with_retry_policy<V: Into<gax::retry_policy::RetryPolicyArg>>(self, v: V) -> Self {
        Self {
            inner: self.inner.with_retry_policy(v),
        }
    }

    /// Configure the retry backoff policy.
    pub fn with_backoff_policy<V: Into<gax::backoff_policy::BackoffPolicyArg>>(
        self,
        v: V,
    ) -> Self {
        Self {
            inner: self.inner.with_backoff_policy(v),
        }
    }
}

fn new_runtime() -> gax::client_builder::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(gax::client_builder::Error::transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::error::rpc::Code;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        Stub {}
        impl crate::stub::CloudFunctionsService for Stub {
            async fn list_functions(
                &self,
                req: ListFunctionsRequest,
                _options: RequestOptions,
            ) -> crate::Result<ListFunctionsResponse>;
            async fn get_function(
                &self,
                req: GetFunctionRequest,
                _options: RequestOptions,
            ) -> crate::Result<CloudFunction>;
        }
    }

    fn page(names: &[&str], token: &str) -> ListFunctionsResponse {
        ListFunctionsResponse {
            functions: names
                .iter()
                .map(|n| CloudFunction {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
            next_page_token: token.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn list_functions_items() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut stub = MockStub::new();
        stub.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p/locations/-" && r.page_token.is_empty())
            .returning(|_, _| Ok(page(&["f1", "f2"], "t1")));
        stub.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page_token == "t1")
            .returning(|_, _| Ok(page(&["f3"], "")));

        let client = CloudFunctionsService::from_stub(stub)?;
        let request = ListFunctionsRequest {
            parent: "projects/p/locations/-".into(),
            ..Default::default()
        };
        let pager = client.list_functions(request, RequestOptions::default())?;
        let names = pager
            .items()
            .map(|f| f.map(|f| f.name))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names, vec!["f1", "f2", "f3"]);
        Ok(())
    }

    #[test]
    fn list_functions_error_after_first_page() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut stub = MockStub::new();
        stub.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(&["f1"], "t1")));
        stub.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Err(Error::io("simulated")));

        let client = CloudFunctionsService::from_stub(stub)?;
        let mut pager =
            client.list_functions(ListFunctionsRequest::default(), RequestOptions::default())?;
        let first = pager.next_page().transpose()?;
        assert_eq!(first.map(|p| p.functions.len()), Some(1));
        let second = pager.next_page();
        assert!(matches!(second, Some(Err(_))), "{second:?}");
        assert_eq!(pager.current_response().next_page_token, "t1");
        Ok(())
    }

    #[test]
    fn get_function() -> anyhow::Result<()> {
        let mut stub = MockStub::new();
        stub.expect_get_function()
            .once()
            .withf(|r, _| r.name == "projects/p/locations/l/functions/f")
            .returning(|r, _| {
                Ok(CloudFunction {
                    name: r.name,
                    ..Default::default()
                })
            });
        let client = CloudFunctionsService::from_stub(stub)?;
        let function = client.get_function(
            GetFunctionRequest {
                name: "projects/p/locations/l/functions/f".into(),
            },
            RequestOptions::default(),
        )?;
        assert_eq!(function.name, "projects/p/locations/l/functions/f");
        Ok(())
    }

    #[test]
    fn unimplemented_rpc() -> anyhow::Result<()> {
        let client = CloudFunctionsService::from_stub(MockStub::new())?;
        let err = client
            .generate_upload_url(GenerateUploadUrlRequest::default(), RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented));
        Ok(())
    }
}
