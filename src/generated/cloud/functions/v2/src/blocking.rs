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
//! # use google_cloud_functions_v2::blocking::FunctionService;
//! # use google_cloud_functions_v2::model::ListFunctionsRequest;
//! # fn sample() -> anyhow::Result<()> {
//! let client = FunctionService::builder().build()?;
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

/// A synchronous version of [crate::client::FunctionService].
#[derive(Clone, Debug)]
pub struct FunctionService {
    runtime: Arc<tokio::runtime::Runtime>,
    inner: Arc<dyn crate::stub::dynamic::FunctionService>,
}

impl FunctionService {
    /// Returns a builder for [FunctionService].
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            inner: crate::client::FunctionService::builder(),
        }
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> gax::client_builder::Result<Self>
    where
        T: crate::stub::FunctionService + 'static,
    {
        let client = crate::client::FunctionService::from_stub(stub);
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
    ) -> Result<Function> {
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

    /// Returns the runtimes supported in the requested project and location.
    pub fn list_runtimes(
        &self,
        request: ListRuntimesRequest,
        options: RequestOptions,
    ) -> Result<ListRuntimesResponse> {
        self.runtime
            .block_on(self.inner.list_runtimes(request, options))
    }
}

/// A builder for the blocking [FunctionService].
pub struct ClientBuilder {
    inner: crate::builder::function_service::ClientBuilder,
}

impl ClientBuilder {
    /// Creates the runtime and initializes the client.
    pub fn build(self) -> gax::client_builder::Result<FunctionService> {
        let runtime = new_runtime()?;
        let client = runtime.block_on(self.inner.build())?;
        Ok(FunctionService {
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
