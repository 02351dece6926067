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


//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::FunctionService].
///
/// Application developers may need to implement this trait to mock
/// `client::FunctionService`. In other use-cases, application developers only use
/// `client::FunctionService` and need not be concerned with this trait or its
/// implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait FunctionService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::FunctionService::get_function].
    fn get_function(
        &self,
        _req: crate::model::GetFunctionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::Function>> + Send {
        gaxi::unimplemented::unimplemented_stub("GetFunction")
    }

    /// Implements [super::client::FunctionService::list_functions].
    fn list_functions(
        &self,
        _req: crate::model::ListFunctionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::ListFunctionsResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListFunctions")
    }

    /// Implements [super::client::FunctionService::create_function].
    fn create_function(
        &self,
        _req: crate::model::CreateFunctionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub("CreateFunction")
    }

    /// Implements [super::client::FunctionService::update_function].
    fn update_function(
        &self,
        _req: crate::model::UpdateFunctionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub("UpdateFunction")
    }

    /// Implements [super::client::FunctionService::delete_function].
    fn delete_function(
        &self,
        _req: crate::model::DeleteFunctionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::Operation>> + Send {
        gaxi::unimplemented::unimplemented_stub("DeleteFunction")
    }

    /// Implements [super::client::FunctionService::generate_upload_url].
    fn generate_upload_url(
        &self,
        _req: crate::model::GenerateUploadUrlRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::GenerateUploadUrlResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub("GenerateUploadUrl")
    }

    /// Implements [super::client::FunctionService::generate_download_url].
    fn generate_download_url(
        &self,
        _req: crate::model::GenerateDownloadUrlRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::GenerateDownloadUrlResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub("GenerateDownloadUrl")
    }

    /// Implements [super::client::FunctionService::list_runtimes].
    fn list_runtimes(
        &self,
        _req: crate::model::ListRuntimesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl Future<Output = crate::Result<crate::model::ListRuntimesResponse>> + Send {
        gaxi::unimplemented::unimplemented_stub("ListRuntimes")
    }
}
