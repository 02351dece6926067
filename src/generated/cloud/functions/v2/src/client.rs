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


/// Implements a client for the Cloud Functions API (v2).
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_functions_v2::client::FunctionService;
/// use futures::StreamExt;
/// let client = FunctionService::builder().build().await?;
/// let parent = "projects/my-project/locations/-";
/// let mut items = client.list_functions().set_parent(parent).by_item().await?;
/// while let Some(function) = items.next().await {
///     println!("{}", function?.name);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `FunctionService` use the `with_*` methods in the type returned
/// by [builder()][FunctionService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://cloudfunctions.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::function_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::function_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `FunctionService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `FunctionService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct FunctionService {
    pub(crate) inner: std::sync::Arc<dyn super::stub::dynamic::FunctionService>,
}

impl FunctionService {
    /// Returns a builder for [FunctionService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_functions_v2::client::FunctionService;
    /// let client = FunctionService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::function_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::function_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FunctionService + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::FunctionService>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FunctionService> {
        super::transport::FunctionService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FunctionService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FunctionService::new)
    }

    /// Returns a function with the given name from the requested project.
    pub fn get_function(&self) -> super::builder::function_service::GetFunction {
        super::builder::function_service::GetFunction::new(self.inner.clone())
    }

    /// Returns a list of functions that belong to the requested project.
    ///
    /// Use [by_page()] or [by_item()] to walk all the results.
    ///
    /// [by_page()]: super::builder::function_service::ListFunctions::by_page
    /// [by_item()]: super::builder::function_service::ListFunctions::by_item
    pub fn list_functions(&self) -> super::builder::function_service::ListFunctions {
        super::builder::function_service::ListFunctions::new(self.inner.clone())
    }

    /// Creates a new function. If a function with the given name already exists
    /// in the specified project, the long running operation will return
    /// `ALREADY_EXISTS` error.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle. This client does not poll it.
    pub fn create_function(&self) -> super::builder::function_service::CreateFunction {
        super::builder::function_service::CreateFunction::new(self.inner.clone())
    }

    /// Updates existing function.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle.
    pub fn update_function(&self) -> super::builder::function_service::UpdateFunction {
        super::builder::function_service::UpdateFunction::new(self.inner.clone())
    }

    /// Deletes a function with the given name from the specified project. If the
    /// given function is used by some trigger, the trigger will be updated to
    /// remove this function.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle.
    pub fn delete_function(&self) -> super::builder::function_service::DeleteFunction {
        super::builder::function_service::DeleteFunction::new(self.inner.clone())
    }

    /// Returns a signed URL for uploading a function source code.
    ///
    /// Once the function source code upload is complete, the used signed URL
    /// should be provided in `CreateFunction` or `UpdateFunction` request as a
    /// reference to the function source code.
    pub fn generate_upload_url(&self) -> super::builder::function_service::GenerateUploadUrl {
        super::builder::function_service::GenerateUploadUrl::new(self.inner.clone())
    }

    /// Returns a signed URL for downloading deployed function source code.
    pub fn generate_download_url(&self) -> super::builder::function_service::GenerateDownloadUrl {
        super::builder::function_service::GenerateDownloadUrl::new(self.inner.clone())
    }

    /// Returns a list of runtimes that are supported for the requested project.
    pub fn list_runtimes(&self) -> super::builder::function_service::ListRuntimes {
        super::builder::function_service::ListRuntimes::new(self.inner.clone())
    }
}
