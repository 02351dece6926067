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


/// Implements a client for the Cloud Functions API (v1).
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_functions_v1::client::CloudFunctionsService;
/// use futures::StreamExt;
/// let client = CloudFunctionsService::builder().build().await?;
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
/// To configure `CloudFunctionsService` use the `with_*` methods in the type returned
/// by [builder()][CloudFunctionsService::builder]. The default configuration should
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
/// [with_endpoint()]: super::builder::cloud_functions_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::cloud_functions_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `CloudFunctionsService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `CloudFunctionsService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct CloudFunctionsService {
    pub(crate) inner: std::sync::Arc<dyn super::stub::dynamic::CloudFunctionsService>,
}

impl CloudFunctionsService {
    /// Returns a builder for [CloudFunctionsService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_functions_v1::client::CloudFunctionsService;
    /// let client = CloudFunctionsService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::cloud_functions_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::cloud_functions_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CloudFunctionsService + 'static,
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
    ) -> gax::client_builder::Result<
        std::sync::Arc<dyn super::stub::dynamic::CloudFunctionsService>,
    > {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudFunctionsService> {
        super::transport::CloudFunctionsService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudFunctionsService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CloudFunctionsService::new)
    }

    /// Returns a list of functions that belong to the requested project.
    ///
    /// Use [by_page()] or [by_item()] to walk all the results.
    ///
    /// [by_page()]: super::builder::cloud_functions_service::ListFunctions::by_page
    /// [by_item()]: super::builder::cloud_functions_service::ListFunctions::by_item
    pub fn list_functions(&self) -> super::builder::cloud_functions_service::ListFunctions {
        super::builder::cloud_functions_service::ListFunctions::new(self.inner.clone())
    }

    /// Returns a function with the given name from the requested project.
    pub fn get_function(&self) -> super::builder::cloud_functions_service::GetFunction {
        super::builder::cloud_functions_service::GetFunction::new(self.inner.clone())
    }

    /// Creates a new function. If a function with the given name already exists
    /// in the specified project, the long running operation returns an
    /// `ALREADY_EXISTS` error.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle. This client does not poll it.
    pub fn create_function(&self) -> super::builder::cloud_functions_service::CreateFunction {
        super::builder::cloud_functions_service::CreateFunction::new(self.inner.clone())
    }

    /// Updates existing function.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle.
    pub fn update_function(&self) -> super::builder::cloud_functions_service::UpdateFunction {
        super::builder::cloud_functions_service::UpdateFunction::new(self.inner.clone())
    }

    /// Deletes a function with the given name from the specified project. If the
    /// given function is used by some trigger, the trigger is updated to
    /// remove this function.
    ///
    /// This is a long-running operation, the response is the
    /// [Operation][crate::model::Operation] handle.
    pub fn delete_function(&self) -> super::builder::cloud_functions_service::DeleteFunction {
        super::builder::cloud_functions_service::DeleteFunction::new(self.inner.clone())
    }

    /// Synchronously invokes a deployed Cloud Function. To be used for testing
    /// purposes as very limited traffic is allowed.
    pub fn call_function(&self) -> super::builder::cloud_functions_service::CallFunction {
        super::builder::cloud_functions_service::CallFunction::new(self.inner.clone())
    }

    /// Returns a signed URL for uploading a function source code.
    pub fn generate_upload_url(
        &self,
    ) -> super::builder::cloud_functions_service::GenerateUploadUrl {
        super::builder::cloud_functions_service::GenerateUploadUrl::new(self.inner.clone())
    }

    /// Returns a signed URL for downloading deployed function source code.
    pub fn generate_download_url(
        &self,
    ) -> super::builder::cloud_functions_service::GenerateDownloadUrl {
        super::builder::cloud_functions_service::GenerateDownloadUrl::new(self.inner.clone())
    }

    /// Sets the IAM access control policy on the specified function.
    /// Replaces any existing policy.
    pub fn set_iam_policy(&self) -> super::builder::cloud_functions_service::SetIamPolicy {
        super::builder::cloud_functions_service::SetIamPolicy::new(self.inner.clone())
    }

    /// Gets the IAM access control policy for a function.
    pub fn get_iam_policy(&self) -> super::builder::cloud_functions_service::GetIamPolicy {
        super::builder::cloud_functions_service::GetIamPolicy::new(self.inner.clone())
    }

    /// Tests the specified permissions against the IAM access control policy
    /// for a function.
    pub fn test_iam_permissions(
        &self,
    ) -> super::builder::cloud_functions_service::TestIamPermissions {
        super::builder::cloud_functions_service::TestIamPermissions::new(self.inner.clone())
    }
}
