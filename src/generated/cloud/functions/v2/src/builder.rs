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


pub mod function_service {
    use crate::Result;
    use crate::model::{ListFunctionsRequest, ListFunctionsResponse};

    /// A builder for [FunctionService][crate::client::FunctionService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_functions_v2::*;
    /// # use builder::function_service::ClientBuilder;
    /// # use client::FunctionService;
    /// let builder : ClientBuilder = FunctionService::builder();
    /// let client = builder
    ///     .with_endpoint("https://cloudfunctions.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::FunctionService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = FunctionService;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::FunctionService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [FunctionService::get_function][crate::client::FunctionService::get_function] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::GetFunction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetFunction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetFunction(RequestBuilder<crate::model::GetFunctionRequest>);

    impl GetFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Function> {
            (*self.0.stub)
                .get_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetFunctionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::list_functions][crate::client::FunctionService::list_functions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::ListFunctions;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListFunctions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFunctions(RequestBuilder<crate::model::ListFunctionsRequest>);

    impl ListFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFunctionsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListFunctionsResponse> {
            (*self.0.stub)
                .list_functions(self.0.request, self.0.options)
                .await
        }

        /// Sends the request and returns a pager over the response pages.
        ///
        /// The first page is fetched before this function returns, the
        /// following pages are fetched as the pager advances.
        pub async fn by_page(
            self,
        ) -> Result<paginator::Pager<ListFunctionsRequest, ListFunctionsResponse>> {
            let RequestBuilder {
                stub,
                request,
                options,
            } = self.0;
            let first = stub.list_functions(request.clone(), options.clone()).await?;
            let fetch = move |r: ListFunctionsRequest| {
                let stub = stub.clone();
                let options = options.clone();
                let fut: futures::future::BoxFuture<'static, Result<ListFunctionsResponse>> =
                    Box::pin(async move { stub.list_functions(r, options).await });
                fut
            };
            Ok(paginator::Pager::new(fetch, request, first))
        }

        /// Sends the request and returns a stream over the items of every page.
        pub async fn by_item(
            self,
        ) -> Result<futures::stream::BoxStream<'static, Result<crate::model::Function>>> {
            Ok(self.by_page().await?.items())
        }

        /// Sets the value of [parent][crate::model::ListFunctionsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListFunctionsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListFunctionsRequest::page_token].
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListFunctionsRequest::filter].
        pub fn set_filter<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListFunctionsRequest::order_by].
        pub fn set_order_by<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::create_function][crate::client::FunctionService::create_function] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::CreateFunction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateFunction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateFunction(RequestBuilder<crate::model::CreateFunctionRequest>);

    impl CreateFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .create_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [parent][crate::model::CreateFunctionRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [function][crate::model::CreateFunctionRequest::function].
        pub fn set_function<T: Into<crate::model::Function>>(mut self, v: T) -> Self {
            self.0.request.function = Some(v.into());
            self
        }

        /// Sets or clears the value of [function][crate::model::CreateFunctionRequest::function].
        pub fn set_or_clear_function<T: Into<crate::model::Function>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.function = v.map(|x| x.into());
            self
        }

        pub fn set_function_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.function_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::update_function][crate::client::FunctionService::update_function] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::UpdateFunction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateFunction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateFunction(RequestBuilder<crate::model::UpdateFunctionRequest>);

    impl UpdateFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .update_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [function][crate::model::UpdateFunctionRequest::function].
        pub fn set_function<T: Into<crate::model::Function>>(mut self, v: T) -> Self {
            self.0.request.function = Some(v.into());
            self
        }

        /// Sets or clears the value of [function][crate::model::UpdateFunctionRequest::function].
        pub fn set_or_clear_function<T: Into<crate::model::Function>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.function = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateFunctionRequest::update_mask].
        pub fn set_update_mask<T: Into<prost_types::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateFunctionRequest::update_mask].
        pub fn set_or_clear_update_mask<T: Into<prost_types::FieldMask>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::delete_function][crate::client::FunctionService::delete_function] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::DeleteFunction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteFunction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFunction(RequestBuilder<crate::model::DeleteFunctionRequest>);

    impl DeleteFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete_function(self.0.request, self.0.options)
                .await
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::generate_upload_url][crate::client::FunctionService::generate_upload_url] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::GenerateUploadUrl;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GenerateUploadUrl {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GenerateUploadUrl(RequestBuilder<crate::model::GenerateUploadUrlRequest>);

    impl GenerateUploadUrl {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GenerateUploadUrlRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GenerateUploadUrlResponse> {
            (*self.0.stub)
                .generate_upload_url(self.0.request, self.0.options)
                .await
        }

        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GenerateUploadUrl {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::generate_download_url][crate::client::FunctionService::generate_download_url] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::GenerateDownloadUrl;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GenerateDownloadUrl {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GenerateDownloadUrl(RequestBuilder<crate::model::GenerateDownloadUrlRequest>);

    impl GenerateDownloadUrl {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GenerateDownloadUrlRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GenerateDownloadUrlResponse> {
            (*self.0.stub)
                .generate_download_url(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GenerateDownloadUrlRequest::name].
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GenerateDownloadUrl {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FunctionService::list_runtimes][crate::client::FunctionService::list_runtimes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_functions_v2::builder;
    /// use builder::function_service::ListRuntimes;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListRuntimes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListRuntimes(RequestBuilder<crate::model::ListRuntimesRequest>);

    impl ListRuntimes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FunctionService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRuntimesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListRuntimesResponse> {
            (*self.0.stub)
                .list_runtimes(self.0.request, self.0.options)
                .await
        }

        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListRuntimesRequest::filter].
        pub fn set_filter<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRuntimes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
