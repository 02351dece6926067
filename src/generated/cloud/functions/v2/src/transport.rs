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

const DEFAULT_HOST: &str = "https://cloudfunctions.googleapis.com";

mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.grpc_header_value()
        };
    }
}

/// The full method names of each RPC.
pub(crate) mod path {
    pub(crate) const GET_FUNCTION: &str = "/google.cloud.functions.v2.FunctionService/GetFunction";
    pub(crate) const LIST_FUNCTIONS: &str =
        "/google.cloud.functions.v2.FunctionService/ListFunctions";
    pub(crate) const CREATE_FUNCTION: &str =
        "/google.cloud.functions.v2.FunctionService/CreateFunction";
    pub(crate) const UPDATE_FUNCTION: &str =
        "/google.cloud.functions.v2.FunctionService/UpdateFunction";
    pub(crate) const DELETE_FUNCTION: &str =
        "/google.cloud.functions.v2.FunctionService/DeleteFunction";
    pub(crate) const GENERATE_UPLOAD_URL: &str =
        "/google.cloud.functions.v2.FunctionService/GenerateUploadUrl";
    pub(crate) const GENERATE_DOWNLOAD_URL: &str =
        "/google.cloud.functions.v2.FunctionService/GenerateDownloadUrl";
    pub(crate) const LIST_RUNTIMES: &str =
        "/google.cloud.functions.v2.FunctionService/ListRuntimes";
}

/// Implements [FunctionService](super::stub::FunctionService) using gRPC.
#[derive(Clone)]
pub struct FunctionService {
    inner: gaxi::grpc::Client,
}

impl std::fmt::Debug for FunctionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("FunctionService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl FunctionService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::FunctionService for FunctionService {
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Function> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::GET_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListFunctionsResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::LIST_FUNCTIONS,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::CREATE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([(
            "function.name",
            req.function
                .as_ref()
                .map(|f| f.name.as_str())
                .unwrap_or_default(),
        )]);
        self.inner
            .execute(
                path::UPDATE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::Operation> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::DELETE_FUNCTION,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn generate_upload_url(
        &self,
        req: crate::model::GenerateUploadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateUploadUrlResponse> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::GENERATE_UPLOAD_URL,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn generate_download_url(
        &self,
        req: crate::model::GenerateDownloadUrlRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::GenerateDownloadUrlResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("name", req.name.as_str())]);
        self.inner
            .execute(
                path::GENERATE_DOWNLOAD_URL,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }

    async fn list_runtimes(
        &self,
        req: crate::model::ListRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListRuntimesResponse> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let params = gaxi::routing_parameter::join([("parent", req.parent.as_str())]);
        self.inner
            .execute(
                path::LIST_RUNTIMES,
                req,
                options,
                info::X_GOOG_API_CLIENT_HEADER.as_str(),
                &params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::stub::FunctionService as _;
    use auth::credentials::anonymous::Builder as Anonymous;
    use gaxi::grpc::UnaryMethod;
    use test_case::test_case;

    #[test_case(path::GET_FUNCTION, "GetFunction")]
    #[test_case(path::LIST_FUNCTIONS, "ListFunctions")]
    #[test_case(path::CREATE_FUNCTION, "CreateFunction")]
    #[test_case(path::UPDATE_FUNCTION, "UpdateFunction")]
    #[test_case(path::DELETE_FUNCTION, "DeleteFunction")]
    #[test_case(path::GENERATE_UPLOAD_URL, "GenerateUploadUrl")]
    #[test_case(path::GENERATE_DOWNLOAD_URL, "GenerateDownloadUrl")]
    #[test_case(path::LIST_RUNTIMES, "ListRuntimes")]
    fn method_paths(path: &'static str, method: &str) -> anyhow::Result<()> {
        let m = UnaryMethod::<GetFunctionRequest, Function>::new(path)?;
        assert_eq!(m.service(), "google.cloud.functions.v2.FunctionService");
        assert_eq!(m.method(), method);
        Ok(())
    }

    #[tokio::test]
    async fn methods_are_built_lazily() -> anyhow::Result<()> {
        let mut config = gaxi::options::ClientConfig::default();
        config.cred = Some(Anonymous::new().build());
        // Nothing listens on port 1.
        config.endpoint = Some("http://127.0.0.1:1".to_string());
        let transport = FunctionService::new(config).await?;
        assert_eq!(transport.inner.registry().len(), 0);

        let options = gax::options::RequestOptions::default();
        let err = transport
            .list_runtimes(ListRuntimesRequest::default(), options.clone())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        let _ = transport
            .list_runtimes(ListRuntimesRequest::default(), options.clone())
            .await;
        assert_eq!(transport.inner.registry().len(), 1);
        let _ = transport
            .generate_upload_url(GenerateUploadUrlRequest::default(), options)
            .await;
        assert_eq!(transport.inner.registry().len(), 2);
        Ok(())
    }
}
