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

//! Implements the common features of the gRPC-based clients.

use auth::credentials::{CacheableResource, Credentials};
use auth::errors::CredentialsError;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::retry_policy::RetryPolicy;
use gax::retry_throttler::SharedRetryThrottler;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::retry_loop::{Policies, retry_loop};

pub mod from_status;
mod registry;
pub use registry::{MethodRegistry, UnaryMethod};

#[doc(hidden)]
pub type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

/// A gRPC client shared by all the stubs of a service.
///
/// The channel is opened on the first request and reused afterwards. Clones
/// share the channel, the method registry, and the credentials.
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: String,
    channel: Arc<OnceCell<InnerClient>>,
    registry: Arc<MethodRegistry>,
    credentials: Credentials,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: SharedRetryThrottler,
}

impl Client {
    /// Create a new client.
    ///
    /// This validates the endpoint and loads the credentials, it does not
    /// connect to the service.
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let credentials = Self::make_credentials(&config)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Self::make_endpoint(&endpoint).map_err(BuilderError::transport)?;
        Ok(Self {
            endpoint,
            channel: Arc::new(OnceCell::new()),
            registry: Arc::new(MethodRegistry::new()),
            credentials,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            retry_throttler: config.retry_throttler,
        })
    }

    /// Sends a unary request.
    ///
    /// `path` is the full method name, e.g.
    /// `/google.cloud.functions.v2.FunctionService/GetFunction`.
    pub async fn execute<Request, Response>(
        &self,
        path: &'static str,
        request: Request,
        options: RequestOptions,
        api_client_header: &'static str,
        request_params: &str,
    ) -> Result<Response>
    where
        Request: prost::Message + Clone + 'static,
        Response: prost::Message + Default + 'static,
    {
        let method = self.registry.get_or_build::<Request, Response>(path)?;
        let headers = Self::make_headers(api_client_header, request_params, &options)?;
        match self.get_retry_policy(&options) {
            None => {
                self.request_attempt(&method, request, &options, None, headers)
                    .await
            }
            Some(policy) => {
                self.retry_loop(policy, &method, request, options, headers)
                    .await
            }
        }
    }

    /// The registry holding the methods used by this client.
    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    async fn retry_loop<Request, Response>(
        &self,
        retry_policy: Arc<dyn RetryPolicy>,
        method: &UnaryMethod<Request, Response>,
        request: Request,
        options: RequestOptions,
        headers: HeaderMap,
    ) -> Result<Response>
    where
        Request: prost::Message + Clone + 'static,
        Response: prost::Message + Default + 'static,
    {
        let policies = Policies {
            idempotent: options.idempotent().unwrap_or(false),
            retry: retry_policy,
            backoff: self.get_backoff_policy(&options),
            throttler: self.get_retry_throttler(&options),
        };
        let options = &options;
        let attempt = move |remaining_time: Option<Duration>| {
            self.request_attempt(
                method,
                request.clone(),
                options,
                remaining_time,
                headers.clone(),
            )
        };
        retry_loop(attempt, tokio::time::sleep, policies).await
    }

    /// Makes a single request attempt.
    async fn request_attempt<Request, Response>(
        &self,
        method: &UnaryMethod<Request, Response>,
        request: Request,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
        mut headers: HeaderMap,
    ) -> Result<Response>
    where
        Request: prost::Message + 'static,
        Response: prost::Message + Default + 'static,
    {
        let auth_headers = match self
            .credentials
            .headers(http::Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(Error::authentication(CredentialsError::from_msg(
                    false,
                    "credentials returned no headers for an uncached request",
                )));
            }
        };
        headers.extend(auth_headers);
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, tonic::Extensions::new(), request);
        let timeout = gax::retry_loop_internal::effective_timeout(options, remaining_time);
        if let Some(timeout) = timeout {
            request.set_timeout(timeout);
        }
        let mut inner = self.channel().await?;
        method.call(&mut inner, request).await
    }

    async fn channel(&self) -> Result<InnerClient> {
        let inner = self
            .channel
            .get_or_try_init(|| Self::connect(&self.endpoint))
            .await?;
        Ok(inner.clone())
    }

    async fn connect(endpoint: &str) -> Result<InnerClient> {
        let endpoint = Self::make_endpoint(endpoint).map_err(Error::io)?;
        tracing::debug!("opening gRPC channel to {}", endpoint.uri());
        let channel = endpoint.connect().await.map_err(Error::io)?;
        Ok(tonic::client::Grpc::new(channel))
    }

    fn make_endpoint(
        endpoint: &str,
    ) -> std::result::Result<tonic::transport::Endpoint, tonic::transport::Error> {
        use tonic::transport::{ClientTlsConfig, Endpoint};
        let builder = Endpoint::from_shared(endpoint.to_string())?;
        if endpoint.starts_with("https://") {
            return builder.tls_config(ClientTlsConfig::new().with_enabled_roots());
        }
        Ok(builder)
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    fn make_headers(
        api_client_header: &'static str,
        request_params: &str,
        options: &RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static("x-goog-api-client"),
            HeaderValue::from_static(api_client_header),
        );
        if !request_params.is_empty() {
            headers.append(
                HeaderName::from_static("x-goog-request-params"),
                HeaderValue::from_str(request_params).map_err(Error::ser)?,
            );
        }
        if let Some(user_agent) = options.user_agent() {
            headers.append(
                http::header::USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        Ok(headers)
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    fn get_retry_throttler(&self, options: &RequestOptions) -> SharedRetryThrottler {
        options
            .retry_throttler()
            .clone()
            .unwrap_or_else(|| self.retry_throttler.clone())
    }
}
