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


//! Local gRPC servers for end-to-end tests of the Cloud Functions clients.
//!
//! Each server forwards the RPCs to a mock, the tests set expectations on the
//! mock and then use the client libraries against the server.
//!
//! # Example
//! ```no_run
//! use integration_tests_functions::{start, v2::{FunctionServiceServer, MockFunctionService}};
//! # async fn test() -> anyhow::Result<()> {
//! let mut mock = MockFunctionService::new();
//! mock.expect_list_runtimes()
//!     .return_once(|_| Err(tonic::Status::permission_denied("test message")));
//! let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
//! # Ok(()) }
//! ```

pub mod v1;
pub mod v2;

use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tonic::codegen::{Body, BoxFuture, StdError};

/// Starts `service` on a random local port.
///
/// Returns the endpoint for the clients and the task running the server.
pub async fn start<S>(service: S) -> anyhow::Result<(String, JoinHandle<()>)>
where
    S: tonic::codegen::Service<
            http::Request<tonic::body::Body>,
            Response = http::Response<tonic::body::Body>,
            Error = Infallible,
        > + tonic::server::NamedService
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async {
        let stream = tokio_stream::wrappers::TcpListenerStream::new(listener);

        let _ = tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(stream)
            .await;
    });

    Ok((to_uri(addr), server))
}

fn to_uri(addr: SocketAddr) -> String {
    if addr.is_ipv6() {
        format!("http://[{}]:{}", addr.ip(), addr.port())
    } else {
        format!("http://{}:{}", addr.ip(), addr.port())
    }
}

/// Adapts a closure to [tonic::server::UnaryService].
struct Unary<F>(F);

impl<Req, Resp, F, Fut> tonic::server::UnaryService<Req> for Unary<F>
where
    F: FnMut(tonic::Request<Req>) -> Fut,
    Fut: Future<Output = Result<tonic::Response<Resp>, tonic::Status>> + Send + 'static,
{
    type Response = Resp;
    type Future = BoxFuture<tonic::Response<Resp>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        Box::pin((self.0)(request))
    }
}

/// Decodes `req`, calls `handler` and encodes its response.
fn unary<Req, Resp, B, F, Fut>(
    req: http::Request<B>,
    handler: F,
) -> BoxFuture<http::Response<tonic::body::Body>, Infallible>
where
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
    F: FnMut(tonic::Request<Req>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<tonic::Response<Resp>, tonic::Status>> + Send + 'static,
{
    Box::pin(async move {
        let codec = tonic_prost::ProstCodec::<Resp, Req>::default();
        let mut grpc = tonic::server::Grpc::new(codec);
        Ok(grpc.unary(Unary(handler), req).await)
    })
}

/// The response for methods the server does not know.
fn unimplemented() -> BoxFuture<http::Response<tonic::body::Body>, Infallible> {
    Box::pin(async move {
        let mut response = http::Response::new(tonic::body::Body::default());
        let headers = response.headers_mut();
        headers.insert(
            tonic::Status::GRPC_STATUS,
            (tonic::Code::Unimplemented as i32).into(),
        );
        headers.insert(
            http::header::CONTENT_TYPE,
            tonic::metadata::GRPC_CONTENT_TYPE,
        );
        Ok(response)
    })
}

/// Returns the `x-goog-request-params` header sent with `request`.
pub fn request_params<T>(request: &tonic::Request<T>) -> Option<&str> {
    request
        .metadata()
        .get("x-goog-request-params")
        .and_then(|v| v.to_str().ok())
}
