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

//! Builds and caches one callable per RPC.

use super::InnerClient;
use super::from_status::to_gax_error;
use gax::Result;
use gax::error::Error;
use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

/// A unary RPC bound to its request and response types.
///
/// Created from the full method path, e.g.
/// `/google.cloud.functions.v1.CloudFunctionsService/GetFunction`.
#[derive(Debug)]
pub struct UnaryMethod<Req, Resp> {
    method: tonic::GrpcMethod<'static>,
    path: http::uri::PathAndQuery,
    _types: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> UnaryMethod<Req, Resp> {
    pub fn new(path: &'static str) -> Result<Self> {
        let (service, method) = path
            .strip_prefix('/')
            .and_then(|p| p.split_once('/'))
            .filter(|(s, m)| !s.is_empty() && !m.is_empty() && !m.contains('/'))
            .ok_or_else(|| Error::binding(format!("malformed gRPC method path {path:?}")))?;
        let pq = http::uri::PathAndQuery::from_maybe_shared(path).map_err(Error::binding)?;
        Ok(Self {
            method: tonic::GrpcMethod::new(service, method),
            path: pq,
            _types: PhantomData,
        })
    }

    /// The wire path, `/<package>.<Service>/<Method>`.
    pub fn path(&self) -> &str {
        self.path.path()
    }

    pub fn service(&self) -> &str {
        self.method.service()
    }

    pub fn method(&self) -> &str {
        self.method.method()
    }
}

impl<Req, Resp> UnaryMethod<Req, Resp>
where
    Req: prost::Message + 'static,
    Resp: prost::Message + Default + 'static,
{
    pub(crate) async fn call(
        &self,
        inner: &mut InnerClient,
        mut request: tonic::Request<Req>,
    ) -> Result<Resp> {
        request.extensions_mut().insert(self.method.clone());
        let codec = tonic_prost::ProstCodec::<Req, Resp>::default();
        inner.ready().await.map_err(Error::io)?;
        let response = inner
            .unary(request, self.path.clone(), codec)
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }
}

type AnyMethod = Arc<dyn Any + Send + Sync>;

/// Lazily builds the [UnaryMethod] for each RPC path.
///
/// Each path is built at most once for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: Mutex<HashMap<&'static str, AnyMethod>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the method for `path`, building it on first use.
    ///
    /// Fails with a binding error if `path` was first used with a different
    /// request or response type.
    pub fn get_or_build<Req, Resp>(&self, path: &'static str) -> Result<Arc<UnaryMethod<Req, Resp>>>
    where
        Req: 'static,
        Resp: 'static,
    {
        let mut methods = self
            .methods
            .lock()
            .map_err(|e| Error::binding(e.to_string()))?;
        let entry = match methods.get(path) {
            Some(m) => m.clone(),
            None => {
                let built: AnyMethod = Arc::new(UnaryMethod::<Req, Resp>::new(path)?);
                tracing::debug!("built gRPC method {path}");
                methods.insert(path, built.clone());
                built
            }
        };
        entry.downcast::<UnaryMethod<Req, Resp>>().map_err(|_| {
            Error::binding(format!(
                "{path} is already registered with different request or response types"
            ))
        })
    }

    /// The number of methods built so far.
    pub fn len(&self) -> usize {
        self.methods.lock().map(|m| m.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
