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

//! Walk the results of list RPCs one page at a time.
//!
//! List RPCs, as defined by [AIP-4233], return their results in pages. Each
//! response carries a `next_page_token`, an empty token marks the last page.
//! A [Pager] starts from a request and the response already received for it,
//! and fetches the following pages on demand.
//!
//! The pager never retries. Any error returned by the fetch function is
//! reported at the page where it happened, pages yielded before the error
//! remain valid.
//!
//! # Example
//! ```
//! # use google_cloud_functions_paginator::{Pager, PageableRequest, PageableResponse};
//! # #[derive(Clone, Default)]
//! # struct Request { page_token: String }
//! # impl PageableRequest for Request {
//! #     fn set_page_token(&mut self, v: String) { self.page_token = v; }
//! #     fn page_token(&self) -> &str { &self.page_token }
//! # }
//! # #[derive(Clone, Default)]
//! # struct Response { names: Vec<String>, next_page_token: String }
//! # impl PageableResponse for Response {
//! #     type PageItem = String;
//! #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
//! #     fn items(&self) -> &[String] { &self.names }
//! #     fn into_items(self) -> Vec<String> { self.names }
//! # }
//! # tokio_test::block_on(async {
//! use futures::StreamExt;
//! let first = Response { names: vec!["a".into()], ..Default::default() };
//! let fetch = |_req: Request| -> futures::future::BoxFuture<'static, gax::Result<Response>> {
//!     Box::pin(async { Ok(Response::default()) })
//! };
//! let mut items = Pager::new(fetch, Request::default(), first).items();
//! while let Some(name) = items.next().await {
//!     println!("{}", name?);
//! }
//! # gax::Result::<()>::Ok(()) });
//! ```
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use gax::Result;
use futures::future::BoxFuture;
use futures::stream::{BoxStream, StreamExt};

pub mod blocking;

/// A request for a list RPC.
///
/// The pager copies the request for each page, changing only the page token.
pub trait PageableRequest: Clone + Send + 'static {
    fn set_page_token(&mut self, token: String);
    fn page_token(&self) -> &str;
}

/// A response from a list RPC.
pub trait PageableResponse: Send + 'static {
    type PageItem: Send + 'static;

    /// The token to fetch the next page, empty on the last page.
    fn next_page_token(&self) -> String;

    /// The results in this page.
    fn items(&self) -> &[Self::PageItem];

    /// Consumes the response and returns its results.
    fn into_items(self) -> Vec<Self::PageItem>;
}

type Fetch<Req, Resp> = Box<dyn FnMut(Req) -> BoxFuture<'static, Result<Resp>> + Send>;

/// An asynchronous pager over the results of a list RPC.
///
/// The pager holds the most recent request and the response it produced. The
/// page token in [current_request][Pager::current_request] is always the token
/// used to fetch [current_response][Pager::current_response].
///
/// Only one fetch can be outstanding at a time, as [next_page][Pager::next_page]
/// borrows the pager mutably. If the future returned by `next_page` is dropped
/// before it completes the pager keeps its previous state.
pub struct Pager<Req, Resp> {
    fetch: Fetch<Req, Resp>,
    request: Req,
    response: Resp,
    started: bool,
}

impl<Req, Resp> Pager<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
{
    /// Creates a pager from the first request and its response.
    ///
    /// This does not make any calls. `fetch` is only called to retrieve the
    /// pages after `response`.
    pub fn new<F>(fetch: F, request: Req, response: Resp) -> Self
    where
        F: FnMut(Req) -> BoxFuture<'static, Result<Resp>> + Send + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            request,
            response,
            started: false,
        }
    }

    /// The most recently fetched response.
    pub fn current_response(&self) -> &Resp {
        &self.response
    }

    /// The request that produced [current_response][Pager::current_response].
    pub fn current_request(&self) -> &Req {
        &self.request
    }

    /// Returns the next page, or `None` after the last page.
    ///
    /// The first call returns the response given to [new][Pager::new]. Each
    /// call after that fetches a new page while the current response has a
    /// non-empty `next_page_token`. On error the pager is unchanged, calling
    /// this function again retries the same page.
    pub async fn next_page(&mut self) -> Option<Result<Resp>> {
        if !self.started {
            self.started = true;
            return Some(Ok(self.response.clone()));
        }
        let token = self.response.next_page_token();
        if token.is_empty() {
            return None;
        }
        let mut request = self.request.clone();
        request.set_page_token(token);
        let response = match (self.fetch)(request.clone()).await {
            Ok(r) => r,
            Err(e) => return Some(Err(e)),
        };
        self.request = request;
        self.response = response.clone();
        Some(Ok(response))
    }

    /// Converts the pager into a stream of pages.
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn pages(self) -> BoxStream<'static, Result<Resp>> {
        futures::stream::unfold(Some(self), |state| async move {
            let mut pager = state?;
            match pager.next_page().await? {
                Ok(page) => Some((Ok(page), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        })
        .boxed()
    }

    /// Converts the pager into a stream of the items in each page.
    ///
    /// Items are returned in page order, and in order within each page. The
    /// stream ends after the last item, or after the first error.
    pub fn items(self) -> BoxStream<'static, Result<Resp::PageItem>> {
        self.pages()
            .flat_map(|page| {
                let items: Vec<Result<Resp::PageItem>> = match page {
                    Ok(p) => p.into_items().into_iter().map(Ok).collect(),
                    Err(e) => vec![Err(e)],
                };
                futures::stream::iter(items)
            })
            .boxed()
    }
}

impl<Req, Resp> std::fmt::Debug for Pager<Req, Resp>
where
    Req: std::fmt::Debug,
    Resp: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("request", &self.request)
            .field("response", &self.response)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
