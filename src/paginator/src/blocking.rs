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

//! A pager for synchronous clients.
//!
//! Each page is fetched by blocking the calling thread.

use crate::{PageableRequest, PageableResponse};
use gax::Result;

type Fetch<Req, Resp> = Box<dyn FnMut(Req) -> Result<Resp> + Send>;

/// A blocking pager over the results of a list RPC.
///
/// See [crate::Pager] for the asynchronous version.
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
    /// Creates a pager from the first request and its response, without
    /// making any calls.
    pub fn new<F>(fetch: F, request: Req, response: Resp) -> Self
    where
        F: FnMut(Req) -> Result<Resp> + Send + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            request,
            response,
            started: false,
        }
    }

    pub fn current_response(&self) -> &Resp {
        &self.response
    }

    pub fn current_request(&self) -> &Req {
        &self.request
    }

    /// Returns the next page, or `None` after the last page.
    ///
    /// On error the pager is unchanged.
    pub fn next_page(&mut self) -> Option<Result<Resp>> {
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
        let response = match (self.fetch)(request.clone()) {
            Ok(r) => r,
            Err(e) => return Some(Err(e)),
        };
        self.request = request;
        self.response = response.clone();
        Some(Ok(response))
    }

    /// Converts the pager into an iterator over pages.
    pub fn pages(self) -> Pages<Req, Resp> {
        Pages {
            pager: self,
            done: false,
        }
    }

    /// Converts the pager into an iterator over the items in each page.
    pub fn items(self) -> Items<Req, Resp> {
        Items {
            pages: self.pages(),
            current: Vec::new().into_iter(),
        }
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

/// Iterates over the pages of a list RPC.
///
/// The iterator ends after the last page, or after the first error.
pub struct Pages<Req, Resp> {
    pager: Pager<Req, Resp>,
    done: bool,
}

impl<Req, Resp> Pages<Req, Resp> {
    /// The most recently fetched response.
    pub fn current_response(&self) -> &Resp {
        &self.pager.response
    }
}

impl<Req, Resp> Iterator for Pages<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
{
    type Item = Result<Resp>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.pager.next_page();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }
        next
    }
}

/// Iterates over the items in each page of a list RPC.
///
/// The iterator ends after the last item, or after the first error.
pub struct Items<Req, Resp: PageableResponse> {
    pages: Pages<Req, Resp>,
    current: std::vec::IntoIter<Resp::PageItem>,
}

impl<Req, Resp: PageableResponse> Items<Req, Resp> {
    /// The response containing the most recent items.
    pub fn current_response(&self) -> &Resp {
        self.pages.current_response()
    }
}

impl<Req, Resp> Iterator for Items<Req, Resp>
where
    Req: PageableRequest,
    Resp: PageableResponse + Clone,
{
    type Item = Result<Resp::PageItem>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next()? {
                Ok(page) => self.current = page.into_items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
