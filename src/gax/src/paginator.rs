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

//! Iterate over the pages of list operations.
//!
//! Some list operations return their results in pages. Each page includes a
//! `next` object, whose `start` field is the cursor for the following page.
//! A [Paginator] follows these cursors, yielding one page at a time. An
//! [ItemPaginator] yields the elements in each page, one at a time.
//!
//! # Example
//! ```no_run
//! # use ibm_cloud_networking_gax::paginator::Paginator;
//! # async fn sample<T, E>(mut pages: Paginator<T, E>) -> Result<(), E>
//! # where T: ibm_cloud_networking_gax::paginator::internal::PageableResponse + Send + 'static,
//! #       E: Send + 'static {
//! while let Some(page) = pages.next().await {
//!     let page = page?;
//!     // ... use the page ...
//! }
//! # Ok(()) }
//! ```

use futures::Stream;
use futures::future::BoxFuture;
use internal::PageableResponse;
use std::collections::VecDeque;

type Execute<T, E> = Box<dyn Fn(Option<String>) -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

enum State {
    // No request made yet, with the caller's initial cursor.
    Start(Option<String>),
    // The cursor for the next page.
    Next(String),
    // The last page was returned, or an error was returned.
    Done,
}

/// Yields the pages of a list operation.
///
/// Each call to [next][Paginator::next] makes one request, with the cursor
/// returned in the previous page. Iteration stops once a page without a
/// cursor is returned, or after the first error.
pub struct Paginator<T, E> {
    execute: Execute<T, E>,
    state: State,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new<F, Fut>(seed: Option<String>, execute: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            execute: Box::new(move |start| -> BoxFuture<'static, Result<T, E>> {
                Box::pin(execute(start))
            }),
            state: State::Start(seed),
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `None` when there are no more pages.
    pub async fn next(&mut self) -> Option<Result<T, E>> {
        let start = match std::mem::replace(&mut self.state, State::Done) {
            State::Done => return None,
            State::Start(start) => start,
            State::Next(start) => Some(start),
        };
        match (self.execute)(start).await {
            Ok(page) => {
                if let Some(next) = page.next_start().filter(|s| !s.is_empty()) {
                    self.state = State::Next(next);
                }
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Returns `true` if calling [next][Paginator::next] may return another
    /// page.
    pub fn has_next(&self) -> bool {
        !matches!(self.state, State::Done)
    }

    /// Fetches all the remaining pages.
    ///
    /// Stops at the first error.
    pub async fn all(mut self) -> Result<Vec<T>, E> {
        let mut pages = Vec::new();
        while let Some(page) = self.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }

    /// Converts the paginator into a paginator over the elements of each
    /// page.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator {
            pages: self,
            buffer: VecDeque::new(),
        }
    }

    /// Converts the paginator into a [Stream] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Unpin {
        Box::pin(futures::stream::unfold(self, |mut pages| async move {
            pages.next().await.map(|page| (page, pages))
        }))
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Start(s) => format!("Start({s:?})"),
            State::Next(s) => format!("Next({s:?})"),
            State::Done => "Done".to_string(),
        };
        f.debug_struct("Paginator").field("state", &state).finish()
    }
}

/// Yields the elements of a list operation, one at a time.
///
/// Pages are fetched as needed. Pages without elements are skipped.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    buffer: VecDeque<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Returns the next element, fetching the next page if needed.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.buffer.extend(page.items()),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Returns `true` if calling [next][ItemPaginator::next] may return
    /// another element.
    pub fn has_next(&self) -> bool {
        !self.buffer.is_empty() || self.pages.has_next()
    }

    /// Fetches all the remaining elements, stops at the first error.
    pub async fn all(mut self) -> Result<Vec<T::PageItem>, E> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Converts the paginator into a [Stream] of elements.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Unpin {
        Box::pin(futures::stream::unfold(self, |mut items| async move {
            items.next().await.map(|item| (item, items))
        }))
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator")
            .field("pages", &self.pages)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::Paginator;

    /// Implemented by the responses of list operations with cursors.
    pub trait PageableResponse {
        type PageItem: Send;

        /// The elements in this page.
        fn items(self) -> Vec<Self::PageItem>;

        /// The cursor for the next page, `None` in the last page.
        fn next_start(&self) -> Option<String>;
    }

    /// Creates a new [Paginator] given the caller's initial cursor and a
    /// function to fetch a page.
    pub fn new_paginator<T, E, F, Fut>(seed: Option<String>, execute: F) -> Paginator<T, E>
    where
        T: PageableResponse + Send + 'static,
        E: Send + 'static,
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Paginator::new(seed, execute)
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use futures::StreamExt;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, PartialEq)]
    struct TestPage {
        items: Vec<String>,
        next: Option<String>,
    }

    impl PageableResponse for TestPage {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_start(&self) -> Option<String> {
            self.next.clone()
        }
    }

    type TestError = String;

    fn page(items: &[&str], next: Option<&str>) -> TestPage {
        TestPage {
            items: items.iter().map(|s| s.to_string()).collect(),
            next: next.map(str::to_string),
        }
    }

    // Returns the pages in order and records the cursor for each request.
    fn fake_server(
        pages: Vec<Result<TestPage, TestError>>,
    ) -> (
        impl Fn(Option<String>) -> futures::future::Ready<Result<TestPage, TestError>>
        + Send
        + Sync
        + 'static,
        Arc<Mutex<Vec<Option<String>>>>,
    ) {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let starts = Arc::new(Mutex::new(Vec::new()));
        let recorded = starts.clone();
        let execute = move |start: Option<String>| {
            recorded.lock().unwrap().push(start);
            let next = pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err("too many requests".to_string()));
            futures::future::ready(next)
        };
        (execute, starts)
    }

    #[tokio::test]
    async fn follows_cursors() {
        let (execute, starts) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Ok(page(&["item2"], None)),
        ]);
        let mut pages = new_paginator(None, execute);
        assert!(pages.has_next());
        let got = pages.next().await;
        assert_eq!(got, Some(Ok(page(&["item1"], Some("1")))));
        assert!(pages.has_next());
        let got = pages.next().await;
        assert_eq!(got, Some(Ok(page(&["item2"], None))));
        assert!(!pages.has_next());
        assert_eq!(pages.next().await, None);
        assert_eq!(*starts.lock().unwrap(), vec![None, Some("1".to_string())]);
    }

    #[tokio::test]
    async fn all_pages() -> anyhow::Result<()> {
        let (execute, starts) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Ok(page(&["item2"], None)),
        ]);
        let pages = new_paginator(Some("seed".to_string()), execute);
        let got = pages.all().await.map_err(anyhow::Error::msg)?;
        assert_eq!(got.len(), 2);
        assert_eq!(
            *starts.lock().unwrap(),
            vec![Some("seed".to_string()), Some("1".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_cursor_stops() {
        let (execute, _) = fake_server(vec![Ok(page(&["item1"], Some("")))]);
        let mut pages = new_paginator(None, execute);
        assert!(pages.next().await.is_some());
        assert!(!pages.has_next());
        assert!(pages.next().await.is_none());
    }

    #[tokio::test]
    async fn error_ends_iteration() {
        let (execute, starts) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Err("uh-oh".to_string()),
            Ok(page(&["never"], None)),
        ]);
        let mut pages = new_paginator(None, execute);
        assert!(matches!(pages.next().await, Some(Ok(_))));
        assert_eq!(pages.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(pages.next().await, None);
        assert_eq!(starts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let (execute, _) = fake_server(vec![
            Ok(page(&["item1", "item2"], Some("2"))),
            Ok(page(&[], Some("2"))),
            Ok(page(&["item3"], None)),
        ]);
        let mut items = new_paginator(None, execute).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.map_err(anyhow::Error::msg)?);
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
        assert!(!items.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn items_all() -> anyhow::Result<()> {
        let (execute, _) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Ok(page(&["item2"], None)),
        ]);
        let got = new_paginator(None, execute)
            .items()
            .all()
            .await
            .map_err(anyhow::Error::msg)?;
        assert_eq!(got, vec!["item1", "item2"]);
        Ok(())
    }

    #[tokio::test]
    async fn items_error() {
        let (execute, _) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Err("uh-oh".to_string()),
        ]);
        let got = new_paginator(None, execute).items().all().await;
        assert_eq!(got, Err("uh-oh".to_string()));
    }

    #[tokio::test]
    async fn streams() {
        let (execute, _) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Ok(page(&["item2"], None)),
        ]);
        let pages = new_paginator(None, execute).into_stream();
        let got = pages.collect::<Vec<_>>().await;
        assert_eq!(got.len(), 2);

        let (execute, _) = fake_server(vec![
            Ok(page(&["item1"], Some("1"))),
            Ok(page(&["item2"], None)),
        ]);
        let items = new_paginator(None, execute).items().into_stream();
        let got = items.collect::<Vec<_>>().await;
        assert_eq!(got, vec![Ok("item1".to_string()), Ok("item2".to_string())]);
    }
}
