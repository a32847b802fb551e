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

//! Streamed response bodies.
//!
//! Some operations download documents, such as a letter of authorization in
//! PDF format, or the source of an edge function. These operations return a
//! [ByteStream] instead of parsing the response as JSON.

use crate::Result;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

type Inner = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// The body of a streamed download.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::streaming::ByteStream;
/// # tokio_test::block_on(async {
/// let mut stream = ByteStream::from_bytes("addEventListener('fetch', ...)");
/// let mut contents = Vec::new();
/// while let Some(chunk) = stream.next().await {
///     contents.extend_from_slice(&chunk?);
/// }
/// assert!(contents.starts_with(b"addEventListener"));
/// # ibm_cloud_networking_gax::Result::<()>::Ok(()) });
/// ```
pub struct ByteStream {
    inner: Inner,
}

impl ByteStream {
    /// Creates a stream from any stream of byte chunks.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// Creates a stream with a single chunk.
    ///
    /// Useful to create responses in mocks.
    pub fn from_bytes<B: Into<Bytes>>(contents: B) -> Self {
        let contents = contents.into();
        Self::new(futures::stream::iter([Ok(contents)]))
    }

    /// Returns the next chunk, `None` once the body is fully received.
    pub async fn next(&mut self) -> Option<Result<Bytes>> {
        self.inner.next().await
    }

    /// Receives the full body.
    pub async fn collect(mut self) -> Result<Bytes> {
        let mut contents = Vec::new();
        while let Some(chunk) = self.next().await {
            contents.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(contents))
    }
}

impl Stream for ByteStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn collect() -> anyhow::Result<()> {
        let chunks = ["%PDF-1.4\n", "...", "%%EOF"].map(|s| Ok(Bytes::from_static(s.as_bytes())));
        let stream = ByteStream::new(futures::stream::iter(chunks));
        let got = stream.collect().await?;
        assert_eq!(got, Bytes::from_static(b"%PDF-1.4\n...%%EOF"));
        Ok(())
    }

    #[tokio::test]
    async fn collect_error() {
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(Error::io("connection reset")),
        ];
        let stream = ByteStream::new(futures::stream::iter(chunks));
        let got = stream.collect().await;
        assert!(matches!(&got, Err(e) if e.is_io()), "{got:?}");
    }

    #[tokio::test]
    async fn as_stream() {
        let stream = ByteStream::from_bytes("abc");
        let got = StreamExt::collect::<Vec<_>>(stream).await;
        assert_eq!(got.len(), 1);
        assert!(matches!(&got[0], Ok(b) if b == "abc"), "{got:?}");
        assert!(format!("{:?}", ByteStream::from_bytes("x")).contains("ByteStream"));
    }
}
