//! Type-erased reply fetcher.
//!
//! `ReplyFetcher` uses RPITIT and is not object-safe. `ReplyFetcherDyn` boxes
//! the returned future, and `BoxReplyFetcher` wraps it so callers can choose
//! a backend at runtime while the manager stays generic over `ReplyFetcher`.

use std::future::Future;
use std::pin::Pin;

use parlor_types::error::ReplyError;

use super::fetcher::ReplyFetcher;

/// Object-safe mirror of [`ReplyFetcher`].
pub trait ReplyFetcherDyn: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReplyError>> + Send + 'a>>;
}

impl<T: ReplyFetcher> ReplyFetcherDyn for T {
    fn name(&self) -> &str {
        ReplyFetcher::name(self)
    }

    fn fetch_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReplyError>> + Send + 'a>> {
        Box::pin(self.fetch(prompt))
    }
}

/// A reply backend selected at runtime.
pub struct BoxReplyFetcher {
    inner: Box<dyn ReplyFetcherDyn>,
}

impl BoxReplyFetcher {
    pub fn new<T: ReplyFetcher + 'static>(fetcher: T) -> Self {
        Self {
            inner: Box::new(fetcher),
        }
    }
}

impl ReplyFetcher for BoxReplyFetcher {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(&self, prompt: &str) -> Result<String, ReplyError> {
        self.inner.fetch_boxed(prompt).await
    }
}
