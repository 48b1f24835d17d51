use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use crate::error::{DomainError, DomainResult as Result};
use crate::event::ThinEvent;
use crate::id::IdKind;
use crate::resource::{Movie, Order};
use crate::store::ResourceStore;

/// ResourceStore 的装饰器，为每次查找设置超时
///
/// 超时以 `Transport` 错误返回给调用方，而不是让分发一直挂起。
pub struct TimeoutResourceStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutResourceStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn bounded<T, F>(&self, kind: IdKind, id: &str, lookup: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        kind.ensure(id)?;

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_elapsed) => {
                tracing::warn!(%kind, id, timeout = ?self.timeout, "store lookup timed out");
                Err(DomainError::Transport {
                    reason: format!("{kind} {id} lookup timed out after {:?}", self.timeout),
                })
            }
        }
    }
}

#[async_trait]
impl<S> ResourceStore for TimeoutResourceStore<S>
where
    S: ResourceStore,
{
    async fn get_event(&self, id: &str) -> Result<ThinEvent> {
        self.bounded(IdKind::Event, id, self.inner.get_event(id)).await
    }

    async fn get_order(&self, id: &str) -> Result<Order> {
        self.bounded(IdKind::Order, id, self.inner.get_order(id)).await
    }

    async fn get_movie(&self, id: &str) -> Result<Movie> {
        self.bounded(IdKind::Movie, id, self.inner.get_movie(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryResourceStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 永远比超时慢的存储，并统计被访问次数
    #[derive(Default)]
    struct SlowStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResourceStore for SlowStore {
        async fn get_event(&self, id: &str) -> Result<ThinEvent> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(5)).await;
            Err(DomainError::not_found(IdKind::Event, id))
        }

        async fn get_order(&self, id: &str) -> Result<Order> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(5)).await;
            Err(DomainError::not_found(IdKind::Order, id))
        }

        async fn get_movie(&self, id: &str) -> Result<Movie> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(5)).await;
            Err(DomainError::not_found(IdKind::Movie, id))
        }
    }

    #[tokio::test]
    async fn elapsed_lookup_becomes_transport_error() {
        let store = TimeoutResourceStore::new(SlowStore::default(), Duration::from_millis(10));
        match store.get_order("ord_452").await.unwrap_err() {
            DomainError::Transport { reason } => assert!(reason.contains("ord_452")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_prefix_never_reaches_inner_store() {
        let store = TimeoutResourceStore::new(SlowStore::default(), Duration::from_millis(10));
        let err = store.get_movie("ord_452").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference { .. }));
        assert_eq!(store.inner().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fast_lookup_passes_through() {
        let store = TimeoutResourceStore::new(InMemoryResourceStore::new(), Duration::from_secs(1));
        let err = store.get_event("evt_1").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
