use std::sync::Arc;

use thin_event_domain::event::{GenericThinEvent, PushedThinEvent, ThinEvent};
use thin_event_domain::resource::{Movie, Order};
use thin_event_domain::store::{ResourceStore, TimeoutResourceStore};
use thin_event_domain::wire;

use crate::config::ClientConfig;
use crate::error::AppResult;

/// 精简事件客户端
///
/// - 解析通知报文（v1 通用信封 / v2 强类型变体）；
/// - 按标识检索事件与资源；
/// - 注入的存储会被包装为带超时的存储，所有查找共享同一超时设置。
#[derive(Clone)]
pub struct ThinEventClient {
    store: Arc<dyn ResourceStore>,
    config: ClientConfig,
}

impl ThinEventClient {
    pub fn new<S>(store: S, config: ClientConfig) -> Self
    where
        S: ResourceStore + 'static,
    {
        let store = TimeoutResourceStore::new(store, config.lookup_timeout);
        Self {
            store: Arc::new(store),
            config,
        }
    }

    pub fn with_defaults<S>(store: S) -> Self
    where
        S: ResourceStore + 'static,
    {
        Self::new(store, ClientConfig::default())
    }

    /// 供 `pull` / `fetch_related_object` 使用的存储
    pub fn store(&self) -> &dyn ResourceStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 旧版解析，仅用于兼容；不要基于其 `event_type` 做分支
    pub fn parse_event_v1(&self, body: &str) -> AppResult<GenericThinEvent> {
        Ok(wire::parse_v1(body)?)
    }

    pub fn parse_event_v2(&self, body: &str) -> AppResult<PushedThinEvent> {
        Ok(wire::parse_v2(body)?)
    }

    pub async fn retrieve_event(&self, id: &str) -> AppResult<ThinEvent> {
        Ok(self.store.get_event(id).await?)
    }

    pub async fn retrieve_order(&self, id: &str) -> AppResult<Order> {
        Ok(self.store.get_order(id).await?)
    }

    pub async fn retrieve_movie(&self, id: &str) -> AppResult<Movie> {
        Ok(self.store.get_movie(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use thin_event_domain::error::DomainError;
    use thin_event_domain::fixtures;

    #[tokio::test]
    async fn retrieves_fixture_records() {
        let client = ThinEventClient::with_defaults(fixtures::sample_store());

        let order = client.retrieve_order("ord_452").await.unwrap();
        assert_eq!(order.cost_cents, 300);

        let movie = client.retrieve_movie("mov_261").await.unwrap();
        assert_eq!(movie.title, "Kung Fu Panda");

        let event = client.retrieve_event("evt_606").await.unwrap();
        assert_eq!(event.event_type(), "movie.completed");
    }

    #[tokio::test]
    async fn retrieve_with_wrong_prefix_is_invalid_reference() {
        let client = ThinEventClient::with_defaults(fixtures::sample_store());

        // 用电影标识去取订单
        let err = client.retrieve_order("mov_261").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidReference { .. })
        ));
    }

    #[test]
    fn parsers_share_wire_semantics() {
        let client = ThinEventClient::with_defaults(fixtures::sample_store());
        let body = r#"{"id":"evt_1","type":"order.shiped","related_object":{"id":"ord_452","type":"order"}}"#;

        assert_eq!(client.parse_event_v1(body).unwrap().event_type, "order.shiped");
        assert!(matches!(
            client.parse_event_v2(body).unwrap_err().as_domain(),
            Some(DomainError::UnknownEventType(_))
        ));
    }
}
