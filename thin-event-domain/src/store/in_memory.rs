//! 内存版资源存储（InMemoryResourceStore）
//!
//! 基于 `DashMap` 的轻量实现，满足 `ResourceStore` 协议：
//! - 查找前先校验前缀，前缀不符时不访问数据；
//! - 写入通过 `&self` 完成，可在共享（`Arc`）状态下预置数据；
//! - 典型用途：测试环境、示例与本地开发。
//!
use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::{DomainError, DomainResult as Result};
use crate::event::ThinEvent;
use crate::id::IdKind;
use crate::resource::{Movie, Order};
use crate::store::ResourceStore;

#[derive(Debug, Default)]
pub struct InMemoryResourceStore {
    events: DashMap<String, ThinEvent>,
    orders: DashMap<String, Order>,
    movies: DashMap<String, Movie>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入事件，标识前缀必须为 `evt_`；返回被覆盖的旧值
    pub fn insert_event(&self, event: ThinEvent) -> Result<Option<ThinEvent>> {
        IdKind::Event.ensure(event.id())?;
        Ok(self.events.insert(event.id().to_string(), event))
    }

    /// 写入订单，标识前缀必须为 `ord_`
    pub fn insert_order(&self, order: Order) -> Result<Option<Order>> {
        IdKind::Order.ensure(&order.id)?;
        Ok(self.orders.insert(order.id.clone(), order))
    }

    /// 写入电影，标识前缀必须为 `mov_`
    pub fn insert_movie(&self, movie: Movie) -> Result<Option<Movie>> {
        IdKind::Movie.ensure(&movie.id)?;
        Ok(self.movies.insert(movie.id.clone(), movie))
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.orders.len() + self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lookup<V: Clone>(map: &DashMap<String, V>, kind: IdKind, id: &str) -> Result<V> {
    kind.ensure(id)?;

    let found = map.get(id).map(|entry| entry.value().clone());
    tracing::debug!(%kind, id, found = found.is_some(), "in-memory lookup");

    found.ok_or_else(|| DomainError::not_found(kind, id))
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn get_event(&self, id: &str) -> Result<ThinEvent> {
        lookup(&self.events, IdKind::Event, id)
    }

    async fn get_order(&self, id: &str) -> Result<Order> {
        lookup(&self.orders, IdKind::Order, id)
    }

    async fn get_movie(&self, id: &str) -> Result<Movie> {
        lookup(&self.movies, IdKind::Movie, id)
    }
}
