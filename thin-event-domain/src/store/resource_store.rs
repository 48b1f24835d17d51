use async_trait::async_trait;
use std::sync::Arc;

use crate::error::DomainResult as Result;
use crate::event::ThinEvent;
use crate::resource::{Movie, Order};

/// 外部资源存储：按带前缀的标识查找事件与资源
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// 查找完整事件（`evt_` 前缀）
    async fn get_event(&self, id: &str) -> Result<ThinEvent>;

    /// 查找订单（`ord_` 前缀）
    async fn get_order(&self, id: &str) -> Result<Order>;

    /// 查找电影（`mov_` 前缀）
    async fn get_movie(&self, id: &str) -> Result<Movie>;
}

#[async_trait]
impl<T> ResourceStore for Arc<T>
where
    T: ResourceStore + ?Sized,
{
    async fn get_event(&self, id: &str) -> Result<ThinEvent> {
        (**self).get_event(id).await
    }

    async fn get_order(&self, id: &str) -> Result<Order> {
        (**self).get_order(id).await
    }

    async fn get_movie(&self, id: &str) -> Result<Movie> {
        (**self).get_movie(id).await
    }
}
