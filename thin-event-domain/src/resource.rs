//! 领域资源（Resource）
//!
//! 事件只引用资源，不拥有资源。资源由外部存储持有，核心只读不写。
//!
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::id::IdKind;
use crate::store::ResourceStore;

/// 订单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub created: NaiveDate,
    pub num_items: u32,
    pub cost_cents: u64,
    pub delivery_date: NaiveDate,
}

/// 电影
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub release_year: i32,
}

/// 可被事件引用、并能从存储按标识取回的资源
#[async_trait]
pub trait Resource: Sized + Send {
    /// 资源标识的种类（决定前缀校验）
    const KIND: IdKind;

    /// 从存储取回资源
    async fn retrieve(store: &dyn ResourceStore, id: &str) -> DomainResult<Self>;
}

#[async_trait]
impl Resource for Order {
    const KIND: IdKind = IdKind::Order;

    async fn retrieve(store: &dyn ResourceStore, id: &str) -> DomainResult<Self> {
        store.get_order(id).await
    }
}

#[async_trait]
impl Resource for Movie {
    const KIND: IdKind = IdKind::Movie;

    async fn retrieve(store: &dyn ResourceStore, id: &str) -> DomainResult<Self> {
        store.get_movie(id).await
    }
}
