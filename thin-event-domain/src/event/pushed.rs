use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::store::ResourceStore;

use super::{
    MovieCompletedPushedEvent, MovieStartedPushedEvent, OrderDeliveryAttemptedPushedEvent,
    OrderLostPushedEvent, OrderShippedPushedEvent, PushedEvent, RelatedObject, ThinEvent,
};

/// 推送型事件的封闭集合（报文 v2 的解析结果）
///
/// 序列化结果即为合法的 v2 报文：`{"type": ..., "id": ..., "related_object": ...}`。
/// 解析请使用 [`wire::parse_v2`](crate::wire::parse_v2)，以区分未知类型与格式错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PushedThinEvent {
    #[serde(rename = "order.shipped")]
    OrderShipped(OrderShippedPushedEvent),
    #[serde(rename = "order.delivery_attempted")]
    OrderDeliveryAttempted(OrderDeliveryAttemptedPushedEvent),
    #[serde(rename = "order.lost")]
    OrderLost(OrderLostPushedEvent),
    #[serde(rename = "movie.started")]
    MovieStarted(MovieStartedPushedEvent),
    #[serde(rename = "movie.completed")]
    MovieCompleted(MovieCompletedPushedEvent),
}

impl PushedThinEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::OrderShipped(_) => OrderShippedPushedEvent::TYPE,
            Self::OrderDeliveryAttempted(_) => OrderDeliveryAttemptedPushedEvent::TYPE,
            Self::OrderLost(_) => OrderLostPushedEvent::TYPE,
            Self::MovieStarted(_) => MovieStartedPushedEvent::TYPE,
            Self::MovieCompleted(_) => MovieCompletedPushedEvent::TYPE,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::OrderShipped(e) => &e.id,
            Self::OrderDeliveryAttempted(e) => &e.id,
            Self::OrderLost(e) => &e.id,
            Self::MovieStarted(e) => &e.id,
            Self::MovieCompleted(e) => &e.id,
        }
    }

    /// 关联对象；`order.lost` 没有
    pub fn related_object(&self) -> Option<&RelatedObject> {
        match self {
            Self::OrderShipped(e) => Some(&e.related_object),
            Self::OrderDeliveryAttempted(e) => Some(&e.related_object),
            Self::OrderLost(_) => None,
            Self::MovieStarted(e) => Some(&e.related_object),
            Self::MovieCompleted(e) => Some(&e.related_object),
        }
    }

    /// 拉取完整事件（未收窄的封闭集合形式）
    ///
    /// 存储中同一标识的事件类型必须与本事件一致，否则返回 `TypeMismatch`。
    pub async fn pull(&self, store: &dyn ResourceStore) -> DomainResult<ThinEvent> {
        let event = store.get_event(self.id()).await?;
        if event.event_type() != self.event_type() {
            return Err(DomainError::TypeMismatch {
                expected: self.event_type().to_string(),
                found: event.event_type().to_string(),
            });
        }
        Ok(event)
    }
}

impl From<&ThinEvent> for PushedThinEvent {
    fn from(event: &ThinEvent) -> Self {
        match event {
            ThinEvent::OrderShipped(e) => Self::OrderShipped(e.into()),
            ThinEvent::OrderDeliveryAttempted(e) => Self::OrderDeliveryAttempted(e.into()),
            ThinEvent::OrderLost(e) => Self::OrderLost(e.into()),
            ThinEvent::MovieStarted(e) => Self::MovieStarted(e.into()),
            ThinEvent::MovieCompleted(e) => Self::MovieCompleted(e.into()),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($pushed:ty)),* $(,)?) => {
        $(
            impl From<$pushed> for PushedThinEvent {
                fn from(event: $pushed) -> Self {
                    Self::$variant(event)
                }
            }
        )*
    };
}

impl_from_variant!(
    OrderShipped(OrderShippedPushedEvent),
    OrderDeliveryAttempted(OrderDeliveryAttemptedPushedEvent),
    OrderLost(OrderLostPushedEvent),
    MovieStarted(MovieStartedPushedEvent),
    MovieCompleted(MovieCompletedPushedEvent),
);
