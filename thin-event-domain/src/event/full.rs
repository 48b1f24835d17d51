use serde::{Deserialize, Serialize};

use super::{
    MovieCompletedEvent, MovieStartedEvent, OrderDeliveryAttemptedEvent, OrderLostEvent,
    OrderShippedEvent, PushedThinEvent, RelatedObject, event_types,
};

/// 完整事件的封闭集合：推送字段加上类型专属的 `data`
///
/// 只能由存储返回（或经 `pull` 取得），报文解析器永远不会产生完整事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ThinEvent {
    #[serde(rename = "order.shipped")]
    OrderShipped(OrderShippedEvent),
    #[serde(rename = "order.delivery_attempted")]
    OrderDeliveryAttempted(OrderDeliveryAttemptedEvent),
    #[serde(rename = "order.lost")]
    OrderLost(OrderLostEvent),
    #[serde(rename = "movie.started")]
    MovieStarted(MovieStartedEvent),
    #[serde(rename = "movie.completed")]
    MovieCompleted(MovieCompletedEvent),
}

impl ThinEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::OrderShipped(_) => event_types::ORDER_SHIPPED,
            Self::OrderDeliveryAttempted(_) => event_types::ORDER_DELIVERY_ATTEMPTED,
            Self::OrderLost(_) => event_types::ORDER_LOST,
            Self::MovieStarted(_) => event_types::MOVIE_STARTED,
            Self::MovieCompleted(_) => event_types::MOVIE_COMPLETED,
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

    pub fn related_object(&self) -> Option<&RelatedObject> {
        match self {
            Self::OrderShipped(e) => Some(&e.related_object),
            Self::OrderDeliveryAttempted(e) => Some(&e.related_object),
            Self::OrderLost(_) => None,
            Self::MovieStarted(e) => Some(&e.related_object),
            Self::MovieCompleted(e) => Some(&e.related_object),
        }
    }

    /// 去掉 `data`，得到该事件投递时的推送形态
    pub fn to_pushed(&self) -> PushedThinEvent {
        PushedThinEvent::from(self)
    }
}
