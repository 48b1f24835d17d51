//! 订单相关事件：已发货、尝试投递、丢失
//!
use serde::{Deserialize, Serialize};

use crate::resource::Order;

use super::event_types::{ORDER_DELIVERY_ATTEMPTED, ORDER_LOST, ORDER_SHIPPED};
use super::pushed_event::pushed_event;
use super::{RelatedEvent, RelatedObject};

// ---- order.shipped ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShippedPushedEvent {
    pub id: String,
    pub related_object: RelatedObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShippedData {
    /// 承运商
    pub shipping_service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShippedEvent {
    pub id: String,
    pub related_object: RelatedObject,
    pub data: OrderShippedData,
}

pushed_event!(OrderShippedPushedEvent => OrderShippedEvent, OrderShipped, ORDER_SHIPPED);

impl RelatedEvent for OrderShippedPushedEvent {
    type Related = Order;

    fn related_object(&self) -> &RelatedObject {
        &self.related_object
    }
}

impl From<&OrderShippedEvent> for OrderShippedPushedEvent {
    fn from(event: &OrderShippedEvent) -> Self {
        Self {
            id: event.id.clone(),
            related_object: event.related_object.clone(),
        }
    }
}

// ---- order.delivery_attempted ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDeliveryAttemptedPushedEvent {
    pub id: String,
    pub related_object: RelatedObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDeliveryAttemptedData {
    pub success: bool,
    /// 第几次投递（从 1 开始）
    pub attempt_num: u32,
    pub delivery_location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDeliveryAttemptedEvent {
    pub id: String,
    pub related_object: RelatedObject,
    pub data: OrderDeliveryAttemptedData,
}

pushed_event!(
    OrderDeliveryAttemptedPushedEvent => OrderDeliveryAttemptedEvent,
    OrderDeliveryAttempted,
    ORDER_DELIVERY_ATTEMPTED
);

impl RelatedEvent for OrderDeliveryAttemptedPushedEvent {
    type Related = Order;

    fn related_object(&self) -> &RelatedObject {
        &self.related_object
    }
}

impl From<&OrderDeliveryAttemptedEvent> for OrderDeliveryAttemptedPushedEvent {
    fn from(event: &OrderDeliveryAttemptedEvent) -> Self {
        Self {
            id: event.id.clone(),
            related_object: event.related_object.clone(),
        }
    }
}

// ---- order.lost ----
// 丢失的订单没有稳定的关联对象

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLostPushedEvent {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLostData {
    pub last_seen_city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLostEvent {
    pub id: String,
    pub data: OrderLostData,
}

pushed_event!(OrderLostPushedEvent => OrderLostEvent, OrderLost, ORDER_LOST);

impl From<&OrderLostEvent> for OrderLostPushedEvent {
    fn from(event: &OrderLostEvent) -> Self {
        Self {
            id: event.id.clone(),
        }
    }
}
