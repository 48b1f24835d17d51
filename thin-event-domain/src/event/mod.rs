//! 精简事件（Thin Event）
//!
//! 通知只携带标识、类型判别值与可选的关联对象；完整载荷与关联资源需另行拉取。
//! - `GenericThinEvent`：v1 通用信封，类型为任意字符串；
//! - `PushedThinEvent`：v2 推送型事件的封闭集合，每个变体是一个扁平结构体；
//! - `ThinEvent`：完整事件的封闭集合，带类型专属的 `data`；
//! - `PushedEvent` / `RelatedEvent`：拉取完整事件与取回关联资源的能力。

mod envelope;
pub mod event_types;
mod full;
mod movie;
mod order;
mod pushed;
mod pushed_event;
mod related_object;

pub use envelope::GenericThinEvent;
pub use full::ThinEvent;
pub use movie::{
    MovieCompletedData, MovieCompletedEvent, MovieCompletedPushedEvent, MovieStartedData,
    MovieStartedEvent, MovieStartedPushedEvent,
};
pub use order::{
    OrderDeliveryAttemptedData, OrderDeliveryAttemptedEvent, OrderDeliveryAttemptedPushedEvent,
    OrderLostData, OrderLostEvent, OrderLostPushedEvent, OrderShippedData, OrderShippedEvent,
    OrderShippedPushedEvent,
};
pub use pushed::PushedThinEvent;
pub use pushed_event::{PushedEvent, RelatedEvent};
pub use related_object::RelatedObject;
