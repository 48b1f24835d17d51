//! 精简事件领域层（thin-event-domain）
//!
//! 消费 webhook 风格变更通知（“精简事件”）的核心构件：
//! - 事件建模（`event`）：v1 通用信封、v2 推送型事件与完整事件的封闭集合；
//! - 报文解析（`wire`）：`parse_v1` / `parse_v2`；
//! - 推拉补全：`PushedEvent::pull` 与 `RelatedEvent::fetch_related_object`；
//! - 资源存储（`store`）：按带前缀标识查找的协议与内存、超时实现；
//! - 标识约定（`id`）与领域资源（`resource`）。
//!
//! 本 crate 不绑定任何传输或持久化实现，存储以 `ResourceStore` 注入。
//!
//! 典型用法：
//! 1. 用 `wire::parse_v2` 将通知报文解析为 `PushedThinEvent`；
//! 2. 对具体变体调用 `pull` 取回 `data`，或调用 `fetch_related_object` 取回关联资源；
//! 3. 由应用层的分发器把变体路由到对应的处理器。
//!
pub mod error;
pub mod event;
#[cfg(feature = "fixtures")]
pub mod fixtures;
pub mod id;
pub mod resource;
pub mod store;
pub mod wire;
