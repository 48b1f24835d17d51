//! 精简事件应用层（thin-event-application）
//!
//! 在领域层之上提供面向使用方的入口：
//! - `ThinEventClient`：报文解析与按标识检索；
//! - `ThinEventHandler`：按事件类型覆盖的处理槽位，兜底失败；
//! - `Dispatcher`：解析报文并路由到处理器；
//! - `ClientConfig`：查找超时与批量并发配置。
//!
pub mod client;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;

pub use client::ThinEventClient;
pub use config::ClientConfig;
pub use context::HandlerContext;
pub use dispatcher::Dispatcher;
pub use error::{AppError, AppResult};
pub use handler::{HandlerResult, ThinEventHandler};
