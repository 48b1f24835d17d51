//! 资源存储（store）
//!
//! 核心只依赖三个按标识查找的能力（`ResourceStore`），不关心持久化方式：
//! - `InMemoryResourceStore`：基于 `DashMap` 的内存实现，用于测试与示例；
//! - `TimeoutResourceStore`：为任意存储的每次查找加上超时的装饰器。
//!
//! 每个实现都必须在查询前独立校验标识前缀，前缀不符返回 `InvalidReference`。
//!
mod in_memory;
mod resource_store;
mod timeout;

pub use in_memory::InMemoryResourceStore;
pub use resource_store::ResourceStore;
pub use timeout::TimeoutResourceStore;
