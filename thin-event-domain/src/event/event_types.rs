//! 已知事件类型判别值（`type` 字段的固定取值）

pub const ORDER_SHIPPED: &str = "order.shipped";
pub const ORDER_DELIVERY_ATTEMPTED: &str = "order.delivery_attempted";
pub const ORDER_LOST: &str = "order.lost";
pub const MOVIE_STARTED: &str = "movie.started";
pub const MOVIE_COMPLETED: &str = "movie.completed";

/// 全部已知判别值，顺序与 `PushedThinEvent` 的变体一致
pub const ALL: [&str; 5] = [
    ORDER_SHIPPED,
    ORDER_DELIVERY_ATTEMPTED,
    ORDER_LOST,
    MOVIE_STARTED,
    MOVIE_COMPLETED,
];
