//! 事件处理器（ThinEventHandler）
//!
//! 每个已知事件类型对应一个处理槽位，默认实现全部转发给兜底的 `on_other`；
//! `on_other` 的默认实现直接返回 `UnimplementedHandler`。
//! 因此一个什么都不覆盖的处理器会对每个事件都明确失败，而不是静默丢弃，
//! 使用方需要逐个类型显式接入。
//!
//! 新增事件类型时，只需在此追加一个转发到 `on_other` 的槽位。
//!
use async_trait::async_trait;
use thin_event_domain::event::{
    MovieCompletedPushedEvent, MovieStartedPushedEvent, OrderDeliveryAttemptedPushedEvent,
    OrderLostPushedEvent, OrderShippedPushedEvent, PushedThinEvent,
};

use crate::context::HandlerContext;
use crate::error::AppError;

pub type HandlerResult = Result<(), AppError>;

/// 精简事件处理器：按事件类型覆盖需要处理的槽位
#[async_trait]
pub trait ThinEventHandler: Send + Sync {
    async fn on_order_shipped(
        &self,
        ctx: &HandlerContext,
        event: OrderShippedPushedEvent,
    ) -> HandlerResult {
        self.on_other(ctx, event.into()).await
    }

    async fn on_order_delivery_attempted(
        &self,
        ctx: &HandlerContext,
        event: OrderDeliveryAttemptedPushedEvent,
    ) -> HandlerResult {
        self.on_other(ctx, event.into()).await
    }

    async fn on_order_lost(
        &self,
        ctx: &HandlerContext,
        event: OrderLostPushedEvent,
    ) -> HandlerResult {
        self.on_other(ctx, event.into()).await
    }

    async fn on_movie_started(
        &self,
        ctx: &HandlerContext,
        event: MovieStartedPushedEvent,
    ) -> HandlerResult {
        self.on_other(ctx, event.into()).await
    }

    async fn on_movie_completed(
        &self,
        ctx: &HandlerContext,
        event: MovieCompletedPushedEvent,
    ) -> HandlerResult {
        self.on_other(ctx, event.into()).await
    }

    /// 兜底槽位
    async fn on_other(&self, _ctx: &HandlerContext, event: PushedThinEvent) -> HandlerResult {
        Err(AppError::UnimplementedHandler {
            event_type: event.event_type(),
        })
    }
}
