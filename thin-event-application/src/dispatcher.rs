//! 事件分发器（Dispatcher）
//!
//! 将一条通知报文经 v2 解析后，按判别值路由到处理器的唯一一个槽位：
//! - 路由是对封闭变体集合的穷尽 `match`，无注册表，调用之间无状态；
//! - 处理器的错误原样返回给调用方，只中止当前这一条通知。
//!
use thin_event_domain::event::PushedThinEvent;

use crate::client::ThinEventClient;
use crate::context::HandlerContext;
use crate::handler::{HandlerResult, ThinEventHandler};

pub struct Dispatcher<H> {
    client: ThinEventClient,
    handler: H,
}

impl<H> Dispatcher<H>
where
    H: ThinEventHandler,
{
    pub fn new(client: ThinEventClient, handler: H) -> Self {
        Self { client, handler }
    }

    pub fn client(&self) -> &ThinEventClient {
        &self.client
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// 解析并处理一条通知
    pub async fn handle(&self, body: &str) -> HandlerResult {
        let event = match self.client.parse_event_v2(body) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "rejected thin event body");
                return Err(err);
            }
        };

        self.dispatch(event).await
    }

    /// 将已解析的事件路由到对应槽位
    pub async fn dispatch(&self, event: PushedThinEvent) -> HandlerResult {
        let event_id = event.id().to_string();
        let event_type = event.event_type();
        tracing::debug!(%event_id, event_type, "dispatching thin event");

        let ctx = HandlerContext::new(self.client.clone());
        let result = match event {
            PushedThinEvent::OrderShipped(e) => self.handler.on_order_shipped(&ctx, e).await,
            PushedThinEvent::OrderDeliveryAttempted(e) => {
                self.handler.on_order_delivery_attempted(&ctx, e).await
            }
            PushedThinEvent::OrderLost(e) => self.handler.on_order_lost(&ctx, e).await,
            PushedThinEvent::MovieStarted(e) => self.handler.on_movie_started(&ctx, e).await,
            PushedThinEvent::MovieCompleted(e) => self.handler.on_movie_completed(&ctx, e).await,
        };

        if let Err(err) = &result {
            tracing::warn!(%event_id, event_type, error = %err, "thin event handler failed");
        }

        result
    }
}
