use async_trait::async_trait;
use thin_event_application::{
    ClientConfig, Dispatcher, HandlerContext, HandlerResult, ThinEventClient, ThinEventHandler,
};
use thin_event_domain::event::{
    MovieCompletedPushedEvent, MovieStartedPushedEvent, OrderDeliveryAttemptedPushedEvent,
    OrderLostPushedEvent, OrderShippedPushedEvent, PushedEvent, RelatedEvent,
};
use thin_event_domain::fixtures;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 把每类事件整理成一行日志
struct ConsoleHandler;

#[async_trait]
impl ThinEventHandler for ConsoleHandler {
    async fn on_order_shipped(
        &self,
        ctx: &HandlerContext,
        event: OrderShippedPushedEvent,
    ) -> HandlerResult {
        let order = event.fetch_related_object(ctx.store()).await?;
        info!(
            order_id = %order.id,
            num_items = order.num_items,
            "created a database record for the shipped order"
        );
        Ok(())
    }

    async fn on_order_delivery_attempted(
        &self,
        ctx: &HandlerContext,
        event: OrderDeliveryAttemptedPushedEvent,
    ) -> HandlerResult {
        let full = event.pull(ctx.store()).await?;
        if full.data.success {
            info!(
                order_id = %full.related_object.id,
                attempts = full.data.attempt_num,
                location = %full.data.delivery_location,
                "order delivered"
            );
        } else {
            info!(
                order_id = %full.related_object.id,
                attempt = full.data.attempt_num,
                "delivery attempt failed"
            );
        }
        Ok(())
    }

    async fn on_order_lost(
        &self,
        ctx: &HandlerContext,
        event: OrderLostPushedEvent,
    ) -> HandlerResult {
        let full = event.pull(ctx.store()).await?;
        info!(
            last_seen_city = %full.data.last_seen_city,
            "an order was lost; no additional information"
        );
        Ok(())
    }

    async fn on_movie_started(
        &self,
        ctx: &HandlerContext,
        event: MovieStartedPushedEvent,
    ) -> HandlerResult {
        let movie = event.fetch_related_object(ctx.store()).await?;
        info!(title = %movie.title, "someone started watching");
        Ok(())
    }

    async fn on_movie_completed(
        &self,
        ctx: &HandlerContext,
        event: MovieCompletedPushedEvent,
    ) -> HandlerResult {
        let full = event.pull(ctx.store()).await?;
        let movie = event.fetch_related_object(ctx.store()).await?;
        info!(
            user = %full.data.user,
            title = %movie.title,
            release_year = movie.release_year,
            rating = full.data.rating,
            "movie finished and rated"
        );
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = ClientConfig::from_env()?;
    let client = ThinEventClient::new(fixtures::sample_store(), config);
    let dispatcher = Dispatcher::new(client, ConsoleHandler);

    for (idx, body) in fixtures::incoming_bodies().iter().enumerate() {
        info!(idx, %body, "parsing event");
        if let Err(err) = dispatcher.handle(body).await {
            tracing::error!(idx, %body, error = %err, "failed to handle");
            return Err(err.into());
        }
    }

    Ok(())
}
