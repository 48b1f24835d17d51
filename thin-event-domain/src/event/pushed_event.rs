use async_trait::async_trait;

use crate::error::{DomainError, DomainResult};
use crate::resource::Resource;
use crate::store::ResourceStore;

use super::{RelatedObject, ThinEvent};

/// 推送型事件：通知中实际送达的精简形态
///
/// 完整事件（含 `data`）只能通过 [`pull`](PushedEvent::pull) 从存储取回。
#[async_trait]
pub trait PushedEvent: Clone + Send + Sync {
    /// 事件类型判别值，固定且不可由调用方设置
    const TYPE: &'static str;

    /// 对应的完整事件
    type Full: TryFrom<ThinEvent, Error = DomainError> + Send;

    fn id(&self) -> &str;

    /// 拉取同一标识的完整事件，不修改自身
    async fn pull(&self, store: &dyn ResourceStore) -> DomainResult<Self::Full> {
        let event = store.get_event(self.id()).await?;
        <Self::Full as TryFrom<ThinEvent>>::try_from(event)
    }
}

/// 带关联对象的推送型事件
///
/// 没有关联对象的事件（如 `order.lost`）不实现该 trait，
/// 因而在编译期就无法对其调用 `fetch_related_object`。
#[async_trait]
pub trait RelatedEvent: PushedEvent {
    /// 关联对象对应的资源类型
    type Related: Resource;

    fn related_object(&self) -> &RelatedObject;

    /// 取回关联资源：先校验标识前缀，再查询存储
    async fn fetch_related_object(&self, store: &dyn ResourceStore) -> DomainResult<Self::Related> {
        let related = self.related_object();
        <Self::Related as Resource>::KIND.ensure(&related.id)?;
        <Self::Related as Resource>::retrieve(store, &related.id).await
    }
}

/// 为推送型事件实现 `PushedEvent`，并为其完整事件实现从 `ThinEvent` 的收窄转换
macro_rules! pushed_event {
    ($pushed:ident => $full:ident, $variant:ident, $event_type:expr) => {
        impl $crate::event::PushedEvent for $pushed {
            const TYPE: &'static str = $event_type;
            type Full = $full;

            fn id(&self) -> &str {
                &self.id
            }
        }

        impl TryFrom<$crate::event::ThinEvent> for $full {
            type Error = $crate::error::DomainError;

            fn try_from(event: $crate::event::ThinEvent) -> Result<Self, Self::Error> {
                match event {
                    $crate::event::ThinEvent::$variant(event) => Ok(event),
                    other => Err($crate::error::DomainError::TypeMismatch {
                        expected: $event_type.to_string(),
                        found: other.event_type().to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use pushed_event;
