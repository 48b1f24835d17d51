//! 报文解析（Wire）
//!
//! 两个报文版本共用同一 JSON 形状：
//! - v1 [`parse_v1`]：解析为通用信封，接受任意 `type`；
//! - v2 [`parse_v2`]：按 `type` 判别值选择具体变体，未知类型返回 `UnknownEventType`。
//!
//! v2 在 v1 的基础上进行一次“上抬”：通用信封经固定映射转换为强类型变体。
//!
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::event::event_types::{
    MOVIE_COMPLETED, MOVIE_STARTED, ORDER_DELIVERY_ATTEMPTED, ORDER_LOST, ORDER_SHIPPED,
};
use crate::event::{
    GenericThinEvent, MovieCompletedPushedEvent, MovieStartedPushedEvent,
    OrderDeliveryAttemptedPushedEvent, OrderLostPushedEvent, OrderShippedPushedEvent,
    PushedThinEvent, RelatedObject,
};

/// 解析 v1 报文为通用信封
pub fn parse_v1(body: &str) -> DomainResult<GenericThinEvent> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(DomainError::malformed("expected a JSON object"));
    }

    Ok(serde_json::from_value(value)?)
}

/// 解析 v2 报文为推送型事件
pub fn parse_v2(body: &str) -> DomainResult<PushedThinEvent> {
    let envelope = parse_v1(body)?;
    let event = PushedThinEvent::try_from(envelope)?;

    tracing::debug!(
        event_id = event.id(),
        event_type = event.event_type(),
        "parsed thin event"
    );

    Ok(event)
}

impl TryFrom<GenericThinEvent> for PushedThinEvent {
    type Error = DomainError;

    fn try_from(envelope: GenericThinEvent) -> DomainResult<Self> {
        let GenericThinEvent {
            id,
            event_type,
            related_object,
        } = envelope;

        let event = match event_type.as_str() {
            ORDER_SHIPPED => Self::OrderShipped(OrderShippedPushedEvent {
                id,
                related_object: required(related_object, ORDER_SHIPPED)?,
            }),
            ORDER_DELIVERY_ATTEMPTED => {
                Self::OrderDeliveryAttempted(OrderDeliveryAttemptedPushedEvent {
                    id,
                    related_object: required(related_object, ORDER_DELIVERY_ATTEMPTED)?,
                })
            }
            // 丢失事件没有关联对象，报文中即使携带也忽略
            ORDER_LOST => Self::OrderLost(OrderLostPushedEvent { id }),
            MOVIE_STARTED => Self::MovieStarted(MovieStartedPushedEvent {
                id,
                related_object: required(related_object, MOVIE_STARTED)?,
            }),
            MOVIE_COMPLETED => Self::MovieCompleted(MovieCompletedPushedEvent {
                id,
                related_object: required(related_object, MOVIE_COMPLETED)?,
            }),
            _ => return Err(DomainError::UnknownEventType(event_type)),
        };

        Ok(event)
    }
}

fn required(
    related_object: Option<RelatedObject>,
    event_type: &str,
) -> DomainResult<RelatedObject> {
    related_object.ok_or_else(|| {
        DomainError::malformed(format!("missing field `related_object` for {event_type}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::event_types;

    fn body(event_type: &str, related: Option<(&str, &str)>) -> String {
        let mut value = serde_json::json!({ "id": "evt_1", "type": event_type });
        if let Some((id, kind)) = related {
            value["related_object"] = serde_json::json!({ "id": id, "type": kind });
        }
        value.to_string()
    }

    #[test]
    fn v1_keeps_unknown_type_verbatim() {
        let envelope = parse_v1(&body("order.shiped", Some(("ord_452", "order")))).unwrap();
        assert_eq!(envelope.event_type, "order.shiped");
        assert_eq!(
            envelope.related_object,
            Some(RelatedObject::new("ord_452", "order"))
        );
    }

    #[test]
    fn v1_accepts_null_or_absent_related_object() {
        let envelope = parse_v1(r#"{"id":"evt_849","type":"order.lost","related_object":null}"#)
            .unwrap();
        assert_eq!(envelope.related_object, None);

        let envelope = parse_v1(r#"{"id":"evt_849","type":"order.lost"}"#).unwrap();
        assert_eq!(envelope.related_object, None);

        let envelope = parse_v1(r#"{"id":"evt_849","type":"order.lost","related_object":{}}"#)
            .unwrap();
        assert_eq!(envelope.related_object, None);
    }

    #[test]
    fn empty_related_object_counts_as_missing() {
        let lost = parse_v2(r#"{"id":"evt_849","type":"order.lost","related_object":{}}"#)
            .unwrap();
        assert_eq!(
            lost,
            PushedThinEvent::OrderLost(OrderLostPushedEvent {
                id: "evt_849".into()
            })
        );

        let err = parse_v2(r#"{"id":"evt_441","type":"order.shipped","related_object":{}}"#)
            .unwrap_err();
        match err {
            DomainError::MalformedPayload { reason } => assert!(reason.contains("order.shipped")),
            other => panic!("unexpected {other:?}"),
        }

        // 非空但缺字段的关联对象仍是格式错误
        let err = parse_v1(
            r#"{"id":"evt_441","type":"order.shipped","related_object":{"id":"ord_452"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload { .. }));
    }

    #[test]
    fn v1_rejects_missing_or_mistyped_fields() {
        for bad in [
            r#"{"type":"order.shipped"}"#,
            r#"{"id":"evt_1"}"#,
            r#"{"id":42,"type":"order.shipped"}"#,
            r#"{"id":"evt_1","type":"order.shipped","related_object":"ord_452"}"#,
            r#"["evt_1","order.shipped"]"#,
            "not json",
        ] {
            match parse_v1(bad) {
                Err(DomainError::MalformedPayload { .. }) => {}
                other => panic!("expected malformed payload for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn v2_rejects_unknown_discriminant() {
        let err = parse_v2(&body("bogus.type", Some(("ord_452", "order")))).unwrap_err();
        match err {
            DomainError::UnknownEventType(t) => assert_eq!(t, "bogus.type"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn v2_requires_related_object_except_for_lost_orders() {
        for event_type in event_types::ALL {
            let result = parse_v2(&body(event_type, None));
            if event_type == event_types::ORDER_LOST {
                assert!(result.is_ok());
            } else {
                match result {
                    Err(DomainError::MalformedPayload { reason }) => {
                        assert!(reason.contains(event_type))
                    }
                    other => panic!("unexpected {other:?}"),
                }
            }
        }
    }

    #[test]
    fn v2_ignores_related_object_on_lost_order() {
        let event = parse_v2(&body("order.lost", Some(("ord_452", "order")))).unwrap();
        assert_eq!(
            event,
            PushedThinEvent::OrderLost(OrderLostPushedEvent { id: "evt_1".into() })
        );
        assert_eq!(event.related_object(), None);
    }

    #[test]
    fn envelope_upgrades_and_downgrades() {
        let envelope = GenericThinEvent {
            id: "evt_509".into(),
            event_type: "movie.started".into(),
            related_object: Some(RelatedObject::new("mov_261", "movie")),
        };
        let typed = PushedThinEvent::try_from(envelope.clone()).unwrap();
        assert_eq!(typed.event_type(), "movie.started");
        assert_eq!(GenericThinEvent::from(&typed), envelope);
    }
}
