//! 示例数据（需开启 `fixtures` 特性）
//!
//! 五个完整事件、一个订单与一部电影，以及由事件推导出的待投递报文。
//!
use chrono::NaiveDate;

use crate::event::{
    MovieCompletedData, MovieCompletedEvent, MovieStartedData, MovieStartedEvent,
    OrderDeliveryAttemptedData, OrderDeliveryAttemptedEvent, OrderLostData, OrderLostEvent,
    OrderShippedData, OrderShippedEvent, RelatedObject, ThinEvent,
};
use crate::resource::{Movie, Order};
use crate::store::InMemoryResourceStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

pub fn sample_events() -> Vec<ThinEvent> {
    vec![
        ThinEvent::OrderShipped(OrderShippedEvent {
            id: "evt_441".into(),
            related_object: RelatedObject::new("ord_452", "order"),
            data: OrderShippedData {
                shipping_service: "usps".into(),
            },
        }),
        ThinEvent::OrderDeliveryAttempted(OrderDeliveryAttemptedEvent {
            id: "evt_631".into(),
            related_object: RelatedObject::new("ord_452", "order"),
            data: OrderDeliveryAttemptedData {
                success: true,
                attempt_num: 2,
                delivery_location: "front porch".into(),
            },
        }),
        ThinEvent::OrderLost(OrderLostEvent {
            id: "evt_849".into(),
            data: OrderLostData {
                last_seen_city: "Boulder".into(),
            },
        }),
        ThinEvent::MovieStarted(MovieStartedEvent {
            id: "evt_509".into(),
            related_object: RelatedObject::new("mov_261", "movie"),
            data: MovieStartedData {
                date: date(2025, 6, 1),
            },
        }),
        ThinEvent::MovieCompleted(MovieCompletedEvent {
            id: "evt_606".into(),
            related_object: RelatedObject::new("mov_261", "movie"),
            data: MovieCompletedData {
                user: "usr_223".into(),
                rating: 4,
            },
        }),
    ]
}

pub fn sample_order() -> Order {
    Order {
        id: "ord_452".into(),
        created: date(2025, 5, 9),
        num_items: 5,
        cost_cents: 300,
        delivery_date: date(2025, 6, 9),
    }
}

pub fn sample_movie() -> Movie {
    Movie {
        id: "mov_261".into(),
        title: "Kung Fu Panda".into(),
        release_year: 2008,
    }
}

/// 预置全部示例数据的内存存储
pub fn sample_store() -> InMemoryResourceStore {
    let store = InMemoryResourceStore::new();
    for event in sample_events() {
        store
            .insert_event(event)
            .expect("fixture event ids are prefixed");
    }
    store
        .insert_order(sample_order())
        .expect("fixture order id is prefixed");
    store
        .insert_movie(sample_movie())
        .expect("fixture movie id is prefixed");
    store
}

/// 示例事件投递时的 v2 报文
pub fn incoming_bodies() -> Vec<String> {
    sample_events()
        .iter()
        .map(|event| serde_json::to_string(&event.to_pushed()).expect("pushed events serialize"))
        .collect()
}
