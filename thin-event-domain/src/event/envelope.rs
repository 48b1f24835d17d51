use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{PushedThinEvent, RelatedObject};

/// 通用事件信封（报文 v1）
///
/// 仅保留 `id`、`type` 与可选的关联对象，`type` 为任意字符串，不做判别校验。
/// 关联对象为 `null` 或空对象 `{}` 时都视为缺省。
/// 保留用于向后兼容，新的处理逻辑不应基于它做分支。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericThinEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub related_object: Option<RelatedObject>,
}

impl From<&PushedThinEvent> for GenericThinEvent {
    fn from(event: &PushedThinEvent) -> Self {
        Self {
            id: event.id().to_string(),
            event_type: event.event_type().to_string(),
            related_object: event.related_object().cloned(),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<RelatedObject>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => RelatedObject::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
