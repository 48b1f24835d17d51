//! 标识（Id）约定
//!
//! 所有标识都以实体种类前缀开头：事件 `evt_`、订单 `ord_`、电影 `mov_`。
//! 任何按标识的查找都必须先校验前缀，前缀不符时返回 `InvalidReference`。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// 标识所属的实体种类
///
/// # 示例
///
/// ```
/// use thin_event_domain::id::IdKind;
///
/// assert_eq!(IdKind::Order.prefix(), "ord_");
/// assert!(IdKind::Order.ensure("ord_452").is_ok());
/// assert!(IdKind::Order.ensure("mov_261").is_err());
/// assert_eq!(IdKind::of("evt_441"), Some(IdKind::Event));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    Event,
    Order,
    Movie,
}

impl IdKind {
    pub const ALL: [IdKind; 3] = [IdKind::Event, IdKind::Order, IdKind::Movie];

    /// 该种类标识的固定前缀
    pub const fn prefix(&self) -> &'static str {
        match self {
            IdKind::Event => "evt_",
            IdKind::Order => "ord_",
            IdKind::Movie => "mov_",
        }
    }

    /// 种类名称，与关联对象 `type` 字段的取值一致
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdKind::Event => "event",
            IdKind::Order => "order",
            IdKind::Movie => "movie",
        }
    }

    /// 标识是否带有本种类的前缀
    pub fn matches(&self, id: &str) -> bool {
        id.starts_with(self.prefix())
    }

    /// 校验前缀，不符时返回 `InvalidReference`
    pub fn ensure(&self, id: &str) -> DomainResult<()> {
        if self.matches(id) {
            Ok(())
        } else {
            Err(DomainError::InvalidReference {
                expected: *self,
                id: id.to_string(),
            })
        }
    }

    /// 根据前缀推断种类
    pub fn of(id: &str) -> Option<IdKind> {
        Self::ALL.into_iter().find(|kind| kind.matches(id))
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_rejects_foreign_prefix() {
        let err = IdKind::Event.ensure("ord_452").unwrap_err();
        match err {
            DomainError::InvalidReference { expected, id } => {
                assert_eq!(expected, IdKind::Event);
                assert_eq!(id, "ord_452");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn prefix_must_include_separator() {
        // 仅有 "evt" 而无下划线不算事件标识
        assert!(!IdKind::Event.matches("evt441"));
        assert!(!IdKind::Movie.matches(""));
        assert_eq!(IdKind::of("usr_223"), None);
    }

    #[test]
    fn infers_every_kind_from_prefix() {
        for kind in IdKind::ALL {
            let id = format!("{}123", kind.prefix());
            assert_eq!(IdKind::of(&id), Some(kind));
        }
    }
}
