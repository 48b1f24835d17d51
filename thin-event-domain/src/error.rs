//! 领域层统一错误定义
//!
//! 覆盖报文解析、事件类型判别、标识前缀校验与存储查找四类失败，
//! 便于在应用层统一转换为 `AppError`。
//!
use thiserror::Error;

use crate::id::IdKind;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 报文解析 ---
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },
    #[error("unexpected thin event type: \"{0}\"")]
    UnknownEventType(String),

    // --- 标识与查找 ---
    #[error(
        "invalid reference: expected {expected} id with prefix `{}`, got `{id}`",
        .expected.prefix()
    )]
    InvalidReference { expected: IdKind, id: String },
    #[error("not found: {kind} {id}")]
    NotFound { kind: IdKind, id: String },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },

    // --- 存储访问 ---
    #[error("transport error: {reason}")]
    Transport { reason: String },
}

impl DomainError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: IdKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 报文解码失败一律视为格式错误
impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::MalformedPayload {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DomainError::UnknownEventType("bogus.type".into());
        assert_eq!(err.to_string(), "unexpected thin event type: \"bogus.type\"");

        let err = DomainError::InvalidReference {
            expected: IdKind::Order,
            id: "mov_261".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid reference: expected order id with prefix `ord_`, got `mov_261`"
        );

        let err = DomainError::not_found(IdKind::Event, "evt_000");
        assert_eq!(err.to_string(), "not found: event evt_000");
    }
}
