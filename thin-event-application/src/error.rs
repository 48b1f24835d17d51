use thin_event_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    /// 分发落到兜底处理器：缺少该事件类型的集成，而非数据问题
    #[error("no implemented handler for {event_type}")]
    UnimplementedHandler { event_type: &'static str },

    #[error("handler: {0}")]
    Handler(#[from] anyhow::Error),
}

impl AppError {
    /// 若为领域错误则返回其引用
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
