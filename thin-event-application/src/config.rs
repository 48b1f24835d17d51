use bon::Builder;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const LOOKUP_TIMEOUT_ENV: &str = "THIN_EVENT_LOOKUP_TIMEOUT_MS";

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// 客户端配置
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// 单次存储查找的超时
    #[builder(default = DEFAULT_LOOKUP_TIMEOUT)]
    pub lookup_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// 从环境变量读取，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取（便于测试时不修改进程环境）
    pub fn from_vars<F>(var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = var(LOOKUP_TIMEOUT_ENV) {
            let millis: u64 = parse(LOOKUP_TIMEOUT_ENV, &raw)?;
            if millis == 0 {
                return Err(AppError::Validation(format!(
                    "{LOOKUP_TIMEOUT_ENV} must be at least 1"
                )));
            }
            config.lookup_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Validation(format!("{key}={raw:?}: {e}")))
}
