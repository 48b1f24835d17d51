use serde::{Deserialize, Serialize};

/// 关联对象引用：指向事件所涉及的另一个领域资源
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelatedObject {
    pub id: String,
    /// 资源种类（报文字段名为 `type`）
    #[serde(rename = "type")]
    pub kind: String,
}

impl RelatedObject {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}
