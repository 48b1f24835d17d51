use thin_event_domain::store::ResourceStore;

use crate::client::ThinEventClient;

/// 处理器上下文
///
/// 承载一次通知处理所需的客户端：检索事件与资源，
/// 并提供 `pull` / `fetch_related_object` 所需的存储。
///
/// 每次分发都新建上下文，处理器之间不共享可变状态。
#[derive(Clone)]
pub struct HandlerContext {
    client: ThinEventClient,
}

impl HandlerContext {
    pub fn new(client: ThinEventClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ThinEventClient {
        &self.client
    }

    pub fn store(&self) -> &dyn ResourceStore {
        self.client.store()
    }
}
