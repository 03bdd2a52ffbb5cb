use super::TicketBroadcastService;
use axum::async_trait;
use tokio::sync::Mutex;

pub struct TicketBroadcastServiceImpl {
    last_code: Mutex<Option<String>>,
}

impl TicketBroadcastServiceImpl {
    pub fn new() -> Self {
        let last_code = Mutex::new(None);

        Self { last_code }
    }
}

#[async_trait]
impl TicketBroadcastService for TicketBroadcastServiceImpl {
    async fn publish(&self, qr_code: String) {
        tracing::debug!("publishing last issued ticket code");

        *self.last_code.lock().await = Some(qr_code);
    }

    async fn clear(&self) {
        tracing::debug!("clearing last issued ticket code");

        *self.last_code.lock().await = None;
    }

    async fn peek(&self) -> Option<String> {
        self.last_code.lock().await.clone()
    }
}
