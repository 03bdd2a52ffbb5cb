use super::{
    qr_code::render_qr_data_url, ticket_validation::validate_ticket_request, TicketsService,
    TicketsServiceConfig,
};
use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    repository::TicketsRepository,
    service::ticket_broadcast_service::TicketBroadcastService,
};
use anyhow::anyhow;
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    broadcast: Arc<dyn TicketBroadcastService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        broadcast: Arc<dyn TicketBroadcastService>,
    ) -> Self {
        Self {
            config,
            repository,
            broadcast,
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn issue_ticket(
        &self,
        request: input::TicketRequest,
        host: String,
    ) -> Result<output::IssuedTicket, Error> {
        tracing::info!("issuing ticket");
        tracing::trace!(?request);

        validate_ticket_request(&request.vatin, &request.first_name, &request.last_name)?;

        // check-then-insert is not atomic: two concurrent requests for the
        // same vatin can both pass the check and overshoot the quota
        let issued_count = self.repository.count_by_vatin(&request.vatin).await?;
        if issued_count >= self.config.max_tickets_per_vatin {
            return Err(Error::QuotaExceeded);
        }

        let id = Uuid::new_v4();
        let created_at = OffsetDateTime::now_utc();
        self.repository
            .insert(
                id,
                &request.vatin,
                &request.first_name,
                &request.last_name,
                created_at,
            )
            .await?;
        tracing::info!(%id, "issued ticket");

        let ticket_url = format!("https://{host}/api/v1/tickets/{id}");
        let qr_code =
            render_qr_data_url(&ticket_url).map_err(|err| anyhow!("qr render failed: {err}"))?;

        self.broadcast.publish(qr_code.clone()).await;

        Ok(output::IssuedTicket {
            ticket_id: id,
            qr_code,
        })
    }

    async fn find_ticket(&self, id: Uuid, user: User) -> Result<output::Ticket, Error> {
        tracing::info!(%id, user = %user.subject_id, "finding ticket");

        let ticket = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        Ok(output::Ticket::from(ticket))
    }

    async fn count_tickets(&self) -> Result<output::TicketCount, Error> {
        let count = self.repository.count_all().await?;
        tracing::debug!(count, "counted tickets");

        Ok(output::TicketCount { count })
    }
}
