use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::{
        ticket_broadcast_service::{TicketBroadcastService, TicketBroadcastServiceImpl},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub ticket_broadcast_service: Arc<dyn TicketBroadcastService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new()
        .connect(&env.db_connection_string)
        .await?;

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db_pool.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let ticket_broadcast_service: Arc<dyn TicketBroadcastService> =
        Arc::new(TicketBroadcastServiceImpl::new());

    let config = TicketsServiceConfig {
        max_tickets_per_vatin: env.max_tickets_per_vatin,
    };
    let tickets_service = TicketsServiceImpl::new(
        config,
        tickets_repository,
        ticket_broadcast_service.clone(),
    );
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState {
            tickets_service,
            ticket_broadcast_service,
        },
        ApplicationStateToClose { db_pool },
    ))
}
