use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output},
    error::Error,
    service::{ticket_broadcast_service::TicketBroadcastService, tickets_service::TicketsService},
};
use axum::{
    extract::{Host, Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tickets", post(issue_ticket))
        .route("/api/v1/tickets/:ticket_id", get(find_ticket))
        .route_layer(application_middleware.auth.clone())
        .route_layer(application_middleware.body_limit.clone())
        .route("/api/v1/tickets/count", get(count_tickets))
        .route("/api/v1/tickets/last-code", get(last_broadcast_code))
        .route("/api/v1/logout", post(logout))
}

async fn issue_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Host(host): Host,
    Json(request): Json<input::TicketRequest>,
) -> Result<Json<output::IssuedTicket>, Error> {
    let issued_ticket = tickets_service.issue_ticket(request, host).await?;

    Ok(Json(issued_ticket))
}

async fn find_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(ticket_id, user).await?;

    Ok(Json(ticket))
}

async fn count_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::TicketCount>, Error> {
    let ticket_count = tickets_service.count_tickets().await?;

    Ok(Json(ticket_count))
}

async fn last_broadcast_code(
    State(ticket_broadcast_service): State<Arc<dyn TicketBroadcastService>>,
) -> Result<Json<output::BroadcastCode>, Error> {
    let qr_code = ticket_broadcast_service
        .peek()
        .await
        .ok_or(Error::NoCodePublished)?;

    Ok(Json(output::BroadcastCode { qr_code }))
}

async fn logout(
    State(ticket_broadcast_service): State<Arc<dyn TicketBroadcastService>>,
) -> StatusCode {
    ticket_broadcast_service.clear().await;

    StatusCode::NO_CONTENT
}
