use serde::Deserialize;

///
/// Issuance request exactly as the landing page sends it.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
}
