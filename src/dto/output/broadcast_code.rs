use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastCode {
    pub qr_code: String,
}
