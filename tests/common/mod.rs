use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;
use std::{str::FromStr, sync::Once};
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKET_BOOTH_BIND_ADDRESS").unwrap()
}

///
/// Eleven digits unique enough to not collide with other tests
///
pub fn unique_vatin() -> String {
    format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000)
}

pub fn create_user_jwt() -> String {
    let jwt_algorithms = std::env::var("TICKET_BOOTH_JWT_ALGORITHMS").unwrap();
    let jwt_algorithm = Algorithm::from_str(jwt_algorithms.split(',').next().unwrap()).unwrap();
    let jwt_key = std::env::var("TICKET_BOOTH_JWT_TEST_ENCODE_KEY").unwrap();

    let claims = json!({
        "sub": "auth0|671f0a845e23ab4c1f8da2c1",
        "exp": 253402210800_i64,
        "name": "Ana Kovac",
        "email": "ana.kovac@example.com",
    });

    // tests sign with the shared secret, so the server
    // under test must be configured with an HS* algorithm
    jsonwebtoken::encode(
        &Header::new(jwt_algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_key.as_bytes()),
    )
    .unwrap()
}
