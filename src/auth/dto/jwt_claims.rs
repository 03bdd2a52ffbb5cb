use serde::Deserialize;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: i64,
    pub name: String,
    pub email: String,
}
