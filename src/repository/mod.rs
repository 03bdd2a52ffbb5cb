mod dto;
mod error;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::*;
pub use error::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;

#[cfg(test)]
mod test {
    use crate::application::ApplicationEnv;
    use sqlx::{
        postgres::{PgConnectOptions, PgPoolOptions},
        Connection, Executor, PgConnection, PgPool,
    };
    use std::str::FromStr;
    use uuid::Uuid;

    pub async fn create_test_database() -> (PgPool, String) {
        let env = ApplicationEnv::parse().unwrap();
        let db_name = format!("test_{}", Uuid::new_v4().simple());

        println!("creating test database: {db_name}");

        let mut connection = PgConnection::connect(&env.db_connection_string)
            .await
            .unwrap();
        connection
            .execute(format!(r#"CREATE DATABASE "{db_name}""#).as_str())
            .await
            .unwrap();
        connection.close().await.unwrap();

        let options = PgConnectOptions::from_str(&env.db_connection_string)
            .unwrap()
            .database(&db_name);
        let pool = PgPoolOptions::new().connect_with(options).await.unwrap();

        (pool, db_name)
    }

    pub async fn destroy_test_database(pool: PgPool, db_name: String) {
        pool.close().await;

        let env = ApplicationEnv::parse().unwrap();
        let mut connection = PgConnection::connect(&env.db_connection_string)
            .await
            .unwrap();
        let _ = connection
            .execute(format!(r#"DROP DATABASE "{db_name}""#).as_str())
            .await;
        let _ = connection.close().await;
    }
}
