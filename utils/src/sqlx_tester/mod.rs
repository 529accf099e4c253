use std::{path::Path, thread};

use sqlx::{Connection, Executor, PgConnection, PgPool};
use tokio::runtime::Runtime;

/// A scratch database for integration tests: uniquely named, migrated on
/// creation and dropped again when the value goes out of scope.
pub struct TestDb {
    server_url: String,
    dbname: String,
}

impl TestDb {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        migrations: impl Into<String>,
    ) -> TestDb {
        let user = user.into();
        let password = password.into();
        let host = host.into();
        let server_url = if password.is_empty() {
            format!("postgres://{user}@{host}:{port}")
        } else {
            format!("postgres://{user}:{password}@{host}:{port}")
        };
        let dbname = format!("test_{}", uuid::Uuid::new_v4().simple());
        let url = format!("{server_url}/{dbname}");
        let migrations = migrations.into();

        // run the setup on its own runtime, the caller may already be
        // inside one
        let setup_url = server_url.clone();
        let setup_db = dbname.clone();
        thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let mut conn = PgConnection::connect(&setup_url).await.unwrap();
                conn.execute(format!(r#"CREATE DATABASE "{setup_db}""#).as_str())
                    .await
                    .unwrap();

                let pool = PgPool::connect(&url).await.unwrap();
                sqlx::migrate::Migrator::new(Path::new(&migrations))
                    .await
                    .unwrap()
                    .run(&pool)
                    .await
                    .unwrap();
            });
        })
        .join()
        .unwrap();

        TestDb { server_url, dbname }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.server_url, self.dbname)
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub async fn pool(&self) -> PgPool {
        PgPool::connect(&self.url()).await.unwrap()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let server_url = self.server_url.clone();
        let dbname = self.dbname.clone();
        thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let mut conn = PgConnection::connect(&server_url).await.unwrap();
                // kick out anything still attached to the scratch database
                conn.execute(
                    format!(
                        "SELECT pg_terminate_backend(pid) FROM pg_stat_activity \
                         WHERE datname = '{dbname}' AND pid <> pg_backend_pid()"
                    )
                    .as_str(),
                )
                .await
                .unwrap();
                conn.execute(format!(r#"DROP DATABASE "{dbname}""#).as_str())
                    .await
                    .unwrap();
            });
        })
        .join()
        .unwrap();
    }
}
