pub mod sqlx_tester;
