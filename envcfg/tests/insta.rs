//! Combining `requirements` with insta documents the environment variables
//! an application needs, and keeps error messages stable.

use envcfg::{EnvConfig, env::InMemoryEnv};

#[derive(EnvConfig)]
#[allow(unused)]
pub struct AppConfig {
    #[env(from, default = "postgres://postgres@postgres/postgres")]
    database_url: String,
    #[env(from, default = 3000)]
    port: i32,
    #[env(from = "KAFKA_BROKER")]
    broker: String,
    #[env(from)]
    sample_ratio: Option<f64>,
    #[env(from, default = 0.5)]
    jitter: f64,
}

#[test]
fn snapshot_as_documentation() {
    insta::assert_snapshot!(AppConfig::requirements(), @r"
    DATABASE_URL=postgres://postgres@postgres/postgres
    PORT=3000
    KAFKA_BROKER=
    SAMPLE_RATIO=
    JITTER=0.5
    ");
}

#[test]
fn snapshot_errors() {
    let env: InMemoryEnv = [("PORT", "3000.0"), ("SAMPLE_RATIO", "half")]
        .into_iter()
        .collect();

    let errors = AppConfig::from_env_in(&env).err().unwrap();

    insta::assert_snapshot!(errors, @r#"
    1 configuration error:
      1. `AppConfig.sample_ratio`: failed to resolve 'SAMPLE_RATIO': expected float64, found "half"
    "#);
}
