use envcfg::{EnvCfg, EnvConfig, Kind, Spec, Value, env::InMemoryEnv};

#[derive(EnvConfig, Debug, PartialEq)]
pub struct ServerConfig {
    #[env(from = "SERVER_PORT")]
    port: i32,
    #[env(from, default = "127.0.0.1")]
    host: String,
    #[env(from, default = 4)]
    workers: i32,
    #[env(from, default = false)]
    debug: bool,
    #[env(from = "MAX_UPLOAD_BYTES", default = 10_485_760_i64)]
    max_upload: i64,
    #[env(from)]
    sample_rate: Option<f64>,
}

#[test]
fn spec_declares_every_field() {
    let spec = ServerConfig::spec();

    assert_eq!(spec.len(), 6);
    assert_eq!(spec["SERVER_PORT"], Spec::Hint(Kind::Int32));
    assert_eq!(spec["HOST"], Spec::Default(Value::Text("127.0.0.1".into())));
    assert_eq!(spec["WORKERS"], Spec::Default(Value::Int32(4)));
    assert_eq!(spec["DEBUG"], Spec::Default(Value::Bool(false)));
    assert_eq!(spec["MAX_UPLOAD_BYTES"], Spec::Default(Value::Int64(10_485_760)));
    assert_eq!(spec["SAMPLE_RATE"], Spec::Hint(Kind::Float64));
}

#[test]
fn loads_from_env_with_defaults() {
    let env: InMemoryEnv = [("SERVER_PORT", "8080"), ("DEBUG", "True")]
        .into_iter()
        .collect();

    let expected = ServerConfig {
        port: 8080,
        host: "127.0.0.1".into(),
        workers: 4,
        debug: true,
        max_upload: 10_485_760,
        sample_rate: None,
    };

    assert_eq!(ServerConfig::from_env_in(&env).unwrap(), expected);
}

#[test]
fn env_values_override_defaults() {
    let env: InMemoryEnv = [
        ("SERVER_PORT", "443"),
        ("HOST", "0.0.0.0"),
        ("WORKERS", "not-a-number"),
        ("MAX_UPLOAD_BYTES", "5000000000"),
        ("SAMPLE_RATE", "0.1"),
    ]
    .into_iter()
    .collect();

    let actual = ServerConfig::from_env_in(&env).unwrap();

    assert_eq!(actual.host, "0.0.0.0");
    assert_eq!(actual.workers, 4);
    assert_eq!(actual.max_upload, 5_000_000_000);
    assert_eq!(actual.sample_rate, Some(0.1));
}

#[test]
fn from_cfg_reads_an_existing_store() {
    let env: InMemoryEnv = [("SERVER_PORT", "9000")].into_iter().collect();
    let mut cfg = EnvCfg::with_env(env);
    cfg.init(&ServerConfig::spec()).unwrap();

    let actual = ServerConfig::from_cfg(&cfg).unwrap();

    assert_eq!(actual.port, 9000);
    assert!(cfg.is_type::<i64>("MAX_UPLOAD_BYTES"));
}

#[test]
fn from_env_reads_process_env() {
    #[derive(EnvConfig, Debug, PartialEq)]
    pub struct Config {
        #[env(from = "ENVCFG_DERIVE_DATABASE_URL")]
        database_url: String,
        #[env(from = "ENVCFG_DERIVE_POOL_SIZE", default = 10)]
        pool_size: i32,
    }

    let expected = Config {
        database_url: "postgres://postgres@postgres/postgres".to_owned(),
        pool_size: 10,
    };

    let actual = temp_env::with_vars(
        [
            (
                "ENVCFG_DERIVE_DATABASE_URL",
                Some("postgres://postgres@postgres/postgres"),
            ),
            ("ENVCFG_DERIVE_POOL_SIZE", None),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn implicit_env_name_uses_uppercase_field() {
    #[derive(EnvConfig, Debug, PartialEq)]
    pub struct Config {
        #[env(from)]
        log_level: String,
        #[env(from)]
        r#type: String,
    }

    let env: InMemoryEnv = [("LOG_LEVEL", "info"), ("TYPE", "worker")]
        .into_iter()
        .collect();

    let expected = Config {
        log_level: "info".into(),
        r#type: "worker".into(),
    };

    assert_eq!(Config::from_env_in(&env).unwrap(), expected);
}

#[test]
fn negative_and_widened_defaults() {
    #[derive(EnvConfig, Debug, PartialEq)]
    pub struct Config {
        #[env(from, default = -1)]
        offset: i32,
        #[env(from, default = 1)]
        scale: f64,
    }

    let actual = Config::from_env_in(InMemoryEnv::new()).unwrap();

    assert_eq!(actual, Config { offset: -1, scale: 1.0 });
}

#[test]
fn optional_field_reports_bad_values() {
    #[derive(EnvConfig, Debug)]
    #[allow(unused)]
    pub struct Config {
        #[env(from)]
        retries: Option<i32>,
    }

    let env: InMemoryEnv = [("RETRIES", "many")].into_iter().collect();

    assert!(Config::from_env_in(&env).is_err());
}
