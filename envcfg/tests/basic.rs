use envcfg::{EnvCfg, Error, Kind, Spec, SpecMap};

fn spec<const N: usize>(entries: [(&str, Spec); N]) -> SpecMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn type_hint_reads_process_env() {
    let actual = temp_env::with_var("PORT", Some("422"), || -> Result<i32, Error> {
        let mut cfg = EnvCfg::new();
        cfg.init(&spec([("PORT", Kind::Int32.into())]))?;
        cfg.get::<i32>("PORT")
    })
    .unwrap();

    assert_eq!(actual, 422);
}

#[test]
fn default_value_fallback() {
    let actual = temp_env::with_var_unset("HOST", || -> Result<String, Error> {
        let mut cfg = EnvCfg::new();
        cfg.init(&spec([("HOST", "localhost".into())]))?;
        cfg.get::<String>("HOST")
    })
    .unwrap();

    assert_eq!(actual, "localhost");
}

#[test]
fn invalid_value_for_type_hint_fails_init() {
    let (result, cfg) = temp_env::with_var("X", Some("3.14"), || {
        let mut cfg = EnvCfg::new();
        let result = cfg.init(&spec([("X", Kind::Int32.into())]));
        (result, cfg)
    });

    let err = result.unwrap_err();
    assert_eq!(err.key(), Some("X"));
    assert!(matches!(err, Error::Resolution { .. }));
    assert_eq!(cfg.get_optional::<i32>("X"), None);
}

#[test]
fn invalid_value_falls_back_to_default() {
    init_tracing();

    let actual = temp_env::with_var("Y", Some("bad_int"), || -> Result<i32, Error> {
        let mut cfg = EnvCfg::new();
        cfg.init(&spec([("Y", 1754.into())]))?;
        cfg.get::<i32>("Y")
    })
    .unwrap();

    assert_eq!(actual, 1754);
}

#[test]
fn env_value_wins_over_default() {
    let actual = temp_env::with_var("TIMEOUT_SECS", Some("2.5"), || -> Result<f64, Error> {
        let mut cfg = EnvCfg::new();
        cfg.init(&spec([("TIMEOUT_SECS", 30.0.into())]))?;
        cfg.get::<f64>("TIMEOUT_SECS")
    })
    .unwrap();

    assert_eq!(actual, 2.5);
}

#[test]
fn int32_boundaries() {
    temp_env::with_vars(
        [
            ("MAX_I32", Some("2147483647")),
            ("MIN_I32", Some("-2147483648")),
            ("PAST_I32", Some("2147483648")),
        ],
        || {
            let mut cfg = EnvCfg::new();
            cfg.init(&spec([
                ("MAX_I32", Kind::Int32.into()),
                ("MIN_I32", Kind::Int32.into()),
                ("PAST_I32", Kind::Int64.into()),
            ]))
            .unwrap();

            assert_eq!(cfg.get::<i32>("MAX_I32").unwrap(), i32::MAX);
            assert_eq!(cfg.get::<i32>("MIN_I32").unwrap(), i32::MIN);
            assert_eq!(cfg.get::<i64>("PAST_I32").unwrap(), 2_147_483_648);

            let err = cfg
                .init(&spec([("PAST_I32", Kind::Int32.into())]))
                .unwrap_err();
            let Error::Resolution { source, .. } = err else {
                panic!("expected a resolution error");
            };
            assert!(source.is_range());
        },
    );
}

#[test]
fn direct_read_is_case_insensitive_for_bools() {
    let actual = temp_env::with_var("DEBUG_MODE", Some("TRUE"), || {
        envcfg::read::<bool>("DEBUG_MODE").with_default(false)
    });

    assert!(actual);
}

#[test]
fn direct_read_require_fails_on_unset() {
    let result = temp_env::with_var_unset("DEBUG_MODE", || {
        envcfg::read::<bool>("DEBUG_MODE").require()
    });

    assert_eq!(
        result,
        Err(Error::NoValue {
            key: "DEBUG_MODE".into()
        })
    );
}

#[test]
fn set_var_rejects_bad_names() {
    assert_eq!(
        envcfg::set_var("BAD=NAME", "x", true),
        Err(Error::InvalidName {
            name: "BAD=NAME".into()
        })
    );
    assert!(!envcfg::try_set_var("BAD=NAME", "x", true));
}

#[test]
fn set_var_without_overwrite_keeps_existing_value() {
    temp_env::with_var("ENVCFG_KEEP", Some("original"), || {
        envcfg::set_var("ENVCFG_KEEP", "replacement", false).unwrap();
        assert_eq!(
            envcfg::read::<String>("ENVCFG_KEEP").require().unwrap(),
            "original"
        );

        assert!(envcfg::try_set_var("ENVCFG_KEEP", "replacement", true));
        assert_eq!(
            envcfg::read::<String>("ENVCFG_KEEP").require().unwrap(),
            "replacement"
        );
    });
}
