use finnews_synth::config::{Config, SEED_ENV};

// Own test binary: mutates the process environment.
#[test]
fn seed_env_overrides_configured_seed() {
    let dir = std::env::temp_dir().join(format!("finnews-synth-seed-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("seeded.toml");
    std::fs::write(&path, "[generator]\nseed = 5\n").unwrap();

    std::env::remove_var(SEED_ENV);
    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.generator.seed, Some(5));

    std::env::set_var(SEED_ENV, " 77 ");
    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.generator.seed, Some(77));

    std::env::set_var(SEED_ENV, "not-a-seed");
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(format!("{:#}", err).contains(SEED_ENV));

    std::env::remove_var(SEED_ENV);
    let _ = std::fs::remove_dir_all(&dir);
}
