use crate::{
    config::{
        StorageConfig, VERSION, user_agent,
        constants::{DEFAULT_ENDPOINT, LOG_FILE_PATH, STORAGE_PATH},
    },
    models::TaskType,
};

use super::*;

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    assert_eq!(config.general.verbose, true);

    let log = &config.log;
    assert_eq!(log.level, "info");
    assert_eq!(log.filters.len(), 1);
    assert_eq!(log.filters[0].module, "roomchat::backend");
    assert_eq!(log.filters[0].level, "debug");

    let log_file = &log.file;
    assert_eq!(log_file.path, "/var/logs/roomchat.log");
    assert_eq!(log_file.append, true);

    let backend = &config.backend;
    assert_eq!(backend.endpoint, "http://localhost:9000");
    assert_eq!(backend.timeout_secs, Some(60));
    assert_eq!(backend.task_type, Some(TaskType::Technical));
    assert_eq!(backend.temperature, Some(0.2));
    assert_eq!(backend.context, None);

    match &config.storage {
        StorageConfig::Sqlite(sqlite) => {
            assert_eq!(sqlite.path(), Some("/var/lib/roomchat/store.db"));
        }
    }
}

#[test]
fn test_load_configuration_with_some_default_fields() {
    let config =
        load_configuration("./testdata/config_with_default.toml").expect("failed to load config");

    assert_eq!(config.general.verbose, false);

    let log = &config.log;
    assert_eq!(log.level, "info");
    assert!(log.filters.is_empty());
    assert_eq!(log.file.path, LOG_FILE_PATH);
    assert_eq!(log.file.append, false);

    let backend = &config.backend;
    assert_eq!(backend.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(backend.timeout_secs, None);
    assert_eq!(backend.task_type, None);
    assert_eq!(
        backend.context.as_deref(),
        Some("You are talking to a terminal user.")
    );

    match &config.storage {
        StorageConfig::Sqlite(sqlite) => assert_eq!(sqlite.path(), Some(STORAGE_PATH)),
    }
}

#[test]
fn test_load_configuration_missing_file() {
    let err = load_configuration("./testdata/not_found.toml").unwrap_err();
    assert_eq!(err.to_string(), "reading ./testdata/not_found.toml");
}

#[test]
fn test_resolve_path() {
    let ret = resolve_path("$ROOMCHAT_TEST_PATH/${ROOMCHAT_USER_PATH}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, "//config.toml");

    let dir = "/tmp/test";
    let user_path = "user_path";
    unsafe {
        std::env::set_var("ROOMCHAT_TEST_PATH", dir);
        std::env::set_var("ROOMCHAT_USER_PATH", user_path);
    }
    let ret = resolve_path("$ROOMCHAT_TEST_PATH/${ROOMCHAT_USER_PATH}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, format!("{dir}/{user_path}/config.toml"));
}

#[test]
fn test_user_agent() {
    assert_eq!(user_agent(), format!("roomchat/{}", VERSION));
}

#[test]
fn test_basename() {
    assert_eq!(basename("src/chat/send.rs"), "send.rs");
    assert_eq!(basename("main.rs"), "main.rs");
}
