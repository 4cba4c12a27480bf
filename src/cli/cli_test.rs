use clap::Parser;

use super::*;

#[test]
fn test_default_subcommand() {
    let cmd = Command::try_parse_from(["roomchat"]).unwrap();
    assert_eq!(cmd.subcommand(), Commands::Chat);
}

#[test]
fn test_parse_send() {
    let cmd = Command::try_parse_from(["roomchat", "send", "Hello there"]).unwrap();
    assert_eq!(
        cmd.subcommand(),
        Commands::Send {
            conversation: None,
            text: "Hello there".to_string(),
        }
    );

    let cmd = Command::try_parse_from([
        "roomchat",
        "-c",
        "./testdata/config.toml",
        "send",
        "--conversation",
        "abc",
        "Again",
    ])
    .unwrap();
    assert_eq!(
        cmd.subcommand(),
        Commands::Send {
            conversation: Some("abc".to_string()),
            text: "Again".to_string(),
        }
    );
    assert_eq!(cmd.get_config().unwrap().backend.endpoint, "http://localhost:9000");
}

#[test]
fn test_parse_show_delete() {
    let cmd = Command::try_parse_from(["roomchat", "show", "abc"]).unwrap();
    assert_eq!(cmd.subcommand(), Commands::Show { id: "abc".to_string() });

    let cmd = Command::try_parse_from(["roomchat", "delete", "abc"]).unwrap();
    assert_eq!(cmd.subcommand(), Commands::Delete { id: "abc".to_string() });

    assert!(Command::try_parse_from(["roomchat", "show"]).is_err());
}

#[test]
fn test_missing_config_file() {
    let cmd = Command::try_parse_from(["roomchat", "--config", "./testdata/not_found.toml"])
        .unwrap();
    assert!(cmd.get_config().is_err());
}

#[test]
fn test_version_flag() {
    let err = Command::try_parse_from(["roomchat", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
