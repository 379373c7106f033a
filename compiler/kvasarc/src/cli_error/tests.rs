use super::*;

#[test]
fn io_kinds_map_to_variants() {
    let not_found = CliError::from_io("a.kv", io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(not_found, CliError::NotFound { ref path } if path == "a.kv"));
    assert_eq!(not_found.to_string(), "cannot find file 'a.kv'");

    let denied = CliError::from_io("a.kv", io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(denied.to_string(), "permission denied reading 'a.kv'");

    let utf8 = CliError::from_io("a.kv", io::Error::from(io::ErrorKind::InvalidData));
    assert_eq!(utf8.to_string(), "'a.kv' contains invalid UTF-8 data");
}

#[test]
fn other_io_errors_keep_their_source() {
    let err = CliError::from_io("a.kv", io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "error reading 'a.kv': disk on fire");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn usage_errors() {
    let missing = CliError::MissingPath { command: "check" };
    assert_eq!(
        missing.to_string(),
        "missing file path\nUsage: kvasar check <file.kv>"
    );
    assert!(!missing.wants_usage());

    let unknown = CliError::UnknownOption {
        command: "lex",
        option: "--color".to_owned(),
    };
    assert_eq!(unknown.to_string(), "unknown option '--color' for `lex`");

    let command = CliError::UnknownCommand("frobnicate".to_owned());
    assert_eq!(command.to_string(), "unknown command: frobnicate");
    assert!(command.wants_usage());
}
