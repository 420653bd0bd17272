use cald_client::utils::logger::{parse_log_level, setup_logger};
use tracing::Level;

#[test]
fn parse_log_level_is_case_insensitive() {
    assert_eq!(parse_log_level("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("WARN"), Level::WARN);
    assert_eq!(parse_log_level("Error"), Level::ERROR);
    assert_eq!(parse_log_level("trace"), Level::TRACE);
}

#[test]
fn parse_log_level_defaults_to_info() {
    assert_eq!(parse_log_level("verbose"), Level::INFO);
    assert_eq!(parse_log_level(""), Level::INFO);
}

#[test]
fn setup_logger_can_be_called_twice() {
    setup_logger();
    setup_logger();
}
