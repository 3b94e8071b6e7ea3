// tests/email_config.rs
use std::env;

use lrt_digest::notify::email::EmailConfig;

const VARS: &[&str] = &[
    "NEWS_TO_EMAIL",
    "NEWS_FROM_EMAIL",
    "NEWS_SMTP_HOST",
    "NEWS_SMTP_PORT",
    "NEWS_SMTP_USER",
    "NEWS_SMTP_PASS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn set_valid_env() {
    env::set_var("NEWS_TO_EMAIL", "a@x.lt, b@x.lt");
    env::set_var("NEWS_FROM_EMAIL", "sender@x.lt");
    env::set_var("NEWS_SMTP_USER", "sender@x.lt");
    env::set_var("NEWS_SMTP_PASS", "secret");
}

#[serial_test::serial]
#[test]
fn valid_config_with_defaults() {
    clear_env();
    set_valid_env();

    let cfg = EmailConfig::from_env().unwrap();
    assert_eq!(cfg.recipients, vec!["a@x.lt", "b@x.lt"]);
    assert_eq!(cfg.host, "smtp.gmail.com");
    assert_eq!(cfg.port, 587);
    assert_eq!(cfg.from, "sender@x.lt");

    clear_env();
}

#[serial_test::serial]
#[test]
fn password_is_scrubbed_of_spaces_and_nbsp() {
    clear_env();
    set_valid_env();
    env::set_var("NEWS_SMTP_PASS", " abcd efgh\u{a0}ijkl ");

    let cfg = EmailConfig::from_env().unwrap();
    assert_eq!(cfg.password, "abcdefghijkl");

    clear_env();
}

#[serial_test::serial]
#[test]
fn empty_recipient_list_is_fatal() {
    clear_env();
    set_valid_env();
    env::set_var("NEWS_TO_EMAIL", " , ");

    let err = EmailConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NEWS_TO_EMAIL"));

    clear_env();
}

#[serial_test::serial]
#[test]
fn missing_credentials_are_fatal() {
    clear_env();
    env::set_var("NEWS_TO_EMAIL", "a@x.lt");
    env::set_var("NEWS_FROM_EMAIL", "sender@x.lt");
    env::set_var("NEWS_SMTP_USER", "sender@x.lt");

    let err = EmailConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NEWS_SMTP_PASS"));

    clear_env();
}

#[serial_test::serial]
#[test]
fn sender_must_match_authenticated_user() {
    clear_env();
    set_valid_env();
    env::set_var("NEWS_FROM_EMAIL", "other@x.lt");

    let err = EmailConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NEWS_FROM_EMAIL equal"));

    clear_env();
}

#[serial_test::serial]
#[test]
fn unparsable_port_is_fatal() {
    clear_env();
    set_valid_env();
    env::set_var("NEWS_SMTP_PORT", "five-eight-seven");

    let err = EmailConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("NEWS_SMTP_PORT"));

    clear_env();
}
