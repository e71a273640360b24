#![allow(non_snake_case)]

use super::*;
use std::error::Error as _;

#[test]
fn ExtractError___parse_int_failure___displays_source_key_and_cause() {
    let cause = "abc".parse::<i64>().unwrap_err();

    let err = ExtractError::new("query:limit", cause);

    assert_eq!(err.to_string(), "query:limit: invalid digit found in string");
}

#[test]
fn ExtractError___form_data_source___keeps_camel_case_token() {
    let cause = "maybe".parse::<bool>().unwrap_err();

    let err = ExtractError::new("formData:agree", cause);

    assert_eq!(
        err.to_string(),
        "formData:agree: provided string was not `true` or `false`"
    );
}

#[test]
fn ExtractError___context___returns_source_key_pair() {
    let err = ExtractError::new("header:X-Page", "bad value");

    assert_eq!(err.context(), "header:X-Page");
}

#[test]
fn ExtractError___source___exposes_underlying_error() {
    let cause = "1.5.2".parse::<f64>().unwrap_err();
    let expected = cause.to_string();

    let err = ExtractError::new("query:ratio", cause);

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), expected);
}

#[test]
fn ExtractError___into_inner___downcasts_to_original_type() {
    let cause = "x".parse::<u8>().unwrap_err();

    let err = ExtractError::new("query:level", cause.clone());

    let inner = err.into_inner().downcast::<std::num::ParseIntError>().unwrap();
    assert_eq!(*inner, cause);
}

#[test]
fn ExtractError___is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ExtractError>();
}
