use faultline_core::{
    cause, code, errorf, level, params, Severity, StructuredError, NOT_STRUCTURED,
};
use serde_json::json;
use std::error::Error;
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "no such file")
}

#[test]
fn new_renders_only_its_message() {
    let err = StructuredError::new("connection reset");
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(err.message(), "connection reset");
    assert!(err.cause().is_none());
}

#[test]
fn new_has_defaults() {
    let err = StructuredError::new("x");
    assert_eq!(err.severity(), Severity::Error);
    assert_eq!(err.code(), 0);
    assert!(err.params().is_none());
}

#[test]
fn errorf_formats_the_message() {
    let err = errorf!("{} of {} shards failed", 3, 8);
    assert_eq!(err.to_string(), "3 of 8 shards failed");
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn wrap_appends_foreign_cause_text() {
    let err = StructuredError::wrap(not_found(), "loading settings");
    assert_eq!(err.to_string(), "loading settings: no such file");
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn wrap_appends_structured_cause_chain() {
    let inner = StructuredError::new("inner");
    let err = StructuredError::wrap(inner, "outer");
    assert_eq!(err.to_string(), "outer: inner");
}

#[test]
fn deep_chain_renders_every_message_in_order() {
    let d = not_found();
    let c = StructuredError::wrap(d, "msgC");
    let b = StructuredError::wrap(c, "msgB");
    let a = StructuredError::wrap(b, "msgA");

    assert_eq!(a.to_string(), "msgA: msgB: msgC: no such file");
}

#[derive(Debug)]
struct Opaque {
    inner: StructuredError,
}

impl std::fmt::Display for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("opaque")
    }
}

impl Error for Opaque {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn chain_stops_at_first_foreign_error() {
    let hidden = StructuredError::new("hidden");
    let err = StructuredError::wrap(Opaque { inner: hidden }, "top");

    // The foreign error's own source chain is not walked.
    assert_eq!(err.to_string(), "top: opaque");
}

#[test]
fn string_causes_are_accepted() {
    let err = StructuredError::wrap("upstream said no", "calling billing");
    assert_eq!(err.to_string(), "calling billing: upstream said no");
}

#[test]
fn fluent_mutators_decorate_the_same_error() {
    let err = StructuredError::new("quota exceeded")
        .with_level(Severity::Warning)
        .with_code(429)
        .with_cause(not_found())
        .add_param("tenant", "acme")
        .add_param("limit", 100);

    assert_eq!(err.message(), "quota exceeded");
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(err.code(), 429);
    assert_eq!(err.to_string(), "quota exceeded: no such file");

    let params = err.params().unwrap();
    assert_eq!(params["tenant"], json!("acme"));
    assert_eq!(params["limit"], json!(100));
}

#[test]
fn in_place_mutators_chain() {
    let mut err = StructuredError::new("flaky");
    err.set_level(Severity::Notice)
        .set_code(7)
        .insert_param("attempt", 2)
        .set_cause(not_found());

    assert_eq!(err.severity(), Severity::Notice);
    assert_eq!(err.code(), 7);
    assert_eq!(err.params().unwrap()["attempt"], json!(2));
    assert_eq!(err.to_string(), "flaky: no such file");
}

#[test]
fn with_cause_replaces_the_previous_cause() {
    let err = StructuredError::wrap(not_found(), "op").with_cause(StructuredError::new("other"));
    assert_eq!(err.to_string(), "op: other");
}

#[test]
fn params_are_last_write_wins() {
    let err = StructuredError::new("x")
        .add_param("k", "v1")
        .add_param("k", "v2");

    let params = params(&err).unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params["k"], json!("v2"));
}

#[test]
fn params_accept_json_values() {
    let err = StructuredError::new("x").add_param("ids", json!([1, 2, 3]));
    assert_eq!(params(&err).unwrap()["ids"], json!([1, 2, 3]));
}

#[test]
fn params_are_absent_until_first_insert() {
    let err = StructuredError::new("x");
    assert!(params(&err).is_none());
    assert!(params(&not_found()).is_none());
}

#[test]
fn code_distinguishes_default_from_foreign() {
    assert_eq!(code(&StructuredError::new("x")), 0);
    assert_eq!(code(&StructuredError::new("x").with_code(12)), 12);
    assert_eq!(code(&not_found()), NOT_STRUCTURED);
    assert_eq!(NOT_STRUCTURED, -1);
}

#[test]
fn level_defaults_for_foreign_errors() {
    let err = StructuredError::new("x");
    assert_eq!(level(&err), Severity::Error);

    let err = err.with_level(Severity::Critical);
    assert_eq!(level(&err), Severity::Critical);

    assert_eq!(level(&not_found()), Severity::Error);
}

#[test]
fn cause_is_none_for_foreign_errors() {
    let io = not_found();
    assert!(cause(&io).is_none());

    let err = StructuredError::wrap(not_found(), "wrapping");
    assert_eq!(cause(&err).unwrap().to_string(), "no such file");
    assert!(cause(&StructuredError::new("bare")).is_none());
}

#[test]
fn accessors_work_through_boxed_errors() {
    let boxed: Box<dyn Error + Send + Sync> =
        Box::new(StructuredError::new("boxed").with_code(3));
    assert_eq!(code(boxed.as_ref()), 3);

    let nested = StructuredError::wrap(boxed, "outer");
    let inner = cause(&nested).unwrap();
    assert_eq!(code(inner), 3);
    assert_eq!(inner.to_string(), "boxed");
}

#[test]
fn query_results_borrow_from_the_queried_error() {
    fn innermost<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
        let mut current = err;
        while let Some(next) = cause(current) {
            current = next;
        }
        current
    }

    let err = StructuredError::wrap(
        StructuredError::wrap(not_found(), "middle").add_param("hop", 1),
        "top",
    );
    assert_eq!(innermost(&err).to_string(), "no such file");

    let middle = cause(&err).unwrap();
    let hops = params(middle).unwrap();
    assert_eq!(hops["hop"], json!(1));
}

#[test]
fn source_exposes_the_cause() {
    let err = StructuredError::wrap(not_found(), "outer");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "no such file");
    assert!(StructuredError::new("x").source().is_none());
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<StructuredError>();
}
