use super::*;

#[test]
fn parse_reads_backend_mensagem() {
    let body = ErrorBody::parse(r#"{"mensagem":"Sala já reservada neste horário."}"#);
    assert_eq!(body.mensagem.as_deref(), Some("Sala já reservada neste horário."));
    assert!(body.detail.is_none());
}

#[test]
fn parse_reads_string_detail() {
    let body = ErrorBody::parse(r#"{"detail":"Whatsapp indisponivel"}"#);
    assert_eq!(body.detail.as_deref(), Some("Whatsapp indisponivel"));
}

#[test]
fn parse_keeps_structured_detail_as_json_text() {
    let body = ErrorBody::parse(r#"{"detail":[{"loc":["body","code"]}]}"#);
    assert_eq!(body.detail.as_deref(), Some(r#"[{"loc":["body","code"]}]"#));
}

#[test]
fn parse_non_json_yields_empty_body() {
    assert_eq!(ErrorBody::parse("<html>Bad Gateway</html>"), ErrorBody::default());
    assert_eq!(ErrorBody::parse(""), ErrorBody::default());
}

#[test]
fn parse_drops_empty_mensagem() {
    assert!(ErrorBody::parse(r#"{"mensagem":""}"#).mensagem.is_none());
}

#[test]
fn accessors_only_answer_for_status_errors() {
    let err = ApiError::Status {
        status: 409,
        body: ErrorBody { mensagem: Some("Conflito".to_owned()), detail: None },
    };
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message(), Some("Conflito"));

    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.server_message(), None);
    assert_eq!(err.detail(), None);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 503, body: ErrorBody::default() };
    assert_eq!(err.to_string(), "request failed: 503");
}
