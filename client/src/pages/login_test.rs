use super::*;
use crate::net::error::ErrorBody;
use crate::state::toast::ToastStatus;

fn status_error(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Status { status, body: ErrorBody { mensagem: None, detail: detail.map(str::to_owned) } }
}

#[test]
fn phone_input_requires_a_value() {
    assert_eq!(validate_phone_input(Country::Br, ""), Err("Obrigatório"));
    assert_eq!(validate_phone_input(Country::Br, "   "), Err("Obrigatório"));
}

#[test]
fn phone_input_rejects_invalid_numbers() {
    assert_eq!(validate_phone_input(Country::Br, "1234"), Err("Número inválido."));
    assert_eq!(validate_phone_input(Country::Us, "0015550123"), Err("Número inválido."));
}

#[test]
fn phone_input_converts_to_e164() {
    assert_eq!(validate_phone_input(Country::Br, "11987654321"), Ok("+5511987654321".to_owned()));
    assert_eq!(validate_phone_input(Country::Pt, "912345678"), Ok("+351912345678".to_owned()));
}

#[test]
fn code_input_keeps_six_digits() {
    assert_eq!(normalize_code_input("12a34 5678"), "123456");
    assert_eq!(normalize_code_input("abc"), "");
}

#[test]
fn code_validation_messages() {
    assert_eq!(validate_code_input(""), Err("Obrigatório"));
    assert_eq!(validate_code_input("123"), Err("6 dígitos necessários"));
    assert_eq!(validate_code_input("123456"), Ok("123456".to_owned()));
}

#[test]
fn unavailable_whatsapp_is_a_warning() {
    let toast = request_code_failure_toast(&status_error(503, None));
    assert_eq!(toast.status, ToastStatus::Warning);
    assert_eq!(toast.title, "Atenção");
    assert_eq!(
        toast.description.as_deref(),
        Some("WhatsApp indisponível no momento, contate o administrador do sistema.")
    );

    let toast = request_code_failure_toast(&status_error(400, Some("Whatsapp indisponivel")));
    assert_eq!(toast.status, ToastStatus::Warning);
}

#[test]
fn internal_error_and_fallback_messages() {
    let toast = request_code_failure_toast(&status_error(500, None));
    assert_eq!(toast.status, ToastStatus::Error);
    assert_eq!(toast.description.as_deref(), Some("Erro interno no servidor."));

    let toast = request_code_failure_toast(&ApiError::Network("offline".to_owned()));
    assert_eq!(toast.description.as_deref(), Some("Falha na solicitação."));
    assert_eq!(toast.duration_ms, 6000);
}

#[test]
fn whatsapp_status_with_qr_opens_the_modal() {
    let status = WhatsappStatus { qr: Some("data:image/png;base64,AAAA".to_owned()), ready: false };
    assert!(whatsapp_status_toast(&status).is_none());
}

#[test]
fn whatsapp_status_ready_or_starting() {
    let ready = whatsapp_status_toast(&WhatsappStatus { qr: None, ready: true });
    assert_eq!(ready.map(|t| t.title), Some("Conectado!".to_owned()));

    let starting = whatsapp_status_toast(&WhatsappStatus::default());
    assert_eq!(starting.map(|t| t.status), Some(ToastStatus::Warning));
}

#[test]
fn admin_password_must_match_exactly() {
    assert!(admin_password_matches(Some(config::admin_password())));
    assert!(!admin_password_matches(Some("wrong")));
    assert!(!admin_password_matches(None));
}

#[test]
fn subtitle_mentions_the_number_on_the_code_step() {
    assert_eq!(subtitle(Step::Code, "+5511987654321"), "Digite o código enviado para +5511987654321");
    assert_eq!(subtitle(Step::Phone, ""), "Validação segura via WhatsApp");
}

#[test]
fn empty_qr_is_not_a_pairing_code() {
    let status = WhatsappStatus { qr: Some(String::new()), ready: true };
    assert_eq!(pairing_qr(&status), None);
    let toast = whatsapp_status_toast(&status);
    assert_eq!(toast.map(|t| t.title), Some("Conectado!".to_owned()));

    let status = WhatsappStatus { qr: Some("  ".to_owned()), ready: false };
    assert_eq!(whatsapp_status_toast(&status).map(|t| t.status), Some(ToastStatus::Warning));
}

#[test]
fn pairing_qr_passes_the_image_through() {
    let status = WhatsappStatus { qr: Some("data:image/png;base64,AAAA".to_owned()), ready: false };
    assert_eq!(pairing_qr(&status), Some("data:image/png;base64,AAAA"));
}
