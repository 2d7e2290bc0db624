use super::*;
use crate::net::error::ErrorBody;
use crate::state::toast::ToastStatus;

fn to_utc(value: &str) -> Option<String> {
    // Fixed UTC-3 wall clock for deterministic payloads.
    datetime::input_to_utc_iso_with(value, |_| time::macros::offset!(-3))
}

fn filled() -> ReservationForm {
    ReservationForm {
        local: "Matriz".to_owned(),
        sala: "Sala A".to_owned(),
        inicio: "2026-10-16T14:00".to_owned(),
        fim: "2026-10-16T15:30".to_owned(),
        responsavel: "Ana".to_owned(),
        quantidade: "6".to_owned(),
        tem_cafe: false,
        descricao_cafe: String::new(),
    }
}

fn reservation() -> Reservation {
    Reservation {
        id: ReservationId::Number(9),
        local: "Filial".to_owned(),
        sala: "Sala B".to_owned(),
        data_hora_inicio: Some("2026-10-16T17:00:00Z".to_owned()),
        data_hora_fim: None,
        responsavel: "Bruno".to_owned(),
        tem_cafe: false,
        quantidade_cafe: 3,
        descricao_cafe: NO_COFFEE.to_owned(),
    }
}

// =============================================================
// Payload building
// =============================================================

#[test]
fn valid_form_builds_create_payload_without_id() {
    let payload = filled().to_payload(None, to_utc).unwrap();
    assert_eq!(payload.id, None);
    assert_eq!(payload.data_hora_inicio, "2026-10-16T17:00:00.000Z");
    assert_eq!(payload.data_hora_fim, "2026-10-16T18:30:00.000Z");
    assert_eq!(payload.quantidade_cafe, 6);
    assert_eq!(payload.descricao_cafe, NO_COFFEE);
}

#[test]
fn edit_payload_carries_id() {
    let payload = filled().to_payload(Some(ReservationId::Number(9)), to_utc).unwrap();
    assert_eq!(payload.id, Some(ReservationId::Number(9)));
}

#[test]
fn coffee_description_is_sent_when_coffee_is_on() {
    let form = ReservationForm { tem_cafe: true, descricao_cafe: " Água e café ".to_owned(), ..filled() };
    let payload = form.to_payload(None, to_utc).unwrap();
    assert!(payload.tem_cafe);
    assert_eq!(payload.descricao_cafe, "Água e café");
}

#[test]
fn text_fields_are_trimmed() {
    let form = ReservationForm { sala: "  Sala A ".to_owned(), ..filled() };
    assert_eq!(form.to_payload(None, to_utc).unwrap().sala, "Sala A");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_form_reports_every_required_field() {
    let errors = ReservationForm::default().to_payload(None, to_utc).unwrap_err();
    assert_eq!(errors.local, Some("Local é obrigatório"));
    assert_eq!(errors.sala, Some("Sala é obrigatória"));
    assert_eq!(errors.inicio, Some("Obrigatório"));
    assert_eq!(errors.fim, Some("Obrigatório"));
    assert_eq!(errors.responsavel, Some("Obrigatório"));
    assert_eq!(errors.quantidade, Some("Informe a quantidade"));
    assert_eq!(errors.descricao_cafe, None);
}

#[test]
fn quantity_must_be_at_least_one() {
    let form = ReservationForm { quantidade: "0".to_owned(), ..filled() };
    assert_eq!(form.to_payload(None, to_utc).unwrap_err().quantidade, Some("Mínimo 1"));
    let form = ReservationForm { quantidade: "abc".to_owned(), ..filled() };
    assert_eq!(form.to_payload(None, to_utc).unwrap_err().quantidade, Some("Informe a quantidade"));
}

#[test]
fn coffee_description_required_only_with_coffee() {
    let form = ReservationForm { tem_cafe: true, ..filled() };
    let errors = form.to_payload(None, to_utc).unwrap_err();
    assert_eq!(errors.descricao_cafe, Some("Descreva o pedido do café"));
    assert_eq!(FormErrors { descricao_cafe: None, ..errors }, FormErrors::default());
}

#[test]
fn unparseable_dates_are_flagged() {
    let form = ReservationForm { inicio: "16/10/2026".to_owned(), ..filled() };
    assert_eq!(form.to_payload(None, to_utc).unwrap_err().inicio, Some("Data inválida"));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let form = ReservationForm { responsavel: "   ".to_owned(), ..filled() };
    assert_eq!(form.to_payload(None, to_utc).unwrap_err().responsavel, Some("Obrigatório"));
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn from_reservation_prefills_fields() {
    let form = ReservationForm::from_reservation(&reservation(), |raw| raw.unwrap_or_default().to_owned());
    assert_eq!(form.local, "Filial");
    assert_eq!(form.inicio, "2026-10-16T17:00:00Z");
    assert_eq!(form.fim, "");
    assert_eq!(form.quantidade, "3");
    assert!(!form.tem_cafe);
}

#[test]
fn from_reservation_drops_placeholder_description_without_coffee() {
    let form = ReservationForm::from_reservation(&reservation(), |_| String::new());
    assert_eq!(form.descricao_cafe, "");

    let with_coffee = Reservation { tem_cafe: true, descricao_cafe: "Bolo".to_owned(), ..reservation() };
    let form = ReservationForm::from_reservation(&with_coffee, |_| String::new());
    assert_eq!(form.descricao_cafe, "Bolo");
}

// =============================================================
// Failure toasts
// =============================================================

#[test]
fn conflict_is_a_warning_with_backend_message() {
    let err = ApiError::Status {
        status: 409,
        body: ErrorBody { mensagem: Some("Sala ocupada nesse horário".to_owned()), detail: None },
    };
    let toast = save_failure_toast(false, &err);
    assert_eq!(toast.status, ToastStatus::Warning);
    assert_eq!(toast.title, "Não foi possível criar");
    assert_eq!(toast.description.as_deref(), Some("Sala ocupada nesse horário"));
}

#[test]
fn other_failures_are_errors_with_fallback_message() {
    let toast = save_failure_toast(true, &ApiError::Network("offline".to_owned()));
    assert_eq!(toast.status, ToastStatus::Error);
    assert_eq!(toast.title, "Não foi possível atualizar");
    assert_eq!(toast.description.as_deref(), Some("Erro ao salvar reserva. Verifique os dados."));
}

#[test]
fn success_toast_names_the_action() {
    assert_eq!(save_success_toast(true).title, "Reserva Atualizada!");
    assert_eq!(save_success_toast(false).title, "Reserva Criada!");
}
