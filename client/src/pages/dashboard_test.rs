use super::*;
use crate::net::error::ErrorBody;
use crate::state::toast::ToastStatus;

fn reservation(tem_cafe: bool) -> Reservation {
    Reservation {
        id: ReservationId::Number(7),
        local: "Matriz".to_owned(),
        sala: "Sala A".to_owned(),
        data_hora_inicio: Some("2026-10-16T17:30:00Z".to_owned()),
        data_hora_fim: None,
        responsavel: "Ana".to_owned(),
        tem_cafe,
        quantidade_cafe: 4,
        descricao_cafe: String::new(),
    }
}

fn status_error(status: u16, mensagem: Option<&str>) -> ApiError {
    ApiError::Status { status, body: ErrorBody { mensagem: mensagem.map(str::to_owned), detail: None } }
}

#[test]
fn load_failure_is_silent_on_unauthorized() {
    assert!(load_failure_toast(&status_error(401, None)).is_none());
}

#[test]
fn load_failure_prefers_backend_message() {
    let toast = load_failure_toast(&status_error(500, Some("Banco fora do ar"))).expect("toast");
    assert_eq!(toast.title, "Erro ao carregar reservas");
    assert_eq!(toast.description.as_deref(), Some("Banco fora do ar"));
    assert_eq!(toast.duration_ms, 4000);
}

#[test]
fn load_failure_falls_back_for_network_errors() {
    let toast = load_failure_toast(&ApiError::Network("refused".to_owned())).expect("toast");
    assert_eq!(toast.description.as_deref(), Some("Não foi possível conectar ao servidor."));
}

#[test]
fn delete_toasts() {
    let ok = delete_success_toast();
    assert_eq!(ok.status, ToastStatus::Success);
    assert_eq!(ok.title, "Reserva Excluída");

    let failed = delete_failure_toast(&status_error(404, None));
    assert_eq!(failed.status, ToastStatus::Error);
    assert_eq!(failed.description.as_deref(), Some("Falha na exclusão."));

    let failed = delete_failure_toast(&status_error(409, Some("Reserva em andamento")));
    assert_eq!(failed.description.as_deref(), Some("Reserva em andamento"));
}

#[test]
fn room_and_coffee_labels() {
    assert_eq!(room_label(&reservation(false)), "Sala A (Matriz)");
    assert_eq!(coffee_label(&reservation(true)), "Sim");
    assert_eq!(coffee_label(&reservation(false)), "Não");
}
