use super::*;

fn reservation(id: i64, sala: &str) -> Reservation {
    Reservation {
        id: ReservationId::Number(id),
        local: "Matriz".to_owned(),
        sala: sala.to_owned(),
        data_hora_inicio: None,
        data_hora_fim: None,
        responsavel: "Ana".to_owned(),
        tem_cafe: false,
        quantidade_cafe: 2,
        descricao_cafe: String::new(),
    }
}

#[test]
fn default_is_empty_and_idle() {
    let state = ReservationsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn finish_load_replaces_items() {
    let mut state = ReservationsState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Some(vec![reservation(1, "A"), reservation(2, "B")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut state = ReservationsState { items: vec![reservation(1, "A")], loading: false };
    state.begin_load();
    state.finish_load(None);
    assert!(!state.loading);
    assert_eq!(state.items, vec![reservation(1, "A")]);
}

#[test]
fn remove_drops_only_matching_id() {
    let mut state = ReservationsState { items: vec![reservation(1, "A"), reservation(2, "B")], loading: false };
    state.remove(&ReservationId::Number(1));
    assert_eq!(state.items, vec![reservation(2, "B")]);
    state.remove(&ReservationId::Number(99));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn find_looks_up_by_id() {
    let state = ReservationsState { items: vec![reservation(1, "A"), reservation(2, "B")], loading: false };
    assert_eq!(state.find(&ReservationId::Number(2)).map(|r| r.sala.as_str()), Some("B"));
    assert!(state.find(&ReservationId::Text("2".to_owned())).is_none());
}
