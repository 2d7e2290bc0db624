use super::*;

#[test]
fn nickname_is_required() {
    assert_eq!(validate_nickname(""), Err("Obrigatório"));
    assert_eq!(validate_nickname("   "), Err("Obrigatório"));
}

#[test]
fn nickname_needs_three_characters_after_trim() {
    assert_eq!(validate_nickname("  ab  "), Err("Mínimo 3 caracteres"));
    assert_eq!(validate_nickname(" Ana "), Ok("Ana".to_owned()));
}

#[test]
fn nickname_length_counts_characters_not_bytes() {
    assert_eq!(validate_nickname("Zé"), Err("Mínimo 3 caracteres"));
    assert_eq!(validate_nickname("Zéo"), Ok("Zéo".to_owned()));
}

#[test]
fn welcome_toast_greets_by_nickname() {
    let toast = welcome_toast("Ana");
    assert_eq!(toast.title, "Bem-vindo, Ana!");
    assert_eq!(toast.duration_ms, 3000);
}

#[test]
fn greeting_uses_the_typed_nickname() {
    let echoed = UserProfile { phone_number: "+5511961234567".to_owned(), nickname: String::new() };
    let (profile, toast) = nickname_saved("Ana", echoed.clone());
    assert_eq!(toast.title, "Bem-vindo, Ana!");
    assert_eq!(profile, echoed);
}
