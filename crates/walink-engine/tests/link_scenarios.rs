use regex::Regex;
use walink_engine::{LinkForm, build_link, format_phone, generate, validate};
use walink_types::{Field, FormInput, MAX_MESSAGE_CHARS};

// Every digit count from 0 to 13, padded with noise the mask must drop.
fn noisy_inputs() -> Vec<(usize, String)> {
    (0..=13)
        .map(|n| {
            let digits: String = (0..n).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
            (n, format!(" ({digits})-"))
        })
        .collect()
}

#[test]
fn test_mask_shape_by_digit_count() {
    let bare = Regex::new(r"^\d{0,2}$").unwrap();
    let area = Regex::new(r"^\(\d{2}\) \d{1,4}$").unwrap();
    let landline = Regex::new(r"^\(\d{2}\) \d{4}-\d{1,4}$").unwrap();
    let mobile = Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").unwrap();

    for (n, input) in noisy_inputs() {
        let out = format_phone(&input);
        match n {
            0..=2 => assert!(bare.is_match(&out), "{n} digits: {out:?}"),
            3..=6 => assert!(area.is_match(&out), "{n} digits: {out:?}"),
            7..=10 => assert!(landline.is_match(&out), "{n} digits: {out:?}"),
            11 => assert!(mobile.is_match(&out), "{n} digits: {out:?}"),
            _ => assert_eq!(out, input),
        }
    }
}

#[test]
fn test_mobile_with_accented_message() {
    let link = generate(&FormInput::new("11987654321", Some("Olá".into()))).unwrap();
    assert_eq!(link.as_str(), "https://wa.me/11987654321?text=Ol%C3%A1");
}

#[test]
fn test_nine_digit_phone_is_rejected() {
    let errors = generate(&FormInput::new("119876543", None)).unwrap_err();

    insta::assert_json_snapshot!(errors, @r###"
    [
      {
        "kind": "phone_digit_count",
        "found": 9
      }
    ]
    "###);
}

#[test]
fn test_overlong_message_is_rejected_regardless_of_phone() {
    let message = Some("a".repeat(MAX_MESSAGE_CHARS + 1));

    for phone in ["11987654321", "1"] {
        let errors = generate(&FormInput::new(phone, message.clone())).unwrap_err();
        assert_eq!(
            errors.for_field(Field::Message).map(|e| e.message()),
            Some("A mensagem deve ter no máximo 200 caracteres")
        );
    }
}

#[test]
fn test_empty_message_has_no_text_suffix() {
    let link = generate(&FormInput::new("(11) 3333-4444", Some(String::new()))).unwrap();
    assert_eq!(link.as_str(), "https://wa.me/1133334444");
}

#[test]
fn test_repeated_builds_agree() {
    let valid = validate(&FormInput::new("21 99999 0000", Some("Quero um orçamento".into()))).unwrap();
    let first = build_link(&valid);

    for _ in 0..3 {
        assert_eq!(build_link(&valid), first);
    }
    assert_eq!(
        first.as_str(),
        "https://wa.me/21999990000?text=Quero%20um%20or%C3%A7amento"
    );
}

#[test]
fn test_form_link_tracks_last_successful_submit() {
    let mut form = LinkForm::with_input("11987654321", "primeira");
    form.submit().unwrap();

    form.set_message("segunda");
    assert_eq!(
        form.link().map(|l| l.as_str()),
        Some("https://wa.me/11987654321?text=primeira")
    );

    form.submit().unwrap();
    assert_eq!(
        form.link().map(|l| l.as_str()),
        Some("https://wa.me/11987654321?text=segunda")
    );
}
