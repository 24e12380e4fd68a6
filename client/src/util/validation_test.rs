use super::*;

// =============================================================
// Name
// =============================================================

#[test]
fn name_rejects_empty_and_whitespace() {
    assert_eq!(check_name(""), Err(FieldError::NameRequired));
    assert_eq!(check_name("   "), Err(FieldError::NameRequired));
}

#[test]
fn name_rejects_short_trimmed_values() {
    assert_eq!(check_name("ab"), Err(FieldError::NameTooShort));
    assert_eq!(check_name("  ab  "), Err(FieldError::NameTooShort));
}

#[test]
fn name_accepts_three_or_more_characters() {
    assert_eq!(check_name("abc"), Ok(()));
    assert_eq!(check_name(" Ada Lovelace "), Ok(()));
    assert_eq!(check_name("Zoë"), Ok(()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_rejects_empty() {
    assert_eq!(check_email(""), Err(FieldError::EmailRequired));
    assert_eq!(check_email(" \t "), Err(FieldError::EmailRequired));
}

#[test]
fn email_rejects_malformed_addresses() {
    for raw in ["foo", "foo@bar", "@bar.com", "foo@.com", "foo@bar.", "fo o@bar.com", "foo@@bar.com", "a@b@c.com"] {
        assert_eq!(check_email(raw), Err(FieldError::EmailInvalid), "{raw}");
    }
}

#[test]
fn email_accepts_simple_addresses() {
    assert_eq!(check_email("foo@bar.com"), Ok(()));
    assert_eq!(check_email("  first.last@mail.example.org  "), Ok(()));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_accepts_all_classes() {
    assert_eq!(check_password("Passw0rd!"), Ok(()));
}

#[test]
fn password_reports_first_failing_rule() {
    assert_eq!(check_password(""), Err(FieldError::PasswordRequired));
    assert_eq!(check_password("Pa0!"), Err(FieldError::PasswordTooShort));
    assert_eq!(check_password("password"), Err(FieldError::PasswordMissingUppercase));
    assert_eq!(check_password("PASSWORD1!"), Err(FieldError::PasswordMissingLowercase));
    assert_eq!(check_password("Password!"), Err(FieldError::PasswordMissingDigit));
    assert_eq!(check_password("Passw0rd"), Err(FieldError::PasswordMissingSpecial));
}

#[test]
fn password_permits_characters_outside_required_classes() {
    assert_eq!(check_password("Passw0rd! ~é"), Ok(()));
    assert_eq!(check_password("Passw0rd~"), Err(FieldError::PasswordMissingSpecial));
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(check_password("  Ab1!  "), Ok(()));
}

// =============================================================
// Confirm password
// =============================================================

#[test]
fn confirm_requires_value_then_exact_match() {
    assert_eq!(check_confirm_password("", "Passw0rd!"), Err(FieldError::ConfirmRequired));
    assert_eq!(check_confirm_password("Passw0rd", "Passw0rd!"), Err(FieldError::PasswordMismatch));
    assert_eq!(check_confirm_password("Passw0rd! ", "Passw0rd!"), Err(FieldError::PasswordMismatch));
    assert_eq!(check_confirm_password("Passw0rd!", "Passw0rd!"), Ok(()));
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn check_dispatches_to_field_rules() {
    let values = FieldValues {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Passw0rd!".to_owned(),
        confirm_password: "Passw0rd?".to_owned(),
    };
    assert_eq!(check(Field::Name, &values), Ok(()));
    assert_eq!(check(Field::Email, &values), Ok(()));
    assert_eq!(check(Field::Password, &values), Ok(()));
    assert_eq!(check(Field::ConfirmPassword, &values), Err(FieldError::PasswordMismatch));
}

#[test]
fn field_values_set_get_and_clear() {
    let mut values = FieldValues::default();
    for field in Field::ALL {
        values.set(field, field.id().to_owned());
    }
    assert_eq!(values.get(Field::ConfirmPassword), "confirmPassword");
    values.clear();
    assert!(Field::ALL.iter().all(|f| values.get(*f).is_empty()));
}

#[test]
fn field_error_displays_message() {
    assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match.");
}

// =============================================================
// Browser length and trimming semantics
// =============================================================

#[test]
fn lengths_count_utf16_units() {
    assert_eq!(input_len("abc"), 3);
    assert_eq!(input_len("😀a"), 3);
    assert_eq!(check_name("😀a"), Ok(()));
    assert_eq!(check_name("😀"), Err(FieldError::NameTooShort));
    assert_eq!(check_password("Ab1!😀😀"), Ok(()));
    assert_eq!(check_password("Ab1!😀a"), Err(FieldError::PasswordTooShort));
}

#[test]
fn byte_order_mark_is_trimmed_like_whitespace() {
    assert_eq!(trim_input("\u{FEFF} ab \u{FEFF}"), "ab");
    assert_eq!(check_name("\u{FEFF}\u{FEFF}"), Err(FieldError::NameRequired));
    assert_eq!(check_name("\u{FEFF}ab\u{FEFF}"), Err(FieldError::NameTooShort));
    assert_eq!(check_email("\u{FEFF}foo@bar.com"), Ok(()));
}

#[test]
fn byte_order_mark_inside_email_is_rejected() {
    assert_eq!(check_email("foo\u{FEFF}@bar.com"), Err(FieldError::EmailInvalid));
    assert_eq!(check_email("foo@bar\u{FEFF}.com"), Err(FieldError::EmailInvalid));
}
