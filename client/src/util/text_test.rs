use super::*;

#[test]
fn capitalize_uppercases_first_char_only() {
    assert_eq!(capitalize("demo"), "Demo");
    assert_eq!(capitalize("eHealth tenant"), "EHealth tenant");
    assert_eq!(capitalize("already Upper"), "Already Upper");
}

#[test]
fn capitalize_single_char() {
    assert_eq!(capitalize("x"), "X");
    assert_eq!(capitalize("Q"), "Q");
}

#[test]
fn capitalize_empty_returns_empty() {
    assert_eq!(capitalize(""), "");
}

#[test]
fn capitalize_leaves_non_letters_alone() {
    assert_eq!(capitalize("42-tenant"), "42-tenant");
    assert_eq!(capitalize("-dash"), "-dash");
}

#[test]
fn capitalize_handles_multibyte_first_char() {
    assert_eq!(capitalize("élan"), "Élan");
    assert_eq!(capitalize("ßtraße"), "SStraße");
}
