use super::*;

#[test]
fn initials_take_first_letter_of_first_two_words() {
    assert_eq!(initials("Hubert Arlin"), "HA");
    assert_eq!(initials("marie claire dupont"), "MC");
}

#[test]
fn initials_handle_single_word_and_blank_names() {
    assert_eq!(initials("Hubert"), "H");
    assert_eq!(initials("   "), "");
}

#[test]
fn current_profile_initials() {
    assert_eq!(CURRENT_PROFILE.initials(), "HA");
    assert_eq!(CURRENT_PROFILE.environment, "DEV");
}
