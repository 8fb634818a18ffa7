//! Tests for the bilingual content table.

use simple_omok::{Language, CONTENT, DEFENSE};
use strum::IntoEnumIterator;

#[test]
fn test_two_language_tags() {
    let tags: Vec<String> = Language::iter().map(|l| l.to_string()).collect();
    assert_eq!(tags, vec!["ko", "en"]);
}

#[test]
fn test_toggle_alternates() {
    assert_eq!(Language::Ko.toggled(), Language::En);
    assert_eq!(Language::En.toggled(), Language::Ko);
    for language in Language::iter() {
        assert_eq!(language.toggled().toggled(), language);
    }
}

#[test]
fn test_every_string_present_under_both_tags() {
    let texts = [
        CONTENT.title,
        CONTENT.subtitle,
        CONTENT.basics_title,
        CONTENT.basics1,
        CONTENT.basics2,
        CONTENT.basics3,
        CONTENT.basics_caption,
        CONTENT.win_title,
        CONTENT.win_desc,
        CONTENT.win_horizontal,
        CONTENT.win_vertical,
        CONTENT.win_diagonal,
        CONTENT.defense_title,
        CONTENT.defense_desc,
        CONTENT.attack_title,
        CONTENT.attack_desc,
        CONTENT.try_it_out,
        CONTENT.black_turn,
        CONTENT.white_turn,
        CONTENT.reset,
        CONTENT.next,
        CONTENT.correct,
        CONTENT.wrong,
        CONTENT.footer,
        CONTENT.quiz_complete_title,
        CONTENT.quiz_complete_desc,
        CONTENT.retry_quiz,
        CONTENT.toggle_language,
        CONTENT.key_hints,
    ];
    for text in texts {
        for language in Language::iter() {
            assert!(!text.get(language).is_empty());
        }
    }
}

#[test]
fn test_scenario_text_localized_both_ways() {
    let scenario = &DEFENSE[0];
    assert_eq!(scenario.title.get(Language::En), "The Open Three");
    assert_eq!(scenario.title.get(Language::Ko), "열린 3 (Open 3)");
    assert_ne!(
        scenario.failure.get(Language::En),
        scenario.failure.get(Language::Ko)
    );
}
