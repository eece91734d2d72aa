use super::*;

// === Literals ===

#[test]
fn str_matches_prefix() {
    assert_eq!(Matcher::find("def", "define"), Some(0..3));
    assert_eq!(Matcher::find("def", "undef"), None);
}

#[test]
fn empty_str_is_zero_width() {
    assert_eq!(Matcher::find("", "abc"), Some(0..0));
}

#[test]
fn string_forwards_to_str() {
    let lit = String::from("αβ");
    assert_eq!(Matcher::find(&lit, "αβγ"), Some(0..4));
    assert_eq!(Matcher::find(&lit, "βα"), None);
}

#[test]
fn char_matches_single_codepoint() {
    assert_eq!('x'.find("xyz"), Some(0..1));
    assert_eq!('é'.find("été"), Some(0..2));
    assert_eq!('x'.find("yx"), None);
    assert_eq!('x'.find(""), None);
}

// === Character Classes ===

#[test]
fn char_class_takes_longest_run() {
    let alpha = CharClass(char::is_alphabetic);
    assert_eq!(alpha.find("héllo world"), Some(0..6));
}

#[test]
fn char_class_runs_to_end_of_haystack() {
    let alpha = CharClass(char::is_alphabetic);
    assert_eq!(alpha.find("abc"), Some(0..3));
}

#[test]
fn char_class_rejects_empty_run() {
    let alpha = CharClass(char::is_alphabetic);
    assert_eq!(alpha.find("1abc"), None);
    assert_eq!(alpha.find(""), None);
}

#[test]
fn any_char_takes_one_codepoint() {
    assert_eq!(AnyChar.find("= 42;"), Some(0..1));
    assert_eq!(AnyChar.find("🦀x"), Some(0..4));
    assert_eq!(AnyChar.find(""), None);
}

#[test]
fn char_class_of_everything_takes_whole_haystack() {
    let any = CharClass(|_: char| true);
    assert_eq!(any.find("= 42;"), Some(0..5));
}

// === Forwarding ===

#[test]
fn references_and_boxes_forward() {
    let boxed: Box<dyn Matcher> = Box::new('a');
    assert_eq!(boxed.find("abc"), Some(0..1));
    assert_eq!((&&'a').find("abc"), Some(0..1));
}

// === Regex ===

#[cfg(feature = "regex")]
#[allow(
    clippy::unwrap_used,
    reason = "test patterns are known to compile"
)]
mod regex_matcher {
    use super::super::Matcher;
    use regex::Regex;

    #[test]
    fn reports_leftmost_span() {
        let re = Regex::new(r"\d+").unwrap();
        assert_eq!(Matcher::find(&re, "42abc"), Some(0..2));
        assert_eq!(Matcher::find(&re, "abc42"), Some(3..5));
        assert_eq!(Matcher::find(&re, "abc"), None);
    }

    #[test]
    fn spans_are_byte_offsets() {
        let re = Regex::new(r"\w+").unwrap();
        assert_eq!(Matcher::find(&re, "日本 語"), Some(0..6));
    }
}
