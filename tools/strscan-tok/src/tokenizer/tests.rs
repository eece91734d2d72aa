use pretty_assertions::assert_eq;
use strscan::LineColumn;

use super::*;

fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

#[test]
fn default_rules_compile_in_priority_order() {
    let rules = TokenRules::new().unwrap();
    assert_eq!(rules.len(), 5);
    assert_eq!(rules.rules[0].0, TokenKind::Space);
    assert_eq!(rules.rules[4].0, TokenKind::Char);
}

#[test]
fn invalid_pattern_is_reported() {
    let err = TokenRules::from_patterns([(TokenKind::Ident, "[a-")]).unwrap_err();
    assert!(matches!(err, TokenizeError::Pattern(_)));
    assert!(err.to_string().starts_with("invalid token pattern"));
}

#[test]
fn skips_whitespace_by_default() {
    let tokens = tokenize("  x  42 ").unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![(TokenKind::Ident, "x"), (TokenKind::Number, "42")]
    );
}

#[test]
fn keeps_whitespace_on_request() {
    let rules = TokenRules::new().unwrap();
    let tokens: Vec<Token> = Tokenizer::new("a b", &rules)
        .keep_spaces(true)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::Space, " "),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn identifier_beats_number_for_mixed_words() {
    let tokens = tokenize("x1 1x").unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Ident, "x1"),
            (TokenKind::Number, "1"),
            (TokenKind::Ident, "x"),
        ]
    );
}

#[test]
fn string_literal_is_non_greedy() {
    let tokens = tokenize(r#""a" + "b""#).unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Str, r#""a""#),
            (TokenKind::Char, "+"),
            (TokenKind::Str, r#""b""#),
        ]
    );
}

#[test]
fn unterminated_string_falls_back_to_char() {
    let tokens = tokenize("\"ab").unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![(TokenKind::Char, "\""), (TokenKind::Ident, "ab")]
    );
}

#[test]
fn non_ascii_characters_are_single_tokens() {
    let tokens = tokenize("é=λ").unwrap();
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Char, "é"),
            (TokenKind::Char, "="),
            (TokenKind::Char, "λ"),
        ]
    );
    assert_eq!(tokens[2].pos, 2);
    assert_eq!(tokens[2].end, LineColumn::new(0, 3));
}

#[test]
fn token_locations_span_lines() {
    let tokens = tokenize("a\n  bc").unwrap();
    assert_eq!(tokens[1].pos, 4);
    assert_eq!(tokens[1].start, LineColumn::new(1, 2));
    assert_eq!(tokens[1].end, LineColumn::new(1, 4));
}

#[test]
fn empty_source_has_no_tokens() {
    assert_eq!(tokenize("").unwrap(), Vec::new());
}

#[test]
fn unmatched_input_is_stuck() {
    let rules = TokenRules::from_patterns([(TokenKind::Ident, r"^[a-z]+")]).unwrap();
    let mut tok = Tokenizer::new("ab\ncd 1", &rules);

    assert_eq!(tok.next_token().unwrap().unwrap().text, "ab");
    let err = tok.next_token().unwrap_err();
    match err {
        TokenizeError::Stuck { pos, line, column } => {
            assert_eq!((pos, line, column), (2, 0, 2));
        }
        TokenizeError::Pattern(_) => panic!("expected Stuck, got {err:?}"),
    }
    assert_eq!(tok.scanner().pos(), 2);
}

#[test]
fn zero_width_rule_does_not_loop() {
    let rules = TokenRules::from_patterns([(TokenKind::Space, r"^\s*")]).unwrap();
    let err = Tokenizer::new("x", &rules).next_token().unwrap_err();
    assert_eq!(err.to_string(), "no rule matches at 0:0 (position 0)");
}

#[test]
fn iterator_stops_after_error() {
    let rules = TokenRules::from_patterns([(TokenKind::Number, r"^\d+")]).unwrap();
    let mut tok = Tokenizer::new("1x2", &rules);
    assert!(matches!(tok.next(), Some(Ok(_))));
    assert!(matches!(tok.next(), Some(Err(TokenizeError::Stuck { .. }))));
    assert!(tok.next().is_none());
}

#[test]
fn kind_display_names() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Str.to_string(), "STRING");
}
