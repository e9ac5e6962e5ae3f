use super::*;

fn classified(name: &str, lang: Lang) -> Kind {
    let mut token = Token::new();
    token.name = name.to_string();
    token.update_kind(lang);
    token.kind
}

#[test]
fn test_update_kind() {
    assert_eq!(classified("module", Lang::Verilog), Kind::Module);
    assert_eq!(classified("always", Lang::Verilog), Kind::Ignore);
    // Identifier-shaped unknowns classify as identifiers.
    assert_eq!(classified("my_signal", Lang::Verilog), Kind::Identifier);
    assert_eq!(classified("counter$q", Lang::SystemVerilog), Kind::Identifier);
    // Macro references stay undefined.
    assert_eq!(classified("`MY_MACRO", Lang::SystemVerilog), Kind::Undefined);
    // SystemVerilog keywords are plain identifiers in Verilog.
    assert_eq!(classified("class", Lang::Verilog), Kind::Identifier);
}

#[test]
fn test_clear() {
    let mut token = Token {
        kind: Kind::Module,
        name: "m".to_string(),
        pos: 17,
        inheritance: "base".to_string(),
        parameter: true,
    };
    token.clear(42);
    assert_eq!(token.kind, Kind::Undefined);
    assert!(token.name.is_empty());
    assert_eq!(token.pos, 42);
    assert!(token.inheritance.is_empty());
    assert!(!token.parameter);
}

#[test]
fn test_word_chars() {
    assert!(is_word_start('a'));
    assert!(is_word_start('_'));
    assert!(is_word_start('`'));
    assert!(!is_word_start('3'));
    assert!(!is_word_start('$'));
    assert!(is_word_char('3'));
    assert!(is_word_char('$'));
    assert!(!is_word_char('.'));
}
