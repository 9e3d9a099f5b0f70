use cfg_grammar::{Cfg, GrammarError, RuleId};
use cfg_load::CfgLoadExt;
use test_case::test_case;

#[test]
fn test_load() {
    let cfg = Cfg::load(
        r#"
        S ::= a A B b;
        A ::= a A c | ε;
        B ::= b B | c;
    "#,
    )
    .unwrap();
    assert_eq!(cfg.rules().count(), 5);
    assert_eq!(cfg.name(cfg.start_sym()), "S");
    assert_eq!(
        cfg.stringify_to_bnf(),
        "S ::= a A B b;\nA ::= a A c;\nA ::= ε;\nB ::= b B;\nB ::= c;\n"
    );
}

#[test]
fn test_load_quoted_and_empty() {
    let cfg = Cfg::load(
        r#"
        // Sums of digits.
        sum ::= digit rest;
        rest ::= "+" digit rest | ;
        digit ::= "0" | "1";
    "#,
    )
    .unwrap();
    let plus = cfg.sym("+").unwrap();
    assert!(cfg.is_terminal(plus));
    assert!(cfg.rule(RuleId::new(2)).is_empty());
}

#[test_case("S ::= a", 1, 7 ; "missing semicolon")]
#[test_case("S a;", 1, 3 ; "missing operator")]
#[test_case("S ::= a;\n::= b;", 2, 1 ; "missing name")]
#[test_case("", 1, 1 ; "no rules")]
fn test_syntax_errors(bnf: &str, line: u32, col: u32) {
    let err = Cfg::load(bnf).unwrap_err();
    assert_eq!((err.line, err.col), (line, col), "{}", err);
    assert_eq!(err.grammar_error, None);
}

#[test]
fn test_grammar_error_points_at_rule() {
    let err = Cfg::load("S ::= a;\nA ::= x ε | y;").unwrap_err();
    assert_eq!(
        err.grammar_error,
        Some(GrammarError::MisplacedEmpty {
            rule: RuleId::new(1)
        })
    );
    assert_eq!((err.line, err.col), (2, 7));
    assert!(std::error::Error::source(&err).is_some());
}
