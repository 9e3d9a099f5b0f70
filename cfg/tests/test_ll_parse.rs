mod support;

use cfg::classify_ll::{LlParseTable, TableError};
use cfg::ll_parser::{CfgParseExt, LlParser, ParseError, ParseTree};
use cfg::predict_sets::{CfgSetsExt, PerSymbolSetVal};
use cfg::Cfg;
use test_case::test_case;

use support::{arith_grammar, example_grammar, init_logging, names, syms};

fn child_names(cfg: &Cfg, tree: &ParseTree, node: cfg::ll_parser::NodeId) -> Vec<String> {
    names(cfg, tree.children(node).iter().map(|&child| tree.value(child)))
}

#[test]
fn test_example_sets() {
    init_logging();
    let cfg = example_grammar();
    let first = cfg.first_sets();
    let follow = cfg.follow_sets_with_first(&first);
    let sym = |name| cfg.sym(name).unwrap();

    assert_eq!(first.first_of(sym("a")), PerSymbolSetVal::single(sym("a")));
    let first_a = first.first_of(sym("A"));
    assert!(first_a.has_none());
    assert_eq!(&first_a[..], &syms(&cfg, &["a"])[..]);

    let follow_a = follow.follow_of(sym("A"));
    assert!(!follow_a.has_none());
    assert_eq!(&follow_a[..], &syms(&cfg, &["b", "c"])[..]);
    assert!(follow.follow_of(cfg.start_sym()).has_none());
}

#[test]
fn test_sets_are_idempotent() {
    let cfg = arith_grammar();
    let mut first = cfg.first_sets();
    let mut follow = cfg.follow_sets_with_first(&first);
    assert!(!first.update(&cfg));
    assert!(!follow.update(&cfg, &first));
}

#[test]
fn test_example_parse_tree() {
    init_logging();
    let cfg = example_grammar();
    let table = LlParseTable::new(&cfg).unwrap();
    let tree = LlParser::new(&table)
        .parse_names(&["a", "a", "c", "b", "b", "c", "b"])
        .unwrap();

    let root = tree.root();
    assert_eq!(tree.value(root), cfg.start_sym());
    assert_eq!(child_names(&cfg, &tree, root), ["a", "A", "B", "b"]);

    let outer_a = tree.children(root)[1];
    assert_eq!(child_names(&cfg, &tree, outer_a), ["a", "A", "c"]);
    let inner_a = tree.children(outer_a)[1];
    assert_eq!(child_names(&cfg, &tree, inner_a), ["ε"]);

    let mut b = tree.children(root)[2];
    for expected in [&["b", "B"][..], &["b", "B"][..], &["c"][..]] {
        assert_eq!(child_names(&cfg, &tree, b), expected);
        b = *tree.children(b).last().unwrap();
    }
    assert_eq!(
        names(&cfg, tree.leaves()),
        ["a", "a", "c", "b", "b", "c", "b"]
    );
}

#[test]
fn test_example_error() {
    let cfg = example_grammar();
    let err = match cfg.parse_names(&["a", "b"]) {
        Err(ParseError::Syntax(err)) => err,
        other => panic!("expected a syntax error, got {:?}", other),
    };
    assert_eq!(err.position, 2);
    assert_eq!(err.found, None);
    assert_eq!(err.stack.last().copied(), cfg.sym("B"));
}

#[test_case(&["id"] ; "single operand")]
#[test_case(&["id", "+", "id", "*", "id"] ; "precedence")]
#[test_case(&["(", "id", "+", "id", ")", "*", "id"] ; "parenthesized")]
fn test_arith_accepts(input: &[&str]) {
    let cfg = arith_grammar();
    let tree = cfg.parse_names(input).unwrap();
    assert_eq!(names(&cfg, tree.leaves()), input);
}

#[test_case(&[], 0 ; "empty")]
#[test_case(&["id", "id"], 1 ; "missing operator")]
#[test_case(&["(", "id"], 2 ; "unclosed parenthesis")]
#[test_case(&["id", "+"], 2 ; "missing operand")]
#[test_case(&["id", ")"], 1 ; "unopened parenthesis")]
fn test_arith_rejects(input: &[&str], position: usize) {
    let cfg = arith_grammar();
    match cfg.parse_names(input) {
        Err(ParseError::Syntax(err)) => assert_eq!(err.position, position, "{}", err),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_conflict_is_reported() {
    let cfg = Cfg::from_rules("E", [("E", vec!["E", "+", "n"]), ("E", vec!["n"])]).unwrap();
    match cfg.parse_names(&["n"]) {
        Err(ParseError::Table(TableError::Conflict { nonterminal, .. })) => {
            assert_eq!(nonterminal, cfg.start_sym());
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
}

#[test]
fn test_display_tree() {
    let cfg = arith_grammar();
    let tree = cfg.parse_names(&["id"]).unwrap();
    assert_eq!(
        tree.display(&cfg).to_string(),
        "expr\n  term\n    factor\n      id\n    term'\n      ε\n  expr'\n    ε\n"
    );
}
