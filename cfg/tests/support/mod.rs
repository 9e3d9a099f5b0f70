#![allow(dead_code)]

use cfg::Cfg;
use cfg::Symbol;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `S => a A B b; A => a A c | ε; B => b B | c`
pub fn example_grammar() -> Cfg {
    Cfg::from_rules(
        "S",
        [
            ("S", vec!["a", "A", "B", "b"]),
            ("A", vec!["a", "A", "c"]),
            ("A", vec!["ε"]),
            ("B", vec!["b", "B"]),
            ("B", vec!["c"]),
        ],
    )
    .unwrap()
}

/// Arithmetic expressions without left recursion.
pub fn arith_grammar() -> Cfg {
    Cfg::from_rules(
        "expr",
        [
            ("expr", vec!["term", "expr'"]),
            ("expr'", vec!["+", "term", "expr'"]),
            ("expr'", vec![]),
            ("term", vec!["factor", "term'"]),
            ("term'", vec!["*", "factor", "term'"]),
            ("term'", vec![]),
            ("factor", vec!["(", "expr", ")"]),
            ("factor", vec!["id"]),
        ],
    )
    .unwrap()
}

pub fn syms(cfg: &Cfg, names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|name| cfg.sym(name).unwrap()).collect()
}

pub fn names(cfg: &Cfg, syms: impl IntoIterator<Item = Symbol>) -> Vec<String> {
    syms.into_iter().map(|sym| cfg.name(sym).to_string()).collect()
}
