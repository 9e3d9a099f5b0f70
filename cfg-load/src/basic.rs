//! Loads plain BNF.
//!
//! ```text
//! // Comments run to the end of the line.
//! start ::= a list "b";
//! list ::= item list | ε;
//! item ::= x | y | ;
//! ```
//!
//! The left-hand side of the first rule is the start symbol. Every
//! left-hand symbol is a nonterminal, and every other symbol is a
//! terminal. An empty alternative, or one holding only `ε`, is an
//! epsilon production. Quoted names may hold any character.
//!
//! The text itself is read by an [`LlParser`] for the grammar of BNF.

use cfg_classify_ll::LlParseTable;
use cfg_grammar::{Cfg, CfgBuilder, GrammarError};
use cfg_ll_parser::{LlParser, ParseTree, SyntaxError};
use cfg_symbol::Symbol;
use log::debug;

use crate::lexer::{Lexer, Spanned, Token};
use crate::LoadError;

/// Extension trait for loading grammars from BNF text.
pub trait CfgLoadExt: Sized {
    /// Parses BNF text and builds a grammar from it.
    fn load(bnf: &str) -> Result<Self, LoadError>;
}

/// Left-hand side of a rule, with the position of each alternative.
#[derive(Debug, Eq, PartialEq)]
struct RuleDef {
    lhs: String,
    alternatives: Vec<(Vec<String>, u32, u32)>,
}

impl CfgLoadExt for Cfg {
    fn load(bnf: &str) -> Result<Self, LoadError> {
        let tokens = Lexer::tokenize(bnf)?;
        let syntax = BnfSyntax::new();
        let defs = syntax.read(&tokens)?;
        let start = match defs.first() {
            Some(def) => def.lhs.clone(),
            None => {
                return Err(LoadError {
                    reason: "no rules found".to_string(),
                    line: 1,
                    col: 1,
                    grammar_error: None,
                })
            }
        };

        let mut builder = CfgBuilder::inferred();
        builder.start(&start);
        let mut positions = vec![];
        for def in &defs {
            let mut rule_builder = builder.rule(&def.lhs);
            for (rhs, line, col) in &def.alternatives {
                rule_builder = rule_builder.rhs(rhs);
                positions.push((*line, *col));
            }
        }
        let cfg = builder.build().map_err(|err| {
            let (line, col) = rule_of(&err)
                .and_then(|index| positions.get(index).copied())
                .unwrap_or((1, 1));
            LoadError {
                reason: err.to_string(),
                line,
                col,
                grammar_error: Some(err),
            }
        })?;
        debug!("loaded {} rules", cfg.num_rules());
        Ok(cfg)
    }
}

fn rule_of(err: &GrammarError) -> Option<usize> {
    match *err {
        GrammarError::UndeclaredSymbol { rule, .. } => rule.map(|rule| rule.usize()),
        GrammarError::TerminalLhs { rule, .. } | GrammarError::MisplacedEmpty { rule } => {
            Some(rule.usize())
        }
        _ => None,
    }
}

/// The grammar of BNF, with the symbols the reader looks for.
struct BnfSyntax {
    grammar: Cfg,
    rule: Symbol,
    alt: Symbol,
    ident: Symbol,
    bnf_op: Symbol,
    semicolon: Symbol,
    pipe: Symbol,
}

impl BnfSyntax {
    fn new() -> Self {
        let grammar = Cfg::from_rules(
            "rules",
            [
                ("rules", vec!["rule", "rules"]),
                ("rules", vec![]),
                ("rule", vec!["ident", "bnf_op", "alts", "semicolon"]),
                ("alts", vec!["alt", "alts_tail"]),
                ("alts_tail", vec!["pipe", "alt", "alts_tail"]),
                ("alts_tail", vec![]),
                ("alt", vec!["ident", "alt"]),
                ("alt", vec![]),
            ],
        )
        .expect("the grammar of BNF is well-formed");
        let sym = |name: &str| grammar.sym(name).expect("symbol of the grammar of BNF");
        let [rule, alt, ident, bnf_op, semicolon, pipe] =
            ["rule", "alt", "ident", "bnf_op", "semicolon", "pipe"].map(sym);
        BnfSyntax {
            grammar,
            rule,
            alt,
            ident,
            bnf_op,
            semicolon,
            pipe,
        }
    }

    /// Parses the tokens and collects the rules they spell out.
    fn read(&self, tokens: &[Spanned]) -> Result<Vec<RuleDef>, LoadError> {
        let table = LlParseTable::new(&self.grammar).expect("the grammar of BNF is LL(1)");
        let input = tokens.iter().map(|(token, _, _)| self.terminal(token));
        let tree = LlParser::new(&table)
            .parse(input)
            .map_err(|err| self.syntax_error(&err, tokens))?;
        Ok(self.rule_defs(&tree, tokens))
    }

    fn terminal(&self, token: &Token) -> Symbol {
        match token {
            Token::Ident(_) => self.ident,
            Token::BnfOp => self.bnf_op,
            Token::Semicolon => self.semicolon,
            Token::Pipe => self.pipe,
        }
    }

    /// Walks the tree left to right. Terminal leaves match the tokens one
    /// to one.
    fn rule_defs(&self, tree: &ParseTree, tokens: &[Spanned]) -> Vec<RuleDef> {
        let mut defs: Vec<RuleDef> = vec![];
        let mut next_token = 0;
        for node in tree.preorder() {
            let value = tree.value(node);
            let parent = tree.parent(node).map(|parent| tree.value(parent));
            if value == self.rule {
                defs.push(RuleDef {
                    lhs: String::new(),
                    alternatives: vec![],
                });
            } else if value == self.alt && parent != Some(self.alt) {
                let (line, col) = position(tokens, next_token);
                if let Some(def) = defs.last_mut() {
                    def.alternatives.push((vec![], line, col));
                }
            } else if self.grammar.is_terminal(value) {
                if let (Some((Token::Ident(name), _, _)), Some(def)) =
                    (tokens.get(next_token), defs.last_mut())
                {
                    if parent == Some(self.rule) {
                        def.lhs = name.clone();
                    } else if let Some((rhs, _, _)) = def.alternatives.last_mut() {
                        rhs.push(name.clone());
                    }
                }
                next_token += 1;
            }
        }
        defs
    }

    fn syntax_error(&self, err: &SyntaxError, tokens: &[Spanned]) -> LoadError {
        let (line, col) = position(tokens, err.position);
        let found = match tokens.get(err.position) {
            Some((token, _, _)) => describe(token),
            None => "end of input".to_string(),
        };
        let expected: Vec<&str> = err.expected.iter().map(|&sym| self.describe(sym)).collect();
        let reason = if expected.is_empty() {
            err.reason.clone()
        } else {
            format!("expected {}, found {}", one_of(&expected), found)
        };
        LoadError {
            reason,
            line,
            col,
            grammar_error: None,
        }
    }

    fn describe(&self, sym: Symbol) -> &'static str {
        if sym == self.ident {
            "a symbol name"
        } else if sym == self.bnf_op {
            "`::=`"
        } else if sym == self.semicolon {
            "`;`"
        } else if sym == self.pipe {
            "`|`"
        } else {
            "end of input"
        }
    }
}

/// Position of the token at `index`, or of the last one past the end.
fn position(tokens: &[Spanned], index: usize) -> (u32, u32) {
    tokens
        .get(index)
        .or_else(|| tokens.last())
        .map_or((1, 1), |&(_, line, col)| (line, col))
}

fn one_of(items: &[&str]) -> String {
    match items.split_last() {
        Some((last, init)) if !init.is_empty() => format!("{} or {}", init.join(", "), last),
        _ => items.concat(),
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Ident(name) => format!("`{}`", name),
        Token::BnfOp => "`::=`".to_string(),
        Token::Semicolon => "`;`".to_string(),
        Token::Pipe => "`|`".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_bnf_syntax_is_ll1() {
        let syntax = BnfSyntax::new();
        let classification = LlParseTable::classify(&syntax.grammar);
        assert!(classification.is_ll1());
        assert!(LlParseTable::new(&syntax.grammar).is_ok());
    }

    #[test]
    fn test_rule_defs() {
        let tokens = Lexer::tokenize("A ::= x y | ;\nB ::= A").unwrap();
        let err = BnfSyntax::new().read(&tokens).unwrap_err();
        assert_eq!((err.line, err.col), (2, 7));

        let tokens = Lexer::tokenize("A ::= x y | ;\nB ::= A;").unwrap();
        let defs = BnfSyntax::new().read(&tokens).unwrap();
        let name = |name: &str| name.to_string();
        assert_eq!(
            defs,
            vec![
                RuleDef {
                    lhs: name("A"),
                    alternatives: vec![(vec![name("x"), name("y")], 1, 7), (vec![], 1, 13)],
                },
                RuleDef {
                    lhs: name("B"),
                    alternatives: vec![(vec![name("A")], 2, 7)],
                },
            ]
        );
    }

    #[test_case("S ::= a", "expected a symbol name, `;` or `|`, found end of input" ; "unfinished rule")]
    #[test_case("S a;", "expected `::=`, found `a`" ; "missing operator")]
    #[test_case("S ::= a;\n::= b;", "expected end of input or a symbol name, found `::=`" ; "missing name")]
    fn test_syntax_error_reason(bnf: &str, reason: &str) {
        let err = Cfg::load(bnf).unwrap_err();
        assert_eq!(err.reason, reason);
    }
}
