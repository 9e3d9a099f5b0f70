//! Table-driven LL(1) parsing.

use cfg_classify_ll::LlParseTable;
use cfg_grammar::{Cfg, SymbolKind};
use cfg_symbol::Symbol;
use log::{debug, trace};

use crate::error::SyntaxError;
use crate::tree::{NodeId, ParseTree};

/// Predictive parser driven by an LL(1) parse table.
///
/// The parser borrows the table and keeps no state between calls, so one
/// table may serve any number of parsers, on any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct LlParser<'t, 'g> {
    table: &'t LlParseTable<'g>,
}

/// State of a single parse.
struct Run<'g> {
    grammar: &'g Cfg,
    input: Vec<Symbol>,
    position: usize,
    /// Pending symbols, top last.
    stack: Vec<Symbol>,
    tree: ParseTree,
    /// The tree node matching the top of the stack.
    cursor: Option<NodeId>,
}

impl<'t, 'g> LlParser<'t, 'g> {
    /// Creates a parser for the table's grammar.
    pub fn new(table: &'t LlParseTable<'g>) -> Self {
        LlParser { table }
    }

    /// Parses a string of terminals, given by name.
    ///
    /// Names that are not terminals of the grammar are rejected before
    /// parsing begins.
    pub fn parse_names<S: AsRef<str>>(&self, input: &[S]) -> Result<ParseTree, SyntaxError> {
        let grammar = self.table.grammar();
        let mut syms = Vec::with_capacity(input.len());
        for (position, name) in input.iter().enumerate() {
            let name = name.as_ref();
            match grammar.sym(name) {
                Some(sym) if grammar.is_terminal(sym) => syms.push(sym),
                found => {
                    return Err(SyntaxError {
                        position,
                        found,
                        expected: vec![],
                        stack: vec![grammar.start_sym()],
                        reason: format!("`{}` is not a terminal", name),
                    })
                }
            }
        }
        self.parse(syms)
    }

    /// Parses a string of terminals. On success, the leaves of the
    /// returned tree are the input, apart from empty markers.
    pub fn parse<I>(&self, input: I) -> Result<ParseTree, SyntaxError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let grammar = self.table.grammar();
        let start = grammar.start_sym();
        let tree = ParseTree::new(start, grammar.epsilon());
        let mut run = Run {
            grammar,
            input: input.into_iter().collect(),
            position: 0,
            stack: vec![start],
            cursor: Some(tree.root()),
            tree,
        };
        if let Some(position) = run.input.iter().position(|&sym| !grammar.is_terminal(sym)) {
            run.position = position;
            let reason = format!("`{}` is not a terminal", grammar.name(run.input[position]));
            return Err(run.error(vec![], reason));
        }

        loop {
            let lookahead = run.lookahead();
            let top = match run.stack.last() {
                Some(&top) => top,
                None if lookahead.is_none() => break,
                None => {
                    let reason = format!("expected end of input, found {}", run.describe(lookahead));
                    return Err(run.error(vec![grammar.end_of_input()], reason));
                }
            };
            trace!(
                "top {}, lookahead {}, position {}",
                grammar.name(top),
                run.describe(lookahead),
                run.position
            );
            match grammar.kind(top) {
                SymbolKind::Terminal => {
                    if lookahead != Some(top) {
                        let reason = format!(
                            "expected `{}`, found {}",
                            grammar.name(top),
                            run.describe(lookahead)
                        );
                        return Err(run.error(vec![top], reason));
                    }
                    run.stack.pop();
                    run.position += 1;
                    run.advance();
                }
                SymbolKind::Empty => {
                    run.stack.pop();
                    run.advance();
                }
                SymbolKind::Nonterminal => {
                    let terminal = lookahead.unwrap_or_else(|| grammar.end_of_input());
                    let rule = match self.table.get_rule(top, terminal) {
                        Some(rule) => rule,
                        None => {
                            let expected = self.table.expected(top);
                            let reason = format!(
                                "no rule for `{}` on {}; expected one of {}",
                                grammar.name(top),
                                run.describe(lookahead),
                                names(grammar, &expected)
                            );
                            return Err(run.error(expected, reason));
                        }
                    };
                    trace!("predict {}", grammar.stringify_rule(rule));
                    run.stack.pop();
                    let epsilon = [grammar.epsilon()];
                    let children = if rule.is_empty() {
                        &epsilon[..]
                    } else {
                        &rule.rhs[..]
                    };
                    run.stack.extend(children.iter().rev().copied());
                    let node = run.cursor.expect("parse tree out of step with the stack");
                    run.cursor = Some(run.tree.attach_children(node, children));
                }
                SymbolKind::EndOfInput => {
                    unreachable!("the end-of-input marker is never pushed")
                }
            }
        }
        debug!(
            "parsed {} terminals into a tree of {} nodes",
            run.input.len(),
            run.tree.len()
        );
        Ok(run.tree)
    }
}

impl<'g> Run<'g> {
    fn lookahead(&self) -> Option<Symbol> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.cursor = self
            .cursor
            .and_then(|node| self.tree.next_in_preorder(node));
    }

    fn describe(&self, lookahead: Option<Symbol>) -> String {
        match lookahead {
            Some(sym) => format!("`{}`", self.grammar.name(sym)),
            None => "end of input".to_string(),
        }
    }

    fn error(&self, expected: Vec<Symbol>, reason: String) -> SyntaxError {
        SyntaxError {
            position: self.position,
            found: self.lookahead(),
            expected,
            stack: self.stack.clone(),
            reason,
        }
    }
}

fn names(grammar: &Cfg, syms: &[Symbol]) -> String {
    syms.iter()
        .map(|&sym| format!("`{}`", grammar.name(sym)))
        .collect::<Vec<_>>()
        .join(", ")
}
