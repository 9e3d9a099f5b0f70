//! Definitions of the context-free grammar type and its rules.

use std::collections::BTreeMap;
use std::fmt::Write;

use cfg_symbol::SymbolName;

use crate::builder::CfgBuilder;
use crate::error::GrammarError;
use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;

/// Name of the empty marker, which stands for an epsilon production.
pub const EPSILON: &str = "ε";
/// Name of the end-of-input marker.
pub const END_OF_INPUT: &str = "$";

/// Context-free grammar type.
///
/// Every grammar owns its symbols. Two of them are reserved: the empty
/// marker and the end-of-input marker, which may appear in FIRST and
/// FOLLOW sets and in parse trees, but never in rules.
#[derive(Clone, Debug)]
pub struct Cfg {
    /// The symbol source, which also holds symbol names.
    sym_source: SymbolSource,
    /// Kind of every symbol, indexed by symbol ID.
    kinds: Vec<SymbolKind>,
    names: BTreeMap<SymbolName, Symbol>,
    terminals: SymbolBitSet,
    /// The array of rules.
    rules: Vec<CfgRule>,
    occurences: OccurenceMap,
    start: Symbol,
    epsilon: Symbol,
    end_of_input: Symbol,
}

/// Standard grammar rule representation.
///
/// An epsilon production has an empty `rhs`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Vec<Symbol>,
}

/// Identifies a rule by its position in the grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RuleId(u32);

/// The kind of a grammar symbol.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SymbolKind {
    /// Appears in input strings.
    Terminal,
    /// Expands through rules.
    Nonterminal,
    /// The empty marker, `ε`.
    Empty,
    /// The end-of-input marker, `$`.
    EndOfInput,
}

impl RuleId {
    /// Creates an ID for the rule at the given position.
    pub fn new(index: usize) -> Self {
        RuleId(index as u32)
    }

    /// Returns the rule's position.
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: impl AsRef<[Symbol]>) -> Self {
        CfgRule {
            lhs,
            rhs: rhs.as_ref().to_vec(),
        }
    }

    /// Whether this is an epsilon production.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl Cfg {
    /// Starts building a grammar with explicitly declared symbols.
    pub fn builder() -> CfgBuilder {
        CfgBuilder::new()
    }

    /// Builds a grammar from a list of rules, inferring the kind of every
    /// symbol. Left-hand symbols are nonterminals. Every other symbol on a
    /// right-hand side, except for `ε`, is a terminal.
    pub fn from_rules<I, L, R, S>(start: &str, rules: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (L, R)>,
        L: AsRef<str>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CfgBuilder::inferred();
        builder.start(start);
        for (lhs, rhs) in rules {
            builder.rule(lhs.as_ref()).rhs(rhs);
        }
        builder.build()
    }

    /// Creates a grammar from validated parts. Reserved markers come first
    /// in the symbol space, then nonterminals, then terminals.
    pub(crate) fn from_parts(
        nonterminals: &[String],
        terminals: &[String],
        start: &str,
        named_rules: &[(String, Vec<String>)],
    ) -> Self {
        let mut sym_source = SymbolSource::new();
        let mut kinds = vec![];
        let mut names = BTreeMap::new();
        let mut declare = |name: &str, kind: SymbolKind| {
            let sym = sym_source.next_sym(Some(name.into()));
            kinds.push(kind);
            names.insert(SymbolName::from(name), sym);
            sym
        };
        let epsilon = declare(EPSILON, SymbolKind::Empty);
        let end_of_input = declare(END_OF_INPUT, SymbolKind::EndOfInput);
        for name in nonterminals {
            declare(name, SymbolKind::Nonterminal);
        }
        for name in terminals {
            declare(name, SymbolKind::Terminal);
        }

        let mut terminal_set = SymbolBitSet::from_elem(kinds.len(), false);
        for (id, &kind) in kinds.iter().enumerate() {
            if kind == SymbolKind::Terminal {
                terminal_set.set(Symbol::from(id as u32), true);
            }
        }

        let rules: Vec<CfgRule> = named_rules
            .iter()
            .map(|(lhs, rhs)| CfgRule {
                lhs: names[lhs.as_str()],
                rhs: rhs
                    .iter()
                    .filter(|name| name.as_str() != EPSILON)
                    .map(|name| names[name.as_str()])
                    .collect(),
            })
            .collect();
        let occurences = OccurenceMap::from_rules(rules.iter());
        let start = names[start];

        Cfg {
            sym_source,
            kinds,
            names,
            terminals: terminal_set,
            rules,
            occurences,
            start,
            epsilon,
            end_of_input,
        }
    }

    /// Returns the start symbol.
    pub fn start_sym(&self) -> Symbol {
        self.start
    }

    /// Returns the empty marker.
    pub fn epsilon(&self) -> Symbol {
        self.epsilon
    }

    /// Returns the end-of-input marker.
    pub fn end_of_input(&self) -> Symbol {
        self.end_of_input
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &CfgRule> {
        self.rules.iter()
    }

    /// Returns an iterator over grammar rules along with their IDs.
    pub fn rules_with_ids(&self) -> impl Iterator<Item = (RuleId, &CfgRule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleId::new(i), rule))
    }

    /// Returns the rule with the given ID.
    pub fn rule(&self, id: RuleId) -> &CfgRule {
        &self.rules[id.usize()]
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns all alternatives of the given nonterminal, in grammar order.
    pub fn rules_for(&self, lhs: Symbol) -> impl Iterator<Item = (RuleId, &CfgRule)> {
        self.occurences
            .get(lhs)
            .lhs()
            .iter()
            .map(move |&id| (id, &self.rules[id.usize()]))
    }

    /// Returns the symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use, including both markers.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the kind of the given symbol in O(1).
    pub fn kind(&self, sym: Symbol) -> SymbolKind {
        self.kinds[sym.usize()]
    }

    /// Whether the given symbol is a terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals[sym]
    }

    /// Whether the given symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.kind(sym) == SymbolKind::Nonterminal
    }

    /// Returns the set of terminal symbols.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Iterates over terminals in ID order.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals.iter()
    }

    /// Iterates over nonterminals in ID order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.sym_source
            .symbols()
            .filter(move |&sym| self.is_nonterminal(sym))
    }

    /// Returns the name of the given symbol.
    pub fn name(&self, sym: Symbol) -> &str {
        self.sym_source.name_of(sym).unwrap_or("?")
    }

    /// Looks up a symbol by its name.
    pub fn sym(&self, name: &str) -> Option<Symbol> {
        self.names.get(name).copied()
    }

    /// If **any** symbol on the RHS has the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_any(&self, property: &mut SymbolBitSet) {
        let mut work_stack: Vec<Symbol> = property.iter().collect();
        while let Some(work_sym) = work_stack.pop() {
            for &rule_id in self.occurences.get(work_sym).rhs() {
                let rule = &self.rules[rule_id.usize()];
                if !property[rule.lhs] {
                    property.set(rule.lhs, true);
                    work_stack.push(rule.lhs);
                }
            }
        }
    }

    /// Renders a single rule as `lhs ::= rhs;`.
    pub fn stringify_rule(&self, rule: &CfgRule) -> String {
        let rhs = if rule.rhs.is_empty() {
            EPSILON.to_string()
        } else {
            rule.rhs
                .iter()
                .map(|&sym| self.name(sym))
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!("{} ::= {};", self.name(rule.lhs), rhs)
    }

    /// Renders the grammar in BNF, one rule per line.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for rule in self.rules() {
            writeln!(&mut result, "{}", self.stringify_rule(rule)).expect("writing to String failed");
        }
        result
    }
}
