//! Source of symbols.

use std::borrow::Cow;
use std::sync::Arc;

use crate::Symbol;

/// The name of a symbol, shared between the symbol source and its clones.
pub type SymbolName = Arc<str>;

/// A source of numeric symbols.
///
/// Every generated symbol may carry a name. Names are only used for
/// display and lookup; symbols are always compared by ID.
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<Option<SymbolName>>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self { names: vec![] }
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.names.len() as u32);
        self.names.push(name.map(|name| Arc::from(name.as_ref())));
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns the name of the given symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Returns an iterator over all symbols generated so far, in ID order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(|id| Symbol::from(id as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolSource;

    #[test]
    fn test_named_symbols() {
        let mut source = SymbolSource::new();
        let a = source.next_sym(Some("a".into()));
        let b = source.next_sym(None);
        let c = source.next_sym(None);
        assert_eq!(a.usize(), 0);
        assert_eq!(b.usize(), 1);
        assert_eq!(c.usize(), 2);
        assert_eq!(source.name_of(a), Some("a"));
        assert_eq!(source.name_of(b), None);
        assert_eq!(source.num_syms(), 3);
        assert_eq!(source.symbols().collect::<Vec<_>>(), vec![a, b, c]);
    }
}
