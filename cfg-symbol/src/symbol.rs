use std::fmt;
use std::num::NonZeroU32;

/// A common grammar symbol type.
///
/// The numeric value is offset by one, so that `Option<Symbol>` takes as
/// much space as `Symbol`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// The symbol with the lowest ID.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<u32> for Symbol {
    #[inline]
    fn from(id: u32) -> Self {
        let n = id.checked_add(1).and_then(NonZeroU32::new);
        Symbol {
            n: n.expect("invalid conversion from u32::MAX to Symbol"),
        }
    }
}

impl From<Symbol> for u32 {
    #[inline]
    fn from(sym: Symbol) -> u32 {
        sym.n.get() - 1
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.usize())
    }
}

#[cfg(test)]
mod tests {
    use super::Symbol;

    #[test]
    fn test_repr() {
        let sym = Symbol::from(5u32);
        assert_eq!(sym.usize(), 5);
        assert_eq!(u32::from(sym), 5);
        assert_eq!(Symbol::first().usize(), 0);
        assert_eq!(std::mem::size_of::<Option<Symbol>>(), std::mem::size_of::<Symbol>());
    }
}
