use cfg_classify_ll::LlParseTable;
use cfg_grammar::Cfg;

use crate::error::ParseError;
use crate::parser::LlParser;
use crate::tree::ParseTree;

/// Extension trait for parsing without building a table by hand.
pub trait CfgParseExt {
    /// Builds the LL(1) table, then parses the given terminal names.
    ///
    /// Prefer [`LlParser`] when parsing many inputs with one grammar.
    fn parse_names<S: AsRef<str>>(&self, input: &[S]) -> Result<ParseTree, ParseError>;
}

impl CfgParseExt for Cfg {
    fn parse_names<S: AsRef<str>>(&self, input: &[S]) -> Result<ParseTree, ParseError> {
        let table = LlParseTable::new(self)?;
        let tree = LlParser::new(&table).parse_names(input)?;
        Ok(tree)
    }
}
