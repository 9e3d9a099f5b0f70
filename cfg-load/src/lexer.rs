use std::str::Chars;

use crate::LoadError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    BnfOp,
    Semicolon,
    Pipe,
}

/// A token along with the line and column where it starts.
pub(crate) type Spanned = (Token, u32, u32);

pub(crate) struct Lexer<'a> {
    chars: Chars<'a>,
    line_no: u32,
    col_no: u32,
}

impl<'a> Lexer<'a> {
    pub(crate) fn tokenize(bnf: &'a str) -> Result<Vec<Spanned>, LoadError> {
        let mut lexer = Lexer {
            chars: bnf.chars(),
            line_no: 1,
            col_no: 1,
        };
        let mut result = vec![];
        while let Some(ch) = lexer.peek() {
            let (line_no, col_no) = (lexer.line_no, lexer.col_no);
            if let Some(token) = lexer.eat(ch)? {
                result.push((token, line_no, col_no));
            }
        }
        Ok(result)
    }

    /// Consumes one token, or a run of whitespace or a comment, which yield
    /// nothing.
    fn eat(&mut self, ch: char) -> Result<Option<Token>, LoadError> {
        let token = match ch {
            ch if is_ident_char(ch) => {
                let substring = self.chars.as_str();
                while self.peek().map_or(false, is_ident_char) {
                    self.advance();
                }
                let len = substring.len() - self.chars.as_str().len();
                Token::Ident(substring[..len].to_string())
            }
            '"' => Token::Ident(self.string()?),
            ':' if self.chars.as_str().starts_with("::=") => {
                for _ in 0..3 {
                    self.advance();
                }
                Token::BnfOp
            }
            ';' => {
                self.advance();
                Token::Semicolon
            }
            '|' => {
                self.advance();
                Token::Pipe
            }
            '/' if self.chars.as_str().starts_with("//") => {
                while self.peek().map_or(false, |ch| ch != '\n') {
                    self.advance();
                }
                return Ok(None);
            }
            ch if ch.is_whitespace() => {
                self.advance();
                return Ok(None);
            }
            other => return Err(self.error(format!("unexpected character `{}`", other))),
        };
        Ok(Some(token))
    }

    /// A quoted symbol name. Backslash escapes the next character.
    fn string(&mut self) -> Result<String, LoadError> {
        let (line, col) = (self.line_no, self.col_no);
        let mut result = String::new();
        self.advance();
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return Ok(result);
                }
                Some('\\') => {
                    self.advance();
                    if let Some(ch) = self.peek() {
                        result.push(ch);
                        self.advance();
                    }
                }
                Some(other) => {
                    result.push(other);
                    self.advance();
                }
                None => {
                    return Err(LoadError {
                        reason: "unterminated string".to_string(),
                        line,
                        col,
                        grammar_error: None,
                    })
                }
            }
        }
    }

    fn advance(&mut self) {
        match self.chars.next() {
            Some('\n') => {
                self.line_no += 1;
                self.col_no = 1;
            }
            Some(_) => {
                self.col_no += 1;
            }
            None => {}
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.as_str().chars().next()
    }

    fn error(&self, reason: String) -> LoadError {
        LoadError {
            reason,
            line: self.line_no,
            col: self.col_no,
            grammar_error: None,
        }
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '\''
}
