//! Lexer (tokenizer) for Lox source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! `//` comments run to the end of the line and are discarded along with
//! whitespace.

use super::ast::SourceLocation;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(f64, SourceLocation),
    StringLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    And(SourceLocation),
    Class(SourceLocation),
    Else(SourceLocation),
    False(SourceLocation),
    Fun(SourceLocation),
    For(SourceLocation),
    If(SourceLocation),
    Nil(SourceLocation),
    Or(SourceLocation),
    Print(SourceLocation),
    Return(SourceLocation),
    Super(SourceLocation),
    This(SourceLocation),
    True(SourceLocation),
    Var(SourceLocation),
    While(SourceLocation),

    // Arithmetic
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // Comparison
    EqEq(SourceLocation),  // ==
    NotEq(SourceLocation), // !=
    Lt(SourceLocation),    // <
    Le(SourceLocation),    // <=
    Gt(SourceLocation),    // >
    Ge(SourceLocation),    // >=

    Bang(SourceLocation), // !
    Eq(SourceLocation),   // =

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,
    Dot(SourceLocation),       // .

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::And(loc)
            | Token::Class(loc)
            | Token::Else(loc)
            | Token::False(loc)
            | Token::Fun(loc)
            | Token::For(loc)
            | Token::If(loc)
            | Token::Nil(loc)
            | Token::Or(loc)
            | Token::Print(loc)
            | Token::Return(loc)
            | Token::Super(loc)
            | Token::This(loc)
            | Token::True(loc)
            | Token::Var(loc)
            | Token::While(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::Bang(loc)
            | Token::Eq(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Dot(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::StringLiteral(s, _) => write!(f, "string \"{}\"", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::And(_) => write!(f, "'and'"),
            Token::Class(_) => write!(f, "'class'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::False(_) => write!(f, "'false'"),
            Token::Fun(_) => write!(f, "'fun'"),
            Token::For(_) => write!(f, "'for'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Nil(_) => write!(f, "'nil'"),
            Token::Or(_) => write!(f, "'or'"),
            Token::Print(_) => write!(f, "'print'"),
            Token::Return(_) => write!(f, "'return'"),
            Token::Super(_) => write!(f, "'super'"),
            Token::This(_) => write!(f, "'this'"),
            Token::True(_) => write!(f, "'true'"),
            Token::Var(_) => write!(f, "'var'"),
            Token::While(_) => write!(f, "'while'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::Bang(_) => write!(f, "'!'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer for Lox source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            location: loc,
        })?;

        match ch {
            '"' => self.string_literal(loc),
            '0'..='9' => Ok(self.number_literal(ch, loc)),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, loc)),

            '=' => Ok(self.one_or_two('=', Token::EqEq(loc), Token::Eq(loc))),
            '!' => Ok(self.one_or_two('=', Token::NotEq(loc), Token::Bang(loc))),
            '<' => Ok(self.one_or_two('=', Token::Le(loc), Token::Lt(loc))),
            '>' => Ok(self.one_or_two('=', Token::Ge(loc), Token::Gt(loc))),

            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),
            '.' => Ok(Token::Dot(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Consume `next` if it follows, choosing between the two-character and
    /// one-character token.
    fn one_or_two(&mut self, next: char, two: Token, one: Token) -> Token {
        if self.peek() == Some(next) {
            self.advance();
            two
        } else {
            one
        }
    }

    /// Parse string literal. Lox strings have no escapes and may span lines.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Ok(Token::StringLiteral(string, loc));
            }
            string.push(ch);
        }

        Err(LexError {
            message: "Unterminated string".to_string(),
            location: loc,
        })
    }

    /// Parse number literal: digits with an optional fractional part
    fn number_literal(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut text = String::from(first);

        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            text.push(ch);
            self.advance();
        }

        // A trailing '.' without digits is left for the parser
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
                text.push(ch);
                self.advance();
            }
        }

        // Only ASCII digits and at most one '.' reach here, so parsing cannot fail
        Token::Number(text.parse().unwrap_or_default(), loc)
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut ident = String::from(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "and" => Token::And(loc),
            "class" => Token::Class(loc),
            "else" => Token::Else(loc),
            "false" => Token::False(loc),
            "fun" => Token::Fun(loc),
            "for" => Token::For(loc),
            "if" => Token::If(loc),
            "nil" => Token::Nil(loc),
            "or" => Token::Or(loc),
            "print" => Token::Print(loc),
            "return" => Token::Return(loc),
            "super" => Token::Super(loc),
            "this" => Token::This(loc),
            "true" => Token::True(loc),
            "var" => Token::Var(loc),
            "while" => Token::While(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    #[test]
    fn test_print_statement() {
        let tokens = lex("print \"Hello World!\";");
        assert_eq!(tokens.len(), 4);
        assert!(matches!(tokens[0], Token::Print(_)));
        assert!(matches!(&tokens[1], Token::StringLiteral(s, _) if s == "Hello World!"));
        assert!(matches!(tokens[2], Token::Semicolon(_)));
        assert!(matches!(tokens[3], Token::Eof(_)));
    }

    #[test]
    fn test_two_character_operators() {
        let tokens = lex("<= >= == != < > = !");
        assert!(matches!(tokens[0], Token::Le(_)));
        assert!(matches!(tokens[1], Token::Ge(_)));
        assert!(matches!(tokens[2], Token::EqEq(_)));
        assert!(matches!(tokens[3], Token::NotEq(_)));
        assert!(matches!(tokens[4], Token::Lt(_)));
        assert!(matches!(tokens[5], Token::Gt(_)));
        assert!(matches!(tokens[6], Token::Eq(_)));
        assert!(matches!(tokens[7], Token::Bang(_)));
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("12 3.5 7.");
        assert!(matches!(tokens[0], Token::Number(n, _) if n == 12.0));
        assert!(matches!(tokens[1], Token::Number(n, _) if n == 3.5));
        assert!(matches!(tokens[2], Token::Number(n, _) if n == 7.0));
        assert!(matches!(tokens[3], Token::Dot(_)));
    }

    #[test]
    fn test_comments_and_locations() {
        let tokens = lex("// leading comment\n  var x = 1; // trailing\nx");
        assert!(matches!(tokens[0], Token::Var(loc) if loc == SourceLocation::new(2, 3)));
        assert!(matches!(&tokens[5], Token::Ident(name, loc) if name == "x" && loc.line == 3));
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let tokens = lex("\"a\nb\" nil");
        assert!(matches!(&tokens[0], Token::StringLiteral(s, _) if s == "a\nb"));
        assert!(matches!(tokens[1], Token::Nil(loc) if loc.line == 2));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("print \"oops;").tokenize().unwrap_err();
        assert_eq!(err.message, "Unterminated string");
        assert_eq!(err.location, SourceLocation::new(1, 7));
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("var a = 1 % 2;").tokenize().unwrap_err();
        assert!(err.to_string().contains("Unexpected character: '%'"));
    }
}
