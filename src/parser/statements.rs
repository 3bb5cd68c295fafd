//! Statement parsing implementation
//!
//! This module handles parsing of declarations and all Lox statement types:
//!
//! - Declarations: `var x = 42;`, `fun name(params) { ... }`
//! - Control flow: `if`, `while`, `for`
//! - Output and jumps: `print`, `return`
//! - Blocks and expression statements
//!
//! # Grammar
//!
//! ```text
//! declaration ::= fun_decl | var_decl | statement
//! statement   ::= expr_stmt | for_stmt | if_stmt | print_stmt
//!               | return_stmt | while_stmt | block
//! ```
//!
//! `for` loops are desugared into a block holding the initializer and a
//! `while` loop, so the interpreter has no separate `for` node.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser, MAX_ARGUMENTS};
use std::rc::Rc;

impl Parser {
    /// Parse a declaration or, failing that, a statement
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Fun(loc)) {
            return self.parse_function_declaration();
        }

        if self.match_token(&Token::Var(loc)) {
            return self.parse_variable_declaration();
        }

        if self.check(&Token::Class(loc)) {
            return Err(ParseError {
                message: "Classes are not supported".to_string(),
                location: loc,
            });
        }

        self.parse_statement()
    }

    /// Parse function declaration: name(params) { body }
    fn parse_function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        let name = self.expect_identifier("Expect function name")?;

        self.expect_token(&Token::LParen(location), "Expect '(' after function name")?;

        let mut params = Vec::new();
        if !self.check(&Token::RParen(location)) {
            loop {
                if params.len() >= MAX_ARGUMENTS {
                    return Err(ParseError {
                        message: format!("Can't have more than {} parameters", MAX_ARGUMENTS),
                        location: self.current_location(),
                    });
                }
                params.push(self.expect_identifier("Expect parameter name")?);

                if !self.match_token(&Token::Comma(location)) {
                    break;
                }
            }
        }

        self.expect_token(&Token::RParen(location), "Expect ')' after parameters")?;
        self.expect_token(&Token::LBrace(location), "Expect '{' before function body")?;

        let body = self.nested(Self::parse_block_statements)?;

        Ok(Stmt::Function(Rc::new(FunctionDecl {
            name,
            params,
            body,
            location,
        })))
    }

    /// Parse variable declaration: name [= init];
    /// The `var` keyword has already been consumed.
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();
        let name = self.expect_identifier("Expect variable name")?;

        let init = if self.match_token(&Token::Eq(location)) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_token(
            &Token::Semicolon(location),
            "Expect ';' after variable declaration",
        )?;

        Ok(Stmt::VarDecl {
            name,
            init,
            location,
        })
    }

    /// Parse a statement; blocks and control-flow bodies nest one level deeper
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Print(loc)) {
            return self.parse_print_statement(loc);
        }

        if self.match_token(&Token::Return(loc)) {
            return self.parse_return_statement(loc);
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement();
        }

        if self.match_token(&Token::While(loc)) {
            return self.parse_while_statement();
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement();
        }

        if self.match_token(&Token::LBrace(loc)) {
            return Ok(Stmt::Block(self.parse_block_statements()?));
        }

        self.parse_expression_statement()
    }

    /// Parse block statements up to and including the closing brace.
    /// The opening brace has already been consumed.
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            statements.push(self.parse_declaration()?);
        }

        self.expect_token(&Token::RBrace(self.current_location()), "Expect '}' after block")?;
        Ok(statements)
    }

    fn parse_print_statement(&mut self, location: SourceLocation) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_token(&Token::Semicolon(location), "Expect ';' after value")?;
        Ok(Stmt::Print { expr, location })
    }

    fn parse_return_statement(&mut self, location: SourceLocation) -> Result<Stmt, ParseError> {
        let value = if self.check(&Token::Semicolon(location)) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect_token(&Token::Semicolon(location), "Expect ';' after return value")?;
        Ok(Stmt::Return { value, location })
    }

    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();
        self.expect_token(&Token::LParen(loc), "Expect '(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect_token(&Token::RParen(loc), "Expect ')' after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(&Token::Else(loc)) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();
        self.expect_token(&Token::LParen(loc), "Expect '(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect_token(&Token::RParen(loc), "Expect ')' after condition")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Parse for statement: for (init; cond; increment) body
    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();
        self.expect_token(&Token::LParen(loc), "Expect '(' after 'for'")?;

        let init = if self.match_token(&Token::Semicolon(loc)) {
            None
        } else if self.match_token(&Token::Var(loc)) {
            Some(self.parse_variable_declaration()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = if self.check(&Token::Semicolon(loc)) {
            Expr::Literal(Literal::Bool(true), self.current_location())
        } else {
            self.parse_expression()?
        };
        self.expect_token(&Token::Semicolon(loc), "Expect ';' after loop condition")?;

        let increment = if self.check(&Token::RParen(loc)) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_token(&Token::RParen(loc), "Expect ')' after for clauses")?;

        let mut body = self.parse_statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let looped = Stmt::While {
            condition,
            body: Box::new(body),
        };

        Ok(match init {
            Some(init) => Stmt::Block(vec![init, looped]),
            None => looped,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expect ';' after expression",
        )?;
        Ok(Stmt::Expression(expr))
    }
}
