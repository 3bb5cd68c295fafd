//! Expression parsing implementation
//!
//! This module handles parsing of Lox expressions by recursive descent, one
//! method per precedence level, lowest first:
//!
//! ```text
//! assignment → logic_or → logic_and → equality → comparison
//!            → term → factor → unary → call → primary
//! ```
//!
//! All binary levels are left-associative; assignment is right-associative.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser, MAX_ARGUMENTS};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_assignment)
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logical_or()?;

        let loc = self.current_location();
        if self.match_token(&Token::Eq(loc)) {
            let value = Box::new(self.nested(Self::parse_assignment)?);

            return match expr {
                Expr::Variable { name, location } => Ok(Expr::Assign {
                    name,
                    value,
                    location,
                }),
                _ => Err(ParseError {
                    message: "Invalid assignment target".to_string(),
                    location: loc,
                }),
            };
        }

        Ok(expr)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        loop {
            let loc = self.current_location();
            if !self.match_token(&Token::Or(loc)) {
                break;
            }
            let right = self.parse_logical_and()?;
            left = Expr::Logical {
                op: LogicalOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        loop {
            let loc = self.current_location();
            if !self.match_token(&Token::And(loc)) {
                break;
            }
            let right = self.parse_equality()?;
            left = Expr::Logical {
                op: LogicalOp::And,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::EqEq(loc)) {
                BinOp::Eq
            } else if self.match_token(&Token::NotEq(loc)) {
                BinOp::Ne
            } else {
                break;
            };

            let right = self.parse_comparison()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Lt(loc)) {
                BinOp::Lt
            } else if self.match_token(&Token::Le(loc)) {
                BinOp::Le
            } else if self.match_token(&Token::Gt(loc)) {
                BinOp::Gt
            } else if self.match_token(&Token::Ge(loc)) {
                BinOp::Ge
            } else {
                break;
            };

            let right = self.parse_term()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = self.parse_factor()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            let right = self.parse_unary()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        let op = if self.match_token(&Token::Bang(loc)) {
            UnOp::Not
        } else if self.match_token(&Token::Minus(loc)) {
            UnOp::Neg
        } else {
            return self.parse_call();
        };

        let operand = Box::new(self.nested(Self::parse_unary)?);
        Ok(Expr::Unary {
            op,
            operand,
            location: loc,
        })
    }

    /// Parse call chains: primary ( "(" arguments? ")" )*
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let loc = self.current_location();
            if self.match_token(&Token::LParen(loc)) {
                let args = self.parse_argument_list()?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                    location: loc,
                };
            } else if self.check(&Token::Dot(loc)) {
                return Err(ParseError {
                    message: "Property access is not supported".to_string(),
                    location: loc,
                });
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse argument list up to and including the closing parenthesis
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if !self.check(&Token::RParen(self.current_location())) {
            loop {
                if args.len() >= MAX_ARGUMENTS {
                    return Err(ParseError {
                        message: format!("Can't have more than {} arguments", MAX_ARGUMENTS),
                        location: self.current_location(),
                    });
                }
                args.push(self.parse_expression()?);

                if !self.match_token(&Token::Comma(self.current_location())) {
                    break;
                }
            }
        }

        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expect ')' after arguments",
        )?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek_token();
        let loc = token.location();

        let expr = match token {
            Token::Number(n, _) => Expr::Literal(Literal::Number(n), loc),
            Token::StringLiteral(s, _) => Expr::Literal(Literal::String(s), loc),
            Token::True(_) => Expr::Literal(Literal::Bool(true), loc),
            Token::False(_) => Expr::Literal(Literal::Bool(false), loc),
            Token::Nil(_) => Expr::Literal(Literal::Nil, loc),
            Token::Ident(name, _) => Expr::Variable {
                name,
                location: loc,
            },
            Token::LParen(_) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_token(&Token::RParen(loc), "Expect ')' after expression")?;
                return Ok(Expr::Grouping(Box::new(inner)));
            }
            Token::This(_) | Token::Super(_) => {
                return Err(ParseError {
                    message: "Classes are not supported".to_string(),
                    location: loc,
                });
            }
            _ => return Err(self.error_here("Expect expression")),
        };

        self.advance();
        Ok(expr)
    }
}

fn binary(op: BinOp, left: Expr, right: Expr, location: SourceLocation) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        location,
    }
}
