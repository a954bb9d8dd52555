//! SQL Parser implementation.
//!
//! Grammar, one function per precedence tier:
//!
//! ```text
//! select  := SELECT [DISTINCT] [projection, ...] [FROM from, ...] [WHERE expr1]
//!            [GROUP BY list] [ORDER BY sort_key, ...] [LIMIT expr4] [OFFSET expr4]
//! from    := entity (join_type entity [ON expr1])*
//! entity  := ( '(' from ')' | id ['.' id] | select ) [[AS] id]
//! expr1   := expr2 [(AND | OR | IS [NOT]) expr1]
//! expr2   := expr3 [NOT] [BETWEEN expr3 AND expr3 | IN '(' list ')' | cmp expr3]
//! expr3   := unary expr3 | expr4 ['[' expr1 ']'] ['::' expr4] [arith expr3]
//! expr4   := lit | NULL | '*' | '(' expr1 ')' | CASE ... END | id | id '.' (id | '*') | id '(' [list] ')'
//! ```
//!
//! Whitespace arrives as tokens and is consumed explicitly. `expr1` and `expr3`
//! recurse on their right operand, so connectives and arithmetic are
//! right-associative. Joins loop, so they are left-associative.

use tracing::debug;

use super::error::{ParseError, Result};
use crate::ast::{
    Atom, BinaryOp, Case, Expr, Join, JoinType, Limit, Node, Offset, Select, SortKey, SortOption,
    Subscript, TypeCast, UnaryOp, When,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// SQL Parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Parses a complete statement. Only SELECT is supported.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a single valid SELECT statement.
    pub fn parse(&mut self) -> Result<Select> {
        debug!("parsing statement");
        self.eat_space()?;

        let token = self.peek()?;
        let select = match token.kind {
            TokenKind::Keyword(Keyword::Select) => self.select()?,
            _ => return Err(self.reject(ParseError::unexpected("SELECT", token))),
        };
        self.ensure_consumed()?;
        Ok(select)
    }

    /// Parses the whole input as a single expression.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one expression.
    pub fn parse_expression(&mut self) -> Result<Node> {
        debug!("parsing expression");
        let expr = self.expr1()?;
        self.ensure_consumed()?;
        Ok(expr)
    }

    /// Parses the whole input as one FROM entry, joins included.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one from-expression.
    pub fn parse_from(&mut self) -> Result<Node> {
        debug!("parsing from-expression");
        let from = self.from()?;
        self.ensure_consumed()?;
        Ok(from)
    }

    /// Parses the whole input as a SELECT statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one SELECT.
    pub fn parse_select(&mut self) -> Result<Select> {
        debug!("parsing select");
        self.eat_space()?;
        let select = self.select()?;
        self.ensure_consumed()?;
        Ok(select)
    }

    // --- Statements ---

    /// Parses a SELECT statement.
    fn select(&mut self) -> Result<Select> {
        self.expect_keyword(Keyword::Select)?;
        let mut select = Select::default();

        self.eat_space()?;
        if self.eat_keyword(Keyword::Distinct)?.is_some() {
            select.distinct = true;
            self.eat_space()?;
        }

        let next = self.peek()?;
        if !(next.is_keyword(Keyword::From) || next.is_keyword(Keyword::Where) || next.is_eof()) {
            select.projections = Some(self.projections()?);
            self.eat_space()?;
        }

        if self.eat_keyword(Keyword::From)?.is_some() {
            let mut froms = vec![];
            loop {
                self.eat_space()?;
                froms.push(self.from()?);
                self.eat_space()?;
                if self.eat_punct(",")?.is_none() {
                    break;
                }
            }
            self.eat_space()?;
            select.from = Some(froms);
        }

        if self.eat_keyword(Keyword::Where)?.is_some() {
            select.where_clause = Some(self.expr1()?);
            self.eat_space()?;
        }

        if self.eat_keyword(Keyword::Group)?.is_some() {
            self.eat_space()?;
            self.expect_keyword(Keyword::By)?;
            select.group_by = Some(self.list()?);
        }

        if self.eat_keyword(Keyword::Order)?.is_some() {
            self.eat_space()?;
            self.expect_keyword(Keyword::By)?;
            select.order_by = Some(self.sort_keys()?);
        }

        if self.eat_keyword(Keyword::Limit)?.is_some() {
            self.eat_space()?;
            let expr = self.expr4()?;
            self.eat_space()?;
            select.limit = Some(Limit { expr });
        }

        if self.eat_keyword(Keyword::Offset)?.is_some() {
            self.eat_space()?;
            let expr = self.expr4()?;
            self.eat_space()?;
            select.offset = Some(Offset { expr });
        }

        Ok(select)
    }

    /// Parses the projection list, each entry optionally aliased with AS.
    fn projections(&mut self) -> Result<Vec<Node>> {
        let mut projections = vec![];
        loop {
            let mut expr = self.expr1()?;
            self.eat_space()?;
            if self.eat_keyword(Keyword::As)?.is_some() {
                self.eat_space()?;
                let name = self.expect_identifier()?;
                expr = expr.alias_as(name.text);
            }
            projections.push(expr);
            if self.eat_punct(",")?.is_none() {
                break;
            }
        }
        Ok(projections)
    }

    /// Parses ORDER BY entries.
    fn sort_keys(&mut self) -> Result<Vec<SortKey>> {
        let mut keys = vec![];
        loop {
            let key = self.expr1()?;
            let mut options = vec![];
            self.eat_space()?;

            if self.eat_keyword(Keyword::Asc)?.is_some() {
                options.push(SortOption::Asc);
                self.eat_space()?;
            } else if self.eat_keyword(Keyword::Desc)?.is_some() {
                options.push(SortOption::Desc);
                self.eat_space()?;
            }

            if self.eat_keyword(Keyword::Nulls)?.is_some() {
                self.eat_space()?;
                let token = self.next()?;
                match token.kind {
                    TokenKind::Keyword(Keyword::First) => options.push(SortOption::NullsFirst),
                    TokenKind::Keyword(Keyword::Last) => options.push(SortOption::NullsLast),
                    _ => return Err(self.reject(ParseError::unexpected("FIRST or LAST", token))),
                }
                self.eat_space()?;
            }

            keys.push(SortKey { key, options });
            if self.eat_punct(",")?.is_none() {
                break;
            }
        }
        Ok(keys)
    }

    // --- FROM ---

    /// Parses an entity followed by any number of joins.
    fn from(&mut self) -> Result<Node> {
        let mut entity = self.entity()?;

        loop {
            self.eat_space()?;
            let Some(join_type) = self.join_type()? else {
                break;
            };

            let right = self.entity()?;
            self.eat_space()?;
            let on = if self.eat_keyword(Keyword::On)?.is_some() {
                self.eat_space()?;
                Some(Box::new(self.expr1()?))
            } else {
                None
            };

            entity = Node::Join(Join {
                join_type,
                left: Box::new(entity),
                right: Box::new(right),
                on,
            });
        }

        Ok(entity)
    }

    /// Parses a join introducer up to and including `JOIN`, if one is next.
    fn join_type(&mut self) -> Result<Option<JoinType>> {
        let join_type = match self.peek()?.kind {
            TokenKind::Keyword(Keyword::Join) => {
                self.next()?;
                return Ok(Some(JoinType::Plain));
            }
            TokenKind::Keyword(Keyword::Inner) => JoinType::Inner,
            TokenKind::Keyword(Keyword::Cross) => JoinType::Cross,
            TokenKind::Keyword(Keyword::Left) => JoinType::Left,
            TokenKind::Keyword(Keyword::Right) => JoinType::Right,
            TokenKind::Keyword(Keyword::Full) => JoinType::FullOuter,
            _ => return Ok(None),
        };
        self.next()?;
        self.eat_space()?;

        let join_type = match join_type {
            JoinType::Left | JoinType::Right => {
                if self.eat_keyword(Keyword::Outer)?.is_some() {
                    self.eat_space()?;
                    if join_type == JoinType::Left {
                        JoinType::LeftOuter
                    } else {
                        JoinType::RightOuter
                    }
                } else {
                    join_type
                }
            }
            JoinType::FullOuter => {
                self.expect_keyword(Keyword::Outer)?;
                self.eat_space()?;
                join_type
            }
            other => other,
        };

        self.expect_keyword(Keyword::Join)?;
        Ok(Some(join_type))
    }

    /// Parses one FROM entity with its optional alias.
    fn entity(&mut self) -> Result<Node> {
        self.eat_space()?;

        let entity = if self.eat_punct("(")?.is_some() {
            let inner = self.from()?;
            self.eat_space()?;
            self.expect_punct(")")?;
            inner.parens()
        } else if self.peek()?.is_keyword(Keyword::Select) {
            Node::from(self.select()?)
        } else {
            let first = self.expect_identifier()?;
            if self.eat_punct(".")?.is_some() {
                let name = self.expect_identifier()?;
                Node::qualified(first.text, name.text)
            } else {
                Node::attr(first.text)
            }
        };

        self.eat_space()?;
        if self.eat_keyword(Keyword::As)?.is_some() {
            self.eat_space()?;
            let name = self.expect_identifier()?;
            Ok(entity.alias_as(name.text))
        } else if let Some(name) = self.eat_kind(TokenKind::Identifier)? {
            Ok(entity.alias(name.text))
        } else {
            Ok(entity)
        }
    }

    // --- Expressions ---

    /// Connectives and IS [NOT], right-associative.
    fn expr1(&mut self) -> Result<Node> {
        self.eat_space()?;
        let left = self.expr2()?;
        self.eat_space()?;

        let op = if self.eat_keyword(Keyword::And)?.is_some() {
            BinaryOp::And
        } else if self.eat_keyword(Keyword::Or)?.is_some() {
            BinaryOp::Or
        } else if self.eat_keyword(Keyword::Is)?.is_some() {
            self.eat_space()?;
            if self.eat_keyword(Keyword::Not)?.is_some() {
                BinaryOp::IsNot
            } else {
                BinaryOp::Is
            }
        } else {
            return Ok(left);
        };

        let right = self.expr1()?;
        Ok(left.binary(op, right))
    }

    /// A single predicate: BETWEEN, IN, LIKE, ILIKE or a comparison.
    fn expr2(&mut self) -> Result<Node> {
        self.eat_space()?;
        let left = self.expr3()?;
        self.eat_space()?;

        let not = self.eat_keyword(Keyword::Not)?;
        if not.is_some() {
            self.eat_space()?;
        }

        let (op, right) = if self.eat_keyword(Keyword::Between)?.is_some() {
            self.eat_space()?;
            let low = self.expr3()?;
            self.eat_space()?;
            self.expect_keyword(Keyword::And)?;
            self.eat_space()?;
            let high = self.expr3()?;
            let range = Atom::Range {
                low: Box::new(low),
                high: Box::new(high),
            };
            (BinaryOp::Between, Node::Atom(range))
        } else if self.eat_keyword(Keyword::In)?.is_some() {
            self.eat_space()?;
            self.expect_punct("(")?;
            let list = self.list()?;
            self.eat_space()?;
            self.expect_punct(")")?;
            (BinaryOp::In, Node::Atom(Atom::List(list)))
        } else if let Some(op) = self.eat_comparison()? {
            (op, self.expr3()?)
        } else if let Some(token) = not {
            return Err(self.reject(ParseError::unexpected(
                "BETWEEN, IN, LIKE, ILIKE or a comparison after NOT",
                token,
            )));
        } else {
            return Ok(left);
        };

        Ok(Node::Expr(Expr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            negated: not.is_some(),
        }))
    }

    /// Unary prefixes, subscripts, casts and arithmetic, right-associative.
    fn expr3(&mut self) -> Result<Node> {
        self.eat_space()?;

        let token = self.peek()?;
        let unary = match token.kind {
            TokenKind::Punct if token.text == "+" => Some(UnaryOp::Plus),
            TokenKind::Punct if token.text == "-" => Some(UnaryOp::Minus),
            TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
            TokenKind::Keyword(Keyword::Distinct) => Some(UnaryOp::Distinct),
            _ => None,
        };
        if let Some(op) = unary {
            self.next()?;
            self.eat_space()?;
            return Ok(Node::unary(op, self.expr3()?));
        }

        let mut atom = self.expr4()?;
        self.eat_space()?;

        if self.eat_punct("[")?.is_some() {
            let index = self.expr1()?;
            self.eat_space()?;
            self.expect_punct("]")?;
            self.eat_space()?;
            atom = Node::Subscript(Subscript {
                left: Box::new(atom),
                right: Box::new(index),
            });
        }

        if self.eat_punct("::")?.is_some() {
            self.eat_space()?;
            let data_type = self.expr4()?;
            self.eat_space()?;
            atom = Node::TypeCast(TypeCast {
                value: Box::new(atom),
                data_type: Box::new(data_type),
            });
        }

        if let Some(op) = self.eat_arithmetic()? {
            self.eat_space()?;
            return Ok(atom.binary(op, self.expr3()?));
        }

        Ok(atom)
    }

    /// Atoms: literals, references, calls, parenthesized expressions, CASE.
    fn expr4(&mut self) -> Result<Node> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Literal => Ok(Node::literal(token.text)),
            TokenKind::Keyword(Keyword::Case) => self.case(),
            TokenKind::Punct if token.text == "(" => {
                let expr = self.expr1()?;
                self.eat_space()?;
                self.expect_punct(")")?;
                Ok(expr.parens())
            }
            TokenKind::Keyword(Keyword::Null) => Ok(Node::literal("NULL")),
            TokenKind::Punct if token.text == "*" => Ok(Node::literal("*")),
            TokenKind::Identifier => {
                if self.eat_punct("(")?.is_some() {
                    let args = self.arguments()?;
                    self.expect_punct(")")?;
                    Ok(Node::function(token.text, args))
                } else if self.eat_punct(".")?.is_some() {
                    let member = self.next()?;
                    if member.kind == TokenKind::Identifier || member.is_punct("*") {
                        Ok(Node::qualified(token.text, member.text))
                    } else {
                        Err(self.reject(ParseError::unexpected("identifier or *", member)))
                    }
                } else {
                    Ok(Node::attr(token.text))
                }
            }
            _ => Err(self.reject(ParseError::unexpected("expression", token))),
        }
    }

    /// Parses the rest of a CASE expression; `CASE` itself is already consumed.
    fn case(&mut self) -> Result<Node> {
        self.expect_kind(TokenKind::Space)?;

        let subject = if self.peek()?.is_keyword(Keyword::When) {
            None
        } else {
            let subject = self.expr1()?;
            self.eat_space()?;
            Some(Box::new(subject))
        };

        let mut branches = vec![];
        loop {
            if branches.is_empty() {
                self.expect_keyword(Keyword::When)?;
            } else if self.eat_keyword(Keyword::When)?.is_none() {
                break;
            }
            let condition = self.expr1()?;
            self.eat_space()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.expr1()?;
            self.eat_space()?;
            branches.push(When { condition, result });
        }

        let otherwise = if self.eat_keyword(Keyword::Else)?.is_some() {
            let result = self.expr1()?;
            self.eat_space()?;
            Some(Box::new(result))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;
        Ok(Node::Atom(Atom::Case(Case {
            subject,
            branches,
            otherwise,
        })))
    }

    /// Parses function arguments; unlike other lists these may be empty.
    fn arguments(&mut self) -> Result<Vec<Node>> {
        self.eat_space()?;
        if self.peek()?.is_punct(")") {
            return Ok(vec![]);
        }
        self.list()
    }

    /// Parses a comma-separated list of at least one expression.
    fn list(&mut self) -> Result<Vec<Node>> {
        self.eat_space()?;
        let mut items = vec![];
        loop {
            items.push(self.expr1()?);
            self.eat_space()?;
            if self.eat_punct(",")?.is_some() {
                self.eat_space()?;
            } else {
                break;
            }
        }
        Ok(items)
    }

    // --- Helper methods ---

    fn next(&mut self) -> Result<Token> {
        Ok(self.lexer.next()?)
    }

    fn peek(&mut self) -> Result<Token> {
        Ok(self.lexer.peek()?)
    }

    /// Consumes the next token if `pred` accepts it.
    fn eat_if(&mut self, pred: impl FnOnce(&Token) -> bool) -> Result<Option<Token>> {
        let token = self.next()?;
        if pred(&token) {
            Ok(Some(token))
        } else {
            self.lexer.push(token);
            Ok(None)
        }
    }

    fn eat_space(&mut self) -> Result<()> {
        self.eat_if(Token::is_space)?;
        Ok(())
    }

    fn eat_kind(&mut self, kind: TokenKind) -> Result<Option<Token>> {
        self.eat_if(|t| t.kind == kind)
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> Result<Option<Token>> {
        self.eat_if(|t| t.is_keyword(keyword))
    }

    fn eat_punct(&mut self, punct: &str) -> Result<Option<Token>> {
        self.eat_if(|t| t.is_punct(punct))
    }

    /// Consumes a comparison operator, LIKE or ILIKE.
    fn eat_comparison(&mut self) -> Result<Option<BinaryOp>> {
        let token = self.next()?;
        let op = match token.kind {
            TokenKind::Keyword(Keyword::Like) => Some(BinaryOp::Like),
            TokenKind::Keyword(Keyword::Ilike) => Some(BinaryOp::Ilike),
            TokenKind::Punct => BinaryOp::from_punct(&token.text).filter(BinaryOp::is_comparison),
            _ => None,
        };
        if op.is_none() {
            self.lexer.push(token);
        }
        Ok(op)
    }

    /// Consumes `+ - * /`.
    fn eat_arithmetic(&mut self) -> Result<Option<BinaryOp>> {
        let token = self.next()?;
        let op = match token.kind {
            TokenKind::Punct => BinaryOp::from_punct(&token.text).filter(BinaryOp::is_arithmetic),
            _ => None,
        };
        if op.is_none() {
            self.lexer.push(token);
        }
        Ok(op)
    }

    fn expect_kind(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.reject(ParseError::unexpected(kind.describe(), token)))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token> {
        let token = self.next()?;
        if token.is_keyword(keyword) {
            Ok(token)
        } else {
            let expected = keyword.as_str().to_ascii_uppercase();
            Err(self.reject(ParseError::unexpected(expected, token)))
        }
    }

    fn expect_punct(&mut self, punct: &str) -> Result<Token> {
        let token = self.next()?;
        if token.is_punct(punct) {
            Ok(token)
        } else {
            Err(self.reject(ParseError::unexpected(format!("{punct:?}"), token)))
        }
    }

    fn expect_identifier(&mut self) -> Result<Token> {
        self.expect_kind(TokenKind::Identifier)
    }

    /// Fails unless only whitespace remains.
    fn ensure_consumed(&mut self) -> Result<()> {
        self.eat_space()?;
        let token = self.next()?;
        if token.is_eof() {
            Ok(())
        } else {
            Err(self.reject(ParseError::TrailingTokens { found: token }))
        }
    }

    #[allow(clippy::unused_self)]
    fn reject(&self, err: ParseError) -> ParseError {
        debug!(error = %err, position = err.position(), "rejecting input");
        err
    }
}
