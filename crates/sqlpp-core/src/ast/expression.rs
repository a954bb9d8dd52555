//! Expression AST types.

use super::{Join, Select};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Connectives
    And,
    Or,
    Is,
    IsNot,

    // Predicates
    Between,
    In,
    Like,
    Ilike,

    // Comparison
    Eq,
    /// `<>`
    NotEq,
    /// `!=`
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Maps comparison and arithmetic punctuation to its operator.
    #[must_use]
    pub fn from_punct(punct: &str) -> Option<Self> {
        match punct {
            "=" => Some(Self::Eq),
            "<>" => Some(Self::NotEq),
            "!=" => Some(Self::BangEq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::LtEq),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::GtEq),
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns true for `AND` and `OR`.
    #[must_use]
    pub const fn is_connective(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns true for comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::BangEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Returns true for `+ - * /`.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// Logical NOT
    Not,
    /// DISTINCT, as in `count(DISTINCT id)`
    Distinct,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "NOT",
            Self::Distinct => "DISTINCT",
        }
    }

    /// Returns true if the operator is a word and needs a following space.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Not | Self::Distinct)
    }
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    /// Left operand.
    pub left: Box<Node>,
    /// Operator.
    pub op: BinaryOp,
    /// Right operand.
    pub right: Box<Node>,
    /// A `NOT` preceded the predicate, as in `x NOT IN (...)`.
    pub negated: bool,
}

/// A prefix operator applied to one operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unary {
    /// Operator.
    pub op: UnaryOp,
    /// Operand.
    pub expr: Box<Node>,
}

/// One `WHEN condition THEN result` branch of a CASE expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct When {
    /// The condition, or the value compared against the subject.
    pub condition: Node,
    /// The result.
    pub result: Node,
}

/// A CASE expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    /// The expression after `CASE`, if any.
    pub subject: Option<Box<Node>>,
    /// WHEN/THEN branches. Never empty for parsed input.
    pub branches: Vec<When>,
    /// The ELSE result.
    pub otherwise: Option<Box<Node>>,
}

/// Leaf-level expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Atom {
    /// A number, string, `NULL` or `*`, kept as written.
    Literal(String),

    /// An identifier, optionally qualified (`t.col`, `t.*`).
    Attribute {
        /// Qualifier before the dot.
        table: Option<String>,
        /// Column, table, or `*`.
        name: String,
    },

    /// A function call.
    Function {
        /// The function name.
        name: String,
        /// The arguments, in order.
        args: Vec<Node>,
    },

    /// The bounds of a BETWEEN predicate.
    Range {
        /// Lower bound.
        low: Box<Node>,
        /// Upper bound.
        high: Box<Node>,
    },

    /// The parenthesized values of an IN predicate.
    List(Vec<Node>),

    /// CASE ... END.
    Case(Case),
}

/// Explicit aliasing, `expr AS name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct As {
    /// The alias.
    pub name: String,
    /// The aliased expression or entity.
    pub expr: Box<Node>,
}

/// Implicit aliasing, `expr name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias {
    /// The alias.
    pub name: String,
    /// The aliased entity.
    pub expr: Box<Node>,
}

/// Element access, `left[right]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscript {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// A cast, `value::type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCast {
    pub value: Box<Node>,
    pub data_type: Box<Node>,
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A select statement, reached through a FROM sub-select.
    Select(Box<Select>),
    /// A binary operation.
    Expr(Expr),
    /// A prefix operation.
    Unary(Unary),
    /// A leaf expression.
    Atom(Atom),
    /// An explicitly parenthesized expression, from-expression or sub-select.
    Parens(Box<Node>),
    /// `expr AS name`.
    As(As),
    /// `expr name`.
    Alias(Alias),
    /// A join of two FROM entities.
    Join(Join),
    /// `left[right]`.
    Subscript(Subscript),
    /// `value::type`.
    TypeCast(TypeCast),
}

impl Node {
    /// Creates a literal, kept verbatim.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Atom(Atom::Literal(text.into()))
    }

    /// Creates an unqualified identifier reference.
    #[must_use]
    pub fn attr(name: impl Into<String>) -> Self {
        Self::Atom(Atom::Attribute {
            table: None,
            name: name.into(),
        })
    }

    /// Creates a qualified reference, `table.name`.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Atom(Atom::Attribute {
            table: Some(table.into()),
            name: name.into(),
        })
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Atom(Atom::Function {
            name: name.into(),
            args,
        })
    }

    /// Creates a binary operation without a leading `NOT`.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Expr(Expr {
            left: Box::new(self),
            op,
            right: Box::new(right),
            negated: false,
        })
    }

    /// Creates a unary operation.
    #[must_use]
    pub fn unary(op: UnaryOp, expr: Self) -> Self {
        Self::Unary(Unary {
            op,
            expr: Box::new(expr),
        })
    }

    /// Wraps the node in parentheses.
    #[must_use]
    pub fn parens(self) -> Self {
        Self::Parens(Box::new(self))
    }

    /// Aliases the node with `AS`.
    #[must_use]
    pub fn alias_as(self, name: impl Into<String>) -> Self {
        Self::As(As {
            name: name.into(),
            expr: Box::new(self),
        })
    }

    /// Aliases the node without `AS`.
    #[must_use]
    pub fn alias(self, name: impl Into<String>) -> Self {
        Self::Alias(Alias {
            name: name.into(),
            expr: Box::new(self),
        })
    }

    /// Returns the atom if this node is one.
    #[must_use]
    pub const fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// Returns the binary operation if this node is one.
    #[must_use]
    pub const fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns the join if this node is one.
    #[must_use]
    pub const fn as_join(&self) -> Option<&Join> {
        match self {
            Self::Join(join) => Some(join),
            _ => None,
        }
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Self::Atom(atom)
    }
}

impl From<Select> for Node {
    fn from(select: Select) -> Self {
        Self::Select(Box::new(select))
    }
}

impl From<Join> for Node {
    fn from(join: Join) -> Self {
        Self::Join(join)
    }
}
