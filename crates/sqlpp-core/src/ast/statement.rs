//! SQL statement AST types.

use super::expression::Node;

/// Join type, as written in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinType {
    /// Bare `JOIN`.
    Plain,
    /// `INNER JOIN`.
    Inner,
    /// `CROSS JOIN`.
    Cross,
    /// `LEFT JOIN`.
    Left,
    /// `LEFT OUTER JOIN`.
    LeftOuter,
    /// `RIGHT JOIN`.
    Right,
    /// `RIGHT OUTER JOIN`.
    RightOuter,
    /// `FULL OUTER JOIN`.
    FullOuter,
}

impl JoinType {
    /// Returns the lower-case type text preceding `JOIN`. Empty for a bare `JOIN`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Inner => "inner",
            Self::Cross => "cross",
            Self::Left => "left",
            Self::LeftOuter => "left outer",
            Self::Right => "right",
            Self::RightOuter => "right outer",
            Self::FullOuter => "full outer",
        }
    }

    /// Returns true for joins that keep unmatched rows.
    #[must_use]
    pub const fn is_outer(&self) -> bool {
        matches!(
            self,
            Self::Left | Self::LeftOuter | Self::Right | Self::RightOuter | Self::FullOuter
        )
    }

    /// Returns true if both types describe the same join, treating `LEFT` as
    /// `LEFT OUTER`, `RIGHT` as `RIGHT OUTER`, and bare `JOIN` as `INNER JOIN`.
    #[must_use]
    pub const fn same_semantics(&self, other: &Self) -> bool {
        matches!(
            (self.canonical(), other.canonical()),
            (Self::Inner, Self::Inner)
                | (Self::Cross, Self::Cross)
                | (Self::LeftOuter, Self::LeftOuter)
                | (Self::RightOuter, Self::RightOuter)
                | (Self::FullOuter, Self::FullOuter)
        )
    }

    const fn canonical(self) -> Self {
        match self {
            Self::Plain => Self::Inner,
            Self::Left => Self::LeftOuter,
            Self::Right => Self::RightOuter,
            other => other,
        }
    }
}

/// A binary join of two FROM entities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    /// The type of join.
    pub join_type: JoinType,
    /// Everything joined so far.
    pub left: Box<Node>,
    /// The joined entity.
    pub right: Box<Node>,
    /// The join condition. Absent for CROSS JOIN or when omitted.
    pub on: Option<Box<Node>>,
}

/// A direction or null-placement modifier on an ORDER BY entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOption {
    Asc,
    Desc,
    NullsFirst,
    NullsLast,
}

impl SortOption {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::NullsFirst => "NULLS FIRST",
            Self::NullsLast => "NULLS LAST",
        }
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    /// The expression to order by.
    pub key: Node,
    /// Modifiers in the order they were written.
    pub options: Vec<SortOption>,
}

/// The LIMIT bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit {
    pub expr: Node,
}

/// The OFFSET bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub expr: Node,
}

/// A SELECT statement.
///
/// Each optional clause is `None` exactly when its keyword was absent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// The projection list.
    pub projections: Option<Vec<Node>>,
    /// FROM entities.
    pub from: Option<Vec<Node>>,
    /// WHERE clause.
    pub where_clause: Option<Node>,
    /// GROUP BY expressions.
    pub group_by: Option<Vec<Node>>,
    /// ORDER BY entries.
    pub order_by: Option<Vec<SortKey>>,
    /// LIMIT clause.
    pub limit: Option<Limit>,
    /// OFFSET clause.
    pub offset: Option<Offset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_text() {
        assert_eq!(JoinType::LeftOuter.as_str(), "left outer");
        assert_eq!(JoinType::Left.as_str(), "left");
        assert_eq!(JoinType::Plain.as_str(), "");
    }

    #[test]
    fn test_join_type_same_semantics() {
        assert!(JoinType::Left.same_semantics(&JoinType::LeftOuter));
        assert!(JoinType::RightOuter.same_semantics(&JoinType::Right));
        assert!(JoinType::Plain.same_semantics(&JoinType::Inner));
        assert!(!JoinType::Left.same_semantics(&JoinType::Right));
        assert!(!JoinType::Cross.same_semantics(&JoinType::Inner));
    }

    #[test]
    fn test_join_type_is_outer() {
        assert!(JoinType::Left.is_outer());
        assert!(JoinType::FullOuter.is_outer());
        assert!(!JoinType::Cross.is_outer());
    }

    #[test]
    fn test_sort_option_as_str() {
        assert_eq!(SortOption::Desc.as_str(), "DESC");
        assert_eq!(SortOption::NullsLast.as_str(), "NULLS LAST");
    }

    #[test]
    fn test_select_default_has_no_clauses() {
        let select = Select::default();
        assert!(!select.distinct);
        assert!(select.projections.is_none());
        assert!(select.from.is_none());
        assert!(select.limit.is_none());
    }
}
