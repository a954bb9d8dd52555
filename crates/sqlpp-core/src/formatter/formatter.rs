//! Pretty-printer for parsed SELECT statements.

use tracing::debug;

use super::{FormatOptions, ProjectionLayout};
use crate::ast::{Atom, Case, Expr, Join, JoinType, Node, Select, SortKey, Unary};

/// Width of `"SELECT "`, the column wrapped projections align under.
const SELECT_PREFIX_WIDTH: usize = 7;

/// Spaces added per nested sub-select.
const NESTED_INDENT: usize = 2;

/// Renders syntax trees as formatted SQL.
///
/// Each clause of a SELECT goes on its own line. Sub-selects are indented as a
/// block inside their parent's FROM, and `AND`/`OR` inside a WHERE clause start
/// a new line.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormatOptions,
    /// Indentation of the SELECT being rendered; unset outside any SELECT.
    depth: Option<usize>,
    /// Set while rendering a WHERE expression.
    in_where: bool,
}

impl Formatter {
    /// Creates a formatter with the given options.
    #[must_use]
    pub const fn new(options: FormatOptions) -> Self {
        Self {
            options,
            depth: None,
            in_where: false,
        }
    }

    /// Returns the options this formatter was created with.
    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats any node.
    #[must_use]
    pub fn format(&mut self, node: &Node) -> String {
        self.reset();
        debug!(layout = %self.options.projections, "formatting node");
        self.node(node)
    }

    /// Formats a SELECT statement.
    #[must_use]
    pub fn format_select(&mut self, select: &Select) -> String {
        self.reset();
        debug!(layout = %self.options.projections, "formatting select");
        self.select(select)
    }

    fn reset(&mut self) {
        self.depth = None;
        self.in_where = false;
    }

    fn indent(&self) -> String {
        " ".repeat(self.depth.unwrap_or(0))
    }

    fn node(&mut self, node: &Node) -> String {
        match node {
            Node::Select(select) => self.select(select),
            Node::Expr(expr) => self.expr(expr),
            Node::Unary(unary) => self.unary(unary),
            Node::Atom(atom) => self.atom(atom),
            Node::Parens(value) => format!("({})", self.node(value)),
            Node::As(alias) => format!("{} AS {}", self.node(&alias.expr), alias.name),
            Node::Alias(alias) => format!("{} {}", self.node(&alias.expr), alias.name),
            Node::Join(join) => self.join(join),
            Node::Subscript(subscript) => format!(
                "{}[{}]",
                self.node(&subscript.left),
                self.node(&subscript.right)
            ),
            Node::TypeCast(cast) => format!(
                "{}::{}",
                self.node(&cast.value),
                self.node(&cast.data_type)
            ),
        }
    }

    fn list(&mut self, nodes: &[Node], separator: &str) -> String {
        nodes
            .iter()
            .map(|node| self.node(node))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn select(&mut self, select: &Select) -> String {
        let saved_depth = self.depth;
        let saved_where = self.in_where;

        let mut output = String::new();
        let depth = match saved_depth {
            None => 0,
            Some(parent) => {
                output.push('\n');
                parent + NESTED_INDENT
            }
        };
        self.depth = Some(depth);
        self.in_where = false;
        let indent = self.indent();

        output.push_str(&indent);
        output.push_str("SELECT");
        if select.distinct {
            output.push_str(" DISTINCT");
        }
        if let Some(projections) = &select.projections {
            let separator = match self.options.projections {
                ProjectionLayout::Inline => String::from(", "),
                ProjectionLayout::Wrap => {
                    format!(",\n{}", " ".repeat(depth + SELECT_PREFIX_WIDTH))
                }
            };
            output.push(' ');
            output.push_str(&self.list(projections, &separator));
        }
        output.push('\n');

        if let Some(from) = &select.from {
            output.push_str(&format!("{indent}FROM {}\n", self.list(from, ", ")));
        }

        if let Some(where_clause) = &select.where_clause {
            self.in_where = true;
            let rendered = self.node(where_clause);
            self.in_where = false;
            output.push_str(&format!("{indent}WHERE {rendered}\n"));
        }

        if let Some(group_by) = &select.group_by {
            output.push_str(&format!("{indent}GROUP BY {}\n", self.list(group_by, ", ")));
        }

        if let Some(order_by) = &select.order_by {
            let keys = order_by
                .iter()
                .map(|key| self.sort_key(key))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("{indent}ORDER BY {keys}\n"));
        }

        let mut bounds = vec![];
        if let Some(limit) = &select.limit {
            bounds.push(format!("LIMIT {}", self.node(&limit.expr)));
        }
        if let Some(offset) = &select.offset {
            bounds.push(format!("OFFSET {}", self.node(&offset.expr)));
        }
        if !bounds.is_empty() {
            output.push_str(&format!("{indent}{}\n", bounds.join(" ")));
        }

        self.depth = saved_depth;
        self.in_where = saved_where;
        output.push_str(&self.indent());
        output
    }

    fn sort_key(&mut self, sort_key: &SortKey) -> String {
        let mut output = self.node(&sort_key.key);
        for option in &sort_key.options {
            output.push(' ');
            output.push_str(option.as_str());
        }
        output
    }

    fn expr(&mut self, expr: &Expr) -> String {
        let mut output = self.node(&expr.left);

        if self.in_where && expr.op.is_connective() {
            output.push('\n');
            output.push_str(&self.indent());
        } else {
            output.push(' ');
        }

        if expr.negated {
            output.push_str("NOT ");
        }
        output.push_str(expr.op.as_str());
        output.push(' ');
        output.push_str(&self.node(&expr.right));
        output
    }

    fn unary(&mut self, unary: &Unary) -> String {
        let operand = self.node(&unary.expr);
        if unary.op.is_word() {
            format!("{} {operand}", unary.op.as_str())
        } else {
            format!("{}{operand}", unary.op.as_str())
        }
    }

    fn atom(&mut self, atom: &Atom) -> String {
        match atom {
            Atom::Literal(text) => text.clone(),
            Atom::Attribute { table: None, name } => name.clone(),
            Atom::Attribute {
                table: Some(table),
                name,
            } => format!("{table}.{name}"),
            Atom::Function { name, args } => format!("{name}({})", self.list(args, ", ")),
            Atom::Range { low, high } => {
                format!("{} AND {}", self.node(low), self.node(high))
            }
            Atom::List(items) => format!("({})", self.list(items, ", ")),
            Atom::Case(case) => self.case(case),
        }
    }

    fn case(&mut self, case: &Case) -> String {
        let mut output = String::from("CASE ");
        if let Some(subject) = &case.subject {
            output.push_str(&self.node(subject));
            output.push(' ');
        }
        for branch in &case.branches {
            let condition = self.node(&branch.condition);
            let result = self.node(&branch.result);
            output.push_str(&format!("WHEN {condition} THEN {result} "));
        }
        if let Some(otherwise) = &case.otherwise {
            output.push_str(&format!("ELSE {} ", self.node(otherwise)));
        }
        output.push_str("END");
        output
    }

    fn join(&mut self, join: &Join) -> String {
        let mut output = self.node(&join.left);
        let indent = self.indent();

        output.push('\n');
        output.push_str(&indent);
        if join.join_type != JoinType::Plain {
            output.push_str(&join.join_type.as_str().to_ascii_uppercase());
            output.push(' ');
        }
        output.push_str("JOIN ");
        output.push_str(&self.node(&join.right));

        if let Some(on) = &join.on {
            output.push('\n');
            output.push_str(&indent);
            output.push_str("ON ");
            output.push_str(&self.node(on));
        }

        output
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}
