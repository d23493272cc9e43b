/// The declared kind of a variable.
///
/// The kind is recorded in the symbol table but never changes how a value is
/// computed: every variable holds a 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// Declared with `int`.
    Int,
    /// Declared with `double`.
    Double,
}

impl VarKind {
    /// The keyword that introduces a declaration of this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for VarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Binary arithmetic operators.
///
/// Precedence from loosest to tightest binding is `+ -`, then `* /`, then
/// `^`. The first four are left-associative; `^` is right-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division truncating toward zero (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}

impl BinaryOperator {
    /// Returns the source symbol for the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Parenthesized groups have no node of their own; grouping is expressed by
/// the shape of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
}

/// Renders the expression fully parenthesized, which makes grouping and
/// associativity visible.
///
/// # Example
/// ```
/// let program = minilang::parse("program int a; begin a = 1 + 2 * 3; end").unwrap();
/// let minilang::ast::Statement::Assign { value, .. } = &program.statements[0] else {
///     unreachable!()
/// };
/// assert_eq!(value.to_string(), "(1 + (2 * 3))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => f.write_str(name),
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "({left} {} {right})", op.symbol())
            },
        }
    }
}

/// A single `int` or `double` declaration with its identifier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared kind shared by every name in the list.
    pub kind:  VarKind,
    /// The declared names, in source order.
    pub names: Vec<String>,
    /// Line number of the type keyword.
    pub line:  usize,
}

/// A statement in the `begin` ... `end` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = expr;`
    Assign {
        /// The assigned variable.
        name:  String,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr;`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A complete parsed program.
///
/// The tree is immutable once built and may be evaluated any number of times;
/// each evaluation starts from an empty symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Declarations between `program` and `begin`.
    pub declarations: Vec<Declaration>,
    /// Statements between `begin` and `end`.
    pub statements:   Vec<Statement>,
}
