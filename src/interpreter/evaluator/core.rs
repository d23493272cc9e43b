use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    config::Config,
    error::{Error, RuntimeError},
    interpreter::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run: the symbol table and
/// the arithmetic configuration.
///
/// ## Usage
///
/// A `Context` is created per run. Evaluating the same [`Program`] in two
/// fresh contexts gives the same output, since nothing outside the context is
/// consulted.
pub struct Context {
    /// Every declared variable, in declaration order.
    pub symbols: SymbolTable,
    /// Arithmetic settings.
    pub config:  Config,
}

impl Context {
    /// Creates a new evaluation context with an empty symbol table.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { symbols: SymbolTable::new(),
               config }
    }

    /// Executes a whole program.
    ///
    /// Every declared name is entered into the symbol table first, in source
    /// order. Statements then run one after another; each one's effect is
    /// visible to all later ones. Print output goes to `out` as it happens.
    ///
    /// # Errors
    /// Stops at the first failing statement. Output written by earlier
    /// statements stays written.
    ///
    /// # Example
    /// ```
    /// use minilang::{config::Config, interpreter::evaluator::core::Context, parse};
    ///
    /// let program = parse("program int a; begin a = 6 * 7; print a; end").unwrap();
    /// let mut out = Vec::new();
    /// Context::new(Config::default()).eval_program(&program, &mut out).unwrap();
    /// assert_eq!(out, b"42\n");
    /// ```
    pub fn eval_program(&mut self,
                        program: &Program,
                        out: &mut dyn Write)
                        -> Result<(), Error> {
        for declaration in &program.declarations {
            debug!(kind = %declaration.kind,
                   names = ?declaration.names,
                   line = declaration.line,
                   "declare");
            for name in &declaration.names {
                self.symbols.declare(name, declaration.kind);
            }
        }

        for statement in &program.statements {
            self.eval_statement(statement, out)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// An assignment evaluates its right-hand side fully before writing the
    /// variable. A print statement writes the decimal value followed by a line
    /// break.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          out: &mut dyn Write)
                          -> Result<(), Error> {
        match statement {
            Statement::Assign { name, value, line } => {
                let value = self.eval(value)?;
                trace!(name = name.as_str(), value, "assign");
                self.symbols.write(name, value, *line)?;
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                writeln!(out, "{value}")?;
            },
        }
        Ok(())
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Literals evaluate to themselves and variables are read through the
    /// symbol table. For binary operations the left operand is evaluated
    /// before the right one.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.symbols.read(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary_op(left, *op, right, *line)
            },
        }
    }
}
