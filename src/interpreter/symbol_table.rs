use tracing::debug;

use crate::{ast::VarKind, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A declared variable and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The declared name.
    pub name:  String,
    /// The declared kind. Recorded only; arithmetic is always integral.
    pub kind:  VarKind,
    /// The current value. Starts at 0.
    pub value: i64,
}

/// Append-only registry of declared variables.
///
/// Entries are kept in declaration order and never removed or deduplicated.
/// Reads and writes resolve a name to the *first* entry carrying it, so
/// declaring a name twice leaves the second entry in place but unreachable.
///
/// # Example
/// ```
/// use minilang::{ast::VarKind, interpreter::symbol_table::SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.declare("a", VarKind::Int);
/// table.declare("a", VarKind::Double);
/// table.write("a", 5, 1).unwrap();
///
/// assert_eq!(table.read("a", 1), Ok(5));
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.iter().nth(1).map(|v| v.value), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Appends a new variable with value 0. Never fails.
    pub fn declare(&mut self, name: &str, kind: VarKind) {
        if self.lookup(name).is_some() {
            debug!(name, "redeclared variable is shadowed by the earlier declaration");
        }
        self.variables.push(Variable { name: name.to_string(),
                                       kind,
                                       value: 0 });
    }

    /// Returns the value of the first variable called `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndeclaredVariable` if no such variable exists.
    pub fn read(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.lookup(name)
            .map(|v| v.value)
            .ok_or_else(|| undeclared(name, line))
    }

    /// Overwrites the value of the first variable called `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndeclaredVariable` if no such variable exists.
    pub fn write(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        let variable = self.variables
                           .iter_mut()
                           .find(|v| v.name == name)
                           .ok_or_else(|| undeclared(name, line))?;
        variable.value = value;
        Ok(())
    }

    /// Number of entries, shadowed ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over every entry in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

fn undeclared(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndeclaredVariable { name: name.to_string(),
                                       line }
}
