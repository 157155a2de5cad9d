use std::collections::HashMap;
use std::f64::consts;

/// What a name in the symbol table resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// A named constant with a fixed value, such as `pi`.
    Constant(f64),

    /// A variable, whose value is supplied at evaluation time.
    Variable,
}

/// The names an expression is allowed to reference.
///
/// A fresh table is built for every parse from the built-in constants and the variable names the
/// caller passes in. Lookups are case-insensitive: every name is stored lowercase, and callers are
/// expected to look up normalized token text.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a symbol table containing only the built-in constants `e` and `pi`.
    pub fn new() -> Self {
        let symbols = [
            ("e".to_string(), Symbol::Constant(consts::E)),
            ("pi".to_string(), Symbol::Constant(consts::PI)),
        ];
        Self { symbols: symbols.into_iter().collect() }
    }

    /// Creates a symbol table containing the built-in constants and the given variables.
    pub fn with_variables<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in variables {
            table.add_variable(name.as_ref());
        }
        table
    }

    /// Registers a variable. A variable with the same name as a built-in constant shadows it.
    pub fn add_variable(&mut self, name: &str) {
        self.symbols.insert(name.to_lowercase(), Symbol::Variable);
    }

    /// Resolves a name or a numeric literal.
    ///
    /// Tokens that start with a digit or a `.` are numeric literals and resolve to their value;
    /// they never match a registered name. Everything else is looked up by name.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        match name.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '.' => {
                name.parse::<f64>().ok().map(Symbol::Constant)
            },
            Some(_) => self.symbols.get(name).copied(),
            None => None,
        }
    }

    /// Returns every registered name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}
