pub use symbol::{Symbol, SymbolTable};

mod symbol;
