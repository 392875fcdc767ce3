mod global;
mod local;
mod properties;

use treesim_alignment_rs::scoring::{Identity, TreePath};
use treesim_core_rs::Symbol;

pub fn symbols(tokens: &[&str]) -> Vec<Symbol> {
    tokens.iter().map(|x| Symbol::new(x)).collect()
}

/// root -> {x, y, z}, every pair of leaves meets at the root.
pub fn star() -> TreePath {
    let positions = [("root", 0), ("x", 1), ("y", 2), ("z", 3)]
        .into_iter()
        .map(|(s, p)| (Symbol::new(s), p))
        .collect();
    let lcas = [("x", "y"), ("x", "z"), ("y", "z")]
        .into_iter()
        .map(|(a, b)| ((Symbol::new(a), Symbol::new(b)), Symbol::new("root")));
    TreePath::new(1.0, vec![0, 1, 1, 1], positions, lcas).unwrap()
}

pub fn identity(different: f64, gap: f64) -> Identity<u8> {
    Identity::new(1.0, different, gap)
}
