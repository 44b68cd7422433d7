// src/ops/math_elem/mod.rs
// Element functions of general use (exp, ln)

pub mod exp;
pub mod ln;

pub use exp::exp_op;
pub use ln::ln_op;
