// src/ops/comparison/mod.rs
// Value comparisons. They read forward values only and never create graph edges.

pub mod gt;

pub use gt::gt_op;
