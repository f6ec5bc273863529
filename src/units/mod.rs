//! Chart units: one module per benchmark report.
//!
//! Each unit owns its positional [`ArgSchema`](crate::schema::ArgSchema) and a
//! `build` function that decodes the raw tokens and assembles a
//! [`ChartSpec`](crate::chart::ChartSpec). Rendering and display happen at the
//! binary's top level, so a decode failure never touches the filesystem.

pub mod deletion;
pub mod file_loading;
pub mod insertion;
pub mod likes;
pub mod loading;
pub mod queries;
pub mod search;

use crate::chart::{BST_COLOR, TREAP_COLOR};
use plotters::style::RGBColor;

/// Tree variants under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// Plain binary search tree, the performance baseline
    Bst,
    /// Randomized balanced tree (rotation counts are measured for it)
    Treap,
}

impl Structure {
    pub fn all() -> &'static [Structure] {
        &[Structure::Bst, Structure::Treap]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Structure::Bst => "BST",
            Structure::Treap => "Treap",
        }
    }

    pub fn color(&self) -> RGBColor {
        match self {
            Structure::Bst => BST_COLOR,
            Structure::Treap => TREAP_COLOR,
        }
    }
}

pub(crate) fn as_f64(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}
