//! Insertion benchmark: BST vs Treap insertion time across dataset sizes.

use super::{as_f64, Structure};
use crate::chart::{ChartSpec, Panel, PanelKind, Series};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "insertion",
    &[
        Field::ints("sizes", 4),
        Field::floats("bst_times", 4),
        Field::floats("treap_times", 4),
    ],
);

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;

    Ok(ChartSpec {
        stem: "insertion",
        size: (1000, 600),
        panels: vec![Panel {
            title: "BST vs Treap - Insertion Performance".to_string(),
            x_desc: Some("Number of Posts".to_string()),
            y_desc: "Insertion Time (ms)".to_string(),
            kind: PanelKind::Lines {
                x: as_f64(decoded.ints("sizes")),
                series: vec![
                    Series::new(
                        Structure::Bst.name(),
                        Structure::Bst.color(),
                        decoded.floats("bst_times").to_vec(),
                    ),
                    Series::new(
                        Structure::Treap.name(),
                        Structure::Treap.color(),
                        decoded.floats("treap_times").to_vec(),
                    ),
                ],
                annotate: None,
            },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tokens;

    #[test]
    fn test_build_assembles_aligned_series() {
        let args = tokens(&[
            "1000", "2000", "5000", "10000", // sizes
            "1.2", "2.8", "7.5", "16.0", // BST times
            "0.9", "1.9", "4.8", "10.1", // Treap times
        ]);
        let spec = build(&args).unwrap();

        assert_eq!(spec.stem, "insertion");
        assert_eq!(spec.panels.len(), 1);
        match &spec.panels[0].kind {
            PanelKind::Lines { x, series, .. } => {
                assert_eq!(x, &[1000.0, 2000.0, 5000.0, 10000.0]);
                assert_eq!(series.len(), 2);
                assert_eq!(series[0].name, "BST");
                assert_eq!(series[0].values, vec![1.2, 2.8, 7.5, 16.0]);
                assert_eq!(series[1].name, "Treap");
                assert_eq!(series[1].values, vec![0.9, 1.9, 4.8, 10.1]);
            }
            other => panic!("expected a line panel, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let args = vec!["1000".to_string(); 11];
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::WrongArgCount {
                expected: 12,
                actual: 11,
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_size_is_rejected() {
        let mut args = vec!["1000".to_string(); 12];
        args[2] = "lots".to_string();
        assert!(matches!(build(&args), Err(SchemaViolation::BadToken { .. })));
    }
}
