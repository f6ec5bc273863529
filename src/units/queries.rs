//! Query benchmark: single-query comparisons plus getMostRecent(k) scaling
//! over the measured k values.

use super::{as_f64, Structure};
use crate::chart::{ChartSpec, Panel, PanelKind, Series, ValueFormat};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "queries",
    &[
        Field::floats("bst_popular", 1),
        Field::floats("treap_popular", 1),
        Field::floats("bst_mixed", 1),
        Field::floats("treap_mixed", 1),
        Field::ints("k_values", 4),
        Field::floats("bst_recent", 4),
        Field::floats("treap_recent", 4),
    ],
);

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;

    Ok(ChartSpec {
        stem: "queries",
        size: (1400, 600),
        panels: vec![
            Panel {
                title: "Single Query Performance".to_string(),
                x_desc: Some("Query Operations".to_string()),
                y_desc: "Time (microseconds)".to_string(),
                kind: PanelKind::GroupedBars {
                    categories: vec!["getMostPopular".to_string(), "Mixed Workload".to_string()],
                    groups: vec![
                        Series::new(
                            Structure::Bst.name(),
                            Structure::Bst.color(),
                            vec![decoded.float("bst_popular"), decoded.float("bst_mixed")],
                        ),
                        Series::new(
                            Structure::Treap.name(),
                            Structure::Treap.color(),
                            vec![decoded.float("treap_popular"), decoded.float("treap_mixed")],
                        ),
                    ],
                    annotate: Some(ValueFormat::Micros),
                },
            },
            Panel {
                title: "getMostRecent(k) Performance".to_string(),
                x_desc: Some("Number of Recent Posts (k)".to_string()),
                y_desc: "Time per Query (microseconds)".to_string(),
                kind: PanelKind::Lines {
                    x: as_f64(decoded.ints("k_values")),
                    series: vec![
                        Series::new(
                            Structure::Bst.name(),
                            Structure::Bst.color(),
                            decoded.floats("bst_recent").to_vec(),
                        ),
                        Series::new(
                            Structure::Treap.name(),
                            Structure::Treap.color(),
                            decoded.floats("treap_recent").to_vec(),
                        ),
                    ],
                    annotate: Some(ValueFormat::Decimal),
                },
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tokens;

    fn full_args() -> Vec<String> {
        tokens(&[
            "4.1", "2.6", // getMostPopular
            "88.0", "61.4", // mixed workload
            "5", "10", "20", "50", // k values
            "6.2", "11.0", "20.5", "49.8", // BST recent
            "4.0", "7.1", "13.9", "33.2", // Treap recent
        ])
    }

    #[test]
    fn test_build_produces_grouped_bars_then_lines() {
        let spec = build(&full_args()).unwrap();
        assert_eq!(spec.stem, "queries");
        assert_eq!(spec.panels.len(), 2);

        match &spec.panels[0].kind {
            PanelKind::GroupedBars {
                groups, annotate, ..
            } => {
                assert_eq!(groups[0].values, vec![4.1, 88.0]);
                assert_eq!(groups[1].values, vec![2.6, 61.4]);
                assert_eq!(*annotate, Some(ValueFormat::Micros));
            }
            other => panic!("expected grouped bars, got {:?}", other),
        }

        match &spec.panels[1].kind {
            PanelKind::Lines { x, series, annotate } => {
                assert_eq!(x, &[5.0, 10.0, 20.0, 50.0]);
                assert_eq!(series[0].values, vec![6.2, 11.0, 20.5, 49.8]);
                assert_eq!(series[1].values, vec![4.0, 7.1, 13.9, 33.2]);
                assert_eq!(*annotate, Some(ValueFormat::Decimal));
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_args_fail() {
        let mut args = full_args();
        args.truncate(12);
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::WrongArgCount {
                expected: 16,
                actual: 12,
                ..
            })
        ));
    }
}
