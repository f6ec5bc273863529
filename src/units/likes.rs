//! Like-update benchmark: single vs batched like operations, plus the Treap
//! rotation counts those updates triggered.

use super::Structure;
use crate::chart::{Bar, ChartSpec, Panel, PanelKind, Series, ValueFormat, GREEN, ORANGE};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "likes",
    &[
        Field::floats("bst_single", 1),
        Field::floats("treap_single", 1),
        Field::floats("bst_multiple", 1),
        Field::floats("treap_multiple", 1),
        Field::ints("total_rotations", 1),
        Field::ints("bubble_rotations", 1),
    ],
);

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;

    Ok(ChartSpec {
        stem: "likes",
        size: (1200, 500),
        panels: vec![
            Panel {
                title: "BST vs Treap - Like Performance".to_string(),
                x_desc: Some("Like Operations".to_string()),
                y_desc: "Time (microseconds)".to_string(),
                kind: PanelKind::GroupedBars {
                    categories: vec!["Single Like".to_string(), "Multiple Likes".to_string()],
                    groups: vec![
                        Series::new(
                            Structure::Bst.name(),
                            Structure::Bst.color(),
                            vec![decoded.float("bst_single"), decoded.float("bst_multiple")],
                        ),
                        Series::new(
                            Structure::Treap.name(),
                            Structure::Treap.color(),
                            vec![
                                decoded.float("treap_single"),
                                decoded.float("treap_multiple"),
                            ],
                        ),
                    ],
                    annotate: None,
                },
            },
            Panel {
                title: "Treap Rotations During Likes".to_string(),
                x_desc: None,
                y_desc: "Number of Rotations".to_string(),
                kind: PanelKind::Bars {
                    bars: vec![
                        Bar::new(
                            "Total Rotations",
                            decoded.int("total_rotations") as f64,
                            ORANGE,
                        ),
                        Bar::new(
                            "Bubble Rotations",
                            decoded.int("bubble_rotations") as f64,
                            GREEN,
                        ),
                    ],
                    annotate: Some(ValueFormat::Integer),
                },
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tokens;

    #[test]
    fn test_build_splits_times_and_rotations() {
        let args = tokens(&["14.2", "9.8", "310.5", "188.0", "57", "23"]);
        let spec = build(&args).unwrap();

        assert_eq!(spec.stem, "likes");
        assert_eq!(spec.panels.len(), 2);

        match &spec.panels[0].kind {
            PanelKind::GroupedBars {
                categories, groups, ..
            } => {
                assert_eq!(categories, &["Single Like", "Multiple Likes"]);
                assert_eq!(groups[0].values, vec![14.2, 310.5]);
                assert_eq!(groups[1].values, vec![9.8, 188.0]);
            }
            other => panic!("expected grouped bars, got {:?}", other),
        }

        match &spec.panels[1].kind {
            PanelKind::Bars { bars, .. } => {
                assert_eq!(bars[0].value, 57.0);
                assert_eq!(bars[1].value, 23.0);
            }
            other => panic!("expected bars, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_rotation_count_is_rejected() {
        let args = tokens(&["14.2", "9.8", "310.5", "188.0", "57.5", "23"]);
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::BadToken {
                field: "total_rotations",
                ..
            })
        ));
    }
}
