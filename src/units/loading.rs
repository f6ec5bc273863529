//! Single-source loading benchmark. The first token is the source-type label
//! ("CSV" or "TGZ") and parameterizes the panel titles, so the same unit
//! reports either source.

use super::Structure;
use crate::chart::{Bar, ChartSpec, Panel, PanelKind, ValueFormat};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "loading",
    &[
        Field::label("file_type"),
        Field::floats("bst_time", 1),
        Field::floats("treap_time", 1),
        Field::ints("bst_height", 1),
        Field::ints("treap_height", 1),
    ],
);

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;
    let file_type = decoded.label("file_type");

    Ok(ChartSpec {
        stem: "loading",
        size: (1200, 500),
        panels: vec![
            Panel {
                title: format!("{} Loading Time Comparison", file_type),
                x_desc: None,
                y_desc: "Loading Time (seconds)".to_string(),
                kind: PanelKind::Bars {
                    bars: vec![
                        Bar::new(
                            Structure::Bst.name(),
                            decoded.float("bst_time"),
                            Structure::Bst.color(),
                        ),
                        Bar::new(
                            Structure::Treap.name(),
                            decoded.float("treap_time"),
                            Structure::Treap.color(),
                        ),
                    ],
                    annotate: Some(ValueFormat::Seconds),
                },
            },
            Panel {
                title: format!("Tree Height After {} Loading", file_type),
                x_desc: None,
                y_desc: "Tree Height".to_string(),
                kind: PanelKind::Bars {
                    bars: vec![
                        Bar::new(
                            Structure::Bst.name(),
                            decoded.int("bst_height") as f64,
                            Structure::Bst.color(),
                        ),
                        Bar::new(
                            Structure::Treap.name(),
                            decoded.int("treap_height") as f64,
                            Structure::Treap.color(),
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
    fn test_build_matches_documented_example() {
        // ["CSV","2.1","1.4","18","12"] -> titles parameterized with "CSV"
        let args = tokens(&["CSV", "2.1", "1.4", "18", "12"]);
        let spec = build(&args).unwrap();

        assert_eq!(spec.stem, "loading");
        assert_eq!(spec.panels.len(), 2);
        assert_eq!(spec.panels[0].title, "CSV Loading Time Comparison");
        assert_eq!(spec.panels[1].title, "Tree Height After CSV Loading");

        match &spec.panels[0].kind {
            PanelKind::Bars { bars, annotate } => {
                assert_eq!(bars[0].label, "BST");
                assert_eq!(bars[0].value, 2.1);
                assert_eq!(bars[1].label, "Treap");
                assert_eq!(bars[1].value, 1.4);
                assert_eq!(*annotate, Some(ValueFormat::Seconds));
            }
            other => panic!("expected bars, got {:?}", other),
        }

        match &spec.panels[1].kind {
            PanelKind::Bars { bars, .. } => {
                assert_eq!(bars[0].value, 18.0);
                assert_eq!(bars[1].value, 12.0);
            }
            other => panic!("expected bars, got {:?}", other),
        }
    }

    #[test]
    fn test_title_follows_label_token() {
        let args = tokens(&["TGZ", "8.3", "5.0", "24", "15"]);
        let spec = build(&args).unwrap();
        assert_eq!(spec.panels[0].title, "TGZ Loading Time Comparison");
        assert_eq!(spec.panels[1].title, "Tree Height After TGZ Loading");
    }

    #[test]
    fn test_numeric_field_rejects_label_token() {
        let args = tokens(&["CSV", "fast", "1.4", "18", "12"]);
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::BadToken {
                field: "bst_time",
                ..
            })
        ));
    }
}
