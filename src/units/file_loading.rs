//! Multi-source loading benchmark: posts loaded and resulting tree heights
//! per structure and source type, one bar per structure-source combination.

use super::{as_f64, Structure};
use crate::chart::{Bar, ChartSpec, Panel, PanelKind, ValueFormat};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "file_loading",
    &[Field::ints("posts", 4), Field::ints("heights", 4)],
);

const SOURCES: [&str; 2] = ["CSV", "TGZ"];

/// Category labels in token order: BST-CSV, Treap-CSV, BST-TGZ, Treap-TGZ
fn categories() -> Vec<(String, Structure)> {
    SOURCES
        .iter()
        .flat_map(|source| {
            Structure::all()
                .iter()
                .map(move |&structure| (format!("{}-{}", structure.name(), source), structure))
        })
        .collect()
}

fn bar_panel(
    title: &str,
    y_desc: &str,
    values: &[f64],
    annotate: ValueFormat,
) -> Panel {
    let bars = categories()
        .into_iter()
        .zip(values)
        .map(|((label, structure), &value)| Bar::new(label, value, structure.color()))
        .collect();

    Panel {
        title: title.to_string(),
        x_desc: None,
        y_desc: y_desc.to_string(),
        kind: PanelKind::Bars {
            bars,
            annotate: Some(annotate),
        },
    }
}

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;

    Ok(ChartSpec {
        stem: "file_loading",
        size: (1400, 600),
        panels: vec![
            bar_panel(
                "Posts Loaded from Different Sources",
                "Posts Loaded",
                &as_f64(decoded.ints("posts")),
                ValueFormat::Thousands,
            ),
            bar_panel(
                "Tree Height After Loading",
                "Tree Height",
                &as_f64(decoded.ints("heights")),
                ValueFormat::Integer,
            ),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{BST_COLOR, TREAP_COLOR};
    use crate::schema::tokens;

    #[test]
    fn test_categories_cross_structure_and_source() {
        let labels: Vec<String> = categories().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, &["BST-CSV", "Treap-CSV", "BST-TGZ", "Treap-TGZ"]);
    }

    #[test]
    fn test_build_assigns_structure_colors_per_bar() {
        let args = tokens(&[
            "120000", "120000", "85000", "85000", // posts
            "34", "19", "31", "17", // heights
        ]);
        let spec = build(&args).unwrap();

        assert_eq!(spec.stem, "file_loading");
        assert_eq!(spec.panels.len(), 2);

        match &spec.panels[0].kind {
            PanelKind::Bars { bars, annotate } => {
                assert_eq!(bars.len(), 4);
                assert_eq!(bars[0].color, BST_COLOR);
                assert_eq!(bars[1].color, TREAP_COLOR);
                assert_eq!(bars[2].color, BST_COLOR);
                assert_eq!(bars[3].color, TREAP_COLOR);
                assert_eq!(bars[2].value, 85000.0);
                assert_eq!(*annotate, Some(ValueFormat::Thousands));
            }
            other => panic!("expected bars, got {:?}", other),
        }

        match &spec.panels[1].kind {
            PanelKind::Bars { bars, annotate } => {
                assert_eq!(bars[3].value, 17.0);
                assert_eq!(*annotate, Some(ValueFormat::Integer));
            }
            other => panic!("expected bars, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_count_is_enforced() {
        let args = tokens(&["120000", "120000", "85000", "85000", "34", "19", "31"]);
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::WrongArgCount {
                expected: 8,
                actual: 7,
                ..
            })
        ));
    }
}
