//! Search benchmark: two point comparisons, getMostPopular and
//! getMostRecent(10).

use super::Structure;
use crate::chart::{ChartSpec, Panel, PanelKind, Series};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "search",
    &[
        Field::floats("bst_times", 2),
        Field::floats("treap_times", 2),
    ],
);

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    let decoded = SCHEMA.decode(args)?;

    Ok(ChartSpec {
        stem: "search",
        size: (1000, 600),
        panels: vec![Panel {
            title: "BST vs Treap - Search Performance".to_string(),
            x_desc: Some("Search Operations".to_string()),
            y_desc: "Time (microseconds)".to_string(),
            kind: PanelKind::GroupedBars {
                categories: vec!["getMostPopular".to_string(), "getMostRecent(10)".to_string()],
                groups: vec![
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
    fn test_build_matches_documented_example() {
        // ["120.5","95.3","60.1","45.8"] -> BST [120.5, 95.3], Treap [60.1, 45.8]
        let args = tokens(&["120.5", "95.3", "60.1", "45.8"]);
        let spec = build(&args).unwrap();

        assert_eq!(spec.stem, "search");
        assert_eq!(spec.panels.len(), 1);
        match &spec.panels[0].kind {
            PanelKind::GroupedBars {
                categories, groups, ..
            } => {
                assert_eq!(categories.len(), 2);
                assert_eq!(groups[0].name, "BST");
                assert_eq!(groups[0].values, vec![120.5, 95.3]);
                assert_eq!(groups[1].name, "Treap");
                assert_eq!(groups[1].values, vec![60.1, 45.8]);
            }
            other => panic!("expected grouped bars, got {:?}", other),
        }
    }

    #[test]
    fn test_one_fewer_token_fails() {
        let args = tokens(&["120.5", "95.3", "60.1"]);
        assert!(matches!(
            build(&args),
            Err(SchemaViolation::WrongArgCount {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }
}
