//! Deletion benchmark: deletion time, resulting tree heights, and the Treap's
//! rotation counts, across two dataset sizes.
//!
//! This unit echoes its raw and decoded arguments to stdout; the deletion
//! numbers come from the longest-running benchmark and the echo makes a saved
//! console log self-contained.

use super::{as_f64, Structure};
use crate::chart::{Bar, ChartSpec, Panel, PanelKind, Series, ValueFormat, ORANGE, PURPLE};
use crate::schema::{ArgSchema, Field, SchemaViolation};

pub const SCHEMA: ArgSchema = ArgSchema::new(
    "deletion",
    &[
        Field::ints("sizes", 2),
        Field::floats("bst_times", 2),
        Field::floats("treap_times", 2),
        Field::ints("bst_heights", 2),
        Field::ints("treap_heights", 2),
        Field::ints("rotations", 2),
    ],
);

const BAR_COLORS: [plotters::style::RGBColor; 2] = [ORANGE, PURPLE];

pub fn build(args: &[String]) -> Result<ChartSpec, SchemaViolation> {
    println!("Arguments received: {}", args.len());
    println!("Args: {:?}", args);

    let decoded = SCHEMA.decode(args)?;

    let sizes = decoded.ints("sizes");
    let bst_times = decoded.floats("bst_times");
    let treap_times = decoded.floats("treap_times");
    let bst_heights = decoded.ints("bst_heights");
    let treap_heights = decoded.ints("treap_heights");
    let rotations = decoded.ints("rotations");

    println!("Sizes: {:?}", sizes);
    println!("BST Times: {:?}", bst_times);
    println!("Treap Times: {:?}", treap_times);
    println!("BST Heights: {:?}", bst_heights);
    println!("Treap Heights: {:?}", treap_heights);
    println!("Rotations: {:?}", rotations);

    let rotation_bars = sizes
        .iter()
        .zip(rotations)
        .zip(BAR_COLORS)
        .map(|((&size, &count), color)| Bar::new(format!("{} posts", size), count as f64, color))
        .collect();

    Ok(ChartSpec {
        stem: "deletion",
        size: (1500, 500),
        panels: vec![
            Panel {
                title: "Deletion Time vs Dataset Size".to_string(),
                x_desc: Some("Dataset Size (posts)".to_string()),
                y_desc: "Deletion Time (ms)".to_string(),
                kind: PanelKind::Lines {
                    x: as_f64(sizes),
                    series: vec![
                        Series::new(
                            Structure::Bst.name(),
                            Structure::Bst.color(),
                            bst_times.to_vec(),
                        ),
                        Series::new(
                            Structure::Treap.name(),
                            Structure::Treap.color(),
                            treap_times.to_vec(),
                        ),
                    ],
                    annotate: None,
                },
            },
            Panel {
                title: "Tree Height vs Dataset Size".to_string(),
                x_desc: Some("Dataset Size (posts)".to_string()),
                y_desc: "Tree Height".to_string(),
                kind: PanelKind::Lines {
                    x: as_f64(sizes),
                    series: vec![
                        Series::new("BST Height", Structure::Bst.color(), as_f64(bst_heights)),
                        Series::new(
                            "Treap Height",
                            Structure::Treap.color(),
                            as_f64(treap_heights),
                        ),
                    ],
                    annotate: None,
                },
            },
            Panel {
                title: "Treap Rotations During Deletion".to_string(),
                x_desc: None,
                y_desc: "Number of Rotations".to_string(),
                kind: PanelKind::Bars {
                    bars: rotation_bars,
                    annotate: Some(ValueFormat::Integer),
                },
            },
        ],
    })
}
