// Property-based tests for the highlighting engine.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use tintgrid_engine::highlight::RowSpan;
use tintgrid_engine::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        3 => r"[a-zA-Z ]{0,10}".prop_map(CellValue::Text),
        3 => (-1_000_000.0f64..1_000_000.0).prop_map(CellValue::Number),
        1 => any::<bool>().prop_map(CellValue::Bool),
        1 => Just(CellValue::Null),
    ]
}

/// Jagged grid: 0..40 rows of 0..8 cells each.
fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..8), 0..40)
}

/// Instructions built from the keywords the engine reacts to, plus noise.
fn arb_instruction() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("highlight".to_string()),
        Just("top".to_string()),
        Just("bottom".to_string()),
        Just("blue".to_string()),
        Just("green".to_string()),
        Just("yellow".to_string()),
        Just("rows".to_string()),
        (0usize..60).prop_map(|n| n.to_string()),
        r"[a-z]{1,6}",
    ];
    prop::collection::vec(word, 0..7).prop_map(|words| words.join(" "))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn highlight_preserves_shape(instr in arb_instruction(), grid in arb_grid()) {
        let styles = highlight(&instr, &grid);
        prop_assert_eq!(styles.len(), grid.len());
        for (i, row) in grid.iter().enumerate() {
            prop_assert_eq!(styles.row(i).unwrap().len(), row.len());
        }
    }

    #[test]
    fn highlight_never_touches_header(instr in arb_instruction(), grid in arb_grid()) {
        let styles = highlight(&instr, &grid);
        if let Some(header) = styles.row(0) {
            prop_assert!(header.iter().all(StyleRecord::is_empty));
        }
    }

    #[test]
    fn highlight_does_not_mutate_input(instr in arb_instruction(), grid in arb_grid()) {
        let before = grid.clone();
        let _ = highlight(&instr, &grid);
        let _ = parse_prompt(&instr, &grid);
        for action in PresetAction::ALL {
            let _ = apply_preset(action, &grid);
        }
        prop_assert_eq!(before, grid);
    }

    #[test]
    fn highlight_uses_one_color_pair(instr in arb_instruction(), grid in arb_grid()) {
        let styles = highlight(&instr, &grid);
        let mut painted = styles.rows().iter().flatten().filter(|r| !r.is_empty());
        if let Some(first) = painted.next() {
            for other in painted {
                prop_assert_eq!(other, first);
            }
        }
    }

    #[test]
    fn highlight_paints_contiguous_span(instr in arb_instruction(), grid in arb_grid()) {
        let styles = highlight(&instr, &grid);
        let span = RowSpan::resolve(&instr, grid.len());
        for (i, row) in styles.rows().iter().enumerate() {
            let inside = !span.is_empty() && span.rows().contains(&i);
            prop_assert!(row.iter().all(|c| c.is_empty() != inside));
        }
    }

    #[test]
    fn clear_after_anything_is_blank(instr in arb_instruction(), grid in arb_grid()) {
        let styled = highlight(&instr, &grid)
            .overlay(&apply_preset(PresetAction::BoldHeaders, &grid));
        let cleared = clear_formatting(&styled);
        prop_assert!(cleared.is_blank());
        prop_assert!(cleared.matches_shape(&grid));
        prop_assert_eq!(clear_formatting(&cleared), cleared.clone());
        prop_assert!(apply_preset(PresetAction::ClearFormatting, &grid).is_blank());
    }

    #[test]
    fn presets_preserve_shape(grid in arb_grid()) {
        for action in PresetAction::ALL {
            let styles = apply_preset(action, &grid);
            prop_assert!(styles.matches_shape(&grid));
            if action != PresetAction::BoldHeaders {
                if let Some(header) = styles.row(0) {
                    prop_assert!(header.iter().all(StyleRecord::is_empty));
                }
            }
        }
    }

    #[test]
    fn prompt_preserves_shape_and_header(instr in arb_instruction(), grid in arb_grid()) {
        if let Some(styles) = parse_prompt(&instr, &grid) {
            prop_assert!(styles.matches_shape(&grid));
            if let Some(header) = styles.row(0) {
                prop_assert!(header.iter().all(StyleRecord::is_empty));
            }
        } else {
            prop_assert!(!instr.to_lowercase().contains("highlight"));
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed scenarios
// ---------------------------------------------------------------------------

/// Header plus 20 data rows.
fn twenty_rows() -> Grid {
    let mut grid = vec![vec![CellValue::from("region"), CellValue::from("revenue")]];
    for i in 1..=20 {
        grid.push(vec![CellValue::from(format!("r{i}")), CellValue::from(i as i64 * 100)]);
    }
    grid
}

#[test]
fn top_five_of_twenty() {
    let styles = highlight("highlight top 5", &twenty_rows());
    assert_eq!(styles.styled_rows(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn top_default_of_twenty() {
    let styles = highlight("highlight top", &twenty_rows());
    assert_eq!(styles.styled_rows(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn bottom_three_of_twenty() {
    let styles = highlight("highlight bottom 3", &twenty_rows());
    assert_eq!(styles.styled_rows(), vec![18, 19, 20]);
}

#[test]
fn default_red_when_no_color_keyword() {
    let styles = highlight("highlight rows", &twenty_rows());
    let cell = styles.get(7, 1).unwrap();
    assert_eq!(cell.background.as_deref(), Some("#fef2f2"));
    assert_eq!(cell.color.as_deref(), Some("#dc2626"));
}

#[test]
fn blue_beats_green() {
    let styles = highlight("highlight blue and green rows", &twenty_rows());
    let cell = styles.get(1, 0).unwrap();
    assert_eq!(cell.background.as_deref(), Some("#eff6ff"));
    assert_eq!(cell.color.as_deref(), Some("#1d4ed8"));
}

#[test]
fn header_only_grid_is_all_empty() {
    let grid = vec![vec![CellValue::from("a"), CellValue::from("b"), CellValue::from("c")]];
    for instr in ["", "highlight", "top 3", "bottom 2 in yellow"] {
        let styles = highlight(instr, &grid);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.row(0).unwrap().len(), 3);
        assert!(styles.is_blank());
    }
}

#[test]
fn style_grid_json_shape() {
    let grid = vec![
        vec![CellValue::from("h")],
        vec![CellValue::from(1i64), CellValue::from(2i64)],
    ];
    let styles = highlight("yellow", &grid);
    let json = serde_json::to_value(&styles).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            [{}],
            [
                {"background": "#fefce8", "color": "#ca8a04"},
                {"background": "#fefce8", "color": "#ca8a04"}
            ]
        ])
    );
}
