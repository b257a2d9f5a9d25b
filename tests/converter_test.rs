//! Converter behavior through the public API.
//!
//! Each test here mirrors a documented input/output pair for one of the
//! conversion functions.

use plusnav::{
    Border, BorderLine, BorderRadius, RadiusCorners, Side, Spacing, border_radius_to_css,
    border_to_css, build_shorthand, convert_preset_value, padding_to_css,
};

fn set(value: &str) -> Option<String> {
    Some(value.to_string())
}

// ============================================================================
// Preset values
// ============================================================================

#[test]
fn test_preset_reference_is_rewritten() {
    assert_eq!(
        convert_preset_value("var:preset|spacing|30"),
        "var(--wp--preset--spacing--30)"
    );
}

#[test]
fn test_custom_property_reference_passes_through() {
    assert_eq!(convert_preset_value("var(--custom)"), "var(--custom)");
}

#[test]
fn test_literals_pass_through() {
    for literal in ["12px", "", "auto", "calc(1rem + 2px)", "var:preset"] {
        assert_eq!(convert_preset_value(literal), literal);
    }
}

// ============================================================================
// Borders
// ============================================================================

#[test]
fn test_empty_border_is_empty() {
    assert!(border_to_css(&Border::default()).is_empty());
}

#[test]
fn test_flat_border_emits_three_declarations() {
    let border = Border::flat(BorderLine {
        color: set("#fff"),
        ..Default::default()
    });
    let decls: Vec<String> = border_to_css(&border).iter().map(|d| d.to_string()).collect();

    assert_eq!(
        decls,
        [
            "--wp--custom--priority-plus-navigation--dropdown--border-color: #fff",
            "--wp--custom--priority-plus-navigation--dropdown--border-width: 1px",
            "--wp--custom--priority-plus-navigation--dropdown--border-style: solid",
        ]
    );
}

#[test]
fn test_per_side_border_fills_defaults() {
    let border = Border {
        top: Some(BorderLine {
            color: set("#000"),
            ..Default::default()
        }),
        ..Default::default()
    };
    let decls = border_to_css(&border);

    assert_eq!(decls.len(), 1);
    assert_eq!(
        decls[0].to_string(),
        format!("{}: 1px solid #000", Side::Top.border_property())
    );
}

#[test]
fn test_all_sides_in_order() {
    let line = |w: &str| {
        Some(BorderLine {
            width: set(w),
            style: set("dotted"),
            color: set("red"),
        })
    };
    let border = Border {
        top: line("1px"),
        right: line("2px"),
        bottom: line("3px"),
        left: line("4px"),
        ..Default::default()
    };
    let values: Vec<_> = border_to_css(&border).into_iter().map(|d| d.value).collect();

    assert_eq!(
        values,
        [
            "1px dotted red",
            "2px dotted red",
            "3px dotted red",
            "4px dotted red"
        ]
    );
}

// ============================================================================
// Border radius
// ============================================================================

#[test]
fn test_radius_string_passthrough() {
    assert_eq!(border_radius_to_css(&BorderRadius::from("4px")), "4px");
}

#[test]
fn test_radius_uniform_corners() {
    let corners = RadiusCorners {
        top_left: set("4px"),
        top_right: set("4px"),
        bottom_right: set("4px"),
        bottom_left: set("4px"),
    };
    assert_eq!(border_radius_to_css(&corners.into()), "4px");
}

#[test]
fn test_radius_mixed_corners() {
    let corners = RadiusCorners {
        top_left: set("4px"),
        bottom_right: set("2px"),
        ..Default::default()
    };
    assert_eq!(border_radius_to_css(&corners.into()), "4px 0 2px 0");
}

// ============================================================================
// Padding and shorthand
// ============================================================================

#[test]
fn test_padding_uniform() {
    let spacing = Spacing {
        top: set("10px"),
        right: set("10px"),
        bottom: set("10px"),
        left: set("10px"),
    };
    assert_eq!(padding_to_css(&spacing), "10px");
}

#[test]
fn test_padding_vertical_pair() {
    let spacing = Spacing {
        top: set("10px"),
        bottom: set("10px"),
        ..Default::default()
    };
    assert_eq!(padding_to_css(&spacing), "10px 0");
}

#[test]
fn test_padding_preset_top() {
    let spacing = Spacing {
        top: set("var:preset|spacing|30"),
        ..Default::default()
    };
    assert_eq!(
        padding_to_css(&spacing),
        "var(--wp--preset--spacing--30) 0 0 0"
    );
}

#[test]
fn test_padding_empty() {
    assert_eq!(padding_to_css(&Spacing::default()), "");
}

#[test]
fn test_shorthand_single_value_is_stable() {
    let once = build_shorthand("2em", "2em", "2em", "2em");
    assert_eq!(once, "2em");
    assert_eq!(build_shorthand(&once, &once, &once, &once), once);
}
