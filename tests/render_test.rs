//! End-to-end rendering from block attribute JSON.

use plusnav::{BlockAttributes, render_style};

const FIXTURE: &str = r##"{
    "className": "is-style-priority-nav",
    "priorityNavDropdownBackgroundColor": "#ffffff",
    "priorityNavDropdownItemHoverBackgroundColor": "var:preset|color|accent-1",
    "priorityPlusMenuItemPadding": {
        "top": "var:preset|spacing|20",
        "right": "1rem",
        "bottom": "var:preset|spacing|20",
        "left": "1rem"
    },
    "priorityPlusMenuSubmenuIndent": "1.25rem",
    "priorityNavDropdownStyles": {
        "border": {"color": "#dddddd", "width": "2px"},
        "borderRadius": {"topLeft": "8px", "topRight": "8px"},
        "boxShadow": "0 4px 12px rgba(0, 0, 0, 0.15)"
    }
}"##;

fn render(json: &str) -> String {
    render_style(&BlockAttributes::from_json_str(json).unwrap()).to_inline_style()
}

#[test]
fn test_full_fixture_inline_style() {
    let expected = [
        "--wp--custom--priority-plus-navigation--dropdown--background-color: #ffffff;",
        "--wp--custom--priority-plus-navigation--dropdown--item-hover-background-color: var(--wp--preset--color--accent-1);",
        "--wp--custom--priority-plus-navigation--dropdown--border-color: #dddddd;",
        "--wp--custom--priority-plus-navigation--dropdown--border-width: 2px;",
        "--wp--custom--priority-plus-navigation--dropdown--border-style: solid;",
        "--wp--custom--priority-plus-navigation--dropdown--border-radius: 8px 8px 0 0;",
        "--wp--custom--priority-plus-navigation--dropdown--box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);",
        "--wp--custom--priority-plus-navigation--dropdown--item-padding: var(--wp--preset--spacing--20) 1rem;",
        "--wp--custom--priority-plus-navigation--dropdown--submenu-indent: 1.25rem;",
    ]
    .join(" ");

    assert_eq!(render(FIXTURE), expected);
}

#[test]
fn test_rule_block() {
    let attrs = BlockAttributes::from_json_str(r#"{"priorityPlusMenuSubmenuIndent": "2em"}"#).unwrap();
    assert_eq!(
        render_style(&attrs).to_rule(".wp-block-navigation.is-style-priority-nav"),
        ".wp-block-navigation.is-style-priority-nav { --wp--custom--priority-plus-navigation--dropdown--submenu-indent: 2em; }"
    );
}

#[test]
fn test_unrelated_attributes_render_nothing() {
    assert_eq!(render(r#"{"overlayMenu": "mobile", "layout": {"type": "flex"}}"#), "");
    assert_eq!(render("{}"), "");
}

#[test]
fn test_per_side_border_from_json() {
    let out = render(
        r##"{"priorityNavDropdownStyles": {"border": {
            "top": {"color": "#000"},
            "right": {},
            "left": {"width": "3px", "style": "dashed"}
        }}}"##,
    );
    assert_eq!(
        out,
        "--wp--custom--priority-plus-navigation--dropdown--border-top: 1px solid #000; \
         --wp--custom--priority-plus-navigation--dropdown--border-left: 3px dashed #dddddd;"
    );
}

#[test]
fn test_individual_border_fields() {
    let out = render(r#"{"priorityNavDropdownStyles": {"borderStyle": "dotted"}}"#);
    assert!(out.contains("--dropdown--border-color: #dddddd;"));
    assert!(out.contains("--dropdown--border-width: 1px;"));
    assert!(out.contains("--dropdown--border-style: dotted;"));
}

#[test]
fn test_odd_shapes_degrade_quietly() {
    let out = render(
        r#"{
            "priorityPlusMenuItemPadding": [1, 2],
            "priorityNavDropdownStyles": {"border": "1px solid", "borderRadius": 4},
            "priorityPlusMenuSubmenuIndent": 12
        }"#,
    );
    assert_eq!(
        out,
        "--wp--custom--priority-plus-navigation--dropdown--submenu-indent: 12;"
    );
}

#[test]
fn test_legacy_padding_string() {
    let out = render(r#"{"priorityPlusMenuItemPadding": "var:preset|spacing|40"}"#);
    assert_eq!(
        out,
        "--wp--custom--priority-plus-navigation--dropdown--item-padding: var(--wp--preset--spacing--40);"
    );
}

#[test]
fn test_hostile_values_are_escaped() {
    let out = render(r#"{"priorityNavDropdownStyles": {"boxShadow": "\"><script>alert(1)</script>"}}"#);
    assert!(!out.contains('<'));
    assert!(!out.contains('"'));
    assert!(out.contains("&quot;&gt;&lt;script&gt;"));
}

#[test]
fn test_rule_output_cannot_break_out() {
    let attrs = BlockAttributes::from_json_str(
        r#"{
            "priorityNavDropdownStyles": {
                "boxShadow": "0 0 1px red; } body { display: none",
                "borderColor": "red}</style>"
            },
            "priorityPlusMenuSubmenuIndent": "calc(1rem + var(--x, 'a'))"
        }"#,
    )
    .unwrap();
    let rule = render_style(&attrs).to_rule(".nav");

    // Only the closing brace of the rule itself is unescaped.
    let unescaped_braces = rule
        .char_indices()
        .filter(|&(i, c)| matches!(c, '{' | '}') && !rule[..i].ends_with('\\'))
        .count();
    assert_eq!(unescaped_braces, 2);
    assert!(rule.ends_with("; }"));
    assert!(!rule.contains("</style>"));
    assert!(rule.contains("--dropdown--border-color: red\\}\\3c /style>;"));
    assert!(rule.contains("--dropdown--box-shadow: 0 0 1px red\\; \\} body \\{ display: none;"));
    assert!(rule.contains("--dropdown--submenu-indent: calc(1rem + var(--x, 'a'));"));
    assert!(!rule.contains("&#039;"));
}
