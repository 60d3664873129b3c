//! Tests for breakpoint classification and the layout store's reaction to it

mod common;

use common::test_model;
use strata::commands::Cmd;
use strata::messages::{LayoutMsg, Msg};
use strata::model::{classify, BreakpointClass, ViewportClassifier};
use strata::update::update;

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_reclassifying_same_width_is_idempotent() {
    let mut classifier = ViewportClassifier::new(Some((900, 600)));
    for _ in 0..3 {
        assert!(classifier.observe(900, 600).is_none());
        assert_eq!(classifier.class(), BreakpointClass::Tablet);
    }
    assert_eq!(classify(900), classifier.class());
}

#[test]
fn test_every_width_maps_to_one_class() {
    for width in (0..2000).step_by(7) {
        let class = classify(width);
        let expected = if width < 768 {
            BreakpointClass::Mobile
        } else if width < 1024 {
            BreakpointClass::Tablet
        } else {
            BreakpointClass::Desktop
        };
        assert_eq!(class, expected, "width {}", width);
    }
}

// ============================================================================
// Store reaction
// ============================================================================

#[test]
fn test_initial_panel_visibility_follows_class() {
    assert!(!test_model(375).layout.show_bottom_panel);
    assert!(test_model(900).layout.show_bottom_panel);
    assert!(test_model(1280).layout.show_bottom_panel);
}

#[test]
fn test_shrinking_to_mobile_hides_panel() {
    let mut model = test_model(1280);
    update(&mut model, Msg::resize(600, 800));

    assert_eq!(model.breakpoint(), BreakpointClass::Mobile);
    assert!(!model.layout.show_bottom_panel);
}

#[test]
fn test_growing_from_mobile_shows_panel_at_stored_height() {
    let mut model = test_model(375);
    update(
        &mut model,
        Msg::Layout(LayoutMsg::SetBottomPanelHeight(320)),
    );
    update(&mut model, Msg::resize(1280, 800));

    assert!(model.layout.show_bottom_panel);
    assert_eq!(model.regions.bottom_panel.size(), 320);
}

#[test]
fn test_desktop_tablet_desktop_keeps_panel_shown() {
    let mut model = test_model(1280);
    update(&mut model, Msg::resize(900, 800));
    assert!(model.layout.show_bottom_panel);
    update(&mut model, Msg::resize(1280, 800));
    assert!(model.layout.show_bottom_panel);
}

#[test]
fn test_same_class_resize_keeps_manual_toggle() {
    let mut model = test_model(1280);
    update(&mut model, Msg::Layout(LayoutMsg::ToggleBottomPanel));
    assert!(!model.layout.show_bottom_panel);

    update(&mut model, Msg::resize(1100, 800));
    assert!(!model.layout.show_bottom_panel);
}

#[test]
fn test_resize_always_requests_redraw() {
    let mut model = test_model(1280);
    let cmd = update(&mut model, Msg::resize(1200, 700));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.viewport.height(), 700);
}
