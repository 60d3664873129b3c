//! Tests for the drag-resize controller and its update handlers

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::test_model;
use strata::commands::Cmd;
use strata::geometry::Point;
use strata::messages::{LayoutMsg, Msg, ResizeMsg};
use strata::model::{
    DragResizeController, RegionId, ResizeAxis, ResizeConfig, ResizeEdge,
};
use strata::update::update;

fn recording(config: ResizeConfig) -> (DragResizeController, Rc<RefCell<Vec<i32>>>) {
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reports);
    let controller =
        DragResizeController::new(config).with_on_resize(move |size| sink.borrow_mut().push(size));
    (controller, reports)
}

// ============================================================================
// Controller
// ============================================================================

#[test]
fn test_top_edge_grows_when_dragged_up() {
    let config =
        ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Top, 200).with_bounds(100, 600);
    let (mut controller, reports) = recording(config);

    controller.pointer_down(Point::new(0, 500));
    assert_eq!(controller.pointer_move(Point::new(0, 450)), Some(250));
    assert_eq!(controller.pointer_move(Point::new(0, 560)), Some(140));
    assert!(controller.pointer_up());

    assert_eq!(*reports.borrow(), vec![250, 140]);
    assert_eq!(controller.size(), 140);
}

#[test]
fn test_bottom_edge_grows_when_dragged_down() {
    let config =
        ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Bottom, 80).with_bounds(48, 160);
    let (mut controller, _) = recording(config);

    controller.pointer_down(Point::new(10, 80));
    assert_eq!(controller.pointer_move(Point::new(10, 110)), Some(110));
}

#[test]
fn test_horizontal_axis_reads_x() {
    let config =
        ResizeConfig::new(ResizeAxis::Horizontal, ResizeEdge::Left, 300).with_bounds(100, 500);
    let (mut controller, _) = recording(config);

    controller.pointer_down(Point::new(300, 0));
    // Moving only vertically changes nothing on a horizontal axis
    assert_eq!(controller.pointer_move(Point::new(300, 400)), Some(300));
    assert_eq!(controller.pointer_move(Point::new(250, 400)), Some(350));
}

#[test]
fn test_clamped_at_both_bounds() {
    let config =
        ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Top, 200).with_bounds(100, 600);
    let (mut controller, reports) = recording(config);

    controller.pointer_down(Point::new(0, 600));
    controller.pointer_move(Point::new(0, -1000));
    controller.pointer_move(Point::new(0, 5000));

    assert_eq!(*reports.borrow(), vec![600, 100]);
}

#[test]
fn test_bottom_edge_clamp_scenario() {
    let config =
        ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Bottom, 200).with_bounds(100, 600);
    let (mut controller, reports) = recording(config);

    controller.pointer_down(Point::new(0, 400));
    assert_eq!(controller.pointer_move(Point::new(0, 350)), Some(150));
    assert_eq!(controller.pointer_move(Point::new(0, 900)), Some(600));
    assert_eq!(*reports.borrow(), vec![150, 600]);
}

#[test]
fn test_no_reports_after_pointer_up() {
    let config = ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Top, 200);
    let (mut controller, reports) = recording(config);

    controller.pointer_down(Point::new(0, 500));
    controller.pointer_move(Point::new(0, 480));
    controller.pointer_up();
    assert_eq!(controller.pointer_move(Point::new(0, 100)), None);

    assert_eq!(*reports.borrow(), vec![220]);
    assert_eq!(controller.size(), 220);
}

#[test]
fn test_new_drag_starts_from_current_size() {
    let config = ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Bottom, 200);
    let (mut controller, _) = recording(config);

    controller.pointer_down(Point::new(0, 0));
    controller.pointer_move(Point::new(0, 50));
    controller.pointer_up();

    controller.pointer_down(Point::new(0, 500));
    let session = *controller.session().unwrap();
    assert_eq!(session.start_size, 250);
    assert_eq!(session.start_coord, 500);
}

// ============================================================================
// Update handlers
// ============================================================================

#[test]
fn test_begin_captures_pointer() {
    let mut model = test_model(1280);
    let cmd = update(
        &mut model,
        Msg::Resize(ResizeMsg::Begin {
            region: RegionId::Header,
            position: Point::new(100, 80),
        }),
    );

    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::CapturePointer(RegionId::Header),
            Cmd::Redraw
        ]))
    );
    assert!(model.regions.header.is_dragging());
}

#[test]
fn test_begin_on_hidden_panel_is_ignored() {
    let mut model = test_model(375);
    let cmd = update(
        &mut model,
        Msg::Resize(ResizeMsg::Begin {
            region: RegionId::BottomPanel,
            position: Point::new(10, 500),
        }),
    );
    assert_eq!(cmd, None);
    assert!(!model.regions.bottom_panel.is_dragging());
}

#[test]
fn test_drag_reports_reach_the_store() {
    let mut model = test_model(1280);
    update(
        &mut model,
        ResizeMsg::Begin {
            region: RegionId::BottomPanel,
            position: Point::new(0, 600),
        }
        .into(),
    );
    update(
        &mut model,
        ResizeMsg::Drag {
            region: RegionId::BottomPanel,
            position: Point::new(0, 480),
        }
        .into(),
    );

    assert_eq!(model.regions.bottom_panel.size(), 320);
    assert_eq!(model.layout.bottom_panel_height, 320);

    let cmd = update(
        &mut model,
        ResizeMsg::End {
            region: RegionId::BottomPanel,
        }
        .into(),
    );
    assert_eq!(cmd, Some(Cmd::ReleasePointer(RegionId::BottomPanel)));
    assert_eq!(model.layout.bottom_panel_height, 320);
}

#[test]
fn test_cancel_writes_restored_size_back() {
    let mut model = test_model(1280);
    update(
        &mut model,
        ResizeMsg::Begin {
            region: RegionId::Header,
            position: Point::new(0, 80),
        }
        .into(),
    );
    update(
        &mut model,
        ResizeMsg::Drag {
            region: RegionId::Header,
            position: Point::new(0, 140),
        }
        .into(),
    );
    assert_eq!(model.layout.header_height, 140);

    let cmd = update(
        &mut model,
        ResizeMsg::Cancel {
            region: RegionId::Header,
        }
        .into(),
    );
    assert_eq!(cmd, Some(Cmd::ReleasePointer(RegionId::Header)));
    assert_eq!(model.regions.header.size(), 80);
    assert_eq!(model.layout.header_height, 80);
}

#[test]
fn test_set_height_during_drag_leaves_visible_size() {
    let mut model = test_model(1280);
    update(
        &mut model,
        ResizeMsg::Begin {
            region: RegionId::Header,
            position: Point::new(0, 80),
        }
        .into(),
    );
    update(&mut model, Msg::Layout(LayoutMsg::SetHeaderHeight(150)));

    assert_eq!(model.layout.header_height, 150);
    assert_eq!(model.regions.header.size(), 80);
    assert!(model.regions.header.is_dragging());
}

#[test]
fn test_hiding_panel_mid_drag_releases_pointer() {
    let mut model = test_model(1280);
    update(
        &mut model,
        ResizeMsg::Begin {
            region: RegionId::BottomPanel,
            position: Point::new(0, 600),
        }
        .into(),
    );

    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ToggleBottomPanel));
    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::ReleasePointer(RegionId::BottomPanel)
        ]))
    );
    assert!(!model.regions.bottom_panel.is_dragging());
}
