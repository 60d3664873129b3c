//! Layout composition - which regions mount and where
//!
//! The composer is the only consumer of all core state. It reads the model and
//! produces a [`LayoutPlan`]: rectangles for the header, main area, bottom
//! panel and floating button, the resize-handle strips, and a hit-test over
//! them. It never mutates the model.

use crate::geometry::{Point, Rect};
use crate::model::{AppModel, BreakpointClass, RegionId};

/// Thickness of a resize handle strip, centred on the dragged edge
pub const HANDLE_THICKNESS: i32 = 4;
pub const FLOATING_BUTTON_SIZE: i32 = 56;
pub const FLOATING_BUTTON_MARGIN: i32 = 16;
pub const CLOSE_BUTTON_SIZE: i32 = 24;
pub const CLOSE_BUTTON_MARGIN: i32 = 12;

/// Number of cards in the full card grid
pub const CARD_COUNT: usize = 15;
/// Number of cards in the mobile summary
pub const SUMMARY_CARD_COUNT: usize = 3;

const CONTENT_PADDING: i32 = 16;
const CARD_GAP: i32 = 16;
const CARD_HEIGHT: i32 = 140;
const SUMMARY_CARD_HEIGHT: i32 = 64;
const TOGGLE_HEIGHT: i32 = 40;

/// First width with four card columns
const WIDE_DESKTOP_MIN_WIDTH: u32 = 1280;

/// Presentation mode of the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMode {
    /// Mobile, collapsed: a few summary cards and an "expand" toggle
    Summary,
    /// Full card grid (desktop, or mobile expanded with a "back" toggle)
    Cards,
    /// Tablet: full card grid in its own scroll container
    IndependentScroll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    pub rect: Rect,
    pub collapsed: bool,
    pub handle: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainPlan {
    pub rect: Rect,
    pub mode: MainMode,
    pub columns: u32,
    /// Space reserved under the content for the fixed bottom panel
    pub bottom_padding: i32,
    /// Card rectangles in viewport coordinates (already scrolled)
    pub cards: Vec<Rect>,
    /// Mobile-only expand / back-to-summary toggle
    pub expand_toggle: Option<Rect>,
    /// Total scrollable content height
    pub content_height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomPanelPlan {
    pub rect: Rect,
    pub handle: Rect,
    /// Mobile-only close button
    pub close_button: Option<Rect>,
}

/// Everything the presentation layer needs to mount the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub breakpoint: BreakpointClass,
    pub viewport: Rect,
    pub header: HeaderPlan,
    pub main: MainPlan,
    pub bottom_panel: Option<BottomPanelPlan>,
    pub floating_button: Option<Rect>,
}

/// Interactive element under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ResizeHandle(RegionId),
    FloatingButton,
    ClosePanel,
    ToggleExpanded,
}

/// Card grid columns for a viewport width
pub fn card_columns(width: u32) -> u32 {
    match BreakpointClass::from_width(width) {
        BreakpointClass::Mobile => 1,
        BreakpointClass::Tablet => 2,
        BreakpointClass::Desktop if width < WIDE_DESKTOP_MIN_WIDTH => 3,
        BreakpointClass::Desktop => 4,
    }
}

/// Horizontal handle strip straddling the edge at `y`
fn edge_handle(y: i32, width: i32) -> Rect {
    Rect::new(0, y - HANDLE_THICKNESS / 2, width, HANDLE_THICKNESS)
}

/// Compose the page for the current model
pub fn compose(model: &AppModel) -> LayoutPlan {
    let width = model.viewport.width() as i32;
    let height = model.viewport.height() as i32;
    let breakpoint = model.breakpoint();

    let header = compose_header(model, width);
    let bottom_panel = compose_bottom_panel(model, breakpoint, width, height);
    // Reserved on every breakpoint, tablet included, so the last cards stay
    // reachable above the fixed panel
    let bottom_padding = bottom_panel.as_ref().map_or(0, |panel| panel.rect.height);

    let main_rect = Rect::new(
        0,
        header.rect.height,
        width,
        (height - header.rect.height).max(0),
    );
    let main = compose_main(model, breakpoint, main_rect, bottom_padding);

    let floating_button = (breakpoint.is_mobile() && !model.layout.show_bottom_panel).then(|| {
        Rect::new(
            width - FLOATING_BUTTON_MARGIN - FLOATING_BUTTON_SIZE,
            height - FLOATING_BUTTON_MARGIN - FLOATING_BUTTON_SIZE,
            FLOATING_BUTTON_SIZE,
            FLOATING_BUTTON_SIZE,
        )
    });

    LayoutPlan {
        breakpoint,
        viewport: Rect::new(0, 0, width, height),
        header,
        main,
        bottom_panel,
        floating_button,
    }
}

fn compose_header(model: &AppModel, width: i32) -> HeaderPlan {
    let collapsed = model.header_collapsed();
    let size = model.regions.header.size();
    let height = if collapsed {
        size.min(model.config.collapsed_header_height)
    } else {
        size
    };

    let rect = Rect::new(0, 0, width, height);
    HeaderPlan {
        rect,
        collapsed,
        handle: edge_handle(rect.bottom(), width),
    }
}

fn compose_bottom_panel(
    model: &AppModel,
    breakpoint: BreakpointClass,
    width: i32,
    height: i32,
) -> Option<BottomPanelPlan> {
    if !model.layout.show_bottom_panel {
        return None;
    }

    // Fixed to the viewport bottom on every breakpoint
    let size = model.regions.bottom_panel.size();
    let rect = Rect::new(0, height - size, width, size);

    let close_button = breakpoint.is_mobile().then(|| {
        Rect::new(
            rect.right() - CLOSE_BUTTON_MARGIN - CLOSE_BUTTON_SIZE,
            rect.y + CLOSE_BUTTON_MARGIN,
            CLOSE_BUTTON_SIZE,
            CLOSE_BUTTON_SIZE,
        )
    });

    Some(BottomPanelPlan {
        rect,
        handle: edge_handle(rect.y, width),
        close_button,
    })
}

fn compose_main(
    model: &AppModel,
    breakpoint: BreakpointClass,
    rect: Rect,
    bottom_padding: i32,
) -> MainPlan {
    let mode = match breakpoint {
        BreakpointClass::Mobile if model.layout.is_main_expanded(breakpoint) => MainMode::Cards,
        BreakpointClass::Mobile => MainMode::Summary,
        BreakpointClass::Tablet => MainMode::IndependentScroll,
        BreakpointClass::Desktop => MainMode::Cards,
    };
    let columns = match mode {
        MainMode::Summary => 1,
        _ => card_columns(model.viewport.width()),
    };

    // Content scrolls under the sticky header
    let origin_y = rect.y - model.scroll.position() as i32;
    let inner_width = (rect.width - 2 * CONTENT_PADDING).max(0);

    let (count, card_height) = match mode {
        MainMode::Summary => (SUMMARY_CARD_COUNT, SUMMARY_CARD_HEIGHT),
        _ => (CARD_COUNT, CARD_HEIGHT),
    };
    let card_width = (inner_width - (columns as i32 - 1) * CARD_GAP) / columns as i32;

    let cards: Vec<Rect> = (0..count)
        .map(|index| {
            let column = (index as u32 % columns) as i32;
            let row = (index as u32 / columns) as i32;
            Rect::new(
                rect.x + CONTENT_PADDING + column * (card_width + CARD_GAP),
                origin_y + CONTENT_PADDING + row * (card_height + CARD_GAP),
                card_width,
                card_height,
            )
        })
        .collect();

    let mut content_bottom = cards
        .last()
        .map_or(origin_y + CONTENT_PADDING, |card| card.bottom());

    let expand_toggle = breakpoint.is_mobile().then(|| {
        let toggle = Rect::new(
            rect.x + CONTENT_PADDING,
            content_bottom + CARD_GAP,
            inner_width,
            TOGGLE_HEIGHT,
        );
        content_bottom = toggle.bottom();
        toggle
    });

    let content_height = content_bottom - origin_y + CONTENT_PADDING + bottom_padding;

    MainPlan {
        rect,
        mode,
        columns,
        bottom_padding,
        cards,
        expand_toggle,
        content_height,
    }
}

impl LayoutPlan {
    /// Handle strip for a region, if the region is mounted and resizable
    ///
    /// A collapsed header offers no handle: its drawn height no longer
    /// follows the controller's size.
    pub fn handle(&self, region: RegionId) -> Option<Rect> {
        match region {
            RegionId::Header => (!self.header.collapsed).then_some(self.header.handle),
            RegionId::BottomPanel => self.bottom_panel.as_ref().map(|panel| panel.handle),
        }
    }

    /// Largest scroll offset the page content allows
    pub fn max_scroll(&self) -> i64 {
        (self.main.content_height - self.main.rect.height).max(0) as i64
    }

    /// Pull a page offset back inside `[0, max_scroll]`
    pub fn clamp_scroll(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_scroll())
    }

    /// Highest-priority interactive element under `point`
    ///
    /// Priority: floating button, panel close button, resize handles,
    /// expand toggle.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self
            .floating_button
            .is_some_and(|button| button.contains(point))
        {
            return Some(HitTarget::FloatingButton);
        }

        if let Some(panel) = &self.bottom_panel {
            if panel.close_button.is_some_and(|button| button.contains(point)) {
                return Some(HitTarget::ClosePanel);
            }
            if panel.handle.contains(point) {
                return Some(HitTarget::ResizeHandle(RegionId::BottomPanel));
            }
        }

        if self
            .handle(RegionId::Header)
            .is_some_and(|handle| handle.contains(point))
        {
            return Some(HitTarget::ResizeHandle(RegionId::Header));
        }

        // The toggle is only reachable through the visible part of the main area
        let covered = self
            .bottom_panel
            .as_ref()
            .is_some_and(|panel| panel.rect.contains(point));
        if !covered
            && self.main.rect.contains(point)
            && self
                .main
                .expand_toggle
                .is_some_and(|toggle| toggle.contains(point))
        {
            return Some(HitTarget::ToggleExpanded);
        }

        None
    }
}
