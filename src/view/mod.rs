//! View module - paints a [`LayoutPlan`] into a softbuffer surface
//!
//! The renderer draws flat rectangles only: header, cards, bottom panel,
//! buttons and resize handles.

pub mod frame;

pub use frame::Frame;

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use strata::composer::LayoutPlan;
use strata::model::RegionId;

const BACKGROUND: u32 = 0xFF1E1F22;
const HEADER: u32 = 0xFF2B2D30;
const HEADER_COLLAPSED: u32 = 0xFF25272A;
const CARD: u32 = 0xFF393B40;
const CARD_BORDER: u32 = 0xFF4E5157;
const PANEL: u32 = 0xFF2B2D30;
const HANDLE: u32 = 0xFF43454A;
const HANDLE_ACTIVE: u32 = 0xFF3574F0;
const BUTTON: u32 = 0xFF3574F0;
const TOGGLE: u32 = 0xFF4E5157;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    scale_factor: f64,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(size.width), non_zero(size.height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            width: size.width,
            height: size.height,
            scale_factor,
        })
    }

    /// Track a new physical window size and scale factor
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) -> Result<()> {
        self.scale_factor = scale_factor;
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    pub fn render(&mut self, plan: &LayoutPlan, dragging: &[RegionId]) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(
                &mut buffer,
                self.width as usize,
                self.height as usize,
                self.scale_factor,
            );
            paint(&mut frame, plan, dragging);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn paint(frame: &mut Frame, plan: &LayoutPlan, dragging: &[RegionId]) {
    frame.clear(BACKGROUND);

    // Main content first; the sticky header and fixed panel sit on top
    for card in &plan.main.cards {
        frame.fill_rect(*card, CARD);
        frame.stroke_rect(*card, CARD_BORDER);
    }
    if let Some(toggle) = plan.main.expand_toggle {
        frame.fill_rect(toggle, TOGGLE);
    }

    let header_color = if plan.header.collapsed {
        HEADER_COLLAPSED
    } else {
        HEADER
    };
    frame.fill_rect(plan.header.rect, header_color);

    if let Some(panel) = &plan.bottom_panel {
        frame.fill_rect(panel.rect, PANEL);
        if let Some(close) = panel.close_button {
            frame.fill_rect(close, BUTTON);
        }
    }

    for region in RegionId::ALL {
        if let Some(handle) = plan.handle(region) {
            let color = if dragging.contains(&region) {
                HANDLE_ACTIVE
            } else {
                HANDLE
            };
            frame.fill_rect(handle, color);
        }
    }

    if let Some(button) = plan.floating_button {
        frame.fill_rect(button, BUTTON);
    }
}
