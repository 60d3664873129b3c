use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window};

use strata::composer::HitTarget;
use strata::config::LayoutConfig;
use strata::coordinator::Coordinator;
use strata::env::{EnvEvent, Environment};
use strata::geometry::Point;
use strata::model::RegionId;

use super::input::{key_action, KeyAction};
use crate::view::Renderer;

/// Pixels scrolled per wheel line
const LINE_SCROLL: f64 = 40.0;

pub struct App {
    env: Environment,
    coordinator: Coordinator,
    initial_size: (u32, u32),
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    cursor: Point,
    scroll_offset: i64,
}

impl App {
    /// Start without an observable window; the first `Resized` hydrates the
    /// viewport once the window exists.
    pub fn new(window_width: u32, window_height: u32, config: LayoutConfig) -> Self {
        let env = Environment::headless();
        let coordinator = Coordinator::attach(&env, config);

        Self {
            env,
            coordinator,
            initial_size: (window_width, window_height),
            renderer: None,
            window: None,
            context: None,
            cursor: Point::default(),
            scroll_offset: 0,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.initial_size;
        let window_attributes = Window::default_attributes()
            .with_title("Strata")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let logical: LogicalSize<u32> = window.inner_size().to_logical(window.scale_factor());
        self.window = Some(window);
        self.context = Some(context);
        self.renderer = Some(renderer);

        self.env.emit(EnvEvent::Resize {
            width: logical.width,
            height: logical.height,
        });
        Ok(())
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }

    fn to_logical_point(&self, position: PhysicalPosition<f64>) -> Point {
        let scale = self.scale_factor();
        Point::from_f64(position.x / scale, position.y / scale)
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                let scale = self.scale_factor();
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height, scale) {
                        tracing::error!("{}", e);
                    }
                }
                let logical: LogicalSize<u32> = size.to_logical(scale);
                self.env.emit(EnvEvent::Resize {
                    width: logical.width,
                    height: logical.height,
                });
                self.clamp_scroll();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.to_logical_point(*position);
                self.env.emit(EnvEvent::PointerMove {
                    position: self.cursor,
                });
                self.update_cursor_icon();
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let position = self.cursor;
                match state {
                    ElementState::Pressed => self.env.emit(EnvEvent::PointerDown { position }),
                    ElementState::Released => self.env.emit(EnvEvent::PointerUp { position }),
                }
                self.clamp_scroll();
                self.update_cursor_icon();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64 * LINE_SCROLL,
                    MouseScrollDelta::PixelDelta(pos) => pos.y / self.scale_factor(),
                };
                let offset = self.scroll_offset - dy.round() as i64;
                self.scroll_offset = self.coordinator.plan().clamp_scroll(offset);
                self.env.emit(EnvEvent::Scroll {
                    offset: self.scroll_offset,
                });
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match key_action(&event.logical_key) {
                    Some(KeyAction::Emit(key)) => self.env.emit(EnvEvent::KeyDown(key)),
                    Some(KeyAction::Dispatch(msg)) => {
                        self.coordinator.dispatch(msg);
                        self.clamp_scroll();
                    }
                    None => {}
                }
            }

            _ => {}
        }
    }

    /// Keep the page offset inside the content after the layout changed
    fn clamp_scroll(&mut self) {
        let clamped = self.coordinator.plan().clamp_scroll(self.scroll_offset);
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            self.env.emit(EnvEvent::Scroll {
                offset: self.scroll_offset,
            });
        }
    }

    fn update_cursor_icon(&self) {
        let Some(window) = &self.window else { return };

        let dragging = RegionId::ALL
            .into_iter()
            .any(|region| self.coordinator.is_capturing(region));
        let icon = if dragging {
            CursorIcon::RowResize
        } else {
            match self.coordinator.plan().hit_test(self.cursor) {
                Some(HitTarget::ResizeHandle(_)) => CursorIcon::RowResize,
                Some(_) => CursorIcon::Pointer,
                None => CursorIcon::Default,
            }
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) -> Result<()> {
        // Frame callbacks run before painting, like requestAnimationFrame
        self.env.run_animation_frame();
        self.coordinator.take_redraw();

        let plan = self.coordinator.plan();
        let dragging = self.coordinator.snapshot().dragging;
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&plan, &dragging)?;
        }
        Ok(())
    }

    fn request_redraw_if_needed(&self) {
        let pending = self.env.pending_frames() > 0;
        if self.coordinator.take_redraw() || pending {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {}", e);
                }
            }
            event => self.handle_event(&event),
        }

        self.request_redraw_if_needed();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        self.request_redraw_if_needed();
    }
}
