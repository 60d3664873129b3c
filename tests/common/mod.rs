//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use strata::config::LayoutConfig;
use strata::coordinator::Coordinator;
use strata::env::{EnvEvent, Environment};
use strata::geometry::Point;
use strata::model::AppModel;

pub const DESKTOP: (u32, u32) = (1280, 800);
pub const TABLET: (u32, u32) = (900, 800);
pub const MOBILE: (u32, u32) = (375, 700);

/// Create a model with default config at the given window width
pub fn test_model(width: u32) -> AppModel {
    AppModel::new(LayoutConfig::default(), Some((width, 800)))
}

/// Attach a coordinator to a fresh environment of the given size
pub fn attach(size: (u32, u32)) -> (Environment, Coordinator) {
    let env = Environment::with_window(size.0, size.1);
    let coordinator = Coordinator::attach(&env, LayoutConfig::default());
    (env, coordinator)
}

/// Emit a scroll offset and run the animation frame it schedules
pub fn scroll_and_frame(env: &Environment, offset: i64) {
    env.emit(EnvEvent::Scroll { offset });
    env.run_animation_frame();
}

/// Press at `from`, move to `to`, and optionally release there
pub fn drag(env: &Environment, from: Point, to: Point, release: bool) {
    env.emit(EnvEvent::PointerDown { position: from });
    env.emit(EnvEvent::PointerMove { position: to });
    if release {
        env.emit(EnvEvent::PointerUp { position: to });
    }
}
