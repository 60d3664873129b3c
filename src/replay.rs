//! Scripted replay of environment events
//!
//! A replay script is a YAML document describing an optional starting window
//! and a list of steps. Each step is fed to a headless [`Environment`] and a
//! [`LayoutSnapshot`] is recorded after it, which makes whole interaction
//! sequences reproducible without a window.
//!
//! ```yaml
//! window: { width: 375, height: 700 }
//! steps:
//!   - resize: { width: 1280, height: 800 }
//!   - scroll: 240
//!   - frame
//!   - pointer_down: { x: 20, y: 80 }
//!   - pointer_move: { x: 20, y: 120 }
//!   - pointer_up: { x: 20, y: 120 }
//!   - toggle_panel
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::coordinator::Coordinator;
use crate::env::{EnvEvent, Environment, Key};
use crate::geometry::Point;
use crate::messages::{LayoutMsg, Msg};
use crate::tracing::LayoutSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Resize(WindowSize),
    Scroll(i64),
    /// Run the queued animation frame callbacks
    Frame,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Escape,
    TogglePanel,
    ToggleExpanded,
    SetHeaderHeight(i32),
    SetPanelHeight(i32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Starting window; `None` starts without an observable window
    #[serde(default)]
    pub window: Option<WindowSize>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

pub fn parse_script(source: &str) -> Result<Script> {
    serde_yaml::from_str(source).context("Failed to parse replay script")
}

pub fn load_script(path: &Path) -> Result<Script> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script {}", path.display()))?;
    parse_script(&source)
}

/// Run a script and return the snapshot recorded after each step
pub fn run_script(script: &Script, config: LayoutConfig) -> Vec<LayoutSnapshot> {
    let env = match script.window {
        Some(size) => Environment::with_window(size.width, size.height),
        None => Environment::headless(),
    };
    let coordinator = Coordinator::attach(&env, config);

    script
        .steps
        .iter()
        .map(|step| {
            apply_step(&coordinator, *step);
            coordinator.snapshot()
        })
        .collect()
}

fn apply_step(coordinator: &Coordinator, step: ScriptStep) {
    let env = coordinator.env();
    match step {
        ScriptStep::Resize(size) => env.emit(EnvEvent::Resize {
            width: size.width,
            height: size.height,
        }),
        ScriptStep::Scroll(offset) => env.emit(EnvEvent::Scroll { offset }),
        ScriptStep::Frame => {
            let ran = env.run_animation_frame();
            tracing::trace!(ran, "replay frame");
        }
        ScriptStep::PointerDown(position) => env.emit(EnvEvent::PointerDown { position }),
        ScriptStep::PointerMove(position) => env.emit(EnvEvent::PointerMove { position }),
        ScriptStep::PointerUp(position) => env.emit(EnvEvent::PointerUp { position }),
        ScriptStep::Escape => env.emit(EnvEvent::KeyDown(Key::Escape)),
        ScriptStep::TogglePanel => coordinator.dispatch(LayoutMsg::ToggleBottomPanel.into()),
        ScriptStep::ToggleExpanded => coordinator.dispatch(LayoutMsg::ToggleMainExpanded.into()),
        ScriptStep::SetHeaderHeight(height) => {
            coordinator.dispatch(Msg::Layout(LayoutMsg::SetHeaderHeight(height)))
        }
        ScriptStep::SetPanelHeight(height) => {
            coordinator.dispatch(Msg::Layout(LayoutMsg::SetBottomPanelHeight(height)))
        }
    }
}
