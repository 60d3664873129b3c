//! Keyboard input mapping
//!
//! Escape goes through the environment so an active drag capture can cancel.
//! `B` and `E` dispatch layout actions directly.

use winit::keyboard::{Key, NamedKey};

use strata::env;
use strata::messages::{LayoutMsg, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to environment listeners
    Emit(env::Key),
    /// Run through the update loop
    Dispatch(Msg),
}

pub fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Emit(env::Key::Escape)),
        Key::Character(s) => match s.as_str() {
            "b" | "B" => Some(KeyAction::Dispatch(LayoutMsg::ToggleBottomPanel.into())),
            "e" | "E" => Some(KeyAction::Dispatch(LayoutMsg::ToggleMainExpanded.into())),
            other => other
                .chars()
                .next()
                .map(|c| KeyAction::Emit(env::Key::Character(c))),
        },
        _ => None,
    }
}
