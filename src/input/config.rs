//! Desktop keyboard bindings emulating the two-joystick cabinet.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::events::{AxisButton, Hand};

const CONFIG_PATH: &str = "config/controls.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawControlsConfig {
    #[serde(default)]
    left: RawHandSection,
    #[serde(default)]
    right: RawHandSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawHandSection {
    a: Option<String>,
    x: Option<String>,
    i: Option<String>,
    s: Option<String>,
    w: Option<String>,
    prev: Option<String>,
    next: Option<String>,
}

/// Key bindings for one hand's button cluster and browse axis.
#[derive(Debug, Clone)]
pub struct HandBindings {
    pub buttons: [(AxisButton, KeyCode); 5],
    pub prev: KeyCode,
    pub next: KeyCode,
}

/// Keyboard emulation map for both hands.
#[derive(Resource, Debug, Clone)]
pub struct ControlsConfig {
    left: HandBindings,
    right: HandBindings,
}

impl ControlsConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawControlsConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawControlsConfig::default().into()
                }
            },
            Err(_) => RawControlsConfig::default().into(),
        }
    }

    pub fn hand(&self, hand: Hand) -> &HandBindings {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        RawControlsConfig::default().into()
    }
}

impl From<RawControlsConfig> for ControlsConfig {
    fn from(value: RawControlsConfig) -> Self {
        Self {
            left: resolve_hand(Hand::Left, &value.left),
            right: resolve_hand(Hand::Right, &value.right),
        }
    }
}

fn resolve_hand(hand: Hand, raw: &RawHandSection) -> HandBindings {
    let button_entries = [
        (AxisButton::A, &raw.a),
        (AxisButton::X, &raw.x),
        (AxisButton::I, &raw.i),
        (AxisButton::S, &raw.s),
        (AxisButton::W, &raw.w),
    ];

    let mut buttons = [(AxisButton::A, KeyCode::KeyA); 5];
    for (slot, (button, name)) in buttons.iter_mut().zip(button_entries) {
        *slot = (button, resolve_key(hand, button.label(), name));
    }

    HandBindings {
        buttons,
        prev: resolve_key(hand, "prev", &raw.prev),
        next: resolve_key(hand, "next", &raw.next),
    }
}

fn resolve_key(hand: Hand, slot: &str, name: &Option<String>) -> KeyCode {
    let fallback = default_key(hand, slot);
    match name {
        Some(name) => parse_key(name).unwrap_or_else(|| {
            warn!(
                "Unknown key '{}' for {} {}; using the default binding",
                name, hand, slot
            );
            fallback
        }),
        None => fallback,
    }
}

fn default_key(hand: Hand, slot: &str) -> KeyCode {
    match (hand, slot) {
        (Hand::Left, "a") => KeyCode::KeyA,
        (Hand::Left, "x") => KeyCode::KeyZ,
        (Hand::Left, "i") => KeyCode::KeyE,
        (Hand::Left, "s") => KeyCode::KeyR,
        (Hand::Left, "w") => KeyCode::KeyS,
        (Hand::Left, "prev") => KeyCode::KeyQ,
        (Hand::Left, "next") => KeyCode::KeyD,
        (Hand::Right, "a") => KeyCode::KeyU,
        (Hand::Right, "x") => KeyCode::KeyI,
        (Hand::Right, "i") => KeyCode::KeyO,
        (Hand::Right, "s") => KeyCode::KeyP,
        (Hand::Right, "w") => KeyCode::KeyL,
        (Hand::Right, "prev") => KeyCode::ArrowLeft,
        (Hand::Right, "next") => KeyCode::ArrowRight,
        _ => KeyCode::Space,
    }
}

fn parse_key(name: &str) -> Option<KeyCode> {
    let key = match name.trim().to_ascii_lowercase().as_str() {
        "a" => KeyCode::KeyA,
        "b" => KeyCode::KeyB,
        "c" => KeyCode::KeyC,
        "d" => KeyCode::KeyD,
        "e" => KeyCode::KeyE,
        "f" => KeyCode::KeyF,
        "g" => KeyCode::KeyG,
        "h" => KeyCode::KeyH,
        "i" => KeyCode::KeyI,
        "j" => KeyCode::KeyJ,
        "k" => KeyCode::KeyK,
        "l" => KeyCode::KeyL,
        "m" => KeyCode::KeyM,
        "n" => KeyCode::KeyN,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "s" => KeyCode::KeyS,
        "t" => KeyCode::KeyT,
        "u" => KeyCode::KeyU,
        "v" => KeyCode::KeyV,
        "w" => KeyCode::KeyW,
        "x" => KeyCode::KeyX,
        "y" => KeyCode::KeyY,
        "z" => KeyCode::KeyZ,
        "up" => KeyCode::ArrowUp,
        "down" => KeyCode::ArrowDown,
        "left" => KeyCode::ArrowLeft,
        "right" => KeyCode::ArrowRight,
        "space" => KeyCode::Space,
        "enter" => KeyCode::Enter,
        _ => return None,
    };
    Some(key)
}
