//! Key and hotkey types.
//!
//! Platform-agnostic key representation. The browser crate converts native
//! `KeyboardEvent`s to `KeyInput`; the binding table is written with
//! jQuery.hotkeys style descriptors (`"ctrl+shift+c"`, `"tab"`, `"space"`)
//! that parse into `Hotkey`.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::HotkeyParseError;

/// Which keyboard event a binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
}

impl EventKind {
    /// The DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

/// Key values for keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, stored lowercased.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,
    Insert,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    Control,
    Meta,
    Shift,
    CapsLock,

    // === Function keys ===
    F(u8),
}

impl Key {
    /// Create a character key. Letters are folded to lowercase so that
    /// `ctrl+shift+c` matches the `"C"` a browser reports with shift held.
    pub fn character(s: impl AsRef<str>) -> Self {
        Self::Character(SmolStr::new(s.as_ref().to_lowercase()))
    }

    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "Insert" => Self::Insert,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Alt" => Self::Alt,
            "Control" => Self::Control,
            "Meta" | "OS" => Self::Meta,
            "Shift" => Self::Shift,
            "CapsLock" => Self::CapsLock,
            "Unidentified" | "" => Self::Unidentified,
            other => {
                if let Some(n) = function_key_number(other) {
                    Self::F(n)
                } else if other.chars().count() == 1 {
                    Self::character(other)
                } else {
                    Self::Unidentified
                }
            }
        }
    }

    /// Parse a hotkey descriptor key name (`"b"`, `"tab"`, `"space"`, `"f5"`).
    fn from_descriptor(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        let key = match lower.as_str() {
            "space" => Self::Space,
            "tab" => Self::Tab,
            "return" | "enter" => Self::Enter,
            "esc" | "escape" => Self::Escape,
            "backspace" => Self::Backspace,
            "del" | "delete" => Self::Delete,
            "insert" => Self::Insert,
            "left" => Self::ArrowLeft,
            "right" => Self::ArrowRight,
            "up" => Self::ArrowUp,
            "down" => Self::ArrowDown,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "capslock" => Self::CapsLock,
            other => {
                if let Some(n) = function_key_number(&other.to_uppercase()) {
                    Self::F(n)
                } else if other.chars().count() == 1 {
                    Self::character(other)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Alt | Self::Control | Self::Meta | Self::Shift | Self::CapsLock
        )
    }
}

fn function_key_number(key: &str) -> Option<u8> {
    let n: u8 = key.strip_prefix('F')?.parse().ok()?;
    (1..=24).contains(&n).then_some(n)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(c) => f.write_str(c),
            Self::Unidentified => f.write_str("unidentified"),
            Self::Backspace => f.write_str("backspace"),
            Self::Delete => f.write_str("del"),
            Self::Enter => f.write_str("return"),
            Self::Tab => f.write_str("tab"),
            Self::Escape => f.write_str("esc"),
            Self::Space => f.write_str("space"),
            Self::Insert => f.write_str("insert"),
            Self::ArrowLeft => f.write_str("left"),
            Self::ArrowRight => f.write_str("right"),
            Self::ArrowUp => f.write_str("up"),
            Self::ArrowDown => f.write_str("down"),
            Self::Home => f.write_str("home"),
            Self::End => f.write_str("end"),
            Self::PageUp => f.write_str("pageup"),
            Self::PageDown => f.write_str("pagedown"),
            Self::Alt => f.write_str("alt"),
            Self::Control => f.write_str("ctrl"),
            Self::Meta => f.write_str("meta"),
            Self::Shift => f.write_str("shift"),
            Self::CapsLock => f.write_str("capslock"),
            Self::F(n) => write!(f, "f{n}"),
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };
}

/// A hotkey: the key combination a binding fires on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Hotkey {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::CTRL)
    }

    /// Parse a descriptor, see [`FromStr`].
    pub fn parse(descriptor: &str) -> Result<Self, HotkeyParseError> {
        descriptor.parse()
    }

    /// Whether a key event triggers this hotkey. Modifiers must match exactly.
    pub fn matches(&self, input: &KeyInput) -> bool {
        self.key == input.key && self.modifiers == input.modifiers
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    /// Parse `"ctrl+shift+c"`, `"alt-ctrl-z"`, `"tab"`, `"space"`.
    ///
    /// `+` and `-` both separate parts; modifiers may come in any order. A
    /// lone `"+"` or `"-"` is the character key itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(HotkeyParseError::Empty);
        }
        if trimmed == "+" || trimmed == "-" {
            return Ok(Self::new(Key::character(trimmed)));
        }

        let mut modifiers = Modifiers::NONE;
        let mut key = None;
        for part in trimmed.split(['+', '-']).filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                _ => {
                    let parsed = Key::from_descriptor(part)
                        .ok_or_else(|| HotkeyParseError::UnknownKey(part.to_string()))?;
                    if key.replace(parsed).is_some() {
                        return Err(HotkeyParseError::MultipleKeys(trimmed.to_string()));
                    }
                }
            }
        }

        let key = key.ok_or_else(|| HotkeyParseError::MissingKey(trimmed.to_string()))?;
        Ok(Self { key, modifiers })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Modifiers {
            ctrl,
            alt,
            shift,
            meta,
        } = self.modifiers;
        for (held, name) in [(ctrl, "ctrl"), (alt, "alt"), (shift, "shift"), (meta, "meta")] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// One physical key event, as seen by the keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Build from the fields of a DOM `KeyboardEvent`.
    pub fn from_dom(key: &str, ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self {
            key: Key::from_dom_key(key),
            modifiers: Modifiers {
                ctrl,
                alt,
                shift,
                meta,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(Hotkey::parse("tab").unwrap(), Hotkey::new(Key::Tab));
        assert_eq!(Hotkey::parse("space").unwrap(), Hotkey::new(Key::Space));
        assert_eq!(
            Hotkey::parse("ctrl+b").unwrap(),
            Hotkey::ctrl(Key::character("b"))
        );
    }

    #[test]
    fn test_parse_modifier_order_and_separators() {
        let a = Hotkey::parse("ctrl+shift+c").unwrap();
        let b = Hotkey::parse("shift-ctrl-C").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.modifiers, Modifiers::CTRL_SHIFT);

        let z = Hotkey::parse("alt-ctrl-z").unwrap();
        assert!(z.modifiers.alt && z.modifiers.ctrl && !z.modifiers.shift);
        assert_eq!(Hotkey::parse("f5").unwrap().key, Key::F(5));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Hotkey::parse("  "), Err(HotkeyParseError::Empty));
        assert_eq!(
            Hotkey::parse("ctrl+shift"),
            Err(HotkeyParseError::MissingKey("ctrl+shift".into()))
        );
        assert_eq!(
            Hotkey::parse("ctrl+a+b"),
            Err(HotkeyParseError::MultipleKeys("ctrl+a+b".into()))
        );
        assert_eq!(
            Hotkey::parse("ctrl+bogus"),
            Err(HotkeyParseError::UnknownKey("bogus".into()))
        );
    }

    #[test]
    fn test_display_round_trips_descriptor() {
        for descriptor in ["ctrl+b", "ctrl+shift+c", "tab", "space", "alt+f4"] {
            let hotkey = Hotkey::parse(descriptor).unwrap();
            assert_eq!(hotkey.to_string(), descriptor);
        }
    }

    #[test]
    fn test_matches_dom_input() {
        let hotkey = Hotkey::parse("ctrl+shift+c").unwrap();
        assert!(hotkey.matches(&KeyInput::from_dom("C", true, false, true, false)));
        assert!(!hotkey.matches(&KeyInput::from_dom("c", true, false, false, false)));

        let space = Hotkey::parse("space").unwrap();
        assert!(space.matches(&KeyInput::from_dom(" ", false, false, false, false)));
        assert!(!space.matches(&KeyInput::from_dom(" ", false, false, true, false)));
    }

    #[test]
    fn test_dom_keys() {
        assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
        assert_eq!(Key::from_dom_key("F12"), Key::F(12));
        assert_eq!(Key::from_dom_key("B"), Key::character("b"));
        assert_eq!(Key::from_dom_key("MediaPlayPause"), Key::Unidentified);
        assert!(Key::from_dom_key("Shift").is_modifier());
    }
}
