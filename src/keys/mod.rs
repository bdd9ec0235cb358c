//! Key bindings and action availability
//!
//! The host binds three key sequences per platform to the clipboard
//! actions. Mac uses the Command modifier, every other platform uses
//! Control.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ElementKind;

/// Platform the key table is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "win")]
    Windows,
    #[serde(rename = "ix")]
    Unix,
    #[serde(rename = "mac")]
    Mac,
    #[serde(rename = "other")]
    Other,
}

impl Platform {
    /// Platform of the compile target
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(unix) {
            Platform::Unix
        } else {
            Platform::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "win",
            Platform::Unix => "ix",
            Platform::Mac => "mac",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "windows" => Ok(Platform::Windows),
            "ix" | "unix" | "linux" => Ok(Platform::Unix),
            "mac" | "macos" => Ok(Platform::Mac),
            "other" => Ok(Platform::Other),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// A key sequence and its human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Event sequence as the host's toolkit spells it, e.g. `<Control-c>`
    pub sequence: String,
    /// Label shown on buttons and menus, e.g. `Ctrl-C`
    pub label: String,
}

impl KeyBinding {
    fn new(modifier: &str, modifier_label: &str, key: char) -> Self {
        Self {
            sequence: format!("<{}-{}>", modifier, key),
            label: format!("{}-{}", modifier_label, key.to_ascii_uppercase()),
        }
    }
}

/// The three clipboard key bindings of one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    pub copy: KeyBinding,
    pub cut: KeyBinding,
    pub paste: KeyBinding,
}

impl KeySet {
    /// Builds the key set for a platform
    ///
    /// `modifier_label` is the localized name of the Control key. Mac
    /// always shows `Cmd`.
    pub fn for_platform(platform: Platform, modifier_label: &str) -> Self {
        let (modifier, label) = match platform {
            Platform::Mac => ("Command", "Cmd"),
            _ => ("Control", modifier_label),
        };

        Self {
            copy: KeyBinding::new(modifier, label, 'c'),
            cut: KeyBinding::new(modifier, label, 'x'),
            paste: KeyBinding::new(modifier, label, 'v'),
        }
    }

    pub fn get(&self, action: Action) -> &KeyBinding {
        match action {
            Action::Cut => &self.cut,
            Action::Copy => &self.copy,
            Action::Paste => &self.paste,
        }
    }
}

impl Default for KeySet {
    fn default() -> Self {
        Self::for_platform(Platform::current(), "Ctrl")
    }
}

/// A clipboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Cut,
    Copy,
    Paste,
}

impl Action {
    pub fn all() -> [Action; 3] {
        [Action::Cut, Action::Copy, Action::Paste]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Cut => "Cut",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
        }
    }

    /// Caption for a toolbar button, e.g. `Copy (Ctrl-C)`
    pub fn caption(&self, keys: &KeySet) -> String {
        format!("{} ({})", self.as_str(), keys.get(*self).label)
    }

    /// Whether the action changes the model
    pub fn is_editing(&self) -> bool {
        !matches!(self, Action::Copy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A key sequence bound to an action, optionally scoped to one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub sequence: String,
    pub action: Action,
    pub filter: Option<ElementKind>,
}

/// Lookup table from key sequences to actions
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: Vec<Binding>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unscoped bindings for all three actions
    pub fn from_keys(keys: &KeySet) -> Self {
        let mut map = Self::new();
        for action in Action::all() {
            map.bind(&keys.get(action).sequence, action, None);
        }
        map
    }

    /// Binds a sequence, replacing any earlier binding for it
    pub fn bind(&mut self, sequence: &str, action: Action, filter: Option<ElementKind>) {
        self.bindings.retain(|b| b.sequence != sequence);
        self.bindings.push(Binding {
            sequence: sequence.to_string(),
            action,
            filter,
        });
    }

    /// Binds all three actions of a key set, scoped to one kind
    pub fn bind_filtered(&mut self, keys: &KeySet, filter: ElementKind) {
        for action in Action::all() {
            self.bind(&keys.get(action).sequence, action, Some(filter));
        }
    }

    pub fn resolve(&self, sequence: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.sequence == sequence)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

/// Which actions the host should offer
///
/// Follows the project lifecycle: nothing while no project is open, and
/// only copy while the project is locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    cut: bool,
    copy: bool,
    paste: bool,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_open(&mut self) {
        self.set_all(true);
    }

    pub fn on_close(&mut self) {
        self.set_all(false);
    }

    pub fn on_lock(&mut self) {
        self.cut = false;
        self.paste = false;
    }

    pub fn on_unlock(&mut self) {
        self.cut = true;
        self.paste = true;
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Cut => self.cut,
            Action::Copy => self.copy,
            Action::Paste => self.paste,
        }
    }

    fn set_all(&mut self, enabled: bool) {
        self.cut = enabled;
        self.copy = enabled;
        self.paste = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_key_set() {
        let keys = KeySet::for_platform(Platform::Windows, "Ctrl");
        assert_eq!(keys.copy.sequence, "<Control-c>");
        assert_eq!(keys.copy.label, "Ctrl-C");
        assert_eq!(keys.cut.sequence, "<Control-x>");
        assert_eq!(keys.paste.label, "Ctrl-V");
    }

    #[test]
    fn localized_modifier_label() {
        let keys = KeySet::for_platform(Platform::Unix, "Strg");
        assert_eq!(keys.cut.label, "Strg-X");
        assert_eq!(keys.cut.sequence, "<Control-x>");
    }

    #[test]
    fn mac_uses_command() {
        let keys = KeySet::for_platform(Platform::Mac, "Strg");
        assert_eq!(keys.copy.sequence, "<Command-c>");
        assert_eq!(keys.copy.label, "Cmd-C");
        assert_eq!(keys.paste.sequence, "<Command-v>");
    }

    #[test]
    fn captions() {
        let keys = KeySet::for_platform(Platform::Windows, "Ctrl");
        assert_eq!(Action::Copy.caption(&keys), "Copy (Ctrl-C)");
        assert_eq!(Action::Cut.caption(&keys), "Cut (Ctrl-X)");
        assert_eq!(Action::Paste.caption(&keys), "Paste (Ctrl-V)");
    }

    #[test]
    fn platform_parsing() {
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("IX".parse::<Platform>().unwrap(), Platform::Unix);
        assert_eq!("mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert!("amiga".parse::<Platform>().is_err());
        assert_eq!(Platform::Unix.to_string(), "ix");
    }

    #[test]
    fn keymap_resolves_and_rebinds() {
        let keys = KeySet::for_platform(Platform::Unix, "Ctrl");
        let mut map = KeyMap::from_keys(&keys);

        let binding = map.resolve("<Control-v>").unwrap();
        assert_eq!(binding.action, Action::Paste);
        assert_eq!(binding.filter, None);
        assert!(map.resolve("<Control-z>").is_none());

        map.bind_filtered(&keys, ElementKind::Character);
        assert_eq!(map.bindings().len(), 3);
        assert_eq!(
            map.resolve("<Control-c>").unwrap().filter,
            Some(ElementKind::Character)
        );
    }

    #[test]
    fn action_state_follows_lifecycle() {
        let mut state = ActionState::new();
        assert!(Action::all().iter().all(|a| !state.is_enabled(*a)));

        state.on_open();
        assert!(Action::all().iter().all(|a| state.is_enabled(*a)));

        state.on_lock();
        assert!(!state.is_enabled(Action::Cut));
        assert!(state.is_enabled(Action::Copy));
        assert!(!state.is_enabled(Action::Paste));

        state.on_unlock();
        assert!(state.is_enabled(Action::Cut));
        assert!(state.is_enabled(Action::Paste));

        state.on_close();
        assert!(!state.is_enabled(Action::Copy));
    }

    #[test]
    fn only_copy_is_read_only() {
        assert!(Action::Cut.is_editing());
        assert!(!Action::Copy.is_editing());
        assert!(Action::Paste.is_editing());
    }
}
