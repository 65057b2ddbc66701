use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::input::MoveDirection;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement directions to key codes.
///
/// A preset only needs to list the directions it rebinds; the rest keep
/// their default keys (see [`Self::fill_missing_defaults`]).
pub struct KeybindingOptions {
    /// Maps direction → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveDirection, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_direction: HashMap<String, MoveDirection>,
}

const fn default_key(direction: MoveDirection) -> &'static str {
    match direction {
        MoveDirection::Forward => "KeyW",
        MoveDirection::Backward => "KeyS",
        MoveDirection::Left => "KeyA",
        MoveDirection::Right => "KeyD",
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = MoveDirection::ALL
            .into_iter()
            .map(|direction| (direction, default_key(direction).to_owned()))
            .collect();

        let mut opts = Self {
            bindings,
            key_to_direction: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

// The reverse map is a cache; only the bindings themselves are compared.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Give every unbound direction its default key, unless another
    /// direction already uses that key.
    pub fn fill_missing_defaults(&mut self) {
        for direction in MoveDirection::ALL {
            if self.bindings.contains_key(&direction) {
                continue;
            }
            let key = default_key(direction);
            if self.bindings.values().any(|bound| bound == key) {
                log::warn!(
                    "{direction:?} left unbound: default key {key} is taken"
                );
                continue;
            }
            let _ = self.bindings.insert(direction, key.to_owned());
        }
    }

    /// Reject bindings that map one key to several directions.
    pub fn validate(&self) -> Result<(), CameraError> {
        let mut seen: HashMap<&str, MoveDirection> = HashMap::new();
        for direction in MoveDirection::ALL {
            let Some(key) = self.bindings.get(&direction) else {
                continue;
            };
            if let Some(other) = seen.insert(key.as_str(), direction) {
                return Err(CameraError::InvalidOptions(format!(
                    "key {key} is bound to both {other:?} and {direction:?}"
                )));
            }
        }
        Ok(())
    }

    /// Rebuild the reverse lookup map (key string → direction).
    ///
    /// Should a key still be bound twice, the direction that comes first in
    /// [`MoveDirection::ALL`] wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_direction.clear();
        for direction in MoveDirection::ALL {
            if let Some(key) = self.bindings.get(&direction) {
                let _ = self
                    .key_to_direction
                    .entry(key.clone())
                    .or_insert(direction);
            }
        }
    }

    /// Rebind `direction` to `key`, replacing its previous key. Any other
    /// direction bound to `key` loses its binding.
    pub fn bind(&mut self, direction: MoveDirection, key: impl Into<String>) {
        let key = key.into();
        self.bindings
            .retain(|bound, bound_key| *bound == direction || *bound_key != key);
        let _ = self.bindings.insert(direction, key);
        self.rebuild_reverse_map();
    }

    /// Look up the direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveDirection> {
        self.key_to_direction.get(key).copied()
    }
}
