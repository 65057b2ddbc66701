use serde::{Deserialize, Serialize};

/// Discrete movement directions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// left = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
}

impl MoveDirection {
    /// Every direction, in the order the controller applies them.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];

    const fn bit(self) -> u8 {
        match self {
            Self::Forward => 1,
            Self::Backward => 1 << 1,
            Self::Left => 1 << 2,
            Self::Right => 1 << 3,
        }
    }
}

/// Set of movement directions currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections(u8);

impl HeldDirections {
    /// No direction held.
    pub const NONE: Self = Self(0);

    /// Mark `direction` as held or released.
    pub fn set(&mut self, direction: MoveDirection, held: bool) {
        if held {
            self.0 |= direction.bit();
        } else {
            self.0 &= !direction.bit();
        }
    }

    /// Whether `direction` is held.
    #[must_use]
    pub const fn contains(self, direction: MoveDirection) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether nothing is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Held directions in [`MoveDirection::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = MoveDirection> {
        MoveDirection::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl FromIterator<MoveDirection> for HeldDirections {
    fn from_iter<I: IntoIterator<Item = MoveDirection>>(iter: I) -> Self {
        let mut held = Self::NONE;
        for direction in iter {
            held.set(direction, true);
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_release() {
        let mut held = HeldDirections::NONE;
        held.set(MoveDirection::Forward, true);
        held.set(MoveDirection::Left, true);
        assert!(held.contains(MoveDirection::Forward));
        assert!(!held.contains(MoveDirection::Right));

        held.set(MoveDirection::Forward, false);
        assert_eq!(held.iter().collect::<Vec<_>>(), vec![MoveDirection::Left]);
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let held: HeldDirections =
            [MoveDirection::Right, MoveDirection::Forward].into_iter().collect();
        assert_eq!(
            held.iter().collect::<Vec<_>>(),
            vec![MoveDirection::Forward, MoveDirection::Right]
        );
    }
}
