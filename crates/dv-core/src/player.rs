use serde::{Deserialize, Serialize};

use crate::id::{ItemId, RoomId};

/// Default carrying limit.
pub const DEFAULT_MAX_WEIGHT: u32 = 100;

/// The adventurer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Current room.
    pub location: RoomId,
    /// Carried items, in pick-up order. Derived from item locations.
    #[serde(skip)]
    pub inventory: Vec<ItemId>,
    /// Maximum total weight the player can carry.
    pub max_weight: u32,
    /// Zero means dead.
    pub health: i32,
    /// Accumulated combat penalty from wounds (never positive).
    pub wounds: i32,
    /// Points scored so far.
    pub score: i32,
    /// Commands processed so far.
    pub moves: u32,
}

impl Player {
    /// A fresh player standing in `location`.
    pub fn new(location: impl Into<RoomId>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
            max_weight: DEFAULT_MAX_WEIGHT,
            health: 1,
            wounds: 0,
            score: 0,
            moves: 0,
        }
    }

    /// Whether the player is still alive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether `item` is carried directly (not inside a carried container).
    pub fn carries(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Add to the wound penalty.
    pub fn wound(&mut self, amount: i32) {
        self.wounds -= amount;
    }

    /// Recover one point of wound penalty, if any.
    pub fn heal(&mut self) -> bool {
        if self.wounds < 0 {
            self.wounds += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wounds_accumulate_and_heal() {
        let mut player = Player::new("west-of-house");
        player.wound(1);
        player.wound(2);
        assert_eq!(player.wounds, -3);
        assert!(player.heal());
        assert_eq!(player.wounds, -2);
    }

    #[test]
    fn healing_stops_at_zero() {
        let mut player = Player::new("west-of-house");
        assert!(!player.heal());
        assert_eq!(player.wounds, 0);
        assert!(player.is_alive());
    }
}
