//! The fixed move set and its formulas.

/// Fraction of max HP restored by the heal move.
pub const HEAL_FRACTION: f32 = 0.2;

/// Divisor in the damage formula.
pub const DAMAGE_DIVISOR: i32 = 5;

/// The four moves every combatant knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Physical attack resolved against Attack/Defense.
    Tackle,
    /// Ranged attack resolved against SpecialAttack/SpecialDefense.
    Projectile,
    /// Blocks one incoming attack-class move this turn.
    Guard,
    /// Restores a fraction of max HP.
    Heal,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::Tackle,
        MoveKind::Projectile,
        MoveKind::Guard,
        MoveKind::Heal,
    ];

    /// Whether this move is attack-class, i.e. subject to guard negation.
    pub fn is_attack(self) -> bool {
        matches!(self, MoveKind::Tackle | MoveKind::Projectile)
    }
}

/// Damage dealt by an attack-class move.
///
/// `max(1, (attack * 2 - defense) / 5)` with truncating integer division;
/// an attack never does less than 1 damage.
pub fn attack_damage(attack: u32, defense: u32) -> u32 {
    let raw = (attack as i32 * 2 - defense as i32) / DAMAGE_DIVISOR;
    raw.max(1) as u32
}

/// Hit points restored by the heal move: `max(1, round(max_hp * 0.2))`.
/// The caller caps the result at the meter's maximum.
pub fn heal_amount(max_hp: u32) -> u32 {
    ((max_hp as f32 * HEAL_FRACTION).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_formula_matches_worked_examples() {
        // Attack 50 vs Defense 50 => (100 - 50) / 5 = 10
        assert_eq!(attack_damage(50, 50), 10);
        // Attack 50 vs Defense 30 => (100 - 30) / 5 = 14
        assert_eq!(attack_damage(50, 30), 14);
    }

    #[test]
    fn damage_truncates_and_floors_at_one() {
        // (2*40 - 33) / 5 = 47 / 5 = 9 (truncating)
        assert_eq!(attack_damage(40, 33), 9);
        // Hopeless attacker still chips for 1
        assert_eq!(attack_damage(10, 200), 1);
        assert_eq!(attack_damage(0, 0), 1);
    }

    #[test]
    fn heal_rounds_and_floors_at_one() {
        assert_eq!(heal_amount(100), 20);
        assert_eq!(heal_amount(48), 10); // 9.6 rounds up
        assert_eq!(heal_amount(47), 9); // 9.4 rounds down
        assert_eq!(heal_amount(2), 1);
        assert_eq!(heal_amount(1), 1);
    }

    #[test]
    fn attack_classification() {
        assert!(MoveKind::Tackle.is_attack());
        assert!(MoveKind::Projectile.is_attack());
        assert!(!MoveKind::Guard.is_attack());
        assert!(!MoveKind::Heal.is_attack());
    }
}
