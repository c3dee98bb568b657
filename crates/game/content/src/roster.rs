//! Built-in species roster.
//!
//! The default catalog the simulation falls back to when no external
//! species table is loaded (or when loading one fails). Stats follow the
//! usual six-stat spread; speed is the one that decides battle order.

use game_core::{Roster, SpeciesDef, StatBlock};

/// The built-in species catalog.
pub fn default_roster() -> Roster {
    Roster::new(vec![
        SpeciesDef::new(
            1,
            "Flarepup",
            "Fire",
            None,
            StatBlock::new(39, 52, 43, 60, 50, 65),
        ),
        SpeciesDef::new(
            2,
            "Aquatail",
            "Water",
            None,
            StatBlock::new(44, 48, 65, 50, 64, 43),
        ),
        SpeciesDef::new(
            3,
            "Thornling",
            "Grass",
            Some("Poison"),
            StatBlock::new(45, 49, 49, 65, 65, 45),
        ),
        SpeciesDef::new(
            4,
            "Zephyrix",
            "Flying",
            Some("Normal"),
            StatBlock::new(40, 45, 40, 35, 35, 56),
        ),
        SpeciesDef::new(
            5,
            "Pebblit",
            "Rock",
            Some("Ground"),
            StatBlock::new(40, 80, 100, 30, 30, 20),
        ),
        SpeciesDef::new(
            6,
            "Voltlet",
            "Electric",
            None,
            StatBlock::new(35, 55, 40, 50, 50, 90),
        ),
        SpeciesDef::new(
            7,
            "Mossgrub",
            "Bug",
            Some("Grass"),
            StatBlock::new(45, 30, 35, 20, 20, 45),
        ),
        SpeciesDef::new(
            8,
            "Cinderwing",
            "Fire",
            Some("Flying"),
            StatBlock::new(78, 84, 78, 109, 85, 100),
        ),
    ])
}
