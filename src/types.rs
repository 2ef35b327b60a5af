//! The standard 18-type catalog and its effectiveness chart.

use crate::multiplier::Multiplier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl StandardType {
    /// Catalog order.
    pub const ALL: [StandardType; 18] = [
        StandardType::Normal,
        StandardType::Fire,
        StandardType::Water,
        StandardType::Electric,
        StandardType::Grass,
        StandardType::Ice,
        StandardType::Fighting,
        StandardType::Poison,
        StandardType::Ground,
        StandardType::Flying,
        StandardType::Psychic,
        StandardType::Bug,
        StandardType::Rock,
        StandardType::Ghost,
        StandardType::Dragon,
        StandardType::Dark,
        StandardType::Steel,
        StandardType::Fairy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StandardType::Normal => "Normal",
            StandardType::Fire => "Fire",
            StandardType::Water => "Water",
            StandardType::Electric => "Electric",
            StandardType::Grass => "Grass",
            StandardType::Ice => "Ice",
            StandardType::Fighting => "Fighting",
            StandardType::Poison => "Poison",
            StandardType::Ground => "Ground",
            StandardType::Flying => "Flying",
            StandardType::Psychic => "Psychic",
            StandardType::Bug => "Bug",
            StandardType::Rock => "Rock",
            StandardType::Ghost => "Ghost",
            StandardType::Dragon => "Dragon",
            StandardType::Dark => "Dark",
            StandardType::Steel => "Steel",
            StandardType::Fairy => "Fairy",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<StandardType> {
        STANDARD_TYPES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }
}

static STANDARD_TYPES: phf::Map<&'static str, StandardType> = phf::phf_map! {
    "normal" => StandardType::Normal,
    "fire" => StandardType::Fire,
    "water" => StandardType::Water,
    "electric" => StandardType::Electric,
    "grass" => StandardType::Grass,
    "ice" => StandardType::Ice,
    "fighting" => StandardType::Fighting,
    "poison" => StandardType::Poison,
    "ground" => StandardType::Ground,
    "flying" => StandardType::Flying,
    "psychic" => StandardType::Psychic,
    "bug" => StandardType::Bug,
    "rock" => StandardType::Rock,
    "ghost" => StandardType::Ghost,
    "dragon" => StandardType::Dragon,
    "dark" => StandardType::Dark,
    "steel" => StandardType::Steel,
    "fairy" => StandardType::Fairy,
};

// Ref: pokemon-showdown/data/typechart.ts (Gen 6+ chart).
/// Multiplier of an attack of type `attacking` against a single `defending` type.
pub fn standard_effectiveness(attacking: StandardType, defending: StandardType) -> Multiplier {
    use Multiplier::{Double, Half, Immune, Neutral};
    use StandardType::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => Half,
            Ghost => Immune,
            _ => Neutral,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => Half,
            Grass | Ice | Bug | Steel => Double,
            _ => Neutral,
        },
        Water => match defending {
            Water | Grass | Dragon => Half,
            Fire | Ground | Rock => Double,
            _ => Neutral,
        },
        Electric => match defending {
            Electric | Grass | Dragon => Half,
            Water | Flying => Double,
            Ground => Immune,
            _ => Neutral,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => Half,
            Water | Ground | Rock => Double,
            _ => Neutral,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => Half,
            Grass | Ground | Flying | Dragon => Double,
            _ => Neutral,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => Double,
            Poison | Flying | Psychic | Bug | Fairy => Half,
            Ghost => Immune,
            _ => Neutral,
        },
        Poison => match defending {
            Grass | Fairy => Double,
            Poison | Ground | Rock | Ghost => Half,
            Steel => Immune,
            _ => Neutral,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => Double,
            Grass | Bug => Half,
            Flying => Immune,
            _ => Neutral,
        },
        Flying => match defending {
            Grass | Fighting | Bug => Double,
            Electric | Rock | Steel => Half,
            _ => Neutral,
        },
        Psychic => match defending {
            Fighting | Poison => Double,
            Psychic | Steel => Half,
            Dark => Immune,
            _ => Neutral,
        },
        Bug => match defending {
            Grass | Psychic | Dark => Double,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => Half,
            _ => Neutral,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => Double,
            Fighting | Ground | Steel => Half,
            _ => Neutral,
        },
        Ghost => match defending {
            Ghost | Psychic => Double,
            Dark => Half,
            Normal => Immune,
            _ => Neutral,
        },
        Dragon => match defending {
            Dragon => Double,
            Steel => Half,
            Fairy => Immune,
            _ => Neutral,
        },
        Dark => match defending {
            Psychic | Ghost => Double,
            Fighting | Dark | Fairy => Half,
            _ => Neutral,
        },
        Steel => match defending {
            Rock | Ice | Fairy => Double,
            Fire | Water | Electric | Steel => Half,
            _ => Neutral,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => Double,
            Fire | Poison | Steel => Half,
            _ => Neutral,
        },
    }
}
