//! Cube games: a bag of red, green and blue cubes sampled several times.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl CubeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            CubeColor::Red => "red",
            CubeColor::Green => "green",
            CubeColor::Blue => "blue",
        }
    }
}

impl FromStr for CubeColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(CubeColor::Red),
            "green" => Ok(CubeColor::Green),
            "blue" => Ok(CubeColor::Blue),
            other => Err(ModelError::UnknownColor(other.to_string())),
        }
    }
}

/// Cube counts per color. Used both for a single draw and for bag contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    /// The bag the elf asks about: 12 red, 13 green and 14 blue cubes.
    pub const BAG: CubeSet = CubeSet {
        red: 12,
        green: 13,
        blue: 14,
    };

    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Adds `count` cubes of one color. A color named twice in one draw is
    /// counted twice.
    pub fn add(&mut self, color: CubeColor, count: u32) {
        let slot = match color {
            CubeColor::Red => &mut self.red,
            CubeColor::Green => &mut self.green,
            CubeColor::Blue => &mut self.blue,
        };
        *slot = slot.saturating_add(count);
    }

    /// Returns true when no color exceeds the count in `limit`.
    pub fn fits_within(&self, limit: &CubeSet) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    /// Per-color maximum of two sets.
    #[must_use]
    pub fn max(&self, other: &CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// Product of the colors that are present. A color with no cubes adds no
    /// factor, so a set of only red cubes has power equal to its red count.
    pub fn power(&self) -> u64 {
        [self.red, self.green, self.blue]
            .into_iter()
            .filter(|&count| count > 0)
            .map(u64::from)
            .product()
    }
}

/// One game record: its id and every draw shown from the bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<CubeSet>,
}

impl Game {
    /// Fewest cubes of each color that make every draw possible.
    pub fn minimum_bag(&self) -> CubeSet {
        self.draws
            .iter()
            .fold(CubeSet::default(), |bag, draw| bag.max(draw))
    }

    /// Returns true when every draw fits in `bag`.
    pub fn possible_with(&self, bag: &CubeSet) -> bool {
        self.draws.iter().all(|draw| draw.fits_within(bag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names() {
        assert_eq!("red".parse::<CubeColor>(), Ok(CubeColor::Red));
        assert_eq!("blue".parse::<CubeColor>(), Ok(CubeColor::Blue));
        assert_eq!(
            "purple".parse::<CubeColor>(),
            Err(ModelError::UnknownColor("purple".to_string()))
        );
        assert_eq!(CubeColor::Green.as_str(), "green");
    }

    #[test]
    fn limits() {
        assert!(CubeSet::new(12, 13, 14).fits_within(&CubeSet::BAG));
        assert!(!CubeSet::new(20, 8, 6).fits_within(&CubeSet::BAG));
        assert!(!CubeSet::new(0, 0, 15).fits_within(&CubeSet::BAG));
    }

    #[test]
    fn repeated_color_adds_up() {
        let mut draw = CubeSet::default();
        draw.add(CubeColor::Red, 3);
        draw.add(CubeColor::Red, 4);
        assert_eq!(draw, CubeSet::new(7, 0, 0));
    }

    #[test]
    fn minimum_bag_and_power() {
        let game = Game {
            id: 1,
            draws: vec![
                CubeSet::new(4, 0, 3),
                CubeSet::new(1, 2, 6),
                CubeSet::new(0, 2, 0),
            ],
        };
        assert_eq!(game.minimum_bag(), CubeSet::new(4, 2, 6));
        assert_eq!(game.minimum_bag().power(), 48);
        assert!(game.possible_with(&CubeSet::BAG));
    }

    #[test]
    fn missing_color_adds_no_factor() {
        assert_eq!(CubeSet::new(5, 0, 2).power(), 10);
    }
}
