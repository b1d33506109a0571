//! Cube game checks.

use aoc_model::{CubeSet, Game, PuzzlePart};
use tracing::debug;

/// Part one: sum of the ids of games possible with `bag`.
pub fn possible_game_ids(games: &[Game], bag: &CubeSet) -> u64 {
    games
        .iter()
        .filter(|game| game.possible_with(bag))
        .map(|game| u64::from(game.id))
        .sum()
}

/// Part two: sum of the power of each game's minimum bag.
pub fn minimum_bag_power(games: &[Game]) -> u64 {
    games.iter().map(|game| game.minimum_bag().power()).sum()
}

/// Answer for either part, checking part one against [`CubeSet::BAG`].
pub fn cube_games_answer(games: &[Game], part: PuzzlePart) -> u64 {
    let answer = match part {
        PuzzlePart::One => possible_game_ids(games, &CubeSet::BAG),
        PuzzlePart::Two => minimum_bag_power(games),
    };
    debug!(games = games.len(), ?part, answer, "cube games checked");
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, draws: &[(u32, u32, u32)]) -> Game {
        Game {
            id,
            draws: draws
                .iter()
                .map(|&(red, green, blue)| CubeSet::new(red, green, blue))
                .collect(),
        }
    }

    #[test]
    fn only_possible_games_count() {
        let games = vec![
            game(1, &[(4, 0, 3), (1, 2, 6)]),
            game(3, &[(20, 8, 6), (4, 13, 5)]),
            game(5, &[(6, 3, 1)]),
        ];
        assert_eq!(possible_game_ids(&games, &CubeSet::BAG), 6);
        assert_eq!(cube_games_answer(&games, PuzzlePart::One), 6);
    }

    #[test]
    fn power_sums_minimum_bags() {
        let games = vec![game(1, &[(4, 0, 3), (1, 2, 6)]), game(2, &[(1, 3, 4)])];
        assert_eq!(minimum_bag_power(&games), 48 + 12);
        assert_eq!(cube_games_answer(&games, PuzzlePart::Two), 60);
    }
}
