//! Area scoring.
//!
//! Empty intersections are partitioned into maximal orthogonally connected
//! regions. A region belongs to a color when every stone bordering it is of
//! that color; regions bordered by both colors, or by no stone at all, are
//! neutral. A color's score is its stones on the board plus the territory it
//! owns plus any komi.

use crate::core::{Color, ColorMap, GameConfig, Grid, Position};

use super::engine::{FinalScore, GameResult};

/// A maximal connected region of empty intersections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Member intersections, in traversal order.
    pub cells: Vec<Position>,

    /// Colors of the stones adjacent to the region.
    pub borders: ColorMap<bool>,
}

impl Region {
    /// The owning color, or `None` for a neutral region.
    #[must_use]
    pub fn owner(&self) -> Option<Color> {
        match (self.borders[Color::Black], self.borders[Color::White]) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }

    /// Number of intersections in the region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the region is empty (never true for regions from [`regions`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partition the empty intersections of `grid` into regions, in row-major
/// order of each region's first cell.
#[must_use]
pub fn regions(grid: &Grid) -> Vec<Region> {
    let size = grid.size();
    let mut visited = vec![false; grid.area()];
    let mut out = Vec::new();

    for start in grid.positions_of(Color::Empty) {
        if visited[start.to_index(size)] {
            continue;
        }

        let mut region = Region {
            cells: Vec::new(),
            borders: ColorMap::with_value(false),
        };
        let mut stack = vec![start];
        visited[start.to_index(size)] = true;

        while let Some(pos) = stack.pop() {
            region.cells.push(pos);
            for next in pos.neighbors(size) {
                match grid.get(next) {
                    Color::Empty => {
                        if !visited[next.to_index(size)] {
                            visited[next.to_index(size)] = true;
                            stack.push(next);
                        }
                    }
                    stone => region.borders[stone] = true,
                }
            }
        }

        out.push(region);
    }

    out
}

/// Territory owned by each color.
#[must_use]
pub fn territory(grid: &Grid) -> ColorMap<u32> {
    let mut owned: ColorMap<u32> = ColorMap::with_value(0);
    for region in regions(grid) {
        if let Some(owner) = region.owner() {
            owned[owner] += region.len() as u32;
        }
    }
    owned
}

/// Per-intersection ownership map: stones count for their own color and
/// owned empty cells for their owner; neutral cells are `Empty`.
#[must_use]
pub fn ownership(grid: &Grid) -> Grid {
    let mut owners = grid.clone();
    for region in regions(grid) {
        if let Some(owner) = region.owner() {
            for &pos in &region.cells {
                owners.set(pos, owner);
            }
        }
    }
    owners
}

/// Score `grid` under area rules.
///
/// `captures` is carried into the report for display; it does not affect
/// the score.
#[must_use]
pub fn score(grid: &Grid, config: &GameConfig, captures: &ColorMap<u32>) -> FinalScore {
    let stones = ColorMap::new(|c| grid.count(c) as u32);
    let territory = territory(grid);
    let scores = ColorMap::new(|c| {
        stones[c] as f32 + territory[c] as f32 + config.komi_for(c)
    });

    let result = if scores[Color::Black] > scores[Color::White] {
        GameResult::Winner(Color::Black)
    } else if scores[Color::White] > scores[Color::Black] {
        GameResult::Winner(Color::White)
    } else {
        GameResult::Draw
    };

    FinalScore {
        result,
        scores,
        stones,
        territory,
        captures: captures.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_board_is_one_neutral_region() {
        let all = regions(&Grid::new(5));
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].len(), 25);
        assert_eq!(all[0].owner(), None);
    }

    #[test]
    fn test_wall_splits_territory() {
        let g = grid(&[
            ". X . O .",
            ". X . O .",
            ". X . O .",
            ". X . O .",
            ". X . O .",
        ]);
        let all = regions(&g);
        assert_eq!(all.len(), 3);

        let owned = territory(&g);
        assert_eq!(owned[Color::Black], 5);
        assert_eq!(owned[Color::White], 5);
    }

    #[test]
    fn test_dame_is_neutral() {
        let g = grid(&[
            "X . O",
            "X . O",
            "X . O",
        ]);
        let all = regions(&g);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].owner(), None);
        assert_eq!(territory(&g), ColorMap::with_value(0));
    }

    #[test]
    fn test_ownership_map() {
        let g = grid(&[
            ". X .",
            "X X O",
            ". O .",
        ]);
        let owners = ownership(&g);
        assert_eq!(owners.get(Position::new(0, 0)), Color::Black);
        assert_eq!(owners.get(Position::new(2, 2)), Color::White);
        // (0,2) touches both colors
        assert_eq!(owners.get(Position::new(0, 2)), Color::Empty);
    }

    #[test]
    fn test_score_area_rules() {
        let g = grid(&[
            ". X . O .",
            ". X . O .",
            ". X . O .",
            ". X . O .",
            ". X . O .",
        ]);
        let config = GameConfig::new(5).with_komi(6.5);
        let report = score(&g, &config, &ColorMap::with_value(0));

        assert_eq!(report.stones[Color::Black], 5);
        assert_eq!(report.scores[Color::Black], 10.0);
        assert_eq!(report.scores[Color::White], 16.5);
        assert_eq!(report.result, GameResult::Winner(Color::White));
    }

    #[test]
    fn test_score_draw() {
        let g = grid(&[
            "X . O",
            "X . O",
            "X . O",
        ]);
        let config = GameConfig::new(3).with_komi(0.0);
        let report = score(&g, &config, &ColorMap::with_value(0));
        assert_eq!(report.result, GameResult::Draw);
    }
}
