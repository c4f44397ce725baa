//! Obstacle generators.
//!
//! - **Scatter**: each free cell becomes an obstacle with a fixed
//!   probability.
//! - **Maze**: a randomized depth-first backtracker carves passages between
//!   the cells whose row and column are both even; everything else is wall.

use pathviz_core::{Grid, Point};
use rand::Rng;
use rand::seq::SliceRandom;

/// Obstacle generator over a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Turn free cells into obstacles with probability `density`
    /// (clamped to 0.0–1.0). Start and end cells are left alone.
    ///
    /// Returns the number of obstacles added.
    pub fn scatter_obstacles(&mut self, grid: &mut Grid, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let free: Vec<Point> = grid
            .iter()
            .filter(|(_, c)| c.role == pathviz_core::Role::Free)
            .map(|(p, _)| p)
            .collect();
        let mut added = 0;
        for p in free {
            if self.rng.random_bool(density) {
                grid.mark_obstacle(p);
                added += 1;
            }
        }
        added
    }

    /// Fill the grid with a perfect maze.
    ///
    /// Rooms sit on cells with even row and even column; the backtracker
    /// knocks down the wall cell between two rooms when it moves between
    /// them. On an even side the last row and column get dead-end branches,
    /// so the corner opposite the origin is always open. Start and end
    /// cells are never walled.
    ///
    /// Returns the number of obstacle cells in the result.
    pub fn maze(&mut self, grid: &mut Grid) -> usize {
        let n = grid.size();
        if n == 0 {
            return 0;
        }
        let is_room = |p: Point| p.x % 2 == 0 && p.y % 2 == 0;

        let mut carved = vec![false; grid.len()];
        let mut stack = vec![Point::ZERO];
        carved[0] = true;

        const STEPS: [Point; 4] = [
            Point::new(0, 2),
            Point::new(0, -2),
            Point::new(-2, 0),
            Point::new(2, 0),
        ];
        let mut dirs = STEPS;

        while let Some(&cur) = stack.last() {
            dirs.shuffle(&mut self.rng);
            let next = dirs.iter().map(|&d| cur + d).find(|&q| {
                grid.idx(q).is_some_and(|i| !carved[i])
            });
            match next {
                Some(q) => {
                    let wall = Point::new((cur.x + q.x) / 2, (cur.y + q.y) / 2);
                    for p in [wall, q] {
                        if let Some(i) = grid.idx(p) {
                            carved[i] = true;
                        }
                    }
                    stack.push(q);
                }
                None => {
                    stack.pop();
                }
            }
        }

        // An even side leaves the last row and column without rooms. Open
        // dead ends into them so the far corner stays reachable.
        if n % 2 == 0 {
            let last = n - 1;
            let stubs = (0..n)
                .step_by(2)
                .map(|y| Point::new(last, y))
                .chain((0..last - 1).step_by(2).map(|x| Point::new(x, last)))
                .chain([Point::new(last, last)]);
            for p in stubs {
                if let Some(i) = grid.idx(p) {
                    carved[i] = true;
                }
            }
        }

        let mut walls = 0;
        for i in 0..grid.len() {
            let p = grid.point(i);
            let keep = grid
                .cell(i)
                .is_some_and(|c| c.is_start() || c.is_end());
            if carved[i] || keep {
                continue;
            }
            debug_assert!(!is_room(p));
            grid.mark_obstacle(p);
            walls += 1;
        }
        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_paths::SearchEngine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_density_bounds() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(7));

        let mut g = Grid::new(10);
        assert_eq!(mg.scatter_obstacles(&mut g, 0.0), 0);
        assert_eq!(g.obstacle_count(), 0);

        g.mark_start(Point::new(0, 0));
        g.mark_end(Point::new(9, 9));
        let added = mg.scatter_obstacles(&mut g, 2.0);
        assert_eq!(added, 98);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(9, 9)));
    }

    #[test]
    fn scatter_is_partial() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(42));
        let mut g = Grid::new(30);
        let added = mg.scatter_obstacles(&mut g, 0.3);
        assert!(added > 0);
        assert!(added < 900);
        assert_eq!(g.obstacle_count(), added);
    }

    #[test]
    fn maze_connects_every_room() {
        for (seed, n) in (0..6).zip([11, 8, 20, 9, 4, 14]) {
            let mut mg = MapGen::new(StdRng::seed_from_u64(seed));
            let mut g = Grid::new(n);
            let walls = mg.maze(&mut g);
            assert_eq!(walls, g.obstacle_count());
            assert!(walls > 0);

            // (1, 1) is never carved, so the search floods everything
            // reachable from the origin.
            let r = SearchEngine::new(n).bfs(&g, Point::ZERO, Point::new(1, 1));
            assert!(!r.found());
            for (p, c) in g.iter() {
                if p.x % 2 == 0 && p.y % 2 == 0 {
                    assert!(r.parents.contains(p.index(n)), "room {p} unreachable");
                }
                if !c.is_obstacle() {
                    assert!(r.parents.contains(p.index(n)), "{p} unreachable");
                }
            }
        }
    }

    #[test]
    fn far_corner_is_open_on_every_side() {
        for n in 2..=21 {
            let mut mg = MapGen::new(StdRng::seed_from_u64(n as u64));
            let mut g = Grid::new(n);
            mg.maze(&mut g);
            let corner = Point::new(n - 1, n - 1);
            let r = SearchEngine::new(n).bfs(&g, Point::ZERO, corner);
            assert!(r.found(), "corner of {n}x{n} maze is walled in");
        }
    }

    #[test]
    fn maze_keeps_endpoints() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(3));
        let mut g = Grid::new(8);
        g.mark_start(Point::new(0, 0));
        g.mark_end(Point::new(7, 7));
        mg.maze(&mut g);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(7, 7)));
    }
}
