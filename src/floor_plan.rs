use crate::bfs::bfs;

use super::*;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::{smallvec, SmallVec};
use std::error;
use std::str::FromStr;

/// Reasons a set of character rows cannot be turned into a [FloorPlan].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloorPlanError {
    /// A row does not have the same length as the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for FloorPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorPlanError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
        }
    }
}

impl error::Error for FloorPlanError {}

/// [FloorPlan] stores the obstacles of a warehouse floor in a [BoolGrid] where occupied
/// cells are [true], together with the positions of the start and goal markers.
/// Points use `x` for the column and `y` for the row. Connected components of the free
/// cells are kept in a [UnionFind] structure which can be used to answer reachability
/// queries without searching.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    pub grid: BoolGrid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for FloorPlan {
    fn default() -> FloorPlan {
        FloorPlan {
            grid: BoolGrid::default(),
            start: None,
            goal: None,
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl FloorPlan {
    /// Builds a floor plan from character rows. Every row must be as long as the first one.
    /// `#` cells are obstacles and all other characters are passable. If a marker occurs more
    /// than once, the last occurrence in row-major order is kept.
    ///
    /// Components are not generated here; call [generate_components](Self::generate_components)
    /// before asking reachability questions.
    pub fn from_rows(rows: &[Vec<char>]) -> Result<FloorPlan, FloorPlanError> {
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(FloorPlanError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        // A plan without columns has no cells at all.
        let height = if width == 0 { 0 } else { rows.len() };
        let mut plan = FloorPlan {
            grid: BoolGrid::new(width, height, false),
            start: None,
            goal: None,
            components: UnionFind::new(width * height),
            components_dirty: true,
        };
        for (y, x) in iproduct!(0..height, 0..width) {
            let point = Point::new(x as i32, y as i32);
            match rows[y][x] {
                OBSTACLE => plan.grid.set(point.x, point.y, true),
                START => {
                    if let Some(previous) = plan.start.replace(point) {
                        warn!("Duplicate start marker at {}, replacing {}", point, previous);
                    }
                }
                GOAL => {
                    if let Some(previous) = plan.goal.replace(point) {
                        warn!("Duplicate goal marker at {}, replacing {}", point, previous);
                    }
                }
                _ => {}
            }
        }
        Ok(plan)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// True if the plan has no cells.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Position of the start marker, if the plan has one.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the goal marker, if the plan has one.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        self.grid.index_in_bounds(pos.x, pos.y)
    }

    /// Out-of-bounds points count as blocked.
    pub fn is_blocked(&self, pos: Point) -> bool {
        !self.in_bounds(pos) || self.grid.get(pos.x, pos.y)
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        !self.is_blocked(pos)
    }

    /// The four orthogonal neighbours of a point in the order up, down, left, right. Points
    /// outside the plan are included.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        smallvec![
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
    }

    fn successors(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        self.grid.get_ix_point(point)
    }

    /// Number of orthogonal unit moves on a shortest path from the start marker to the goal
    /// marker. Returns [None] if the plan is empty, a marker is missing or the goal cannot
    /// be reached.
    pub fn shortest_path_length(&self) -> Option<usize> {
        if self.is_empty() {
            info!("Floor plan is empty");
            return None;
        }
        let (start, goal) = match (self.start, self.goal) {
            (Some(start), Some(goal)) => (start, goal),
            (start, goal) => {
                info!(
                    "Floor plan is missing a marker (start: {:?}, goal: {:?})",
                    start, goal
                );
                return None;
            }
        };
        let distance = bfs(&start, |p| self.successors(p), |p| *p == goal);
        match distance {
            Some(d) => info!("{} is {} steps away from {}", goal, d, start),
            None => info!("{} is not reachable from {}", goal, start),
        }
        distance
    }

    /// Blocks or frees a single cell. Blocking a marker cell removes the marker. Joins newly
    /// connected components and flags the components as dirty if they are (potentially)
    /// broken apart into multiple.
    pub fn set_blocked(&mut self, pos: Point, blocked: bool) {
        if !self.in_bounds(pos) {
            warn!("Ignoring update of {} which lies outside the floor plan", pos);
            return;
        }
        if blocked {
            if self.start == Some(pos) {
                self.start = None;
            }
            if self.goal == Some(pos) {
                self.goal = None;
            }
            if !self.grid.get(pos.x, pos.y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.get_ix_point(&pos);
            for n in self.successors(&pos) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        }
        self.grid.set(pos.x, pos.y, blocked);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free orthogonal neighbours to the
    /// same components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..h as i32, 0..w as i32) {
            let point = Point::new(x, y);
            if self.is_blocked(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    let ix = self.get_ix_point(&p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl FromStr for FloorPlan {
    type Err = FloorPlanError;

    /// Parses newline-separated rows. Surrounding whitespace is trimmed and blank lines are
    /// skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect::<Vec<Vec<char>>>();
        FloorPlan::from_rows(&rows)
    }
}

impl fmt::Display for FloorPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if self.start == Some(p) {
                        START
                    } else if self.goal == Some(p) {
                        GOAL
                    } else if self.grid.get(x, y) {
                        OBSTACLE
                    } else {
                        FREE
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
