use warehouse_pathfinding::{shortest_path_length, FloorPlan, UNREACHABLE};

fn rows(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.chars().collect()).collect()
}

#[test]
fn sample_warehouse() {
    let grid = rows(&["S.#.G", "#....", ".#..#", "..#.."]);
    assert_eq!(shortest_path_length(&grid), 6);
}

#[test]
fn blocked_corridor() {
    assert_eq!(shortest_path_length(&rows(&["S#G"])), UNREACHABLE);
}

#[test]
fn straight_corridor() {
    assert_eq!(shortest_path_length(&rows(&["S..G"])), 3);
}

#[test]
fn missing_goal() {
    assert_eq!(shortest_path_length(&rows(&["S"])), UNREACHABLE);
}

#[test]
fn missing_start() {
    assert_eq!(shortest_path_length(&rows(&["..G"])), UNREACHABLE);
}

#[test]
fn adjacent_markers() {
    assert_eq!(shortest_path_length(&rows(&["SG"])), 1);
}

#[test]
fn maze_around_wall() {
    let grid = rows(&["S.#..", "..#..", ".##..", "....G"]);
    assert_eq!(shortest_path_length(&grid), 7);
}

#[test]
fn empty_grid() {
    let grid: Vec<Vec<char>> = Vec::new();
    assert_eq!(shortest_path_length(&grid), UNREACHABLE);
}

#[test]
fn open_ten_by_ten() {
    let mut grid = vec![vec!['.'; 10]; 10];
    grid[0][0] = 'S';
    grid[9][9] = 'G';
    assert_eq!(shortest_path_length(&grid), 18);
}

#[test]
fn goal_enclosed() {
    let grid = rows(&["S....", "...#.", "..#G#", "...#."]);
    assert_eq!(shortest_path_length(&grid), UNREACHABLE);
}

#[test]
fn start_and_goal_on_same_cell() {
    // Markers can only coincide when placed through the plan itself.
    let mut plan: FloorPlan = "S..\n...".parse().unwrap();
    plan.goal = plan.start();
    assert_eq!(plan.shortest_path_length(), Some(0));
}

#[test]
fn repeated_calls_agree() {
    let grid = rows(&["S.#.G", "#....", ".#..#", "..#.."]);
    let first = shortest_path_length(&grid);
    assert_eq!(first, shortest_path_length(&grid));
    assert_eq!(first, 6);
}

#[test]
fn searches_in_parallel() {
    let grids = vec![
        (rows(&["S.#.G", "#....", ".#..#", "..#.."]), 6),
        (rows(&["S#G"]), UNREACHABLE),
        (rows(&["S..G"]), 3),
        (rows(&["SG"]), 1),
    ];
    std::thread::scope(|s| {
        let handles = grids
            .iter()
            .map(|(grid, expected)| s.spawn(move || (shortest_path_length(grid), *expected)))
            .collect::<Vec<_>>();
        for handle in handles {
            let (found, expected) = handle.join().unwrap();
            assert_eq!(found, expected);
        }
    });
}
