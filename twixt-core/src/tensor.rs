//! Observation tensor for learning agents.
//!
//! Eleven planes of `size * (size - 2)` values: for each player a plane of
//! unlinked pegs and one plane per northward link direction, then a plane
//! holding the side to move. The two home columns carry no blue pegs and
//! the home rows no red ones, so each player's planes skip their dead
//! stripe; blue planes are rotated a quarter turn so both players see
//! their own goal at the top.

use crate::board::{Compass, Coord};
use crate::cell::{Cell, Color, Player};
use crate::game::Board;

/// 2 players * (1 peg plane + 4 link planes) + 1 side-to-move plane
pub const NUM_PLANES: usize = 11;

/// Number of values per plane
pub fn plane_extent(size: usize) -> usize {
    size * (size - 2)
}

/// Flattens the position into `NUM_PLANES` planes of f64 in {0.0, 1.0}
pub fn encode(board: &Board, to_move: Player) -> Vec<f64> {
    let size = board.size();
    let mut values = Vec::with_capacity(NUM_PLANES * plane_extent(size));

    for player in [Player::Red, Player::Blue] {
        add_plane(board, player, &mut values, |cell| !cell.has_links());
        for dir in &Compass::ALL[..4] {
            add_plane(board, player, &mut values, |cell| cell.has_link(*dir));
        }
    }

    // all zeros when red is to move, all ones for blue
    let side = to_move.index() as f64;
    values.extend(std::iter::repeat(side).take(plane_extent(size)));
    values
}

fn add_plane(
    board: &Board,
    player: Player,
    values: &mut Vec<f64>,
    predicate: impl Fn(&Cell) -> bool,
) {
    let size = board.size() as i8;
    let mut push = |c: Coord| {
        let cell = board.cell(c);
        let owned = cell.color() == Color::Owned(player);
        values.push(if owned && predicate(cell) { 1.0 } else { 0.0 });
    };
    match player {
        Player::Red => {
            for y in 0..size {
                for x in 1..size - 1 {
                    push(Coord::new(x, y));
                }
            }
        }
        // blue sees the board turned a quarter turn clockwise
        Player::Blue => {
            for y in (1..size - 1).rev() {
                for x in 0..size {
                    push(Coord::new(x, y));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_shape() {
        let board = Board::new(8, false).unwrap();
        let values = encode(&board, Player::Red);
        assert_eq!(values.len(), NUM_PLANES * plane_extent(8));
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_side_to_move_plane() {
        let board = Board::new(8, false).unwrap();
        let extent = plane_extent(8);
        let red = encode(&board, Player::Red);
        assert!(red[10 * extent..].iter().all(|&v| v == 0.0));
        let blue = encode(&board, Player::Blue);
        assert!(blue[10 * extent..].iter().all(|&v| v == 1.0));
        assert_eq!(blue[10 * extent..].len(), extent);
    }

    #[test]
    fn test_unlinked_peg_plane() {
        let mut board = Board::new(8, false).unwrap();
        board.apply_action(Player::Red, Coord::new(3, 3).action(8));
        let values = encode(&board, Player::Blue);
        // red planes drop the home columns, so x maps to x - 1
        let index = 3 * 6 + (3 - 1);
        assert_eq!(values[index], 1.0);
        assert_eq!(values.iter().filter(|&&v| v == 1.0).count(), plane_extent(8) + 1);
    }

    #[test]
    fn test_linked_pegs_move_to_link_planes() {
        let mut board = Board::new(8, false).unwrap();
        board.apply_action(Player::Red, Coord::new(2, 3).action(8));
        board.apply_action(Player::Blue, Coord::new(6, 6).action(8));
        board.apply_action(Player::Red, Coord::new(3, 5).action(8));
        let values = encode(&board, Player::Red);
        let extent = plane_extent(8);
        // both red pegs are linked, the unlinked-peg plane is empty
        assert!(values[..extent].iter().all(|&v| v == 0.0));
        // the northeast link is recorded at its source peg (2,3)
        let nne_plane = &values[extent..2 * extent];
        assert_eq!(nne_plane[3 * 6 + (2 - 1)], 1.0);
        assert_eq!(nne_plane.iter().filter(|&&v| v == 1.0).count(), 1);
    }

    #[test]
    fn test_blue_planes_are_rotated() {
        let mut board = Board::new(8, false).unwrap();
        board.apply_action(Player::Red, Coord::new(3, 3).action(8));
        board.apply_action(Player::Blue, Coord::new(5, 2).action(8));
        let values = encode(&board, Player::Red);
        let extent = plane_extent(8);
        let blue_pegs = &values[5 * extent..6 * extent];
        // blue rows run from y = size-2 down to 1
        let index = (6 - 2) * 8 + 5;
        assert_eq!(blue_pegs[index], 1.0);
        assert_eq!(blue_pegs.iter().filter(|&&v| v == 1.0).count(), 1);
    }
}
