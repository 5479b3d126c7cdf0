//! The flat-arena game board and the rules that drive it.
//!
//! A [`Board`] owns a `size * size` vector of [`Cell`]s, the per-size
//! [`BlockerIndex`], and a pair of legal-action lists with O(1) removal.
//! [`Board::apply_action`] implements peg placement, automatic link
//! drawing, candidate pruning, border flood-fill and the pie-rule swap.

use crate::board::{
    off_board, on_player_border, Action, Compass, Coord, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::cell::{Border, Cell, Color, Player, PLAYER_COUNT};
use crate::error::GameError;
use crate::links::{BlockerIndex, Link};
use serde::{Deserialize, Serialize};

/// Outcome of a game in progress or finished
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    Open,
    RedWon,
    BlueWon,
    Draw,
}

impl GameResult {
    pub fn is_open(self) -> bool {
        self == GameResult::Open
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::RedWon => Some(Player::Red),
            GameResult::BlueWon => Some(Player::Blue),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    ansi_color: bool,
    cells: Vec<Cell>,
    blockers: BlockerIndex,
    legal_actions: [Vec<Action>; PLAYER_COUNT],
    // position of each action inside legal_actions, None once removed
    legal_action_index: [Vec<Option<usize>>; PLAYER_COUNT],
    move_counter: u32,
    move_one: Option<Action>,
    swapped: bool,
    result: GameResult,
}

impl Board {
    /// Builds an empty board. The blocker index is computed here, once,
    /// and survives the pie-rule rollback unchanged.
    pub fn new(size: usize, ansi_color: bool) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::BoardSize { size });
        }
        let mut board = Self {
            size,
            ansi_color,
            cells: vec![Cell::default(); size * size],
            blockers: BlockerIndex::new(size),
            legal_actions: [Vec::new(), Vec::new()],
            legal_action_index: [Vec::new(), Vec::new()],
            move_counter: 0,
            move_one: None,
            swapped: false,
            result: GameResult::Open,
        };
        board.reset_position();
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ansi_color_output(&self) -> bool {
        self.ansi_color
    }

    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    pub fn swapped(&self) -> bool {
        self.swapped
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn cell(&self, c: Coord) -> &Cell {
        &self.cells[self.cell_index(c)]
    }

    pub fn color(&self, c: Coord) -> Color {
        self.cell(c).color()
    }

    pub fn legal_actions(&self, player: Player) -> &[Action] {
        &self.legal_actions[player.index()]
    }

    pub fn is_legal_action(&self, player: Player, action: Action) -> bool {
        self.legal_action_index[player.index()][action].is_some()
    }

    fn cell_index(&self, c: Coord) -> usize {
        debug_assert!(c.on_grid(self.size));
        c.y as usize * self.size + c.x as usize
    }

    fn cell_mut(&mut self, c: Coord) -> &mut Cell {
        let index = self.cell_index(c);
        &mut self.cells[index]
    }

    /// Empties every cell and recomputes neighbors, border flags,
    /// candidates and legal actions. Used at construction and to roll the
    /// first move back when the second player swaps.
    fn reset_position(&mut self) {
        self.cells.fill(Cell::default());
        self.initialize_cells();
        self.initialize_candidates();
        self.initialize_legal_actions();
    }

    fn initialize_cells(&mut self) {
        let size = self.size;
        let last = (size - 1) as i8;
        for y in 0..size as i8 {
            for x in 0..size as i8 {
                let c = Coord::new(x, y);
                if off_board(c, size) {
                    continue;
                }
                let cell = self.cell_mut(c);
                cell.set_color(Color::Empty);
                // empty border cells already count as connected to their edge
                if c.x == 0 {
                    cell.set_linked_to_border(Player::Blue, Border::Start);
                } else if c.x == last {
                    cell.set_linked_to_border(Player::Blue, Border::End);
                } else if c.y == 0 {
                    cell.set_linked_to_border(Player::Red, Border::Start);
                } else if c.y == last {
                    cell.set_linked_to_border(Player::Red, Border::End);
                }
                for dir in Compass::ALL {
                    let target = c.offset(dir.offset());
                    if !off_board(target, size) {
                        self.cell_mut(c).set_neighbor(dir, target);
                    }
                }
            }
        }
    }

    fn initialize_candidates(&mut self) {
        let size = self.size;
        for y in 0..size as i8 {
            for x in 0..size as i8 {
                let c = Coord::new(x, y);
                if off_board(c, size) {
                    continue;
                }
                for dir in Compass::ALL {
                    let target = c.offset(dir.offset());
                    if off_board(target, size) {
                        continue;
                    }
                    // a link joining one player's home row to the other's
                    // home column is useless to both sides
                    let crosses_borders = (on_player_border(Player::Red, c, size)
                        && on_player_border(Player::Blue, target, size))
                        || (on_player_border(Player::Blue, c, size)
                            && on_player_border(Player::Red, target, size));
                    if crosses_borders {
                        continue;
                    }
                    let cell = self.cell_mut(c);
                    cell.set_candidate(Player::Red, dir);
                    cell.set_candidate(Player::Blue, dir);
                }
            }
        }
    }

    fn initialize_legal_actions(&mut self) {
        let size = self.size;
        for player in [Player::Red, Player::Blue] {
            let p = player.index();
            self.legal_actions[p].clear();
            self.legal_action_index[p] = vec![None; size * size];
            for action in 0..size * size {
                let c = Coord::from_action(action, size);
                if off_board(c, size) || on_player_border(player.opponent(), c, size) {
                    continue;
                }
                self.legal_action_index[p][action] = Some(self.legal_actions[p].len());
                self.legal_actions[p].push(action);
            }
        }
    }

    /// Places a peg for `player`, draws every legal link, prunes the
    /// candidates the new links rule out and updates the game result.
    ///
    /// Panics when the game is over or the action is not legal for
    /// `player`. At move one, replaying the first move means the second
    /// player swaps: the first peg is removed and re-placed, mirrored
    /// along the main diagonal, in the second player's color.
    pub fn apply_action(&mut self, player: Player, action: Action) {
        assert!(self.result.is_open(), "game is over");
        assert!(action < self.size * self.size, "action out of range: {action}");
        assert!(
            self.is_legal_action(player, action),
            "illegal action for {:?}: {action}",
            player
        );

        let mut action = action;
        if self.move_counter == 1 {
            let move_one = self.move_one.unwrap_or(action);
            if action == move_one {
                self.swapped = true;
                self.reset_position();
                action = Self::mirror_action(action, self.size);
            } else {
                // the offer was declined, retire the first move now
                self.remove_legal_action(Player::Red, move_one);
                self.remove_legal_action(Player::Blue, move_one);
            }
        }

        self.place_peg_and_links(player, action);

        if self.move_counter == 0 {
            // keep the move legal so the second player may repeat it to swap
            self.move_one = Some(action);
            self.move_counter += 1;
            return;
        }

        self.remove_legal_action(Player::Red, action);
        self.remove_legal_action(Player::Blue, action);
        self.move_counter += 1;
        self.update_result(player, action);
    }

    /// First-move coordinate after a swap, mirrored along the diagonal:
    /// (x, y) becomes (size-1-y, x)
    fn mirror_action(action: Action, size: usize) -> Action {
        let x = action % size;
        let y = action / size;
        x * size + (size - y - 1)
    }

    fn place_peg_and_links(&mut self, player: Player, action: Action) {
        let c = Coord::from_action(action, self.size);
        let mut linked_to_neutral = false;

        self.cell_mut(c).set_color(Color::Owned(player));

        for dir in Compass::ALL {
            if !self.cell(c).is_candidate(player, dir) {
                continue;
            }
            let target = match self.cell(c).neighbor(dir) {
                Some(target) => target,
                None => continue,
            };
            match self.cell(target).color() {
                Color::Empty => {
                    // the new peg is in the way of the opponent
                    self.cell_mut(target)
                        .delete_candidate(player.opponent(), dir.opposite());
                }
                Color::Owned(owner) if owner == player => {
                    self.cell_mut(c).set_link(dir);
                    self.cell_mut(target).set_link(dir.opposite());

                    // every candidate crossing the new link dies, for both sides
                    let blocked = self.blockers.blockers(Link::new(c, dir)).to_vec();
                    for link in blocked {
                        self.cell_mut(link.from).delete_candidate_for_both(link.dir);
                    }

                    let mut neutral = true;
                    for border in Border::BOTH {
                        if self.cell(target).is_linked_to_border(player, border) {
                            self.cell_mut(c).set_linked_to_border(player, border);
                            neutral = false;
                        }
                    }
                    if neutral {
                        linked_to_neutral = true;
                    }
                }
                Color::Owned(_) => {
                    // stale candidate pointing at an opponent peg
                    self.cell_mut(c).delete_candidate(player, dir);
                }
                Color::OffBoard => unreachable!("candidate towards an off-board cell"),
            }
        }

        // propagate fresh border flags into the neutral part of the group
        for border in Border::BOTH {
            if linked_to_neutral && self.cell(c).is_linked_to_border(player, border) {
                self.explore_border_graph(player, c, border);
            }
        }
    }

    /// Marks every peg reachable from `start` over links as connected to
    /// `border`. Explicit worklist, no recursion.
    fn explore_border_graph(&mut self, player: Player, start: Coord, border: Border) {
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            for dir in Compass::ALL {
                if !self.cell(c).has_link(dir) {
                    continue;
                }
                let target = match self.cell(c).neighbor(dir) {
                    Some(target) => target,
                    None => continue,
                };
                if !self.cell(target).is_linked_to_border(player, border) {
                    self.cell_mut(target).set_linked_to_border(player, border);
                    stack.push(target);
                }
            }
        }
    }

    fn remove_legal_action(&mut self, player: Player, action: Action) {
        let p = player.index();
        if let Some(pos) = self.legal_action_index[p][action].take() {
            let moved = self.legal_actions[p][self.legal_actions[p].len() - 1];
            self.legal_actions[p].swap_remove(pos);
            if moved != action {
                self.legal_action_index[p][moved] = Some(pos);
            }
        }
    }

    fn update_result(&mut self, player: Player, action: Action) {
        let c = Coord::from_action(action, self.size);
        if self.cell(c).is_linked_to_border(player, Border::Start)
            && self.cell(c).is_linked_to_border(player, Border::End)
        {
            self.result = match player {
                Player::Red => GameResult::RedWon,
                Player::Blue => GameResult::BlueWon,
            };
            return;
        }
        // a draw takes at least size-1 moves to set up
        if (self.move_counter as usize) < self.size - 1 {
            return;
        }
        if self.legal_actions(player.opponent()).is_empty() {
            self.result = GameResult::Draw;
        }
    }
}
