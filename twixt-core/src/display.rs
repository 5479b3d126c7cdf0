//! Text rendering of a board position.
//!
//! Three text lines per rank: a line above the pegs, the peg line itself
//! and a line below, so the diagonal link glyphs have somewhere to go.
//! Red pegs print as `X`, blue pegs as `O`, empty holes as `.`, and links
//! as `/`, `\`, `|` and `_` in the owner's color when ANSI output is on.

use crate::board::{off_board, Action, Compass, Coord};
use crate::cell::{Color, Player};
use crate::game::{Board, GameResult};
use std::fmt;

const ANSI_RED: &str = "\x1b[91m";
const ANSI_BLUE: &str = "\x1b[94m";
const ANSI_DEFAULT: &str = "\x1b[0m";

impl Board {
    /// Human-readable move notation: column letter plus row number,
    /// counted from the top ("A1" is the upper left hole)
    pub fn action_to_string(&self, action: Action) -> String {
        let size = self.size();
        let column = (b'A' + (action % size) as u8) as char;
        format!("{}{}", column, size - action / size)
    }

    /// Inverse of [`Board::action_to_string`]; `None` for anything that is
    /// not a coordinate on this board
    pub fn action_from_string(&self, notation: &str) -> Option<Action> {
        let size = self.size();
        let mut chars = notation.chars();
        let column = chars.next()?;
        let x = (column as u32).checked_sub('A' as u32)? as usize;
        if x >= size {
            return None;
        }
        let row: usize = chars.as_str().parse().ok()?;
        if row == 0 || row > size {
            return None;
        }
        Some((size - row) * size + x)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer {
            board: self,
            out: String::new(),
        };
        renderer.render();
        f.write_str(&renderer.out)
    }
}

struct Renderer<'a> {
    board: &'a Board,
    out: String,
}

impl Renderer<'_> {
    fn render(&mut self) {
        let size = self.board.size();

        // column letters
        self.out.push_str("     ");
        for x in 0..size {
            let letter = format!("{}  ", (b'A' + x as u8) as char);
            self.colored(ANSI_RED, &letter);
        }
        self.out.push('\n');

        // row 1 is at the top
        for y in (0..size).rev() {
            self.out.push_str("    ");
            for x in 0..size {
                self.before_row(Coord::new(x as i8, y as i8));
            }
            self.out.push('\n');

            let label = size - y;
            self.out.push_str(if label < 10 { "  " } else { " " });
            self.colored(ANSI_BLUE, &format!("{} ", label));
            for x in 0..size {
                self.peg_row(Coord::new(x as i8, y as i8));
            }
            self.out.push('\n');

            self.out.push_str("    ");
            for x in 0..size {
                self.after_row(Coord::new(x as i8, y as i8));
            }
            self.out.push('\n');
        }
        self.out.push('\n');

        if self.board.swapped() {
            self.out.push_str("[swapped]");
        }
        match self.board.result() {
            GameResult::Open => {}
            GameResult::RedWon => self.out.push_str("[X has won]"),
            GameResult::BlueWon => self.out.push_str("[O has won]"),
            GameResult::Draw => self.out.push_str("[draw]"),
        }
    }

    fn before_row(&mut self, c: Coord) {
        self.slot(|r| {
            r.link_char(c.offset((-1, 0)), Compass::Ene, "/");
            r.link_char(c.offset((-1, -1)), Compass::Nne, "/");
            r.link_char(c, Compass::Wnw, "_");
        });
        self.slot(|r| {
            let len = r.out.len();
            r.link_char(c, Compass::Nne, "|");
            if r.out.len() == len {
                r.link_char(c, Compass::Nnw, "|");
            }
        });
        self.slot(|r| {
            r.link_char(c.offset((1, 0)), Compass::Wnw, "\\");
            r.link_char(c.offset((1, -1)), Compass::Nnw, "\\");
            r.link_char(c, Compass::Ene, "_");
        });
    }

    fn peg_row(&mut self, c: Coord) {
        self.slot(|r| {
            r.link_char(c.offset((-1, -1)), Compass::Nne, "|");
            r.link_char(c, Compass::Wsw, "_");
        });
        self.peg_char(c);
        self.slot(|r| {
            r.link_char(c.offset((1, -1)), Compass::Nnw, "|");
            r.link_char(c, Compass::Ese, "_");
        });
    }

    fn after_row(&mut self, c: Coord) {
        self.slot(|r| {
            r.link_char(c.offset((1, -1)), Compass::Wnw, "\\");
            r.link_char(c.offset((0, -1)), Compass::Nnw, "\\");
        });
        self.slot(|r| {
            let len = r.out.len();
            r.link_char(c.offset((-1, -1)), Compass::Ene, "_");
            r.link_char(c.offset((1, -1)), Compass::Wnw, "_");
            r.link_char(c, Compass::Ssw, "|");
            if r.out.len() == len {
                r.link_char(c, Compass::Sse, "|");
            }
        });
        self.slot(|r| {
            r.link_char(c.offset((-1, -1)), Compass::Ene, "/");
            r.link_char(c.offset((0, -1)), Compass::Nne, "/");
        });
    }

    // pads the slot with a space when nothing was printed into it
    fn slot(&mut self, fill: impl FnOnce(&mut Self)) {
        let len = self.out.len();
        fill(self);
        if self.out.len() == len {
            self.out.push(' ');
        }
    }

    fn link_char(&mut self, c: Coord, dir: Compass, glyph: &str) {
        if off_board(c, self.board.size()) || !self.board.cell(c).has_link(dir) {
            return;
        }
        match self.board.cell(c).color() {
            Color::Owned(Player::Red) => self.colored(ANSI_RED, glyph),
            Color::Owned(Player::Blue) => self.colored(ANSI_BLUE, glyph),
            _ => self.out.push_str(glyph),
        }
    }

    fn peg_char(&mut self, c: Coord) {
        let size = self.board.size();
        let last = (size - 1) as i8;
        match self.board.cell(c).color() {
            Color::Owned(Player::Red) => self.colored(ANSI_RED, "X"),
            Color::Owned(Player::Blue) => self.colored(ANSI_BLUE, "O"),
            _ if off_board(c, size) => self.out.push(' '),
            _ if c.x == 0 || c.x == last => self.colored(ANSI_BLUE, "."),
            _ if c.y == 0 || c.y == last => self.colored(ANSI_RED, "."),
            _ => self.out.push('.'),
        }
    }

    fn colored(&mut self, color: &str, text: &str) {
        if self.board.ansi_color_output() {
            self.out.push_str(color);
        }
        self.out.push_str(text);
        if self.board.ansi_color_output() {
            self.out.push_str(ANSI_DEFAULT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize) -> Board {
        Board::new(size, false).unwrap()
    }

    #[test]
    fn test_empty_board_layout() {
        let board = board(5);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "     A  B  C  D  E  ");
        // three lines per rank plus the header and the closing blank line
        assert_eq!(lines.len(), 1 + 3 * 5 + 1);
        assert!(rendered.ends_with("\n\n"));
        // row numbers count down from the top
        assert!(lines[2].starts_with("  1 "));
        assert!(lines[14].starts_with("  5 "));
        // corners have no hole
        assert!(!rendered.contains('X'));
        assert_eq!(rendered.matches('.').count(), 21);
    }

    #[test]
    fn test_pegs_and_links_are_rendered() {
        let mut board = board(8);
        board.apply_action(Player::Red, Coord::new(2, 3).action(8));
        board.apply_action(Player::Blue, Coord::new(5, 5).action(8));
        board.apply_action(Player::Red, Coord::new(3, 5).action(8));
        let rendered = board.to_string();
        assert_eq!(rendered.matches('X').count(), 2);
        assert_eq!(rendered.matches('O').count(), 1);
        // the knight's-move link shows up as a vertical glyph
        assert!(rendered.contains('|'));
    }

    #[test]
    fn test_ansi_colors_wrap_pegs() {
        let mut board = Board::new(8, true).unwrap();
        board.apply_action(Player::Red, Coord::new(3, 3).action(8));
        board.apply_action(Player::Blue, Coord::new(4, 4).action(8));
        let rendered = board.to_string();
        assert!(rendered.contains("\x1b[91mX\x1b[0m"));
        assert!(rendered.contains("\x1b[94mO\x1b[0m"));
    }

    #[test]
    fn test_result_trailers() {
        let mut board = board(5);
        for &(player, x, y) in &[
            (Player::Red, 1, 0),
            (Player::Blue, 0, 1),
            (Player::Red, 2, 2),
            (Player::Blue, 4, 1),
            (Player::Red, 1, 4),
        ] {
            board.apply_action(player, Coord::new(x, y).action(5));
        }
        assert!(board.to_string().ends_with("[X has won]"));
    }

    #[test]
    fn test_swap_trailer() {
        let mut board = board(8);
        let first = Coord::new(2, 4).action(8);
        board.apply_action(Player::Red, first);
        board.apply_action(Player::Blue, first);
        assert!(board.to_string().ends_with("[swapped]"));
    }

    #[test]
    fn test_action_notation() {
        let board = board(8);
        assert_eq!(board.action_to_string(Coord::new(0, 7).action(8)), "A1");
        assert_eq!(board.action_to_string(Coord::new(2, 4).action(8)), "C4");
        assert_eq!(board.action_from_string("A1"), Some(Coord::new(0, 7).action(8)));
        assert_eq!(board.action_from_string("Z1"), None);
        assert_eq!(board.action_from_string("A9"), None);
        assert_eq!(board.action_from_string("A0"), None);
        assert_eq!(board.action_from_string(""), None);
        for action in 0..64 {
            let notation = board.action_to_string(action);
            assert_eq!(board.action_from_string(&notation), Some(action));
        }
    }
}
