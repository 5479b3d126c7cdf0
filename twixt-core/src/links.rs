//! Static link geometry and the per-board blocker index.
//!
//! For every direction there is an exhaustive list of the other
//! (relative offset, direction) link segments that geometrically cross it on
//! the knight's-move lattice. The [`BlockerIndex`] instantiates those lists
//! for a concrete board size, clipped to on-board coordinates, so that move
//! application can drop every candidate a freshly drawn link rules out with
//! a single map lookup.

use crate::board::{off_board, Compass, Coord, COMPASS_COUNT};
use rustc_hash::FxHashMap;

/// Links crossing NNE..NNW, indexed by direction. Each entry is
/// (offset of the crossing link's source peg, its direction).
static CROSSINGS: [&[((i8, i8), Compass)]; COMPASS_COUNT] = [
    // NNE
    &[
        ((0, 1), Compass::Ene),
        ((-1, 0), Compass::Ene),
        ((0, 2), Compass::Ese),
        ((0, 1), Compass::Ese),
        ((-1, 2), Compass::Ese),
        ((-1, 1), Compass::Ese),
        ((0, 1), Compass::Sse),
        ((0, 2), Compass::Sse),
        ((0, 3), Compass::Sse),
    ],
    // ENE
    &[
        ((0, -1), Compass::Nne),
        ((1, 0), Compass::Nne),
        ((-1, 1), Compass::Ese),
        ((0, 1), Compass::Ese),
        ((1, 1), Compass::Ese),
        ((0, 1), Compass::Sse),
        ((0, 2), Compass::Sse),
        ((1, 1), Compass::Sse),
        ((1, 2), Compass::Sse),
    ],
    // ESE
    &[
        ((0, -1), Compass::Nne),
        ((1, -1), Compass::Nne),
        ((0, -2), Compass::Nne),
        ((1, -2), Compass::Nne),
        ((-1, -1), Compass::Ene),
        ((0, -1), Compass::Ene),
        ((1, -1), Compass::Ene),
        ((0, 1), Compass::Sse),
        ((1, 0), Compass::Sse),
    ],
    // SSE
    &[
        ((0, -1), Compass::Nne),
        ((0, -2), Compass::Nne),
        ((0, -3), Compass::Nne),
        ((-1, -1), Compass::Ene),
        ((0, -1), Compass::Ene),
        ((-1, -2), Compass::Ene),
        ((0, -2), Compass::Ene),
        ((-1, 0), Compass::Ese),
        ((0, -1), Compass::Ese),
    ],
    // SSW
    &[
        ((-1, -1), Compass::Ene),
        ((-2, -2), Compass::Ene),
        ((-2, 0), Compass::Ese),
        ((-1, 0), Compass::Ese),
        ((-2, -1), Compass::Ese),
        ((-1, -1), Compass::Ese),
        ((-1, 1), Compass::Sse),
        ((-1, 0), Compass::Sse),
        ((-1, -1), Compass::Sse),
    ],
    // WSW
    &[
        ((-2, -2), Compass::Nne),
        ((-1, -1), Compass::Nne),
        ((-3, 0), Compass::Ese),
        ((-2, 0), Compass::Ese),
        ((-1, 0), Compass::Ese),
        ((-2, 1), Compass::Sse),
        ((-1, 1), Compass::Sse),
        ((-2, 0), Compass::Sse),
        ((-1, 0), Compass::Sse),
    ],
    // WNW
    &[
        ((-2, 0), Compass::Nne),
        ((-1, 0), Compass::Nne),
        ((-2, -1), Compass::Nne),
        ((-1, -1), Compass::Nne),
        ((-3, 0), Compass::Ene),
        ((-2, 0), Compass::Ene),
        ((-1, 0), Compass::Ene),
        ((-2, 2), Compass::Sse),
        ((-1, 1), Compass::Sse),
    ],
    // NNW
    &[
        ((-1, 1), Compass::Nne),
        ((-1, 0), Compass::Nne),
        ((-1, -1), Compass::Nne),
        ((-2, 1), Compass::Ene),
        ((-1, 1), Compass::Ene),
        ((-2, 0), Compass::Ene),
        ((-1, 0), Compass::Ene),
        ((-2, 2), Compass::Ese),
        ((-1, 1), Compass::Ese),
    ],
];

/// Identity of one prospective link, seen from its source peg
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub from: Coord,
    pub dir: Compass,
}

impl Link {
    pub fn new(from: Coord, dir: Compass) -> Self {
        Self { from, dir }
    }

    /// The same physical link keyed from its target peg
    pub fn reversed(self) -> Self {
        Self::new(self.from.offset(self.dir.offset()), self.dir.opposite())
    }
}

/// Map from each on-board candidate link to every other link that would
/// cross it. Depends on the board size only; built once per [`crate::Board`]
/// and never mutated afterwards, so the pie-rule rollback can reuse it.
///
/// Both keys of a physical link (source and target perspective) are present,
/// and each crossing link appears under both of its own keys as well, which
/// makes the relation fully symmetric.
#[derive(Clone, Debug, Default)]
pub struct BlockerIndex {
    map: FxHashMap<Link, Vec<Link>>,
}

impl BlockerIndex {
    pub fn new(size: usize) -> Self {
        let mut map: FxHashMap<Link, Vec<Link>> = FxHashMap::default();

        for y in 0..size as i8 {
            for x in 0..size as i8 {
                let c = Coord::new(x, y);
                if off_board(c, size) {
                    continue;
                }
                for dir in Compass::ALL {
                    if off_board(c.offset(dir.offset()), size) {
                        continue;
                    }
                    let link = Link::new(c, dir);
                    for &(delta, crossing_dir) in CROSSINGS[dir.index()] {
                        let from = c.offset(delta);
                        if off_board(from, size) {
                            continue;
                        }
                        let crossing = Link::new(from, crossing_dir);
                        if off_board(crossing.reversed().from, size) {
                            continue;
                        }
                        let entry = map.entry(link).or_default();
                        entry.push(crossing);
                        entry.push(crossing.reversed());
                    }
                }
            }
        }

        Self { map }
    }

    /// Every link that crosses `link`; empty when nothing can block it
    pub fn blockers(&self, link: Link) -> &[Link] {
        self.map.get(&link).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Link, &[Link])> {
        self.map.iter().map(|(link, blockers)| (*link, blockers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_direction_has_nine_crossings() {
        for dir in Compass::ALL {
            assert_eq!(CROSSINGS[dir.index()].len(), 9, "{:?}", dir);
        }
    }

    #[test]
    fn test_blocking_is_mutual() {
        let index = BlockerIndex::new(8);
        assert!(!index.is_empty());
        for (link, blockers) in index.iter() {
            for &blocker in blockers {
                assert!(
                    index.blockers(blocker).contains(&link),
                    "{:?} blocks {:?} but not vice versa",
                    link,
                    blocker
                );
            }
        }
    }

    #[test]
    fn test_both_link_perspectives_share_blockers() {
        let index = BlockerIndex::new(8);
        for (link, blockers) in index.iter() {
            let reversed = index.blockers(link.reversed());
            assert_eq!(blockers.len(), reversed.len(), "{:?}", link);
            for blocker in blockers {
                assert!(reversed.contains(blocker), "{:?} vs {:?}", link, blocker);
            }
        }
    }

    #[test]
    fn test_interior_crossings_are_clipped_near_edges() {
        let index = BlockerIndex::new(8);
        // an interior NNE link sees all nine crossings, twice-keyed
        let interior = Link::new(Coord::new(3, 3), Compass::Nne);
        assert_eq!(index.blockers(interior).len(), 18);
        // next to a corner, crossers rooted off the board disappear
        let edge = Link::new(Coord::new(1, 0), Compass::Nne);
        assert_eq!(index.blockers(edge).len(), 14);
    }
}
