//! Board snapshot rendering for turn-boundary console dumps.

use super::state::Match;
use super::types::{Coord, Player};

impl Match {
    /// ASCII board snapshot, rank 8 at the top. Player one's pieces are
    /// uppercase.
    #[must_use]
    pub fn snapshot(&self) -> String {
        let mut out = String::with_capacity(9 * 18);
        for rank in (1i8..=8).rev() {
            out.push((b'0' + rank as u8) as char);
            out.push(' ');
            for file in 1i8..=8 {
                let square = Coord::new(file, rank);
                let glyph = match self.piece_at(square) {
                    Some((_, piece)) => {
                        let c = piece.definition.notation;
                        if piece.owner == Player::One {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    }
                    None => '.',
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}
