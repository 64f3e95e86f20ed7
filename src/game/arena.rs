//! Generation-checked storage for the active piece collection.
//!
//! Captured pieces linger for an animation grace period, so other systems
//! hold [`PieceId`] handles instead of references. Removing a piece bumps its
//! slot's generation; a stale handle then resolves to `None` instead of the
//! slot's next occupant.

use super::piece::Piece;

/// Stable handle to a piece in a [`PieceArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId {
    index: u32,
    generation: u32,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    piece: Option<Piece>,
}

/// Slot-reusing arena keyed by index + generation.
#[derive(Clone, Debug, Default)]
pub(crate) struct PieceArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl PieceArena {
    #[must_use]
    pub(crate) fn new() -> Self {
        PieceArena::default()
    }

    pub(crate) fn insert(&mut self, piece: Piece) -> PieceId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.piece = Some(piece);
            return PieceId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            piece: Some(piece),
        });
        PieceId {
            index,
            generation: 0,
        }
    }

    #[must_use]
    pub(crate) fn get(&self, id: PieceId) -> Option<&Piece> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.piece.as_ref()
    }

    #[must_use]
    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.piece.as_mut()
    }

    /// Remove and return the piece, invalidating every copy of its handle.
    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let piece = slot.piece.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(piece)
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.piece.as_ref().map(|piece| {
                (
                    PieceId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    piece,
                )
            })
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (PieceId, &mut Piece)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.piece.as_mut().map(move |piece| {
                (
                    PieceId {
                        index: index as u32,
                        generation,
                    },
                    piece,
                )
            })
        })
    }
}
