use serde::{Deserialize, Serialize};

/// What a cell holds: a mine, or the number of mines among its neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Mine,
    Number(u8),
}

impl CellType {
    pub const NONE: Self = Self::Number(0);

    /// Label for a neighbour count, `None` past the 8 possible neighbours.
    pub const fn from_count(mines_around: u8) -> Option<Self> {
        if mines_around <= 8 {
            Some(Self::Number(mines_around))
        } else {
            None
        }
    }

    pub const fn mines_around(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Number(count) => Some(count),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::Number(0))
    }
}

impl Default for CellType {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkState {
    Unmarked,
    Marked,
    /// Opened. Terminal, a free cell never goes back.
    Free,
}

impl Default for MarkState {
    fn default() -> Self {
        Self::Unmarked
    }
}

/// Player-visible rendering of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Marked,
    Open(u8),
    Mine,
}

impl CellView {
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Marked)
    }
}

/// A single grid position.
///
/// The type is fixed once the cell is built; the state only moves through the
/// crate-internal transitions driven by [`Field`](crate::Field).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellType,
    state: MarkState,
}

impl Cell {
    pub const fn new(kind: CellType, state: MarkState) -> Self {
        Self { kind, state }
    }

    pub const fn kind(&self) -> CellType {
        self.kind
    }

    pub const fn state(&self) -> MarkState {
        self.state
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub const fn is_marked(&self) -> bool {
        matches!(self.state, MarkState::Marked)
    }

    pub const fn is_free(&self) -> bool {
        matches!(self.state, MarkState::Free)
    }

    /// Safe cell that still has to be opened.
    pub const fn is_non_freed(&self) -> bool {
        !self.is_mine() && !self.is_free()
    }

    pub const fn is_unmarked_mine(&self) -> bool {
        self.is_mine() && !self.is_marked()
    }

    /// An opened mine, the losing condition.
    pub const fn is_freed_mine(&self) -> bool {
        self.is_mine() && self.is_free()
    }

    /// Whether this cell no longer stands between the player and a win.
    pub const fn is_ready_for_finish(&self) -> bool {
        !self.is_non_freed() && !self.is_unmarked_mine()
    }

    pub const fn view(&self) -> CellView {
        match (self.state, self.kind) {
            (MarkState::Unmarked, _) => CellView::Hidden,
            (MarkState::Marked, _) => CellView::Marked,
            (MarkState::Free, CellType::Mine) => CellView::Mine,
            (MarkState::Free, CellType::Number(count)) => CellView::Open(count),
        }
    }

    pub(crate) fn toggle_mark(&mut self) -> MarkState {
        use MarkState::*;

        self.state = match self.state {
            Marked => Unmarked,
            Unmarked => Marked,
            Free => Free,
        };
        self.state
    }

    pub(crate) fn free(&mut self) {
        self.state = MarkState::Free;
    }

    pub(crate) fn reveal_for_display(&mut self) {
        if self.is_mine() {
            self.state = MarkState::Free;
        }
    }
}
