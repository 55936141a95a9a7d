use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

/// A single game: the board of cells plus the generator that places its mines on the first reveal.
///
/// Loss is never stored, it is read off the board: the game is lost as soon as a mine is free.
#[derive(Clone, Debug)]
pub struct Field<G = RandomMinefieldGenerator> {
    config: GameConfig,
    initialized: bool,
    board: Array2<Cell>,
    generator: G,
}

impl Field {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }

    #[cfg(feature = "std")]
    pub fn random(config: GameConfig) -> Result<Self> {
        Self::new(config, rand::random())
    }
}

impl<G: MinefieldGenerator> Field<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            initialized: false,
            board: Array2::default(config.size.to_nd_index()),
            generator,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.size.0
    }

    pub fn height(&self) -> Coord {
        self.config.size.1
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    /// Every cell with its coordinates, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.board
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn marked_count(&self) -> CellCount {
        self.board.iter().filter(|cell| cell.is_marked()).count() as CellCount
    }

    /// Mines minus marks. Goes negative when the player over-marks.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.marked_count())
    }

    /// Reveals the cell at `coords`, generating the board first if this is the opening move.
    ///
    /// A marked cell is only opened when `force` is set. Opening a zero cell also opens the
    /// connected zero region and its numbered border. Hitting a mine returns
    /// [`GameError::MineHit`] and leaves that mine free, which ends the game.
    pub fn check(&mut self, coords: Coord2, force: bool) -> Result<CellType> {
        self.check_game_state()?;
        let coords = self.validate_coords(coords)?;

        if !self.initialized {
            self.initialize(coords)?;
        }

        let cell = self.board[coords.to_nd_index()];
        if !force && cell.is_marked() {
            return Err(GameError::MarkedCellChecked { coords, cell });
        }

        let cell = {
            let cell = &mut self.board[coords.to_nd_index()];
            cell.free();
            *cell
        };

        if cell.is_mine() {
            return Err(GameError::MineHit { coords, cell });
        }

        if cell.kind().is_none() {
            self.flood_free(coords);
        }

        Ok(cell.kind())
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkState> {
        self.check_game_state()?;
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.board[coords.to_nd_index()];
        if cell.is_free() {
            return Err(GameError::AlreadyFreed {
                coords,
                cell: *cell,
            });
        }

        Ok(cell.toggle_mark())
    }

    /// Won once every safe cell is free and every mine is marked.
    pub fn is_game_won(&self) -> bool {
        self.initialized && self.board.iter().all(Cell::is_ready_for_finish)
    }

    pub fn is_game_lost(&self) -> bool {
        self.board.iter().any(Cell::is_freed_mine)
    }

    /// Frees every mine for the end-of-game display. Safe cells keep their state.
    pub fn reveal_all(&mut self) {
        for cell in self.board.iter_mut() {
            cell.reveal_for_display();
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if in_bounds(coords, size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }

    fn check_game_state(&self) -> Result<()> {
        if self.is_game_lost() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn initialize(&mut self, start: Coord2) -> Result<()> {
        let layout = self.generator.generate(&self.config, start);

        if layout.size() != self.config.size || layout.mine_count() != self.config.mines {
            log::warn!(
                "Generated layout mismatch, size: {:?}, mines: {}, expected {:?} with {} mines",
                layout.size(),
                layout.mine_count(),
                self.config.size,
                self.config.mines
            );
            return Err(GameError::InvalidLayout);
        }

        // marks placed before the first reveal carry over onto the generated cells
        let board = Array2::from_shape_fn(self.config.size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            let kind = if layout.contains_mine(coords) {
                CellType::Mine
            } else {
                CellType::from_count(layout.adjacent_mine_count(coords))
                    .expect("a cell has at most 8 neighbours")
            };
            Cell::new(kind, self.board[[x, y]].state())
        });

        self.board = board;
        self.initialized = true;

        log::debug!(
            "Generated {}x{} board with {} mines around {:?}",
            self.config.size.0,
            self.config.size.1,
            self.config.mines,
            start
        );
        Ok(())
    }

    fn flood_free(&mut self, origin: Coord2) {
        let mut freed = 0usize;
        let mut to_visit: VecDeque<_> = self.closed_safe_neighbors(origin).collect();

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.board[coords.to_nd_index()];

            // queued more than once before being reached
            if cell.is_free() {
                continue;
            }

            cell.free();
            freed += 1;

            if cell.kind().is_none() {
                let neighbors = self.closed_safe_neighbors(coords);
                to_visit.extend(neighbors);
            }
        }

        log::trace!("Flood fill from {:?} freed {} cells", origin, freed);
    }

    fn closed_safe_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        iter_neighbors(coords, self.size()).filter(|&pos| {
            let cell = self.board[pos.to_nd_index()];
            !cell.is_mine() && !cell.is_free()
        })
    }
}
