use std::fmt;

use crate::error::{ConfigError, MoveError};
use crate::search::{Board, Score};

use super::{BoardEvent, BoardObserver, ConnectMove, Coord, MoveOrdering, Player};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Stones in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Geometry and heuristic weights of a board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// One weight per column including the two border columns, so
    /// `width + 2` entries. Border weights are never used.
    pub column_weights: Vec<i32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: COLS,
            height: ROWS,
            column_weights: vec![0, 10, 20, 40, 80, 40, 20, 10, 0],
        }
    }
}

impl BoardConfig {
    /// Configuration for an arbitrary grid with [`centered_weights`].
    ///
    /// [`centered_weights`]: BoardConfig::centered_weights
    pub fn with_size(width: usize, height: usize) -> Self {
        BoardConfig {
            width,
            height,
            column_weights: Self::centered_weights(width),
        }
    }

    /// Weights doubling toward the center: 10 on the outer columns, 0 on
    /// the borders. For width 7 this is `[0, 10, 20, 40, 80, 40, 20, 10, 0]`.
    pub fn centered_weights(width: usize) -> Vec<i32> {
        let outer = width.saturating_sub(1);
        let mut weights = vec![0; width + 2];
        for (column, weight) in weights.iter_mut().enumerate().take(width + 1).skip(1) {
            let distance = (2 * column).abs_diff(width + 1);
            let steps = u32::try_from((outer - distance) / 2).unwrap_or(u32::MAX);
            *weight = 2i32.saturating_pow(steps).saturating_mul(10);
        }
        weights
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.column_weights.len() != self.width + 2 {
            return Err(ConfigError::Validation(format!(
                "board.column_weights must have width + 2 = {} entries, got {}",
                self.width + 2,
                self.column_weights.len()
            )));
        }
        // every stone on the board counted at full weight must fit the running total
        let worst: u64 = self
            .column_weights
            .iter()
            .map(|w| u64::from(w.unsigned_abs()))
            .sum::<u64>()
            .saturating_mul(self.height as u64);
        if worst > i32::MAX as u64 {
            return Err(ConfigError::Validation(
                "board.column_weights are too large for this board height".into(),
            ));
        }
        Ok(())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/*
    Cells are stored row-major with one border cell on every side, e.g. a
    7x6 board:

        - | - - - - - - - | -      row 7 (border)
          | - - - - - - - |        rows 6..2
        - | - 0 - - - - - | -
        - | x 0 x - - - - | -      row 1 (bottom)
        - | - - - - - - - | -      row 0 (border)

    Border cells stay Player::None forever, so line scans stop on them
    without range checks.
*/

/// Connect Four board with incremental win detection and heuristic.
pub struct ConnectBoard {
    width: usize,
    height: usize,
    column_weights: Vec<i32>,
    cells: Vec<Player>,
    /// Next free row per column; border columns are pinned to `height + 1`.
    column_height: Vec<usize>,
    next_player: Player,
    is_end_position: bool,
    winner: Player,
    /// Start cell index and direction stride of the winning run.
    winning_run: Option<(usize, usize)>,
    move_count: usize,
    total_weight: i32,
    is_searching: bool,
    ordering: MoveOrdering,
    observer: Option<Box<dyn BoardObserver>>,
}

impl ConnectBoard {
    /// Create an empty 7x6 board with shuffled move ordering.
    pub fn new() -> Self {
        Self::build(&BoardConfig::default())
    }

    /// Create an empty board with a custom geometry.
    pub fn with_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &BoardConfig) -> Self {
        let mut board = ConnectBoard {
            width: config.width,
            height: config.height,
            column_weights: config.column_weights.clone(),
            cells: Vec::new(),
            column_height: Vec::new(),
            next_player: Player::First,
            is_end_position: false,
            winner: Player::None,
            winning_run: None,
            move_count: 0,
            total_weight: 0,
            is_searching: false,
            ordering: MoveOrdering::default(),
            observer: None,
        };
        board.reset();
        board
    }

    /// Replace the move ordering policy.
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Register the observer that receives this board's events.
    pub fn with_observer(mut self, observer: impl BoardObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl BoardObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Return to the empty starting position. Geometry, ordering and
    /// observer are kept.
    pub fn reset(&mut self) {
        let stride = self.width + 2;
        self.cells = vec![Player::None; stride * (self.height + 2)];
        self.column_height = vec![1; stride];
        self.column_height[0] = self.height + 1;
        self.column_height[self.width + 1] = self.height + 1;
        self.next_player = Player::First;
        self.is_end_position = false;
        self.winner = Player::None;
        self.winning_run = None;
        self.move_count = 0;
        self.total_weight = 0;
        self.is_searching = false;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            width: self.width,
            height: self.height,
            column_weights: self.column_weights.clone(),
        }
    }

    /// Cell at `row` (1 = bottom) and `column` (1 = left). Border
    /// coordinates are readable and always `Player::None`.
    pub fn get(&self, row: usize, column: usize) -> Player {
        self.cells[self.index(row, column)]
    }

    /// Next free row in `column`.
    pub fn column_height(&self, column: usize) -> usize {
        self.column_height[column]
    }

    /// True for full columns and for anything that is not a playable column.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.column_height
            .get(column)
            .map_or(true, |&height| height > self.height)
    }

    /// The move the player to move would make in `column`, if legal.
    pub fn move_for_column(&self, column: usize) -> Option<ConnectMove> {
        let mv = ConnectMove::new(self.next_player, column);
        self.is_valid_move(&mv).then_some(mv)
    }

    /// Drop a stone for the player to move, checking legality first.
    pub fn play(&mut self, column: usize) -> Result<ConnectMove, MoveError> {
        let mv = ConnectMove::new(self.next_player, column);
        self.apply(mv)?;
        Ok(mv)
    }

    /// Apply `mv` if it is legal here.
    pub fn apply(&mut self, mv: ConnectMove) -> Result<(), MoveError> {
        self.check_move(&mv)?;
        self.do_move(&mv);
        Ok(())
    }

    /// Why `mv` cannot be played, if it cannot.
    pub fn check_move(&self, mv: &ConnectMove) -> Result<(), MoveError> {
        if self.is_end_position {
            return Err(MoveError::GameOver);
        }
        if mv.player != self.next_player {
            return Err(MoveError::NotYourTurn(mv.player));
        }
        if !(1..=self.width).contains(&mv.column) {
            return Err(MoveError::InvalidColumn(mv.column));
        }
        if self.is_column_full(mv.column) {
            return Err(MoveError::ColumnFull(mv.column));
        }
        Ok(())
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_end_position {
            None
        } else if self.winner == Player::None {
            Some(GameOutcome::Draw)
        } else {
            Some(GameOutcome::Winner(self.winner))
        }
    }

    /// The four cells of the winning line, starting from the end of the run
    /// nearest the bottom-left.
    pub fn winning_line(&self) -> Option<Vec<Coord>> {
        let (start, direction) = self.winning_run?;
        let stride = self.width + 2;
        Some(
            (0..WIN_LENGTH)
                .map(|step| {
                    let index = start + step * direction;
                    Coord::new(index / stride, index % stride)
                })
                .collect(),
        )
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * (self.width + 2) + column
    }

    /// Scan the four line directions through the stone at `index` and
    /// update `winner`. Returns whether the game is over.
    fn check_for_end_position(&mut self, index: usize, player: Player) -> bool {
        debug_assert_ne!(player, Player::None);

        let stride = self.width + 2;
        // up-left, up, up-right, right
        let directions = [stride - 1, stride, stride + 1, 1];

        for direction in directions {
            let mut end = index;
            while self.cells[end + direction] == player {
                end += direction;
            }

            let mut start = end;
            let mut count = 0;
            while self.cells[start] == player {
                count += 1;
                start -= direction;
            }

            if count >= WIN_LENGTH {
                self.winner = player;
                self.winning_run = Some((start + direction, direction));
                return true;
            }
        }

        self.winner = Player::None;
        self.winning_run = None;
        self.move_count == self.width * self.height
    }

    fn emit(&mut self, event: BoardEvent) {
        log::trace!("board event {event:?}");
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }
}

impl Board for ConnectBoard {
    type Move = ConnectMove;

    fn valid_moves(&mut self) -> Vec<ConnectMove> {
        if self.is_end_position {
            return Vec::new();
        }
        let player = self.next_player;
        let columns = self.ordering.columns(self.width);
        columns
            .into_iter()
            .filter(|&column| !self.is_column_full(column))
            .map(|column| ConnectMove::new(player, column))
            .collect()
    }

    fn is_valid_move(&self, mv: &ConnectMove) -> bool {
        self.check_move(mv).is_ok()
    }

    fn heuristic_value(&self) -> Score {
        if !self.is_end_position {
            return Score::Heuristic(self.total_weight);
        }
        match self.winner {
            Player::First => Score::FirstPlayerWins,
            Player::Second => Score::SecondPlayerWins,
            Player::None => Score::Heuristic(0),
        }
    }

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn winner(&self) -> Player {
        self.winner
    }

    fn is_end_position(&self) -> bool {
        self.is_end_position
    }

    fn is_searching(&self) -> bool {
        self.is_searching
    }

    fn set_searching(&mut self, searching: bool) {
        self.is_searching = searching;
    }

    fn do_move(&mut self, mv: &ConnectMove) {
        debug_assert!(self.is_valid_move(mv), "illegal move {mv}");

        let column = mv.column;
        let row = self.column_height[column];
        let index = self.index(row, column);

        self.cells[index] = mv.player;
        self.move_count += 1;
        self.next_player = self.next_player.opponent();
        self.total_weight += mv.player.weight() * self.column_weights[column];
        self.column_height[column] += 1;

        self.is_end_position = self.check_for_end_position(index, mv.player);

        if !self.is_searching {
            self.emit(BoardEvent::CellChanged { row, column });
            if self.is_end_position {
                let winning_line = self.winning_line().unwrap_or_default();
                self.emit(BoardEvent::GameEnded { winning_line });
            }
        }
    }

    fn undo_move(&mut self, mv: &ConnectMove) {
        let column = mv.column;
        self.column_height[column] -= 1;
        let row = self.column_height[column];
        let index = self.index(row, column);
        debug_assert_eq!(self.cells[index], mv.player, "undo of a move not on top");

        self.cells[index] = Player::None;
        self.move_count -= 1;
        self.next_player = self.next_player.opponent();
        self.total_weight -= mv.player.weight() * self.column_weights[column];
        self.is_end_position = false;
        self.winner = Player::None;
        self.winning_run = None;

        if !self.is_searching {
            self.emit(BoardEvent::CellChanged { row, column });
        }
    }
}

impl Default for ConnectBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions compare equal when stones, side to move, game state and
/// column heights match. Ordering policy and observer are ignored.
impl PartialEq for ConnectBoard {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.next_player == other.next_player
            && self.is_end_position == other.is_end_position
            && self.winner == other.winner
            && self.column_height == other.column_height
    }
}

impl Eq for ConnectBoard {}

impl fmt::Debug for ConnectBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectBoard")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("next_player", &self.next_player)
            .field("is_end_position", &self.is_end_position)
            .field("winner", &self.winner)
            .field("move_count", &self.move_count)
            .field("total_weight", &self.total_weight)
            .field("is_searching", &self.is_searching)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConnectBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.height).rev() {
            for column in 1..=self.width {
                write!(f, "{} ", self.get(row, column).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
