use crate::game::{ConnectBoard, ConnectMove};
use crate::search::{AlphaBetaSearchEngine, Board, SearchEngine};

use super::agent::Agent;

/// Agent that plays the move a search engine finds at a fixed depth.
pub struct SearchAgent<E = AlphaBetaSearchEngine> {
    engine: E,
    depth: u32,
}

impl SearchAgent<AlphaBetaSearchEngine> {
    /// Alpha-beta agent looking `depth` plies ahead.
    pub fn new(depth: u32) -> Self {
        Self::with_engine(AlphaBetaSearchEngine::new(), depth)
    }
}

impl<E> SearchAgent<E>
where
    E: SearchEngine<ConnectBoard>,
{
    pub fn with_engine(engine: E, depth: u32) -> Self {
        SearchAgent { engine, depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<E> Agent for SearchAgent<E>
where
    E: SearchEngine<ConnectBoard>,
{
    fn select_move(&mut self, board: &mut ConnectBoard) -> Option<ConnectMove> {
        if board.is_end_position() {
            return None;
        }
        // depth 0 would only evaluate the root and return no move
        let result = self.engine.best_move(board, self.depth.max(1));
        log::debug!(
            "{} picked {:?} (score {}, {} nodes)",
            board.next_player(),
            result.best_move,
            result.score,
            self.engine.visited_nodes()
        );
        if result.score.is_decisive() {
            log::info!("{} sees a forced result: {}", board.next_player(), result.score);
        }
        result.best_move
    }

    fn name(&self) -> &str {
        self.engine.name()
    }
}
