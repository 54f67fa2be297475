use crate::game::Player;

use super::{AppliedMove, Board, Score, SearchEngine, SearchResult, SearchScope};

/// Plain minimax that expands every node up to the requested depth.
///
/// Uses the same last-of-equals tie-break as [`AlphaBetaSearchEngine`], so
/// both engines agree on move and value; this one only visits more nodes.
///
/// [`AlphaBetaSearchEngine`]: super::AlphaBetaSearchEngine
#[derive(Debug, Default)]
pub struct MinimaxSearchEngine {
    visited_nodes: u64,
}

impl MinimaxSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last search, leaves included.
    pub fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    fn search<B: Board>(&mut self, board: &mut B, depth: u32) -> SearchResult<B::Move> {
        self.visited_nodes += 1;

        if board.is_end_position() || depth == 0 {
            return SearchResult::leaf(board.heuristic_value());
        }

        let moves = board.valid_moves();
        assert!(
            !moves.is_empty(),
            "board is not terminal but has no moves to search"
        );

        let maximizing = board.next_player() == Player::First;
        let mut best_move = moves[0].clone();
        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };

        for mv in moves {
            let score = {
                let mut applied = AppliedMove::new(board, mv.clone());
                self.search(&mut *applied, depth - 1).score
            };

            let better = if maximizing {
                score >= best_score
            } else {
                score <= best_score
            };
            if better {
                best_move = mv;
                best_score = score;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
        }
    }
}

impl<B: Board> SearchEngine<B> for MinimaxSearchEngine {
    fn best_move(&mut self, board: &mut B, depth: u32) -> SearchResult<B::Move> {
        self.visited_nodes = 0;

        let result = {
            let mut scope = SearchScope::enter(board);
            self.search(&mut *scope, depth)
        };

        log::debug!(
            "minimax depth {depth}: score {}, {} nodes",
            result.score,
            self.visited_nodes
        );
        result
    }

    fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}
