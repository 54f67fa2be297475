use crate::game::Player;

use super::{AppliedMove, Board, Score, SearchEngine, SearchResult, SearchScope};

/// Minimax with alpha-beta pruning.
///
/// Among equally valued moves the one listed last by
/// [`Board::valid_moves`] wins, so boards that shuffle their moves get
/// varied play while a fixed ordering stays reproducible.
#[derive(Debug, Default)]
pub struct AlphaBetaSearchEngine {
    visited_nodes: u64,
    cutoffs: u64,
}

impl AlphaBetaSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last search, leaves included.
    pub fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    /// Branches abandoned by the last search.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    fn search<B: Board>(
        &mut self,
        board: &mut B,
        depth: u32,
        alpha: Score,
        beta: Score,
    ) -> SearchResult<B::Move> {
        self.visited_nodes += 1;

        if board.is_end_position() || depth == 0 {
            return SearchResult::leaf(board.heuristic_value());
        }

        let moves = board.valid_moves();
        assert!(
            !moves.is_empty(),
            "board is not terminal but has no moves to search"
        );

        if board.next_player() == Player::First {
            self.max_value(board, moves, depth, alpha, beta)
        } else {
            self.min_value(board, moves, depth, alpha, beta)
        }
    }

    fn max_value<B: Board>(
        &mut self,
        board: &mut B,
        moves: Vec<B::Move>,
        depth: u32,
        mut alpha: Score,
        beta: Score,
    ) -> SearchResult<B::Move> {
        let mut best_move = moves[0].clone();
        let mut best_score = Score::MIN;

        for mv in moves {
            let score = {
                let mut applied = AppliedMove::new(board, mv.clone());
                self.search(&mut *applied, depth - 1, alpha, beta).score
            };

            if score >= best_score {
                best_move = mv;
                best_score = score;
                alpha = alpha.max(best_score);
            }

            // the minimizing parent already has something better than this
            if best_score > beta {
                self.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
        }
    }

    fn min_value<B: Board>(
        &mut self,
        board: &mut B,
        moves: Vec<B::Move>,
        depth: u32,
        alpha: Score,
        mut beta: Score,
    ) -> SearchResult<B::Move> {
        let mut best_move = moves[0].clone();
        let mut best_score = Score::MAX;

        for mv in moves {
            let score = {
                let mut applied = AppliedMove::new(board, mv.clone());
                self.search(&mut *applied, depth - 1, alpha, beta).score
            };

            if score <= best_score {
                best_move = mv;
                best_score = score;
                beta = beta.min(best_score);
            }

            // the maximizing parent already has something better than this
            if best_score < alpha {
                self.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
        }
    }
}

impl<B: Board> SearchEngine<B> for AlphaBetaSearchEngine {
    fn best_move(&mut self, board: &mut B, depth: u32) -> SearchResult<B::Move> {
        self.visited_nodes = 0;
        self.cutoffs = 0;

        let result = {
            let mut scope = SearchScope::enter(board);
            self.search(&mut *scope, depth, Score::MIN, Score::MAX)
        };

        log::debug!(
            "alpha-beta depth {depth}: score {}, {} nodes, {} cutoffs",
            result.score,
            self.visited_nodes,
            self.cutoffs
        );
        result
    }

    fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    fn name(&self) -> &'static str {
        "AlphaBeta"
    }
}
