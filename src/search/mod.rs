//! Game-independent adversarial search over the [`Board`] contract.
//!
//! Engines mutate the board they are given in place (apply, recurse,
//! undo) and hand it back unchanged. The first player maximizes
//! [`Score`], the second minimizes it.

mod alphabeta;
mod board;
mod minimax;
mod score;

pub use alphabeta::AlphaBetaSearchEngine;
pub use board::{AppliedMove, Board, SearchScope};
pub use minimax::MinimaxSearchEngine;
pub use score::Score;

/// Move chosen by a search and the value backed up to the root.
///
/// `best_move` is `None` when the root itself was terminal or searched at
/// depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: Score,
}

impl<M> SearchResult<M> {
    fn leaf(score: Score) -> Self {
        SearchResult {
            best_move: None,
            score,
        }
    }
}

/// A depth-limited search algorithm.
pub trait SearchEngine<B: Board> {
    /// Best move for the player to move, looking `depth` plies ahead.
    ///
    /// Blocks until the whole tree is searched. The board is marked as
    /// searching for the duration of the call and restored afterwards.
    fn best_move(&mut self, board: &mut B, depth: u32) -> SearchResult<B::Move>;

    /// Positions visited by the last call to [`best_move`](SearchEngine::best_move).
    fn visited_nodes(&self) -> u64;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod test_tree {
    //! Explicit game trees for exercising the engines without a real game.

    use super::{Board, Score};
    use crate::game::Player;

    #[derive(Debug, Clone)]
    pub enum Node {
        Leaf(Score),
        Branch(Vec<Node>),
    }

    pub fn leaf(value: i32) -> Node {
        Node::Leaf(Score::Heuristic(value))
    }

    pub fn branch(children: Vec<Node>) -> Node {
        Node::Branch(children)
    }

    /// Walks a [`Node`] tree; moves are child indices. The first player
    /// moves at even depths.
    pub struct TreeBoard {
        root: Node,
        path: Vec<usize>,
        searching: bool,
        pub applied: usize,
    }

    impl TreeBoard {
        pub fn new(root: Node) -> Self {
            Self::at(root, Vec::new())
        }

        pub fn at(root: Node, path: Vec<usize>) -> Self {
            TreeBoard {
                root,
                path,
                searching: false,
                applied: 0,
            }
        }

        pub fn path(&self) -> &[usize] {
            &self.path
        }

        fn current(&self) -> &Node {
            self.path.iter().fold(&self.root, |node, &index| match node {
                Node::Branch(children) => &children[index],
                Node::Leaf(_) => node,
            })
        }
    }

    impl Board for TreeBoard {
        type Move = usize;

        fn valid_moves(&mut self) -> Vec<usize> {
            match self.current() {
                Node::Branch(children) => (0..children.len()).collect(),
                Node::Leaf(_) => Vec::new(),
            }
        }

        fn is_valid_move(&self, mv: &usize) -> bool {
            matches!(self.current(), Node::Branch(children) if *mv < children.len())
        }

        fn heuristic_value(&self) -> Score {
            match self.current() {
                Node::Leaf(score) => *score,
                Node::Branch(_) => Score::Heuristic(0),
            }
        }

        fn next_player(&self) -> Player {
            if self.path.len() % 2 == 0 {
                Player::First
            } else {
                Player::Second
            }
        }

        fn winner(&self) -> Player {
            Player::None
        }

        fn is_end_position(&self) -> bool {
            matches!(self.current(), Node::Leaf(_))
        }

        fn is_searching(&self) -> bool {
            self.searching
        }

        fn set_searching(&mut self, searching: bool) {
            self.searching = searching;
        }

        fn do_move(&mut self, mv: &usize) {
            self.path.push(*mv);
            self.applied += 1;
        }

        fn undo_move(&mut self, mv: &usize) {
            assert_eq!(self.path.pop(), Some(*mv), "undo out of order");
        }
    }

    /// Textbook tree of depth 3 with a maximizing root.
    pub fn sample_tree() -> Node {
        branch(vec![
            branch(vec![
                branch(vec![leaf(5), leaf(6)]),
                branch(vec![leaf(7), leaf(4), leaf(5)]),
            ]),
            branch(vec![branch(vec![leaf(3)])]),
            branch(vec![
                branch(vec![leaf(6)]),
                branch(vec![leaf(6), leaf(9)]),
            ]),
            branch(vec![
                branch(vec![leaf(7)]),
                branch(vec![leaf(5)]),
            ]),
        ])
    }
}
