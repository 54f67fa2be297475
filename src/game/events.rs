use std::sync::mpsc;

use super::Coord;

/// Changes reported by a board to its observer.
///
/// Never emitted for moves applied while the board is searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The occupancy of a single cell changed (move applied or undone).
    CellChanged { row: usize, column: usize },
    /// The game is over. Holds the four cells of the winning line, ordered
    /// from the start of the run, or nothing for a draw.
    GameEnded { winning_line: Vec<Coord> },
}

/// Receiver of board events, registered on one board instance.
pub trait BoardObserver: Send {
    fn notify(&mut self, event: &BoardEvent);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardEvent) + Send,
{
    fn notify(&mut self, event: &BoardEvent) {
        self(event)
    }
}

/// Forward events to another thread. A disconnected receiver is ignored.
impl BoardObserver for mpsc::Sender<BoardEvent> {
    fn notify(&mut self, event: &BoardEvent) {
        let _ = self.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer_receives_events() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &BoardEvent| seen.push(event.clone());
            observer.notify(&BoardEvent::CellChanged { row: 1, column: 4 });
        }
        assert_eq!(seen, vec![BoardEvent::CellChanged { row: 1, column: 4 }]);
    }

    #[test]
    fn test_channel_observer_forwards_events() {
        let (mut tx, rx) = mpsc::channel();
        tx.notify(&BoardEvent::GameEnded { winning_line: Vec::new() });
        assert_eq!(
            rx.try_recv().unwrap(),
            BoardEvent::GameEnded { winning_line: Vec::new() }
        );
    }

    #[test]
    fn test_channel_observer_ignores_closed_receiver() {
        let (mut tx, rx) = mpsc::channel();
        drop(rx);
        tx.notify(&BoardEvent::CellChanged { row: 2, column: 2 });
    }
}
