//! Move-selecting agents for driving a live game.

mod agent;
mod random;
mod search_agent;

pub use agent::Agent;
pub use random::RandomAgent;
pub use search_agent::SearchAgent;
