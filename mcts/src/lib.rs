mod adapter;
mod config;
mod error;
mod evaluator;
mod game_state;
mod node;
mod puct;
mod uct;

pub use config::SearchConfig;
pub use error::EvaluatorError;
pub use evaluator::{Evaluation, Evaluator, UniformEvaluator};
pub use game_state::{GameState, Side};
pub use node::Node;
pub use puct::PuctSearch;
pub use uct::UctSearch;
