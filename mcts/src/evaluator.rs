use rustc_hash::FxHashMap;

use crate::{error::EvaluatorError, game_state::GameState};

/// Output of a policy/value estimate for one state.
#[derive(Clone, Debug)]
pub struct Evaluation<M> {
    /// Prior probability mass per legal move, non-negative and summing to
    /// one over the legal moves.
    pub policy: FxHashMap<M, f32>,
    /// Expected outcome in `[-1, 1]` from the perspective of the evaluated
    /// state's side to move.
    pub value: f32,
}

/// The external policy/value estimation capability consumed by the guided
/// search. Typically backed by a neural network living outside this crate;
/// the caller owns its lifecycle and passes it into the search explicitly.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S) -> Result<Evaluation<S::Move>, EvaluatorError>;
}

/// Uniform priors and a neutral value. The no-network default, which
/// reduces the guided search to exploring on visit counts alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformEvaluator;

impl<S: GameState> Evaluator<S> for UniformEvaluator {
    fn evaluate(&self, state: &S) -> Result<Evaluation<S::Move>, EvaluatorError> {
        let moves = state.possible_moves();
        let share = 1.0 / moves.len().max(1) as f32;
        Ok(Evaluation {
            policy: moves.into_iter().map(|m| (m, share)).collect(),
            value: 0.0,
        })
    }
}
