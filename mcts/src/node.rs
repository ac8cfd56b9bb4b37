use rustc_hash::FxHashMap;

use crate::game_state::{GameState, Side};

/// One node of the search tree. The tree is strict: a node owns its
/// children and nothing else holds references into it. Backpropagation
/// happens on the unwind of the recursive search walk, so no parent links
/// are stored.
#[derive(Clone)]
pub struct Node<S: GameState> {
    /// The state after `my_move` was applied to the parent's state.
    pub state: S,
    /// The move that produced this node. `None` only at the root.
    pub my_move: Option<S::Move>,
    /// Prior probability mass for `my_move`, used by the guided search.
    pub prior: f32,
    pub visits: u32,
    /// Sum of per-visit values, from the perspective of the player who
    /// moved into this node. Selection at any node therefore compares its
    /// children from the side to move there.
    pub value_sum: f32,
    pub children: Vec<Node<S>>,
    /// Legal moves not yet expanded into children. Computed lazily on the
    /// first visit, drained by expansion.
    pub untried: Option<Vec<S::Move>>,
    /// Cached evaluator policy for this state, set by the guided search.
    pub policy: Option<FxHashMap<S::Move, f32>>,
    /// Winner if this state is terminal, precomputed at creation.
    pub winner: Option<Side>,
}

impl<S: GameState> Node<S> {
    pub fn new_root(state: S) -> Self {
        let winner = state.winner();
        Node {
            state,
            my_move: None,
            prior: 1.0,
            visits: 0,
            value_sum: 0.0,
            children: Vec::new(),
            untried: None,
            policy: None,
            winner,
        }
    }

    pub fn new_child(state: S, my_move: S::Move, prior: f32) -> Self {
        let winner = state.winner();
        Node {
            state,
            my_move: Some(my_move),
            prior,
            visits: 0,
            value_sum: 0.0,
            children: Vec::new(),
            untried: None,
            policy: None,
            winner,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// The side that moved into this node.
    pub fn mover(&self) -> Side {
        self.state.side_to_move().flip()
    }

    pub fn mean_value(&self) -> f32 {
        self.value_sum / (self.visits as f32).max(f32::EPSILON)
    }

    pub fn record(&mut self, value: f32) {
        self.visits += 1;
        self.value_sum += value;
    }

    /// Rollout outcome from this node's mover's perspective: 1 for a win,
    /// 0 for a loss, and a neutral half when the playout had no winner.
    pub fn outcome_for(&self, winner: Option<Side>) -> f32 {
        match winner {
            Some(side) if side == self.mover() => 1.0,
            Some(_) => 0.0,
            None => 0.5,
        }
    }

    pub(crate) fn untried_or_init(&mut self) -> &mut Vec<S::Move> {
        self.untried.get_or_insert_with(|| self.state.possible_moves())
    }

    /// The root child with the most visits; ties go to the first such
    /// child in insertion order, which keeps the read-out deterministic.
    pub fn most_visited_child(&self) -> Option<&Node<S>> {
        let mut best: Option<&Node<S>> = None;
        for child in &self.children {
            if best.map_or(true, |b| child.visits > b.visits) {
                best = Some(child);
            }
        }
        best
    }

    /// Visit counts per child move. After many iterations these are a
    /// better policy estimate than the raw priors (not normalized).
    pub fn child_visits(&self) -> Vec<(S::Move, u32)> {
        self.children
            .iter()
            .filter_map(|child| child.my_move.clone().map(|m| (m, child.visits)))
            .collect()
    }
}
