use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::{
    config::SearchConfig,
    game_state::{GameState, Side},
    node::Node,
};

/// Keeps never-visited children selectable without dividing by zero.
const VISIT_EPSILON: f32 = 1e-8;

/// Plain-rollout Monte-Carlo tree search: UCT selection, all-at-once
/// expansion, uniformly-random playouts, and a most-visited read-out.
///
/// One tree per search invocation; the tree is discarded with the search.
pub struct UctSearch<S: GameState> {
    root: Node<S>,
    config: SearchConfig,
}

impl<S: GameState> UctSearch<S> {
    pub fn new(state: S, config: SearchConfig) -> Self {
        UctSearch {
            root: Node::new_root(state),
            config,
        }
    }

    /// Run the configured number of simulations.
    pub fn run(&mut self) {
        self.run_with(&mut thread_rng());
    }

    pub fn run_with<R: Rng>(&mut self, rng: &mut R) {
        for _ in 0..self.config.simulation_limit {
            simulate(&mut self.root, &self.config, rng);
        }
        log::debug!(
            "uct search done: {} visits over {} root children",
            self.root.visits,
            self.root.children.len(),
        );
    }

    /// The most-visited root move. `None` when the root has no children,
    /// such as a zero simulation budget or no legal moves.
    pub fn best_move(&self) -> Option<S::Move> {
        self.root
            .most_visited_child()
            .and_then(|child| child.my_move.clone())
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn root_visits(&self) -> u32 {
        self.root.visits
    }

    pub fn child_visits(&self) -> Vec<(S::Move, u32)> {
        self.root.child_visits()
    }
}

/// One selection/expansion/rollout/backpropagation cycle. Statistics are
/// updated on the unwind, walking the same path selection took.
fn simulate<S: GameState, R: Rng>(
    node: &mut Node<S>,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Side> {
    let winner = if node.is_terminal() {
        node.winner
    } else if !node.untried_or_init().is_empty() {
        // Expand every untried move at once, then play out the first new
        // child; its siblings keep zero visits until selection reaches
        // them.
        let moves = std::mem::take(node.untried_or_init());
        for my_move in moves {
            let mut state = node.state.clone();
            state.play(&my_move);
            node.children.push(Node::new_child(state, my_move, 1.0));
        }
        let child = &mut node.children[0];
        let winner = rollout(child.state.clone(), config.max_rollout_plies, rng);
        let outcome = child.outcome_for(winner);
        child.record(outcome);
        winner
    } else if !node.children.is_empty() {
        let index = select_uct(
            &node.children,
            node.visits,
            config.exploration_constant,
        );
        simulate(&mut node.children[index], config, rng)
    } else {
        // No legal moves: treat as terminal without a winner.
        None
    };

    let outcome = node.outcome_for(winner);
    node.record(outcome);
    winner
}

/// Uniformly-random playout, bounded by `max_plies`.
fn rollout<S: GameState, R: Rng>(mut state: S, max_plies: u32, rng: &mut R) -> Option<Side> {
    for _ in 0..max_plies {
        if let Some(winner) = state.winner() {
            return Some(winner);
        }
        let moves = state.possible_moves();
        let Some(my_move) = moves.choose(rng) else {
            return None;
        };
        state.play(my_move);
    }
    state.winner()
}

/// Index of the child maximizing the UCT score. Ties break to the first
/// maximum in iteration order, which keeps selection deterministic.
pub(crate) fn select_uct<S: GameState>(
    children: &[Node<S>],
    parent_visits: u32,
    exploration_constant: f32,
) -> usize {
    let ln_parent = (parent_visits as f32 + 1.0).ln();
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (index, child) in children.iter().enumerate() {
        let explore = (ln_parent / (child.visits as f32 + VISIT_EPSILON)).sqrt();
        let score = child.mean_value() + exploration_constant * explore;
        if score > best_score {
            best = index;
            best_score = score;
        }
    }
    best
}
