use crate::{
    config::SearchConfig,
    error::EvaluatorError,
    evaluator::Evaluator,
    game_state::GameState,
    node::Node,
};

/// Prior/value-guided Monte-Carlo tree search: PUCT selection,
/// one-move-at-a-time expansion ordered by evaluator priors, and leaf
/// values from the evaluator instead of random playouts.
///
/// The evaluator is an explicit collaborator passed in by the caller, who
/// owns its lifecycle; the search only borrows it per evaluation.
pub struct PuctSearch<S: GameState, E: Evaluator<S>> {
    root: Node<S>,
    evaluator: E,
    config: SearchConfig,
}

impl<S: GameState, E: Evaluator<S>> PuctSearch<S, E> {
    pub fn new(state: S, evaluator: E, config: SearchConfig) -> Self {
        PuctSearch {
            root: Node::new_root(state),
            evaluator,
            config,
        }
    }

    /// Run the configured number of simulations. An iteration whose
    /// evaluation fails is skipped whole: statistics only update on a
    /// successful unwind, so the tree never holds a half-applied pass.
    pub fn run(&mut self) {
        let mut skipped = 0u32;
        for _ in 0..self.config.simulation_limit {
            if let Err(error) = simulate(&mut self.root, &self.evaluator, self.config.c_puct) {
                log::warn!("guided search iteration skipped: {error}");
                skipped += 1;
            }
        }
        log::debug!(
            "guided search done: {} visits over {} root children ({skipped} skipped)",
            self.root.visits,
            self.root.children.len(),
        );
    }

    /// The most-visited root move. `None` when the root has no children.
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

/// One guided cycle. Returns the value recorded at `node` this pass, from
/// the perspective of the player who moved into it; each level up the
/// unwind negates it to switch perspective.
fn simulate<S: GameState, E: Evaluator<S>>(
    node: &mut Node<S>,
    evaluator: &E,
    c_puct: f32,
) -> Result<f32, EvaluatorError> {
    let value = if let Some(winner) = node.winner {
        if winner == node.mover() {
            1.0
        } else {
            -1.0
        }
    } else {
        let wants_expansion = !node.untried_or_init().is_empty();
        if wants_expansion && node.policy.is_none() {
            node.policy = Some(evaluator.evaluate(&node.state)?.policy);
        }
        if let Some((index, my_move)) = peek_untried(node) {
            let prior = prior_for(node, &my_move);
            let mut state = node.state.clone();
            state.play(&my_move);
            let mut child = Node::new_child(state, my_move, prior);
            let leaf_value = match child.winner {
                // The side to move at a terminal state has lost.
                Some(winner) => {
                    if winner == child.state.side_to_move() {
                        1.0
                    } else {
                        -1.0
                    }
                }
                None => {
                    let evaluation = evaluator.evaluate(&child.state)?;
                    child.policy = Some(evaluation.policy);
                    evaluation.value
                }
            };
            // The move leaves the untried list only now that evaluation
            // has succeeded; a failed iteration keeps it available.
            if let Some(untried) = node.untried.as_mut() {
                untried.remove(index);
            }
            child.record(-leaf_value);
            node.children.push(child);
            leaf_value
        } else if !node.children.is_empty() {
            let index = select_puct(&node.children, node.visits, c_puct);
            -simulate(&mut node.children[index], evaluator, c_puct)?
        } else {
            // No legal moves: treat as terminal with a neutral value.
            0.0
        }
    };
    node.record(value);
    Ok(value)
}

/// The untried move with the highest prior, first maximum on ties. The
/// move stays in the untried list; the caller drains it by index once the
/// expansion is committed.
fn peek_untried<S: GameState>(node: &Node<S>) -> Option<(usize, S::Move)> {
    let untried = node.untried.as_ref()?;
    if untried.is_empty() {
        return None;
    }
    let mut best = 0;
    if let Some(policy) = &node.policy {
        let mut best_prior = f32::NEG_INFINITY;
        for (index, my_move) in untried.iter().enumerate() {
            let prior = policy.get(my_move).copied().unwrap_or(0.0);
            if prior > best_prior {
                best = index;
                best_prior = prior;
            }
        }
    }
    Some((best, untried[best].clone()))
}

/// Prior for a move still sitting in the untried list, falling back to a
/// uniform share of the legal moves when the policy has no entry for it.
fn prior_for<S: GameState>(node: &Node<S>, my_move: &S::Move) -> f32 {
    let legal_moves = node.children.len() + node.untried.as_ref().map_or(0, Vec::len);
    node.policy
        .as_ref()
        .and_then(|policy| policy.get(my_move))
        .copied()
        .unwrap_or(1.0 / legal_moves.max(1) as f32)
}

/// Index of the child maximizing the PUCT score. Same first-maximum
/// tie-break as the rollout variant.
pub(crate) fn select_puct<S: GameState>(
    children: &[Node<S>],
    parent_visits: u32,
    c_puct: f32,
) -> usize {
    let sqrt_parent = (parent_visits as f32).sqrt();
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (index, child) in children.iter().enumerate() {
        let explore = c_puct * child.prior * sqrt_parent / (1.0 + child.visits as f32);
        let score = child.mean_value() + explore;
        if score > best_score {
            best = index;
            best_score = score;
        }
    }
    best
}
