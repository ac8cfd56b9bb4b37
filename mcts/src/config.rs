/// Parameters for a single search invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Number of selection/expansion/evaluation/backpropagation cycles.
    pub simulation_limit: u32,
    /// UCT exploration constant for the rollout variant.
    pub exploration_constant: f32,
    /// PUCT exploration constant for the guided variant.
    pub c_puct: f32,
    /// Upper bound on random-playout length, so a rollout terminates even
    /// if move generation misbehaves.
    pub max_rollout_plies: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            simulation_limit: 200,
            exploration_constant: std::f32::consts::SQRT_2,
            c_puct: 1.0,
            max_rollout_plies: 200,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulation_limit(mut self, simulation_limit: u32) -> Self {
        self.simulation_limit = simulation_limit;
        self
    }

    pub fn with_exploration_constant(mut self, exploration_constant: f32) -> Self {
        self.exploration_constant = exploration_constant;
        self
    }

    pub fn with_c_puct(mut self, c_puct: f32) -> Self {
        self.c_puct = c_puct;
        self
    }

    pub fn with_max_rollout_plies(mut self, max_rollout_plies: u32) -> Self {
        self.max_rollout_plies = max_rollout_plies.max(1);
        self
    }
}
