use tracing::info;

/// Counters for one search invocation.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub plan_cost: f64,
    pub time_us: usize,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Expanded nodes number: {:?} Generated nodes number {:?}",
            self.plan_cost, self.time_us, self.expanded_nodes, self.generated_nodes
        );
    }
}
