use super::step_stats::StepStats;
use super::Simulation;

pub(super) fn enable_perf_detailed(sim: &mut Simulation, enabled: bool) {
    sim.perf_detailed = enabled;
}

pub(super) fn last_stats(sim: &Simulation) -> StepStats {
    sim.last_stats
}
