// Back-to-back session simulation

use super::{format_items, random_source};
use tombola_core::SessionConfig;
use tombola_sequencer::{overlap_count, tail_window, DrawSequencer, DrawSession};

/// Aggregate counters across simulated sessions
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub sessions: usize,
    pub total_attempts: u64,
    pub max_overlap: usize,
    pub capped: usize,
}

/// Play `sessions` complete games, each started from the previous game's history
pub fn simulate(
    config: &SessionConfig,
    sessions: usize,
    seed: Option<u64>,
    mut report: impl FnMut(usize, &[u32], usize, u32),
) -> anyhow::Result<SimulationSummary> {
    let window = config.sequencer.avoid_count;
    let sequencer = DrawSequencer::new(random_source(seed), config.sequencer.clone())?;
    let mut session = DrawSession::start(sequencer, Vec::new())?;
    let mut summary = SimulationSummary::default();

    for index in 1..=sessions {
        if index > 1 {
            session.reset()?;
        }
        let stats = session.generation_stats();
        while session.draw_next().is_some() {}

        let opening = &session.history()[..window];
        let overlap = overlap_count(opening, tail_window(session.previous_tail(), window));
        report(index, opening, overlap, stats.attempts);

        summary.sessions += 1;
        summary.total_attempts += u64::from(stats.attempts);
        summary.max_overlap = summary.max_overlap.max(overlap);
        if stats.capped {
            summary.capped += 1;
        }
    }

    Ok(summary)
}

/// Print a line per session and a summary
pub fn run(config: &SessionConfig, sessions: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let summary = simulate(config, sessions, seed, |index, opening, overlap, attempts| {
        println!(
            "session {index:>3}  opening [{}]  overlap {overlap}  attempts {attempts}",
            format_items(opening)
        );
    })?;

    println!();
    println!("sessions:        {}", summary.sessions);
    println!("total attempts:  {}", summary.total_attempts);
    println!("max overlap:     {}", summary.max_overlap);
    println!("capped:          {}", summary.capped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_openings_respect_threshold() {
        let config = SessionConfig::default();
        let mut openings = Vec::new();

        let summary = simulate(&config, 25, Some(17), |index, opening, overlap, _| {
            openings.push((index, opening.to_vec(), overlap));
        })
        .unwrap();

        assert_eq!(summary.sessions, 25);
        assert!(summary.max_overlap <= config.sequencer.max_overlap);
        assert!(summary.total_attempts >= 25);
        assert_eq!(openings.len(), 25);
        assert_eq!(openings[0].2, 0);
        assert!(openings.iter().all(|(_, opening, _)| opening.len() == 5));
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let config = SessionConfig::default();
        let mut first = Vec::new();
        let mut second = Vec::new();

        simulate(&config, 5, Some(3), |_, opening, _, _| first.push(opening.to_vec())).unwrap();
        simulate(&config, 5, Some(3), |_, opening, _, _| second.push(opening.to_vec())).unwrap();

        assert_eq!(first, second);
    }
}
