// Paced drawing of a single session

use super::random_source;
use tombola_core::{DrawSpeed, SessionConfig};
use tombola_sequencer::{DrawSequencer, DrawSession};
use tracing::info;

/// Number of recent draws shown when the session stops
const RECENT_DRAWS: usize = 10;

/// Options for a played session
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub speed: DrawSpeed,
    pub limit: Option<usize>,
    pub pace: bool,
    pub seed: Option<u64>,
}

/// Draw items one at a time, pausing between draws at the chosen speed
pub async fn run(config: &SessionConfig, options: PlayOptions) -> anyhow::Result<()> {
    let sequencer = DrawSequencer::new(random_source(options.seed), config.sequencer.clone())?;
    let mut session = DrawSession::start(sequencer, Vec::new())?;
    let limit = options.limit.unwrap_or(usize::MAX);

    info!(
        speed = %options.speed,
        items = session.remaining_count(),
        source = %session.sequencer().random_source().kind(),
        "starting session"
    );

    while session.drawn_count() < limit {
        let Some(item) = session.draw_next() else {
            break;
        };
        println!(
            "#{:>3}  {item:>3}   ({} left)",
            session.drawn_count(),
            session.remaining_count()
        );

        if options.pace && !session.is_complete() && session.drawn_count() < limit {
            tokio::time::sleep(options.speed.interval()).await;
        }
    }

    let recent: Vec<String> = session.recent(RECENT_DRAWS).map(|item| item.to_string()).collect();
    println!();
    println!("recent draws: {}", recent.join(" "));
    if session.is_complete() {
        println!("all {} items drawn", session.drawn_count());
    } else {
        println!(
            "stopped after {} draws, {} remaining",
            session.drawn_count(),
            session.remaining_count()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unpaced_play_finishes() {
        let options = PlayOptions {
            speed: DrawSpeed::VeryFast,
            limit: None,
            pace: false,
            seed: Some(1),
        };
        run(&SessionConfig::default(), options).await.unwrap();
    }

    #[tokio::test]
    async fn limited_play_stops_early() {
        let options = PlayOptions {
            speed: DrawSpeed::Normal,
            limit: Some(3),
            pace: false,
            seed: Some(2),
        };
        run(&SessionConfig::default(), options).await.unwrap();
    }
}
