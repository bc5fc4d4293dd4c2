use crate::reports;
use clap::Args;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use typestrike::config::Config;
use typestrike::matcher::KeyOutcome;
use typestrike::{GameData, StrikeError, StrikeResult};

/// Plays a whole session with a scripted typist on a virtual clock.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Typing speed of the scripted player.
    #[arg(long, default_value_t = 6.0)]
    pub keys_per_second: f64,

    /// Replace every Nth keystroke with a wrong key (0 = never).
    #[arg(long, default_value_t = 0)]
    pub miss_every: u64,

    /// Abort the run after this many seconds of virtual time.
    #[arg(long)]
    pub abort_after: Option<f64>,
}

const WRONG_KEY: char = '~';

fn secs_arg(flag: &str, secs: f64) -> StrikeResult<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| StrikeError::Config(format!("{} gives an unusable duration: {}", flag, e)))
}

pub fn run(args: SimulateArgs, data: &GameData) -> StrikeResult<()> {
    if !args.keys_per_second.is_finite() || args.keys_per_second <= 0.0 {
        return Err(StrikeError::Config(
            "--keys-per-second must be positive".to_string(),
        ));
    }

    let step = secs_arg("--keys-per-second", 1.0 / args.keys_per_second)?;
    let abort_after = args
        .abort_after
        .map(|s| secs_arg("--abort-after", s.max(0.0)))
        .transpose()?;

    let start = Instant::now();
    let mut session = data.start(&args.config, start)?;
    let abort_at = abort_after.and_then(|d| start.checked_add(d));

    let mut now = start;
    let mut strokes: u64 = 0;

    loop {
        now = match now.checked_add(step) {
            Some(t) => t,
            None => {
                session.abort();
                break;
            }
        };
        strokes += 1;

        if abort_at.is_some_and(|t| now >= t) {
            session.tick(now);
            session.abort();
            break;
        }

        let Some(expected) = session.engine().and_then(|e| e.suggested_key()) else {
            break;
        };
        let key = if args.miss_every > 0 && strokes % args.miss_every == 0 {
            WRONG_KEY
        } else {
            expected
        };

        match session.consume_key_at(key, now) {
            Some(ev) => {
                if ev.outcome == KeyOutcome::Correct && ev.question_complete {
                    debug!("question complete after {} strokes", strokes);
                }
                if ev.finished.is_some() {
                    break;
                }
            }
            None => break,
        }
    }

    info!("Simulation ended after {} keystrokes", strokes);

    if let Some(summary) = session.summary() {
        reports::print_summary(session.plan(), &summary);
    }
    Ok(())
}
