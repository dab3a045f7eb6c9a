mod error;
mod report;
mod runner;
mod test_state;
mod validation;
pub use error::*;
pub use report::*;
pub use runner::*;
pub use test_state::*;
pub use validation::*;

use rand::rngs::StdRng;
use tracing::info;

/// Runs the bot once per phase, printing each outcome as it comes in.
///
/// A failing phase does not stop the remaining ones.
pub fn validate_bot(
    bot: &BotCommand,
    phases: &[ValidationPhase],
    rng: &mut StdRng,
) -> Vec<(ValidationPhase, PhaseOutcome)> {
    let mut results = Vec::with_capacity(phases.len());
    for &phase in phases {
        let state = create_test_state(phase, rng);
        let outcome = bot.run_phase(&state, phase);
        info!(%phase, passed = outcome.passed());
        print_phase_outcome(phase, &outcome);
        results.push((phase, outcome));
    }
    results
}
