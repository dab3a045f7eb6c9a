use crate::{PhaseOutcome, ValidationPhase};

// ANSI color codes for terminal output
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "═".repeat(RULE_WIDTH)
}

pub fn print_header(title: &str) {
    println!("{}{}", BLUE, rule());
    println!("{}", title);
    println!("{}{}", rule(), RESET);
}

/// One line for the phase plus details, as soon as the phase is done.
pub fn print_phase_outcome(phase: ValidationPhase, outcome: &PhaseOutcome) {
    let phase_name = phase.name().to_uppercase();
    match outcome {
        PhaseOutcome::Passed { message, output } => {
            println!("{}✅ {}: {}{}", GREEN, phase_name, message, RESET);
            println!("{}   Output: {}{}", BLUE, output, RESET);
        }
        PhaseOutcome::InvalidOutput { err, output } => {
            println!("{}❌ {}: {}{}", RED, phase_name, err, RESET);
            println!("{}   Output: {}{}", YELLOW, output, RESET);
        }
        PhaseOutcome::Crashed { code, stderr } => {
            match code {
                Some(code) => println!(
                    "{}❌ {}: Bot crashed with return code {}{}",
                    RED, phase_name, code, RESET
                ),
                None => println!(
                    "{}❌ {}: Bot was terminated by a signal{}",
                    RED, phase_name, RESET
                ),
            }
            if !stderr.is_empty() {
                println!("{}   Stderr:{} {}...", YELLOW, RESET, stderr);
            }
        }
        PhaseOutcome::TimedOut => {
            println!("{}❌ {}: Bot timed out{}", RED, phase_name, RESET);
        }
        PhaseOutcome::Failed(err) => {
            println!("{}❌ {}: Unexpected error: {:#}{}", RED, phase_name, err, RESET);
        }
    }
}

pub fn print_summary(results: &[(ValidationPhase, PhaseOutcome)]) {
    println!();
    print_header("VALIDATION SUMMARY");
    for (phase, outcome) in results {
        let status = if outcome.passed() {
            format!("{}✅ PASS{}", GREEN, RESET)
        } else {
            format!("{}❌ FAIL{}", RED, RESET)
        };
        println!("  {:20} {}", phase.name(), status);
    }

    if results.iter().all(|(_, outcome)| outcome.passed()) {
        println!(
            "\n{}✨ All tests passed! Your bot is ready for submission. ✨{}",
            GREEN, RESET
        );
        println!(
            "\n{}⚠️  IMPORTANT: This validator tests basic functionality.",
            YELLOW
        );
        println!("   For comprehensive testing, play your bot against other bots.{}", RESET);
    } else {
        println!(
            "\n{}⚠️  Some tests failed. Please fix your bot before submission.{}",
            RED, RESET
        );
    }
}
