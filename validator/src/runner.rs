use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use battleship::GameState;
use tracing::{debug, trace};

use crate::error::InvalidOutput;
use crate::validation::{validate_output, ValidationPhase};

/// How often a running bot is checked for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How much of a crashed bot's stderr ends up in the report.
const STDERR_EXCERPT_CHARS: usize = 200;

/// How to invoke the bot under test. The state file path is appended as the
/// last argument.
pub struct BotCommand {
    pub executable: PathBuf,
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// What happened when the bot was asked for one phase's decision.
#[derive(Debug)]
pub enum PhaseOutcome {
    Passed { message: &'static str, output: String },
    InvalidOutput { err: InvalidOutput, output: String },
    Crashed { code: Option<i32>, stderr: String },
    TimedOut,
    /// The bot could not be run at all.
    Failed(anyhow::Error),
}

impl PhaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, PhaseOutcome::Passed { .. })
    }
}

/// Keeps state file names unique within this process.
static STATE_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// The state file given to the bot. Deleted when dropped.
struct StateFile {
    path: PathBuf,
}

impl StateFile {
    fn create(state: &GameState, phase: ValidationPhase) -> anyhow::Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "battleship_validator_{}_{}_{}.json",
            std::process::id(),
            STATE_FILE_COUNTER.fetch_add(1, Ordering::Relaxed),
            phase
        ));
        let state_file = Self { path };
        let mut writer = BufWriter::new(File::create(&state_file.path)?);
        serde_json::to_writer(&mut writer, state)?;
        writer.flush()?;
        Ok(state_file)
    }
}

impl Drop for StateFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Reads a pipe to the end on a separate thread, so that the bot can't block
/// on a full pipe while we wait for it.
///
/// Processes forked by the bot may hold on to the pipe after the bot itself is
/// gone, so the reader is never joined. It is left behind if nothing arrives
/// in time.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        let _ = sender.send(buf);
    });
    receiver
}

/// Waits for `child` until `deadline`. Returns `None` on timeout, after
/// killing the child.
fn wait_until(child: &mut Child, deadline: Instant) -> anyhow::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// The pipe's contents, or `None` if it is still open at `deadline`.
fn collect_until(pipe: &Receiver<String>, deadline: Instant) -> Option<String> {
    pipe.recv_timeout(deadline.saturating_duration_since(Instant::now()))
        .ok()
}

impl BotCommand {
    pub fn new(executable: &Path, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            executable: executable.to_path_buf(),
            args,
            timeout,
        }
    }

    /// Runs the bot once on `state` and validates its output for `phase`.
    ///
    /// Never fails: problems with running the bot are reported as
    /// [`PhaseOutcome::Failed`].
    pub fn run_phase(&self, state: &GameState, phase: ValidationPhase) -> PhaseOutcome {
        match self.execute(state, phase) {
            Ok(outcome) => outcome,
            Err(err) => PhaseOutcome::Failed(err),
        }
    }

    fn execute(&self, state: &GameState, phase: ValidationPhase) -> anyhow::Result<PhaseOutcome> {
        let state_file = StateFile::create(state, phase)?;
        debug!(
            %phase,
            bot = %self.executable.display(),
            state_file = %state_file.path.display(),
            "Running bot"
        );
        let mut child = Command::new(&self.executable)
            .args(&self.args)
            .arg(&state_file.path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        let deadline = Instant::now() + self.timeout;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let Some(status) = wait_until(&mut child, deadline)? else {
            debug!(%phase, "Bot killed after timeout");
            return Ok(PhaseOutcome::TimedOut);
        };
        let (Some(stdout), Some(stderr)) = (
            collect_until(&stdout, deadline),
            collect_until(&stderr, deadline),
        ) else {
            debug!(%phase, "Bot exited but its output is still open");
            return Ok(PhaseOutcome::TimedOut);
        };
        trace!(name: "Bot finished", %phase, stdout = %stdout.trim_end(), stderr = %stderr.trim_end());

        if !status.success() {
            return Ok(PhaseOutcome::Crashed {
                code: status.code(),
                stderr: stderr.chars().take(STDERR_EXCERPT_CHARS).collect(),
            });
        }
        let output = String::from(stdout.trim());
        Ok(match validate_output(&output, phase) {
            Ok(message) => PhaseOutcome::Passed { message, output },
            Err(err) => PhaseOutcome::InvalidOutput { err, output },
        })
    }
}
