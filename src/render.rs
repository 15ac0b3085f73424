//! Launching the external wallpaper renderer.

use super::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

const DEFAULT_PROGRAM: &str = "swaybg";
const DEFAULT_KILLER: &str = "pkill";
const DEFAULT_STARTUP: Duration = Duration::from_millis(500);

/// How to start the renderer and how to stop its older instances.
///
/// The renderer is run as `<program> <leading args> -i <image> -m fill`, and
/// afterwards `<killer> -o <process name>` asks the oldest running instance
/// to exit.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: String,
    leading_args: Vec<String>,
    process_name: String,
    killer: String,
    startup: Duration,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            leading_args: Vec::new(),
            process_name: DEFAULT_PROGRAM.to_string(),
            killer: DEFAULT_KILLER.to_string(),
            startup: DEFAULT_STARTUP,
        }
    }
}

impl Renderer {
    /// Use another program, placing `leading_args` before the image
    /// arguments. `process_name` is what the kill utility matches on.
    pub fn with_program<I, S>(mut self, program: &str, leading_args: I, process_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program = program.to_string();
        self.leading_args = leading_args.into_iter().map(Into::into).collect();
        self.process_name = process_name.to_string();
        self
    }

    pub fn with_killer(mut self, killer: &str) -> Self {
        self.killer = killer.to_string();
        self
    }

    pub fn with_startup(mut self, startup: Duration) -> Self {
        self.startup = startup;
        self
    }

    fn command(&self, image: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg("-i")
            .arg(image)
            .args(["-m", "fill"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    /// Start the renderer in the background and check it is still running
    /// once the startup window has passed.
    ///
    /// The child is left running when this returns; it outlives this process.
    pub fn launch(&self, image: &Path) -> Result<()> {
        tracing::debug!(program = %self.program, image = %image.display(), "starting renderer");

        let mut child = self
            .command(image)
            .spawn()
            .map_err(|err| Error::Spawn(self.program.clone(), err))?;

        thread::sleep(self.startup);

        match child.try_wait() {
            Ok(None) => {}
            Ok(Some(status)) => {
                tracing::debug!(%status, "renderer exited during startup");
                return Err(Error::Exited(self.program.clone()));
            }
            Err(err) => {
                tracing::debug!(error = %err, "could not poll renderer");
                return Err(Error::Exited(self.program.clone()));
            }
        }

        self.stop_oldest();

        Ok(())
    }

    /// Best effort: failures are only logged.
    fn stop_oldest(&self) {
        let result = Command::new(&self.killer)
            .args(["-o", self.process_name.as_str()])
            .stdin(Stdio::null())
            .status();

        match result {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!(
                "{} -o {} failed: {status}",
                self.killer,
                self.process_name
            ),
            Err(err) => tracing::warn!("{} -o {} failed: {err}", self.killer, self.process_name),
        }
    }
}
