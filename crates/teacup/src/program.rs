//! Program lifecycle and event loop.
//!
//! The [`Program`] struct manages the entire TUI application lifecycle:
//! terminal setup and teardown, event translation, message dispatch, and
//! rendering. The loop is synchronous: one terminal event is translated into
//! one message, the pending message queue is drained through `update`, any
//! returned commands run inline, and the view is re-rendered if anything
//! changed.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::command::Cmd;
use crate::key::from_crossterm_key;
use crate::message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};

/// Errors that can occur when running a teacup program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Raw mode is required for TUI operation as it disables terminal line
    /// buffering and echo. This error typically indicates the terminal
    /// doesn't support raw mode or isn't a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// Whether we were trying to enter or exit alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(#[source] io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(#[source] io::Error),
}

/// A specialized [`Result`] type for teacup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for TUI applications.
///
/// Implement this trait to define your application's behavior.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Message, Model};
///
/// struct Counter {
///     count: i32,
/// }
///
/// impl Model for Counter {
///     fn init(&self) -> Option<Cmd> {
///         None
///     }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.count += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("Count: {}", self.count)
///     }
/// }
/// ```
pub trait Model {
    /// Initialize the model and return an optional startup command.
    ///
    /// This is called once when the program starts.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    ///
    /// This is the pure update function at the heart of the Elm Architecture.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// This should be a pure function with no side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use alternate screen buffer.
    pub alt_screen: bool,
    /// Target frames per second for event polling.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// use teacup::Program;
///
/// let model = MyModel::new();
/// let final_model = Program::new(model).with_alt_screen().run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use alternate screen buffer (full-screen mode).
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Set the target frames per second.
    ///
    /// Default is 60 FPS. Valid range is 1-120 FPS.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Run the program with a custom writer.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup, event polling, or rendering fails.
    pub fn run_with_writer<W: Write>(self, writer: &mut W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            execute!(writer, EnterAlternateScreen).map_err(|source| Error::AltScreenFailure {
                action: "enter",
                source,
            })?;
        }

        execute!(writer, Hide)?;

        let result = self.event_loop(writer);

        // Teardown is best-effort: the terminal should be restored even when
        // the loop failed.
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    /// Run the program on stdout and return the final model state.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup, event polling, or rendering fails.
    pub fn run(self) -> Result<M> {
        let mut stdout = io::stdout();
        self.run_with_writer(&mut stdout)
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let mut queue: VecDeque<Message> = VecDeque::new();

        // Seed the model with the current window size.
        if let Ok((width, height)) = terminal::size() {
            queue.push_back(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            if let Some(msg) = cmd.execute() {
                queue.push_back(msg);
            }
        }

        // Render initial view.
        let mut last_view = String::new();
        render(&self.model, writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        // Only handle key press events, not release.
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }

                        if let Some(key_msg) =
                            from_crossterm_key(key_event.code, key_event.modifiers)
                        {
                            if key_msg.key_type == crate::KeyType::CtrlC {
                                queue.push_back(Message::new(InterruptMsg));
                            } else {
                                queue.push_back(Message::new(key_msg));
                            }
                        }
                    }
                    Event::Resize(width, height) => {
                        queue.push_back(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            let mut needs_render = false;
            while let Some(msg) = queue.pop_front() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    // Commands run inline; their messages queue behind
                    // whatever input is already pending.
                    if let Some(msg) = cmd.execute() {
                        queue.push_back(msg);
                    }
                }
                needs_render = true;
            }

            if needs_render {
                render(&self.model, writer, &mut last_view)?;
            }
        }
    }
}

fn render<M: Model, W: Write>(model: &M, writer: &mut W, last_view: &mut String) -> Result<()> {
    let view = model.view();

    // Skip if view hasn't changed.
    if view == *last_view {
        return Ok(());
    }

    execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
    // Raw mode needs explicit carriage returns.
    for (i, line) in view.lines().enumerate() {
        if i > 0 {
            write!(writer, "\r\n").map_err(Error::Render)?;
        }
        write!(writer, "{line}").map_err(Error::Render)?;
    }
    writer.flush().map_err(Error::Render)?;

    *last_view = view;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ProgramOptions::default();
        assert!(!options.alt_screen);
        assert_eq!(options.fps, 60);
    }

    #[test]
    fn test_fps_clamped() {
        struct Noop;
        impl Model for Noop {
            fn init(&self) -> Option<Cmd> {
                None
            }
            fn update(&mut self, _msg: Message) -> Option<Cmd> {
                None
            }
            fn view(&self) -> String {
                String::new()
            }
        }

        let program = Program::new(Noop).with_fps(500);
        assert_eq!(program.options.fps, 120);
        let program = Program::new(Noop).with_fps(0);
        assert_eq!(program.options.fps, 1);
    }
}
