//! Program simulator for testing lifecycle without a real terminal.
//!
//! This module provides a way to test [`Model`] implementations without
//! requiring a real terminal. Because teacup is synchronous, the simulator
//! reproduces the real event loop exactly: messages are processed in order
//! and commands run inline, with any message they produce queued behind the
//! remaining input.

use std::collections::VecDeque;

use crate::message::{Message, QuitMsg};
use crate::program::Model;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times `init()` was called.
    pub init_calls: usize,
    /// Number of times `update()` was called.
    pub update_calls: usize,
    /// Number of times `view()` was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for testing Model implementations without a terminal.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Message, Model, simulator::ProgramSimulator};
///
/// struct Counter {
///     count: i32,
/// }
///
/// impl Model for Counter {
///     fn init(&self) -> Option<Cmd> {
///         None
///     }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.count += n;
///         }
///         None
///     }
///     fn view(&self) -> String {
///         format!("Count: {}", self.count)
///     }
/// }
///
/// let mut sim = ProgramSimulator::new(Counter { count: 0 });
/// sim.send(Message::new(5));
/// sim.send(Message::new(3));
/// sim.run_until_idle();
///
/// assert_eq!(sim.model().count, 8);
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling `init()` and queueing any command output.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        if let Some(cmd) = self.model.init() {
            self.stats.commands_returned += 1;
            if let Some(msg) = cmd.execute() {
                self.input_queue.push_back(msg);
            }
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns `false` when the queue was empty or quit was requested.
    pub fn step(&mut self) -> bool {
        if !self.initialized {
            self.init();
        }
        if self.stats.quit_requested {
            return false;
        }

        let Some(msg) = self.input_queue.pop_front() else {
            return false;
        };

        if msg.is::<QuitMsg>() {
            self.stats.quit_requested = true;
            return false;
        }

        self.stats.update_calls += 1;
        if let Some(cmd) = self.model.update(msg) {
            self.stats.commands_returned += 1;
            if let Some(msg) = cmd.execute() {
                self.input_queue.push_back(msg);
            }
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
        true
    }

    /// Process messages until the queue is empty or quit is requested.
    pub fn run_until_idle(&mut self) {
        while self.step() {}
    }

    /// Access the model under test.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model under test.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// All views rendered so far, oldest first.
    #[must_use]
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// The most recently rendered view.
    #[must_use]
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Simulation statistics.
    #[must_use]
    pub const fn stats(&self) -> &SimulationStats {
        &self.stats
    }
}
