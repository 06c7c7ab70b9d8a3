//! Headless test support.
//!
//! [`Harness`] drives a [`Component`] without a real terminal, and
//! [`ScriptedMeasurer`] supplies deterministic text widths so layout
//! behavior can be asserted without depending on font or terminal metrics.

use crate::command::{Command, CommandInner};
use crate::component::Component;
use crate::measure::TextMeasurer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::cell::RefCell;
use std::collections::HashMap;

/// A headless test harness that drives a [`Component`] without a real terminal.
///
/// `Harness` lets you exercise the update/view cycle in a plain `#[test]`
/// function, no tokio runtime or TTY required. Synchronous commands (e.g.
/// [`Command::message`]) are collected and can be flushed with
/// [`drain_messages`](Harness::drain_messages); async commands are silently
/// ignored.
///
/// # Example
///
/// ```rust,ignore
/// use ribbon_core::testing::Harness;
///
/// let mut harness = Harness::new(Counter::default());
/// harness.send(CounterMsg::Increment);
/// harness.send(CounterMsg::Increment);
/// assert_eq!(harness.component().count, 2);
///
/// let output = harness.render_string(40, 1);
/// assert!(output.contains("Count: 2"));
/// ```
pub struct Harness<C: Component> {
    component: C,
    pending_messages: Vec<C::Message>,
}

impl<C: Component> Harness<C> {
    /// Wrap a component for headless testing.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending_messages: Vec::new(),
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// The message is passed to [`Component::update`] immediately. Any
    /// synchronous commands returned by `update` are enqueued; call
    /// [`drain_messages`](Harness::drain_messages) to flush them.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process all pending synchronous messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the pending queue, calling [`Component::update`] for
    /// each message, until no new synchronous messages are generated. This is
    /// useful for testing command-chaining scenarios where one update produces
    /// a message that triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    ///
    /// This bypasses the normal message-driven update cycle, which can be
    /// useful for arranging test state before sending messages.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// The component's [`view`](Component::view) receives the full buffer
    /// area. Returns the raw buffer, which you can inspect cell-by-cell. For
    /// a simpler string-based assertion, see
    /// [`render_string`](Harness::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a plain string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are separated
    /// by newlines. Trailing whitespace within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<C::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            CommandInner::Sequence(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) | CommandInner::Stream(_) => {}
        }
    }
}

/// A [`TextMeasurer`] with pre-scripted widths, recording every lookup.
///
/// Texts registered via [`set_width`](ScriptedMeasurer::set_width) report the
/// scripted width; anything else falls back to one display unit per `char`.
/// Every string measured is recorded and can be retrieved with
/// [`lookups`](ScriptedMeasurer::lookups), so tests can assert both what a
/// widget measured and how it laid the results out.
#[derive(Debug, Default)]
pub struct ScriptedMeasurer {
    widths: HashMap<String, usize>,
    lookups: RefCell<Vec<String>>,
}

impl ScriptedMeasurer {
    /// Create a measurer with no scripted widths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the width reported for `text`.
    pub fn set_width(&mut self, text: impl Into<String>, width: usize) {
        self.widths.insert(text.into(), width);
    }

    /// Builder form of [`set_width`](ScriptedMeasurer::set_width).
    pub fn with_width(mut self, text: impl Into<String>, width: usize) -> Self {
        self.set_width(text, width);
        self
    }

    /// Every string measured so far, in lookup order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Forget all recorded lookups, keeping the scripted widths.
    pub fn clear_lookups(&self) {
        self.lookups.borrow_mut().clear();
    }
}

impl TextMeasurer for ScriptedMeasurer {
    fn width(&self, text: &str) -> usize {
        self.lookups.borrow_mut().push(text.to_owned());
        self.widths
            .get(text)
            .copied()
            .unwrap_or_else(|| text.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A minimal counter component for testing
    struct Counter {
        count: i64,
    }

    #[derive(Debug)]
    enum CounterMsg {
        Increment,
        Decrement,
        Reset,
    }

    impl Component for Counter {
        type Message = CounterMsg;

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => self.count += 1,
                CounterMsg::Decrement => self.count -= 1,
                CounterMsg::Reset => self.count = 0,
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame, area: Rect) {
            let text = format!("Count: {}", self.count);
            frame.render_widget(Paragraph::new(text), area);
        }
    }

    #[test]
    fn harness_send_increment() {
        let mut harness = Harness::new(Counter { count: 0 });
        harness.send(CounterMsg::Increment);
        assert_eq!(harness.component().count, 1);
    }

    #[test]
    fn harness_send_multiple() {
        let mut harness = Harness::new(Counter { count: 0 });
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Decrement);
        assert_eq!(harness.component().count, 2);
    }

    #[test]
    fn harness_reset() {
        let mut harness = Harness::new(Counter { count: 10 });
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Reset);
        assert_eq!(harness.component().count, 0);
    }

    #[test]
    fn harness_render() {
        let harness = Harness::new(Counter { count: 0 });
        let content = harness.render_string(40, 1);
        assert!(content.contains("Count: 0"));
    }

    #[test]
    fn harness_render_after_update() {
        let mut harness = Harness::new(Counter { count: 0 });
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Increment);
        let content = harness.render_string(40, 1);
        assert!(content.contains("Count: 3"));
    }

    #[test]
    fn harness_render_negative() {
        let mut harness = Harness::new(Counter { count: 0 });
        harness.send(CounterMsg::Decrement);
        let content = harness.render_string(40, 1);
        assert!(content.contains("Count: -1"));
    }

    // A component that uses Command::message for chaining
    struct Chain {
        steps: Vec<String>,
    }

    #[derive(Debug)]
    enum ChainMsg {
        Start,
        Step(String),
    }

    impl Component for Chain {
        type Message = ChainMsg;

        fn update(&mut self, msg: ChainMsg) -> Command<ChainMsg> {
            match msg {
                ChainMsg::Start => {
                    self.steps.push("started".into());
                    Command::message(ChainMsg::Step("auto".into()))
                }
                ChainMsg::Step(s) => {
                    self.steps.push(s);
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame, area: Rect) {
            let text = self.steps.join(", ");
            frame.render_widget(Paragraph::new(text), area);
        }
    }

    #[test]
    fn command_message_chaining() {
        let mut harness = Harness::new(Chain { steps: vec![] });
        harness.send(ChainMsg::Start);
        // The Command::message should have queued ChainMsg::Step
        harness.drain_messages();
        assert_eq!(harness.component().steps, vec!["started", "auto"]);
    }

    #[test]
    fn scripted_measurer_reports_scripted_width() {
        let measurer = ScriptedMeasurer::new().with_width("Save", 12);
        assert_eq!(measurer.width("Save"), 12);
    }

    #[test]
    fn scripted_measurer_falls_back_to_char_count() {
        let measurer = ScriptedMeasurer::new();
        assert_eq!(measurer.width("Open"), 4);
    }

    #[test]
    fn scripted_measurer_records_lookups() {
        let measurer = ScriptedMeasurer::new().with_width("Save", 12);
        measurer.width("Save");
        measurer.width("Open");
        assert_eq!(measurer.lookups(), vec!["Save", "Open"]);

        measurer.clear_lookups();
        assert!(measurer.lookups().is_empty());
    }
}
