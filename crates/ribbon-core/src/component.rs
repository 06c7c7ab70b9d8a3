use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// Components own their state, mutate it in [`update`](Component::update) in
/// response to messages, and draw it in [`view`](Component::view). A host
/// application decides *where* each component renders by passing it a
/// sub-region of the frame, and routes input to it as messages.
///
/// # Composition pattern
///
/// To embed one component inside another, wrap the child's message type in a
/// variant of the parent message and use [`Command::map`] to translate
/// commands:
///
/// ```rust,ignore
/// use ribbon_core::{Command, Component};
/// use ratatui::Frame;
/// use ratatui::layout::{Constraint, Direction, Layout, Rect};
///
/// struct Toolbar { /* ... */ }
///
/// #[derive(Debug)]
/// enum ToolbarMsg { Activate(usize) }
///
/// struct App { toolbar: Toolbar }
///
/// #[derive(Debug)]
/// enum AppMsg { Toolbar(ToolbarMsg) }
///
/// impl Component for App {
///     type Message = AppMsg;
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Toolbar(m) => self.toolbar.update(m).map(AppMsg::Toolbar),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         let chunks = Layout::default()
///             .direction(Direction::Vertical)
///             .constraints([Constraint::Length(3), Constraint::Min(0)])
///             .split(area);
///         self.toolbar.view(frame, chunks[0]);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent components typically wrap this in one of their own message
    /// variants so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
