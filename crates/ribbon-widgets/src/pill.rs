//! Compact tag component with themed background.
//!
//! A pill renders a short label on a colored background, optionally with a
//! close affordance or an embedded button (e.g. a count). Labels wider than
//! `max_width` are truncated with an ellipsis.

use crate::text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ribbon_core::command::Command;
use ribbon_core::component::Component;

/// Size of a pill, controlling its horizontal padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillSize {
    /// Three cells of padding on each side.
    Large,
    /// Two cells of padding on each side (default).
    #[default]
    Medium,
    /// One cell of padding on each side.
    Small,
    /// No padding.
    XSmall,
}

impl PillSize {
    fn padding(self) -> usize {
        match self {
            PillSize::Large => 3,
            PillSize::Medium => 2,
            PillSize::Small => 1,
            PillSize::XSmall => 0,
        }
    }
}

/// Color theme of a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillTheme {
    Red,
    RedOrange,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    BlueGreen,
    #[default]
    Blue,
    BlueViolet,
    Violet,
    VioletRed,
    Grey,
    White,
}

impl PillTheme {
    /// Background color for the theme.
    pub fn background(self) -> Color {
        match self {
            PillTheme::Red => Color::Red,
            PillTheme::RedOrange => Color::LightRed,
            PillTheme::Orange => Color::Indexed(208),
            PillTheme::Yellow => Color::Yellow,
            PillTheme::YellowGreen => Color::Indexed(154),
            PillTheme::Green => Color::Green,
            PillTheme::BlueGreen => Color::Indexed(37),
            PillTheme::Blue => Color::Blue,
            PillTheme::BlueViolet => Color::Indexed(63),
            PillTheme::Violet => Color::Magenta,
            PillTheme::VioletRed => Color::Indexed(162),
            PillTheme::Grey => Color::DarkGray,
            PillTheme::White => Color::White,
        }
    }

    /// Foreground color that stays legible on [`background`](Self::background).
    pub fn foreground(self) -> Color {
        match self {
            PillTheme::Yellow | PillTheme::YellowGreen | PillTheme::White => Color::Black,
            _ => Color::White,
        }
    }
}

/// Interaction variant of a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillKind {
    /// Static label only (default).
    #[default]
    Default,
    /// Shows a close affordance; Delete or Backspace emits
    /// [`Message::Closed`].
    Closable,
    /// Shows an embedded button; Enter emits [`Message::ButtonActivated`].
    WithButton,
}

/// Messages for the pill component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the pill.
    KeyPress(KeyEvent),
    /// The close affordance was activated.
    Closed,
    /// The embedded button was activated.
    ButtonActivated,
}

/// A compact themed tag.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::pill::{Pill, PillKind, PillSize, PillTheme};
///
/// let pill = Pill::new("Urgent")
///     .with_theme(PillTheme::Red)
///     .with_size(PillSize::Small)
///     .with_kind(PillKind::Closable);
/// ```
pub struct Pill {
    label: String,
    kind: PillKind,
    theme: PillTheme,
    size: PillSize,
    button_text: String,
    max_width: Option<usize>,
    disabled: bool,
    focus: bool,
}

impl Pill {
    /// Create a default-kind pill with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: PillKind::default(),
            theme: PillTheme::default(),
            size: PillSize::default(),
            button_text: String::new(),
            max_width: None,
            disabled: false,
            focus: false,
        }
    }

    /// Set the interaction variant.
    pub fn with_kind(mut self, kind: PillKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: PillTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: PillSize) -> Self {
        self.size = size;
        self
    }

    /// Set the text of the embedded button (only rendered for
    /// [`PillKind::WithButton`]).
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = text.into();
        self
    }

    /// Limit the label to `max_width` display cells, truncating with an
    /// ellipsis.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Disable the pill: interactions are ignored and it renders dimmed.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Whether the pill is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Give or remove keyboard focus.
    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    fn display_label(&self) -> String {
        match self.max_width {
            Some(max) => text::truncate(&self.label, max, "…"),
            None => self.label.clone(),
        }
    }

    fn suffix(&self) -> Option<String> {
        match self.kind {
            PillKind::Default => None,
            PillKind::Closable => Some("✕".into()),
            PillKind::WithButton => Some(self.button_text.clone()),
        }
    }

    /// Rendered width in display cells: padding, label, and any suffix.
    pub fn width(&self) -> usize {
        let mut width = self.size.padding() * 2 + text::display_width(&self.display_label());
        if let Some(suffix) = self.suffix() {
            // One separating space before the affordance.
            width += 1 + text::display_width(&suffix);
        }
        width
    }
}

impl Component for Pill {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Delete | KeyCode::Backspace if self.kind == PillKind::Closable => {
                    Command::message(Message::Closed)
                }
                KeyCode::Enter if self.kind == PillKind::WithButton => {
                    Command::message(Message::ButtonActivated)
                }
                _ => Command::none(),
            },
            Message::Closed | Message::ButtonActivated => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut style = Style::default()
            .fg(self.theme.foreground())
            .bg(self.theme.background());
        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        } else if self.focus {
            style = style.add_modifier(Modifier::BOLD);
        }

        let padding = " ".repeat(self.size.padding());
        let mut content = format!("{padding}{}", self.display_label());
        if let Some(suffix) = self.suffix() {
            content.push(' ');
            content.push_str(&suffix);
        }
        content.push_str(&padding);

        let line = Line::from(Span::styled(content, style));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ribbon_core::testing::Harness;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn width_counts_padding_and_label() {
        // 2 + 4 + 2 with medium padding.
        let pill = Pill::new("Sale");
        assert_eq!(pill.width(), 8);

        let pill = Pill::new("Sale").with_size(PillSize::XSmall);
        assert_eq!(pill.width(), 4);
    }

    #[test]
    fn width_includes_close_affordance() {
        let plain = Pill::new("Sale").with_size(PillSize::XSmall);
        let closable = Pill::new("Sale")
            .with_size(PillSize::XSmall)
            .with_kind(PillKind::Closable);
        // Space plus the ✕ glyph.
        assert_eq!(closable.width(), plain.width() + 2);
    }

    #[test]
    fn width_includes_button_text() {
        let pill = Pill::new("Inbox")
            .with_size(PillSize::XSmall)
            .with_kind(PillKind::WithButton)
            .with_button_text("2");
        // "Inbox" (5) + " " + "2"
        assert_eq!(pill.width(), 7);
    }

    #[test]
    fn max_width_truncates_label() {
        let pill = Pill::new("A very long label")
            .with_size(PillSize::XSmall)
            .with_max_width(6);
        assert_eq!(pill.width(), 6);
    }

    #[test]
    fn delete_closes_closable_pill() {
        let mut pill = Pill::new("Tag").with_kind(PillKind::Closable);
        let cmd = pill.update(Message::KeyPress(key(KeyCode::Delete)));
        assert!(matches!(cmd.into_message(), Some(Message::Closed)));
    }

    #[test]
    fn backspace_closes_closable_pill() {
        let mut pill = Pill::new("Tag").with_kind(PillKind::Closable);
        let cmd = pill.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert!(matches!(cmd.into_message(), Some(Message::Closed)));
    }

    #[test]
    fn delete_ignored_on_default_pill() {
        let mut pill = Pill::new("Tag");
        let cmd = pill.update(Message::KeyPress(key(KeyCode::Delete)));
        assert!(cmd.is_none());
    }

    #[test]
    fn enter_activates_button() {
        let mut pill = Pill::new("Inbox")
            .with_kind(PillKind::WithButton)
            .with_button_text("2");
        let cmd = pill.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(matches!(cmd.into_message(), Some(Message::ButtonActivated)));
    }

    #[test]
    fn disabled_pill_ignores_input() {
        let mut pill = Pill::new("Tag")
            .with_kind(PillKind::Closable)
            .with_disabled(true);
        let cmd = pill.update(Message::KeyPress(key(KeyCode::Delete)));
        assert!(cmd.is_none());
    }

    #[test]
    fn focus_is_reported() {
        let mut pill = Pill::new("Tag");
        assert!(!pill.focused());
        pill.set_focus(true);
        assert!(pill.focused());
    }

    #[test]
    fn renders_label() {
        let harness = Harness::new(Pill::new("Urgent").with_theme(PillTheme::Red));
        let content = harness.render_string(20, 1);
        assert!(content.contains("Urgent"));
    }

    #[test]
    fn renders_close_affordance() {
        let harness = Harness::new(Pill::new("Tag").with_kind(PillKind::Closable));
        let content = harness.render_string(20, 1);
        assert!(content.contains("✕"));
    }

    #[test]
    fn renders_truncated_label() {
        let harness = Harness::new(
            Pill::new("A very long label")
                .with_size(PillSize::XSmall)
                .with_max_width(6),
        );
        let content = harness.render_string(20, 1);
        assert!(content.contains("…"));
        assert!(!content.contains("label"));
    }

    #[test]
    fn every_theme_has_legible_foreground() {
        let themes = [
            PillTheme::Red,
            PillTheme::RedOrange,
            PillTheme::Orange,
            PillTheme::Yellow,
            PillTheme::YellowGreen,
            PillTheme::Green,
            PillTheme::BlueGreen,
            PillTheme::Blue,
            PillTheme::BlueViolet,
            PillTheme::Violet,
            PillTheme::VioletRed,
            PillTheme::Grey,
            PillTheme::White,
        ];
        for theme in themes {
            assert_ne!(theme.foreground(), theme.background());
        }
    }
}
