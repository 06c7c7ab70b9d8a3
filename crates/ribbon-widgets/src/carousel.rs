//! Horizontal item strip that pages through content wider than its area.
//!
//! Only items that fully fit are rendered; partially-fitting items are
//! dropped from the end rather than clipped mid-glyph. Navigation slides the
//! window one item at a time, optionally wrapping, and an optional dot row
//! mirrors the current position. Autoplay is expressed as a repeating
//! [`Command`] the host schedules.

use crate::paginator::{Paginator, PaginatorType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ribbon_core::command::Command;
use ribbon_core::component::Component;
use ribbon_core::measure::{CellMeasurer, TextMeasurer};
use ribbon_core::overflow::{self, Constraints, Item, Layout};
use std::cell::Cell;
use std::time::Duration;

/// Gap between adjacent items, in cells.
const ITEM_GAP: f64 = 2.0;

/// Messages for the carousel component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the carousel.
    KeyPress(KeyEvent),
    /// Slide the window forward by one item.
    Next,
    /// Slide the window backward by one item.
    Prev,
    /// An autoplay interval elapsed; behaves like [`Message::Next`].
    AutoAdvance,
}

/// Style configuration for the carousel.
#[derive(Debug, Clone)]
pub struct CarouselStyle {
    /// Style for item text.
    pub item: Style,
    /// Style for the first visible item when the carousel has focus.
    pub focused_item: Style,
}

impl Default for CarouselStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            focused_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// A horizontally scrolling strip of text items.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::carousel::Carousel;
/// use std::time::Duration;
///
/// let carousel = Carousel::new(vec!["One".into(), "Two".into(), "Three".into()])
///     .with_wrap(true)
///     .with_autoplay(Duration::from_secs(5))
///     .with_dots(true);
/// let autoplay = carousel.autoplay_command();
/// ```
pub struct Carousel {
    items: Vec<String>,
    start: usize,
    wrap: bool,
    autoplay: Option<Duration>,
    dots: bool,
    style: CarouselStyle,
    measurer: Box<dyn TextMeasurer>,
    paginator: Paginator,
    focus: bool,
    // Visible count from the last render, so update() can tell whether the
    // window may slide further without re-measuring.
    last_visible: Cell<usize>,
}

impl Carousel {
    /// Create a carousel over the given items.
    pub fn new(items: Vec<String>) -> Self {
        let paginator = Paginator::new(items.len()).with_type(PaginatorType::Dots);
        Self {
            items,
            start: 0,
            wrap: false,
            autoplay: None,
            dots: false,
            style: CarouselStyle::default(),
            measurer: Box::new(CellMeasurer),
            paginator,
            focus: false,
            last_visible: Cell::new(0),
        }
    }

    /// Wrap from the last window position back to the first (and vice versa).
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Advance automatically at the given period. The schedule itself comes
    /// from [`autoplay_command`](Carousel::autoplay_command).
    pub fn with_autoplay(mut self, period: Duration) -> Self {
        self.autoplay = Some(period);
        self
    }

    /// Render a dot row beneath the items showing the window position.
    pub fn with_dots(mut self, dots: bool) -> Self {
        self.dots = dots;
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the text measurer.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Get the items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the items, resetting the window to the first item.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.start = 0;
        self.paginator.set_total_pages(self.items.len());
        self.paginator.set_page(0);
    }

    /// Index of the first visible item.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Item indices in view as of the last render.
    ///
    /// Empty until the first render has measured the area.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.start + self.last_visible.get()).min(self.items.len());
        self.start..end
    }

    /// Give or remove keyboard focus.
    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// The repeating command that drives autoplay, if configured.
    ///
    /// Hosts run this once alongside the component; each fire delivers
    /// [`Message::AutoAdvance`].
    pub fn autoplay_command(&self) -> Command<Message> {
        match self.autoplay {
            Some(period) => Command::every(period, |_| Message::AutoAdvance),
            None => Command::none(),
        }
    }

    fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let visible = self.last_visible.get().max(1);
        if self.start + visible < self.items.len() {
            self.start += 1;
        } else if self.wrap {
            self.start = 0;
        }
        self.paginator.set_page(self.start);
    }

    fn retreat(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.start > 0 {
            self.start -= 1;
        } else if self.wrap {
            let visible = self.last_visible.get().max(1);
            self.start = self.items.len().saturating_sub(visible);
        }
        self.paginator.set_page(self.start);
    }

    fn layout_from(&self, width: f64) -> Layout {
        let candidates: Vec<Item> = self.items[self.start..]
            .iter()
            .map(|item| Item::new(self.measurer.width(item) as f64))
            .collect();
        let constraints = Constraints::new(width).with_item_overhead(ITEM_GAP);
        // Widths come from usize measurements, so the inputs are always valid.
        overflow::compute(&candidates, &constraints).unwrap_or(Layout {
            visible: 0,
            overflow: true,
        })
    }
}

impl Component for Carousel {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                match key.code {
                    KeyCode::Right => self.advance(),
                    KeyCode::Left => self.retreat(),
                    _ => {}
                }
                Command::none()
            }
            Message::Next | Message::AutoAdvance => {
                self.advance();
                Command::none()
            }
            Message::Prev => {
                self.retreat();
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = self.layout_from(area.width as f64);
        self.last_visible.set(layout.visible);

        let mut spans = Vec::new();
        for (i, item) in self
            .items
            .iter()
            .skip(self.start)
            .take(layout.visible)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(ITEM_GAP as usize)));
            }
            let style = if self.focus && i == 0 {
                self.style.focused_item
            } else {
                self.style.item
            };
            spans.push(Span::styled(item.clone(), style));
        }
        let row = Rect { height: 1, ..area };
        frame.render_widget(Paragraph::new(Line::from(spans)), row);

        if self.dots && area.height >= 2 {
            let dots_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            self.paginator.view(frame, dots_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ribbon_core::testing::{Harness, ScriptedMeasurer};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn carousel(labels: &[&str]) -> Carousel {
        Carousel::new(labels.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn renders_items_that_fit() {
        // "One" + gap + "Two" = 8 cells; "Three" does not fit in 12.
        let harness = Harness::new(carousel(&["One", "Two", "Three"]));
        let content = harness.render_string(12, 1);
        assert!(content.contains("One"));
        assert!(content.contains("Two"));
        assert!(!content.contains("Three"));
    }

    #[test]
    fn next_slides_window() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]));
        harness.render(12, 1);
        harness.send(Message::Next);
        assert_eq!(harness.component().start(), 1);

        let content = harness.render_string(12, 1);
        assert!(!content.contains("One"));
        assert!(content.contains("Two"));
        assert!(content.contains("Three"));
    }

    #[test]
    fn next_stops_at_end_without_wrap() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]));
        harness.render(12, 1);
        harness.send(Message::Next);
        harness.send(Message::Next);
        assert_eq!(harness.component().start(), 1);
    }

    #[test]
    fn next_wraps_when_enabled() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]).with_wrap(true));
        harness.render(12, 1);
        harness.send(Message::Next);
        harness.send(Message::Next);
        assert_eq!(harness.component().start(), 0);
    }

    #[test]
    fn prev_slides_back_and_wraps() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]).with_wrap(true));
        harness.render(12, 1);
        harness.send(Message::Prev);
        // Wraps to the last window start (3 items, 2 visible).
        assert_eq!(harness.component().start(), 1);
        harness.send(Message::Prev);
        assert_eq!(harness.component().start(), 0);
    }

    #[test]
    fn prev_stops_at_start_without_wrap() {
        let mut harness = Harness::new(carousel(&["One", "Two"]));
        harness.render(20, 1);
        harness.send(Message::Prev);
        assert_eq!(harness.component().start(), 0);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]));
        harness.render(12, 1);
        harness.send(Message::KeyPress(key(KeyCode::Right)));
        assert_eq!(harness.component().start(), 1);
        harness.send(Message::KeyPress(key(KeyCode::Left)));
        assert_eq!(harness.component().start(), 0);
    }

    #[test]
    fn auto_advance_acts_like_next() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]).with_wrap(true));
        harness.render(12, 1);
        harness.send(Message::AutoAdvance);
        assert_eq!(harness.component().start(), 1);
    }

    #[test]
    fn autoplay_command_requires_configuration() {
        let plain = carousel(&["One"]);
        assert!(plain.autoplay_command().is_none());

        let auto = carousel(&["One"]).with_autoplay(Duration::from_secs(5));
        assert!(!auto.autoplay_command().is_none());
    }

    #[test]
    fn scripted_widths_control_fit() {
        let measurer = ScriptedMeasurer::new()
            .with_width("a", 10)
            .with_width("b", 10)
            .with_width("c", 10);
        let harness = Harness::new(carousel(&["a", "b", "c"]).with_measurer(measurer));
        // 10 + 2 + 10 = 22 <= 24; third item would need 34.
        let content = harness.render_string(24, 1);
        assert!(content.contains('a'));
        assert!(content.contains('b'));
        assert!(!content.contains('c'));
    }

    #[test]
    fn dots_render_below_items() {
        let harness = Harness::new(carousel(&["One", "Two", "Three"]).with_dots(true));
        let content = harness.render_string(20, 2);
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].contains("One"));
        assert!(lines[1].contains("●"));
    }

    #[test]
    fn dots_track_window_position() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]).with_dots(true));
        harness.render(12, 2);
        harness.send(Message::Next);
        let content = harness.render_string(12, 2);
        let dots_line = content.lines().nth(1).unwrap();
        // Second dot active after one advance.
        assert_eq!(dots_line.trim_end(), "○ ● ○");
    }

    #[test]
    fn visible_range_tracks_render() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]));
        assert!(harness.component().visible_range().is_empty());

        harness.render(12, 1);
        assert_eq!(harness.component().visible_range(), 0..2);

        harness.send(Message::Next);
        harness.render(12, 1);
        assert_eq!(harness.component().visible_range(), 1..3);
    }

    #[test]
    fn set_items_resets_window() {
        let mut harness = Harness::new(carousel(&["One", "Two", "Three"]));
        harness.render(12, 1);
        harness.send(Message::Next);
        assert_eq!(harness.component().start(), 1);

        harness
            .component_mut()
            .set_items(vec!["x".into(), "y".into()]);
        assert_eq!(harness.component().start(), 0);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut harness = Harness::new(carousel(&[]));
        harness.send(Message::Next);
        harness.send(Message::Prev);
        assert_eq!(harness.component().start(), 0);
    }
}
