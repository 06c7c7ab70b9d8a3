//! Overlay menu for hidden overflow items.
//!
//! Entries are managed externally. The menu renders as a bordered overlay
//! anchored above or below a given area, typically the overflow trigger of
//! an [`ActionBar`](crate::action_bar::ActionBar). Disabled entries are
//! rendered but skipped during keyboard navigation.

use crate::text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use ribbon_core::command::Command;
use ribbon_core::component::Component;

/// Position of the menu relative to its anchor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Render above the anchor area (default for bottom-anchored bars).
    #[default]
    Above,
    /// Render below the anchor area.
    Below,
}

/// One entry in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown for the entry.
    pub label: String,
    /// Disabled entries render dimmed and cannot be activated.
    pub disabled: bool,
}

impl MenuItem {
    /// Create an enabled entry with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the entry as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Style configuration for the menu.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Style for enabled, unselected entries.
    pub item: Style,
    /// Style for the entry under the cursor.
    pub selected_item: Style,
    /// Style for disabled entries.
    pub disabled_item: Style,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            selected_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_item: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Messages for the menu component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the menu.
    KeyPress(KeyEvent),
    /// An entry was activated (index, label).
    Selected(usize, String),
    /// The menu was dismissed (Esc pressed).
    Dismissed,
}

/// An overlay menu listing entries hidden behind an overflow trigger.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::menu::{Menu, MenuItem, Position};
///
/// let mut menu = Menu::new()
///     .with_position(Position::Above)
///     .with_max_visible(6);
/// menu.set_items(vec![
///     MenuItem::new("Export"),
///     MenuItem::new("Archive").disabled(),
/// ]);
/// ```
pub struct Menu {
    items: Vec<MenuItem>,
    cursor: usize,
    offset: usize,
    max_visible: usize,
    style: MenuStyle,
    position: Position,
    visible: bool,
    block: Option<Block<'static>>,
}

impl Menu {
    /// Create a new empty menu.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            offset: 0,
            max_visible: 8,
            style: MenuStyle::default(),
            position: Position::default(),
            visible: false,
            block: None,
        }
    }

    /// Set the maximum number of visible entries before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the position relative to the anchor.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the block (border/title container) for the menu.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the entries and show the menu. The cursor moves to the first
    /// enabled entry; with no entries the menu stays hidden.
    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.visible = !items.is_empty();
        self.items = items;
        self.offset = 0;
        self.cursor = self
            .items
            .iter()
            .position(|item| !item.disabled)
            .unwrap_or(0);
        self.ensure_visible();
    }

    /// Show the menu.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the menu.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the menu is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    /// Get the entries.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Get the index of the entry under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn select_next(&mut self) {
        self.step(1);
    }

    fn select_prev(&mut self) {
        self.step(-1);
    }

    /// Move the cursor by `delta`, wrapping and skipping disabled entries.
    /// Stops after one full lap so a menu of only disabled entries cannot
    /// loop forever.
    fn step(&mut self, delta: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let mut idx = self.cursor;
        for _ in 0..len {
            idx = (idx as isize + delta).rem_euclid(len as isize) as usize;
            if !self.items[idx].disabled {
                self.cursor = idx;
                self.ensure_visible();
                return;
            }
        }
    }

    fn ensure_visible(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.max_visible {
            self.offset = self.cursor + 1 - self.max_visible;
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Menu {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Esc => {
                    self.visible = false;
                    Command::message(Message::Dismissed)
                }
                KeyCode::Up => {
                    self.select_prev();
                    Command::none()
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.select_next();
                    Command::none()
                }
                KeyCode::Enter => {
                    let idx = self.cursor;
                    match self.items.get(idx) {
                        Some(item) if !item.disabled => {
                            let label = item.label.clone();
                            self.visible = false;
                            Command::message(Message::Selected(idx, label))
                        }
                        _ => Command::none(),
                    }
                }
                _ => Command::none(),
            },
            Message::Selected(..) | Message::Dismissed => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, anchor: Rect) {
        if !self.is_visible() {
            return;
        }

        let visible_count = self.items.len().min(self.max_visible);
        let menu_height = if self.block.is_some() {
            visible_count as u16 + 2 // +2 for borders
        } else {
            visible_count as u16
        };

        // With no room above the anchor the menu drops below it instead.
        let menu_area = match self.position {
            Position::Above if anchor.y >= menu_height => {
                Rect::new(anchor.x, anchor.y - menu_height, anchor.width, menu_height)
            }
            _ => Rect::new(
                anchor.x,
                anchor.y + anchor.height,
                anchor.width,
                menu_height,
            ),
        };
        let menu_area = menu_area.intersection(frame.area());

        if menu_area.height == 0 || menu_area.width < 4 {
            return; // not enough space
        }

        // Clear area behind the menu
        frame.render_widget(Clear, menu_area);

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(menu_area);
            frame.render_widget(block.clone(), menu_area);
            inner
        } else {
            menu_area
        };

        for (i, item) in self
            .items
            .iter()
            .skip(self.offset)
            .take(visible_count)
            .enumerate()
        {
            let row_area = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };
            if row_area.y >= inner.y + inner.height {
                break;
            }

            let is_selected = i + self.offset == self.cursor;
            let style = if item.disabled {
                self.style.disabled_item
            } else if is_selected {
                self.style.selected_item
            } else {
                self.style.item
            };
            let prefix = if is_selected { "▸ " } else { "  " };

            let max_text_width = row_area.width.saturating_sub(2) as usize; // prefix is 2 cells
            let label = text::truncate(&item.label, max_text_width, "…");
            let display = format!("{prefix}{label}");

            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.visible
    }
}
