//! Persistent action bar with overflow handling.
//!
//! The bar renders a row of labeled actions, optionally next to a text
//! section. When the available width cannot hold every action, trailing
//! actions move behind a "⋯" trigger that opens an overlay [`Menu`]; the
//! layout decision comes from [`ribbon_core::overflow::compute`] on every
//! render, so a resize immediately re-balances which actions stay inline.

use crate::locale::ActionBarStrings;
use crate::menu::{self, Menu, MenuItem, Position};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use ribbon_core::command::Command;
use ribbon_core::component::Component;
use ribbon_core::measure::{CellMeasurer, TextMeasurer};
use ribbon_core::overflow::{self, Constraints, Item, Layout};
use std::cell::Cell;

/// Fixed horizontal padding per action, in cells (one on each side).
const ACTION_PADDING: f64 = 2.0;
/// Gap between adjacent actions, in cells.
const ACTION_GAP: f64 = 1.0;
/// Width reserved for the overflow trigger when actions are hidden.
const TRIGGER_AFFORDANCE: f64 = 4.0;

/// Visual emphasis of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    /// Plain action (default).
    #[default]
    Default,
    /// The bar's main action, rendered emphasized.
    Primary,
    /// A de-emphasized action.
    Secondary,
}

/// One action in the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Text shown on the action.
    pub label: String,
    /// Visual emphasis.
    pub variant: ActionVariant,
    /// Disabled actions render dimmed and cannot be activated.
    pub disabled: bool,
}

impl Action {
    /// Create an enabled action with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ActionVariant::default(),
            disabled: false,
        }
    }

    /// Set the visual emphasis.
    pub fn with_variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Mark the action as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Style configuration for the action bar.
#[derive(Debug, Clone)]
pub struct ActionBarStyle {
    /// Style for the title text.
    pub title: Style,
    /// Style for the content text.
    pub content: Style,
    /// Style for default-variant actions.
    pub action: Style,
    /// Style for primary-variant actions.
    pub primary_action: Style,
    /// Style for secondary-variant actions.
    pub secondary_action: Style,
    /// Style for disabled actions.
    pub disabled_action: Style,
    /// Style for the overflow trigger.
    pub trigger: Style,
}

impl Default for ActionBarStyle {
    fn default() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            content: Style::default().fg(Color::Gray),
            action: Style::default(),
            primary_action: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            secondary_action: Style::default().fg(Color::DarkGray),
            disabled_action: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            trigger: Style::default().fg(Color::Cyan),
        }
    }
}

/// Messages for the action bar component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the bar.
    KeyPress(KeyEvent),
    /// A message from the overflow menu.
    Menu(menu::Message),
    /// An action was activated, identified by its index in the full action
    /// list (inline and hidden alike).
    Activated(usize),
}

/// A persistent bar of actions with overflow into a menu.
///
/// # Example
///
/// ```ignore
/// use ribbon_widgets::action_bar::{Action, ActionBar, ActionVariant};
///
/// let bar = ActionBar::new(vec![
///     Action::new("Save").with_variant(ActionVariant::Primary),
///     Action::new("Open"),
///     Action::new("Export"),
/// ])
/// .with_title("Draft")
/// .with_bordered(true);
/// ```
pub struct ActionBar {
    title: String,
    content: String,
    actions: Vec<Action>,
    bordered: bool,
    max_lines: usize,
    strings: ActionBarStrings,
    style: ActionBarStyle,
    menu: Menu,
    cursor: usize,
    focus: bool,
    measurer: Box<dyn TextMeasurer>,
    // Layout from the last render; update() consults it for cursor movement
    // and for splitting actions into inline and hidden.
    layout: Cell<Layout>,
}

impl ActionBar {
    /// Create a bar over the given actions.
    pub fn new(actions: Vec<Action>) -> Self {
        let strings = ActionBarStrings::default();
        let menu = Self::build_menu(&strings);
        Self {
            title: String::new(),
            content: String::new(),
            actions,
            bordered: false,
            max_lines: 1,
            strings,
            style: ActionBarStyle::default(),
            menu,
            cursor: 0,
            focus: false,
            measurer: Box::new(CellMeasurer),
            layout: Cell::new(Layout {
                visible: 0,
                overflow: true,
            }),
        }
    }

    fn build_menu(strings: &ActionBarStrings) -> Menu {
        Menu::new()
            .with_position(Position::Above)
            .with_block(Block::bordered().title(format!(" {} ", strings.overflow_menu)))
    }

    /// Set the title shown in the text section.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the content shown next to the title.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Draw a border around the bar.
    pub fn with_bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Allow actions to occupy up to `lines` display lines before
    /// overflowing (minimum 1).
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = lines.max(1);
        self
    }

    /// Set the UI strings.
    pub fn with_strings(mut self, strings: ActionBarStrings) -> Self {
        self.menu = Self::build_menu(&strings);
        self.strings = strings;
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: ActionBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the text measurer.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Get the actions.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Replace the actions. The cursor returns to the first slot and the
    /// overflow menu closes.
    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        self.cursor = 0;
        self.menu.hide();
    }

    /// Number of actions inline as of the last render.
    pub fn visible_count(&self) -> usize {
        self.layout.get().visible
    }

    /// Whether the last render needed the overflow trigger.
    pub fn is_overflowing(&self) -> bool {
        self.layout.get().overflow
    }

    /// Whether the overflow menu is currently open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_visible()
    }

    /// Give or remove keyboard focus.
    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// Slot index of the overflow trigger, if the bar is overflowing.
    fn trigger_slot(&self) -> Option<usize> {
        self.is_overflowing().then(|| self.visible_count())
    }

    fn slot_count(&self) -> usize {
        self.visible_count() + usize::from(self.is_overflowing())
    }

    fn slot_enabled(&self, slot: usize) -> bool {
        match self.actions.get(slot) {
            Some(action) if slot < self.visible_count() => !action.disabled,
            // The trigger slot is always enabled.
            _ => Some(slot) == self.trigger_slot(),
        }
    }

    /// Move the cursor by one slot, skipping disabled actions. The cursor
    /// clamps at the ends rather than wrapping.
    fn move_cursor(&mut self, forward: bool) {
        let count = self.slot_count();
        if count == 0 {
            return;
        }
        let mut idx = self.cursor.min(count - 1);
        loop {
            if forward {
                if idx + 1 >= count {
                    return;
                }
                idx += 1;
            } else {
                if idx == 0 {
                    return;
                }
                idx -= 1;
            }
            if self.slot_enabled(idx) {
                self.cursor = idx;
                return;
            }
        }
    }

    fn open_menu(&mut self) {
        let hidden: Vec<MenuItem> = self.actions[self.visible_count().min(self.actions.len())..]
            .iter()
            .map(|action| {
                let item = MenuItem::new(action.label.clone());
                if action.disabled {
                    item.disabled()
                } else {
                    item
                }
            })
            .collect();
        self.menu.set_items(hidden);
    }

    fn activate_cursor(&mut self) -> Command<Message> {
        if Some(self.cursor) == self.trigger_slot() {
            self.open_menu();
            return Command::none();
        }
        match self.actions.get(self.cursor) {
            Some(action) if !action.disabled => Command::message(Message::Activated(self.cursor)),
            _ => Command::none(),
        }
    }

    fn compute_layout(&self, available_width: f64) -> Layout {
        let candidates: Vec<Item> = self
            .actions
            .iter()
            .map(|action| Item::new(self.measurer.width(&action.label) as f64 + ACTION_PADDING))
            .collect();
        let constraints = Constraints::new(available_width)
            .with_item_overhead(ACTION_GAP)
            .with_trigger_width(TRIGGER_AFFORDANCE)
            .with_max_lines(self.max_lines);
        // Widths come from usize measurements, so the inputs are always valid.
        overflow::compute(&candidates, &constraints).unwrap_or(Layout {
            visible: 0,
            overflow: true,
        })
    }

    fn action_style(&self, action: &Action, slot: usize) -> Style {
        let mut style = if action.disabled {
            self.style.disabled_action
        } else {
            match action.variant {
                ActionVariant::Default => self.style.action,
                ActionVariant::Primary => self.style.primary_action,
                ActionVariant::Secondary => self.style.secondary_action,
            }
        };
        if self.focus && slot == self.cursor && !self.menu.is_visible() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    /// Pack the inline actions (and the trigger) into display lines, greedy
    /// left to right.
    fn action_lines(&self, width: usize) -> Vec<Line<'static>> {
        let visible = self.visible_count().min(self.actions.len());
        let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new()];
        let mut line_width = 0usize;

        let mut push = |spans: &mut Vec<Vec<Span<'static>>>,
                        line_width: &mut usize,
                        span: Span<'static>,
                        span_width: usize| {
            let gap = usize::from(!spans.last().map(Vec::is_empty).unwrap_or(true));
            if *line_width + gap + span_width > width && *line_width > 0 {
                spans.push(Vec::new());
                *line_width = 0;
            } else if gap == 1 {
                if let Some(line) = spans.last_mut() {
                    line.push(Span::raw(" "));
                }
                *line_width += 1;
            }
            if let Some(line) = spans.last_mut() {
                line.push(span);
            }
            *line_width += span_width;
        };

        for (slot, action) in self.actions.iter().take(visible).enumerate() {
            let text = format!(" {} ", action.label);
            let span_width = self.measurer.width(&action.label) + ACTION_PADDING as usize;
            let span = Span::styled(text, self.action_style(action, slot));
            push(&mut lines, &mut line_width, span, span_width);
        }

        if let Some(slot) = self.trigger_slot() {
            let mut style = self.style.trigger;
            if self.focus && slot == self.cursor && !self.menu.is_visible() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            push(
                &mut lines,
                &mut line_width,
                Span::styled(" ⋯ ", style),
                3,
            );
        }

        lines.into_iter().map(Line::from).collect()
    }
}

impl Component for ActionBar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if self.menu.is_visible() {
                    return self
                        .menu
                        .update(menu::Message::KeyPress(key))
                        .map(Message::Menu);
                }
                match key.code {
                    KeyCode::Left => {
                        self.move_cursor(false);
                        Command::none()
                    }
                    KeyCode::Right => {
                        self.move_cursor(true);
                        Command::none()
                    }
                    KeyCode::Enter => self.activate_cursor(),
                    _ => Command::none(),
                }
            }
            Message::Menu(menu_msg) => match menu_msg {
                menu::Message::Selected(index, _) => {
                    Command::message(Message::Activated(self.visible_count() + index))
                }
                menu::Message::Dismissed => Command::none(),
                other => self.menu.update(other).map(Message::Menu),
            },
            Message::Activated(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if self.bordered {
            let block = Block::bordered();
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        } else {
            area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let has_text = !self.title.is_empty() || !self.content.is_empty();
        let text_width = if has_text { inner.width / 2 } else { 0 };
        let actions_area = Rect {
            x: inner.x + text_width,
            width: inner.width - text_width,
            ..inner
        };

        let layout = self.compute_layout(actions_area.width as f64);
        self.layout.set(layout);

        if has_text {
            let text_area = Rect {
                width: text_width,
                ..inner
            };
            let mut spans = Vec::new();
            if !self.title.is_empty() {
                spans.push(Span::styled(self.title.clone(), self.style.title));
            }
            if !self.content.is_empty() {
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(self.content.clone(), self.style.content));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), text_area);
        }

        for (i, line) in self
            .action_lines(actions_area.width as usize)
            .into_iter()
            .take(actions_area.height as usize)
            .enumerate()
        {
            let row = Rect {
                y: actions_area.y + i as u16,
                height: 1,
                ..actions_area
            };
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), row);
        }

        if self.menu.is_visible() {
            let menu_width = inner.width.min(24);
            let anchor = Rect {
                x: inner.x + inner.width - menu_width,
                y: inner.y,
                width: menu_width,
                height: 1,
            };
            self.menu.view(frame, anchor);
        }
    }

    fn focused(&self) -> bool {
        self.focus || self.menu.is_visible()
    }
}
