//! Page position indicator with dot, fraction, and numbered styles.

use crate::locale::PaginatorStrings;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ribbon_core::command::Command;
use ribbon_core::component::Component;

/// The type of pagination indicator to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorType {
    /// Render dots: ● for active, ○ for inactive.
    Dots,
    /// Render a fraction: "2 of 5".
    Fraction,
    /// Render numbered pages with previous/next controls, collapsing long
    /// ranges with gaps: "‹ 1 … 4 5 6 … 20 ›".
    Numbered,
}

/// One slot in a windowed page listing produced by [`page_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A concrete page (zero-indexed).
    Page(usize),
    /// A run of collapsed pages, rendered as an ellipsis.
    Gap,
}

/// Compute which pages to show for a numbered paginator.
///
/// With seven or fewer pages every page is listed. Beyond that the listing
/// collapses to exactly seven slots: the first and last page always appear,
/// the current page keeps its immediate neighbors, and elided runs become
/// [`PageSlot::Gap`].
pub fn page_window(total: usize, current: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (0..total).map(PageSlot::Page).collect();
    }

    let last = total - 1;
    if current < 4 {
        let mut slots: Vec<PageSlot> = (0..5).map(PageSlot::Page).collect();
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Page(last));
        slots
    } else if current >= total - 4 {
        let mut slots = vec![PageSlot::Page(0), PageSlot::Gap];
        slots.extend((total - 5..total).map(PageSlot::Page));
        slots
    } else {
        vec![
            PageSlot::Page(0),
            PageSlot::Gap,
            PageSlot::Page(current - 1),
            PageSlot::Page(current),
            PageSlot::Page(current + 1),
            PageSlot::Gap,
            PageSlot::Page(last),
        ]
    }
}

/// Messages for the paginator component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Move to the next page.
    NextPage,
    /// Move to the previous page.
    PrevPage,
    /// Jump to a specific page (zero-indexed).
    GotoPage(usize),
}

/// Style configuration for the paginator.
#[derive(Debug, Clone)]
pub struct PaginatorStyle {
    /// Style for the active (current page) dot.
    pub active_dot: Style,
    /// Style for inactive dots.
    pub inactive_dot: Style,
    /// Style for fraction text (e.g. "2 of 5").
    pub text: Style,
    /// Style for inactive page numbers.
    pub number: Style,
    /// Style for the active page number.
    pub active_number: Style,
    /// Style for gap ellipses and the previous/next controls.
    pub nav: Style,
}

impl Default for PaginatorStyle {
    fn default() -> Self {
        Self {
            active_dot: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_dot: Style::default().fg(Color::DarkGray),
            text: Style::default(),
            number: Style::default(),
            active_number: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            nav: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A pagination indicator component.
///
/// Displays the current page position as a row of dots, a fraction
/// (e.g. "2 of 5"), or a numbered listing with previous/next controls.
pub struct Paginator {
    total_pages: usize,
    page: usize,
    per_page: usize,
    paginator_type: PaginatorType,
    style: PaginatorStyle,
    strings: PaginatorStrings,
    nav_labels: bool,
}

impl Paginator {
    /// Create a new paginator with the given number of total pages.
    /// Defaults to `PaginatorType::Dots` and 10 items per page.
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages: total_pages.max(1),
            page: 0,
            per_page: 10,
            paginator_type: PaginatorType::Dots,
            style: PaginatorStyle::default(),
            strings: PaginatorStrings::default(),
            nav_labels: false,
        }
    }

    /// Set the paginator display type.
    pub fn with_type(mut self, t: PaginatorType) -> Self {
        self.paginator_type = t;
        self
    }

    /// Set the number of items per page.
    pub fn with_per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Set the paginator style.
    pub fn with_style(mut self, style: PaginatorStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the UI strings.
    pub fn with_strings(mut self, strings: PaginatorStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Render "Previous"/"Next" labels next to the ‹ › markers in numbered
    /// mode.
    pub fn with_nav_labels(mut self, nav_labels: bool) -> Self {
        self.nav_labels = nav_labels;
        self
    }

    /// Get the current page (zero-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the current page (zero-indexed). Clamped to valid range.
    pub fn set_page(&mut self, n: usize) {
        self.page = n.min(self.total_pages.saturating_sub(1));
    }

    /// Get the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Set the total number of pages (minimum 1).
    pub fn set_total_pages(&mut self, n: usize) {
        self.total_pages = n.max(1);
        // Clamp current page if it exceeds new total
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Advance to the next page if not on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Go to the previous page if not on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Whether we are on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether we are on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages.saturating_sub(1)
    }

    /// Calculate how many items are on the current page given a total item count.
    ///
    /// For example, with 23 total items, 10 per page, and 3 pages:
    /// - Pages 0 and 1 have 10 items each.
    /// - Page 2 has 3 items.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        if total_items == 0 || self.per_page == 0 {
            return 0;
        }
        let start = self.page * self.per_page;
        if start >= total_items {
            return 0;
        }
        let remaining = total_items - start;
        remaining.min(self.per_page)
    }

    fn numbered_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        let prev = if self.nav_labels {
            format!("‹ {}", self.strings.previous)
        } else {
            "‹".to_string()
        };
        let prev_style = if self.on_first_page() {
            self.style.nav.add_modifier(Modifier::DIM)
        } else {
            self.style.nav
        };
        spans.push(Span::styled(prev, prev_style));

        for slot in page_window(self.total_pages, self.page) {
            spans.push(Span::raw(" "));
            match slot {
                PageSlot::Page(p) if p == self.page => {
                    spans.push(Span::styled((p + 1).to_string(), self.style.active_number));
                }
                PageSlot::Page(p) => {
                    spans.push(Span::styled((p + 1).to_string(), self.style.number));
                }
                PageSlot::Gap => {
                    spans.push(Span::styled("…".to_string(), self.style.nav));
                }
            }
        }

        let next = if self.nav_labels {
            format!("{} ›", self.strings.next)
        } else {
            "›".to_string()
        };
        let next_style = if self.on_last_page() {
            self.style.nav.add_modifier(Modifier::DIM)
        } else {
            self.style.nav
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(next, next_style));

        Line::from(spans)
    }
}

impl Component for Paginator {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::NextPage => {
                self.next_page();
                Command::none()
            }
            Message::PrevPage => {
                self.prev_page();
                Command::none()
            }
            Message::GotoPage(n) => {
                self.set_page(n);
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.paginator_type {
            PaginatorType::Dots => {
                let mut spans = Vec::with_capacity(self.total_pages * 2);
                for i in 0..self.total_pages {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    if i == self.page {
                        spans.push(Span::styled("●", self.style.active_dot));
                    } else {
                        spans.push(Span::styled("○", self.style.inactive_dot));
                    }
                }
                frame.render_widget(Paragraph::new(Line::from(spans)), area);
            }
            PaginatorType::Fraction => {
                let text = format!(
                    "{} {} {}",
                    self.page + 1,
                    self.strings.of,
                    self.total_pages
                );
                let span = Span::styled(text, self.style.text);
                frame.render_widget(Paragraph::new(span), area);
            }
            PaginatorType::Numbered => {
                frame.render_widget(Paragraph::new(self.numbered_line()), area);
            }
        }
    }
}
