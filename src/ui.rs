use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use menu_compare::{currency, table_caption, Action, AppState, Handle, MenuItem, View};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Items,
    Chart,
    Compare,
    Venues,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Items => Page::Chart,
            Page::Chart => Page::Compare,
            Page::Compare => Page::Venues,
            Page::Venues => Page::Items,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Items => Page::Venues,
            Page::Chart => Page::Items,
            Page::Compare => Page::Chart,
            Page::Venues => Page::Compare,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Items => "Items",
            Page::Chart => "Avg by Category",
            Page::Compare => "Compare",
            Page::Venues => "Venues",
        }
    }
}

/// What typed characters go into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    VenueName,
    VenueAddress,
}

pub struct App {
    pub state: AppState,
    pub items_state: TableState,
    pub venues_state: TableState,
    pub current_page: Page,
    pub input_mode: InputMode,
    pub venue_name: String,
    pub venue_address: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut venues_state = TableState::default();
        if !state.venues.is_empty() {
            venues_state.select(Some(0));
        }

        let mut app = Self {
            state,
            items_state: TableState::default(),
            venues_state,
            current_page: Page::Items,
            input_mode: InputMode::Normal,
            venue_name: String::new(),
            venue_address: String::new(),
        };
        app.clamp_selection();
        app
    }

    fn dispatch(&mut self, action: Action) {
        let filters_changed = !matches!(action, Action::ToggleCompare(_) | Action::AddVenue { .. });
        self.state.dispatch(action);
        if filters_changed {
            self.clamp_selection();
        }
    }

    /// Keep the item cursor inside the (possibly shorter) filtered list
    fn clamp_selection(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            self.items_state.select(None);
        } else {
            let i = self.items_state.selected().unwrap_or(0).min(len - 1);
            self.items_state.select(Some(i));
        }
    }

    fn filtered_len(&self) -> usize {
        self.state.view().filtered.len()
    }

    fn list_len(&self) -> usize {
        match self.current_page {
            Page::Venues => self.state.venues.len(),
            _ => self.filtered_len(),
        }
    }

    fn cursor(&mut self) -> &mut TableState {
        match self.current_page {
            Page::Venues => &mut self.venues_state,
            _ => &mut self.items_state,
        }
    }

    pub fn selected_item_id(&self) -> Option<String> {
        let view = self.state.view();
        self.items_state
            .selected()
            .and_then(|i| view.filtered.get(i))
            .map(|item| item.id.clone())
    }

    pub fn selected_venue_id(&self) -> Option<String> {
        self.venues_state
            .selected()
            .and_then(|i| self.state.venues.venues().get(i))
            .map(|v| v.id.clone())
    }

    /// Step through "All" and each category, wrapping around
    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.state.catalog.categories();
        let current = categories
            .iter()
            .position(|c| *c == self.state.filter.category)
            .unwrap_or(0);
        let len = categories.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.dispatch(Action::SetCategory(categories[next].clone()));
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let state = self.cursor();
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let state = self.cursor();
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let state = self.cursor();
        let i = state.selected().map(|i| (i + 20).min(len - 1)).unwrap_or(0);
        state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.list_len() == 0 {
            return;
        }
        let state = self.cursor();
        let i = state.selected().map(|i| i.saturating_sub(20)).unwrap_or(0);
        state.select(Some(i));
    }

    /// Handle one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input_mode {
            InputMode::Normal => return self.handle_normal_key(key),
            InputMode::Search => match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => {
                    let mut query = self.state.filter.query.clone();
                    query.pop();
                    self.dispatch(Action::SetQuery(query));
                }
                KeyCode::Char(c) => {
                    let query = format!("{}{}", self.state.filter.query, c);
                    self.dispatch(Action::SetQuery(query));
                }
                _ => {}
            },
            InputMode::VenueName | InputMode::VenueAddress => self.handle_venue_input(key),
        }
        false
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_page();
                } else {
                    self.next_page();
                }
            }
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Char('/') => {
                self.current_page = Page::Items;
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('c') => self.cycle_category(true),
            KeyCode::Char('C') => self.cycle_category(false),
            KeyCode::Char('[') => self.dispatch(Action::NudgePrice { handle: Handle::Low, steps: -1 }),
            KeyCode::Char(']') => self.dispatch(Action::NudgePrice { handle: Handle::Low, steps: 1 }),
            KeyCode::Char('{') => self.dispatch(Action::NudgePrice { handle: Handle::High, steps: -1 }),
            KeyCode::Char('}') => self.dispatch(Action::NudgePrice { handle: Handle::High, steps: 1 }),
            KeyCode::Char('a') if self.current_page == Page::Venues => {
                self.venue_name.clear();
                self.venue_address.clear();
                self.input_mode = InputMode::VenueName;
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.current_page {
                Page::Venues => {
                    if let Some(id) = self.selected_venue_id() {
                        self.dispatch(Action::ToggleVenue(id));
                    }
                }
                _ => {
                    if let Some(id) = self.selected_item_id() {
                        self.dispatch(Action::ToggleCompare(id));
                    }
                }
            },
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => {
                if self.list_len() > 0 {
                    self.cursor().select(Some(0));
                }
            }
            KeyCode::End => {
                let len = self.list_len();
                if len > 0 {
                    self.cursor().select(Some(len - 1));
                }
            }
            _ => {}
        }
        false
    }

    fn handle_venue_input(&mut self, key: KeyEvent) {
        let field = if self.input_mode == InputMode::VenueName {
            &mut self.venue_name
        } else {
            &mut self.venue_address
        };

        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) => field.push(c),
            KeyCode::Tab | KeyCode::BackTab => {
                self.input_mode = if self.input_mode == InputMode::VenueName {
                    InputMode::VenueAddress
                } else {
                    InputMode::VenueName
                };
            }
            KeyCode::Enter if self.input_mode == InputMode::VenueName => {
                self.input_mode = InputMode::VenueAddress;
            }
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.venue_name);
                let address = std::mem::take(&mut self.venue_address);
                let before = self.state.venues.len();
                self.dispatch(Action::AddVenue { name, address });
                if self.state.venues.len() > before {
                    self.venues_state.select(Some(self.state.venues.len() - 1));
                }
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal UI failed");
        return Err(err.into());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Length(5), // Filters
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_filters(f, chunks[1], app);

    match app.current_page {
        Page::Items => render_items_page(f, chunks[2], app),
        Page::Chart => render_chart(f, chunks[2], app),
        Page::Compare => render_compare(f, chunks[2], app),
        Page::Venues => render_venues(f, chunks[2], app),
    }

    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let view = app.state.view();

    let pages = [Page::Items, Page::Chart, Page::Compare, Page::Venues];

    let mut tab_spans = vec![Span::styled(
        " MenuCompare ",
        Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
    )];
    tab_spans.push(Span::raw("  "));
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Items: {}/{}", view.filtered.len(), app.state.catalog.len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("📌 {}", app.state.compare.len()),
        Style::default().fg(Color::Magenta),
    ));

    let header = Paragraph::new(Line::from(tab_spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    let filter = &app.state.filter;
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let query_style = if app.input_mode == InputMode::Search {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    };
    let query_text = if filter.query.is_empty() && app.input_mode != InputMode::Search {
        "Search items, venues, categories".to_string()
    } else {
        filter.query.clone()
    };

    let content = vec![
        Line::from(vec![
            Span::styled("  Search: ", label),
            Span::styled(query_text, query_style),
        ]),
        Line::from(vec![
            Span::styled("  Category: ", label),
            Span::styled(filter.category.label().to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("  Price range: ", label),
            Span::raw(format!(
                "{} – {}",
                currency(filter.price_range.low()),
                currency(filter.price_range.high())
            )),
            Span::styled(
                format!(
                    "   (slider {} – {}, step {})",
                    currency(app.state.bounds.min),
                    currency(app.state.bounds.max),
                    app.state.bounds.step
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Filters "),
    );
    f.render_widget(block, area);
}

fn render_stats_strip(f: &mut Frame, area: Rect, view: &View) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let stats = [
        ("MINIMUM", view.stats.min),
        ("MAXIMUM", view.stats.max),
        ("AVERAGE", view.stats.avg),
        ("MEDIAN", view.stats.median),
    ];

    for (cell, (label, value)) in cells.iter().zip(stats) {
        let card = Paragraph::new(Line::from(Span::styled(
            currency(value),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", label)),
        );
        f.render_widget(card, *cell);
    }
}

fn item_rows<'a>(items: &[&'a MenuItem], app: &App) -> Vec<Row<'a>> {
    items
        .iter()
        .map(|item| {
            let pinned = app.state.compare.contains(&item.id);
            let pin = if pinned { "📌" } else { "  " };

            Row::new(vec![
                Cell::from(pin),
                Cell::from(truncate(&item.name, 30)),
                Cell::from(truncate(&item.venue_name, 24)),
                Cell::from(format!("[{}]", truncate(&item.category, 16))).style(Style::default().fg(Color::Cyan)),
                Cell::from(Line::from(currency(item.price)).alignment(Alignment::Right))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ])
            .height(1)
        })
        .collect()
}

fn item_table<'a>(rows: Vec<Row<'a>>, title: String) -> Table<'a> {
    let header_cells = ["", "Item", "Venue", "Category", "Price"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });

    let header = Row::new(header_cells).style(Style::default().bg(Color::DarkGray)).height(1);

    Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(32),
            Constraint::Length(26),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ")
}

fn render_items_page(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let view = app.state.view();
    render_stats_strip(f, chunks[0], &view);

    let rows = item_rows(&view.filtered, app);
    let table = item_table(
        rows,
        format!(" Items ({}) - {} ", view.filtered.len(), view.caption()),
    );

    f.render_stateful_widget(table, chunks[1], &mut app.items_state);
}

fn render_compare(f: &mut Frame, area: Rect, app: &App) {
    let view = app.state.view();
    let compared_stats = menu_compare::compute_stats(view.compared.iter().copied());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled("  Pinned & visible: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(if app.state.compare.is_empty() {
            "nothing pinned (Space on the Items page)".to_string()
        } else {
            format!("{} of {} pinned", view.compared.len(), app.state.compare.len())
        }),
        Span::raw("   "),
        Span::styled(
            format!(
                "min {}  max {}  avg {}  median {}",
                currency(compared_stats.min),
                currency(compared_stats.max),
                currency(compared_stats.avg),
                currency(compared_stats.median)
            ),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Magenta)));
    f.render_widget(summary, chunks[0]);

    let rows = item_rows(&view.compared, app);
    let table = item_table(rows, format!(" Compare - {} ", table_caption(view.compared.len())));
    f.render_widget(table, chunks[1]);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let view = app.state.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(view.by_category.len() as u16 + 3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Average Price by Category ");

    if view.by_category.is_empty() {
        let empty = Paragraph::new("  Empty until items are added.")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .block(block);
        f.render_widget(empty, chunks[0]);
        return;
    }

    // Bars carry cents so sub-dollar differences stay visible
    let bars: Vec<Bar> = view
        .by_category
        .iter()
        .map(|agg| {
            Bar::default()
                .value((agg.avg * 100.0).round() as u64)
                .text_value(currency(agg.avg))
                .label(Line::from(truncate(&agg.category, 12)))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, chunks[0]);

    let header = Row::new(
        ["Category", "Items", "Avg Price", "Median"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().bg(Color::DarkGray));

    let rows = view.by_category.iter().map(|agg| {
        Row::new(vec![
            Cell::from(agg.category.clone()),
            Cell::from(agg.count.to_string()),
            Cell::from(currency(agg.avg)),
            Cell::from(currency(agg.median)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Summary by Category "));
    f.render_widget(table, chunks[1]);
}

fn render_venues(f: &mut Frame, area: Rect, app: &mut App) {
    let adding = matches!(app.input_mode, InputMode::VenueName | InputMode::VenueAddress);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(if adding { 4 } else { 0 }), Constraint::Min(0)])
        .split(area);

    if adding {
        let field_style = |mode: InputMode| {
            if app.input_mode == mode {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            }
        };
        let form = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("  Café name: ", Style::default().fg(Color::Cyan)),
                Span::styled(app.venue_name.clone(), field_style(InputMode::VenueName)),
            ]),
            Line::from(vec![
                Span::styled("  Address:   ", Style::default().fg(Color::Cyan)),
                Span::styled(app.venue_address.clone(), field_style(InputMode::VenueAddress)),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Add venue (Enter to confirm, Esc to cancel) "),
        );
        f.render_widget(form, chunks[0]);
    }

    let header = Row::new(
        ["", "Venue", "Address"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().bg(Color::DarkGray));

    let rows: Vec<Row> = app
        .state
        .venues
        .venues()
        .iter()
        .map(|venue| {
            let active = app.state.venues.is_active(&venue.id);
            let (marker, style) = if active {
                ("●", Style::default().fg(Color::Green))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            Row::new(vec![
                Cell::from(marker).style(style),
                Cell::from(venue.name.clone()).style(style),
                Cell::from(venue.address.clone()),
            ])
        })
        .collect();

    let title = if app.state.venues.active_ids().is_empty() {
        " Venues - none selected, showing all ".to_string()
    } else {
        format!(
            " Venues - {} of {} active ",
            app.state.venues.active_ids().len(),
            app.state.venues.len()
        )
    };

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Length(30), Constraint::Min(20)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[1], &mut app.venues_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);

    let hints: Vec<(&str, &str)> = match app.input_mode {
        InputMode::Search => vec![("type", " Search | "), ("Enter/Esc", " Done")],
        InputMode::VenueName | InputMode::VenueAddress => {
            vec![("Tab", " Switch field | "), ("Enter", " Next/Add | "), ("Esc", " Cancel")]
        }
        InputMode::Normal => {
            let toggle = if app.current_page == Page::Venues {
                " Toggle venue | "
            } else {
                " Pin | "
            };
            let mut hints = vec![
                ("/", " Search | "),
                ("c/C", " Category | "),
                ("[ ]", " Low | "),
                ("{ }", " High | "),
                ("Space", toggle),
            ];
            if app.current_page == Page::Venues {
                hints.push(("a", " Add venue | "));
            }
            hints.push(("Tab", " Page | "));
            hints
        }
    };

    let mut status_spans = Vec::new();
    for (k, text) in hints {
        status_spans.push(Span::styled(k.to_string(), key));
        status_spans.push(Span::raw(text.to_string()));
    }
    if app.input_mode == InputMode::Normal {
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
