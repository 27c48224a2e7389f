use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kalkulator_kas::{format_currency, format_row_total, DisplayConfig, Ledger};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::info;

pub struct App {
    pub ledger: Ledger,
    pub config: DisplayConfig,
    pub state: TableState,
}

impl App {
    pub fn new(config: DisplayConfig) -> Self {
        let mut state = TableState::default();
        state.select(Some(0));

        Self {
            ledger: Ledger::new(),
            config,
            state,
        }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn next(&mut self) {
        let len = self.ledger.len();
        let i = match self.state.selected() {
            Some(i) if i < len - 1 => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.ledger.len();
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Append a typed character to the selected quantity, like editing the input box
    pub fn type_char(&mut self, c: char) {
        let index = self.selected();
        let mut text = self.quantity_text(index);
        text.push(c);
        self.ledger.enter_text(index, &text);
    }

    pub fn backspace(&mut self) {
        let index = self.selected();
        let mut text = self.quantity_text(index);
        text.pop();
        self.ledger.enter_text(index, &text);
    }

    fn quantity_text(&self, index: usize) -> String {
        self.ledger.quantity(index).unwrap_or(0).to_string()
    }

    /// Apply one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let index = self.selected();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => self.state.select(Some(0)),
            KeyCode::End => self.state.select(Some(self.ledger.len() - 1)),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => self.ledger.increment(index),
            KeyCode::Char('-') | KeyCode::Left => self.ledger.decrement(index),
            KeyCode::Char('r') => self.ledger.reset(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_char(c),
            KeyCode::Backspace | KeyCode::Delete => self.backspace(),
            _ => {}
        }
        false
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    info!(grand_total = app.ledger.totals().grand_total, "session closed");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + subtitle
            Constraint::Min(0),    // Denomination table
            Constraint::Length(3), // Grand total
            Constraint::Length(4), // Hint + keys
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    render_grand_total(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.config.title.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.config.subtitle.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let config = &app.config;
    let header_cells = [
        format!("{:<16}", config.denomination_header),
        format!("{:^8}", config.decrement_header),
        format!("{:>8}", config.quantity_header),
        format!("{:^8}", config.increment_header),
        format!("{:>20}", config.total_header),
    ]
    .into_iter()
    .map(|h| {
        Cell::from(h).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let totals = app.ledger.totals();
    let rows = app
        .ledger
        .rows()
        .iter()
        .zip(totals.row_totals)
        .map(|(row, total)| {
            let total_style = if total > 0 {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            Row::new(vec![
                Cell::from(format!("{:<16}", format_currency(row.denomination()))),
                Cell::from(format!("{:^8}", "[-]")).style(Style::default().fg(Color::Red)),
                Cell::from(format!("{:>8}", row.quantity())).style(Style::default().fg(Color::Cyan)),
                Cell::from(format!("{:^8}", "[+]")).style(Style::default().fg(Color::Green)),
                Cell::from(format!("{:>20}", format_row_total(total))).style(total_style),
            ])
            .height(1)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_grand_total(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.ledger.totals();

    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", app.config.grand_total_label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_currency(totals.grand_total),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} lembar)", totals.piece_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let total = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    f.render_widget(total, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let keys = Line::from(vec![
        Span::styled("+/→", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} | ", app.config.increment_header)),
        Span::styled("-/←", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} | ", app.config.decrement_header)),
        Span::styled("0-9/⌫", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} | ", app.config.quantity_header)),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav | "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} | ", app.config.reset_label)),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);

    let hint = Line::from(Span::styled(
        app.config.hint.as_str(),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ));

    let status_bar = Paragraph::new(vec![keys, hint])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status_bar, area);
}
