use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use tokio::sync::watch;

use crate::api::{spawn_fetch, WeatherClient, CITY_IDS};
use crate::assets;
use crate::model::WeatherModel;
use crate::state::{FetchPhase, WeatherCell};

const MISSING: &str = "--";

const TICK: Duration = Duration::from_millis(100);

pub struct App {
    client: Arc<WeatherClient>,
    cell: WeatherCell,
    model: watch::Receiver<WeatherModel>,
    phase: watch::Receiver<FetchPhase>,
    updated_at: Option<DateTime<Local>>,
}

impl App {
    pub fn new(client: Arc<WeatherClient>, cell: WeatherCell) -> Self {
        let model = cell.model();
        let phase = cell.phase();
        Self {
            client,
            cell,
            model,
            phase,
            updated_at: None,
        }
    }

    /// Kicks off a fetch for a random city; completion lands in the cell.
    fn refresh(&self) {
        let city_id = rand::rng().random_range(CITY_IDS);
        spawn_fetch(Arc::clone(&self.client), self.cell.clone(), city_id);
    }
}

pub async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        if app.phase.has_changed().unwrap_or(false)
            && matches!(*app.phase.borrow_and_update(), FetchPhase::Ready)
        {
            app.updated_at = Some(Local::now());
        }
        let model = app.model.borrow_and_update().clone();
        let phase = app.phase.borrow().clone();
        terminal.draw(|f| ui(f, &model, &phase, app.updated_at))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Enter => app.refresh(),
                    _ => {}
                }
            }
        }
    }
}

fn city_label(model: &WeatherModel) -> String {
    match &model.city {
        Some(city) => city.to_uppercase(),
        None => MISSING.to_string(),
    }
}

fn degrees(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{v}\u{00B0}"),
        None => MISSING.to_string(),
    }
}

fn low_label(model: &WeatherModel) -> String {
    format!("L:{}", degrees(model.low))
}

fn high_label(model: &WeatherModel) -> String {
    format!("H:{}", degrees(model.high))
}

fn display_headline(updated_at: Option<DateTime<Local>>) -> Paragraph<'static> {
    let updated = match updated_at {
        Some(ts) => format!(" updated {}", ts.format("%d-%m-%Y %H:%M:%S")),
        None => " no fetch yet".to_string(),
    };
    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled("citywx", Style::default().fg(Color::Blue)),
            Span::raw(" : "),
            Span::styled("city weather", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(updated),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_city(model: &WeatherModel) -> Paragraph<'static> {
    let background = match &model.city {
        Some(city) => assets::background_asset(city),
        None => assets::DEFAULT_BACKGROUND,
    };
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            city_label(model),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("backdrop "),
            Span::styled(background.to_string(), Style::default().fg(Color::Green)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" City ", Style::default().fg(Color::Yellow)))
            .title_alignment(Alignment::Left)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_conditions(model: &WeatherModel) -> Table<'static> {
    let conditions_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Conditions ",
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let icon = match model.icon.as_deref().and_then(assets::icon_asset) {
        Some(asset) => format!("{} {}", assets::icon_glyph(asset), asset),
        None => MISSING.to_string(),
    };

    let rows = vec![
        Row::new(vec![Cell::from("")]),
        Row::new(vec![
            Cell::from(" Current"),
            Cell::from(degrees(model.current)).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Low"),
            Cell::from(low_label(model)).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" High"),
            Cell::from(high_label(model)).style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Sky"),
            Cell::from(icon).style(Style::default().fg(Color::Green)),
        ]),
    ];

    Table::new(rows, [Constraint::Length(12), Constraint::Length(20)]).block(conditions_block)
}

fn display_status(phase: &FetchPhase) -> Paragraph<'static> {
    let (status, color) = match phase {
        FetchPhase::Idle => ("press r to fetch".to_string(), Color::Gray),
        FetchPhase::Pending => ("fetching...".to_string(), Color::Yellow),
        FetchPhase::Ready => ("up to date".to_string(), Color::Green),
        FetchPhase::Failed(reason) => (format!("fetch failed: {reason}"), Color::Red),
    };
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status, Style::default().fg(color)),
        Span::raw("   r/Enter refresh, q quit"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn ui(f: &mut Frame, model: &WeatherModel, phase: &FetchPhase, updated_at: Option<DateTime<Local>>) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(display_headline(updated_at), vert_layout[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vert_layout[1]);

    f.render_widget(display_city(model), chunks[0]);
    f.render_widget(display_conditions(model), chunks[1]);

    f.render_widget(display_status(phase), vert_layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn philadelphia() -> WeatherModel {
        WeatherModel {
            id: Some(2),
            city: Some("Philadelphia".to_string()),
            high: Some(72),
            low: Some(53),
            current: Some(68),
            icon: Some("cloudy".to_string()),
        }
    }

    #[test]
    fn displayed_labels_for_philadelphia() {
        let model = philadelphia();
        assert_eq!(city_label(&model), "PHILADELPHIA");
        assert_eq!(degrees(model.current), "68\u{00B0}");
        assert_eq!(low_label(&model), "L:53\u{00B0}");
        assert_eq!(high_label(&model), "H:72\u{00B0}");
    }

    #[test]
    fn missing_fields_render_placeholder() {
        let model = WeatherModel::default();
        assert_eq!(city_label(&model), MISSING);
        assert_eq!(degrees(model.current), MISSING);
        assert_eq!(low_label(&model), "L:--");
        assert_eq!(high_label(&model), "H:--");
    }
}
