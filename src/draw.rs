use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::format::{format_date, format_game_time};
use crate::state::app_state::{empty_club_message, no_strikeouts_message};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use mlb_api::{ClubReport, StrikeoutEntry, ZeroHitEntry};

static TABS: &[&str; 1] = &["Dashboard"];

const HELP_TEXT: &str =
    "Help: q=quit  r=refresh  j/k=scroll tables  f=full screen  \"=logs  Esc=back";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let drawn = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar);
        }

        match app.state.active_tab {
            MenuItem::Dashboard => draw_dashboard(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = drawn {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2]) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(0)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let team = app.team_name();
    let block = default_border(Color::White).title(format!(" ⚾ {team} - The 0-fer Club "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [subtitle, body, caption] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(format!("Tracking players without hits in the latest {team} game"))
            .style(Style::default().fg(Color::DarkGray)),
        subtitle,
    );

    if let Some(text) = app.state.report.last_updated_caption() {
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            caption,
        );
    }

    let Some(report) = app.state.report.report() else {
        let msg = app
            .state
            .report
            .fallback_message(team)
            .unwrap_or_else(|| format!("Fetching latest {team} game data..."));
        let style = if app.state.report.outcome.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        f.render_widget(Paragraph::new(msg).style(style).alignment(Alignment::Center), body);
        return;
    };

    let [info, tables] =
        Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(body);
    draw_game_info(f, info, report);

    let (club_area, ks_area) = if tables.width >= 80 {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(tables);
        (left, right)
    } else {
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(tables);
        (top, bottom)
    };

    let offset = app.state.report.scroll_offset as usize;
    draw_zero_hit_table(f, club_area, &report.zero_hit, offset, team);
    draw_strikeout_table(f, ks_area, &report.strikeouts, offset, team);
}

fn draw_game_info(f: &mut Frame, area: Rect, report: &ClubReport) {
    let block = default_border(Color::DarkGray).title(" Latest Game Info ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, middle, right] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(inner);

    let game = &report.game;
    f.render_widget(
        Paragraph::new(format!(
            "Date: {}\nTime: {}",
            format_date(game.date),
            format_game_time(game.start_time)
        )),
        left,
    );
    f.render_widget(Paragraph::new(format!("Location: {}", game.location())), middle);
    f.render_widget(Paragraph::new(format!("Result: {}", game.result_line())), right);
}

fn draw_zero_hit_table(f: &mut Frame, area: Rect, entries: &[ZeroHitEntry], offset: usize, team: &str) {
    let block = default_border(Color::Yellow).title(" The 0-fer Club ");
    if entries.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(empty_club_message(team)), inner);
        return;
    }

    let rows = entries.iter().skip(offset).map(|e| {
        Row::new(vec![
            Cell::from(e.name.clone()),
            Cell::from(format!("{:>3}", e.at_bats)),
            Cell::from(format!("{:>3}", e.strike_outs)),
        ])
    });
    let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(4), Constraint::Length(4)])
        .header(table_header(&["Player", " AB", " Ks"]))
        .block(block);
    f.render_widget(table, area);
}

fn draw_strikeout_table(f: &mut Frame, area: Rect, entries: &[StrikeoutEntry], offset: usize, team: &str) {
    let block = default_border(Color::Cyan).title(" Strikeout Leaders ");
    if entries.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(no_strikeouts_message(team)), inner);
        return;
    }

    let rows = entries.iter().skip(offset).map(|e| {
        Row::new(vec![
            Cell::from(e.name.clone()),
            Cell::from(format!("{:>3}", e.strike_outs)),
        ])
    });
    let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(4)])
        .header(table_header(&["Player", " Ks"]))
        .block(block);
    f.render_widget(table, area);
}

fn table_header<'a>(titles: &[&'a str]) -> Row<'a> {
    Row::new(titles.iter().map(|t| Cell::from(*t)))
        .style(Style::default().add_modifier(Modifier::BOLD))
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::White));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
