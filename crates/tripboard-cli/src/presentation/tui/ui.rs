use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use tripboard_types::{FilterKind, SortKind, ViewMode};

use super::app::{AppState, BoardState};
use crate::presentation::format;

pub(crate) fn draw(f: &mut Frame, board: &BoardState, app: &AppState, filter: FilterKind) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], board, filter);
    render_body(f, chunks[1], board, app);
    render_footer(f, chunks[2], app);
}

fn render_header(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    board: &BoardState,
    filter: FilterKind,
) {
    let sort_bar = match board.sort_bar {
        Some(active) => sort_bar_line(active),
        None => Line::from(Span::styled("", Style::default())),
    };

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                " TRIPBOARD ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Filter: "),
            Span::styled(filter.label(), Style::default().fg(Color::Cyan)),
            Span::raw(format!("  ({} shown)", board.entries.len())),
        ]),
        sort_bar,
    ]);
    f.render_widget(header, area);
}

fn sort_bar_line(active: SortKind) -> Line<'static> {
    let mut spans = vec![Span::raw(" Sort: ")];
    for sort in SortKind::ALL {
        if sort == active {
            spans.push(Span::styled(
                format!("[{}]", sort.label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                sort.label(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_body(f: &mut Frame, area: ratatui::layout::Rect, board: &BoardState, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(plug) = board.plug {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                plug.message(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = board
        .entries
        .iter()
        .map(|entry| match entry.mode {
            ViewMode::Card => card_line(entry),
            ViewMode::Editor => editor_line(entry, app),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn card_line(entry: &super::app::Entry) -> ListItem<'static> {
    let point = &entry.point;
    let mut spans = vec![
        Span::styled(
            format!("{:<14}", format::day_label(point)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("{:<26}", format::event_label(point))),
        Span::styled(
            format!("{:<12}", format::duration_label(point.duration())),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("{:>8}", format::price_label(point))),
        Span::styled(
            format!("  {} offers", point.offers.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if point.is_favorite {
        spans.push(Span::styled(
            "  \u{2605}",
            Style::default().fg(Color::Yellow),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn editor_line(entry: &super::app::Entry, app: &AppState) -> ListItem<'static> {
    let point = &entry.point;
    let price = app.draft_price.unwrap_or(point.base_price);
    ListItem::new(Line::from(vec![
        Span::styled(
            "\u{270e} ",
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format::event_label(point),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  price \u{20ac} {}", price)),
        Span::styled(
            "  (+/- adjust, Enter save, Esc discard)",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            " \u{2191}\u{2193} select   Enter edit   Space favorite   n new   d delete   s sort   f filter   q quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::raw(format!(" {}", app.status))),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
