use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use echo_core::{CardPosition, LogItem, Mode, PillGroup, RequestStatus, Sender, StarterKind};
use crate::app::{App, ChatFocus, InputMode, Screen};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Picker => render_picker_screen(app, frame, body_area),
        Screen::Chat => render_chat_screen(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let selection = app.widget.selection();
    let status = app
        .status_message
        .as_ref()
        .map(|m| format!(" {} ", m))
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled(" Echo ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("[{} / {}]", selection.tone, selection.scenario),
            Style::default().fg(Color::White),
        ),
        Span::raw(" "),
        Span::styled(
            format!("via {}", app.backend.display_name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(status, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match (app.screen, app.input_mode) {
        (Screen::Picker, _) => " PICK ",
        (Screen::Chat, InputMode::Normal) => " CHAT ",
        (Screen::Chat, InputMode::Editing) => " TYPE ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(format!(" {} ", key), key_style),
            Span::styled(format!(" {} ", label), label_style),
        ]
    };

    let rewrite_hints = Mode::rewrites().into_iter().enumerate().flat_map(|(i, mode)| {
        [
            Span::styled(format!(" {} ", i + 1), key_style),
            Span::styled(format!(" {} ", mode.display_name().to_lowercase()), label_style),
        ]
    });

    let hints: Vec<Span> = match (app.screen, app.input_mode) {
        (Screen::Picker, _) => [
            hint("←/→", "browse"),
            hint("Enter", "practice"),
            hint("Esc", "chat"),
            hint("q", "quit"),
        ]
        .into_iter()
        .flatten()
        .collect(),
        (Screen::Chat, InputMode::Normal) => [hint("i", "type"), hint("s", "send")]
            .into_iter()
            .flatten()
            .chain(rewrite_hints)
            .chain(
                [
                    hint("Tab", "row"),
                    hint("Enter", "pick"),
                    hint("o", if app.widget.settings().is_expanded() { "hide settings" } else { "settings" }),
                    hint("p", "scenarios"),
                    hint("q", "quit"),
                ]
                .into_iter()
                .flatten(),
            )
            .collect(),
        (Screen::Chat, InputMode::Editing) => [
            hint("Enter", "send"),
            hint("Esc", "stop typing"),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_picker_screen(app: &App, frame: &mut Frame, area: Rect) {
    let [_, deck_area, nav_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [prev_area, active_area, next_area] = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(2, 4),
        Constraint::Ratio(1, 4),
    ])
    .areas(deck_area);

    let carousel = &app.carousel;
    for (index, card) in carousel.cards().iter().enumerate() {
        let (slot, border, body) = match carousel.position(index) {
            CardPosition::Active => (active_area, Color::Cyan, Color::White),
            CardPosition::Previous => (prev_area, Color::DarkGray, Color::DarkGray),
            CardPosition::Next => (next_area, Color::DarkGray, Color::DarkGray),
            CardPosition::Hidden => continue,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {}/{} ", index + 1, carousel.len()));

        let text = Text::from(vec![
            Line::from(Span::styled(card.title.clone(), Style::default().fg(body).bold())),
            Line::default(),
            Line::from(Span::styled(card.blurb.clone(), Style::default().fg(body))),
        ]);

        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, slot);
    }

    let enabled = Style::default().fg(Color::Cyan).bold();
    let disabled = Style::default().fg(Color::DarkGray);
    let nav = Line::from(vec![
        Span::styled("◀ prev", if carousel.can_previous() { enabled } else { disabled }),
        Span::raw("    "),
        Span::styled("Practice", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw("    "),
        Span::styled("next ▶", if carousel.can_next() { enabled } else { disabled }),
    ])
    .centered();
    frame.render_widget(Paragraph::new(nav), nav_area);
}

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let settings_height = if app.widget.settings().is_expanded() { 4 } else { 0 };

    let [settings_area, transcript_area, starters_area, input_area] = Layout::vertical([
        Constraint::Length(settings_height),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    if settings_height > 0 {
        render_settings(app, frame, settings_area);
    }
    render_transcript(app, frame, transcript_area);
    render_starters(app, frame, starters_area);
    render_input(app, frame, input_area);
}

fn pill_spans(group: &PillGroup, cursor: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!(" {:<9}", group.name()),
        Style::default().fg(Color::DarkGray),
    )];

    for (i, pill) in group.pills().iter().enumerate() {
        let mut style = if group.is_active(i) {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().fg(Color::White)
        };
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", pill.label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

fn render_settings(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Settings ");

    let tone_cursor = (app.focus == ChatFocus::Tone).then_some(app.tone_cursor);
    let scenario_cursor = (app.focus == ChatFocus::Scenario).then_some(app.scenario_cursor);

    let text = Text::from(vec![
        Line::from(pill_spans(app.widget.tones(), tone_cursor)),
        Line::from(pill_spans(app.widget.scenarios(), scenario_cursor)),
    ]);

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_transcript(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Conversation ");

    // Store inner size for scroll calculations
    let inner = block.inner(area);
    app.chat_height = inner.height;
    app.chat_width = inner.width;

    let mut lines: Vec<Line> = Vec::new();
    let items = app.widget.transcript().items();
    let latest_chips = items.iter().rposition(|i| matches!(i, LogItem::Options(_)));

    for (index, item) in items.iter().enumerate() {
        match item {
            LogItem::Message(entry) => {
                let (name, color) = match entry.sender {
                    Sender::User => ("You:", Color::Green),
                    Sender::Bot => ("Echo:", Color::Cyan),
                };
                lines.push(Line::from(Span::styled(name, Style::default().fg(color).bold())));
                for line in entry.text.lines() {
                    lines.push(Line::from(line.to_string()));
                }
                if entry.text.is_empty() {
                    lines.push(Line::default());
                }
            }
            LogItem::Options(group) => {
                let live = Some(index) == latest_chips;
                lines.push(Line::from(Span::styled(
                    group.label.clone(),
                    Style::default().fg(Color::DarkGray).italic(),
                )));
                for (i, option) in group.options.iter().enumerate() {
                    let selected = live && app.focus == ChatFocus::Options && i == app.option_cursor;
                    let style = match (live, selected) {
                        (_, true) => Style::default().bg(Color::Blue).fg(Color::White),
                        (true, false) => Style::default().fg(Color::Yellow),
                        (false, false) => Style::default().fg(Color::DarkGray),
                    };
                    lines.push(Line::from(Span::styled(format!(" › {}", option), style)));
                }
            }
        }
        lines.push(Line::default());
    }

    if let RequestStatus::Sending { mode } = app.widget.status() {
        let dots = ".".repeat(app.animation_frame as usize + 1);
        lines.push(Line::from(Span::styled("Echo:", Style::default().fg(Color::Cyan).bold())));
        lines.push(Line::from(Span::styled(
            format!("{} {}", if mode.is_rewrite() { "Rewriting" } else { "Thinking" }, dots),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Paste a message you received, or pick a starter below.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_starters(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == ChatFocus::Starters && app.input_mode == InputMode::Normal;
    let mut spans = vec![Span::styled(" Start: ", Style::default().fg(Color::DarkGray))];

    for (i, kind) in StarterKind::all().iter().enumerate() {
        let style = if focused && i == app.starter_cursor {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", kind.display_name()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let draft = app.widget.draft();
    let editing = app.input_mode == InputMode::Editing;

    let (border, title) = if !draft.is_enabled() {
        (Color::DarkGray, " Message (waiting for reply) ")
    } else if editing {
        (Color::Yellow, " Message ")
    } else {
        (Color::DarkGray, " Message (i to type) ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);

    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor = draft.cursor();
    // Keep the cursor inside the box by scrolling long drafts horizontally
    let offset = cursor.saturating_sub(inner_width.saturating_sub(1));
    let visible: String = draft.text().chars().skip(offset).take(inner_width).collect();

    let style = if draft.is_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(visible).style(style).block(block), area);

    if editing && draft.is_enabled() {
        frame.set_cursor_position((area.x + 1 + (cursor - offset) as u16, area.y + 1));
    }
}
