use crate::events::Event;
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{self, shortcuts};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub fn render_event_detail_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    icons: &IconService,
    event: &Event,
    liked: bool,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} Event Details ", icons.events_title());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::Cyan));

    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let date_line = match (event.parsed_datetime(), event.start_time_12h()) {
        (Some(dt), Some(time)) => format!("{} at {}", dt.format("%B %-d, %Y"), time),
        (Some(dt), None) => dt.format("%B %-d, %Y").to_string(),
        _ => event.date_time.clone(),
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        event.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} {}", icons.clock(), date_line),
        Style::default().fg(Color::Cyan),
    )));
    if !event.location.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", icons.location(), event.location),
            Style::default().fg(Color::Gray),
        )));
    }
    if !event.url.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", icons.link(), event.url),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
    }
    if !event.img.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", icons.link(), event.img),
            Style::default().fg(Color::Blue),
        )));
    }
    if !event.tags.is_empty() {
        let tag_text = event.tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ");
        lines.push(Line::from(Span::styled(
            format!("{} {}", icons.tag(), tag_text),
            Style::default().fg(Color::Magenta),
        )));
    }
    let heart_line = if liked {
        Span::styled(format!("{} Liked", icons.heart_liked()), Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!("{} Not liked yet", icons.heart_unliked()),
            Style::default().fg(Color::Gray),
        )
    };
    lines.push(Line::from(heart_line));
    lines.push(Line::default());
    for description_line in event.description.lines() {
        lines.push(Line::from(Span::styled(
            description_line.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let visible_lines: Vec<Line> = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        lines.iter().skip(clamped_offset).take(visible_height).cloned().collect()
    } else {
        lines
    };

    let content_paragraph = Paragraph::new(visible_lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::LIKE,
        shortcuts::SEPARATOR,
        shortcuts::RSVP,
        shortcuts::SEPARATOR,
        shortcuts::CALENDAR,
        shortcuts::SEPARATOR,
        shortcuts::FACEBOOK,
        shortcuts::SEPARATOR,
        shortcuts::SHARE_X,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]);

    f.render_widget(block, dialog_area);
    f.render_widget(content_paragraph, content_area);
    f.render_widget(instructions, instructions_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}

pub fn render_subscribe_dialog(f: &mut Frame, dialog_area: Rect, icons: &IconService, input_buffer: &str, error: Option<&str>) {
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} Subscribe to Updates ", icons.info());
    let main_block = common::create_dialog_block(&title, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Email input field (borders + content)
            Constraint::Length(1), // Validation error line
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let input_paragraph = common::create_input_paragraph(input_buffer, "Email");

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SUBSCRIBE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(input_paragraph, chunks[0]);

    if let Some(message) = error {
        let error_paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(error_paragraph, chunks[1]);
    }

    f.render_widget(instructions, chunks[2]);
}
