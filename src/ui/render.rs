//! Ratatui rendering of the newsletter board.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::model::NewsletterStatus;
use crate::ui::app::App;
use crate::ui::layout::{board_layout, layout_regions};
use crate::ui::theme;
use crate::ui::toast::Toast;

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);
    draw_board(frame, app, body);
    draw_footer(frame, app, footer);
    draw_toasts(frame, app, body);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let status_color = match app.status() {
        NewsletterStatus::Draft => theme::STATUS_WARN,
        NewsletterStatus::Sent => theme::STATUS_OK,
        NewsletterStatus::Failed => theme::STATUS_ERROR,
    };

    let mut spans = vec![
        Span::styled(
            " newsdesk ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(theme::DIM_TEXT)),
        Span::styled(
            app.newsletter_id().to_string(),
            Style::default().fg(theme::HEADER_TEXT),
        ),
        Span::raw(" "),
        Span::styled(
            app.status().label(),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if !app.summary().is_empty() {
        spans.push(Span::styled(
            format!("  {}", truncate(app.summary(), area.width.saturating_sub(30) as usize)),
            Style::default().fg(theme::DIM_TEXT),
        ));
    }

    let block = Block::bordered().border_style(Style::default().fg(theme::GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect) {
    let categories = app.board().categories();
    let layout = board_layout(area, categories);
    let active_id = app.board().drag().active_id();
    let cursor = app.cursor();

    for (column_index, (column, category)) in layout.columns.iter().zip(categories).enumerate() {
        let border_color = if column_index == cursor.column {
            theme::ACCENT
        } else {
            theme::GLOBAL_BORDER
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ({}) ", category.name, category.articles.len()));
        frame.render_widget(block, column.rect);

        if category.articles.is_empty() {
            let hint_rect = Rect {
                x: column.rect.x + 1,
                y: column.rect.y + 1,
                width: column.rect.width.saturating_sub(2),
                height: 1,
            };
            if hint_rect.width > 0 && column.rect.height > 2 {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "(empty)",
                        Style::default().fg(theme::DIM_TEXT),
                    )),
                    hint_rect,
                );
            }
            continue;
        }

        for (row_index, ((row_rect, article_id), article)) in
            column.rows.iter().zip(&category.articles).enumerate()
        {
            let selected =
                column_index == cursor.column && cursor.row == Some(row_index);
            let is_active = active_id == Some(article_id.as_str());

            let mut style = Style::default().fg(theme::HEADER_TEXT);
            if is_active {
                style = style.bg(theme::DRAG_HIGHLIGHT).add_modifier(Modifier::ITALIC);
            } else if selected {
                style = style.bg(theme::ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }

            let marker = if selected { "▸ " } else { "  " };
            let text = format!(
                "{marker}{}",
                truncate(&article.title, row_rect.width.saturating_sub(2) as usize)
            );
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)),
                *row_rect,
            );
        }

        // Articles past the column height are laid out but not drawn; say so.
        let hidden = category.articles.len().saturating_sub(column.rows.len());
        if hidden > 0 && column.rect.height > 2 {
            let more_rect = Rect {
                x: column.rect.x + 1,
                y: column.rect.y + column.rect.height - 2,
                width: column.rect.width.saturating_sub(2),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("… {hidden} more"),
                    Style::default().fg(theme::DIM_TEXT),
                )),
                more_rect,
            );
        }
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if let Some(article) = app.board().active_article() {
        spans.push(Span::styled(
            format!(" Moving: {} ", truncate(&article.title, 40)),
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            "· arrows target · space drop · esc cancel",
            Style::default().fg(theme::DIM_TEXT),
        ));
    } else {
        spans.push(Span::styled(
            " arrows move · space grab · x remove · q quit",
            Style::default().fg(theme::DIM_TEXT),
        ));
    }

    let log = app.sync_log();
    if log.pending_count() > 0 {
        spans.push(Span::styled(
            format!("  ⟳ {} saving", log.pending_count()),
            Style::default().fg(theme::STATUS_WARN),
        ));
    }
    if log.is_dirty() {
        spans.push(Span::styled(
            format!(
                "  ⚠ {} update(s) failed — changes may not be saved",
                log.failed_count()
            ),
            Style::default()
                .fg(theme::STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::bordered().border_style(Style::default().fg(theme::GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_toasts(frame: &mut Frame, app: &App, body: Rect) {
    let toasts = app.toasts().visible();
    if toasts.is_empty() {
        return;
    }

    let width = 44.min(body.width.saturating_sub(2));
    if width < 10 {
        return;
    }

    for (i, toast) in toasts.iter().enumerate() {
        let y = body.y + (i as u16) * 3;
        if y + 3 > body.y + body.height {
            break;
        }
        let rect = Rect {
            x: body.x + body.width - width - 1,
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(toast_widget(toast), rect);
    }
}

fn toast_widget(toast: &Toast) -> Paragraph<'_> {
    let color = toast.kind.color();
    Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", toast.kind.icon()), Style::default().fg(color)),
        Span::raw(toast.message.clone()),
    ]))
    .block(Block::bordered().border_style(Style::default().fg(color)))
}

fn truncate(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
