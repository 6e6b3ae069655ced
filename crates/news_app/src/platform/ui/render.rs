use news_core::{AppViewModel, ArticleRowView, QuerySettings, UserMessage};

use super::constants::*;

/// Text lines for the whole article screen.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(&view.settings), String::new()];

    if view.loading {
        lines.push(LOADING_TEXT.to_string());
        return lines;
    }

    for row in &view.rows {
        lines.extend(render_row(row));
    }

    if let Some(text) = view.empty_text {
        lines.push(text.to_string());
    } else if view.message == Some(UserMessage::NoBrowser) {
        // Click-through failures are reported under a populated list too.
        lines.push(String::new());
        lines.push(UserMessage::NoBrowser.text().to_string());
    }
    lines
}

pub fn render_settings(settings: &QuerySettings) -> Vec<String> {
    vec![
        format!("order-by:  {}", settings.order_by),
        format!("page-size: {}", settings.page_size),
    ]
}

fn header(settings: &QuerySettings) -> String {
    format!(
        "Guardian technology news | order: {} | page size: {}",
        settings.order_by, settings.page_size
    )
}

fn render_row(row: &ArticleRowView) -> [String; 2] {
    let number = format!("{:>2}. ", row.index + 1);
    let indent = " ".repeat(number.chars().count());
    [
        format!("{number}{}", truncate(&row.title, TITLE_WIDTH)),
        format!("{indent}{} | {} | {}", row.section, row.author, row.date),
    ]
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}
