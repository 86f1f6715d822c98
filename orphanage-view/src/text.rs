//! Plain-text rendering for terminals

use crate::page::{LOADING_TEXT, Page};

pub fn render_text(page: &Page) -> String {
    let detail = match page {
        Page::Loading => return LOADING_TEXT.to_string(),
        Page::Detail(detail) => detail,
    };

    let mut lines = Vec::new();
    lines.push(detail.name.clone());
    lines.push("=".repeat(detail.name.chars().count().max(1)));

    if let Some(image) = &detail.primary_image {
        lines.push(format!("Photo: {}", image.src));
    }
    if !detail.thumbnails.is_empty() {
        let strip: Vec<String> = detail
            .thumbnails
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.index + 1)
                } else {
                    format!(" {} ", t.index + 1)
                }
            })
            .collect();
        lines.push(format!("Photos: {}", strip.join("")));
    }

    lines.push(String::new());
    lines.push(detail.about.clone());
    lines.push(String::new());
    lines.push(format!(
        "Location: {} (zoom {})",
        detail.map.center.to_query_value(),
        detail.map.zoom
    ));
    lines.push(format!("{}: {}", detail.routes_link.text, detail.routes_link.href));
    lines.push(String::new());
    lines.push("Instructions".to_string());
    lines.push(detail.instructions.clone());
    lines.push(String::new());
    lines.push(format!(
        "{}: {}",
        detail.opening_hours.label, detail.opening_hours.hours
    ));
    lines.push(detail.weekend.lines().join(" "));

    lines.join("\n")
}
