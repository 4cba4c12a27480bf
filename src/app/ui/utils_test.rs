use ratatui::style::{Style, Stylize};
use ratatui_macros::span;

use super::*;

fn text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_split_to_lines() {
    let lines = split_to_lines("Hello, how are you doing on this fine day?", 16);
    let lines = lines.iter().map(text).collect::<Vec<_>>();
    assert_eq!(lines, vec!["Hello, how are ", "you doing on ", "this fine day?"]);
    assert!(split_to_lines("", 10).is_empty());
}

#[test]
fn test_split_to_lines_keeps_styles() {
    let lines = split_to_lines(vec![span!("You: ").bold(), span!("hi there")], 9);
    assert_eq!(lines.len(), 2);
    assert_eq!(text(&lines[0]), "You: hi ");

    let bold = Style::default().bold();
    let styles = lines[0].spans.iter().map(|s| s.style).collect::<Vec<_>>();
    assert_eq!(
        styles,
        vec![bold, bold, Style::default(), Style::default()]
    );
    assert_eq!(text(&lines[1]), "there");
}

#[test]
fn test_split_to_lines_long_word() {
    let lines = split_to_lines("see https://example.com/a/very/long/path ok", 10);
    let lines = lines.iter().map(text).collect::<Vec<_>>();
    assert_eq!(lines, vec!["see ", "https://example.com/a/very/long/path", " ok"]);
}

#[test]
fn test_split_to_lines_wide_chars() {
    let lines = split_to_lines("xin chào các bạn 你好世界", 8);
    assert_eq!(text(&lines[0]), "xin chào");
    assert_eq!(lines.last().map(text).as_deref(), Some("你好世界"));
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer title", 8), "a longe…");
    assert_eq!(truncate("你好世界", 5), "你好…");
}

#[test]
fn test_popup_area() {
    let area = popup_area(Rect::new(0, 0, 100, 50), 40, 6);
    assert_eq!(area, Rect::new(30, 22, 40, 6));
}

#[test]
fn test_toast_area() {
    let area = toast_area(Rect::new(0, 0, 90, 30), 30);
    assert_eq!(area, Rect::new(60, 0, 30, 30));
}
