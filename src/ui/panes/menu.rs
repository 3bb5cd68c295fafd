//! Script menu popup

use crate::ui::menu::MenuView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Popup size as a share of the screen
const POPUP_WIDTH_PERCENT: u16 = 40;

fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Draw the menu over whatever is below it
pub fn render_menu_popup(frame: &mut Frame, area: Rect, menu: &MenuView) {
    let rows = u16::try_from(menu.items().len()).unwrap_or(u16::MAX);
    let height = rows.max(1).saturating_add(2);
    let popup = centered(area, POPUP_WIDTH_PERCENT, height.min(area.height));

    let block = Block::default()
        .title(" Scripts ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Clear, popup);

    if menu.items().is_empty() {
        let paragraph = Paragraph::new("(no other scripts)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, popup);
        return;
    }

    let items: Vec<ListItem> = menu
        .items()
        .iter()
        .map(|name| ListItem::new(name.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.menu_highlight_bg)
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(menu.selected()));
    frame.render_stateful_widget(list, popup, &mut state);
}
