//! Pricing cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::landing::content::{Plan, PLANS};
use crate::tui::theme::{current_theme, Theme};

/// Card body for `plan`, bound to hotkey `key`.
pub fn plan_lines(plan: &Plan, key: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if plan.popular {
        lines.push(Line::from(Span::styled("★ Most Popular", theme.accent_bold_style())));
    }
    lines.push(Line::from(vec![
        Span::styled(plan.price, theme.accent_bold_style()),
        Span::styled(plan.period, theme.text_secondary_style()),
    ]));
    lines.push(Line::from(Span::styled(
        plan.description,
        theme.text_secondary_style(),
    )));
    lines.push(Line::from(""));
    for feature in plan.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", theme.success_style()),
            Span::styled(*feature, theme.text_style()),
        ]));
    }
    for limitation in plan.limitations {
        lines.push(Line::from(vec![
            Span::styled("✗ ", theme.error_style()),
            Span::styled(*limitation, theme.text_secondary_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("[{}] ", key), theme.accent_style()),
        Span::styled(plan.cta, theme.accent_bold_style()),
    ]));
    lines
}

/// The three pricing tiers side by side.
pub struct PricingTable;

impl Widget for PricingTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = current_theme();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, PLANS.len() as u32); PLANS.len()])
            .split(area);

        for (i, (plan, column)) in PLANS.iter().zip(columns.iter()).enumerate() {
            let border = if plan.popular {
                theme.accent_style()
            } else {
                theme.text_secondary_style()
            };
            Paragraph::new(plan_lines(plan, i + 1, &theme))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(format!(" {} ", plan.name)),
                )
                .render(*column, buf);
        }
    }
}
