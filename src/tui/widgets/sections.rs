//! Static page sections: navigation bar, hero copy, features, steps, footer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::pricing::PricingTable;
use super::terminal_demo::TerminalDemo;
use crate::landing::content::{self, FEATURES, HERO, PRODUCT_NAME, STEPS};
use crate::landing::Section;
use crate::player::PlaybackFrame;
use crate::tui::theme::{current_theme, Theme};

/// Navigation bar with the current section highlighted and the account
/// entry point on the right.
pub fn nav_line(current: Section, signed_in_as: Option<&str>, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("⚡ {}  ", PRODUCT_NAME),
        theme.accent_bold_style(),
    )];
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme.text_secondary_style()));
        }
        let style = if *section == current {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };
        spans.push(Span::styled(section.title(), style));
    }
    spans.push(Span::raw("   "));
    match signed_in_as {
        Some(email) => spans.push(Span::styled(email.to_string(), theme.success_style())),
        None => {
            spans.push(Span::styled("[i] ", theme.accent_style()));
            spans.push(Span::styled("Sign In", theme.text_style()));
            spans.push(Span::styled("  [g] ", theme.accent_style()));
            spans.push(Span::styled("Get Started", theme.text_style()));
        }
    }
    Line::from(spans)
}

pub fn hero_lines(theme: &Theme) -> Vec<Line<'static>> {
    let stats: Vec<String> = HERO
        .stats
        .iter()
        .map(|(value, label)| format!("{} {}", value, label))
        .collect();
    vec![
        Line::from(Span::styled(HERO.headline, theme.accent_bold_style())),
        Line::from(Span::styled(HERO.tagline, theme.text_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[g] ", theme.accent_style()),
            Span::styled(HERO.primary_cta, theme.accent_bold_style()),
            Span::styled("   [w] ", theme.accent_style()),
            Span::styled(HERO.secondary_cta, theme.text_style()),
        ]),
        Line::from(Span::styled(stats.join("  ·  "), theme.text_secondary_style())),
        Line::from(Span::styled(
            format!("Trusted by developers at {}", HERO.trusted_by.join(", ")),
            theme.text_secondary_style(),
        )),
    ]
}

pub fn feature_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Everything You Need to Build Faster",
            theme.accent_bold_style(),
        )),
        Line::from(""),
    ];
    for feature in FEATURES {
        lines.push(Line::from(Span::styled(feature.title, theme.text_style())));
        lines.push(Line::from(Span::styled(
            format!("  {}", feature.description),
            theme.text_secondary_style(),
        )));
    }
    lines
}

pub fn step_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("How {} Works", PRODUCT_NAME),
            theme.accent_bold_style(),
        )),
        Line::from(""),
    ];
    for step in STEPS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", step.number), theme.accent_bold_style()),
            Span::styled(step.title, theme.text_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", step.description),
            theme.text_secondary_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("   $ {}", step.command),
            theme.terminal_style(),
        )));
        for detail in step.details {
            lines.push(Line::from(vec![
                Span::styled("   ✓ ", theme.success_style()),
                Span::styled(*detail, theme.text_secondary_style()),
            ]));
        }
    }
    lines
}

pub fn footer_lines(copyright: String, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("⚡ {}", PRODUCT_NAME),
        theme.accent_bold_style(),
    ))];
    for (heading, links) in content::FOOTER_COLUMNS {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", heading), theme.text_style()),
            Span::styled(links.join(", "), theme.text_secondary_style()),
        ]));
    }
    lines.push(Line::from(""));
    for (name, url) in content::SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", name), theme.text_style()),
            Span::styled(*url, theme.accent_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(copyright, theme.text_secondary_style())));
    lines
}

/// Body of the page for the current section.
pub struct SectionView<'a> {
    section: Section,
    frame: PlaybackFrame<'a>,
    caret_visible: bool,
}

impl<'a> SectionView<'a> {
    pub fn new(section: Section, frame: PlaybackFrame<'a>, caret_visible: bool) -> Self {
        Self {
            section,
            frame,
            caret_visible,
        }
    }
}

fn text_block(lines: Vec<Line<'static>>, title: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(format!(" {} ", title)),
    )
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = current_theme();
        let title = self.section.title();
        match self.section {
            Section::Hero => {
                let [copy, terminal] = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(10), Constraint::Min(3)])
                    .areas(area);
                text_block(hero_lines(&theme), title, &theme).render(copy, buf);
                TerminalDemo::new(self.frame, self.caret_visible).render(terminal, buf);
            }
            Section::Features => text_block(feature_lines(&theme), title, &theme).render(area, buf),
            Section::HowItWorks => text_block(step_lines(&theme), title, &theme).render(area, buf),
            Section::Pricing => PricingTable.render(area, buf),
            Section::Footer => {
                text_block(footer_lines(content::copyright_now(), &theme), title, &theme)
                    .render(area, buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn nav_offers_sign_in_when_signed_out() {
        let line = line_text(&nav_line(Section::Hero, None, &Theme::default()));
        assert!(line.starts_with("⚡ BlitzCoder  Home · Features"));
        assert!(line.ends_with("[i] Sign In  [g] Get Started"));
    }

    #[test]
    fn nav_shows_session_email() {
        let line = line_text(&nav_line(
            Section::Pricing,
            Some("dev@blitz.io"),
            &Theme::default(),
        ));
        assert!(line.ends_with("dev@blitz.io"));
        assert!(!line.contains("Sign In"));
    }

    #[test]
    fn steps_render_commands_and_details() {
        let lines: Vec<String> = step_lines(&Theme::default()).iter().map(line_text).collect();
        assert!(lines.contains(&"   $ npm install -g blitzcoder".to_string()));
        assert!(lines.contains(&"   ✓ Zero configuration needed".to_string()));
    }

    #[test]
    fn footer_ends_with_copyright() {
        let lines = footer_lines(content::copyright(2026), &Theme::default());
        assert_eq!(
            line_text(lines.last().unwrap()),
            "© 2026 BlitzCoder. All rights reserved."
        );
    }

    #[test]
    fn feature_lines_cover_all_features() {
        let lines = feature_lines(&Theme::default());
        assert_eq!(lines.len(), 2 + FEATURES.len() * 2);
    }
}
