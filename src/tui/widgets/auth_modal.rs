//! Sign-in / sign-up modal widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::auth::{AuthMode, Field, ModalState, OAuthProvider, Submission};
use crate::tui::theme::{current_theme, Theme};

pub const MODAL_WIDTH: u16 = 60;
pub const MASK: char = '•';

/// Hotkey shown next to each OAuth button.
fn provider_key(provider: OAuthProvider) -> &'static str {
    match provider {
        OAuthProvider::GitHub => "Ctrl+G",
        OAuthProvider::Google => "Ctrl+O",
    }
}

/// Text shown inside an input: the value, masked for secrets unless the
/// password is visible.
pub fn display_value(field: Field, value: &str, password_visible: bool) -> String {
    if field.is_secret() && !password_visible {
        std::iter::repeat(MASK).take(value.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// Build the modal body for `state` with keyboard focus on `focus`.
pub fn build_modal_lines(state: &ModalState, focus: Field, theme: &Theme) -> Vec<Line<'static>> {
    let mode = state.mode;
    let in_flight = state.submission.is_in_flight();
    let mut lines = vec![
        Line::from(Span::styled(mode.title(), theme.accent_bold_style())),
        Line::from(Span::styled(mode.subtitle(), theme.text_secondary_style())),
        Line::from(""),
    ];

    for provider in OAuthProvider::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", provider_key(provider)), theme.accent_style()),
            Span::styled(provider.label(), theme.text_style()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "──── Or continue with email ────",
        theme.text_secondary_style(),
    )));

    for &field in Field::visible(mode) {
        let focused = field == focus;
        let label_style = if focused {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = state.fields.get(field);
        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![Span::styled(marker, theme.accent_style())];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), theme.text_secondary_style()));
        } else {
            spans.push(Span::styled(
                display_value(field, value, state.password_visible),
                theme.text_style(),
            ));
        }
        if field.is_secret() {
            let hint = if state.password_visible {
                "  [Ctrl+V hide]"
            } else {
                "  [Ctrl+V show]"
            };
            spans.push(Span::styled(hint, theme.text_secondary_style()));
        }
        lines.push(Line::from(spans));
    }

    // Error row is always reserved so the modal does not jump
    let error = match &state.submission {
        Submission::Failed(message) => message.clone(),
        _ => String::new(),
    };
    lines.push(Line::from(Span::styled(error, theme.error_style())));

    let button = if in_flight {
        Line::from(Span::styled(
            "Please wait...",
            theme.text_secondary_style().add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] ", theme.accent_style()),
            Span::styled(
                mode.submit_label(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
        ])
    };
    lines.push(button);
    lines.push(Line::from(""));

    let (prompt, link) = mode.switch_prompt();
    lines.push(Line::from(vec![
        Span::styled(prompt, theme.text_secondary_style()),
        Span::styled(link, theme.accent_style()),
        Span::styled(" [Ctrl+T]", theme.text_secondary_style()),
    ]));

    match mode {
        AuthMode::SignIn => {
            lines.push(Line::from(Span::styled(
                "Forgot your password?",
                theme.accent_style(),
            )));
        }
        AuthMode::SignUp => {
            lines.push(Line::from(Span::styled(
                "By creating an account, you agree to our",
                theme.text_secondary_style(),
            )));
            lines.push(Line::from(vec![
                Span::styled("Terms of Service", theme.accent_style()),
                Span::styled(" and ", theme.text_secondary_style()),
                Span::styled("Privacy Policy", theme.accent_style()),
            ]));
        }
    }

    lines
}

/// Outer height of the modal, borders included.
pub fn modal_height(mode: AuthMode) -> u16 {
    let fields = Field::visible(mode).len() as u16;
    let footer = match mode {
        AuthMode::SignIn => 1,
        AuthMode::SignUp => 2,
    };
    // heading(3) + providers(3) + fields + error + button + blank + switch + footer + borders
    3 + 3 + fields * 2 + 1 + 1 + 1 + 1 + footer + 2
}

/// The credential modal overlay.
pub struct AuthModal<'a> {
    state: &'a ModalState,
    focus: Field,
}

impl<'a> AuthModal<'a> {
    pub fn new(state: &'a ModalState, focus: Field) -> Self {
        Self { state, focus }
    }
}

impl Widget for AuthModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = current_theme();
        Clear.render(area, buf);

        let lines = build_modal_lines(self.state, self.focus, &theme);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(" Esc to close "),
            )
            .render(area, buf);
    }
}
