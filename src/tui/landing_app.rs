//! Interactive landing page
//!
//! `LandingView` holds the page and all keyboard/focus state and is fully
//! testable against a `TestBackend`. `LandingApp` wraps it with a real
//! terminal and the fixed-rate tick loop.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use super::app::App;
use super::status_footer::{render_footer, render_status_line};
use super::theme::{current_theme, Theme};
use super::ui::{centered_box, page_layout};
use super::widgets::{modal_height, nav_line, AuthModal, SectionView, MODAL_WIDTH};
use crate::auth::{Field, ModalEvent, OAuthProvider};
use crate::landing::content::PLANS;
use crate::landing::{HostAction, LandingPage, Section};
use crate::player::Ticker;

/// Ticks per caret blink phase.
const CARET_PHASE_TICKS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Page plus keyboard state.
pub struct LandingView {
    page: LandingPage,
    section: Section,
    mode: Mode,
    field_focus: Field,
    ticks: u64,
}

impl LandingView {
    pub fn new(page: LandingPage) -> Self {
        Self {
            page,
            section: Section::default(),
            mode: Mode::default(),
            field_focus: Field::Email,
            ticks: 0,
        }
    }

    pub fn page(&self) -> &LandingPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut LandingPage {
        &mut self.page
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn field_focus(&self) -> Field {
        self.field_focus
    }

    /// One timer period: advance the hero terminal and the caret blink.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.page.tick();
    }

    pub fn caret_visible(&self) -> bool {
        (self.ticks / CARET_PHASE_TICKS) % 2 == 0
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyResult::Quit;
        }
        if self.mode == Mode::Help {
            self.mode = Mode::Normal;
            return KeyResult::Continue;
        }

        let was_open = self.page.modal().is_open();
        let result = if was_open {
            self.handle_modal_key(key);
            KeyResult::Continue
        } else {
            self.handle_page_key(key)
        };

        if !was_open && self.page.modal().is_open() {
            self.field_focus = Field::Email;
        }
        if !Field::visible(self.page.modal().mode()).contains(&self.field_focus) {
            self.field_focus = Field::Password;
        }
        result
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> KeyResult {
        self.page.clear_notice();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
                self.section = self.section.next();
            }
            KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
                self.section = self.section.prev();
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('i') => {
                self.page.dispatch(HostAction::SignIn);
            }
            KeyCode::Char('u') => {
                self.page.dispatch(HostAction::SignUp);
            }
            KeyCode::Char('g') => {
                self.page.dispatch(HostAction::GetStarted);
            }
            KeyCode::Char('w') => {
                self.section = Section::Hero;
                self.page.dispatch(HostAction::WatchDemo);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(plan) = PLANS.get(index) {
                    self.section = Section::Pricing;
                    self.page.dispatch(HostAction::SelectPlan(plan.name.to_string()));
                }
            }
            _ => {}
        }
        KeyResult::Continue
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.page.modal_event(ModalEvent::Close),
            KeyCode::Enter => self.page.modal_event(ModalEvent::Submit),
            KeyCode::Tab => self.cycle_focus(1),
            KeyCode::BackTab => self.cycle_focus(-1),
            KeyCode::Backspace => self.page.backspace(self.field_focus),
            KeyCode::Char('t') if ctrl => self.page.modal_event(ModalEvent::ToggleMode),
            KeyCode::Char('v') if ctrl => {
                self.page.modal_event(ModalEvent::TogglePasswordVisibility)
            }
            KeyCode::Char('g') if ctrl => self
                .page
                .modal_event(ModalEvent::ContinueWithProvider(OAuthProvider::GitHub)),
            KeyCode::Char('o') if ctrl => self
                .page
                .modal_event(ModalEvent::ContinueWithProvider(OAuthProvider::Google)),
            KeyCode::Char(c) if !ctrl => self.page.type_char(self.field_focus, c),
            _ => {}
        }
    }

    fn cycle_focus(&mut self, step: isize) {
        let fields = Field::visible(self.page.modal().mode());
        let current = fields
            .iter()
            .position(|f| *f == self.field_focus)
            .unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.field_focus = fields[(current + step).rem_euclid(len) as usize];
        debug!(focus = ?self.field_focus, "modal focus moved");
    }

    pub fn render(&self, frame: &mut Frame) {
        let theme = current_theme();
        let area = frame.area();
        let [nav, body, status, footer] = page_layout(area);

        let email = self.page.session().map(|s| s.email.as_str());
        frame.render_widget(Paragraph::new(nav_line(self.section, email, &theme)), nav);
        frame.render_widget(
            SectionView::new(
                self.section,
                self.page.player().frame(),
                self.caret_visible(),
            ),
            body,
        );

        let status_text = self.page.notice().map(str::to_string).unwrap_or_else(|| {
            format!(
                "{} ({}/{})",
                self.section.title(),
                self.section_number(),
                Section::ALL.len()
            )
        });
        render_status_line(frame, status, &status_text);
        render_footer(frame, footer, self.footer_keys());

        let modal = self.page.modal();
        if modal.is_open() {
            let rect = centered_box(MODAL_WIDTH, modal_height(modal.mode()), area);
            frame.render_widget(AuthModal::new(modal.state(), self.field_focus), rect);
        }
        if self.mode == Mode::Help {
            render_help_modal(frame, area);
        }
    }

    fn section_number(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self.section)
            .map_or(1, |i| i + 1)
    }

    fn footer_keys(&self) -> &'static [(&'static str, &'static str)] {
        if self.page.modal().is_open() {
            &[
                ("tab", "next field"),
                ("enter", "submit"),
                ("^t", "switch mode"),
                ("^v", "show password"),
                ("esc", "close"),
            ]
        } else {
            &[
                ("tab", "section"),
                ("i", "sign in"),
                ("g", "get started"),
                ("1-3", "plan"),
                ("?", "help"),
                ("q", "quit"),
            ]
        }
    }
}

/// Terminal-backed landing page with its tick loop.
pub struct LandingApp {
    app: App,
    view: LandingView,
    ticker: Ticker,
}

impl LandingApp {
    pub fn new(page: LandingPage) -> Result<Self> {
        let ticker = Ticker::new(page.player().timing().tick);
        Ok(Self {
            app: App::new()?,
            view: LandingView::new(page),
            ticker,
        })
    }

    /// Run until the user quits. Stops the hero animation on the way out.
    pub fn run(&mut self) -> Result<()> {
        self.view.page.mount();
        let result = self.event_loop();
        self.view.page.unmount();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut last = Instant::now();
        loop {
            let view = &self.view;
            self.app.draw(|frame| view.render(frame))?;

            if let Some(Event::Key(key)) = self.app.poll_event(self.ticker.until_next())? {
                if key.kind == KeyEventKind::Press
                    && self.view.handle_key(key) == KeyResult::Quit
                {
                    return Ok(());
                }
            }

            let now = Instant::now();
            for _ in 0..self.ticker.advance(now.duration_since(last)) {
                self.view.tick();
            }
            last = now;
            self.view.page.pump();
        }
    }
}

fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_box(56, 22, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn help_entry(key: &'static str, desc: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", key), Style::default().fg(theme.accent)),
        Span::raw(desc),
    ])
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };
    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Page"),
        help_entry("tab/shift-tab", "Next / previous section", theme),
        help_entry("i / u", "Sign in / Sign up", theme),
        help_entry("g", "Get started", theme),
        help_entry("w", "Watch demo", theme),
        help_entry("1 2 3", "Choose a pricing plan", theme),
        help_entry("q", "Quit", theme),
        Line::from(""),
        heading("Sign-in form"),
        help_entry("tab", "Next field", theme),
        help_entry("enter", "Submit", theme),
        help_entry("ctrl-t", "Switch sign in / sign up", theme),
        help_entry("ctrl-v", "Show / hide password", theme),
        help_entry("ctrl-g / ctrl-o", "Continue with GitHub / Google", theme),
        help_entry("esc", "Close", theme),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}
