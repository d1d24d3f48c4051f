use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

/// Outcome of a [`ConfirmationPrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Accepted,
    Declined,
}

/// Modal yes/no prompt rendered over the console.
///
/// "No" is preselected so that a stray Enter never performs the guarded
/// action. The prompt is complete once a decision has been made; the owner
/// reads it with [`ConfirmationPrompt::decision`] and drops the prompt.
pub struct ConfirmationPrompt {
    title: String,
    message: String,
    selected_yes: bool,
    decision: Option<ConfirmDecision>,
}

impl ConfirmationPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected_yes: false,
            decision: None,
        }
    }

    /// Returns true when the key changed visible state and a redraw is due.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return false;
        }
        match key_event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected_yes = !self.selected_yes;
                true
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.decision = Some(ConfirmDecision::Accepted);
                true
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.decision = Some(ConfirmDecision::Declined);
                true
            }
            KeyCode::Enter => {
                self.decision = Some(if self.selected_yes {
                    ConfirmDecision::Accepted
                } else {
                    ConfirmDecision::Declined
                });
                true
            }
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.decision.is_some()
    }

    pub fn decision(&self) -> Option<ConfirmDecision> {
        self.decision
    }

    pub fn desired_height(&self, _width: u16) -> u16 {
        // border + message + blank + buttons + hint + border
        6
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let selected = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
        let buttons = Line::from(vec![
            Span::styled(
                " Yes ",
                if self.selected_yes {
                    selected
                } else {
                    Style::default()
                },
            ),
            Span::raw("   "),
            Span::styled(
                " No ",
                if self.selected_yes {
                    Style::default()
                } else {
                    selected
                },
            ),
        ])
        .alignment(Alignment::Center);

        let lines = vec![
            Line::from(self.message.clone()),
            Line::from(""),
            buttons,
            Line::from(vec![
                Span::styled("←→", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(" select  "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(" confirm  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(" cancel"),
            ])
            .alignment(Alignment::Center),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
