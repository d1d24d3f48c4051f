//! Interactive console widget bound to a kernel execution backend.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use plume_kernel::KernelClient;
use plume_kernel::KernelError;
use plume_protocol::SessionInfo;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::colors;
use crate::config::ShellConfig;
use crate::confirm::ConfirmDecision;
use crate::confirm::ConfirmationPrompt;

/// Directive clearing the visible screen.
pub(crate) const CLEAR_COMMAND: &str = "%clear";
/// Directive removing every user-defined name from the namespace.
pub(crate) const RESET_COMMAND: &str = "%reset -f";

#[cfg(test)]
mod tests;

/// The widget in charge of talking to the kernel on the user's behalf.
///
/// Holds a non-owning [`KernelClient`] handle; binding a new client simply
/// replaces the previous association. All kernel traffic is one-directional
/// and fire-and-forget; results come back later through the host's event
/// queue as [`AppEvent::Kernel`] notifications.
pub struct ConsoleWidget {
    config: ShellConfig,
    app_event_tx: AppEventSender,
    kernel: Option<KernelClient>,
    session: SessionInfo,
    confirm: Option<ConfirmationPrompt>,
    has_focus: bool,
}

impl ConsoleWidget {
    pub fn new(config: ShellConfig, app_event_tx: AppEventSender) -> Self {
        Self {
            config,
            app_event_tx,
            kernel: None,
            session: SessionInfo::default(),
            confirm: None,
            has_focus: false,
        }
    }

    /// Bind this console to a kernel client, replacing any previous binding.
    /// Exit requests raised by the console are forwarded to this client from
    /// now on.
    pub fn set_kernel_client(&mut self, client: KernelClient) {
        self.kernel = Some(client);
    }

    pub fn kernel_client(&self) -> Option<&KernelClient> {
        self.kernel.as_ref()
    }

    /// Record the capabilities the kernel reported at session start; they
    /// feed the long banner.
    pub fn set_session_info(&mut self, info: SessionInfo) {
        self.session = info;
        self.app_event_tx.send(AppEvent::RequestRedraw);
    }

    pub fn clear_console(&mut self) {
        self.execute(CLEAR_COMMAND);
    }

    /// Ask for confirmation, then remove all user-defined names from the
    /// execution namespace. Declining performs no action.
    pub fn reset_namespace(&mut self) {
        if self.confirm.is_some() {
            return;
        }
        self.confirm = Some(ConfirmationPrompt::new(
            "Reset namespace",
            "All user-defined variables will be removed. \
             Are you sure you want to reset the namespace?",
        ));
        self.app_event_tx.send(AppEvent::RequestRedraw);
    }

    /// Send raw characters to the kernel through stdin, answering an input
    /// request from running code.
    pub fn write_to_stdin(&mut self, line: &str) {
        self.with_kernel("write_to_stdin", |kernel| kernel.input(line));
    }

    /// Execute code without advancing the visible prompt or echoing output.
    pub fn silent_execute(&mut self, code: &str) {
        self.with_kernel("silent_execute", |kernel| kernel.execute(code, true));
    }

    pub fn execute(&mut self, code: &str) {
        self.with_kernel("execute", |kernel| kernel.execute(code, false));
    }

    /// Forward a user exit request to the bound client's exit handler.
    pub fn request_exit(&mut self) {
        self.with_kernel("request_exit", KernelClient::notify_exit_requested);
    }

    /// The startup banner, long or short depending on configuration.
    pub fn banner(&self) -> String {
        if self.config.show_banner {
            self.long_banner()
        } else {
            self.short_banner()
        }
    }

    fn long_banner(&self) -> String {
        let mut banner = self.session.banner.clone();
        if self.config.pylab && self.config.pylab_autoload && self.session.pylab_available {
            banner.push_str("\nPopulating the interactive namespace from numpy and matplotlib");
        }
        if self.config.symbolic_math && self.session.symbolic_math_available {
            banner.push_str(
                "\nThese commands were executed:\n\
                 >>> from sympy import *\n\
                 >>> x, y, z, t = symbols('x y z t')\n\
                 >>> k, m, n = symbols('k m n', integer=True)\n\
                 >>> f, g, h = symbols('f g h', cls=Function)\n",
            );
        }
        banner
    }

    fn short_banner(&self) -> String {
        format!(
            "{} {} on {} -- plume {}",
            self.session.language,
            self.session.language_version,
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION"),
        )
    }

    pub fn focus_gained(&mut self) {
        self.has_focus = true;
        self.app_event_tx
            .send(AppEvent::ConsoleFocusChanged { gained: true });
    }

    pub fn focus_lost(&mut self) {
        self.has_focus = false;
        self.app_event_tx
            .send(AppEvent::ConsoleFocusChanged { gained: false });
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Returns true when the key was consumed.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if let Some(confirm) = &mut self.confirm {
            let handled = confirm.handle_key_event(key_event);
            if confirm.is_complete() {
                self.finish_confirm();
            }
            if handled {
                self.app_event_tx.send(AppEvent::RequestRedraw);
            }
            return handled;
        }

        if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return false;
        }
        if !key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key_event.code {
            KeyCode::Char('r') => {
                self.reset_namespace();
                true
            }
            KeyCode::Char('l') => {
                self.clear_console();
                true
            }
            KeyCode::Char('t') => {
                self.app_event_tx.send(AppEvent::NewClientRequested);
                true
            }
            _ => false,
        }
    }

    fn finish_confirm(&mut self) {
        let decision = self.confirm.take().and_then(|prompt| prompt.decision());
        if decision == Some(ConfirmDecision::Accepted) {
            self.execute(RESET_COMMAND);
        }
    }

    fn with_kernel(
        &self,
        action: &str,
        send: impl FnOnce(&KernelClient) -> Result<(), KernelError>,
    ) {
        let Some(kernel) = &self.kernel else {
            tracing::debug!("{action} with no kernel client bound");
            return;
        };
        if let Err(err) = send(kernel) {
            tracing::warn!("{action} failed: {err}");
        }
    }

    pub fn desired_height(&self, _width: u16) -> u16 {
        let banner_rows = self.banner().lines().count().max(1) as u16;
        // banner + blank + prompt row
        banner_rows + 2
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = colors::console_style(self.config.light_color);
        buf.set_style(area, style);

        let mut lines: Vec<Line> = self
            .banner()
            .lines()
            .map(|line| Line::from(line.to_string()).style(Style::default().add_modifier(Modifier::DIM)))
            .collect();
        lines.push(Line::from(""));
        let prompt_style = if self.has_focus {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled(">>> ", prompt_style)));
        Paragraph::new(lines).style(style).render(area, buf);

        if let Some(confirm) = &self.confirm {
            let height = confirm.desired_height(area.width).min(area.height);
            let modal = Rect {
                x: area.x,
                y: area.y + area.height - height,
                width: area.width,
                height,
            };
            confirm.render(modal, buf);
        }
    }
}

impl Widget for &ConsoleWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ConsoleWidget::render(self, area, buf);
    }
}
