#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use plume_protocol::KernelOp;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::unbounded_channel;

fn console(config: ShellConfig) -> (ConsoleWidget, UnboundedReceiver<AppEvent>) {
    let (tx, rx) = unbounded_channel();
    (ConsoleWidget::new(config, AppEventSender::new(tx)), rx)
}

fn bound_console() -> (
    ConsoleWidget,
    plume_kernel::KernelReceivers,
    UnboundedReceiver<AppEvent>,
) {
    let (mut widget, app_rx) = console(ShellConfig::default());
    let (client, receivers) = KernelClient::channel();
    widget.set_kernel_client(client);
    (widget, receivers, app_rx)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn drain_ops(receivers: &mut plume_kernel::KernelReceivers) -> Vec<KernelOp> {
    let mut ops = Vec::new();
    while let Ok(op) = receivers.ops.try_recv() {
        ops.push(op);
    }
    ops
}

#[test]
fn clear_console_sends_clear_directive() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.clear_console();
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::execute(CLEAR_COMMAND)]
    );
}

#[test]
fn silent_execute_does_not_advance_prompt() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.silent_execute("import os");
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::silent_execute("import os")]
    );
}

#[test]
fn write_to_stdin_forwards_raw_line() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.write_to_stdin("some input");
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::Input {
            line: "some input".to_string()
        }]
    );
}

#[test]
fn declined_reset_sends_nothing() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.reset_namespace();
    assert!(widget.handle_key_event(press(KeyCode::Esc)));
    assert_eq!(drain_ops(&mut receivers), vec![]);
}

#[test]
fn accepted_reset_sends_exactly_one_directive() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.reset_namespace();
    assert!(widget.handle_key_event(press(KeyCode::Char('y'))));
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::execute(RESET_COMMAND)]
    );
    // The prompt is gone; a second confirm key must not re-fire.
    widget.handle_key_event(press(KeyCode::Char('y')));
    assert_eq!(drain_ops(&mut receivers), vec![]);
}

#[test]
fn reset_shortcut_opens_prompt_once() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    assert!(widget.handle_key_event(ctrl('r')));
    // Ctrl+R while the prompt is up is routed to the prompt, not nested.
    widget.reset_namespace();
    assert!(widget.handle_key_event(press(KeyCode::Left)));
    assert!(widget.handle_key_event(press(KeyCode::Enter)));
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::execute(RESET_COMMAND)]
    );
}

#[test]
fn clear_shortcut_sends_clear() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    assert!(widget.handle_key_event(ctrl('l')));
    assert_eq!(
        drain_ops(&mut receivers),
        vec![KernelOp::execute(CLEAR_COMMAND)]
    );
}

#[test]
fn new_client_shortcut_notifies_host() {
    let (mut widget, _receivers, mut app_rx) = bound_console();
    assert!(widget.handle_key_event(ctrl('t')));
    assert_eq!(app_rx.try_recv().unwrap(), AppEvent::NewClientRequested);
}

#[test]
fn rebinding_replaces_previous_client() {
    let (mut widget, mut first, _app_rx) = bound_console();
    let (second_client, mut second) = KernelClient::channel();
    widget.set_kernel_client(second_client);
    widget.execute("1 + 1");
    assert!(matches!(first.ops.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(drain_ops(&mut second), vec![KernelOp::execute("1 + 1")]);
}

#[test]
fn exit_request_reaches_bound_client() {
    let (mut widget, mut receivers, _app_rx) = bound_console();
    widget.request_exit();
    assert!(receivers.exit_requests.try_recv().is_ok());
}

#[test]
fn operations_without_kernel_are_noops() {
    let (mut widget, _app_rx) = console(ShellConfig::default());
    widget.clear_console();
    widget.write_to_stdin("x");
    widget.request_exit();
}

#[test]
fn disconnected_kernel_does_not_panic() {
    let (mut widget, receivers, _app_rx) = bound_console();
    drop(receivers);
    widget.clear_console();
    widget.silent_execute("x = 1");
}

#[test]
fn focus_changes_are_emitted_on_gain_and_loss() {
    let (mut widget, mut app_rx) = console(ShellConfig::default());
    widget.focus_gained();
    widget.focus_lost();
    assert_eq!(
        app_rx.try_recv().unwrap(),
        AppEvent::ConsoleFocusChanged { gained: true }
    );
    assert_eq!(
        app_rx.try_recv().unwrap(),
        AppEvent::ConsoleFocusChanged { gained: false }
    );
    assert!(!widget.has_focus());
}

#[test]
fn short_banner_is_one_line_with_versions() {
    let (mut widget, _app_rx) = console(ShellConfig {
        show_banner: false,
        ..ShellConfig::default()
    });
    widget.set_session_info(SessionInfo {
        language: "Python".to_string(),
        language_version: "3.12.1".to_string(),
        ..SessionInfo::default()
    });
    let banner = widget.banner();
    assert_eq!(banner.lines().count(), 1);
    assert!(banner.contains("Python 3.12.1"));
    assert!(banner.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_banner_reflects_kernel_capabilities() {
    let (mut widget, _app_rx) = console(ShellConfig::default());
    widget.set_session_info(SessionInfo {
        banner: "Python 3.12.1 -- kernel 7.1".to_string(),
        pylab_available: true,
        symbolic_math_available: true,
        ..SessionInfo::default()
    });
    let banner = widget.banner();
    assert!(banner.starts_with("Python 3.12.1 -- kernel 7.1"));
    assert!(banner.contains("numpy and matplotlib"));
    assert!(banner.contains("from sympy import *"));
}

#[test]
fn long_banner_omits_unavailable_or_disabled_sections() {
    let (mut widget, _app_rx) = console(ShellConfig {
        symbolic_math: false,
        ..ShellConfig::default()
    });
    widget.set_session_info(SessionInfo {
        banner: "Python".to_string(),
        pylab_available: false,
        symbolic_math_available: true,
        ..SessionInfo::default()
    });
    let banner = widget.banner();
    assert!(!banner.contains("matplotlib"), "pylab stack not available");
    assert!(!banner.contains("sympy"), "symbolic math disabled by config");
}

#[test]
fn render_is_bounded_by_area() {
    let (mut widget, _app_rx) = console(ShellConfig::default());
    widget.reset_namespace();
    let area = Rect::new(0, 0, 40, 10);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    // Smoke check: the prompt row made it into the buffer.
    let rendered = (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert!(rendered.contains(">>>"));
    assert!(rendered.contains("Reset namespace"));
}
