use plume_protocol::KernelEvent;

/// Events emitted by the widgets for the host application's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Ask the host to schedule a repaint.
    RequestRedraw,

    /// An asynchronous notification arrived from the kernel backend.
    Kernel(KernelEvent),

    /// The console gained or lost input focus. The host uses this to track
    /// which console is the "active" one.
    ConsoleFocusChanged { gained: bool },

    /// The user asked for a fresh kernel client (Ctrl+T).
    NewClientRequested,

    /// Click-to-jump on the overview strip: scroll the editor so its
    /// scrollbar value becomes `value`. Clamping to the scrollbar's actual
    /// range is the editor's job.
    ScrollRequest { value: f64 },

    /// Mouse wheel over the overview strip, forwarded to the editor.
    ScrollWheel { up: bool },
}
