use plume_protocol::KernelOp;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

use crate::error::KernelError;

/// Non-owning handle to a kernel session.
///
/// All methods are fire-and-forget from the UI thread's point of view:
/// directives are queued on an unbounded channel and the backend drains them
/// on its own schedule. The only failure a caller can observe is
/// [`KernelError::Disconnected`], raised once the backend has dropped its
/// receiving end.
#[derive(Debug, Clone)]
pub struct KernelClient {
    op_tx: UnboundedSender<KernelOp>,
    exit_tx: UnboundedSender<()>,
}

/// The backend-side ends of a [`KernelClient`] pair.
#[derive(Debug)]
pub struct KernelReceivers {
    /// Directives submitted through [`KernelClient::execute`] and
    /// [`KernelClient::input`].
    pub ops: UnboundedReceiver<KernelOp>,
    /// One message per exit request raised by the console widget.
    pub exit_requests: UnboundedReceiver<()>,
}

impl KernelClient {
    /// Create a client handle together with the receiving ends the embedder
    /// wires to the kernel transport.
    pub fn channel() -> (Self, KernelReceivers) {
        let (op_tx, op_rx) = unbounded_channel();
        let (exit_tx, exit_rx) = unbounded_channel();
        (
            Self { op_tx, exit_tx },
            KernelReceivers {
                ops: op_rx,
                exit_requests: exit_rx,
            },
        )
    }

    /// Queue `code` for execution. A silent execution does not advance the
    /// visible prompt and produces no echo.
    pub fn execute(&self, code: &str, silent: bool) -> Result<(), KernelError> {
        self.submit(KernelOp::Execute {
            code: code.to_string(),
            silent,
        })
    }

    /// Forward one raw line to the kernel's stdin channel.
    pub fn input(&self, line: &str) -> Result<(), KernelError> {
        self.submit(KernelOp::Input {
            line: line.to_string(),
        })
    }

    /// Notify the client owner that the user asked the console to exit.
    pub fn notify_exit_requested(&self) -> Result<(), KernelError> {
        self.exit_tx.send(()).map_err(|_| KernelError::Disconnected)
    }

    fn submit(&self, op: KernelOp) -> Result<(), KernelError> {
        self.op_tx.send(op).map_err(|err| {
            tracing::warn!("kernel op channel closed: {err}");
            KernelError::Disconnected
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn execute_delivers_op_to_backend() {
        let (client, mut receivers) = KernelClient::channel();
        client.execute("print(1)", false).unwrap();
        assert_eq!(
            receivers.ops.try_recv().unwrap(),
            KernelOp::Execute {
                code: "print(1)".to_string(),
                silent: false,
            }
        );
    }

    #[test]
    fn exit_request_reaches_owner() {
        let (client, mut receivers) = KernelClient::channel();
        client.notify_exit_requested().unwrap();
        assert!(receivers.exit_requests.try_recv().is_ok());
    }

    #[test]
    fn dropped_backend_surfaces_disconnected() {
        let (client, receivers) = KernelClient::channel();
        drop(receivers);
        assert!(matches!(
            client.execute("1 + 1", false),
            Err(KernelError::Disconnected)
        ));
        assert!(matches!(
            client.notify_exit_requested(),
            Err(KernelError::Disconnected)
        ));
    }

    #[test]
    fn clones_feed_the_same_session() {
        let (client, mut receivers) = KernelClient::channel();
        let other = client.clone();
        client.input("42").unwrap();
        other.input("43").unwrap();
        assert_eq!(
            receivers.ops.try_recv().unwrap(),
            KernelOp::Input {
                line: "42".to_string()
            }
        );
        assert_eq!(
            receivers.ops.try_recv().unwrap(),
            KernelOp::Input {
                line: "43".to_string()
            }
        );
    }
}
