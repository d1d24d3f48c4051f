use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KernelError {
    /// The backend dropped its end of the directive channel; the session is
    /// gone and the handle should be replaced by binding a fresh client.
    #[error("kernel backend disconnected")]
    Disconnected,
}
