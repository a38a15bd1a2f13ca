// Every variant states *where* things went wrong.
// All of them are fatal: once the frame loop runs, drawing itself never fails.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening the window failed. minifb also reports display-subsystem
    /// initialization failures through this path.
    #[error("Window error: {0}")]
    WindowInit(String),

    /// The drawable surface could not be created or was rejected by the window.
    #[error("Surface error: {0}")]
    Surface(String),
}
