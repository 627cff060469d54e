//! Errors the host is expected to tell apart.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The feed is unreachable for now, the setup should be retried later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotReady;

impl Error for NotReady {}

impl Display for NotReady {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SaveEcoBot is not ready, retry later")
    }
}

/// Tells whether the error chain says the service is not ready.
pub fn is_not_ready(error: &anyhow::Error) -> bool {
    error.downcast_ref::<NotReady>().is_some()
}
