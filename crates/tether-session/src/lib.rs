//! Stateful completion engine for partially typed pairing codes.
//!
//! A [`CodeCompleter`] is created for one interactive read and consulted
//! by the line-editing front end once per candidate: the editor calls
//! [`CodeCompleter::complete`] with the current text and attempt indices
//! 0, 1, 2, … until it gets `Ok(None)`.

mod channels;
mod completer;

#[cfg(test)]
mod tests;

pub use channels::{ChannelFetch, FetchError};

use channels::ChannelSource;
use tether_core::code::ChannelId;

/// Error surfaced by [`CodeCompleter::complete`].
#[derive(Debug, thiserror::Error)]
pub enum CompleteError {
    #[error("channel listing failed: {0}")]
    Channels(FetchError),
}

/// Completion state for one interactive code entry.
///
/// The two cache fields are unsynchronized; an instance belongs to a
/// single thread and is discarded when the read finishes.
pub struct CodeCompleter {
    channels: ChannelSource,
    code_length: usize,
    last_text: Option<String>,
    last_matches: Vec<String>,
}

impl CodeCompleter {
    /// `initial`, when supplied, answers the first channel-id query;
    /// every later one calls `fetch` for a fresh listing.
    pub fn new(
        initial: Option<Vec<ChannelId>>,
        fetch: ChannelFetch,
        code_length: usize,
    ) -> Self {
        Self {
            channels: ChannelSource::new(initial, fetch),
            code_length,
            last_text: None,
            last_matches: Vec::new(),
        }
    }

    /// Number of words in a complete code.
    pub fn code_length(&self) -> usize {
        self.code_length
    }
}
