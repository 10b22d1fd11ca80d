//! Channel-id listings with a one-shot initial snapshot.

use tether_core::code::ChannelId;

/// Error produced by a channel fetch callable.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Callable returning the currently open channel ids.
pub type ChannelFetch = Box<dyn FnMut() -> Result<Vec<ChannelId>, FetchError>>;

/// The pre-supplied listing, consumed by the first query.
enum Snapshot {
    NotYetConsumed(Vec<ChannelId>),
    Consumed,
}

/// Where channel-id listings come from.
///
/// A snapshot handed over at construction answers exactly one query;
/// after that (or when none was supplied) every query goes to the live
/// fetch, so channels opened or closed in the meantime show up.
pub(crate) struct ChannelSource {
    snapshot: Snapshot,
    fetch: ChannelFetch,
}

impl ChannelSource {
    pub(crate) fn new(initial: Option<Vec<ChannelId>>, fetch: ChannelFetch) -> Self {
        let snapshot = match initial {
            Some(ids) => Snapshot::NotYetConsumed(ids),
            None => Snapshot::Consumed,
        };
        Self { snapshot, fetch }
    }

    /// The next listing: the initial snapshot exactly once, live fetches
    /// thereafter.
    pub(crate) fn next(&mut self) -> Result<Vec<ChannelId>, FetchError> {
        match std::mem::replace(&mut self.snapshot, Snapshot::Consumed) {
            Snapshot::NotYetConsumed(ids) => Ok(ids),
            Snapshot::Consumed => (self.fetch)(),
        }
    }
}
