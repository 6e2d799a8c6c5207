//! Latest-request-wins bookkeeping for overlapping loads.

use log::debug;
use tokio_util::sync::CancellationToken;

/// Hands out monotonically numbered tickets; only the newest ticket is current.
///
/// Beginning a request cancels the token of the one before it, so in-flight work
/// can stop early, and stale results can be recognised by [`RequestSequencer::is_current`].
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
    token: Option<CancellationToken>,
}

/// Identifies one request issued by a [`RequestSequencer`].
#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    token: CancellationToken,
}

impl RequestTicket {
    /// Sequence number of this request. Later requests have larger ids.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether a newer request has superseded this one.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once a newer request has started or the sequencer was cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request and supersedes the previous one.
    pub fn begin(&mut self) -> RequestTicket {
        self.cancel();
        self.latest += 1;
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        RequestTicket {
            id: self.latest,
            token,
        }
    }

    /// Cancels the outstanding request, if any, without starting another.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            debug!("Superseding request #{}", self.latest);
            token.cancel();
        }
    }

    /// Whether `ticket` is the newest request and has not been cancelled.
    ///
    /// Results carrying a ticket for which this is `false` must be discarded.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.id == self.latest && !ticket.is_cancelled()
    }

    /// Number of the most recently issued ticket, `0` before the first.
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_only_newest_ticket_is_current() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        assert!(sequencer.is_current(&first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(&first));
        assert!(first.is_cancelled());
        assert!(sequencer.is_current(&second));
        assert!(second.id() > first.id());
        assert_eq!(sequencer.latest(), 2);
    }

    #[test]
    fn test_cancel_invalidates_outstanding_ticket() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.begin();
        sequencer.cancel();
        assert!(!sequencer.is_current(&ticket));
        sequencer.cancel();
    }

    #[tokio::test]
    async fn test_cancelled_wakes_superseded_waiter() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let waiter = tokio::spawn(async move {
            first.cancelled().await;
            first.id()
        });
        let _second = sequencer.begin();
        let id = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(id, 1);
    }
}
