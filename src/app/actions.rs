//! Side effects requested by the event reducer.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself. It
//! returns a `Vec<Action>` and the plugin runtime executes each one in order.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime after an event is reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a single parameterless GET to the collection endpoint.
    ///
    /// The response comes back as
    /// [`Event::CollectionFetched`](crate::app::Event::CollectionFetched).
    FetchCollection {
        /// Endpoint URL.
        url: String,
    },

    /// Posts a request to the background worker.
    ///
    /// The reply comes back as
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),
}
