//! News engine: query building, HTTP fetch, JSON decoding and the background pipeline.
mod connectivity;
mod decode;
mod fetch;
mod persist;
mod pipeline;
mod query;
mod types;

pub use connectivity::{Connectivity, TcpProbe};
pub use decode::{decode_articles, DecodeError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{PersistError, StoredFile};
pub use pipeline::{fetch_articles, ChannelEventSink, EventSink, PipelineHandle};
pub use query::{guardian_search_url, SearchQuery, DEFAULT_API_KEY, GUARDIAN_SEARCH_URL};
pub use types::{FailureKind, FetchError, FetchOutcome, PipelineEvent};
