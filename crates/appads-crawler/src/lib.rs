pub mod accept;
pub mod candidates;
pub mod crawler;
pub mod error;
pub mod parse;
pub mod transport;

pub use accept::accept_body;
pub use appads_core::{AccountType, AdsTxt, CrawlResult, SellerRecord};
pub use candidates::{candidate_hosts, unique_candidates};
pub use crawler::Crawler;
pub use error::{CrawlError, FetchError};
pub use parse::parse_ads_txt;
pub use transport::{HttpTransport, Transport, TransportOptions};
