//! Word-frequency processing.
//!
//! An analysis run moves one [`WordAggregate`] through two stages and then
//! ranks it:
//!
//! ```text
//! stop words ─▶ StopWordLoader ─▶ WordAggregate ─▶ DocumentCounter ─▶ rank ─▶ ProcessedDocument
//!                                                   ▲
//!                                        document ──┘
//! ```
//!
//! Each stage takes the aggregate by value and hands it back (or consumes
//! it), so suppression is always complete before counting starts and a
//! failed read drops the partial aggregate.

pub mod aggregate;
pub mod counter;
pub mod pipeline;
pub mod ranking;
pub mod signal;
pub mod stop_words;

pub use aggregate::WordAggregate;
pub use counter::{DocumentCounter, ProcessedDocument, count_words};
pub use pipeline::WordPipeline;
pub use ranking::{RankedEntry, rank, try_rank};
pub use signal::WordSignal;
pub use stop_words::{StopWordLoader, load_stop_words};
