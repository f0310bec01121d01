pub mod dedupe;
pub mod pipeline;
pub mod rank;
pub mod report;

pub use dedupe::{cap_kept, dedupe, hashtag_count, Partition, MAX_HASHTAGS};
pub use pipeline::Pipeline;
pub use rank::{rank, Ranking};
pub use report::{render_text, ExportOutcome, SentimentReport, Summary};
