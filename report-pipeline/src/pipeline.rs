use crate::dedupe::{cap_kept, dedupe, Partition};
use crate::rank::{rank, Ranking};
use crate::report::{ExportOutcome, SentimentReport, Summary};
use chrono::Utc;
use csv_export::CsvExporter;
use moodscan_core::{
    AppConfig, CoreError, ErrorExt, ErrorReporter, FetchError, ScoredPost, DEFAULT_CAP,
    DEFAULT_MAX_POSTS,
};
use post_fetcher::PostFetcher;
use sentiment_engine::{classify_all, PolarityScorer};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One search-to-report run: fetch, dedupe, cap, classify, export, rank.
///
/// The fetcher, scorer and exporter are owned by the pipeline and only read
/// during a run, so concurrent runs share no mutable state.
pub struct Pipeline<F, S> {
    fetcher: F,
    scorer: S,
    exporter: CsvExporter,
    max_posts: usize,
    cap: usize,
    reporter: ErrorReporter,
}

impl<F, S> Pipeline<F, S>
where
    F: PostFetcher,
    S: PolarityScorer,
{
    pub fn new(fetcher: F, scorer: S, exporter: CsvExporter) -> Self {
        Self {
            fetcher,
            scorer,
            exporter,
            max_posts: DEFAULT_MAX_POSTS,
            cap: DEFAULT_CAP,
            reporter: ErrorReporter::new(),
        }
    }

    pub fn from_config(config: &AppConfig, fetcher: F, scorer: S) -> Self {
        Self::new(fetcher, scorer, CsvExporter::new(config.export.path.clone()))
            .with_max_posts(config.fetch.max_posts)
            .with_cap(config.pipeline.cap)
    }

    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub async fn run(&self, query: &str) -> Result<SentimentReport, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::EmptyQuery);
        }

        let run_id = Uuid::new_v4();
        info!("[{}] Running sentiment pipeline for '{}'", run_id, query);

        let fetched = self.fetcher.fetch(query, self.max_posts).await.map_err(|e| {
            e.log_warn();
            CoreError::from(e)
        })?;
        if fetched.is_empty() {
            warn!("[{}] No posts returned for '{}'", run_id, query);
            return Err(FetchError::NoResults {
                query: query.to_string(),
            }
            .into());
        }
        let total_tweets = fetched.len();

        let Partition { kept, removed } = dedupe(fetched);
        let clear_tweets = kept.len();
        debug!(
            "[{}] Deduplicated {} posts: {} kept, {} removed",
            run_id,
            total_tweets,
            clear_tweets,
            removed.len()
        );

        let forwarded = cap_kept(kept, self.cap);
        let sentiment_input = forwarded.len();
        if sentiment_input < clear_tweets {
            debug!(
                "[{}] Capped {} kept posts to {}",
                run_id, clear_tweets, sentiment_input
            );
        }

        // Scored once; the export and the ranking read the same values.
        let scored = classify_all(&self.scorer, forwarded);
        let export = self.export(run_id, &scored);
        let Ranking {
            positive,
            negative,
            neutral,
        } = rank(scored);

        let summary = Summary {
            query: query.to_string(),
            total_tweets,
            removed_list: removed.len(),
            clear_tweets,
            sentiment_input,
            positive: positive.len(),
            negative: negative.len(),
            neutral: neutral.len(),
        };
        info!(
            "[{}] Classified {} posts: {} positive, {} negative, {} neutral",
            run_id, summary.sentiment_input, summary.positive, summary.negative, summary.neutral
        );

        Ok(SentimentReport {
            run_id,
            generated_at: Utc::now(),
            summary,
            positive,
            negative,
            neutral,
            removed,
            export,
        })
    }

    /// A failed export is logged and recorded in the report; the run goes on.
    fn export(&self, run_id: Uuid, scored: &[ScoredPost]) -> ExportOutcome {
        match self.exporter.export(scored) {
            Ok(rows) => ExportOutcome::Written {
                path: self.exporter.path().display().to_string(),
                rows,
            },
            Err(e) => {
                let message = e.user_friendly_message();
                warn!("[{}] Export failed, continuing without file", run_id);
                self.reporter.report_error(&CoreError::Export(e));
                ExportOutcome::Failed { message }
            }
        }
    }
}
