use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod client;

/// Rendered in place of fields the service did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Credits beyond this many entries are not part of the main cast
pub const MAIN_CAST_LIMIT: usize = 5;

/// One search result: just enough identity to fetch the full record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCandidate {
    pub id: u64,
    pub title: String,
}

/// Normalized record for one resolved movie. Raw values stay typed and
/// optional; the `"N/A"` sentinel exists only in the `*_display` output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub rating: Option<f64>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub cast: Vec<String>,
}

impl MovieDetails {
    /// One decimal place out of 10, e.g. `8.4/10`
    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(avg) => format!("{:.1}/10", avg),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn release_date_display(&self) -> String {
        self.release_date
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }

    pub fn runtime_display(&self) -> String {
        match self.runtime {
            Some(minutes) => format!("{} minutes", minutes),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn cast_display(&self) -> String {
        if self.cast.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.cast.join(", ")
        }
    }
}

#[async_trait::async_trait]
pub trait MovieProvider {
    /// Full first-page candidate list in the service's relevance order
    async fn search(&self, query: &str) -> Result<Vec<MovieCandidate>>;
    async fn details(&self, id: u64) -> Result<MovieDetails>;
    async fn credits(&self, id: u64) -> Result<Vec<String>>;
}

/// Fetch and normalize the candidate at `index`.
///
/// The bounds check happens before any remote call. Details and credits are
/// fetched sequentially against the candidate's id; if either call fails the
/// whole fetch fails, so a returned record is never partially populated.
pub async fn fetch_by_index<P>(
    provider: &P,
    candidates: &[MovieCandidate],
    index: usize,
) -> Result<MovieDetails>
where
    P: MovieProvider + ?Sized,
{
    let candidate = candidates.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: candidates.len(),
    })?;

    let mut details = provider.details(candidate.id).await?;
    let mut cast = provider.credits(candidate.id).await?;
    cast.truncate(MAIN_CAST_LIMIT);
    details.cast = cast;
    Ok(details)
}
