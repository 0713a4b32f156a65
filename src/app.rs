use tracing::{debug, info};

use crate::error::Error;
use crate::tmdb::{MovieCandidate, MovieDetails, MovieProvider, fetch_by_index};

/// What the user decided about a displayed candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Retry,
}

/// Terminal state of one lookup session
#[derive(Debug)]
pub enum SessionOutcome {
    Accepted(MovieDetails),
    NoMatches,
    Exhausted,
    Failed(Error),
}

/// Run one lookup session: a single search, then fetch and review candidates
/// in relevance order until one is accepted, the list runs out, or a remote
/// call fails.
///
/// `review` is handed the candidate identity and its normalized record and
/// decides whether to keep it or advance to the next index. The CLI wires
/// presentation and the retry prompt into it; tests script the verdicts.
pub async fn run_lookup<P, F>(provider: &P, query: &str, mut review: F) -> SessionOutcome
where
    P: MovieProvider + ?Sized,
    F: FnMut(&MovieCandidate, &MovieDetails) -> Verdict,
{
    let candidates = match provider.search(query).await {
        Ok(candidates) => candidates,
        Err(Error::NoMatches) => {
            info!(query = %query, "No search results");
            return SessionOutcome::NoMatches;
        }
        Err(e) => return SessionOutcome::Failed(e),
    };

    info!(query = %query, count = candidates.len(), "Resolved candidates");

    for index in 0..candidates.len() {
        let details = match fetch_by_index(provider, &candidates, index).await {
            Ok(details) => details,
            Err(e) => return SessionOutcome::Failed(e),
        };

        debug!(index, title = %details.title, "Fetched candidate");

        match review(&candidates[index], &details) {
            Verdict::Accept => return SessionOutcome::Accepted(details),
            Verdict::Retry => continue,
        }
    }

    info!("Candidate list exhausted");
    SessionOutcome::Exhausted
}
