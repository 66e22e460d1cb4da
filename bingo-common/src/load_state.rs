use crate::BandList;
use std::fmt;
use thiserror::Error;

/// Errors produced while fetching the band list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    FetchFailed(String),
}

/// Identifies one initiated load. Later requests have larger ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Current phase of band loading
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success(BandList),
    Failure(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn bands(&self) -> Option<&BandList> {
        match self {
            LoadState::Success(bands) => Some(bands),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Success(_) => "success",
            LoadState::Failure(_) => "failure",
        }
    }
}

/// Result of a fetch, addressed to the request that started it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub result: Result<BandList, FetchError>,
}

/// What `LoadMachine::resolve` did with an outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome became the current state
    Applied,
    /// The outcome belonged to a superseded or already-resolved request
    Discarded,
}

/// Synchronous load state machine with last-request-wins ordering.
///
/// `begin` always moves to `Loading` and supersedes whatever request was in
/// flight. `resolve` only applies the outcome of the most recent request,
/// and only once.
#[derive(Debug, Default)]
pub struct LoadMachine {
    state: LoadState,
    latest: Option<RequestId>,
    next_id: u64,
}

impl LoadMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The most recently started request, if any.
    pub fn latest(&self) -> Option<RequestId> {
        self.latest
    }

    /// Start a new request and enter `Loading`.
    pub fn begin(&mut self) -> RequestId {
        self.next_id += 1;
        let request = RequestId(self.next_id);
        self.latest = Some(request);
        self.state = LoadState::Loading;
        request
    }

    /// Apply a fetch outcome if it belongs to the in-flight latest request.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> Resolution {
        if self.latest != Some(outcome.request) || !self.state.is_loading() {
            return Resolution::Discarded;
        }

        self.state = match outcome.result {
            Ok(bands) => LoadState::Success(bands),
            Err(err) => LoadState::Failure(err),
        };
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, BandName};

    fn failed() -> FetchError {
        FetchError::FetchFailed("boom".into())
    }

    #[test]
    fn test_starts_idle() {
        let machine = LoadMachine::new();
        assert_eq!(machine.state(), &LoadState::Idle);
        assert_eq!(machine.latest(), None);
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut machine = LoadMachine::new();
        machine.begin();
        assert!(machine.state().is_loading());
    }

    #[test]
    fn test_success() {
        let mut machine = LoadMachine::new();
        let request = machine.begin();
        let resolution = machine.resolve(FetchOutcome {
            request,
            result: Ok(catalog()),
        });
        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(machine.state().bands(), Some(&catalog()));
    }

    #[test]
    fn test_failure_then_retry() {
        let mut machine = LoadMachine::new();
        let request = machine.begin();
        machine.resolve(FetchOutcome {
            request,
            result: Err(failed()),
        });
        assert_eq!(machine.state().error(), Some(&failed()));

        let retry = machine.begin();
        assert!(machine.state().is_loading());
        machine.resolve(FetchOutcome {
            request: retry,
            result: Ok(catalog()),
        });
        assert_eq!(machine.state(), &LoadState::Success(catalog()));
    }

    #[test]
    fn test_stale_result_after_newer_success_is_discarded() {
        let mut machine = LoadMachine::new();
        let first = machine.begin();
        let second = machine.begin();

        machine.resolve(FetchOutcome {
            request: second,
            result: Ok(catalog()),
        });
        let resolution = machine.resolve(FetchOutcome {
            request: first,
            result: Err(failed()),
        });

        assert_eq!(resolution, Resolution::Discarded);
        assert_eq!(machine.state(), &LoadState::Success(catalog()));
    }

    #[test]
    fn test_stale_result_arriving_first_keeps_loading() {
        let mut machine = LoadMachine::new();
        let first = machine.begin();
        let second = machine.begin();

        let short: BandList = vec![BandName::from("Queen")].into();
        let resolution = machine.resolve(FetchOutcome {
            request: first,
            result: Ok(short),
        });
        assert_eq!(resolution, Resolution::Discarded);
        assert!(machine.state().is_loading());

        machine.resolve(FetchOutcome {
            request: second,
            result: Ok(catalog()),
        });
        assert_eq!(machine.state().bands().map(BandList::len), Some(36));
    }

    #[test]
    fn test_duplicate_resolve_is_discarded() {
        let mut machine = LoadMachine::new();
        let request = machine.begin();
        machine.resolve(FetchOutcome {
            request,
            result: Ok(catalog()),
        });
        let resolution = machine.resolve(FetchOutcome {
            request,
            result: Err(failed()),
        });
        assert_eq!(resolution, Resolution::Discarded);
        assert!(machine.state().bands().is_some());
    }

    #[test]
    fn test_request_ids_increase() {
        let mut machine = LoadMachine::new();
        let a = machine.begin();
        let b = machine.begin();
        assert!(b > a);
        assert_eq!(machine.latest(), Some(b));
    }
}
