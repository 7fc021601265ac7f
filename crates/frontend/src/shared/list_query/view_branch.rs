use super::fetch::FetchState;

/// What a list body renders for a given [`FetchState`]. Exactly one branch per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBranch {
    Error,
    Loading,
    Empty,
    Populated,
}

impl ViewBranch {
    pub fn select<R>(state: &FetchState<R>) -> Self {
        match state {
            FetchState::Error { .. } => ViewBranch::Error,
            FetchState::Idle | FetchState::Loading { .. } => ViewBranch::Loading,
            FetchState::Success { data, .. } if data.is_empty() => ViewBranch::Empty,
            FetchState::Success { .. } => ViewBranch::Populated,
        }
    }
}
