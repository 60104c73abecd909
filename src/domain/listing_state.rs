use thiserror::Error;

use super::entities::{Workspace, WorkspaceId};

/// Where the listing collection is in its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("workspace {0} not found")]
    NotFound(WorkspaceId),
}

/// What the detail route should do next for a given id.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailStep {
    Show(Workspace),
    /// Nothing loaded yet; start the collection fetch.
    Fetch,
    Wait,
    /// Loaded but not yet looked up.
    Resolve,
    NotFound,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListingAction {
    FetchStarted,
    FetchSucceeded(Vec<Workspace>),
    FetchFailed(String),
    SetSelected(Option<Workspace>),
}

/// Process-wide listing collection shared by the listing and detail views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    pub list: Vec<Workspace>,
    pub selected: Option<Workspace>,
    pub status: FetchStatus,
    /// Last failed `select_by_id`, cleared by the next successful selection.
    pub lookup: Option<LookupError>,
}

impl ListingState {
    pub fn reduce(&mut self, action: ListingAction) {
        match action {
            ListingAction::FetchStarted => {
                self.status = FetchStatus::Loading;
            }
            ListingAction::FetchSucceeded(list) => {
                self.list = list;
                self.status = FetchStatus::Loaded;
                if let Some(current) = self.selected.take() {
                    self.selected = self.find(&current.id).cloned();
                }
                let resolved = matches!(
                    &self.lookup,
                    Some(LookupError::NotFound(id)) if self.find(id).is_some()
                );
                if resolved {
                    self.lookup = None;
                }
            }
            ListingAction::FetchFailed(message) => {
                self.status = FetchStatus::Failed(message);
            }
            ListingAction::SetSelected(workspace) => {
                self.selected = workspace;
                self.lookup = None;
            }
        }
    }

    /// Resolves `id` against the loaded list; never goes to the network.
    pub fn select_by_id(&mut self, id: &str) -> Result<&Workspace, LookupError> {
        match self.list.iter().find(|w| w.id == id).cloned() {
            Some(workspace) => {
                self.lookup = None;
                Ok(self.selected.insert(workspace))
            }
            None => {
                let err = LookupError::NotFound(id.to_string());
                self.selected = None;
                self.lookup = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&Workspace> {
        self.list.iter().find(|w| w.id == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn detail_step(&self, id: &str) -> DetailStep {
        if let Some(workspace) = self.selected.as_ref().filter(|w| w.id == id) {
            return DetailStep::Show(workspace.clone());
        }
        match &self.status {
            FetchStatus::Idle => DetailStep::Fetch,
            FetchStatus::Loading => DetailStep::Wait,
            FetchStatus::Failed(message) => DetailStep::Failed(message.clone()),
            FetchStatus::Loaded => match &self.lookup {
                Some(LookupError::NotFound(missed)) if missed == id => DetailStep::NotFound,
                _ => DetailStep::Resolve,
            },
        }
    }
}
