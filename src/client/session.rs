use crate::client::favorites::FavoritesStore;
use crate::client::storage::KeyValueStore;
use crate::core::filters::matches_search;
use crate::models::{Hospital, HospitalListResponse, HospitalSearchParams};
use crate::services::{ApiClientError, HospitalApiClient};

/// Message shown when a search request fails
pub const FETCH_FAILED_MESSAGE: &str = "資料取得失敗";

/// Which list the session displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    All,
    Favorites,
}

/// Observable state of the latest search
#[derive(Debug, Clone)]
pub struct SearchState {
    pub hospitals: Vec<Hospital>,
    pub total: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for SearchState {
    /// A fresh session is loading until its first search lands
    fn default() -> Self {
        Self {
            hospitals: Vec::new(),
            total: 0,
            is_loading: true,
            error: None,
        }
    }
}

impl SearchState {
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply a finished request; a failure keeps the previous list
    pub fn finish(&mut self, result: &Result<HospitalListResponse, ApiClientError>) {
        match result {
            Ok(response) => {
                self.hospitals = response.data.clone();
                self.total = response.total;
            }
            Err(e) => {
                tracing::warn!("Hospital search failed: {}", e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
    }
}

/// Client-side search session against the directory API
///
/// Every query or city change issues a new request whose result replaces
/// the displayed list. The first unfiltered result is kept so the favorites
/// view can be filtered locally without a round trip.
#[derive(Debug)]
pub struct SearchSession {
    client: HospitalApiClient,
    state: SearchState,
    params: HospitalSearchParams,
    view: ViewMode,
    all_hospitals: Option<Vec<Hospital>>,
}

impl SearchSession {
    pub fn new(client: HospitalApiClient) -> Self {
        Self {
            client,
            state: SearchState::default(),
            params: HospitalSearchParams::default(),
            view: ViewMode::default(),
            all_hospitals: None,
        }
    }

    /// Initial unfiltered load
    pub async fn mount(&mut self) {
        self.run(HospitalSearchParams::default()).await;
    }

    /// Search with a new query and city
    pub async fn search(&mut self, query: &str, city: Option<&str>) {
        let params = HospitalSearchParams::new(query, city.map(str::to_string));
        self.run(params).await;
    }

    async fn run(&mut self, params: HospitalSearchParams) {
        self.params = params;
        self.state.start_loading();

        let result = self.client.search(&self.params).await;

        if let Ok(response) = &result {
            if self.params.is_unfiltered() && self.all_hospitals.is_none() {
                self.all_hospitals = Some(response.data.clone());
            }
        }

        self.state.finish(&result);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn params(&self) -> &HospitalSearchParams {
        &self.params
    }

    /// Hospitals to display for the current view
    ///
    /// In favorites mode this is the cached full list narrowed to favorites
    /// and the current query/city, using the same matching as the server.
    pub fn visible<'a, S: KeyValueStore>(&'a self, favorites: &FavoritesStore<S>) -> Vec<&'a Hospital> {
        match self.view {
            ViewMode::All => self.state.hospitals.iter().collect(),
            ViewMode::Favorites => self
                .all_hospitals
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|hospital| favorites.is_favorite(&hospital.id))
                .filter(|hospital| matches_search(hospital, &self.params))
                .collect(),
        }
    }
}
