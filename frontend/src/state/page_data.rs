//! The fetch-on-display contract shared by every data page.

use leptos::*;
use serde::de::DeserializeOwned;

use crate::{
    api::{use_api_client, ApiClient, ApiError},
    router::AppRoute,
    state::session::{use_session, SessionContext, SessionStore},
    utils::navigation,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Success(T),
    Failure(ApiError),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchState::Failure(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for FetchState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Failure(err),
        }
    }
}

/// One fetch of `path`, folded into a settled state. An `Unauthorized` answer
/// ends the session.
pub async fn load_page<T>(api: &ApiClient, session: &SessionStore, path: &str) -> FetchState<T>
where
    T: DeserializeOwned,
{
    let state: FetchState<T> = api.get_json::<T>(path).await.into();
    if let Some(err) = state.error() {
        log::error!("loading {} failed: {} ({})", path, err, err.code());
        if matches!(err, ApiError::Unauthorized) {
            session.clear();
        }
    }
    state
}

/// Applies a settled page result to the shared session. `Unauthorized` signs
/// the user out so the guard re-evaluates, then leaves for the login route.
pub fn settle<T>(state: &FetchState<T>, session: &SessionContext) {
    if matches!(state.error(), Some(ApiError::Unauthorized)) {
        session.sign_out();
        navigation::replace_location(AppRoute::Login.path());
    }
}

#[derive(Clone)]
pub struct PageData<T: 'static> {
    pub state: Signal<FetchState<T>>,
    pub retry: Callback<()>,
}

/// Fetches `path` once when the calling page is displayed. The resource belongs
/// to the page's reactive scope, so a result arriving after unmount is dropped.
pub fn use_page_data<T>(path: &'static str) -> PageData<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let api = use_api_client();
    let session = use_session();

    let resource = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            let session = session.clone();
            async move {
                let state = load_page::<T>(&api, &session.store, path).await;
                settle(&state, &session);
                state
            }
        },
    );

    let state = Signal::derive(move || {
        if resource.loading().get() {
            return FetchState::Pending;
        }
        resource.get().unwrap_or(FetchState::Pending)
    });
    let retry = Callback::new(move |_: ()| resource.refetch());

    PageData { state, retry }
}
