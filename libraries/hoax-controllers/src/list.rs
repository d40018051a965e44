//! Paginated user list controller.
//!
//! State machine: `Idle -> Loading -> Loaded`, or `Loading -> Errored`.
//! A failed load keeps the last good page on screen and only raises
//! [`USER_LOAD_FAILED`]; the next successful load clears it.
//!
//! Navigation never queues or coalesces: every accepted `next`/`previous`
//! issues exactly one request. Each request is tagged with a sequence number
//! and only the response to the most recently issued request is applied, so
//! a slow stale response cannot overwrite a newer page.

use hoax_client::UserApi;
use hoax_core::{Page, PageRequest, User};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Message shown when a page cannot be loaded.
pub const USER_LOAD_FAILED: &str = "User load failed";

/// Where the list is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    /// A request is outstanding
    Loading,
    /// The last applied response was a page
    Loaded,
    /// The last applied response was a failure
    Errored,
}

/// What happened to one `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page replaced the current one
    Applied,
    /// The request failed; the current page was kept
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

/// Render state of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub page: Page<User>,
    pub load_error: Option<String>,
    pub status: LoadStatus,
}

impl ListState {
    /// Whether a "next" control should be offered
    pub fn has_next(&self) -> bool {
        !self.page.last
    }

    /// Whether a "previous" control should be offered
    pub fn has_previous(&self) -> bool {
        !self.page.first && self.page.number > 0
    }
}

/// Controller behind the user list view.
pub struct UserListController {
    api: Arc<dyn UserApi>,
    page_size: u32,
    state: Mutex<ListState>,
    issued: AtomicU64,
    started: AtomicBool,
}

impl UserListController {
    /// Create a controller fetching `page_size` users per page (at least 1).
    pub fn new(api: Arc<dyn UserApi>, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            api,
            page_size,
            state: Mutex::new(ListState {
                page: Page::empty(page_size),
                load_error: None,
                status: LoadStatus::Idle,
            }),
            issued: AtomicU64::new(0),
            started: AtomicBool::new(false),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Load the first page. Only the first call does anything.
    pub async fn start(&self) -> Option<LoadOutcome> {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.load(0).await)
    }

    /// Fetch page `page_index` and apply the response if it is still current.
    pub async fn load(&self, page_index: u32) -> LoadOutcome {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().await.status = LoadStatus::Loading;

        let request = PageRequest {
            page: page_index,
            size: self.page_size,
        };
        debug!(page = page_index, size = self.page_size, sequence, "Loading users");

        let result = self.api.list_users(request).await;

        let mut state = self.state.lock().await;
        if self.issued.load(Ordering::SeqCst) != sequence {
            debug!(page = page_index, sequence, "Dropping stale user page");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                if !page.is_consistent() {
                    warn!(
                        number = page.number,
                        total_pages = page.total_pages,
                        "Server returned inconsistent page flags"
                    );
                }
                state.page = page;
                state.load_error = None;
                state.status = LoadStatus::Loaded;
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!(page = page_index, error = %e, "User load failed");
                state.load_error = Some(USER_LOAD_FAILED.to_string());
                state.status = LoadStatus::Errored;
                LoadOutcome::Failed
            }
        }
    }

    /// Go to the following page. Returns `None` without a request on the last page.
    pub async fn next(&self) -> Option<LoadOutcome> {
        let target = {
            let state = self.state.lock().await;
            if !state.has_next() {
                return None;
            }
            state.page.number.checked_add(1)?
        };
        Some(self.load(target).await)
    }

    /// Go to the preceding page. Returns `None` without a request on the first page.
    pub async fn previous(&self) -> Option<LoadOutcome> {
        let target = {
            let state = self.state.lock().await;
            if !state.has_previous() {
                return None;
            }
            state.page.number - 1
        };
        Some(self.load(target).await)
    }

    /// Snapshot for rendering
    pub async fn state(&self) -> ListState {
        self.state.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{users, GatedApi, MockApi};
    use hoax_client::ClientError;
    use proptest::prelude::*;

    fn server_error() -> ClientError {
        ClientError::ServerError {
            status: 500,
            message: "Load error".to_string(),
        }
    }

    /// API backed by an in-memory collection of `count` users.
    fn collection_api(count: u32) -> MockApi {
        let all = users(count);
        let mut api = MockApi::new();
        api.expect_list_users()
            .returning(move |r| Ok(Page::slice(&all, r.page, r.size)));
        api
    }

    #[tokio::test]
    async fn test_start_loads_first_page_once_with_page_size() {
        let mut api = MockApi::new();
        api.expect_list_users()
            .withf(|r| r.page == 0 && r.size == 3)
            .times(1)
            .returning(|r| Ok(Page::slice(&users(4), r.page, r.size)));

        let controller = UserListController::new(Arc::new(api), 3);

        assert_eq!(controller.start().await, Some(LoadOutcome::Applied));
        assert_eq!(controller.start().await, None);
    }

    #[tokio::test]
    async fn test_four_users_in_pages_of_three() {
        let controller = UserListController::new(Arc::new(collection_api(4)), 3);

        controller.start().await;
        let state = controller.state().await;
        assert_eq!(state.page.content.len(), 3);
        assert!(state.page.first);
        assert!(!state.page.last);
        assert!(state.has_next());
        assert!(!state.has_previous());

        assert_eq!(controller.next().await, Some(LoadOutcome::Applied));
        let state = controller.state().await;
        assert_eq!(state.page.content.len(), 1);
        assert_eq!(state.page.content[0].username, "user4");
        assert!(!state.page.first);
        assert!(state.page.last);
        assert_eq!(state.status, LoadStatus::Loaded);
    }

    #[tokio::test]
    async fn test_next_on_last_page_issues_no_request() {
        let mut api = MockApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|r| Ok(Page::slice(&users(3), r.page, r.size)));

        let controller = UserListController::new(Arc::new(api), 3);
        controller.start().await;

        assert!(controller.state().await.page.last);
        assert_eq!(controller.next().await, None);
    }

    #[tokio::test]
    async fn test_previous_on_first_page_issues_no_request() {
        let mut api = MockApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|r| Ok(Page::slice(&users(9), r.page, r.size)));

        let controller = UserListController::new(Arc::new(api), 3);
        controller.start().await;

        assert_eq!(controller.previous().await, None);
    }

    #[tokio::test]
    async fn test_nothing_to_navigate_before_start() {
        let mut api = MockApi::new();
        api.expect_list_users().times(0);

        let controller = UserListController::new(Arc::new(api), 3);

        assert_eq!(controller.state().await.status, LoadStatus::Idle);
        assert_eq!(controller.next().await, None);
        assert_eq!(controller.previous().await, None);
    }

    #[tokio::test]
    async fn test_failed_previous_keeps_page_and_later_success_clears_error() {
        let all = users(4);
        let api = GatedApi::default();

        api.gate().send(Ok(Page::slice(&all, 0, 3))).unwrap();
        api.gate().send(Ok(Page::slice(&all, 1, 3))).unwrap();
        api.gate().send(Err(server_error())).unwrap();
        api.gate().send(Ok(Page::slice(&all, 0, 3))).unwrap();

        let api = Arc::new(api);
        let controller = UserListController::new(api.clone(), 3);

        controller.start().await;
        controller.next().await;

        assert_eq!(controller.previous().await, Some(LoadOutcome::Failed));
        let state = controller.state().await;
        assert_eq!(state.load_error.as_deref(), Some(USER_LOAD_FAILED));
        assert_eq!(state.page.content[0].username, "user4");
        assert_eq!(state.status, LoadStatus::Errored);

        assert_eq!(controller.previous().await, Some(LoadOutcome::Applied));
        let state = controller.state().await;
        assert!(state.load_error.is_none());
        assert_eq!(state.page.content.len(), 3);

        let pages: Vec<u32> = api.requests().iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![0, 1, 0, 0]);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let all = users(9);
        let api = Arc::new(GatedApi::default());
        let slow = api.gate();
        let fast = api.gate();

        let controller = UserListController::new(api.clone(), 3);

        let first = controller.load(1);
        let second = controller.load(2);
        let deliver = async {
            fast.send(Ok(Page::slice(&all, 2, 3))).unwrap();
            slow.send(Ok(Page::slice(&all, 1, 3))).unwrap();
        };

        let (first, second, ()) = tokio::join!(first, second, deliver);

        assert_eq!(first, LoadOutcome::Stale);
        assert_eq!(second, LoadOutcome::Applied);
        assert_eq!(controller.state().await.page.number, 2);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_clamped() {
        let controller = UserListController::new(Arc::new(collection_api(2)), 0);
        assert_eq!(controller.page_size(), 1);
    }

    proptest! {
        /// Walking forward visits every page exactly once and stops at the end.
        #[test]
        fn next_walks_to_last_page_then_stops(count in 0u32..20, size in 1u32..6) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let controller = UserListController::new(Arc::new(collection_api(count)), size);
                controller.start().await;

                let mut seen = controller.state().await.page.content.len();
                let mut hops = 0;
                while controller.next().await.is_some() {
                    hops += 1;
                    seen += controller.state().await.page.content.len();
                }

                let state = controller.state().await;
                prop_assert!(state.page.last);
                prop_assert_eq!(seen, count as usize);
                prop_assert_eq!(hops, count.div_ceil(size).saturating_sub(1));
                Ok(())
            })?;
        }

        /// Walking back from any page stops at page 0.
        #[test]
        fn previous_walks_back_to_first_page(count in 1u32..20, size in 1u32..6, start in 0u32..20) {
            let pages = count.div_ceil(size);
            let start = start % pages;

            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let controller = UserListController::new(Arc::new(collection_api(count)), size);
                controller.load(start).await;

                let mut hops = 0;
                while controller.previous().await.is_some() {
                    hops += 1;
                }

                let state = controller.state().await;
                prop_assert!(state.page.first);
                prop_assert_eq!(state.page.number, 0);
                prop_assert_eq!(hops, start);
                Ok(())
            })?;
        }
    }
}
