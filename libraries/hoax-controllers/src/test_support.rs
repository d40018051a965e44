//! Test doubles for the API and form actions.

use async_trait::async_trait;
use hoax_client::{Result, UserApi};
use hoax_core::{LoginCredentials, Page, PageRequest, SignupRequest, User, UserUpdate};
use mockall::mock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

mock! {
    pub Api {}

    #[async_trait]
    impl UserApi for Api {
        async fn list_users(&self, request: PageRequest) -> Result<Page<User>>;
        async fn get_user(&self, username: &str) -> Result<User>;
        async fn post_signup(&self, body: &SignupRequest) -> Result<()>;
        async fn login(&self, credentials: &LoginCredentials) -> Result<User>;
        async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User>;
    }
}

/// `count` users named `user1..=userN`.
pub fn users(count: u32) -> Vec<User> {
    (1..=count)
        .map(|i| User::new(format!("user{i}"), format!("display{i}")))
        .collect()
}

/// API whose list responses are delivered by the test, one channel per call.
///
/// Each `list_users` call takes the next queued receiver and waits on it,
/// so the test decides when and in which order responses arrive.
#[derive(Default)]
pub struct GatedApi {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<Page<User>>>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl GatedApi {
    /// Queue a response slot and return its sender.
    pub fn gate(&self) -> oneshot::Sender<Result<Page<User>>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserApi for GatedApi {
    async fn list_users(&self, request: PageRequest) -> Result<Page<User>> {
        self.requests.lock().unwrap().push(request);
        let rx = self
            .pending
            .lock()
            .unwrap()
            .pop_front()
            .expect("no gated response queued");
        rx.await.expect("gate dropped")
    }

    async fn get_user(&self, _username: &str) -> Result<User> {
        unimplemented!()
    }

    async fn post_signup(&self, _body: &SignupRequest) -> Result<()> {
        unimplemented!()
    }

    async fn login(&self, _credentials: &LoginCredentials) -> Result<User> {
        unimplemented!()
    }

    async fn update_user(&self, _id: i64, _update: &UserUpdate) -> Result<User> {
        unimplemented!()
    }
}

/// Form action that blocks until the test releases it, counting calls.
pub struct GatedAction {
    calls: AtomicUsize,
    gate: tokio::sync::Mutex<Option<oneshot::Receiver<Result<()>>>>,
}

impl GatedAction {
    pub fn pair() -> (Self, oneshot::Sender<Result<()>>) {
        let (tx, rx) = oneshot::channel();
        let action = Self {
            calls: AtomicUsize::new(0),
            gate: tokio::sync::Mutex::new(Some(rx)),
        };
        (action, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rx = self.gate.lock().await.take().expect("action called twice");
        rx.await.expect("gate dropped")
    }
}

#[async_trait]
impl crate::actions::SignupActions for GatedAction {
    async fn post_signup(&self, _body: SignupRequest) -> Result<()> {
        self.wait().await
    }
}

#[async_trait]
impl crate::actions::LoginActions for GatedAction {
    async fn post_login(&self, _credentials: LoginCredentials) -> Result<()> {
        self.wait().await
    }
}
