//! In-process stand-ins for the auth and profile services.
//!
//! Both run as real actix-web servers on ephemeral ports so the runner talks
//! to them over the network exactly as it would to the deployed services.
//! [`StubBehavior`] injects the faults the runner is expected to catch.

pub mod auth;
pub mod profile;

use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use dashmap::DashMap;

use crate::responses::v1::profile::Profile;

/// Faults the stub services can be told to inject.
#[derive(Clone, Debug, Default)]
pub struct StubBehavior {
    /// Usernames whose signup is answered with `500`.
    pub reject_signups: Vec<String>,
    /// Issue access tokens without the `UserID` claim.
    pub omit_user_id: bool,
    /// Answer signups without setting any cookie.
    pub omit_cookies: bool,
    /// Add an unparsable `Set-Cookie` header to every signup answer.
    pub malformed_cookie: bool,
    /// Answer every profile write with `500`.
    pub reject_writes: bool,
    /// Leave this field out of profile reads.
    pub drop_field: Option<String>,
    /// Replace this field's value in profile reads.
    pub corrupt_field: Option<String>,
    /// Answer profile reads with a JSON array instead of an object.
    pub non_object_body: bool,
    /// Store every profile in one slot, so writes overwrite each other.
    pub shared_profiles: bool,
    /// Alter the stored last name when a profile is written again.
    pub drift_on_rewrite: bool,
}

const SHARED_SLOT: &str = "shared";

/// State shared by both stub services.
pub struct StubState {
    pub(crate) behavior: StubBehavior,
    pub(crate) secret: String,
    accounts: DashMap<String, String>,
    profiles: DashMap<String, Profile>,
    writes: AtomicUsize,
}

impl StubState {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            secret: uuid::Uuid::new_v4().to_string(),
            accounts: DashMap::new(),
            profiles: DashMap::new(),
            writes: AtomicUsize::new(0),
        }
    }

    /// Identity assigned to `username`, if the account exists.
    pub fn account(&self, username: &str) -> Option<String> {
        self.accounts.get(username).map(|id| id.value().clone())
    }

    /// Registers a new account. Returns `None` if the username is taken.
    pub(crate) fn register(&self, username: &str) -> Option<String> {
        use dashmap::mapref::entry::Entry;

        match self.accounts.entry(username.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                let id = uuid::Uuid::new_v4().to_string();
                entry.insert(id.clone());
                Some(id)
            }
        }
    }

    fn slot<'a>(&self, uuid: &'a str) -> &'a str {
        if self.behavior.shared_profiles {
            SHARED_SLOT
        } else {
            uuid
        }
    }

    pub fn profile(&self, uuid: &str) -> Option<Profile> {
        self.profiles.get(self.slot(uuid)).map(|p| p.value().clone())
    }

    pub(crate) fn store(&self, uuid: &str, mut profile: Profile) {
        let slot = self.slot(uuid).to_string();

        if self.behavior.drift_on_rewrite && self.profiles.contains_key(&slot) {
            profile.last_name.push_str(" (rewritten)");
        }

        self.profiles.insert(slot, profile);
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of accepted profile writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

/// A running pair of stub services.
pub struct StubServices {
    pub auth_url: String,
    pub profile_url: String,
    state: web::Data<StubState>,
    handles: Vec<ServerHandle>,
}

impl StubServices {
    /// Starts both services on `127.0.0.1` with ephemeral ports. Must be
    /// called from within an actix runtime.
    pub async fn start(behavior: StubBehavior) -> io::Result<Self> {
        let state = web::Data::new(StubState::new(behavior));

        let data = state.clone();
        let auth_server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .service(auth::signup)
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;
        let auth_addr = bound(&auth_server.addrs())?;
        let auth_server = auth_server.run();

        let data = state.clone();
        let profile_server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .service(profile::show)
                .service(profile::update)
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;
        let profile_addr = bound(&profile_server.addrs())?;
        let profile_server = profile_server.run();

        let handles = vec![auth_server.handle(), profile_server.handle()];
        actix_web::rt::spawn(auth_server);
        actix_web::rt::spawn(profile_server);

        ::tracing::debug!(%auth_addr, %profile_addr, "stub services started");

        Ok(Self {
            auth_url: format!("http://{auth_addr}"),
            profile_url: format!("http://{profile_addr}"),
            state,
            handles,
        })
    }

    pub fn state(&self) -> &StubState {
        &self.state
    }

    pub async fn stop(self) {
        for handle in self.handles {
            handle.stop(false).await;
        }
    }
}

fn bound(addrs: &[SocketAddr]) -> io::Result<SocketAddr> {
    addrs
        .first()
        .copied()
        .ok_or_else(|| io::Error::other("server did not bind an address"))
}
