//! Live server harness for end-to-end scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally and the page model is `!Send`. The
//! server is stopped when the harness is dropped, even if a test panics.

use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use backend::Trace;
use backend::domain::ports::MemberRepository;
use backend::domain::{DirectoryFilter, Member};
use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::routes::routes;
use backend::inbound::http::session::session_middleware;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::InMemoryMemberRepository;
use chrono::NaiveDate;
use fragment_stream::TargetId;
use live_page::{FragmentFetcher, Page};
use reqwest::{Client, StatusCode};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use url::Url;

/// Password every seeded member signs in with.
pub const SEEDED_PASSWORD: &str = "password";

pub struct Harness {
    runtime: Runtime,
    local: LocalSet,
    server: ServerHandle,
    pub origin: Url,
    pub repo: Arc<InMemoryMemberRepository>,
}

impl Harness {
    /// Seed a small community and serve it on an ephemeral port.
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let local = LocalSet::new();
        let repo = Arc::new(InMemoryMemberRepository::new(Arc::new(
            mockable::DefaultClock,
        )));

        let (origin, server) = local.block_on(&runtime, async {
            seed(&repo).await;
            spawn_server(repo.clone())
        });

        Self {
            runtime,
            local,
            server,
            origin,
            repo,
        }
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.local.block_on(&self.runtime, future)
    }

    /// Cookie-aware client; pass it to [`Self::fetcher`] to share the session.
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("http client")
    }

    pub fn fetcher(&self, client: &Client) -> FragmentFetcher {
        FragmentFetcher::with_client(client.clone(), self.origin.clone())
    }

    pub fn url(&self, path: &str) -> Url {
        self.origin.join(path).expect("same-origin url")
    }

    /// Earliest seeded member.
    pub fn first_member(&self) -> Member {
        self.block_on(self.repo.list(&DirectoryFilter::default(), 1))
            .expect("list members")
            .into_iter()
            .next()
            .expect("seeded member")
    }

    pub fn reload(&self, member: &Member) -> Member {
        self.block_on(self.repo.find(member.id()))
            .expect("find member")
            .expect("member still stored")
    }

    /// Sign `email` in on `client`, returning the final status after redirects.
    pub fn sign_in(&self, client: &Client, email: &str) -> StatusCode {
        let url = self.url("/users/sign_in");
        self.block_on(async {
            client
                .post(url)
                .form(&[("user[email]", email), ("user[password]", SEEDED_PASSWORD)])
                .send()
                .await
                .expect("sign-in request")
                .status()
        })
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let server = self.server.clone();
        self.local.block_on(&self.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Page holding the profile regions and an empty modal mount.
pub fn profile_page(member: &Member) -> Page {
    let region = |id: &str| TargetId::new(id).expect("valid region id");
    Page::new()
        .with_region(
            region("member-profile"),
            format!("<div id=\"member-profile\"><h1>{}</h1></div>", member.full_name()),
        )
        .with_region(
            region("member-description"),
            "<div id=\"member-description\"><p>old</p></div>",
        )
        .with_region(region("modal"), "<div id=\"modal\"></div>")
}

async fn seed(repo: &InMemoryMemberRepository) {
    let settings = ExampleDataSettings {
        enabled: true,
        seed_name: Some("tiny".to_owned()),
        count: None,
        registry_path: None,
    };
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
    seed_example_data_on_startup(&settings, repo, today)
        .await
        .expect("seeding succeeds");
}

fn spawn_server(repo: Arc<InMemoryMemberRepository>) -> (Url, ServerHandle) {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let http_state = web::Data::new(HttpState::from_repository(repo));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .app_data(health_state.clone())
            .wrap(session_middleware(key.clone(), false, SameSite::Lax))
            .wrap(Trace)
            .configure(routes)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    let origin = Url::parse(&format!("http://{addr}/")).expect("origin url");
    (origin, handle)
}
