use std::sync::Arc;

use async_trait::async_trait;
use icon_service::domain::user::models::EmailAddress;
use icon_service::domain::user::models::User;
use icon_service::domain::user::ports::UserRepository;
use icon_service::domain::user::service::AccountService;
use icon_service::inbound::http::cookie::CookiePolicy;
use icon_service::inbound::http::router::create_router;
use icon_service::session::service::SessionService;
use icon_service::user::errors::UserError;
use tokio::sync::RwLock;

/// Signing secret shared by the spawned app and tests that need to
/// craft tokens directly.
pub const TEST_SECRET: &[u8] = b"integration_secret_at_least_32_bytes!";

/// In-memory user store standing in for Postgres.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists);
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let accounts = Arc::new(AccountService::new(Arc::new(
            MemoryUserRepository::default(),
        )));
        let sessions = Arc::new(SessionService::new(TEST_SECRET));
        let application = create_router(accounts, sessions, CookiePolicy { secure: false });

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        // Keep cookies between requests, never follow redirects: the
        // tests assert on the redirects themselves
        let api_client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build client");

        Self {
            address,
            api_client,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register and log in one user, leaving the session cookie in the jar.
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
    }
}
