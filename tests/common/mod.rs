//! Shared helpers for the web API tests: in-memory repository
//! implementations and a ready-to-use test server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use mediakeep::{
    adapters::{router::build_router, state::AppState},
    application::{
        dto::{file_dto::NewFileRecord, user_dto::NewUserAccount},
        error::ApplicationError,
        repositories::{file_repository::FileRepository, user_repository::UserRepository},
        services::PaymentGateway,
    },
    domain::{
        config::AppConfig,
        models::{
            file::FileRecord,
            payment::GatewayOrder,
            user::{Tier, UserAccount},
        },
        policy::quota::QuotaConfig,
    },
    services::{OriginClient, PaymentVerifier, SessionSigner},
};

pub const TEST_SESSION_SECRET: &str = "test-session-secret";
pub const TEST_PAYMENT_SECRET: &str = "test-payment-secret";
pub const TEST_PASSWORD: &str = "password123";

#[derive(Default)]
pub struct MemoryFileRepository {
    files: Mutex<Vec<FileRecord>>,
}

impl MemoryFileRepository {
    pub fn get(&self, id: Uuid) -> Option<FileRecord> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, ApplicationError> {
        let record = FileRecord {
            id: Uuid::new_v4(),
            owner_id: new_file.owner_id,
            name: new_file.name,
            url: new_file.url,
            thumbnail_url: new_file.thumbnail_url,
            file_type: new_file.file_type,
            size: new_file.size,
            file_extension: new_file.file_extension,
            is_public: false,
            share_id: None,
            created_at: Utc::now(),
        };
        self.files.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<FileRecord, ApplicationError> {
        self.get(id).ok_or(ApplicationError::NotFound)
    }

    async fn find_by_share_id(&self, share_id: &str) -> Result<FileRecord, ApplicationError> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.is_public && f.share_id.as_deref() == Some(share_id))
            .cloned()
            .ok_or(ApplicationError::NotFound)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<FileRecord>, ApplicationError> {
        let mut files: Vec<FileRecord> = self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        // Stable sort then reverse: ties keep later insertions first,
        // matching the store's newest-first contract.
        files.sort_by_key(|f| f.created_at);
        files.reverse();
        Ok(files)
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, ApplicationError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.owner_id == owner_id)
            .count() as u64)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ApplicationError> {
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|f| f.id != id);
        if files.len() == before {
            return Err(ApplicationError::NotFound);
        }
        Ok(())
    }

    async fn set_share(&self, id: Uuid, share_id: &str) -> Result<FileRecord, ApplicationError> {
        let mut files = self.files.lock().unwrap();
        let file = files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(ApplicationError::NotFound)?;
        file.is_public = true;
        if file.share_id.is_none() {
            file.share_id = Some(share_id.to_string());
        }
        Ok(file.clone())
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<UserAccount>>,
}

impl MemoryUserRepository {
    pub fn get_by_email(&self, email: &str) -> Option<UserAccount> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUserAccount) -> Result<UserAccount, ApplicationError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(ApplicationError::Validation(
                "email already registered".to_string(),
            ));
        }
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            google_id: new_user.google_id,
            tier: Tier::Free,
            created_at: Utc::now(),
        };
        users.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<UserAccount, ApplicationError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApplicationError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<UserAccount, ApplicationError> {
        self.get_by_email(email).ok_or(ApplicationError::NotFound)
    }

    async fn set_tier(&self, email: &str, tier: Tier) -> Result<UserAccount, ApplicationError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(ApplicationError::NotFound)?;
        user.tier = tier;
        Ok(user.clone())
    }
}

/// Gateway stub: echoes the request back as a created order.
pub struct StubPaymentGateway;

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ApplicationError> {
        Ok(GatewayOrder {
            id: "order_test_1".to_string(),
            amount,
            currency: currency.to_string(),
            receipt: Some(receipt.to_string()),
            status: Some("created".to_string()),
        })
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        database_url: "postgres://unused".to_string(),
        session_secret: TEST_SESSION_SECRET.to_string(),
        public_base_url: "http://localhost:3000".to_string(),
        payment_key_id: "rzp_test_key".to_string(),
        payment_key_secret: TEST_PAYMENT_SECRET.to_string(),
        payment_api_url: "http://localhost:0".to_string(),
        google_client_id: None,
        google_client_secret: None,
        cdn_public_key: None,
        cors_allowed_origins: None,
        quota: QuotaConfig::default(),
    }
}

/// Account store whose backend is down: every call fails the same way a
/// lost database connection would.
pub struct UnavailableUserRepository;

impl UnavailableUserRepository {
    fn error() -> ApplicationError {
        ApplicationError::DatabaseError("connection refused".to_string())
    }
}

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn create(&self, _new_user: NewUserAccount) -> Result<UserAccount, ApplicationError> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<UserAccount, ApplicationError> {
        Err(Self::error())
    }

    async fn find_by_email(&self, _email: &str) -> Result<UserAccount, ApplicationError> {
        Err(Self::error())
    }

    async fn set_tier(&self, _email: &str, _tier: Tier) -> Result<UserAccount, ApplicationError> {
        Err(Self::error())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub files: Arc<MemoryFileRepository>,
    pub users: Arc<MemoryUserRepository>,
}

pub fn spawn_app() -> TestApp {
    let files = Arc::new(MemoryFileRepository::default());
    let users = Arc::new(MemoryUserRepository::default());

    let state = AppState {
        config: Arc::new(test_config()),
        user_repository: users.clone() as Arc<dyn UserRepository>,
        file_repository: files.clone() as Arc<dyn FileRepository>,
        payment_gateway: Arc::new(StubPaymentGateway) as Arc<dyn PaymentGateway>,
        payment_verifier: Arc::new(PaymentVerifier::new(TEST_PAYMENT_SECRET)),
        session_signer: Arc::new(SessionSigner::new(TEST_SESSION_SECRET)),
        origin_client: OriginClient::new(),
    };

    let server = TestServer::new(build_router(state)).expect("Failed to create test server");

    TestApp {
        server,
        files,
        users,
    }
}

/// Server wired to an account store that is down.
pub fn spawn_app_with_unavailable_users() -> TestServer {
    let state = AppState {
        config: Arc::new(test_config()),
        user_repository: Arc::new(UnavailableUserRepository) as Arc<dyn UserRepository>,
        file_repository: Arc::new(MemoryFileRepository::default()) as Arc<dyn FileRepository>,
        payment_gateway: Arc::new(StubPaymentGateway) as Arc<dyn PaymentGateway>,
        payment_verifier: Arc::new(PaymentVerifier::new(TEST_PAYMENT_SECRET)),
        session_signer: Arc::new(SessionSigner::new(TEST_SESSION_SECRET)),
        origin_client: OriginClient::new(),
    };

    TestServer::new(build_router(state)).expect("Failed to create test server")
}

/// Register an account and return a session token for it.
pub async fn register_and_login(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), 201, "registration failed");

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), 200, "login failed");

    response.json::<Value>()["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Record an upload for the given session and return the response body.
pub async fn create_file(server: &TestServer, token: &str, name: &str, url: &str) -> Value {
    let response = server
        .post("/api/files")
        .authorization_bearer(token)
        .json(&json!({
            "name": name,
            "url": url,
            "size": 1024,
            "fileType": "image",
            "fileExtension": "png",
        }))
        .await;
    assert_eq!(response.status_code(), 201, "file creation failed");
    response.json::<Value>()
}
