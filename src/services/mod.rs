mod error;
mod origin;
mod password;
mod payment;
mod session;
mod share;

pub use error::ServiceError;
pub use origin::{attachment_disposition, OriginClient};
pub use password::{hash_password, verify_password};
pub use payment::{HttpPaymentGateway, PaymentVerifier};
pub use session::{SessionClaims, SessionSigner};
pub use share::generate_share_token;
