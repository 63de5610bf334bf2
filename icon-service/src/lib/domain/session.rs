pub mod errors;
pub mod guard;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::SessionError;
pub use guard::with_session;
pub use guard::GuardOptions;
pub use guard::Guarded;
pub use models::Refresh;
pub use models::Session;
pub use models::SessionUser;
pub use ports::SessionStore;
pub use service::SessionService;
