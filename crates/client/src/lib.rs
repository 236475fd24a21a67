//! Meshdeck client state container.
//!
//! An explicitly constructed, dependency-injected mirror of the server
//! entities: session, models, users, and settings modules composed by
//! [`AppStore`]. Mutations are optimistic — local state changes first, the
//! network call follows, and failures roll back to the pre-mutation snapshot
//! and surface a notice on the [`NoticeBus`].
//!
//! [`NoticeBus`]: notice::NoticeBus

pub mod error;
pub mod models;
pub mod notice;
pub mod session;
pub mod settings;
pub mod store;
pub mod transport;
pub mod users;

pub use error::ClientError;
pub use notice::{Notice, NoticeBus, NoticeLevel};
pub use store::AppStore;
pub use transport::{HttpTransport, Transport};
