//! Draft persistence: key scheme, never-throws facade, session layer

mod draft_store;
mod error;
mod key;
mod session;

pub use draft_store::DraftStore;
pub use error::DraftStoreError;
pub use key::{DraftKey, DraftKind, ParseKeyError, ANON_SCOPE};
pub use session::DraftSession;
