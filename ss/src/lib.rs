//! SessionStore - per-session state for planning sessions
//!
//! Holds everything a planning session accumulates between submission and
//! finalization: the original trip request, the generated itinerary bundle,
//! and the user's final selection. Each session owns three typed slots keyed
//! by [`SessionKey`]; values are stored serialized so the store does not
//! depend on the application's domain types.
//!
//! Lifecycle: created at request submission, mutated while the user
//! customizes, cleared when the session ends. The in-memory backing is the
//! only one shipped; any replacement (database row, serialized blob) must
//! preserve the same API.
//!
//! # Example
//!
//! ```ignore
//! use sessionstore::{SessionKey, SessionStore};
//!
//! let store = SessionStore::new();
//! let id = store.create();
//! store.put(&id, SessionKey::TripRequest, &request)?;
//! let back: TripRequest = store.get(&id, SessionKey::TripRequest)?.unwrap();
//! store.end(&id);
//! ```

mod store;

pub use store::{SessionError, SessionId, SessionKey, SessionStore};
