//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{navigate_to, use_session, SessionProvider, SessionState};

mod guard;
pub use guard::{guard_outcome, GuardOutcome, RequireProfile, RequireSession};

mod navbar;
pub use navbar::{LogoutButton, Navbar};

mod forms;
pub use forms::{ErrorBanner, MediumSelect};
