//! Reusable UI pieces around the session core.

pub mod auth_panel;
pub mod guarded;
pub mod mock_banner;
