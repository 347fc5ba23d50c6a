//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are display shells. Access control lives in the `Guarded` wrapper
//! applied by the route table, never inside a page.

pub mod home;
pub mod login;
pub mod portal;
pub mod register;
