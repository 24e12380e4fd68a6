//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns section layout and delegates rendering details to
//! `components`.

pub mod home;
