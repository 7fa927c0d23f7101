//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `layout` owns the document shell and site metadata; every other page
//! renders its body only and is wrapped by `layout::render_document`.

pub mod home;
pub mod layout;
