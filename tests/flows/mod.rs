//! End-to-end flow tests over the wired application core.

mod admin_tests;
mod library_tests;
mod permission_tests;
mod session_tests;
mod store_tests;
