//! REST API endpoint tests

mod auth_tests;
mod threads_tests;
mod users_tests;
