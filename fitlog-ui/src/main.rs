//! Fitlog Dashboard
//!
//! Workout tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Account registration and login
//! - Workout list with add and delete
//! - Calories chart for the last seven days
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The flows live in the `fitlog` core crate; this crate supplies
//! the browser pieces: `gloo-net` transport, `localStorage` sessions, canvas
//! chart, and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
