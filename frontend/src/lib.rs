//! Folio - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page portfolio: preloader, animated hero,
//! scroll-revealed sections and a contact form relayed through EmailJS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (PageShell, ScrollObservers, Toaster)           │
//! │  ├── Preloader (while loading)                              │
//! │  ├── Navigation                                              │
//! │  ├── Hero ── About ── Projects ── Contact                    │
//! │  ├── Footer                                                  │
//! │  └── Toasts                                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time relay credentials and frontend constants
//! - [`components`] - UI components (Preloader, Navigation, sections, Toasts)
//! - [`services`] - Animation playback, scroll observers, DOM and relay

use folio::PageShell;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic and log hooks, then mount [`App`] on the body.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Folio - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Page-wide state
    let shell = create_rw_signal(PageShell::new());
    services::dom::set_body_overflow(shell.get_untracked().body_overflow());

    let observers = ScrollObservers::install();
    provide_context(observers.clone());

    let toaster = Toaster::new();
    provide_context(toaster);

    let loaded = Signal::derive(move || !shell.with(PageShell::is_loading));

    let on_loaded = {
        let observers = observers.clone();
        Callback::new(move |()| {
            let Some(true) = shell.try_update(PageShell::complete) else {
                return;
            };
            log::info!("✨ Page {}", shell.with_untracked(PageShell::state));
            services::dom::set_body_overflow(shell.with_untracked(PageShell::body_overflow));
            // Layout changes once the content is visible
            observers.refresh();
        })
    };

    on_cleanup(move || {
        services::dom::set_body_overflow("visible");
        observers.teardown();
        toaster.clear();
    });

    view! {
        <Show when=move || shell.with(PageShell::is_loading)>
            <Preloader on_complete=on_loaded/>
        </Show>

        <div class=move || shell.with(PageShell::content_class)>
            <Navigation/>
            <main>
                <Hero loaded/>
                <About/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>

        <Toasts/>
    }
}
