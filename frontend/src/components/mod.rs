//! UI components of the portfolio page.
//!
//! # Layout Components
//! - [`Preloader`] - Full-screen intro shown until the page is ready
//! - [`Navigation`] - Fixed nav bar and mobile menu
//! - [`Footer`] - Links, socials and back-to-top
//!
//! # Sections
//! - [`Hero`] - Headline, calls to action, 3D backdrop
//! - [`About`] - Bio and skills
//! - [`Projects`] - Project cards
//! - [`Contact`] - Message form sent through EmailJS
//!
//! # Feedback
//! - [`Toasts`] - Notifications raised through a [`Toaster`]

mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod preloader;
mod projects;
pub mod toast;

pub use about::*;
pub use contact::*;
pub use footer::*;
pub use hero::*;
pub use navigation::*;
pub use preloader::*;
pub use projects::*;
pub use toast::{Toaster, Toasts};
