//! # webinars-core
//!
//! Platform-independent pieces of the webinars front-end: the fixed catalog,
//! display helpers used by the cards, and the listing lifecycle.
//!
//! ## Listing lifecycle
//!
//! ```text
//!   mount ──► Loading ──┬──► Loaded(records)   (terminal until remount)
//!                ▲      │
//!                │      └──► Error(message)
//!                └──── retry ─────┘
//! ```
//!
//! The fetch itself is behind the [`WebinarSource`] trait so the browser can
//! plug in a timed or HTTP-backed source while tests use [`MockWebinarSource`].

pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod model;
pub mod source;
pub mod style;

pub use config::ListingConfig;
pub use error::{Result, WebinarError};
pub use format::{format_date, format_date_utc, initials, parse_date};
pub use listing::{FETCH_ERROR_MESSAGE, Listing, ListingState, view_details};
pub use model::{Webinar, catalog};
pub use source::{MockWebinarSource, WebinarSource};
pub use style::{CardStyle, card_style};
