//! Webinars Page

use leptos::prelude::*;
use webinars_core::{Listing, ListingState, Webinar};

use crate::api;
use crate::components::{EmptyPanel, ErrorPanel, LoadingPanel, WebinarCard};

/// Which panel the page body shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Error(String),
    /// Loaded, but nothing to list
    Empty,
    Cards(Vec<Webinar>),
}

impl Panel {
    pub fn for_state(state: &ListingState) -> Self {
        match state {
            ListingState::Loading => Self::Loading,
            ListingState::Error(message) => Self::Error(message.clone()),
            ListingState::Loaded(webinars) if webinars.is_empty() => Self::Empty,
            ListingState::Loaded(webinars) => Self::Cards(webinars.clone()),
        }
    }
}

#[component]
pub fn WebinarsPage() -> impl IntoView {
    let config = api::config();
    let source = StoredValue::new(api::source_for(&config));
    let utc_offset_minutes = config.utc_offset_minutes;

    let listing = RwSignal::new(Listing::new());
    let hovered = RwSignal::new(None::<String>);

    let load = move || {
        if !listing.try_update(Listing::begin).unwrap_or(false) {
            return;
        }
        let source = source.get_value();
        leptos::task::spawn_local(async move {
            tracing::debug!("Fetching webinars from {}", source.name());
            let result = source.fetch().await;
            // No-op once the page is gone
            listing.try_update(|l| l.complete(result));
        });
    };

    let retry = Callback::new(move |(): ()| load());

    // Fetch on mount
    Effect::new(move |_| load());

    view! {
        {move || match listing.with(|l| Panel::for_state(l.state())) {
            Panel::Loading => view! { <LoadingPanel /> }.into_any(),
            Panel::Error(message) => {
                view! { <ErrorPanel message=message on_retry=retry /> }.into_any()
            }
            Panel::Empty => {
                view! {
                    <Catalog>
                        <EmptyPanel />
                    </Catalog>
                }
                .into_any()
            }
            Panel::Cards(webinars) => {
                view! {
                    <Catalog>
                        <WebinarGrid
                            webinars=webinars
                            hovered=hovered
                            utc_offset_minutes=utc_offset_minutes
                        />
                    </Catalog>
                }
                .into_any()
            }
        }}
    }
}

/// Page chrome around the listing body
#[component]
fn Catalog(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="container mx-auto px-4 py-12 relative">
                <header class="text-center mb-16">
                    <div class="inline-flex items-center justify-center w-20 h-20 bg-gradient-to-br from-blue-400 to-indigo-500 rounded-2xl mb-6 shadow-lg">
                        <span class="text-3xl">"🍼"</span>
                    </div>
                    <h1 class="text-5xl md:text-6xl font-bold text-blue-800 mb-6">"Babynama Webinars"</h1>
                    <p class="text-xl text-blue-700 max-w-3xl mx-auto leading-relaxed">
                        "Join our expert-led sessions designed for busy parents seeking reliable guidance and support"
                    </p>
                    <ul class="mt-8 flex justify-center space-x-6 text-sm text-blue-600">
                        <li>"Expert Speakers"</li>
                        <li>"Interactive Sessions"</li>
                        <li>"Practical Tips"</li>
                    </ul>
                </header>

                {children()}
            </div>
        </div>
    }
}

#[component]
fn WebinarGrid(
    webinars: Vec<Webinar>,
    hovered: RwSignal<Option<String>>,
    utc_offset_minutes: Option<i32>,
) -> impl IntoView {
    let cards = webinars
        .into_iter()
        .enumerate()
        .map(|(index, webinar)| {
            view! {
                <WebinarCard
                    webinar=webinar
                    index=index
                    hovered=hovered
                    utc_offset_minutes=utc_offset_minutes
                />
            }
        })
        .collect_view();

    view! { <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webinars_core::{FETCH_ERROR_MESSAGE, catalog};

    #[test]
    fn test_loading_state_shows_spinner() {
        assert_eq!(Panel::for_state(&ListingState::Loading), Panel::Loading);
    }

    #[test]
    fn test_error_state_shows_message() {
        let state = ListingState::Error(FETCH_ERROR_MESSAGE.into());
        assert_eq!(
            Panel::for_state(&state),
            Panel::Error(FETCH_ERROR_MESSAGE.into())
        );
    }

    #[test]
    fn test_no_records_shows_empty_panel() {
        let panel = Panel::for_state(&ListingState::Loaded(Vec::new()));
        assert_eq!(panel, Panel::Empty);
        assert_ne!(panel, Panel::Loading);
        assert!(!matches!(panel, Panel::Error(_)));
    }

    #[test]
    fn test_records_show_every_card() {
        let panel = Panel::for_state(&ListingState::Loaded(catalog()));
        assert_eq!(panel, Panel::Cards(catalog()));
    }
}
