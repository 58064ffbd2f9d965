//! UI Components

use chrono::{FixedOffset, Local};
use leptos::prelude::*;
use webinars_core::{Webinar, card_style, format_date, initials, view_details};

/// Date as shown on a card: fixed offset if configured, viewer's timezone otherwise
pub fn display_date(iso: &str, utc_offset_minutes: Option<i32>) -> String {
    let offset = utc_offset_minutes.and_then(|minutes| {
        let offset = minutes.checked_mul(60).and_then(FixedOffset::east_opt);
        if offset.is_none() {
            tracing::warn!(
                "Ignoring UTC offset of {} minutes, using local time",
                minutes
            );
        }
        offset
    });

    let shown = match offset {
        Some(tz) => format_date(iso, &tz),
        None => format_date(iso, &Local),
    };
    shown.unwrap_or_else(|e| {
        tracing::warn!("{}", e);
        "Invalid Date".into()
    })
}

/// Full-page spinner while the listing loads
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-16 w-16 border-4 border-blue-200 border-t-blue-600 mx-auto mb-6"></div>
                <p class="text-xl font-medium text-blue-800">"Loading amazing webinars..."</p>
                <p class="text-sm text-blue-600 mt-2">"Preparing expert sessions for you"</p>
            </div>
        </div>
    }
}

/// Full-page error with a retry button
#[component]
pub fn ErrorPanel(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center">
            <div class="bg-white border border-red-200 rounded-2xl p-8 max-w-md text-center shadow-xl">
                <div class="text-red-500 mb-4">
                    <svg class="w-12 h-12 mx-auto" fill="currentColor" viewBox="0 0 20 20">
                        <path
                            fill-rule="evenodd"
                            d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7 4a1 1 0 11-2 0 1 1 0 012 0zm-1-9a1 1 0 00-1 1v4a1 1 0 102 0V6a1 1 0 00-1-1z"
                            clip-rule="evenodd"
                        />
                    </svg>
                </div>
                <h3 class="text-lg font-semibold text-gray-800 mb-2">"Oops! Something went wrong"</h3>
                <p class="text-red-600 font-medium mb-6">{message}</p>
                <button
                    class="px-6 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 transition-all duration-300 font-medium shadow-lg"
                    on:click=move |_| on_retry.run(())
                >
                    "Try Again"
                </button>
            </div>
        </div>
    }
}

/// Shown when the fetch succeeded but returned nothing
#[component]
pub fn EmptyPanel() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h3 class="text-2xl font-bold text-blue-800 mb-4">"No webinars available"</h3>
            <p class="text-blue-600 text-lg">"Check back later for upcoming expert sessions."</p>
        </div>
    }
}

/// One webinar card
///
/// `hovered` is shared by the whole grid, so at most one card is highlighted.
#[component]
pub fn WebinarCard(
    webinar: Webinar,
    index: usize,
    hovered: RwSignal<Option<String>>,
    utc_offset_minutes: Option<i32>,
) -> impl IntoView {
    let style = card_style(index);
    let Webinar { id, title, speaker, date } = webinar;

    let is_hovered = {
        let id = id.clone();
        Memo::new(move |_| hovered.with(|h| h.as_deref() == Some(id.as_str())))
    };
    let on_enter = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| hovered.set(Some(id.clone()))
    };
    let on_details = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| view_details(&id)
    };

    let speaker_initials = initials(&speaker);
    let when = display_date(&date, utc_offset_minutes);

    view! {
        <div
            class="group relative bg-white rounded-3xl shadow-lg hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 border border-blue-200 overflow-hidden flex flex-col h-full"
            on:mouseenter=on_enter
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class=move || {
                format!(
                    "{} transition-all duration-300 {}",
                    style.top_border,
                    if is_hovered.get() { "h-2" } else { "h-1.5" },
                )
            }></div>

            <div class="absolute top-6 right-6 z-10">
                <span class=move || {
                    format!(
                        "inline-flex items-center px-3 py-1.5 rounded-full text-xs font-semibold {} text-white shadow-lg transform transition-all duration-300 {}",
                        style.badge_class(is_hovered.get()),
                        if is_hovered.get() { "scale-110" } else { "" },
                    )
                }>{id}</span>
            </div>

            <div class="p-8 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-gray-800 mb-6 pr-20 leading-tight group-hover:text-blue-700 transition-colors duration-300">
                    {title}
                </h3>

                <div class="flex items-center mb-6 p-4 bg-gradient-to-r from-blue-50 to-indigo-50 rounded-2xl border border-blue-100">
                    <div class=move || {
                        format!(
                            "flex-shrink-0 w-12 h-12 {} rounded-xl flex items-center justify-center text-white font-bold text-sm shadow-lg transform transition-all duration-300 {}",
                            style.avatar,
                            if is_hovered.get() { "scale-110 rotate-3" } else { "" },
                        )
                    }>{speaker_initials}</div>
                    <div class="ml-4">
                        <p class="text-sm font-semibold text-gray-800">{speaker}</p>
                        <p class="text-xs text-blue-600 font-medium">"Healthcare Expert"</p>
                    </div>
                </div>

                <div class="flex items-center mb-8 text-sm text-blue-700 bg-blue-50 rounded-xl p-3 border border-blue-100">
                    <div class=format!("w-8 h-8 rounded-lg {} flex items-center justify-center mr-3 shadow-sm", style.date_icon)>
                        <svg class="w-4 h-4 text-white" fill="currentColor" viewBox="0 0 20 20">
                            <path
                                fill-rule="evenodd"
                                d="M6 2a1 1 0 00-1 1v1H4a2 2 0 00-2 2v10a2 2 0 002 2h12a2 2 0 002-2V6a2 2 0 00-2-2h-1V3a1 1 0 10-2 0v1H7V3a1 1 0 00-1-1zm0 5a1 1 0 000 2h8a1 1 0 100-2H6z"
                                clip-rule="evenodd"
                            />
                        </svg>
                    </div>
                    <span class="text-xs leading-relaxed font-medium">{when}</span>
                </div>

                <div class="mt-auto">
                    <button
                        class=format!("w-full {} text-white font-semibold py-4 px-6 rounded-2xl transition-all duration-300 shadow-lg hover:shadow-xl", style.button)
                        on:click=on_details
                    >
                        "VIEW DETAILS"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_with_offset() {
        assert_eq!(
            display_date("2025-06-15T10:00:00Z", Some(0)),
            "Sunday, June 15, 2025 at 10:00 AM"
        );
        assert_eq!(
            display_date("2025-06-15T10:00:00Z", Some(330)),
            "Sunday, June 15, 2025 at 03:30 PM"
        );
    }

    #[test]
    fn test_display_date_out_of_range_offset_uses_local() {
        // 24h and beyond is not a valid offset
        for minutes in [24 * 60, -24 * 60, i32::MAX] {
            assert_eq!(
                display_date("2025-06-15T10:00:00Z", Some(minutes)),
                display_date("2025-06-15T10:00:00Z", None)
            );
        }
    }

    #[test]
    fn test_display_date_invalid() {
        assert_eq!(display_date("soon", Some(0)), "Invalid Date");
    }
}
