//! Home Page

use leptos::prelude::*;

const LOGO_URL: &str = "https://babynama.com/_next/static/media/logo-light.f8d530c6.svg";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center p-24 bg-gray-50">
            <div class="text-center">
                <img src=LOGO_URL alt="Babynama Logo" width="150" height="35" class="mx-auto mb-8" />
                <h1 class="text-4xl font-bold text-gray-800 mb-2">
                    "Welcome to the Babynama Intern Assignment"
                </h1>
                <p class="text-lg text-gray-600">
                    "Your task is to build the feature at the " <code>"/webinars"</code> " page."
                </p>
                <p class="mt-4 text-gray-500">"Good luck!"</p>

                <div class="mt-8">
                    <a
                        href="/webinars"
                        class="inline-block bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-6 rounded-lg transition-all duration-300 shadow-lg"
                    >
                        "Explore Webinars"
                    </a>
                </div>
            </div>
        </div>
    }
}
