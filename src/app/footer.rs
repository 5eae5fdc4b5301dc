use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white text-center py-4 shadow-inner">
            <p class="text-gray-600">
                {format!("© {} MySite. All rights reserved.", env!("BUILD_YEAR"))}
            </p>
        </footer>
    }
}
