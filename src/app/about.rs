use leptos::prelude::*;

use super::content::{BIO_EXTENDED, BIO_SHORT};

#[component]
pub fn About() -> impl IntoView {
    // One-way toggle: once expanded there is no control to collapse again
    let (bio_expanded, set_bio_expanded) = signal(false);

    view! {
        <section id="about" class="py-16 px-4 bg-white text-gray-800" data-aos="fade-up">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center gap-10">
                <div class="w-full md:w-1/2 flex justify-center">
                    <img
                        src="/profile.png"
                        alt="Profile"
                        class="rounded-full w-64 h-64 object-cover shadow-lg"
                    />
                </div>

                <div class="w-full md:w-1/2 text-center md:text-left">
                    <h2 class="text-3xl font-bold mb-4">"About Me"</h2>
                    <p class="text-lg mb-4">
                        {move || {
                            if bio_expanded() {
                                format!("{BIO_SHORT} {BIO_EXTENDED}")
                            } else {
                                BIO_SHORT.to_string()
                            }
                        }}
                    </p>
                    {move || {
                        (!bio_expanded())
                            .then(|| {
                                view! {
                                    <button
                                        class="text-blue-600 hover:underline font-medium"
                                        on:click=move |_| set_bio_expanded(true)
                                    >
                                        "See More"
                                    </button>
                                }
                            })
                    }}
                </div>
            </div>
        </section>
    }
}
