use leptos::prelude::*;

use super::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-20 px-4 bg-white text-center">
            <h2 class="text-3xl font-bold text-blue-600 mb-6">"Services"</h2>
            <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(idx, service)| {
                        view! {
                            <div
                                class="bg-blue-100 text-blue-800 p-6 rounded shadow-md"
                                data-aos="zoom-in-right"
                                data-aos-delay=(idx * 100).to_string()
                            >
                                <h3 class="text-xl font-semibold text-blue-600">{service.title}</h3>
                                <p class="text-gray-700 mt-2">{service.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
