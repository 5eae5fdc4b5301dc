use leptos::prelude::*;

use super::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 bg-white text-center">
            <h2 class="text-3xl font-bold text-blue-600 mb-10">"Projects"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(idx, project)| {
                        view! {
                            <div
                                class="bg-gray-50 rounded-lg shadow-md hover:shadow-xl transition duration-300 overflow-hidden"
                                data-aos="zoom-in-left"
                                data-aos-delay=(idx * 100).to_string()
                            >
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-48 object-cover"
                                />
                                <div class="p-5">
                                    <h3 class="text-xl font-semibold text-blue-600 mb-2">
                                        {project.title}
                                    </h3>
                                    <p class="text-gray-600 text-sm">{project.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
