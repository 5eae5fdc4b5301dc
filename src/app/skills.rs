use leptos::prelude::*;

use super::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 bg-white text-center">
            <h2 class="text-3xl font-bold text-blue-600 mb-8">"Skills"</h2>
            <div class="flex flex-wrap justify-center gap-6 max-w-5xl mx-auto">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(idx, skill)| {
                        view! {
                            <div
                                class="flex flex-col items-center bg-gray-50 p-5 rounded-lg shadow-md w-28 transform transition duration-300 hover:scale-110 hover:bg-blue-50 hover:shadow-xl"
                                data-aos="zoom-in"
                                data-aos-delay=(idx * 100).to_string()
                            >
                                <i class=format!(
                                    "{} text-3xl {} mb-2 transition-transform duration-300",
                                    skill.icon,
                                    skill.color,
                                )></i>
                                <p class="text-gray-800 font-medium">{skill.name}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
