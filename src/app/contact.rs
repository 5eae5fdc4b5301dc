use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 bg-gray-100 text-center" data-aos="fade-in">
            <h2 class="text-3xl font-bold mb-4 text-blue-600">"Contact Us"</h2>
            <form
                class="max-w-md mx-auto space-y-4"
                // there is no submission backend; swallow the event so the
                // page doesn't reload
                on:submit=move |ev| ev.prevent_default()
            >
                <input type="text" placeholder="Name" class="w-full p-2 border rounded" />
                <input type="email" placeholder="Email" class="w-full p-2 border rounded" />
                <textarea placeholder="Message" class="w-full p-2 border rounded h-32"></textarea>
                <button
                    type="submit"
                    class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700"
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}
