use leptos::prelude::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <header
            id="header"
            class="h-screen bg-cover bg-center bg-no-repeat flex items-center justify-center text-center text-white"
            style="background-image: url('https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=1350&q=80')"
        >
            <div class="bg-black bg-opacity-60 p-8 rounded max-w-xl">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">"Welcome to My Portfolio"</h1>
                <p class="text-lg md:text-xl mb-6">
                    "I'm a Web Developer specializing in modern, responsive apps."
                </p>

                <div class="flex justify-center space-x-4 mb-6">
                    <a
                        href="#contact"
                        class="bg-blue-600 hover:bg-blue-700 text-white px-5 py-2 rounded font-semibold"
                    >
                        "Hire Me"
                    </a>
                    <a
                        href="#projects"
                        class="bg-white hover:bg-gray-200 text-blue-600 px-5 py-2 rounded font-semibold"
                    >
                        "View Projects"
                    </a>
                </div>

                <div class="flex justify-center space-x-4 text-xl">
                    <a
                        href="https://github.com/yourusername"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-400"
                        aria-label="GitHub Profile"
                    >
                        <i class="fab fa-github"></i>
                    </a>
                    <a
                        href="https://linkedin.com/in/yourusername"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-400"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="fab fa-linkedin"></i>
                    </a>
                    <a
                        href="https://twitter.com/yourusername"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-400"
                        aria-label="Twitter Profile"
                    >
                        <i class="fab fa-twitter"></i>
                    </a>
                </div>
            </div>
        </header>
    }
}
