use leptos::prelude::*;

use super::content::NAV_LINKS;
use super::scroll::use_active_section;

fn nav_link_class(active: Option<&str>, id: &str) -> &'static str {
    if active == Some(id) {
        "text-blue-600 font-semibold"
    } else {
        "text-gray-700 hover:text-blue-600"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let active = use_active_section();

    view! {
        <nav class="bg-white shadow-md sticky top-0 z-50">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex justify-between items-center py-4">
                    <div class="text-2xl font-bold text-blue-600">"MySite"</div>
                    <div class="hidden md:flex space-x-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class=move || nav_link_class(active(), id)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:hidden">
                        <button
                            class="text-gray-700"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <svg
                                class="w-6 h-6"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                                xmlns="http://www.w3.org/2000/svg"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || {
                                        if menu_open() {
                                            "M6 18L18 6M6 6l12 12"
                                        } else {
                                            "M4 6h16M4 12h16M4 18h16"
                                        }
                                    }
                                />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden px-4 pb-4 space-y-2">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| {
                                        let id = link.id;
                                        view! {
                                            <a
                                                href=format!("#{id}")
                                                class=move || {
                                                    format!("block {}", nav_link_class(active(), id))
                                                }
                                                // following a link also dismisses the overlay
                                                on:click=move |_| set_menu_open(false)
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_id_is_highlighted() {
        for link in NAV_LINKS.iter() {
            let class = nav_link_class(Some("skills"), link.id);
            assert_eq!(class.contains("font-semibold"), link.id == "skills");
        }
    }

    #[test]
    fn no_active_section_highlights_nothing() {
        for link in NAV_LINKS.iter() {
            assert!(!nav_link_class(None, link.id).contains("font-semibold"));
        }
    }
}
