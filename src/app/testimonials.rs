use leptos::prelude::*;

use super::content::{Testimonial, TESTIMONIALS};

const STAR_FILLED: &str = "fa-star fas text-yellow-400";
const STAR_EMPTY: &str = "fa-star far text-gray-300";

/// One class per star icon; the first `rating` stars render filled.
fn star_classes(rating: u8) -> Vec<&'static str> {
    (0u8..5)
        .map(|i| if i < rating { STAR_FILLED } else { STAR_EMPTY })
        .collect()
}

#[component]
fn Stars(rating: u8) -> impl IntoView {
    star_classes(rating)
        .into_iter()
        .map(|class| view! { <i class=class></i> })
        .collect_view()
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, delay: usize) -> impl IntoView {
    view! {
        <div
            class="swiper-slide p-6 bg-white rounded-lg shadow"
            data-aos="zoom-out"
            data-aos-delay=delay.to_string()
        >
            <img
                src=testimonial.image
                alt=testimonial.name
                class="w-16 h-16 rounded-full mx-auto mb-4"
            />
            <p class="text-gray-600 italic mb-2">{format!("\"{}\"", testimonial.quote)}</p>
            <div class="mb-2">
                <Stars rating=testimonial.rating />
            </div>
            <h4 class="mt-2 font-semibold text-blue-600">{testimonial.name}</h4>
        </div>
    }
}

/// The slide markup the carousel library takes over at page setup; until
/// then (or if the library never loads) it renders as a static list.
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 px-4 bg-gray-100 text-center">
            <h2 class="text-3xl font-bold text-blue-600 mb-8">"Testimonials"</h2>
            <div class="swiper max-w-xl mx-auto">
                <div class="swiper-wrapper">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(idx, testimonial)| {
                            view! { <TestimonialCard testimonial delay=idx * 100 /> }
                        })
                        .collect_view()}
                </div>
                <div class="swiper-pagination mt-6"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_star_count_matches_rating() {
        for rating in 0..=5u8 {
            let classes = star_classes(rating);
            assert_eq!(classes.len(), 5);
            let filled = classes.iter().filter(|c| **c == STAR_FILLED).count();
            assert_eq!(filled, rating as usize);
        }
    }

    #[test]
    fn every_testimonial_renders_five_stars() {
        for testimonial in TESTIMONIALS.iter() {
            let classes = star_classes(testimonial.rating);
            let filled = classes.iter().filter(|c| **c == STAR_FILLED).count();
            let empty = classes.iter().filter(|c| **c == STAR_EMPTY).count();
            assert_eq!(filled + empty, 5);
            assert_eq!(filled, testimonial.rating as usize);
        }
    }
}
