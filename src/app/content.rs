//! The literal display content for every page section. Nothing here is
//! constructed at runtime; components render these lists as-is.

/// In-page navigation target. `id` doubles as the section anchor id.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub id: &'static str,
}

/// Navigation links in document order of the sections they point at.
pub static NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", id: "header" },
    NavLink { label: "About", id: "about" },
    NavLink { label: "Skills", id: "skills" },
    NavLink { label: "Services", id: "services" },
    NavLink { label: "Projects", id: "projects" },
    NavLink { label: "Testimonials", id: "testimonials" },
    NavLink { label: "Contact", id: "contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static SKILLS: [Skill; 8] = [
    Skill { name: "HTML", icon: "fa-brands fa-html5", color: "text-orange-600" },
    Skill { name: "CSS", icon: "fa-brands fa-css3-alt", color: "text-blue-600" },
    Skill { name: "JavaScript", icon: "fa-brands fa-js", color: "text-yellow-500" },
    Skill { name: "Bootstrap", icon: "fa-brands fa-bootstrap", color: "text-purple-600" },
    Skill { name: "Tailwind", icon: "fa-solid fa-wind", color: "text-sky-400" },
    Skill { name: "React", icon: "fa-brands fa-react", color: "text-cyan-500" },
    Skill { name: "Node.js", icon: "fa-brands fa-node-js", color: "text-green-600" },
    Skill { name: "Firebase", icon: "fa-solid fa-fire", color: "text-orange-500" },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Web Design",
        description: "Modern UI/UX design with mobile-first approach.",
    },
    Service {
        title: "Web Development",
        description: "Full-stack development using React and Firebase.",
    },
    Service {
        title: "SEO",
        description: "Optimize websites for search engines and performance.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Portfolio Website",
        image: "https://via.placeholder.com/400x250?text=Portfolio",
        description: "A personal portfolio to showcase my projects and skills.",
    },
    Project {
        title: "Movie Streaming Site",
        image: "https://via.placeholder.com/400x250?text=Movie+Site",
        description: "A responsive movie streaming site built with Firebase.",
    },
    Project {
        title: "Social Media App",
        image: "https://via.placeholder.com/400x250?text=Social+App",
        description: "A social media platform with posts, likes, and comments.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
    /// Filled stars out of 5.
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Doe",
        quote: "This service is amazing! Highly recommend to everyone.",
        image: "https://i.pravatar.cc/100?img=1",
        rating: 5,
    },
    Testimonial {
        name: "Jane Smith",
        quote: "Top-notch experience and incredible support.",
        image: "https://i.pravatar.cc/100?img=2",
        rating: 4,
    },
    Testimonial {
        name: "Alex Johnson",
        quote: "Great work! Would definitely collaborate again.",
        image: "https://i.pravatar.cc/100?img=3",
        rating: 5,
    },
];

pub static BIO_SHORT: &str = "I'm a passionate web developer with experience in building dynamic and responsive websites using React, Tailwind CSS, and modern tools. I specialize in creating user-friendly, high-performance applications that solve real-world problems and deliver excellent user experiences.";

pub static BIO_EXTENDED: &str = "I am also experienced in backend technologies, managing databases, and deploying full-stack projects. My goal is to build meaningful digital solutions that make an impact.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_cover_the_page_sections_in_order() {
        let ids = NAV_LINKS.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [
                "header",
                "about",
                "skills",
                "services",
                "projects",
                "testimonials",
                "contact"
            ]
        );
    }

    #[test]
    fn nav_link_ids_are_unique() {
        let mut ids = NAV_LINKS.iter().map(|l| l.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }

    #[test]
    fn testimonial_ratings_are_renderable() {
        for t in TESTIMONIALS.iter() {
            assert!(t.rating <= 5, "{} has rating {}", t.name, t.rating);
        }
    }
}
