use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::project::{ProjectCard, ProjectCategory, ProjectStatus};

// fixed page content
//
// none of this changes at runtime, but keeping it as data (rather than inlined
// into the markup) lets the sections iterate over it and lets the tests count it

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=400&h=300&fit=crop&crop=center")
}

pub fn projects() -> Vec<ProjectCard> {
    let card = |id,
                title: &str,
                description: &str,
                photo: &str,
                category,
                technologies: &[&str],
                status,
                featured| ProjectCard {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        image_ref: unsplash(photo),
        category,
        technologies: strings(technologies),
        status,
        featured,
        demo_link: String::from("#"),
        code_link: String::from("#"),
    };

    vec![
        card(
            1,
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React, Node.js, and MongoDB featuring secure payments and real-time inventory management.",
            "photo-1556742049-0cfed4f6a45d",
            ProjectCategory::FullStack,
            &["React", "Node.js", "MongoDB", "Stripe", "JWT"],
            ProjectStatus::Completed,
            true,
        ),
        card(
            2,
            "Social Media Dashboard",
            "Modern social media analytics dashboard with real-time data visualization and comprehensive reporting tools.",
            "photo-1551288049-bebda4e38f71",
            ProjectCategory::Frontend,
            &["React", "Chart.js", "Tailwind", "API Integration"],
            ProjectStatus::Completed,
            false,
        ),
        card(
            3,
            "Task Management API",
            "RESTful API for task management with authentication, real-time notifications, and collaborative features.",
            "photo-1611224923853-80b023f02d71",
            ProjectCategory::Backend,
            &["Node.js", "Express", "Socket.io", "JWT", "MongoDB"],
            ProjectStatus::Completed,
            false,
        ),
        card(
            4,
            "Weather Forecast App",
            "Weather application with location-based forecasts, interactive maps, and severe weather alerts.",
            "photo-1504608524841-42fe6f032b4b",
            ProjectCategory::Frontend,
            &["React", "OpenWeather API", "Geolocation", "CSS3"],
            ProjectStatus::InProgress,
            true,
        ),
        card(
            5,
            "Blog Content Management",
            "Blog CMS with markdown support, SEO optimization, and content scheduling.",
            "photo-1486312338219-ce68d2c6f44d",
            ProjectCategory::FullStack,
            &["React", "Node.js", "MongoDB", "Markdown", "SEO"],
            ProjectStatus::Completed,
            false,
        ),
        card(
            6,
            "Real-time Chat Application",
            "Instant messaging app with group chat, file sharing, and video calling.",
            "photo-1577563908411-5077b6dc7624",
            ProjectCategory::FullStack,
            &["React", "Socket.io", "Node.js", "MongoDB", "JWT"],
            ProjectStatus::InProgress,
            true,
        ),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub features: Vec<String>,
    pub category: String,
}

pub fn services() -> Vec<Service> {
    let service = |title: &str, description: &str, photo: &str, features: &[&str], category: &str| {
        Service {
            title: title.to_owned(),
            description: description.to_owned(),
            image_ref: unsplash(photo),
            features: strings(features),
            category: category.to_owned(),
        }
    };

    vec![
        service(
            "Full Stack Web Development",
            "Complete web solutions for scalable applications with a modern architecture.",
            "photo-1627398242454-45a1465c2479",
            &["Custom Web Applications", "RESTful API Development", "Database Design", "Real-time Features"],
            "Development",
        ),
        service(
            "Frontend Development",
            "Interactive user interfaces with responsive layouts and accessible markup.",
            "photo-1555066931-4365d14bab8c",
            &["Responsive Design", "Component Libraries", "State Management", "Performance Optimization"],
            "Frontend",
        ),
        service(
            "Backend Development",
            "Server-side architecture with token authentication and well-shaped data stores.",
            "photo-1558494949-ef010cbdcc31",
            &["API Development", "Authentication", "Database Management", "Server Optimization"],
            "Backend",
        ),
        service(
            "UI/UX Design",
            "User-first experiences with wireframing, prototyping, and visual polish.",
            "photo-1586717791821-3f44a563fa4c",
            &["Wireframes", "Prototypes", "User Flows", "Design Systems"],
            "Design",
        ),
        service(
            "Performance Optimization",
            "Lazy loading, code splitting, and SEO work for faster pages.",
            "photo-1460925895917-afdab827c52f",
            &["Code Splitting", "SEO", "Lighthouse Score Boost", "Image Optimization"],
            "Optimization",
        ),
        service(
            "Maintenance & Support",
            "Updates, bug fixes, security patches, and feature work to keep an app running.",
            "photo-1581091226825-a6a2a5aee158",
            &["Bug Fixes", "Security Patches", "Uptime Monitoring", "Feature Updates"],
            "Support",
        ),
    ]
}

// one entry on the hackathon timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub icon: String,
    pub category: String,
    pub details: Vec<String>,
    pub technologies: Vec<String>,
    pub achievement: String,
    pub team_size: u32,
    pub featured: bool,
}

pub fn hackathons() -> Vec<Hackathon> {
    let entry = |id,
                 (title, subtitle, date, icon): (&str, &str, &str, &str),
                 category: &str,
                 details: &[&str],
                 technologies: &[&str],
                 achievement: &str,
                 team_size,
                 featured| Hackathon {
        id,
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        date: date.to_owned(),
        icon: icon.to_owned(),
        category: category.to_owned(),
        details: strings(details),
        technologies: strings(technologies),
        achievement: achievement.to_owned(),
        team_size,
        featured,
    };

    vec![
        entry(
            1,
            ("Hack&Chill Hackathon", "Finished in Top 10 Teams", "April 2024", "🏆"),
            "Healthcare Innovation",
            &[
                "Led the team to the final round of the Hack&Chill hackathon.",
                "Built ZenZone, a community site offering mental health support.",
                "Managed and guided the team throughout the event.",
                "Presented the project to judges and peers.",
            ],
            &["React", "Node.js", "MongoDB", "CSS3", "JWT"],
            "Top 10 Finalist",
            4,
            true,
        ),
        entry(
            2,
            ("Code Cubicle 1.0", "Ranked 7th among 500+ teams", "March 2024", "⚡"),
            "Competitive Programming",
            &[
                "Competed in a coding competition with hundreds of teams.",
                "Placed 7th through problem-solving and efficient algorithms.",
                "Worked through algorithmic challenges under time constraints.",
            ],
            &["EJS", "Node.js", "MongoDB", "Express.js"],
            "7th Place",
            4,
            true,
        ),
        entry(
            3,
            ("Smart India Hackathon", "National Level Participant", "February 2024", "🇮🇳"),
            "Smart City Solutions",
            &[
                "Took part in the national Smart India Hackathon.",
                "Developed a solution for smart city infrastructure management.",
                "Focused on IoT integration and real-time analytics for urban planning.",
            ],
            &["IoT", "Python", "React", "Firebase", "Arduino"],
            "National Participant",
            6,
            false,
        ),
        entry(
            4,
            ("HackInnovate 2023", "Winner - Best UI/UX Design", "December 2023", "🎨"),
            "Design & Development",
            &[
                "Won the Best UI/UX Design award.",
                "Created a fintech application with an intuitive interface.",
                "Applied accessibility and responsive design principles.",
            ],
            &["Figma", "React", "Tailwind CSS", "Framer Motion"],
            "Best UI/UX Winner",
            4,
            true,
        ),
        entry(
            5,
            ("CodeForGood Hackathon", "Social Impact Champion", "November 2023", "❤️"),
            "Social Impact",
            &[
                "Built a platform connecting students with educational resources.",
                "Added offline content access and multilingual support.",
            ],
            &["React Native", "Node.js", "MongoDB", "PWA"],
            "Social Impact Award",
            5,
            false,
        ),
        entry(
            6,
            ("TechCrunch Disrupt", "Startup Pitch Finalist", "September 2023", "🚀"),
            "Startup Pitch",
            &[
                "Pitched an EdTech startup idea to industry leaders and investors.",
                "Presented a business model with market analysis and revenue projections.",
            ],
            &["Business Model", "Market Research", "Pitch Deck"],
            "Pitch Finalist",
            3,
            true,
        ),
    ]
}

// the numbers shown above the timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HackathonStats {
    pub events: usize,
    pub featured: usize,
    pub technologies: usize,
}

pub fn hackathon_stats(entries: &[Hackathon]) -> HackathonStats {
    let technologies: BTreeSet<&str> = entries
        .iter()
        .flat_map(|h| h.technologies.iter().map(String::as_str))
        .collect();

    HackathonStats {
        events: entries.len(),
        featured: entries.iter().filter(|h| h.featured).count(),
        technologies: technologies.len(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

pub fn about_cards() -> Vec<InfoCard> {
    vec![
        InfoCard {
            icon: "</>",
            title: "Programming Languages",
            items: vec!["HTML", "CSS", "JavaScript", "Python", "C"],
        },
        InfoCard {
            icon: "🎓",
            title: "Education",
            items: vec![
                "Pursuing B.Tech in Computer Science (2023 - 2027).",
                "Senior secondary education, CBSE board (2022).",
                "Secondary education, CBSE board (2020).",
            ],
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tool {
    pub name: &'static str,
    pub icon_ref: &'static str,
}

pub fn tools() -> Vec<Tool> {
    [
        ("VS Code", "/assets/vscode.png"),
        ("MongoDB", "/assets/mongodb.png"),
        ("Express", "/assets/express.png"),
        ("React", "/assets/react.png"),
        ("Redux", "/assets/redux.png"),
        ("Linux", "/assets/linux.png"),
        ("Git", "/assets/git.png"),
        ("GitHub", "/assets/github.png"),
        ("Tailwind", "/assets/tailwind.png"),
        ("Node.js", "/assets/nodejs.png"),
    ]
    .into_iter()
    .map(|(name, icon_ref)| Tool { name, icon_ref })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn exactly_one_backend_project() {
        let backend = projects()
            .into_iter()
            .filter(|p| p.category == ProjectCategory::Backend)
            .count();
        assert_eq!(backend, 1);
    }

    #[test]
    fn hackathon_stats_count_distinct_technologies() {
        let entries = hackathons();
        let stats = hackathon_stats(&entries);

        assert_eq!(stats.events, 6);
        assert_eq!(stats.featured, 4);

        // React, Node.js and MongoDB repeat across events
        let total: usize = entries.iter().map(|h| h.technologies.len()).sum();
        assert!(stats.technologies < total);
        assert_eq!(hackathon_stats(&[]).technologies, 0);
    }

    #[test]
    fn services_have_features() {
        let services = services();
        assert_eq!(services.len(), 6);
        assert!(services.iter().all(|s| s.features.len() == 4));
    }
}
