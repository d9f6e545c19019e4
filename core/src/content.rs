//! Static site content: projects, skills, social links and copy.

use serde::Serialize;

use crate::config::CONTACT_EMAIL;

// =============================================================================
// Projects
// =============================================================================

/// Tech tags shown on a card before the "+N more" counter.
pub const TECH_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github_url: &'static str,
    pub featured: bool,
}

impl Project {
    /// Tags shown on the card.
    pub fn tech_preview(&self) -> &'static [&'static str] {
        &self.tech[..self.tech.len().min(TECH_PREVIEW)]
    }

    /// `"+N more"` for the hidden tags, if any.
    pub fn more_label(&self) -> Option<String> {
        let hidden = self.tech.len().saturating_sub(TECH_PREVIEW);
        (hidden > 0).then(|| format!("+{} more", hidden))
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bridge Between Investor & Business People",
        description: "A sophisticated platform connecting investors with promising startups, \
                      featuring real-time chat, proposal notifications, and AI-powered matching algorithms.",
        image: "/images/projects/investor-bridge-platform.png",
        tech: &["React.js", "Tailwind CSS", "Node.js", "Express.js", "MongoDB", "Socket.IO", "JWT Auth"],
        github_url: "https://github.com/sayan4312/Bridge",
        featured: true,
    },
    Project {
        title: "Placement Cell Management System",
        description: "Comprehensive management system for educational institutions with role-based \
                      authentication, eligibility filtering, and resume upload capabilities.",
        image: "/images/projects/placement-management-system.png",
        tech: &["React.js", "Tailwind CSS", "Node.js", "Express.js", "MongoDB", "JWT Tokens", "REST API"],
        github_url: "https://github.com/sayan4312/PlacementCell",
        featured: false,
    },
    Project {
        title: "Finance Tracker with Budget Goals",
        description: "Personal finance management app with expense tracking, budget analysis, \
                      goal setting, and interactive data visualization charts.",
        image: "/images/projects/finance-tracker-app.png",
        tech: &["React.js", "Chart.js", "Node.js", "Express.js", "MongoDB", "JWT Auth"],
        github_url: "https://github.com/sayan4312/ExpenseHive",
        featured: false,
    },
];

pub const PROFILE_URL: &str = "https://github.com/sayan4312";

// =============================================================================
// Skills
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Inline glyph standing in for an icon.
    pub glyph: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { glyph: "</>", name: "Frontend", description: "React.js, Tailwind CSS, JavaScript (ES6+), Responsive Design" },
    Skill { glyph: "⚙", name: "Backend", description: "Node.js, Express.js, MongoDB, REST APIs" },
    Skill { glyph: "⚡", name: "Animation", description: "GSAP, Locomotive Scroll, Framer Motion" },
    Skill { glyph: "🌐", name: "Real-Time Features", description: "Socket.IO (real-time chat, notifications)" },
    Skill { glyph: "◈", name: "3D & Graphics", description: "Spline, Basic Three.js Integration" },
    Skill { glyph: "🎨", name: "Performance", description: "Code Optimization, Core Web Vitals, SEO-friendly apps" },
    Skill { glyph: "</>", name: "Web Tech", description: "JWT Authentication, Role-Based Access, CRUD Operations" },
];

// =============================================================================
// Social links & contact info
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Whether the link leaves the site (opens in a new tab).
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", glyph: "GH", href: "https://github.com/sayan4312" },
    SocialLink { label: "LinkedIn", glyph: "in", href: "https://www.linkedin.com/in/sayan-das-292574246/" },
    SocialLink { label: "Email", glyph: "✉", href: "mailto:sayandas4312@gmail.com" },
];

/// Heading/value pairs of the "Let's Connect" card.
pub const CONTACT_INFO: &[(&str, &str)] = &[
    ("Email", CONTACT_EMAIL),
    ("Location", "Available for remote work worldwide"),
    ("Response Time", "Usually within 24 hours"),
];

// =============================================================================
// Copy
// =============================================================================

pub const HERO_TAGLINE: &str = "Crafting immersive digital experiences that push the boundaries of web \
                                technology. Specializing in modern React, animations, and cutting-edge 3D integration.";

/// Embedded 3D background scene.
pub const HERO_SCENE_URL: &str = "https://my.spline.design/holoblobs-EZk14rZDL8oVmLUNECA8VfDt/";

pub const PROFILE_IMAGE: &str = "/images/profile/profile-photo.png";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate Full Stack Web Developer who thrives on creating scalable, responsive, \
     and immersive digital experiences. With expertise in modern web technologies and \
     animation-driven design, I transform ideas into high-performing, visually engaging solutions.",
    "I believe in writing clean, optimized, and performance-driven code to solve real-world \
     challenges. My approach is focused on pushing boundaries, ensuring every product is not \
     just efficient but also interactive, intuitive, and future-ready.",
];

pub const PROJECTS_INTRO: &str = "A showcase of my latest work, featuring cutting-edge technologies and \
                                  innovative solutions that solve real-world problems.";

pub const CONTACT_INTRO: &str = "Ready to bring your ideas to life? Let's create something extraordinary \
                                 together. I'm always excited to work on innovative projects.";

pub const FOOTER_TAGLINE: &str = "Crafting the future of web experiences, one pixel at a time.";

pub const COPYRIGHT: &str = "© 2024 Sayan Das. All rights reserved.";

/// Floating dots behind the footer: (css position, size class).
pub const FOOTER_PARTICLES: &[(&str, &str)] = &[
    ("top: 25%; left: 16.6%", "particle particle-primary particle-md"),
    ("top: 50%; right: 25%", "particle particle-secondary particle-sm"),
    ("bottom: 33%; left: 33%", "particle particle-accent particle-lg"),
    ("top: 33%; right: 16.6%", "particle particle-primary particle-md"),
    ("bottom: 25%; right: 33%", "particle particle-secondary particle-sm"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_preview_and_more_label() {
        let bridge = &PROJECTS[0];
        assert_eq!(bridge.tech_preview(), &["React.js", "Tailwind CSS", "Node.js"]);
        assert_eq!(bridge.more_label().as_deref(), Some("+4 more"));

        let finance = &PROJECTS[2];
        assert_eq!(finance.more_label().as_deref(), Some("+3 more"));

        let small = Project { tech: &["Rust"], ..PROJECTS[0] };
        assert_eq!(small.tech_preview(), &["Rust"]);
        assert_eq!(small.more_label(), None);
    }

    #[test]
    fn test_single_featured_project() {
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let json = serde_json::to_value(PROJECTS[1]).unwrap();
        assert_eq!(json["githubUrl"], "https://github.com/sayan4312/PlacementCell");
        assert_eq!(json["tech"].as_array().map(Vec::len), Some(7));
    }

    #[test]
    fn test_skills_and_socials() {
        assert_eq!(SKILLS.len(), 7);
        let external: Vec<&str> = SOCIAL_LINKS
            .iter()
            .filter(|s| s.is_external())
            .map(|s| s.label)
            .collect();
        assert_eq!(external, vec!["GitHub", "LinkedIn"]);
        assert!(SOCIAL_LINKS[2].href.ends_with(CONTACT_EMAIL));
    }
}
