//! The portfolio itself: everything user-visible that isn't behavior lives
//! here, so retargeting the app to another person is a one-file edit.

pub const OWNER_NAME: &str = "Alex Carter";
pub const GREETING: &str = "Hello, I'm";
pub const TAGLINE_LEAD: &str = "I'm a ";

pub const ROLE_PHRASES: &[&str] = &[
    "Web Developer",
    "UI/UX Designer",
    "Mobile Developer",
    "Problem Solver",
];

pub const ABOUT_BODY: &str = "I build fast, friendly software for the web, \
mobile and the desktop. I care about small tools that start instantly, \
interfaces that stay out of the way, and shipping things people actually \
use. When I'm not coding I'm probably sketching interface ideas or hiking.";

pub struct Skill {
    pub label: &'static str,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { label: "HTML & CSS", level: 95 },
    Skill { label: "JavaScript", level: 90 },
    Skill { label: "Rust", level: 85 },
    Skill { label: "UI Design", level: 80 },
    Skill { label: "Mobile Development", level: 75 },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/alexcarter" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/alexcarter" },
    SocialLink { label: "Dribbble", url: "https://dribbble.com/alexcarter" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_nonempty() {
        assert!(!ROLE_PHRASES.is_empty());
        assert!(ROLE_PHRASES.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(!SKILLS.is_empty());
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
