//! Demo content inserted when a [`MemStorage`](super::MemStorage) is built.

use crate::schema::{NewProject, NewSkill, ProjectCategory, SkillCategory};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/600/400";

/// The six sample projects, in display order.
pub fn projects() -> Vec<NewProject> {
    use ProjectCategory::*;

    [
        (
            "E-Commerce Platform",
            "A full-featured e-commerce platform built with Laravel and Vue.js, featuring payment integration, inventory management, and admin dashboard.",
            Laravel,
            ["Laravel", "Vue.js", "MySQL"],
            true,
        ),
        (
            "Task Management App",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
            React,
            ["React", "Redux", "Firebase"],
            true,
        ),
        (
            "Content Management System",
            "A powerful CMS built with Laravel, featuring role-based permissions, content scheduling, and SEO optimization tools.",
            Laravel,
            ["Laravel", "Blade", "PostgreSQL"],
            true,
        ),
        (
            "Weather Dashboard",
            "A responsive weather dashboard with location-based forecasts, interactive charts, and severe weather alerts.",
            React,
            ["React", "Chart.js", "API Integration"],
            false,
        ),
        (
            "Real Estate Platform",
            "A comprehensive real estate platform with property listings, virtual tours, mortgage calculators, and agent management.",
            Fullstack,
            ["Laravel", "React", "Maps API"],
            true,
        ),
        (
            "Analytics Dashboard",
            "A social media analytics dashboard with real-time data visualization, performance metrics, and automated reporting features.",
            Fullstack,
            ["React", "D3.js", "Node.js"],
            false,
        ),
    ]
    .into_iter()
    .map(|(title, description, category, technologies, featured)| {
        NewProject::new(title, description, category, technologies)
            .demo_url("#")
            .github_url("#")
            .image_url(PLACEHOLDER_IMAGE)
            .featured(featured)
    })
    .collect()
}

/// The twelve sample skills, grouped by category.
pub fn skills() -> Vec<NewSkill> {
    use SkillCategory::*;

    [
        ("Laravel", Backend, 95),
        ("PHP", Backend, 90),
        ("Node.js", Backend, 80),
        ("React", Frontend, 85),
        ("Vue.js", Frontend, 80),
        ("TypeScript", Frontend, 75),
        ("MySQL", Database, 90),
        ("PostgreSQL", Database, 80),
        ("MongoDB", Database, 70),
        ("Docker", Tools, 85),
        ("Git", Tools, 95),
        ("AWS", Tools, 75),
    ]
    .into_iter()
    .map(|(name, category, level)| NewSkill::new(name, category, level))
    .collect()
}
