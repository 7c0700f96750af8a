//! Project template catalog behind the "new project" voice command.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One starter template shown in projects mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub difficulty: Difficulty,
    pub setup_time: &'static str,
}

pub const TEMPLATES: &[ProjectTemplate] = &[
    ProjectTemplate {
        id: "react-dashboard",
        title: "React Admin Dashboard",
        description: "Modern admin dashboard with charts, tables, and real-time data visualization.",
        tech: &["React", "Material-UI", "Chart.js", "Axios"],
        difficulty: Difficulty::Intermediate,
        setup_time: "30-45 minutes",
    },
    ProjectTemplate {
        id: "nextjs-ecommerce",
        title: "Next.js E-commerce",
        description: "Full-stack e-commerce platform with payment integration and admin panel.",
        tech: &["Next.js", "Stripe", "Prisma", "Tailwind"],
        difficulty: Difficulty::Advanced,
        setup_time: "60-90 minutes",
    },
    ProjectTemplate {
        id: "realtime-chat",
        title: "Real-time Chat App",
        description: "WebSocket-based chat application with rooms, file sharing, and emoji support.",
        tech: &["React", "Socket.io", "Node.js", "MongoDB"],
        difficulty: Difficulty::Intermediate,
        setup_time: "45-60 minutes",
    },
    ProjectTemplate {
        id: "portfolio-site",
        title: "Portfolio Website",
        description: "Responsive portfolio website with animations and dark/light theme toggle.",
        tech: &["React", "Framer Motion", "Styled Components"],
        difficulty: Difficulty::Beginner,
        setup_time: "20-30 minutes",
    },
    ProjectTemplate {
        id: "task-manager",
        title: "Task Management App",
        description: "Kanban-style task manager with drag & drop, deadlines, and team collaboration.",
        tech: &["React", "DnD Kit", "Zustand", "Date-fns"],
        difficulty: Difficulty::Intermediate,
        setup_time: "40-55 minutes",
    },
    ProjectTemplate {
        id: "weather-dashboard",
        title: "Weather Dashboard",
        description: "Beautiful weather app with forecasts, maps, and location-based suggestions.",
        tech: &["React", "OpenWeather API", "Leaflet", "PWA"],
        difficulty: Difficulty::Beginner,
        setup_time: "25-35 minutes",
    },
];

/// Look a template up by id.
pub fn find(id: &str) -> Option<&'static ProjectTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Spoken confirmation when a template is opened.
pub fn announcement(template: &ProjectTemplate) -> String {
    format!(
        "Opening detailed guide for {}. This will take approximately {} to complete.",
        template.title, template.setup_time
    )
}
