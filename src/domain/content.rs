//! Static site content. Everything here is authored once and never mutated.

use super::models::{
    EducationEntry, Expertise, PricingTier, Profile, Project, ProjectCategory, ProjectStatus,
    ProjectTab, SocialLink, Stat, Testimonial, WorkflowStep,
};

pub const PROFILE: Profile = Profile {
    name: "Koustav Pan",
    handle: "Koustav.dev",
    role: "Fullstack Engineering",
    tagline: "I architect scalable digital ecosystems using Java and React. \
              Focusing on performance, accessibility, and pixel-perfect UIs.",
    bio: "I am a Java Fullstack Developer bridging the gap between robust backend logic \
          and stunning frontend interfaces. I don't just write code; I compile dreams \
          into deployable reality.",
    location: "Bengaluru, India",
    email: "pankoustav@gmail.com",
    phone_display: "+91 7501795902",
    whatsapp: "917501795902",
};

pub const PRELOADER_TEXT: &str = "INITIALIZING SYSTEM... LOADING ASSETS... ACCESS GRANTED.";

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        title: "Frontend Architecture",
        description: "Building complex, state-driven SPAs with React, Next.js, and Tailwind.",
        tags: &["React", "Framer", "Tailwind"],
    },
    Expertise {
        title: "Backend Systems",
        description: "Designing robust REST APIs and Microservices using Java Spring Boot.",
        tags: &["Java", "Spring", "Security"],
    },
    Expertise {
        title: "DevOps & Cloud",
        description: "Deployment automation, CI/CD pipelines, and containerization.",
        tags: &["Docker", "AWS", "Git"],
    },
    Expertise {
        title: "Database Engineering",
        description: "Optimizing SQL queries, designing normalized schemas with MySQL & PostgreSQL.",
        tags: &["MySQL", "Hibernate", "SQL"],
    },
    Expertise {
        title: "Mobile First Design",
        description: "Creating responsive layouts that work perfectly on any device. PWA development.",
        tags: &["Responsive", "PWA", "Mobile"],
    },
    Expertise {
        title: "UI/UX Implementation",
        description: "Translating Figma designs into pixel-perfect code. Meeting accessibility standards.",
        tags: &["Figma", "UI/UX", "A11y"],
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: 1200, label: "Hours of Code", suffix: "+" },
    Stat { value: 15, label: "Projects Built", suffix: "+" },
    Stat { value: 100, label: "Coffee Cups", suffix: "%" },
    Stat { value: 99, label: "Bug Free Rate", suffix: "%" },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        tier: "Starter",
        price: "₹14,999",
        description: "Perfect for personal portfolios and landing pages.",
        features: &[
            "One Page Website",
            "Responsive Design",
            "Fast Loading Speed",
            "Contact Form",
            "3 Days Delivery",
        ],
        popular: false,
    },
    PricingTier {
        tier: "Professional",
        price: "₹29,999",
        description: "Best for small businesses and startups.",
        features: &[
            "Multi-Page Website (5)",
            "CMS Integration",
            "SEO Optimization",
            "Advanced Animations",
            "1 Month Support",
        ],
        popular: true,
    },
    PricingTier {
        tier: "Business",
        price: "₹59,999+",
        description: "Full-scale web applications with backend.",
        features: &[
            "Full Stack App",
            "Database & Auth",
            "Admin Dashboard",
            "Payment Gateway",
            "API Integration",
        ],
        popular: false,
    },
];

pub const WORKFLOW: &[WorkflowStep] = &[
    WorkflowStep {
        step: "01",
        title: "Discovery",
        description: "Understanding requirements, user needs, and business goals.",
    },
    WorkflowStep {
        step: "02",
        title: "Design & Proto",
        description: "Creating wireframes and high-fidelity UI designs.",
    },
    WorkflowStep {
        step: "03",
        title: "Development",
        description: "Writing clean, modular code with React and Java.",
    },
    WorkflowStep {
        step: "04",
        title: "Testing & Deploy",
        description: "Rigorous testing and deploying to cloud platforms.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Williams",
        role: "Project Manager @ TechFlow",
        text: "Koustav didn't just write code; he architected a solution. The transition from \
               our old legacy system to the new React stack was seamless. Absolute professional.",
    },
    Testimonial {
        name: "James Chen",
        role: "Founder @ StartupX",
        text: "I hired him for a simple landing page, but he delivered a full-blown digital \
               experience. The animations and performance optimization are top-tier.",
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Lead Dev @ Solaris",
        text: "Rarely do you find a developer who understands both design and backend logic \
               this well. His Java APIs are robust, and his front-end is beautiful.",
    },
];

pub const TECH_STACK: &[&str] = &["Java", "React", "Spring", "Tailwind", "SQL"];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        years: "2025 - Present",
        title: "Java Fullstack Course",
        place: "J-Spider, BTM Layout, Bengaluru",
        description: "Specializing in Advanced Java, Spring Boot Microservices, React, and System Design.",
        grade: "Current",
    },
    EducationEntry {
        years: "2021 - 2025",
        title: "B.Tech in Computer Science",
        place: "Bankura Unnayani Institute of Engineering",
        description: "Affiliated to Maulana Abul Kalam Azad University. Core focus on Algorithms & Data Structures.",
        grade: "CGPA: 7.34",
    },
    EducationEntry {
        years: "2019",
        title: "Higher Secondary (XII)",
        place: "Garhbeta High School (WBCHSE)",
        description: "Major in Physics, Chemistry, and Mathematics.",
        grade: "Score: 88%",
    },
    EducationEntry {
        years: "2019",
        title: "Secondary Exam (X)",
        place: "Panchagrami Saradamoni Vidyapith (WBBSE)",
        description: "Foundation in General Sciences and Mathematics.",
        grade: "Score: 81%",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GodChat - A futuristic social chat application",
        category: ProjectCategory::Frontend,
        status: ProjectStatus::Beta,
        description: "Advanced frontend chat experience built with React and Tailwind, showcasing \
                      dynamic state management, animated conversations, and production-grade UI systems.",
        tags: &["React Js.", "Tailwind", "Typescript"],
        demo: Some("https://koustav2303.github.io/godchat/"),
        github: Some("https://github.com/Koustav2303/godchat"),
    },
    Project {
        title: "YatraEase - Intelligent Journeys, Seamlessly Planned",
        category: ProjectCategory::Frontend,
        status: ProjectStatus::Beta,
        description: "Smart travel planning interface designed to simplify trip discovery, \
                      comparison, and booking through an intuitive, modern user experience.",
        tags: &["React", "Tailwind", "Framer"],
        demo: Some("https://koustav2303.github.io/yatraease/"),
        github: Some("https://github.com/Koustav2303/yatraease"),
    },
    Project {
        title: "WeatherPro - A Premium AI-Powered Weather Experience",
        category: ProjectCategory::Live,
        status: ProjectStatus::Live,
        description: "A modern, high-performance weather application delivering real-time \
                      forecasts through an elegant glassmorphism interface, enhanced with smooth \
                      animations and intelligent insights.",
        tags: &["React", "Tailwind CSS", "Next.js", "Weather API"],
        demo: Some("https://koustav2303.github.io/WeatherPro/"),
        github: Some("https://github.com/Koustav2303/WeatherPro"),
    },
    Project {
        title: "Cake Ordering System",
        category: ProjectCategory::Frontend,
        status: ProjectStatus::Maintenance,
        description: "A complete e-commerce solution for a bakery with cart management, admin \
                      dashboard, and payment gateway integration.",
        tags: &["React", "Redux", "CSS"],
        demo: None,
        github: None,
    },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com" },
    SocialLink { label: "Twitter", url: "https://twitter.com" },
    SocialLink { label: "Instagram", url: "https://instagram.com" },
];

#[must_use]
pub fn projects_for(tab: ProjectTab) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| tab.includes(p)).collect()
}
