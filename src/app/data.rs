//! Static site content. These tables are configuration, not logic: the
//! section components iterate them into cards and never mutate them.

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "extra-graduation",
        title: "CS Student",
        description: "Shiv Nadar University (Batch 2026)",
    },
    Highlight {
        icon: "extra-code",
        title: "Full-Stack Developer",
        description: "MERN stack, WebSockets, Cloud platforms",
    },
    Highlight {
        icon: "extra-users",
        title: "Team Player",
        description: "Leadership in hospitality & logistics",
    },
    Highlight {
        icon: "extra-heart",
        title: "Problem Solver",
        description: "Love automating workflows",
    },
];

pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: "extra-code",
        title: "Languages",
        skills: &["Java", "JavaScript", "HTML", "CSS", "MySQL", "NoSQL"],
    },
    SkillCategory {
        icon: "extra-wrench",
        title: "Frameworks & Tools",
        skills: &[
            "React",
            "Node.js",
            "Express",
            "Socket.IO",
            "WebRTC",
            "Leaflet.js",
            "Cloudinary",
            "Material UI",
            "Git",
        ],
    },
    SkillCategory {
        icon: "extra-lightbulb",
        title: "Concepts",
        skills: &[
            "REST APIs",
            "Real-Time Communication",
            "WebSockets",
            "Authentication",
            "Responsive Design",
        ],
    },
    SkillCategory {
        icon: "extra-database",
        title: "Core CS",
        skills: &[
            "Data Structures & Algorithms",
            "DBMS",
            "Operating Systems",
            "Computer Networks",
        ],
    },
];

pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub accent: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "extra-cart",
        title: "Full-Stack E-Commerce Platform",
        description: "Scalable MERN application with shopping cart and admin dashboard. Secure authentication with JWT and Redis. Responsive UI with React and Tailwind, images managed via Cloudinary.",
        technologies: &["MERN", "JWT", "Redis", "Tailwind", "Cloudinary"],
        github_url: "https://github.com/atishay08/E-Commerce-Store",
        live_url: None,
        accent: "from-green-400 to-green-600",
    },
    Project {
        icon: "extra-chat",
        title: "Real-Time Messaging App (WhatsApp Clone)",
        description: "One-to-one chat and media sharing with Google OAuth login. Built with Socket.IO for instant messaging and presence. Integrated MongoDB GridFS for efficient media storage.",
        technologies: &["Socket.IO", "MongoDB GridFS", "Google OAuth", "Real-time"],
        github_url: "https://github.com/atishay08/Whatsapp-Clone",
        live_url: Some("https://whatsapp-clone-1-heou.onrender.com/"),
        accent: "from-blue-400 to-blue-600",
    },
    Project {
        icon: "extra-map-pin",
        title: "Real-Time Tracking App",
        description: "Live GPS tracking on interactive maps with Leaflet.js and OpenStreetMap. Backend powered by Socket.IO for fast and accurate updates. Handles disconnections to keep data reliable.",
        technologies: &["Leaflet.js", "Socket.IO", "GPS Tracking", "OpenStreetMap"],
        github_url: "https://github.com/atishay08/Realtime-Tracker",
        live_url: Some("https://realtime-tracker-5c1p.onrender.com"),
        accent: "from-purple-400 to-purple-600",
    },
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub accent: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "extra-trophy",
        title: "Leadership Excellence",
        description: "Hospitality and Logistics Lead in sports and cultural fest",
        category: "Leadership",
        accent: "from-yellow-400 to-orange-500",
    },
    Achievement {
        icon: "extra-users",
        title: "Google Developer Student Clubs (GDSC)",
        description: "Active member contributing to developer community",
        category: "Technology",
        accent: "from-blue-400 to-blue-600",
    },
    Achievement {
        icon: "extra-chef-hat",
        title: "Sigree (Cooking Club)",
        description: "Member exploring culinary arts and team collaboration",
        category: "Culinary",
        accent: "from-green-400 to-green-600",
    },
    Achievement {
        icon: "extra-shirt",
        title: "Enchant (Fashion Club)",
        description: "Member exploring creativity in fashion and design",
        category: "Creative",
        accent: "from-purple-400 to-purple-600",
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "extra-mail",
        label: "Email",
        value: "atishay8866@gmail.com",
        href: "mailto:atishay8866@gmail.com",
    },
    ContactChannel {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "/in/atishay08",
        href: "https://www.linkedin.com/in/atishay08/",
    },
    ContactChannel {
        icon: "devicon-github-plain",
        label: "GitHub",
        value: "@atishay08",
        href: "https://github.com/atishay08",
    },
];

pub const RESUME_PATH: &str = "/Atishay_Jain.pdf";
