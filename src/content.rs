pub const NAME: &str = "Pranjal Mishra";
pub const EMAIL: &str = "omdev009mishra@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/omdev009mishra";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/pranjal-mishra777/";
pub const CONTACT_MESSAGE: &str = "Let's build something amazing together.";
pub const FOOTER_LINE: &str = "Designed & Built by Pranjal Mishra © 2025";

pub const ABOUT_TEXT: &str = "I'm a lifelong learner with a passion for Computer Science, and I am currently pursuing my B.Tech at Galgotias University. My journey began at David Model Senior Secondary School, and I'm now expanding my skills in C, C++, Java, and Python. Beyond academics, I'm captivated by Game Development in Unreal Engine 5 and Blender, and Video Editing with DaVinci Resolve. I believe in continuous improvement and am always seeking new opportunities to learn and contribute to the ever-evolving world of technology. I'm particularly interested in the intersection of software development and creative applications, which is why I'm drawn to Game Development and Video Editing. These fields allow me to combine my technical skills with my artistic vision, resulting in unique and engaging experiences. I'm always looking for new challenges and opportunities to expand my knowledge and expertise in these areas. Specifically, within Game Development, I'm exploring advanced techniques in Procedural Generation, AI Implementation, and Physics Simulations, aiming to create immersive and dynamic virtual worlds. In Video Editing, I'm delving into Color Grading, Motion Graphics, and Sound Design, striving to produce compelling visual narratives. I'm eager to collaborate with fellow enthusiasts and professionals to push the boundaries of what's possible in these exciting fields.";

pub const HIGHLIGHT_KEYWORDS: &[&str] = &[
    "Computer Science",
    "B.Tech",
    "Galgotias University",
    "C",
    "C++",
    "Java",
    "Python",
    "Unreal Engine 5",
    "Blender",
    "DaVinci Resolve",
    "Game Development",
    "Video Editing",
    "Procedural Generation",
    "AI Implementation",
    "Physics Simulations",
    "Color Grading",
    "Motion Graphics",
    "Sound Design",
];

#[derive(PartialEq)]
pub struct Skill {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming & Web",
        skills: &[
            Skill { label: "Java", icon: "fa-brands fa-java" },
            Skill { label: "C / C++", icon: "fa-solid fa-code" },
            Skill { label: "HTML5", icon: "fa-brands fa-html5" },
            Skill { label: "CSS3", icon: "fa-brands fa-css3-alt" },
            Skill { label: "JavaScript", icon: "fa-brands fa-js" },
        ],
    },
    SkillGroup {
        title: "Game Dev & Creative",
        skills: &[
            Skill { label: "Unreal Engine 5", icon: "fa-brands fa-unreal" },
            Skill { label: "Blender", icon: "fa-solid fa-cube" },
            Skill { label: "After Effects", icon: "fa-solid fa-wand-magic-sparkles" },
            Skill { label: "DaVinci Resolve", icon: "fa-solid fa-film" },
        ],
    },
    SkillGroup {
        title: "Tools & Databases",
        skills: &[
            Skill { label: "Git", icon: "fa-brands fa-git-alt" },
            Skill { label: "GitHub", icon: "fa-brands fa-github" },
            Skill { label: "MongoDB", icon: "fa-solid fa-database" },
            Skill { label: "MySQL", icon: "fa-solid fa-server" },
        ],
    },
];

#[derive(PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub employment_type: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub website: Option<&'static str>,
    pub industry: Option<&'static str>,
    pub company_size: Option<&'static str>,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    role: "3D Animator",
    company: "cvnt",
    employment_type: "Internship",
    date: "Nov 2025 - Present",
    location: "Greater Noida · Remote",
    description: "Leading creative studio focused on next-generation visual experiences and 3D animation production.",
    website: Some("https://wearcvnt.com"),
    industry: Some("Retail Apparel and Fashion"),
    company_size: Some("2-10 employees"),
    skills: &[
        "Blender",
        "Computer Animation",
        "Unreal Engine 5",
        "Videography",
        "Adobe Premiere Pro",
        "Adobe Illustrator",
        "CAD/CAM",
        "Photoshop",
        "After Effects",
    ],
}];

#[derive(PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub tech: &'static str,
    pub image: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SimpleNotes",
        description: "This is my Simple Notes app built with Java.",
        link: "https://github.com/omdev009mishra/SimpleNotes",
        tech: "Java",
        image: Some("/assets/simplenotes.png"),
    },
    Project {
        title: "Dino Game",
        description: "A browser-based clone of the famous Chrome Dino game.",
        link: "https://github.com/omdev009mishra/dino-game",
        tech: "JavaScript",
        image: Some("/assets/dinogame.avif"),
    },
    Project {
        title: "Email Management System",
        description: "First year college project for managing emails efficiently.",
        link: "https://github.com/omdev009mishra/1styearProject_EmailManagementSystem",
        tech: "Java",
        image: Some("/assets/email.jpg"),
    },
    Project {
        title: "Funkyman",
        description: "A creative project repository.",
        link: "https://github.com/omdev009mishra/funkyman",
        tech: "Public Repo",
        image: Some("/assets/funkyman.png"),
    },
];
