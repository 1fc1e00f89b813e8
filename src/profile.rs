//! Profile dataset compiled into the binary.
//!
//! Every console command reads from this record; nothing here is loaded at
//! runtime.

use serde::Serialize;

/// A featured project: name plus a one-line summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
}

/// Skill lists shown by the `skills` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skills {
    /// AI and data science
    pub primary: &'static [&'static str],
    /// Full-stack and cloud
    pub secondary: &'static [&'static str],
    pub languages: &'static [&'static str],
}

/// Read-only biographical record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub focus: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume_url: &'static str,
    pub education: &'static str,
    pub certifications: &'static [&'static str],
    pub skills: Skills,
    pub projects: &'static [Project],
    pub achievements: &'static [&'static str],
}

/// The profile every session is built from
pub static PROFILE: Profile = Profile {
    name: "Alex Rivera",
    role: "AI Engineer & Data Scientist",
    focus: "Computer Vision and LLM Architectures",
    bio: "I bridge the gap between theoretical ML models and production-ready \
          applications. With a track record of winning hackathons and solving \
          thousands of algorithmic challenges, I focus on building AI that is \
          both highly accurate and computationally efficient.",
    email: "alex.rivera@example.com",
    phone: "+1 555 010 2024",
    location: "Portland, Oregon, USA",
    github: "https://github.com/alex-rivera",
    linkedin: "https://linkedin.com/in/alex-rivera",
    resume_url: "https://example.com/alex-rivera/resume.pdf",
    education: "BS in Computer Science, Cascade Institute of Technology (GPA: 3.8)",
    certifications: &[
        "IBM Data Science Professional",
        "DeepLearning.AI TensorFlow Developer",
        "Google Cloud Computing",
        "6+ MOOC Honors",
    ],
    skills: Skills {
        primary: &[
            "TensorFlow",
            "PyTorch",
            "LangChain",
            "Computer Vision",
            "NLP",
            "Deep Learning",
        ],
        secondary: &["React", "Node.js", "Flask", "PostgreSQL", "Docker", "AWS"],
        languages: &["Python", "JavaScript", "TypeScript", "Java", "C++", "SQL"],
    },
    projects: &[
        Project {
            name: "SkinScan AI",
            description: "97.7% accuracy skin cancer detection - Hackathon Winner",
        },
        Project {
            name: "AI Agent System",
            description: "Multi-agent task orchestrator with 40% time reduction",
        },
        Project {
            name: "Phonetic Health",
            description: "98% accuracy Parkinson's detection - Paper Accepted",
        },
        Project {
            name: "Match Analytics",
            description: "92% accuracy computer vision sports analytics",
        },
    ],
    achievements: &[
        "$250 Hackathon Winner",
        "Research Paper at DeepCom 2025",
        "2000+ Competitive Programming Problems",
        "350+ LeetCode Challenges",
    ],
};

impl Default for Profile {
    fn default() -> Self {
        PROFILE
    }
}

impl Profile {
    /// First name, used in greetings and the panel title
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// Pretty JSON rendering for `--print-profile`
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
