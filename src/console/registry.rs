//! Command registry
//!
//! Maps a command name to a handler that renders a fixed response from the
//! profile. Built once and never mutated; lookup is exact match on the
//! normalized token.

use std::collections::HashMap;
use std::fmt;

use crate::profile::Profile;

/// Reserved control word. Handled by the console, never by the registry.
pub const CLEAR_COMMAND: &str = "clear";
const CLEAR_DESCRIPTION: &str = "Clear terminal";

/// Separator used when joining skill lists
const SKILL_SEPARATOR: &str = " • ";

/// Profile commands answered by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Education,
    Achieve,
    Resume,
    Socials,
}

impl Command {
    /// All registry commands, in help order
    pub fn all() -> &'static [Command] {
        &[
            Command::Help,
            Command::About,
            Command::Skills,
            Command::Projects,
            Command::Contact,
            Command::Education,
            Command::Achieve,
            Command::Resume,
            Command::Socials,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::Education => "education",
            Command::Achieve => "achieve",
            Command::Resume => "resume",
            Command::Socials => "socials",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this list",
            Command::About => "Who I am and what I do",
            Command::Skills => "View technical skills",
            Command::Projects => "See featured projects",
            Command::Contact => "Get contact information",
            Command::Education => "Academic background",
            Command::Achieve => "Achievements & stats",
            Command::Resume => "Download resume link",
            Command::Socials => "Social media links",
        }
    }

    /// Exact-match parse of an already normalized token
    pub fn parse(token: &str) -> Option<Command> {
        Self::all().iter().find(|cmd| cmd.name() == token).copied()
    }

    fn handler(&self) -> Handler {
        match self {
            Command::Help => render_help,
            Command::About => render_about,
            Command::Skills => render_skills,
            Command::Projects => render_projects,
            Command::Contact => render_contact,
            Command::Education => render_education,
            Command::Achieve => render_achievements,
            Command::Resume => render_resume,
            Command::Socials => render_socials,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every name the console accepts, with a description, `clear` last.
/// Used by help output and completion.
pub fn command_names() -> Vec<(&'static str, &'static str)> {
    Command::all()
        .iter()
        .map(|cmd| (cmd.name(), cmd.description()))
        .chain(std::iter::once((CLEAR_COMMAND, CLEAR_DESCRIPTION)))
        .collect()
}

/// Names starting with `prefix` (case-insensitive), in help order
pub fn complete(prefix: &str) -> Vec<(&'static str, &'static str)> {
    let prefix = prefix.trim().to_lowercase();
    command_names()
        .into_iter()
        .filter(|(name, _)| name.starts_with(&prefix))
        .collect()
}

type Handler = fn(&Profile) -> String;

/// Immutable name → handler table bound to one profile
#[derive(Debug, Clone)]
pub struct Registry {
    profile: Profile,
    handlers: HashMap<&'static str, (Command, Handler)>,
}

impl Registry {
    pub fn new(profile: Profile) -> Self {
        let handlers = Command::all()
            .iter()
            .map(|cmd| (cmd.name(), (*cmd, cmd.handler())))
            .collect();
        Self { profile, handlers }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Resolve a normalized token and render its response
    pub fn lookup(&self, token: &str) -> Option<(Command, String)> {
        self.handlers
            .get(token)
            .map(|(cmd, handler)| (*cmd, handler(&self.profile)))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.handlers.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

fn render_help(_profile: &Profile) -> String {
    let mut out = String::from("Available commands:\n\n");
    for (name, description) in command_names() {
        out.push_str(&format!("  {:<9} - {}\n", name, description));
    }
    out.push_str("\nType a command and press Enter.");
    out
}

fn render_about(profile: &Profile) -> String {
    format!(
        "👋 Hi! I'm {}\n\n{} specializing in {}.\n\n{}\n\nCurrently pursuing {}.",
        profile.name, profile.role, profile.focus, profile.bio, profile.education
    )
}

fn render_skills(profile: &Profile) -> String {
    let skills = &profile.skills;
    format!(
        "🛠️ Technical Skills\n\n\
         PRIMARY (AI & Data Science):\n  {}\n\n\
         SECONDARY (Full-Stack & Cloud):\n  {}\n\n\
         LANGUAGES:\n  {}",
        skills.primary.join(SKILL_SEPARATOR),
        skills.secondary.join(SKILL_SEPARATOR),
        skills.languages.join(SKILL_SEPARATOR),
    )
}

fn render_projects(profile: &Profile) -> String {
    let listing = profile
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}\n   {}", i + 1, p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("🚀 Featured Projects\n\n{}\n\nView all: {}", listing, profile.github)
}

fn render_contact(profile: &Profile) -> String {
    format!(
        "📬 Contact Information\n\n📧 Email: {}\n📱 Phone: {}\n📍 Location: {}",
        profile.email, profile.phone, profile.location
    )
}

fn render_education(profile: &Profile) -> String {
    let certs = bullets(profile.certifications, "  ");
    format!(
        "🎓 Education\n\n{}\n\nCertifications:\n{}",
        profile.education, certs
    )
}

fn render_achievements(profile: &Profile) -> String {
    format!("🏆 Achievements\n\n{}", bullets(profile.achievements, ""))
}

fn render_resume(profile: &Profile) -> String {
    format!("📄 Resume\n\nDownload/View: {}", profile.resume_url)
}

fn render_socials(profile: &Profile) -> String {
    format!(
        "🔗 Social Links\n\nGitHub: {}\nLinkedIn: {}",
        profile.github, profile.linkedin
    )
}

fn bullets(items: &[&str], indent: &str) -> String {
    items
        .iter()
        .map(|item| format!("{indent}• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
