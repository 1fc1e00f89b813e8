//! Integration tests for the portfolio console

use folio_console::console::{CLEARED_MESSAGE, INPUT_PREFIX};
use folio_console::{
    Console, EntryKind, FolioConfig, PreferenceStore, Profile, Submission, ThemePreference,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn texts(console: &Console) -> Vec<String> {
    console
        .transcript()
        .iter()
        .map(|e| e.text().to_string())
        .collect()
}

/// A fresh session holds only the welcome output
#[test]
fn test_fresh_session_is_seeded() {
    let console = Console::default();
    let entries = console.transcript().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind(), EntryKind::Output);
    assert!(entries[0].text().contains("Type \"help\" to see available commands."));
}

/// `projects` echoes the input and lists every project in dataset order
#[test]
fn test_projects_scenario() {
    let profile = Profile::default();
    let mut console = Console::new(profile);
    console.submit("projects");

    let entries = console.transcript().entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].kind(), EntryKind::Input);
    assert_eq!(entries[1].text(), "> projects");
    assert_eq!(entries[2].kind(), EntryKind::Output);

    let output = entries[2].text();
    let mut last_pos = 0;
    for (i, project) in profile.projects.iter().enumerate() {
        let heading = format!("{}. {}", i + 1, project.name);
        let pos = output.find(&heading).unwrap_or_else(|| panic!("missing {}", heading));
        assert!(pos >= last_pos, "{} out of order", project.name);
        assert!(output.contains(project.description));
        last_pos = pos;
    }
}

/// Unknown commands answer with the not-found message
#[test]
fn test_unknown_command_scenario() {
    let mut console = Console::default();
    assert_eq!(console.submit("xyz123"), Submission::NotFound("xyz123".to_string()));
    let entries = console.transcript().entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[2].text().contains("Command not found: \"xyz123\""));
}

/// `clear` wipes history without leaving an echo of itself
#[test]
fn test_clear_then_help_scenario() {
    let mut console = Console::default();
    console.submit("skills");
    console.submit("clear");
    console.submit("help");

    let entries = console.transcript().entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].text(), CLEARED_MESSAGE);
    assert_eq!(entries[1].text(), "> help");
    assert!(entries[2].text().starts_with("Available commands:"));
    assert!(!texts(&console).iter().any(|t| t.contains("> clear")));
}

#[test]
fn test_clear_after_any_history_leaves_one_entry() {
    let mut console = Console::default();
    for cmd in ["about", "nope", "   ", "Contact", "achieve"] {
        console.submit(cmd);
    }
    console.submit("Clear");
    assert_eq!(texts(&console), vec![CLEARED_MESSAGE.to_string()]);
}

/// Same command twice gives byte-identical outputs
#[test]
fn test_lookup_is_idempotent() {
    let mut console = Console::default();
    console.submit("education");
    console.submit("education");
    let entries = console.transcript().entries();
    assert_eq!(entries[2].text(), entries[4].text());
}

/// Case and surrounding whitespace do not change resolution
#[test]
fn test_case_and_whitespace_insensitive() {
    let outputs: Vec<String> = [" Help ", "HELP", "help"]
        .iter()
        .map(|raw| {
            let mut console = Console::default();
            console.submit(raw);
            console.transcript().last().unwrap().text().to_string()
        })
        .collect();
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

/// Every non-reserved, non-registered word gets exactly an echo and a miss
#[test]
fn test_unknown_command_coverage() {
    for raw in ["ls", "sudo rm", "help me", "clear all", "  Projects2 ", "ÜBER"] {
        let mut console = Console::default();
        console.submit(raw);
        let entries = console.transcript().entries();
        assert_eq!(entries.len(), 3, "for {:?}", raw);
        assert_eq!(entries[1].text(), format!("{INPUT_PREFIX}{raw}"));
        assert!(entries[2].text().contains(raw.trim()), "for {:?}", raw);
        assert!(entries[2].text().starts_with("Command not found"));
    }
}

#[test]
fn test_blank_submissions_are_noops() {
    let mut console = Console::default();
    console.submit("about");
    let before = console.transcript().clone();
    for raw in ["", "   ", "\t\n"] {
        assert_eq!(console.submit(raw), Submission::Ignored);
    }
    assert_eq!(console.transcript(), &before);
}

/// Every input entry is immediately followed by one output entry
#[test]
fn test_inputs_are_always_answered() {
    let mut console = Console::default();
    for cmd in ["help", "bogus", "", "socials", "resume", "clear", "skills", "x"] {
        console.submit(cmd);
    }
    let entries = console.transcript().entries();
    for (i, entry) in entries.iter().enumerate() {
        if entry.kind() == EntryKind::Input {
            assert_eq!(entries.get(i + 1).map(|e| e.kind()), Some(EntryKind::Output));
        }
    }
}

/// Every registered command answers through the console
#[test]
fn test_all_registry_commands_answer() {
    let profile = Profile::default();
    let expectations = [
        ("about", profile.name),
        ("skills", "PyTorch"),
        ("contact", profile.email),
        ("education", profile.education),
        ("achieve", profile.achievements[0]),
        ("resume", profile.resume_url),
        ("socials", profile.linkedin),
    ];
    for (cmd, needle) in expectations {
        let mut console = Console::new(profile);
        assert!(matches!(console.submit(cmd), Submission::Answered(_)));
        let text = console.transcript().last().unwrap().text().to_string();
        assert!(text.contains(needle), "{} should mention {}", cmd, needle);
    }
}

/// Theme preference survives a new store instance
#[tokio::test]
async fn test_theme_preference_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = FolioConfig::new(temp_dir.path().to_path_buf());

    let store = PreferenceStore::new(config.preferences_file());
    assert_eq!(store.load().await, ThemePreference::Dark);
    store.save(ThemePreference::Light).await.unwrap();

    let reopened = PreferenceStore::new(config.preferences_file());
    assert_eq!(reopened.load().await, ThemePreference::Light);
}
