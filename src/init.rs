//! Scaffolding for a new book repository.
//!
//! Writes an `issue.toml` with a fresh uid and today's date. When run in a
//! terminal, any value not given on the command line is prompted for;
//! otherwise the defaults are used as-is.

use crate::cli::InitArgs;
use crate::source::{new_id, IssueMetadata, MANIFEST_FILE, UNKNOWN_AUTHOR};
use anyhow::{anyhow, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::path::Path;

const DEFAULT_LANGUAGE: &str = "en-us";

/// Appended to the generated manifest so the optional fields are discoverable.
const OPTIONAL_FIELDS: &str = r#"
# Optional images, relative to this directory:
# cover_filename = "cover.jpg"
# logo_filename = "masthead.gif"
"#;

/// Run the init command in the current directory.
pub fn run(args: &InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    let manifest = cwd.join(MANIFEST_FILE);
    if manifest.exists() {
        return Err(anyhow!("Already initialized: {} exists", manifest.display()));
    }

    let interactive = console::Term::stdout().is_term();
    let metadata = collect_metadata(args, &cwd, interactive)?;

    let mut contents = metadata
        .to_toml()
        .with_context(|| "Failed to serialize manifest")?;
    contents.push_str(OPTIONAL_FIELDS);
    std::fs::write(&manifest, contents)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    println!("`{MANIFEST_FILE}` generated.");
    println!();
    println!("Next things:");
    println!("  * Edit `{MANIFEST_FILE}`");
    println!("  * Create directories for sections, e.g. `01 News`");
    println!("  * Create HTML/TXT files in those directories for articles");
    println!("  * Compile with `kig compile`");
    Ok(())
}

fn collect_metadata(args: &InitArgs, dir: &Path, interactive: bool) -> Result<IssueMetadata> {
    let theme = ColorfulTheme::default();
    let ask = |prompt: &str, given: &Option<String>, default: String| -> Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None if interactive => Input::<String>::with_theme(&theme)
                .with_prompt(prompt)
                .default(default)
                .interact()
                .with_context(|| format!("Failed to obtain {}", prompt.to_lowercase())),
            None => Ok(default),
        }
    };

    let detected_title = dir
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    Ok(IssueMetadata {
        title: ask("Book title", &args.title, detected_title)?,
        author: ask("Author", &args.author, UNKNOWN_AUTHOR.to_string())?,
        uid: new_id(),
        language: ask("Language", &args.language, DEFAULT_LANGUAGE.to_string())?,
        publisher: "kig".to_string(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        description: String::new(),
        review: String::new(),
        logo_filename: None,
        cover_filename: None,
    })
}
