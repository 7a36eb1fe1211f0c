//! Profile Directory CLI
//!
//! Command-line interface for listing, searching and managing profiles.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use profile_directory::form::ProfileForm;
use profile_directory::geocode::{DEFAULT_ZOOM, Geocoder, NominatimGeocoder};
use profile_directory::storage::FileBackend;
use profile_directory::utils::parsing::parse_profile_id;
use profile_directory::utils::join_list;
use profile_directory::{DirectoryConfig, DirectoryError, Profile, ProfileDirectory, ProfileId};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Profile Directory
#[derive(Parser, Debug)]
#[command(name = "profile-directory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding profiles.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List profiles, optionally filtered by name or location
    List {
        /// Case-insensitive search term
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show every detail of one profile
    Show {
        /// Profile id
        id: String,
    },

    /// Add a new profile
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit an existing profile; omitted fields keep their current value
    Edit {
        /// Profile id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a profile
    Delete {
        /// Profile id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Resolve a profile's location to map coordinates
    Locate {
        /// Profile id
        id: String,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    /// Image URL or data: URL
    #[arg(long)]
    photo: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    website: Option<String>,
    /// Comma-separated, e.g. "Reading, Travel, Photography"
    #[arg(long)]
    interests: Option<String>,
    /// Comma-separated, e.g. "JavaScript, React, Node.js"
    #[arg(long)]
    skills: Option<String>,
}

impl FieldArgs {
    /// Overwrite the fields given on the command line.
    fn apply(self, form: &mut ProfileForm) {
        let targets = [
            (self.name, &mut form.name),
            (self.photo, &mut form.photo),
            (self.description, &mut form.description),
            (self.location, &mut form.location),
            (self.email, &mut form.email),
            (self.phone, &mut form.phone),
            (self.website, &mut form.website),
            (self.interests, &mut form.interests),
            (self.skills, &mut form.skills),
        ];
        for (value, slot) in targets {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = DirectoryConfig::load(args.data_dir).context("Failed to load configuration")?;
    let mut directory = ProfileDirectory::open(FileBackend::new(&config.data_dir));

    match args.command {
        Command::List { search } => cmd_list(&mut directory, search),
        Command::Show { id } => cmd_show(&directory, &id),
        Command::Add { fields } => cmd_add(&mut directory, fields),
        Command::Edit { id, fields } => cmd_edit(&mut directory, &id, fields),
        Command::Delete { id, yes } => cmd_delete(&mut directory, &id, yes),
        Command::Locate { id } => cmd_locate(&directory, &config, &id),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_list(directory: &mut ProfileDirectory, search: String) -> Result<()> {
    directory.set_search_term(search);
    let view = directory.visible();

    if view.is_empty() {
        if directory.store().is_empty() {
            println!("No profiles yet. Use `add` to create one!");
        } else {
            println!("No profiles found. Try adjusting your search criteria.");
        }
        return Ok(());
    }

    for profile in view.iter() {
        println!(
            "{:>15}  {:<24} {}",
            profile.id,
            profile.name(),
            profile.location()
        );
    }
    Ok(())
}

fn cmd_show(directory: &ProfileDirectory, id: &str) -> Result<()> {
    let profile = find(directory, id)?;
    let f = &profile.fields;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{} (id {})", f.name, profile.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", f.description);
    println!();
    println!("Photo:     {}", summarize_photo(&f.photo));
    println!("Email:     {}", or_missing(f.email.as_deref(), "Email not provided"));
    println!("Phone:     {}", or_missing(f.phone.as_deref(), "Phone not provided"));
    println!("Website:   {}", or_missing(f.website.as_deref(), "Website not provided"));
    println!("Interests: {}", or_missing(non_empty(&join_list(&f.interests)), "Not specified"));
    println!("Skills:    {}", or_missing(non_empty(&join_list(&f.skills)), "Not specified"));
    println!("Location:  {}", f.location);
    Ok(())
}

fn cmd_add(directory: &mut ProfileDirectory, fields: FieldArgs) -> Result<()> {
    let mut form = ProfileForm::default();
    fields.apply(&mut form);

    let profile = directory
        .submit(&form, None)
        .map_err(user_facing("Failed to save profile. Please try again."))?
        .context("Profile was not created")?;

    println!("✅ Added {} (id {})", profile.name(), profile.id);
    Ok(())
}

fn cmd_edit(directory: &mut ProfileDirectory, id: &str, fields: FieldArgs) -> Result<()> {
    let existing = find(directory, id)?;
    let id = existing.id;
    let mut form = ProfileForm::from_profile(existing);
    fields.apply(&mut form);

    match directory
        .submit(&form, Some(id))
        .map_err(user_facing("Failed to save profile. Please try again."))?
    {
        Some(profile) => println!("✅ Updated {} (id {})", profile.name(), profile.id),
        None => println!("Profile {} no longer exists; nothing updated.", id),
    }
    Ok(())
}

fn cmd_delete(directory: &mut ProfileDirectory, id: &str, yes: bool) -> Result<()> {
    let id = parse_profile_id(id)?;

    if !yes {
        if let Some(profile) = directory.find(id) {
            let stdin = io::stdin();
            let confirmed = confirm_delete(&mut stdin.lock(), &mut io::stdout(), profile.name())
                .context("Failed to read confirmation")?;
            if !confirmed {
                println!("Cancelled; profile {} kept.", id);
                return Ok(());
            }
        }
    }

    let removed = directory
        .delete(id)
        .map_err(user_facing("Failed to delete profile. Please try again."))?;

    if removed {
        println!("🗑️  Deleted profile {}", id);
    } else {
        println!("No profile with id {}; nothing to delete.", id);
    }
    Ok(())
}

fn cmd_locate(directory: &ProfileDirectory, config: &DirectoryConfig, id: &str) -> Result<()> {
    let profile = find(directory, id)?;
    let geocoder = NominatimGeocoder::new(&config.geocoder_url, &config.user_agent)
        .context("Failed to create geocoding client")?;

    println!("📍 Location: {}", profile.location());
    match geocoder.locate(profile.location()) {
        Ok(Some(coords)) => {
            println!("   {} (zoom {})", coords, DEFAULT_ZOOM);
            println!("   {} in {}", profile.name(), profile.location());
        }
        Ok(None) => println!("   Location not found."),
        Err(e) => {
            tracing::warn!("geocoding failed: {}", e);
            println!("   Failed to fetch location. Please try again.");
        }
    }
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn find<'a>(directory: &'a ProfileDirectory, id: &str) -> Result<&'a Profile> {
    let id: ProfileId = parse_profile_id(id)?;
    directory
        .find(id)
        .ok_or_else(|| DirectoryError::NotFound(id).into())
}

/// Keep validation messages as they are; replace I/O failures with a retry hint.
fn user_facing(message: &'static str) -> impl Fn(DirectoryError) -> anyhow::Error {
    move |err| match err {
        DirectoryError::Persistence(_) => anyhow::Error::new(err).context(message),
        other => other.into(),
    }
}

/// Ask before deleting. Only `y` or `yes` (any case) confirms.
fn confirm_delete(input: &mut impl BufRead, out: &mut impl Write, name: &str) -> io::Result<bool> {
    write!(out, "Are you sure you want to delete {}? [y/N] ", name)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn or_missing<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Embedded images are too long to print.
fn summarize_photo(photo: &str) -> String {
    match photo.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => {
            format!("{} ({} bytes embedded)", header, data.len())
        }
        _ => photo.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
