// ClipBoy CLI binary

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};

use clipboy_lib::db::{get_db_path, init_library_folders, open_db, schema};
use clipboy_lib::enrich::{enrich_clips, AnalyzerMode};
use clipboy_lib::proposals::parse_proposals;
use clipboy_lib::scoring::virality_score;
use clipboy_lib::tags::{analyzer, TagCategory, VIRAL_TAGS};

#[derive(Parser)]
#[command(name = "clipboy")]
#[command(about = "ClipBoy - viral clip tagging and scoring for video transcripts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the viral tag catalog
    Tags {
        /// Filter by category (hook, emotion, trend, format, content, technical)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Tag and score a piece of text
    Analyze {
        /// Clip title
        #[arg(short, long)]
        title: String,
        /// Clip description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Hook or transcript excerpt
        #[arg(short = 'x', long, default_value = "")]
        content: String,
        /// Use the reduced quick analyzer
        #[arg(long)]
        quick: bool,
    },

    /// Enrich candidate clips from a proposals file
    Enrich {
        /// Path to a proposals JSON file (or raw LLM output)
        input: PathBuf,
        /// Use the reduced quick analyzer
        #[arg(long)]
        quick: bool,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
        /// Persist to a library (requires --video-id)
        #[arg(short, long, requires = "video_id")]
        library: Option<PathBuf>,
        /// Video id the clips belong to (requires --library)
        #[arg(long, requires = "library")]
        video_id: Option<String>,
        /// Video title (stored alongside the id; requires --library)
        #[arg(long, requires = "library")]
        video_title: Option<String>,
    },

    /// Initialize a new clip library
    Init {
        /// Library root path
        path: PathBuf,
    },

    /// List stored clips
    List {
        /// Library root (defaults to current directory)
        #[arg(short, long)]
        library: Option<PathBuf>,
        /// Only show saved clips
        #[arg(long)]
        saved: bool,
        /// Maximum clips to show
        #[arg(long, default_value = "50")]
        limit: i64,
    },

    /// Show clip details
    Show {
        /// Clip ID
        id: String,
        /// Library root (defaults to current directory)
        #[arg(short, long)]
        library: Option<PathBuf>,
    },

    /// Bookmark a clip
    Save {
        /// Clip ID
        id: String,
        /// Library root (defaults to current directory)
        #[arg(short, long)]
        library: Option<PathBuf>,
    },

    /// Remove a bookmark
    Unsave {
        /// Clip ID
        id: String,
        /// Library root (defaults to current directory)
        #[arg(short, long)]
        library: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tags { category } => cmd_tags(category),
        Commands::Analyze {
            title,
            description,
            content,
            quick,
        } => cmd_analyze(title, description, content, quick),
        Commands::Enrich {
            input,
            quick,
            pretty,
            library,
            video_id,
            video_title,
        } => cmd_enrich(input, quick, pretty, library, video_id, video_title),
        Commands::Init { path } => cmd_init(path),
        Commands::List {
            library,
            saved,
            limit,
        } => cmd_list(library, saved, limit),
        Commands::Show { id, library } => cmd_show(id, library),
        Commands::Save { id, library } => cmd_save(id, library),
        Commands::Unsave { id, library } => cmd_unsave(id, library),
    }
}

fn cmd_tags(category: Option<String>) -> Result<()> {
    let filter = match category.as_deref() {
        Some(s) => Some(
            TagCategory::parse(s)
                .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", s))?,
        ),
        None => None,
    };

    println!("{:>6}  {:<10}  {:<20}  {}", "Weight", "Category", "Tag", "Description");
    println!("{}", "-".repeat(80));

    for tag in VIRAL_TAGS {
        if let Some(f) = filter {
            if tag.category != f {
                continue;
            }
        }
        println!(
            "{:>6}  {:<10}  {:<20}  {}",
            tag.weight,
            tag.category.as_str(),
            tag.name,
            tag.description
        );
    }

    Ok(())
}

fn cmd_analyze(title: String, description: String, content: String, quick: bool) -> Result<()> {
    let tags = if quick {
        let text = format!("{} {} {}", title, description, content).to_lowercase();
        analyzer::quick_analyze(&text)
    } else {
        analyzer::analyze(&content, &title, &description)
    };

    let score = virality_score(&tags);

    println!("Virality score: {}", score);
    if tags.is_empty() {
        println!("No viral tags matched.");
    } else {
        println!("Tags:");
        for tag in &tags {
            println!("  {}", tag);
        }
    }

    Ok(())
}

fn cmd_enrich(
    input: PathBuf,
    quick: bool,
    pretty: bool,
    library: Option<PathBuf>,
    video_id: Option<String>,
    video_title: Option<String>,
) -> Result<()> {
    let raw = std::fs::read_to_string(&input)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", input.display(), e))?;
    let candidates = parse_proposals(&raw)?;

    let mode = if quick {
        AnalyzerMode::Quick
    } else {
        AnalyzerMode::Full
    };

    let started = Instant::now();
    let enriched = enrich_clips(&candidates, mode);
    log::info!(
        "Enriched {} clips in {:?}",
        enriched.len(),
        started.elapsed()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&enriched)?
    } else {
        serde_json::to_string(&enriched)?
    };
    println!("{}", json);

    // Optionally persist
    if let Some(library) = library {
        let video_id = video_id
            .ok_or_else(|| anyhow::anyhow!("--video-id is required when persisting to a library"))?;

        let library_root = resolve_library_root(Some(library))?;
        let conn = open_db(&get_db_path(&library_root))?;

        let title = video_title.unwrap_or_else(|| video_id.clone());
        schema::upsert_video(&conn, &video_id, &title, None)?;

        for clip in &enriched {
            schema::insert_generated_clip(&conn, &video_id, clip)?;
        }
        eprintln!("Stored {} clips for video '{}'", enriched.len(), video_id);
    }

    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    let library_root = path.canonicalize().unwrap_or(path.clone());

    let db_path = get_db_path(&library_root);
    if db_path.exists() {
        anyhow::bail!("Library already exists at {}", library_root.display());
    }

    init_library_folders(&library_root)?;
    open_db(&db_path)?;

    println!("Initialized clip library at {}", library_root.display());
    println!("  .clipboy/clipboy.db - Database");

    Ok(())
}

fn cmd_list(library: Option<PathBuf>, saved: bool, limit: i64) -> Result<()> {
    let library_root = resolve_library_root(library)?;
    let conn = open_db(&get_db_path(&library_root))?;

    let clips = if saved {
        schema::list_saved_clips(&conn, limit)?
    } else {
        schema::list_generated_clips(&conn, limit)?
    };

    if clips.is_empty() {
        println!("No clips found. Use 'clipboy enrich <file> --library <path>' to add some.");
        return Ok(());
    }

    println!(
        "{:<36}  {:>5}  {:>9}  {}",
        "ID", "Score", "Range", "Title"
    );
    println!("{}", "-".repeat(80));

    for clip in clips {
        let range = format!("{:.0}-{:.0}s", clip.start_sec, clip.end_sec);
        let title = if clip.title.chars().count() > 30 {
            let short: String = clip.title.chars().take(27).collect();
            format!("{}...", short)
        } else {
            clip.title.clone()
        };
        println!("{:<36}  {:>5}  {:>9}  {}", clip.id, clip.score, range, title);
    }

    Ok(())
}

fn cmd_show(id: String, library: Option<PathBuf>) -> Result<()> {
    let library_root = resolve_library_root(library)?;
    let conn = open_db(&get_db_path(&library_root))?;

    let clip = schema::get_generated_clip(&conn, &id)?
        .ok_or_else(|| anyhow::anyhow!("Clip {} not found", id))?;

    println!("Clip {}", clip.id);
    println!();
    println!("Title:       {}", clip.title);
    println!("Video:       {}", clip.video_id);
    println!("Range:       {:.1}s - {:.1}s", clip.start_sec, clip.end_sec);
    println!("Score:       {}", clip.score);

    if !clip.score_reasons.is_empty() {
        println!("Reasons:     {}", clip.score_reasons);
    }
    if !clip.viral_tags.is_empty() {
        println!("Tags:        {}", clip.viral_tags.join(", "));
    }
    if !clip.description.is_empty() {
        println!("Description: {}", clip.description);
    }
    if !clip.hook.is_empty() {
        println!("Hook:        {}", clip.hook);
    }
    println!("Created:     {}", clip.created_at);

    if schema::is_clip_saved(&conn, &id)? {
        println!();
        println!("[saved]");
    }

    Ok(())
}

fn cmd_save(id: String, library: Option<PathBuf>) -> Result<()> {
    let library_root = resolve_library_root(library)?;
    let conn = open_db(&get_db_path(&library_root))?;

    schema::save_clip(&conn, &id)?;
    println!("Saved clip {}", id);
    Ok(())
}

fn cmd_unsave(id: String, library: Option<PathBuf>) -> Result<()> {
    let library_root = resolve_library_root(library)?;
    let conn = open_db(&get_db_path(&library_root))?;

    schema::unsave_clip(&conn, &id)?;
    println!("Unsaved clip {}", id);
    Ok(())
}

fn resolve_library_root(library: Option<PathBuf>) -> Result<PathBuf> {
    let path = library
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let path = path.canonicalize().unwrap_or(path);

    // Check if .clipboy exists
    let db_path = get_db_path(&path);
    if !db_path.exists() {
        anyhow::bail!(
            "No clip library found at {}. Use 'clipboy init <path>' to create one.",
            path.display()
        );
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_video_id_requires_library() {
        let result = Cli::try_parse_from([
            "clipboy", "enrich", "clips.json", "--video-id", "vid-1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn enrich_library_requires_video_id() {
        let result = Cli::try_parse_from([
            "clipboy", "enrich", "clips.json", "--library", "/tmp/lib",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn enrich_accepts_paired_persistence_args() {
        let result = Cli::try_parse_from([
            "clipboy",
            "enrich",
            "clips.json",
            "--library",
            "/tmp/lib",
            "--video-id",
            "vid-1",
            "--video-title",
            "My Video",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn enrich_without_persistence_args_parses() {
        let result = Cli::try_parse_from(["clipboy", "enrich", "clips.json", "--quick"]);
        assert!(result.is_ok());
    }
}
