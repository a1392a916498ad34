//! mobdex-admin — command-line catalog maintenance.
//!
//! Talks to the same backend as the TUI (remote REST or the local redb
//! store, per the config file).
//! Usage: mobdex-admin <list|show|create|update|delete|seed> [args]

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use mobdex::catalog::local::LocalStore;
use mobdex::catalog::remote::RemoteStore;
use mobdex::catalog::CatalogService;
use mobdex::config::Config;
use mobdex::entry::{Category, EntryDraft, EntryPatch};

fn usage() -> ! {
    eprintln!("Usage: mobdex-admin <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list [category]          List entries, optionally one category");
    eprintln!("  show <id>                Print one entry as JSON");
    eprintln!("  create <draft.json>      Create an entry from a draft file");
    eprintln!("  update <id> <patch.json> Apply a partial update");
    eprintln!("  delete <id>              Delete an entry");
    eprintln!("  seed                     Seed an empty catalog with the bundled dataset");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    if let Err(e) = run(&args[1..]).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    let catalog = if config.catalog.backend == "local" {
        CatalogService::new(Box::new(LocalStore::new()?))
    } else {
        CatalogService::new(Box::new(RemoteStore::new(&config.api)?))
    };

    match args[0].as_str() {
        "list" => {
            let mut entries = catalog.load_remote().await?;
            if let Some(raw) = args.get(1) {
                let category: Category = raw.parse()?;
                entries.retain(|e| e.category == category);
            }
            for entry in &entries {
                println!(
                    "{:>4}  {:<20} {:<8} {:>6} HP  {}",
                    entry.id, entry.name, entry.category.to_string(), entry.health, entry.rarity
                );
            }
            eprintln!("{} entries", entries.len());
        }
        "show" => {
            let id = args.get(1).unwrap_or_else(|| usage());
            let entries = catalog.load_remote().await?;
            let entry = entries
                .iter()
                .find(|e| &e.id == id)
                .with_context(|| format!("No entry with id {}", id))?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        "create" => {
            let path = args.get(1).unwrap_or_else(|| usage());
            let contents = std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read {}", path))?;
            let draft: EntryDraft =
                serde_json::from_str(&contents).context("Invalid draft JSON")?;
            let entry = catalog.create(draft).await?;
            println!("Created '{}' with id {}", entry.name, entry.id);
        }
        "update" => {
            let id = args.get(1).unwrap_or_else(|| usage());
            let path = args.get(2).unwrap_or_else(|| usage());
            let contents = std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read {}", path))?;
            let patch: EntryPatch =
                serde_json::from_str(&contents).context("Invalid patch JSON")?;
            let entry = catalog.update(id, &patch).await?;
            println!("Updated '{}'", entry.name);
        }
        "delete" => {
            let id = args.get(1).unwrap_or_else(|| usage());
            catalog.delete(id).await?;
            println!("Deleted {}", id);
        }
        "seed" => {
            let seeded = catalog.seed_if_empty().await?;
            if seeded == 0 {
                println!("Catalog is not empty, nothing seeded");
            } else {
                println!("Seeded {} entries", seeded);
            }
        }
        _ => usage(),
    }

    Ok(())
}
