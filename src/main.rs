use clap::Parser;
use daybook::application::{init, media_store, ConfigService, EntryStore, MediaStore};
use daybook::cli::{format_entry, format_entry_list, format_media_ref, format_stats, Cli, Commands};
use daybook::domain::{EntryDraft, EntryPatch, Mood};
use daybook::error::DaybookError;
use daybook::infrastructure::FileSystemRepository;
use std::io::{Read, Write};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaybookError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("data_file = {}", config.data_file);
                println!("media_dir = {}", config.media_dir);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, media_dir, created");
                Ok(())
            }
        }
        Some(Commands::List { json }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo)?;
            let entries = store.list();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", format_entry_list(&entries).trim_end());
            }
            Ok(())
        }
        Some(Commands::Show { id, json }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo)?;
            let entry = store.get(&id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                print!("{}", format_entry(entry));
            }
            Ok(())
        }
        Some(Commands::Add {
            date,
            content,
            mood,
            tags,
            id,
            json_input,
            json,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo)?;

            let draft = if json_input {
                read_stdin_json()?
            } else {
                let mood = parse_mood(mood)?;
                EntryDraft {
                    id,
                    date: date.unwrap_or_else(default_date),
                    content: content.unwrap_or_default(),
                    media: Vec::new(),
                    mood,
                    tags,
                }
            };

            let entry = store.create(draft)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("Created entry {}", entry.id);
            }
            Ok(())
        }
        Some(Commands::Edit {
            id,
            date,
            content,
            mood,
            clear_mood,
            tags,
            clear_tags,
            json_input,
            json,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo)?;

            let patch = if json_input {
                read_stdin_json()?
            } else {
                let mood = if clear_mood {
                    Some(None)
                } else {
                    parse_mood(mood)?.map(Some)
                };
                let tags = if clear_tags {
                    Some(Vec::new())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(tags)
                };
                EntryPatch {
                    date,
                    content,
                    media: None,
                    mood,
                    tags,
                }
            };

            let entry = store.update(&id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("Updated entry {}", entry.id);
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo)?;

            store.delete(&id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Some(Commands::Upload {
            file,
            mime,
            name,
            entry,
            json,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let media = MediaStore::open(repo.clone())?;

            let original_name = match name {
                Some(n) => n,
                None => file
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
                    .ok_or_else(|| {
                        DaybookError::Validation(format!(
                            "Cannot derive a filename from '{}'",
                            file.display()
                        ))
                    })?,
            };
            let mime = mime.unwrap_or_else(|| media_store::guess_mime(&original_name).to_string());
            let bytes = std::fs::read(&file)?;

            // When attaching, check the entry exists before the bytes land on disk
            let mut entry_store = match &entry {
                Some(entry_id) => {
                    let store = EntryStore::open(repo)?;
                    store.get(entry_id)?;
                    Some(store)
                }
                None => None,
            };

            let descriptor = media.store(&original_name, &mime, &bytes)?;

            if let (Some(entry_id), Some(store)) = (&entry, entry_store.as_mut()) {
                let mut media_list = store.get(entry_id)?.media.clone();
                media_list.push(descriptor.clone());
                let patch = EntryPatch {
                    media: Some(media_list),
                    ..Default::default()
                };
                store.update(entry_id, &patch)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
            } else {
                print!("{}", format_media_ref(&descriptor));
            }
            Ok(())
        }
        Some(Commands::Media { name, out }) => {
            let repo = FileSystemRepository::discover()?;
            let media = MediaStore::open(repo)?;

            // Accept either the bare storage name or the full locator
            let prefix = format!("/{}/", media.media_dir());
            let stored = name.strip_prefix(&prefix).unwrap_or(&name);
            let bytes = media.retrieve(stored)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    println!("Wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => {
                    std::io::stdout().write_all(&bytes)?;
                }
            }
            Ok(())
        }
        Some(Commands::Stats { json }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo)?;
            let stats = store.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats(&stats));
            }
            Ok(())
        }
        None => {
            println!("daybook - Personal journaling backend");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_mood(mood: Option<String>) -> Result<Option<Mood>, DaybookError> {
    mood.map(|m| Mood::from_str(&m).map_err(DaybookError::Validation))
        .transpose()
}

fn default_date() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn read_stdin_json<T: serde::de::DeserializeOwned>() -> Result<T, DaybookError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    serde_json::from_str(&buf)
        .map_err(|e| DaybookError::Validation(format!("Invalid JSON payload: {}", e)))
}
