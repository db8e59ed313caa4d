//! Packmule CLI - asset embedding compiler
//!
//! Usage: packmule <COMMAND>
//!
//! Commands:
//!   pack   Compress and embed assets into a generated source file
//!   list   Show the assets that would be packed, without writing
//!   check  Verify the generated file is up to date (CI guard)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use packmule::{check, compile, pack, CheckStatus, Config, Encoding, PackOptions};

/// Packmule - asset embedding compiler
#[derive(Parser, Debug)]
#[command(name = "packmule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Suppress per-asset progress lines
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress and embed assets into a generated source file
    Pack {
        /// Root directory to scan for assets
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output file path (relative to the root directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extension to pack; repeat for several (default: png, wav, ogg)
        #[arg(short, long = "ext")]
        ext: Vec<String>,

        /// Text encoding: base64 or codepoint
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Show the assets that would be packed, without writing
    List {
        /// Root directory to scan for assets
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Extension to pack; repeat for several (default: png, wav, ogg)
        #[arg(short, long = "ext")]
        ext: Vec<String>,
    },

    /// Verify the generated file is up to date (exits non-zero when stale)
    Check {
        /// Root directory to scan for assets
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output file path (relative to the root directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extension to pack; repeat for several (default: png, wav, ogg)
        #[arg(short, long = "ext")]
        ext: Vec<String>,

        /// Text encoding: base64 or codepoint
        #[arg(long)]
        encoding: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            root,
            output,
            ext,
            encoding,
        } => cmd_pack(root, output, ext, encoding, cli.json, cli.quiet),
        Commands::List { root, ext } => cmd_list(root, ext, cli.json),
        Commands::Check {
            root,
            output,
            ext,
            encoding,
        } => cmd_check(root, output, ext, encoding, cli.json),
    }
}

/// Resolve config file + CLI flags into run options (CLI wins)
fn resolve_options(
    root: PathBuf,
    output: Option<PathBuf>,
    ext: Vec<String>,
    encoding: Option<String>,
    json: bool,
) -> Result<PackOptions> {
    let (config, warnings) = Config::load_or_default(&root)?;

    for warning in &warnings {
        if !json {
            eprintln!(
                "⚠ Unknown key '{}' in {} (ignored)",
                warning.key,
                warning.file.display()
            );
        }
    }

    let mut options = PackOptions::from_config(root, &config);
    if let Some(output) = output {
        options.output = output;
    }
    if !ext.is_empty() {
        options.extensions = ext;
    }
    if let Some(encoding) = encoding {
        options.encoding = parse_encoding(&encoding)?;
    }
    Ok(options)
}

fn parse_encoding(value: &str) -> Result<Encoding> {
    match value {
        "base64" => Ok(Encoding::Base64),
        "codepoint" => Ok(Encoding::Codepoint),
        other => anyhow::bail!("unknown encoding '{other}' (expected base64 or codepoint)"),
    }
}

fn fmt_size(bytes: usize) -> String {
    if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn cmd_pack(
    root: PathBuf,
    output: Option<PathBuf>,
    ext: Vec<String>,
    encoding: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let options = resolve_options(root, output, ext, encoding, json)?;

    if !json && !quiet {
        println!("📦 Packmule Pack");
        println!("Root: {}", options.root.display());
        println!("Encoding: {}", options.encoding);
        println!();
    }

    let report = pack(&options)?;

    if json {
        for asset in &report.assets {
            let event = serde_json::json!({
                "event": "asset",
                "name": asset.name.as_str(),
                "source": asset.source_path.display().to_string(),
                "raw_bytes": asset.raw_len,
                "compressed_bytes": asset.compressed_len,
            });
            println!("{}", serde_json::to_string(&event)?);
        }
        let summary = serde_json::json!({
            "event": "pack",
            "status": "success",
            "assets": report.assets.len(),
            "output": report.output.display().to_string(),
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        if !quiet {
            for asset in &report.assets {
                println!(
                    "  ✓ {} -> {} ({} -> {})",
                    asset.source_path.display(),
                    asset.name,
                    fmt_size(asset.raw_len),
                    fmt_size(asset.compressed_len)
                );
            }
            println!();
        }
        println!(
            "Packed {} assets into {}",
            report.assets.len(),
            report.output.display()
        );
    }

    Ok(())
}

fn cmd_list(root: PathBuf, ext: Vec<String>, json: bool) -> Result<()> {
    let options = resolve_options(root, None, ext, None, json)?;

    if !json {
        println!("🔍 Listing assets under {}", options.root.display());
        println!();
    }

    let compiled = compile(&options)?;

    if json {
        for asset in &compiled.assets {
            let event = serde_json::json!({
                "event": "asset",
                "name": asset.name.as_str(),
                "source": asset.source_path.display().to_string(),
                "raw_bytes": asset.raw_len,
                "compressed_bytes": asset.compressed_len,
            });
            println!("{}", serde_json::to_string(&event)?);
        }
    } else {
        for asset in &compiled.assets {
            println!(
                "  {} <- {} ({})",
                asset.name,
                asset.source_path.display(),
                fmt_size(asset.raw_len)
            );
        }
        println!();
        println!("{} assets", compiled.assets.len());
    }

    Ok(())
}

fn cmd_check(
    root: PathBuf,
    output: Option<PathBuf>,
    ext: Vec<String>,
    encoding: Option<String>,
    json: bool,
) -> Result<()> {
    let options = resolve_options(root, output, ext, encoding, json)?;
    let status = check(&options)?;

    let (label, up_to_date) = match status {
        CheckStatus::UpToDate => ("up-to-date", true),
        CheckStatus::Stale => ("stale", false),
        CheckStatus::Missing => ("missing", false),
    };

    if json {
        let event = serde_json::json!({
            "event": "check",
            "output": options.output_path().display().to_string(),
            "status": label,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else if up_to_date {
        println!("🟢 {} is up to date", options.output_path().display());
    } else {
        println!(
            "🔴 {} is {} - run `packmule pack`",
            options.output_path().display(),
            label
        );
    }

    if !up_to_date {
        std::process::exit(1);
    }
    Ok(())
}
