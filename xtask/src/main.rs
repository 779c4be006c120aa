//! Build automation tasks for dino-folio
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM + static site into dist/web
//!   cargo xtask package-itch    # Create zip for itch.io upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const WASM_NAME: &str = "dino-folio.wasm";

/// Read by the game at compile time for the version label
const BUILD_TIME_VAR: &str = "DINO_FOLIO_BUILD_TIME";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for dino-folio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment (GitHub Pages)
    BuildWeb {
        /// Mark as dev build (adds DEV prefix to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageItch => package_itch(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// UTC build time for the in-game version label, if `date` is available
fn build_stamp() -> Option<String> {
    let output = Command::new("date")
        .args(["-u", "+%Y-%m-%d %H:%M UTC"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let stamp = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!stamp.is_empty()).then_some(stamp)
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Minimal page that hosts the canvas when the repo has no web/index.html
fn default_index_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Portfolio</title>
  <style>html, body, canvas {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: #15161b; }}</style>
</head>
<body>
  <canvas id="glcanvas" tabindex="1"></canvas>
  <script src="mq_js_bundle.js"></script>
  <script>load("{}");</script>
</body>
</html>
"#,
        WASM_NAME
    )
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    let mut cargo = Command::new("cargo");
    cargo
        .current_dir(&root)
        .args(["build", "--release", "--target", "wasm32-unknown-unknown"]);
    match build_stamp() {
        Some(stamp) => {
            println!("Build stamp: {}", stamp);
            cargo.env(BUILD_TIME_VAR, stamp);
        }
        None => println!("No build stamp (date unavailable)"),
    }
    run_cmd(&mut cargo)?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(WASM_NAME),
        dist.join(WASM_NAME),
    )
    .context("WASM binary missing - did the build target change?")?;

    let index_src = root.join("web/index.html");
    let index_dst = dist.join("index.html");
    if index_src.exists() {
        std::fs::copy(&index_src, &index_dst)?;
    } else {
        std::fs::write(&index_dst, default_index_html())?;
    }

    // Download macroquad JS bundle
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    let assets = root.join("assets");
    if assets.exists() {
        copy_dir_recursive(&assets, &dist.join("assets"))?;
    }

    if dev {
        println!("Applying DEV build modifications...");
        let index = std::fs::read_to_string(&index_dst)?;
        let index = index.replace("<title>", "<title>[DEV] ");
        std::fs::write(&index_dst, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_path = dist.join("dino-folio-itch.zip");

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", "../dino-folio-itch.zip", "."]),
    )?;

    println!("itch.io package ready: dist/dino-folio-itch.zip");
    Ok(())
}
