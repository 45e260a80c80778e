//! Backup of the sessions directory: plain per-file copies, or with
//! `--compress` a single archive (zip on Windows, tar.gz elsewhere).

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = cfg.sessions_path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check sessions directory exists
        if !src.is_dir() {
            return Err(AppError::Backup(format!(
                "Sessions directory not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Archives get the platform extension unless already spelled out
        let final_path = if compress {
            archive_path(dest)
        } else {
            dest.to_path_buf()
        };

        // ⛔ 4️⃣ If destination exists → ask confirmation
        if final_path.exists() && !confirm_overwrite(&final_path)? {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        if compress {
            compress_dir(&src, &final_path)?;
            println!("📦 Compressed: {}", final_path.display());
        } else {
            let copied = copy_dir_flat(&src, &final_path)?;
            println!("🗂️  Copied {} file(s)", copied);
        }

        println!("✅ Backup created: {}", final_path.display());

        Ok(())
    }
}

/// Destination path for the platform archive format: `.zip` on Windows,
/// `.tar.gz` elsewhere.
fn archive_path(dest: &Path) -> PathBuf {
    let ext = if cfg!(target_os = "windows") {
        "zip"
    } else {
        "tar.gz"
    };

    let name = dest.to_string_lossy();
    if name.ends_with(".zip") || name.ends_with(".tar.gz") {
        dest.to_path_buf()
    } else {
        PathBuf::from(format!("{}.{}", name, ext))
    }
}

fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        path.display()
    );

    let mut answer = String::new();
    print!("> ");
    io::stdout().flush().ok();
    io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Copy every file of `src` into the `dest` directory. Sessions dirs are
/// flat, so subdirectories are skipped.
fn copy_dir_flat(src: &Path, dest: &Path) -> AppResult<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };

        fs::copy(&path, dest.join(name))?;
        copied += 1;
    }

    Ok(copied)
}

/// Archive root entry name: the sessions directory's own name.
fn archive_root(src: &Path) -> String {
    src.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "sessions".to_string())
}

/// Compress the sessions directory into a .zip
#[cfg(target_os = "windows")]
fn compress_dir(src: &Path, dest: &Path) -> AppResult<()> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let root = archive_root(src);

    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut f = fs::File::open(&path)?;
        zip.start_file(format!("{}/{}", root, name.to_string_lossy()), options)
            .map_err(io::Error::other)?;

        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;

    Ok(())
}

/// Compress the sessions directory into a .tar.gz
#[cfg(not(target_os = "windows"))]
fn compress_dir(src: &Path, dest: &Path) -> AppResult<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let root = archive_root(src);

    let file = fs::File::create(dest)?;
    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);

    tar.append_dir_all(&root, src)?;

    // finish the tar, then the gzip stream beneath it
    let enc = tar.into_inner()?;
    enc.finish()?;

    Ok(())
}
