use crate::config::ToolConfig;
use crate::format::Container;
use crate::stats::CompressionStats;
use crate::utils::hash::sha256;
use crate::utils::io::{read_file, write_file_atomic};
use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn compress_file(
    input: &Path,
    output: Option<PathBuf>,
    force: bool,
    config: &ToolConfig,
) -> Result<()> {
    let data = read_file(input).with_context(|| format!("cannot read {}", input.display()))?;

    let container = Container::compress(&data)?;
    let bytes = container.to_bytes();

    let target = output.unwrap_or_else(|| append_suffix(input, &config.output_suffix));
    check_target(&target, force, config)?;
    write_file_atomic(&target, &bytes)
        .with_context(|| format!("cannot write {}", target.display()))?;

    info!(input = %input.display(), output = %target.display(), "compressed");
    println!("✅ Compressed {} -> {}", input.display(), target.display());

    if config.report_stats {
        let stats = CompressionStats::from_container(&container, bytes.len() as u64);
        println!("   Original bits : {}", stats.original_bits());
        println!("   Encoded bits  : {}", stats.encoded_bits);
        println!("   Payload saved : {:.2}%", stats.payload_savings_percent());
        println!(
            "   Container     : {} bytes ({:.2}x of original)",
            stats.container_bytes,
            stats.container_ratio()
        );
    }

    Ok(())
}

pub fn decompress_file(
    input: &Path,
    output: Option<PathBuf>,
    force: bool,
    config: &ToolConfig,
) -> Result<()> {
    let bytes = read_file(input).with_context(|| format!("cannot read {}", input.display()))?;

    let container = Container::from_bytes(&bytes)
        .with_context(|| format!("{} is not a valid container", input.display()))?;
    let data = container.decompress()?;

    let target = output.unwrap_or_else(|| restore_target(input, &config.output_suffix));
    check_target(&target, force, config)?;
    write_file_atomic(&target, &data)
        .with_context(|| format!("cannot write {}", target.display()))?;

    info!(input = %input.display(), output = %target.display(), "decompressed");
    println!("✅ Decompressed {} -> {}", input.display(), target.display());
    println!("   Restored {} bytes", data.len());

    Ok(())
}

pub fn inspect_file(input: &Path, json: bool) -> Result<()> {
    let bytes = read_file(input).with_context(|| format!("cannot read {}", input.display()))?;

    let container = Container::from_bytes(&bytes)
        .with_context(|| format!("{} is not a valid container", input.display()))?;
    let stats = CompressionStats::from_container(&container, bytes.len() as u64);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("📦 {}", input.display());
    println!("   Symbols    : {}", container.symbol_count());
    println!("   Bit count  : {}", container.bit_count);
    println!("   Payload    : {} bytes", container.payload.len());
    println!("   Original   : {} bytes", container.original_size());
    if !container.entries.is_empty() {
        println!("   Table (first-seen order):");
        for &(symbol, freq) in &container.entries {
            println!("     0x{:02x} {} x{}", symbol, printable(symbol), freq);
        }
    }

    Ok(())
}

pub fn verify_file(original: &Path, container_path: &Path) -> Result<()> {
    let original_data =
        read_file(original).with_context(|| format!("cannot read {}", original.display()))?;
    let bytes = read_file(container_path)
        .with_context(|| format!("cannot read {}", container_path.display()))?;

    let container = Container::from_bytes(&bytes)
        .with_context(|| format!("{} is not a valid container", container_path.display()))?;
    let restored = container.decompress()?;

    let original_hash = sha256(&original_data);
    let restored_hash = sha256(&restored);

    if original_hash == restored_hash {
        println!("✅ Verified: contents match");
        println!("   sha256: {}", hex::encode(original_hash));
        Ok(())
    } else {
        println!("❌ Verification FAILED");
        println!("   original : {}", hex::encode(original_hash));
        println!("   restored : {}", hex::encode(restored_hash));
        bail!("decompressed output does not match {}", original.display());
    }
}

pub fn generate_config(output: &str) -> Result<()> {
    ToolConfig::default().save(output)?;
    println!("✅ Wrote default config to {}", output);
    Ok(())
}

fn check_target(target: &Path, force: bool, config: &ToolConfig) -> Result<()> {
    if target.exists() && !force && !config.overwrite {
        bail!(
            "refusing to overwrite {} (pass --force or set overwrite = true)",
            target.display()
        );
    }
    Ok(())
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Default decompression target: strip the compressed suffix if present,
/// otherwise append `.out` rather than clobber the input.
fn restore_target(path: &Path, suffix: &str) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == suffix => path.with_extension(""),
        _ => append_suffix(path, "out"),
    }
}

fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        "  .".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_name_appends_suffix() {
        assert_eq!(
            append_suffix(Path::new("notes.txt"), "huf"),
            PathBuf::from("notes.txt.huf")
        );
    }

    #[test]
    fn restore_strips_known_suffix() {
        assert_eq!(
            restore_target(Path::new("notes.txt.huf"), "huf"),
            PathBuf::from("notes.txt")
        );
    }

    #[test]
    fn restore_never_clobbers_unsuffixed_input() {
        assert_eq!(
            restore_target(Path::new("blob"), "huf"),
            PathBuf::from("blob.out")
        );
    }
}
