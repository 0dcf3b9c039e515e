use std::fs::File;
use std::io;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Deflate-compress the whole output tree into a single zip archive,
/// preserving the `<team slug>/<player id>.<ext>` layout.
/// Returns the number of files packed.
pub fn archive_dir(src: &Path, dest: &Path) -> Result<u64, Box<dyn std::error::Error>> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    add_dir(&mut zip, src, src, options, &mut count)?;
    zip.finish()?;

    Ok(count)
}

fn add_dir(
    zip: &mut ZipWriter<File>,
    root: &Path,
    dir: &Path,
    options: SimpleFileOptions,
    count: &mut u64,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let name = entry_name(root, &path)?;

        if path.is_dir() {
            zip.add_directory(name, options)?;
            add_dir(zip, root, &path, options, count)?;
        } else {
            zip.start_file(name, options)?;
            let mut file = File::open(&path)?;
            io::copy(&mut file, zip)?;
            *count += 1;
        }
    }

    Ok(())
}

/// Entry names are root-relative with forward slashes
fn entry_name(root: &Path, path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let rel = path.strip_prefix(root)?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
