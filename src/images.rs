//! Screenshot discovery and encoding.

use anyhow::{Context, Result};
use base64::Engine;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// List image files in a directory, sorted by filename for deterministic
/// evaluation order. Extension matching is case-insensitive.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read images directory: {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let lower = ext.to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&lower.as_str())
            })
            .unwrap_or(false);
        if matches {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

pub fn encode_image_to_base64(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// MIME type from the file extension, defaulting to `image/png` when the
/// extension is unknown.
pub fn image_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| "image/png".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("a.JPG"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("c.jsx"), b"x").unwrap();

        let images = list_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_images(&missing).is_err());
    }

    #[test]
    fn encodes_bytes_to_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        fs::write(&path, b"image").unwrap();
        assert_eq!(encode_image_to_base64(&path).unwrap(), "aW1hZ2U=");
    }

    #[test]
    fn mime_type_falls_back_to_png() {
        assert_eq!(image_mime_type(Path::new("shot.jpg")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("shot.unknown")), "image/png");
    }
}
