use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name without directory or extension, used to name results.
pub fn video_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists the files in `dir` with the given extension (case-insensitive),
/// ordered by base name. Subdirectories are not searched.
pub fn list_videos(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut videos = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            videos.push(path);
        }
    }
    videos.sort_by(|a, b| {
        video_base_name(a)
            .cmp(&video_base_name(b))
            .then_with(|| a.cmp(b))
    });
    Ok(videos)
}
