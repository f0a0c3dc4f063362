use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        if let Ok(read_dir) = fs::read_dir(&dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    stack.push(path);
                } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
                    files.push(path);
                }
            }
        }
    }
    files
}

fn files_containing(root: &Path, needles: &[&str]) -> Vec<String> {
    collect_rs_files(root)
        .into_iter()
        .filter(|file| {
            fs::read_to_string(file)
                .map(|c| needles.iter().any(|needle| c.contains(needle)))
                .unwrap_or(false)
        })
        .map(|file| file.to_string_lossy().to_string())
        .collect()
}

#[test]
fn handlers_and_services_do_not_query_tables_directly() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let needles = [
        "FROM posts",
        "INSERT INTO posts",
        "FROM comments",
        "INSERT INTO comments",
        "FROM likes",
        "INSERT INTO likes",
    ];

    let mut offenders = Vec::new();
    for layer in ["handlers", "services"] {
        offenders.extend(files_containing(&src_root.join(layer), &needles));
    }

    if !offenders.is_empty() {
        panic!(
            "Table access belongs in the repository layer. Offenders: {:?}",
            offenders
        );
    }
}

#[test]
fn likes_are_never_updated_or_deleted() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let offenders = files_containing(&src_root, &["UPDATE likes", "DELETE FROM likes"]);

    assert!(
        offenders.is_empty(),
        "Likes are append-only. Offenders: {:?}",
        offenders
    );
}
