use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fg_results::{DEFAULT_DIM, DirStatus, Frame, check_make_dir, df_paraview_to_fg};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn create_then_detect() {
    let root = unique_temp_dir("fg_results_dirs");
    let nested = root.join("case_01").join("plots");
    assert!(!nested.exists());

    assert_eq!(check_make_dir(&nested).unwrap(), DirStatus::Created);
    assert!(nested.is_dir());

    assert_eq!(check_make_dir(&nested).unwrap(), DirStatus::AlreadyExists);
    assert!(nested.is_dir());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn regular_file_in_the_way() {
    let root = unique_temp_dir("fg_results_file");
    fs::create_dir_all(&root).unwrap();
    let file = root.join("taken");
    fs::write(&file, "x").unwrap();

    assert!(check_make_dir(&file).is_err());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn renamed_frame_roundtrip() {
    let root = unique_temp_dir("fg_results_frame");
    check_make_dir(&root).unwrap();

    let frame = Frame::new()
        .with_column("Points:0", vec![0.0, 1e-3, 2e-3])
        .unwrap()
        .with_column("TEMPE", vec![300.0, 1200.0, 2100.0])
        .unwrap();
    let renamed = df_paraview_to_fg(frame, DEFAULT_DIM);

    let path = root.join("line.json");
    renamed.save_json(&path).unwrap();
    let loaded = Frame::load_json(&path).unwrap();
    assert_eq!(loaded, renamed);
    assert_eq!(loaded.column_names(), ["x(m)", "T(K)"]);

    let _ = fs::remove_dir_all(&root);
}
