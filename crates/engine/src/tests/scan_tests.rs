use super::helpers::touch;
use crate::*;
use anyhow::Result;
use std::fs;
use tempfile::tempdir;

// --------------------- Discovery ---------------------

#[test]
fn empty_directory_has_no_tiles() -> Result<()> {
    let dir = tempdir()?;
    let cleaner = Cleaner::new(dir.path());
    assert!(cleaner.scan_map_tiles()?.is_empty());
    Ok(())
}

#[test]
fn finds_flat_map_files_sorted() -> Result<()> {
    let dir = tempdir()?;
    touch(dir.path(), "map_5_3.bin");
    touch(dir.path(), "map_-2_7.bin");
    touch(dir.path(), "map_5_1.bin");
    let cleaner = Cleaner::new(dir.path());

    let tiles = cleaner.scan_map_tiles()?;
    assert_eq!(tiles, [(-2, 7), (5, 1), (5, 3)]);
    Ok(())
}

#[test]
fn ignores_files_that_are_not_map_tiles() -> Result<()> {
    let dir = tempdir()?;
    touch(dir.path(), "map_1_2.bin");
    touch(dir.path(), "chunkdata_0_0.bin");
    touch(dir.path(), "zpop_0_0.bin");
    touch(dir.path(), "map_meta.bin");
    touch(dir.path(), "map_bad_name.bin");
    touch(dir.path(), "readme.txt");
    let cleaner = Cleaner::new(dir.path());

    assert_eq!(cleaner.scan_map_tiles()?, [(1, 2)]);
    Ok(())
}

#[test]
fn finds_nested_map_files() -> Result<()> {
    let dir = tempdir()?;
    let leaf = dir.path().join("3").join("-4");
    fs::create_dir_all(&leaf)?;
    fs::write(leaf.join("map_3_-4.bin"), b"")?;
    touch(dir.path(), "map_0_0.bin");
    let cleaner = Cleaner::new(dir.path());

    assert_eq!(cleaner.scan_map_tiles()?, [(0, 0), (3, -4)]);
    Ok(())
}

#[test]
fn skips_non_numeric_subdirectories() -> Result<()> {
    let dir = tempdir()?;
    let foreign = dir.path().join("backups").join("old");
    fs::create_dir_all(&foreign)?;
    fs::write(foreign.join("map_9_9.bin"), b"")?;
    let cleaner = Cleaner::new(dir.path());

    assert!(cleaner.scan_map_tiles()?.is_empty());
    Ok(())
}

// --------------------- Errors ---------------------

#[test]
fn missing_directory_is_an_error() {
    let cleaner = Cleaner::new("/definitely/not/here");
    let err = cleaner.scan_map_tiles().unwrap_err();
    assert!(err.to_string().starts_with("Directory not found:"));
}

#[test]
fn file_path_is_not_a_directory() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("save.txt");
    fs::write(&file, b"")?;
    let cleaner = Cleaner::new(&file);

    let err = cleaner.scan_map_tiles().unwrap_err();
    assert!(err.to_string().starts_with("Not a directory:"));
    Ok(())
}

// --------------------- Coverage ---------------------

#[test]
fn coverage_summarizes_bounding_box() {
    let tiles = [(2, 5), (7, 3), (4, 9)];
    let coverage = Coverage::from_tiles(&tiles).unwrap();
    assert_eq!(coverage.files, 3);
    assert_eq!(coverage.min_x, 2);
    assert_eq!(coverage.max_x, 7);
    assert_eq!(coverage.min_y, 3);
    assert_eq!(coverage.max_y, 9);
    assert_eq!(coverage.width(), 6);
    assert_eq!(coverage.height(), 7);
}

#[test]
fn coverage_of_nothing_is_none() {
    assert!(Coverage::from_tiles(&[]).is_none());
}

#[test]
fn single_tile_coverage() {
    let coverage = Coverage::from_tiles(&[(-3, 4)]).unwrap();
    assert_eq!(coverage.min_x, -3);
    assert_eq!(coverage.max_x, -3);
    assert_eq!((coverage.width(), coverage.height()), (1, 1));
}
