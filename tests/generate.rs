use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sinegen::{read_samples, SampleFormat, SignalError, SignalModel, SignalSampler};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}_{}", prefix, std::process::id(), nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn generate_returns_file_size() {
    let dir = unique_temp_dir("sinegen_size");
    let path = dir.join("sinus.csv");

    let mut model = SignalModel::new();
    let written = model.generate(&path).expect("generate failed");

    let metadata = fs::metadata(&path).expect("missing output file");
    assert_eq!(written, metadata.len());

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 100);
    assert!(text.ends_with('\n'));
    assert!(text.lines().all(|line| line.split(',').count() == 2));
    assert!(text.starts_with("0,0\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn round_trip_matches_sampler() {
    let dir = unique_temp_dir("sinegen_roundtrip");
    let path = dir.join("sinus.csv");

    let mut model = SignalModel::new();
    model.set_offset(1.0);
    model.set_amplitude(2.5);
    model.set_angular_frequency(7.0).unwrap();
    model.set_phase(0.3);
    model.set_window_stop(3.0).unwrap();
    model.set_window_start(0.5).unwrap();
    model.set_point_count(257).unwrap();
    model.generate(&path).unwrap();

    let expected = SignalSampler::new().compute(&model.parameters(), &model.window());
    let parsed = read_samples(&path, &SampleFormat::default()).unwrap();

    assert_eq!(parsed.len(), 257);
    for (read, computed) in parsed.iter().zip(&expected) {
        assert!((read.t - computed.t).abs() < 1e-3);
        assert!((read.value - computed.value).abs() < 1e-3);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fixed_precision_round_trip_within_tolerance() {
    let dir = unique_temp_dir("sinegen_precision");
    let path = dir.join("sinus.tsv");
    let format = SampleFormat::new('\t').unwrap().with_precision(4);

    let mut model = SignalModel::new();
    let written = model.generate_with(&path, &format).unwrap();
    assert_eq!(written, fs::metadata(&path).unwrap().len());

    let parsed = read_samples(&path, &format).unwrap();
    let expected = model.samples().to_vec();
    assert_eq!(parsed.len(), expected.len());
    for (read, computed) in parsed.iter().zip(&expected) {
        assert!((read.t - computed.t).abs() < 1e-3);
        assert!((read.value - computed.value).abs() < 1e-3);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn repeated_generate_does_not_recompute() {
    let dir = unique_temp_dir("sinegen_repeat");
    let first = dir.join("first.csv");
    let second = dir.join("second.csv");

    let mut model = SignalModel::new();
    model.set_point_count(50).unwrap();
    model.generate(&first).unwrap();
    assert_eq!(model.recompute_count(), 1);
    assert!(!model.is_dirty());

    model.generate(&second).unwrap();
    assert_eq!(model.recompute_count(), 1);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    model.set_amplitude(4.0);
    model.generate(&second).unwrap();
    assert_eq!(model.recompute_count(), 2);
    assert_ne!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_overwrites_existing_file() {
    let dir = unique_temp_dir("sinegen_overwrite");
    let path = dir.join("sinus.csv");
    fs::write(&path, "stale content that is much longer than the new file\n".repeat(100)).unwrap();

    let mut model = SignalModel::new();
    model.set_point_count(3).unwrap();
    let written = model.generate(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.len() as u64, written);
    assert_eq!(text.lines().count(), 3);
    assert!(!text.contains("stale"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_path_is_io_failure() {
    let dir = unique_temp_dir("sinegen_io");
    let path = dir.join("missing").join("sinus.csv");

    let mut model = SignalModel::new();
    let err = model.generate(&path).unwrap_err();
    assert!(matches!(err, SignalError::Io(_)));

    // The samples were still refreshed before the write failed.
    assert!(!model.is_dirty());
    assert_eq!(model.recompute_count(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reading_missing_file_is_io_failure() {
    let dir = unique_temp_dir("sinegen_read");
    let err = read_samples(&dir.join("absent.csv"), &SampleFormat::default()).unwrap_err();
    assert!(matches!(err, SignalError::Io(_)));

    let _ = fs::remove_dir_all(&dir);
}
