use std::path::PathBuf;
use std::process::Command;

fn arscreen_bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_arscreen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let profile_dir = if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            };
            let mut p = PathBuf::from("target").join(profile_dir);
            p.push(if cfg!(windows) {
                "arscreen.exe"
            } else {
                "arscreen"
            });
            p
        })
}

#[test]
fn cli_frame_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("frame.png");
    let _ = std::fs::remove_file(&out_path);

    let status = Command::new(arscreen_bin())
        .args(["frame", "--at-ms", "250", "--add", "3", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (400, 600));
}

#[test]
fn cli_run_writes_png_sequence() {
    let dir = PathBuf::from("target").join("cli_smoke_run");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let script_path = dir.join("script.json");
    let config_path = dir.join("config.json");
    let frames_dir = dir.join("frames");

    std::fs::write(
        &script_path,
        r#"{
  "duration_ms": 300,
  "events": [
    { "at_ms": 0, "event": "add" },
    { "at_ms": 150, "event": "toggle" }
  ]
}"#,
    )
    .unwrap();
    std::fs::write(
        &config_path,
        r##"{ "canvas": { "width": 96, "height": 64 }, "grid": { "spacing_px": 32 } }"##,
    )
    .unwrap();

    let status = Command::new(arscreen_bin())
        .arg("run")
        .arg("--script")
        .arg(&script_path)
        .arg("--config")
        .arg(&config_path)
        .arg("--out")
        .arg(&frames_dir)
        .status()
        .unwrap();
    assert!(status.success());

    // Frames at 0 and 100; paused from 150 on.
    assert!(frames_dir.join("frame_00000.png").is_file());
    assert!(frames_dir.join("frame_00001.png").is_file());
    assert!(!frames_dir.join("frame_00002.png").exists());
}

#[test]
fn cli_default_config_is_valid_json() {
    let out = Command::new(arscreen_bin())
        .arg("default-config")
        .output()
        .unwrap();
    assert!(out.status.success());
    let cfg = arscreen::ScreenConfig::from_reader(out.stdout.as_slice()).unwrap();
    assert_eq!(cfg, arscreen::ScreenConfig::default());
}

#[test]
fn cli_rejects_missing_script() {
    let status = Command::new(arscreen_bin())
        .args([
            "run",
            "--script",
            "target/does-not-exist.json",
            "--out",
            "target/cli_smoke_missing",
        ])
        .status()
        .unwrap();
    assert!(!status.success());
}
