use std::path::PathBuf;

use drawing_board::canvas::{CANVAS_HEIGHT, CANVAS_WIDTH};
use drawing_board::{Command, CommandError, DrawingBoard, ExportError, InputEvent};
use egui::{Color32, pos2};
use image::Rgba;

fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("drawing_board_{}_{}.png", name, std::process::id()))
}

fn scribble(board: &mut DrawingBoard) {
    board.handle_input(&InputEvent::PointerDown { position: pos2(30.0, 30.0) });
    board.handle_input(&InputEvent::PointerMove { position: pos2(300.0, 400.0) });
    board.handle_input(&InputEvent::PointerUp { position: pos2(300.0, 400.0) });
}

#[test]
fn test_clear_then_save_has_no_marks() {
    let path = temp_png("cleared");
    let mut board = DrawingBoard::new();
    scribble(&mut board);

    board.execute(Command::Clear).unwrap();
    board.execute(Command::Save(Some(path.clone()))).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(saved.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert!(saved.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_fill_then_save_is_uniform() {
    let path = temp_png("filled");
    let mut board = DrawingBoard::new();
    scribble(&mut board);

    board.execute(Command::SetColor(Color32::from_rgb(12, 34, 56))).unwrap();
    board.execute(Command::Fill).unwrap();
    board.execute(Command::Save(Some(path.clone()))).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(saved.dimensions(), (800, 740));
    assert!(saved.pixels().all(|p| *p == Rgba([12, 34, 56, 255])));
}

#[test]
fn test_saved_file_matches_canvas() {
    let path = temp_png("scribble");
    let mut board = DrawingBoard::new();
    scribble(&mut board);

    board.execute(Command::Save(Some(path.clone()))).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(saved.as_raw(), board.canvas().image().as_raw());
}

#[test]
fn test_cancelled_save_changes_nothing() {
    let mut board = DrawingBoard::new();
    scribble(&mut board);
    let version = board.canvas().version();
    let before = board.canvas().image().clone();

    board.execute(Command::Save(None)).unwrap();

    assert_eq!(board.canvas().version(), version);
    assert_eq!(board.canvas().image().as_raw(), before.as_raw());
}

#[test]
fn test_failed_save_leaves_canvas_untouched() {
    let path = std::env::temp_dir()
        .join(format!("drawing_board_no_such_dir_{}", std::process::id()))
        .join("out.png");
    let mut board = DrawingBoard::new();
    scribble(&mut board);
    let version = board.canvas().version();

    let result = board.execute(Command::Save(Some(path.clone())));

    assert!(matches!(result, Err(CommandError::Export(ExportError::Io { .. }))));
    assert_eq!(board.canvas().version(), version);
    assert!(!path.exists());
}
