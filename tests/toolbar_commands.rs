use drawing_board::brush::{CORNFLOWER_BLUE, MAX_WIDTH, MIN_WIDTH};
use drawing_board::canvas::TRANSPARENT;
use drawing_board::{BrushMode, Command, DrawingBoard, InputEvent};
use egui::{Color32, pos2};
use image::Rgba;

#[test]
fn test_label_matches_every_slider_position() {
    let mut board = DrawingBoard::new();
    for step in 0..=490 {
        let value = MIN_WIDTH as f32 + step as f32 * 0.1;
        board.execute(Command::SetWidth(value)).unwrap();

        let expected = value.round() as u32;
        assert_eq!(board.brush().width(), expected);
        assert_eq!(board.brush().width_label(), expected.to_string());
    }
    assert_eq!(board.brush().width(), MAX_WIDTH);
}

#[test]
fn test_set_color_changes_strokes_and_fill() {
    let mut board = DrawingBoard::new();
    assert_eq!(board.brush().color(), CORNFLOWER_BLUE);

    let green = Color32::from_rgb(0, 200, 0);
    board.execute(Command::SetColor(green)).unwrap();

    board.handle_input(&InputEvent::PointerDown { position: pos2(20.0, 20.0) });
    board.handle_input(&InputEvent::PointerMove { position: pos2(80.0, 20.0) });
    board.handle_input(&InputEvent::PointerUp { position: pos2(80.0, 20.0) });
    assert_eq!(board.canvas().pixel(50, 20), Some(Rgba([0, 200, 0, 255])));

    let purple = Color32::from_rgb(120, 0, 160);
    board.execute(Command::SetColor(purple)).unwrap();
    board.execute(Command::Fill).unwrap();
    assert!(board.canvas().image().pixels().all(|p| *p == Rgba([120, 0, 160, 255])));
}

#[test]
fn test_draw_and_erase_are_mutually_exclusive() {
    let mut board = DrawingBoard::new();
    assert_eq!(board.brush().mode(), BrushMode::Draw);

    board.execute(Command::SetMode(BrushMode::Erase)).unwrap();
    assert!(board.brush().is_erasing());
    assert!(!board.brush().is_drawing());

    board.execute(Command::SetMode(BrushMode::Draw)).unwrap();
    assert!(board.brush().is_drawing());
    assert!(!board.brush().is_erasing());
}

#[test]
fn test_clear_wipes_the_canvas() {
    let mut board = DrawingBoard::new();
    board.execute(Command::Fill).unwrap();
    board.execute(Command::Clear).unwrap();
    assert!(board.canvas().image().pixels().all(|p| *p == TRANSPARENT));
}

#[test]
fn test_command_names() {
    assert_eq!(Command::Clear.name(), "Clear");
    assert_eq!(Command::Save(None).name(), "Save");
    assert_eq!(Command::SetMode(BrushMode::Erase).name(), "Set Mode");
}
