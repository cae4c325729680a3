use twenty48::core::GameSnapshot;
use twenty48::input::KeyBindings;
use twenty48::term::{tile_style, AnchorY, BoardView, MenuScreen, Overlay, SidePanel, Viewport};

// 4x4 board with 6x1 tiles => 29x9 frame; a 49-wide viewport leaves room for
// the side panel and centres the frame at x=2.
const VP: Viewport = Viewport {
    width: 49,
    height: 20,
};

fn view() -> BoardView {
    BoardView::new(6, 1).with_anchor_y(AnchorY::Top)
}

fn panel() -> SidePanel {
    SidePanel {
        best_score: 100,
        keys: KeyBindings::WASD,
    }
}

fn snapshot() -> GameSnapshot {
    let mut snap = GameSnapshot::default();
    snap.board[0] = [2, 2048, 0, 0];
    snap.score = 36;
    snap.moves = 3;
    snap
}

fn span(text: &str, from: usize, len: usize) -> String {
    text.chars().skip(from).take(len).collect()
}

#[test]
fn term_view_renders_double_line_corners() {
    let fb = view().render(&snapshot(), &panel(), Overlay::None, VP);

    assert_eq!(fb.get(2, 0).unwrap().ch, '╔');
    assert_eq!(fb.get(30, 0).unwrap().ch, '╗');
    assert_eq!(fb.get(2, 8).unwrap().ch, '╚');
    assert_eq!(fb.get(30, 8).unwrap().ch, '╝');
    assert_eq!(fb.get(9, 0).unwrap().ch, '╦');
    assert_eq!(fb.get(9, 2).unwrap().ch, '╬');
}

#[test]
fn term_view_right_aligns_tiles() {
    let fb = view().render(&snapshot(), &panel(), Overlay::None, VP);

    assert_eq!(
        span(&fb.row_text(1), 2, 29),
        "║     2║  2048║      ║      ║"
    );
    assert_eq!(fb.get(8, 1).unwrap().style, tile_style(2));
    assert_eq!(fb.get(15, 1).unwrap().style, tile_style(2048));
    assert_eq!(fb.get(20, 1).unwrap().style, tile_style(0));
}

#[test]
fn term_view_side_panel_shows_scores_and_keys() {
    let fb = view().render(&snapshot(), &panel(), Overlay::None, VP);

    assert_eq!(span(&fb.row_text(0), 33, 5), "SCORE");
    assert_eq!(span(&fb.row_text(1), 33, 2), "36");
    assert_eq!(span(&fb.row_text(3), 33, 4), "BEST");
    assert_eq!(span(&fb.row_text(4), 33, 3), "100");
    assert_eq!(span(&fb.row_text(7), 33, 1), "3");
    assert_eq!(span(&fb.row_text(11), 33, 4), "KEYS");
    assert_eq!(span(&fb.row_text(12), 33, 7), "up    w");
    assert_eq!(span(&fb.row_text(16), 33, 7), "quit  q");
}

#[test]
fn term_view_skips_panel_when_too_narrow() {
    let fb = view().render(&snapshot(), &panel(), Overlay::None, Viewport::new(29, 9));
    assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
    assert_eq!(fb.get(28, 8).unwrap().ch, '╝');
}

#[test]
fn term_view_draws_overlay_text() {
    let fb = view().render(&snapshot(), &panel(), Overlay::Lost, VP);
    assert!(fb.row_text(3).contains("GAME OVER"));
    assert!(fb.row_text(4).contains("press any key"));

    let fb = view().render(&snapshot(), &panel(), Overlay::Won, VP);
    assert!(fb.row_text(3).contains("YOU WIN!"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let v = view();
    let snap = snapshot();
    let mut fb = v.render(&snap, &panel(), Overlay::None, VP);
    v.render_into(&snap, &panel(), Overlay::None, Viewport::new(60, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 30));
}

#[test]
fn menu_screen_renders_lines() {
    let fb = MenuScreen::new("Main Menu")
        .line("1. Play Game")
        .footer("Best score: 10")
        .render(Viewport::new(40, 10));
    let text: Vec<String> = (0..10).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|l| l.contains("Main Menu")));
    assert!(text.iter().any(|l| l.contains("1. Play Game")));
    assert!(text.iter().any(|l| l.contains("Best score: 10")));
}
