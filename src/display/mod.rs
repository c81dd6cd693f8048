use crate::core::board::INNER;
use crate::core::{Board, Move};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Move,
    pub highlights: Vec<Move>,
    pub last_move: Option<Move>,
    pub status_msg: Option<String>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Move::new(3, 3),
            highlights: Vec::new(),
            last_move: None,
            status_msg: None,
            show_cursor: false,
        }
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== OTHELLO 6x6 ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // 列ラベル
    print!("   ");
    for col in 1..=INNER {
        print!("  {} ", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "----".repeat(INNER));

    for row in 1..=INNER {
        print!("{:2} |", row);
        for col in 1..=INNER {
            let mv = Move::new(row, col);
            let cell = board.get(row, col);

            let is_cursor = state.show_cursor && state.cursor == mv;
            let is_highlight = state.highlights.contains(&mv);
            let is_last_move = state.last_move == Some(mv);

            let glyph = match cell {
                1 => "○",
                -1 => "●",
                _ => ".",
            };

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_highlight {
                ("(", ")")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{} {}{}", prefix, glyph, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else if cell == 1 {
                print!("{}", cell_text.cyan());
            } else if cell == -1 {
                print!("{}", cell_text.magenta());
            } else {
                print!("{}", cell_text);
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(INNER));

    // スコア表示
    let flat = board.flatten_inner();
    let white = flat.iter().filter(|&&v| v == 1).count();
    let black = flat.iter().filter(|&&v| v == -1).count();
    print!(
        "\r\n{}   {}\r\n\r\n",
        format!("White ○: {}", white).cyan(),
        format!("Black ●: {}", black).magenta()
    );
}
