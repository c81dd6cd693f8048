use crossterm::{cursor, execute, terminal};
use std::io;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use iothello::core::Player;
    use iothello::game::Game;
    use iothello::ml::ModelBank;
    use iothello::player::ai::{GreedyAI, ModelAI, RandomAI};
    use iothello::player::{PlayerController, TuiController};
    use std::time::Duration;

    loop {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        print!("=== OTHELLO 6x6 ===\r\n");

        print!("\r\nSelect mode:\r\n");
        print!("1. Human vs Model AI\r\n");
        print!("2. Human vs Greedy AI\r\n");
        print!("3. Watch Model AI vs Random\r\n");
        print!("q. Quit\r\n");

        let mode = loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => break "model",
                        KeyCode::Char('2') => break "greedy",
                        KeyCode::Char('3') => break "watch",
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        };

        let black: Box<dyn PlayerController> = match mode {
            "greedy" => Box::new(GreedyAI::new("Greedy AI")),
            _ => {
                // モデルが読めなければ ModelAI 内で貪欲戦略に切り替わる
                let bank = ModelBank::load("Models").ok();
                Box::new(ModelAI::new("Model AI", bank))
            }
        };

        let white: Box<dyn PlayerController> = match mode {
            "watch" => Box::new(RandomAI::new("Random AI")),
            _ => Box::new(TuiController::new(Player::White, "You")),
        };

        let mut game = Game::new();
        game.play(white.as_ref(), black.as_ref());
    }
}
