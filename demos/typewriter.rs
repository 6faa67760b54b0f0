//! Typewriter Demo - a message typed on to the terminal
//!
//! Types the default message, then a second message on the same line to
//! show the restart when the message changes.
//!
//! Run with: cargo run --example typewriter
//! Set RUST_LOG=debug to see clock and component logging.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};
use spark_signals::signal;

use retro_text::{
    register_fonts, typed_text, Attr, FontStyle, LineRenderer, PropValue, Rgba, Speed,
    TypedTextProps, DEFAULT_MESSAGE,
};

fn main() -> retro_text::Result<()> {
    env_logger::init();
    register_fonts();

    let message = signal(DEFAULT_MESSAGE.to_string());
    let mut typed = typed_text(TypedTextProps {
        message: PropValue::Signal(message.clone()),
        speed: Speed::Fast,
        tick_interval: Duration::from_millis(50),
        font: Some(FontStyle::default()),
        attrs: Attr::BOLD,
        fg: Rgba::AMBER,
        ..Default::default()
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(terminal::ClearType::All), cursor::Hide)?;

    let mut renderer = LineRenderer::new(2, 1);
    let frame = typed.tick_interval() / 2;

    typed.start();
    run(&mut typed, &mut renderer, &mut stdout, frame)?;

    message.set("Press any key to continue###.".to_string());
    run(&mut typed, &mut renderer, &mut stdout, frame)?;

    execute!(stdout, cursor::MoveTo(0, 3), cursor::Show)?;
    writeln!(stdout)?;
    Ok(())
}

fn run(
    typed: &mut retro_text::TypedText,
    renderer: &mut LineRenderer,
    out: &mut impl Write,
    frame: Duration,
) -> retro_text::Result<()> {
    // Picks up the new message and restarts the clock if needed.
    typed.update();
    while !typed.is_finished() {
        typed.update();
        renderer.render_typed(out, typed)?;
        thread::sleep(frame);
    }
    renderer.render_typed(out, typed)?;
    Ok(())
}
