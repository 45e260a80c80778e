use ansi_term::{Colour, Style};
use std::io::{self, Write};

/// Restituisce il colore ANSI in base al tempo rimanente
fn color_for_remaining(secs_left: u32) -> Colour {
    match secs_left {
        0..=9 => Colour::Red,
        10..=59 => Colour::Yellow,
        _ => Colour::Green,
    }
}

/// Redraw the countdown line in place. The line stays on `\r` so the next
/// render overwrites it instead of scrolling the terminal.
pub fn render_remaining(display: &str, secs_left: u32) {
    let painted = color_for_remaining(secs_left).bold().paint(display);
    let hints = Style::new().dimmed().paint("[s]top  [r]estart  [q]uit");

    print!("\r⏳ {}   {} ", painted, hints);
    io::stdout().flush().ok();
}

/// Erase the countdown line before printing the closing message.
pub fn clear_line() {
    print!("\r\x1b[2K");
    io::stdout().flush().ok();
}
