//! Show off the color palette: every foreground on every background.

use std::io::{Result, Write};

use lamtty::{Style, Terminal};

const FOREGROUNDS: [Style; 16] = [
    Style::Black,
    Style::Red,
    Style::Green,
    Style::Yellow,
    Style::Blue,
    Style::Magenta,
    Style::Cyan,
    Style::LightGray,
    Style::DarkGray,
    Style::LightRed,
    Style::LightGreen,
    Style::LightYellow,
    Style::LightBlue,
    Style::LightMagenta,
    Style::LightCyan,
    Style::White,
];

const BACKGROUNDS: [Style; 16] = [
    Style::BlackBg,
    Style::RedBg,
    Style::GreenBg,
    Style::YellowBg,
    Style::BlueBg,
    Style::MagentaBg,
    Style::CyanBg,
    Style::LightGrayBg,
    Style::DarkGrayBg,
    Style::LightRedBg,
    Style::LightGreenBg,
    Style::LightYellowBg,
    Style::LightBlueBg,
    Style::LightMagentaBg,
    Style::LightCyanBg,
    Style::WhiteBg,
];

fn main() -> Result<()> {
    lamtty::enable_utf8();

    let mut tty = Terminal::stdout();
    tty.set_title("lamtty palette");

    for background in BACKGROUNDS {
        for foreground in FOREGROUNDS {
            tty.format(&[foreground, background]);
            write!(tty, " {:>3} ", foreground.code())?;
        }
        tty.format(&[Style::Reset]);
        writeln!(tty)?;
    }

    tty.format(&[Style::Reset]);
    Ok(())
}
