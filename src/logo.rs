use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Offset, Rect},
    text::Text,
    widgets::Widget,
};

/// The big "SNAKE GAME" banner shown on the title screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    const WORD_HEIGHT: u16 = 5;
    const SNAKE_WIDTH: u16 = 40;
    const GAME_WIDTH: u16 = 34;
    pub(crate) const HEIGHT: u16 = 2 * Self::WORD_HEIGHT + 1;
    pub(crate) const WIDTH: u16 = Self::SNAKE_WIDTH;
}

#[rustfmt::skip]
static SNAKE: &[&str] = &[
     " ____    _   _      _      _  __  _____ ",
    r"/ ___|  | \ | |    / \    | |/ / | ____|",
    r"\___ \  |  \| |   / _ \   | ' /  |  _|  ",
    r" ___) | | |\  |  / ___ \  | . \  | |___ ",
    r"|____/  |_| \_| /_/   \_\ |_|\_\ |_____|",
];

#[rustfmt::skip]
static GAME: &[&str] = &[
     "  ____      _      __  __   _____ ",
    r" / ___|    / \    |  \/  | | ____|",
    r"| |  _    / _ \   | |\/| | |  _|  ",
    r"| |_| |  / ___ \  | |  | | | |___ ",
    r" \____| /_/   \_\ |_|  |_| |_____|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(SNAKE.iter().copied())
            .style(consts::LOGO_STYLE)
            .render(area, buf);
        let game_area = area
            .offset(Offset {
                x: ((Self::SNAKE_WIDTH - Self::GAME_WIDTH) / 2).into(),
                y: (Self::WORD_HEIGHT + 1).into(),
            })
            .intersection(area);
        Text::from_iter(GAME.iter().copied())
            .style(consts::LOGO_STYLE)
            .render(game_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 43, 14));
        Logo.render(Rect::new(3, 2, Logo::WIDTH, Logo::HEIGHT), &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "",
            "    ____    _   _      _      _  __  _____ ",
            r"   / ___|  | \ | |    / \    | |/ / | ____|",
            r"   \___ \  |  \| |   / _ \   | ' /  |  _|  ",
            r"    ___) | | |\  |  / ___ \  | . \  | |___ ",
            r"   |____/  |_| \_| /_/   \_\ |_|\_\ |_____|",
            "",
            "        ____      _      __  __   _____ ",
            r"       / ___|    / \    |  \/  | | ____|",
            r"      | |  _    / _ \   | |\/| | |  _|  ",
            r"      | |_| |  / ___ \  | |  | | | |___ ",
            r"       \____| /_/   \_\ |_|  |_| |_____|",
            "",
        ]);
        expected.set_style(Rect::new(3, 2, 40, 11), consts::LOGO_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
