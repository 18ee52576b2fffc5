//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(45);

/// Width of the walled playing field, in board units
pub(crate) const BOARD_WIDTH: i32 = 760;

/// Height of the walled playing field, in board units
pub(crate) const BOARD_HEIGHT: i32 = 520;

/// Board coordinates of the top-left corner of the wall surrounding the
/// playing field
pub(crate) const BOARD_ORIGIN: (i32, i32) = (20, 40);

/// How far the snake's head moves on each tick, in board units.  This is also
/// the size of one drawn cell.
pub(crate) const STEP: i32 = 10;

/// Distance (on each axis) within which the snake's head counts as touching
/// the cherry
pub(crate) const EAT_TOLERANCE: i32 = 20;

/// Cherries are never spawned closer than this to the right & bottom walls
pub(crate) const CHERRY_FAR_INSET: i32 = 60;

/// Number of placeholder segments a fresh snake starts with
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 31,
};

/// Glyph used to draw two vertically stacked cells in one terminal cell
pub(crate) const UPPER_HALF_BLOCK: char = '▀';

/// Glyph used when only the lower of two stacked cells is occupied
pub(crate) const LOWER_HALF_BLOCK: char = '▄';

/// Colour of the snake's head and body
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(117, 192, 90);

/// Colour of the cherry
pub(crate) const CHERRY_COLOR: Color = Color::LightRed;

/// Colour of the snake's head once it has crashed
pub(crate) const COLLISION_COLOR: Color = Color::Red;

/// Style for the "SNAKE GAME" logo on the title screen
pub(crate) const LOGO_STYLE: Style = Style::new().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD);

/// Style for prompts such as "Press any key to begin"
pub(crate) const PROMPT_STYLE: Style = Style::new().add_modifier(Modifier::ITALIC);

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" and "PAUSED" banners
pub(crate) const BANNER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
