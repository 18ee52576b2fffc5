use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{Game, Intent, Phase};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The terminal front end: draws the game and feeds it ticks & input, one at
/// a time
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    config: GameConfig,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, config: GameConfig) -> App<R> {
        App {
            game,
            config,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(self.game.snapshot(), frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and apply it to the game
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(deadline) = self.game.next_tick() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.game.tick(Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }
}

impl<R> App<R> {
    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.config.pause_on_focus_lost && self.game.phase() == Phase::Running {
                log::debug!("Terminal lost focus; pausing");
                self.game.handle(Intent::TogglePause);
            }
            return;
        }
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        match Command::from_key_event(ev) {
            Some(cmd) if cmd.quits() => {
                log::info!("Quitting");
                self.quitting = true;
            }
            Some(cmd) => {
                if let Some(intent) = cmd.intent() {
                    self.game.handle(intent);
                }
            }
            // Any key at all gets things going from the title screen
            None if self.game.phase() == Phase::Title => self.game.handle(Intent::Confirm),
            None => (),
        }
    }
}
