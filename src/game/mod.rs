mod direction;
mod params;
mod point;
mod render;
mod snake;
mod ticker;
pub(crate) use self::direction::Direction;
pub(crate) use self::params::Params;
use self::point::Point;
use self::snake::Snake;
use self::ticker::Ticker;
use rand::Rng;
use std::fmt;
use std::time::Instant;

/// A single session of the game, from the title screen onwards.  The best
/// score lives as long as the session does.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    params: Params,
    status: Status,
    score: u32,
    best: u32,
    snake: Snake,
    cherry: Option<Point>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(params: Params) -> Self {
        Game::new_with_rng(params, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Deliver the next tick if it's due at `now`.  Returns `true` if the game
    /// was updated and should be redrawn.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let Status::Running(ref mut ticker) = self.status else {
            return false;
        };
        if !ticker.fire(now) {
            return false;
        }
        self.update();
        true
    }

    /// Advance the game by one step: move the snake, let it eat the cherry if
    /// it's close enough, make sure there's a cherry, and then check whether
    /// the snake has crashed.  Does nothing if the game isn't running.
    pub(crate) fn update(&mut self) {
        if !self.running() {
            return;
        }
        self.snake.advance(self.params.step);
        let head = self.snake.head();
        if self
            .cherry
            .is_some_and(|c| head.intersects_within(c, self.params.eat_tolerance))
        {
            self.snake.add_tail();
            self.cherry = None;
            self.score += 1;
            log::debug!("Cherry eaten at {head}; score is now {}", self.score);
        }
        if self.cherry.is_none() {
            self.spawn_cherry();
        }
        if let Some(crash) = self.crash() {
            log::info!(
                "Snake hit {crash} at {head} heading {:?} with a score of {}",
                self.snake.heading(),
                self.score
            );
            self.halt(Status::GameOver);
        }
    }

    fn spawn_cherry(&mut self) {
        let cherry = self.params.cherry_area.random_point(&mut self.rng);
        debug_assert!(
            self.params.cherry_area.contains(cherry),
            "cherry spawned outside of its area"
        );
        log::debug!("Cherry spawned at {cherry}");
        self.cherry = Some(cherry);
    }
}

impl<R> Game<R> {
    pub(crate) fn new_with_rng(params: Params, rng: R) -> Game<R> {
        Game {
            rng,
            params,
            status: Status::Title,
            score: 0,
            best: 0,
            snake: Snake::new(params.snake_start()),
            cherry: None,
        }
    }

    /// Apply an input intent.  Intents that mean nothing in the current phase
    /// are ignored.
    pub(crate) fn handle(&mut self, intent: Intent) {
        match (self.phase(), intent) {
            (Phase::Title, _) => self.start(),
            (Phase::Running, Intent::TogglePause) => self.halt(Status::Paused),
            (Phase::Running, Intent::Confirm) => (),
            (Phase::Running, Intent::TurnUp) => self.snake.turn(Direction::Up),
            (Phase::Running, Intent::TurnDown) => self.snake.turn(Direction::Down),
            (Phase::Running, Intent::TurnLeft) => self.snake.turn(Direction::Left),
            (Phase::Running, Intent::TurnRight) => self.snake.turn(Direction::Right),
            (Phase::Paused, Intent::TogglePause) => self.start(),
            (Phase::GameOver, Intent::Confirm) => self.reset(),
            (Phase::Paused | Phase::GameOver, _) => (),
        }
    }

    /// The instant at which the next tick is due, if the game is running
    pub(crate) fn next_tick(&self) -> Option<Instant> {
        if let Status::Running(ref ticker) = self.status {
            Some(ticker.deadline())
        } else {
            None
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.status.phase()
    }

    /// Return a read-only view of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase(),
            score: self.score,
            best: self.best,
            snake: &self.snake,
            cherry: self.cherry,
            params: &self.params,
        }
    }

    fn running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Enter the running state with a fresh ticker
    fn start(&mut self) {
        log::info!("{} -> {}", self.phase(), Phase::Running);
        self.status = Status::Running(Ticker::start(self.params.tick_period, Instant::now()));
    }

    /// Leave the running state for `next`, releasing the ticker and recording
    /// the best score
    fn halt(&mut self, next: Status) {
        self.best = self.best.max(self.score);
        log::info!("{} -> {}", self.phase(), next.phase());
        self.status = next;
    }

    /// Start over with a new snake.  The best score is kept.
    fn reset(&mut self) {
        self.score = 0;
        self.cherry = None;
        self.snake = Snake::new(self.params.snake_start());
        self.start();
    }

    fn crash(&self) -> Option<Crash> {
        if self.params.hits_wall(self.snake.head()) {
            Some(Crash::Wall)
        } else if self.snake.bit_itself() {
            Some(Crash::Tail)
        } else {
            None
        }
    }
}

/// An input event as understood by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    TogglePause,
    Confirm,
}

#[derive(Debug, Eq, PartialEq)]
enum Status {
    Title,
    Running(Ticker),
    Paused,
    GameOver,
}

impl Status {
    fn phase(&self) -> Phase {
        match self {
            Status::Title => Phase::Title,
            Status::Running(_) => Phase::Running,
            Status::Paused => Phase::Paused,
            Status::GameOver => Phase::GameOver,
        }
    }
}

/// Which screen the game is on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Title,
    Running,
    Paused,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Title => "title",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game over",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Crash {
    Wall,
    Tail,
}

impl fmt::Display for Crash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crash::Wall => write!(f, "the wall"),
            Crash::Tail => write!(f, "itself"),
        }
    }
}

/// Everything the renderer gets to see of a [`Game`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    pub(crate) best: u32,
    pub(crate) snake: &'a Snake,
    pub(crate) cherry: Option<Point>,
    pub(crate) params: &'a Params,
}
