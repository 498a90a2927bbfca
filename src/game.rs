use core::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info};
use serde::Serialize;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, Position},
    config::{FleetConfig, PlacementRule},
    player::Player,
    random::RandomSource,
    ui,
};

pub const COMPUTER_NAME: &str = "Computer";

/// Which participant a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Human,
    Computer,
}

/// Turn state machine of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Setup,
    Playing,
    HumanWon,
    ComputerWon,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::HumanWon | GamePhase::ComputerWon)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GamePhase::HumanWon => Some(Side::Human),
            GamePhase::ComputerWon => Some(Side::Computer),
            GamePhase::Setup | GamePhase::Playing => None,
        }
    }
}

/// How a call to [`GameController::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    /// Final phase; `Playing` when the input ran out before anyone won.
    pub phase: GamePhase,
    pub turns: usize,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.phase.winner()
    }

    pub fn abandoned(&self) -> bool {
        !self.phase.is_terminal()
    }
}

/// Shots exchanged during one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_shot: Position,
    pub human_result: AttackResult,
    /// `None` when the human's shot ended the game.
    pub computer_reply: Option<(Position, AttackResult)>,
}

/// Errors that stop a game.
#[derive(Debug)]
pub enum GameError {
    Board(BoardError),
    Io(io::Error),
    /// A turn was requested outside the `Playing` phase.
    NotPlaying(GamePhase),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::NotPlaying(phase) => write!(f, "Game is not in play (phase {:?})", phase),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::NotPlaying(_) => None,
        }
    }
}

/// Orchestrates a human player against a computer player that fires
/// uniformly random legal shots.
pub struct GameController<R: RandomSource> {
    human: Player,
    computer: Player,
    /// What the human knows about the computer's board. Holds no ships.
    tracking: Board,
    /// Fleet placed by `setup`; `None` when the players arrived pre-placed.
    fleet: Option<FleetConfig>,
    rng: R,
    phase: GamePhase,
    turns: usize,
}

impl<R: RandomSource> GameController<R> {
    pub fn new(
        human_name: impl Into<String>,
        fleet: FleetConfig,
        rule: PlacementRule,
        rng: R,
    ) -> Self {
        Self {
            human: Player::with_rule(human_name, rule),
            computer: Player::with_rule(COMPUTER_NAME, rule),
            tracking: Board::new(),
            fleet: Some(fleet),
            rng,
            phase: GamePhase::Setup,
            turns: 0,
        }
    }

    /// Build a controller from players whose fleets are already placed. The
    /// game starts in the `Playing` phase and `setup` does nothing.
    pub fn with_players(human: Player, computer: Player, rng: R) -> Self {
        Self {
            human,
            computer,
            tracking: Board::new(),
            fleet: None,
            rng,
            phase: GamePhase::Playing,
            turns: 0,
        }
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn tracking(&self) -> &Board {
        &self.tracking
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Randomly place both fleets and enter the `Playing` phase.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Ok(());
        }
        if let Some(fleet) = &self.fleet {
            self.human.auto_place_ships(&mut self.rng, fleet)?;
            self.computer.auto_place_ships(&mut self.rng, fleet)?;
            info!(
                "fleets placed: {} ship(s) each, {} cells",
                fleet.ships().len(),
                fleet.total_cells()
            );
        }
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Fire the human's shot at `target`, then let the computer reply unless
    /// the game is already won.
    ///
    /// A repeated target still consumes the turn and the computer still fires.
    pub fn play_turn(&mut self, target: Position) -> Result<TurnReport, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying(self.phase));
        }
        self.turns += 1;

        let human_result = self.computer.receive_attack(target)?;
        if let Some(state) = human_result.revealed_state() {
            self.tracking.mark_knowledge(target, state)?;
        }
        debug!(
            "turn {}: {} fires at {:?} -> {:?}",
            self.turns,
            self.human.name(),
            target,
            human_result
        );
        if human_result == AttackResult::Win {
            self.phase = GamePhase::HumanWon;
            info!("{} won after {} turn(s)", self.human.name(), self.turns);
            return Ok(TurnReport {
                human_shot: target,
                human_result,
                computer_reply: None,
            });
        }

        let reply = self.human.random_legal_target(&mut self.rng)?;
        let reply_result = self.human.receive_attack(reply)?;
        debug!(
            "turn {}: {} fires at {:?} -> {:?}",
            self.turns,
            self.computer.name(),
            reply,
            reply_result
        );
        if reply_result == AttackResult::Win {
            self.phase = GamePhase::ComputerWon;
            info!("{} won after {} turn(s)", self.computer.name(), self.turns);
        }
        Ok(TurnReport {
            human_shot: target,
            human_result,
            computer_reply: Some((reply, reply_result)),
        })
    }

    /// Run the interactive loop until someone wins or `input` is exhausted.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<GameOutcome, GameError> {
        self.setup()?;
        while self.phase == GamePhase::Playing {
            write!(out, "{}", ui::render_boards(&self.tracking, self.human.board()))?;
            let Some(target) = read_target(input, out)? else {
                info!("input closed after {} turn(s)", self.turns);
                break;
            };
            let report = self.play_turn(target)?;
            writeln!(out, "{}", ui::report(self.computer.name(), report.human_result))?;
            if self.phase == GamePhase::HumanWon {
                writeln!(out, "You win! All enemy ships sunk.")?;
                break;
            }
            if let Some((pos, result)) = report.computer_reply {
                writeln!(out, "\nEnemy fires at {}...", ui::format_position(pos))?;
                writeln!(out, "{}", ui::report(self.human.name(), result))?;
            }
            if self.phase == GamePhase::ComputerWon {
                write!(out, "{}", ui::render_boards(&self.tracking, self.human.board()))?;
                writeln!(out, "Defeat. The computer sank your fleet.")?;
            }
        }
        out.flush()?;
        Ok(GameOutcome {
            phase: self.phase,
            turns: self.turns,
        })
    }
}

/// Prompt until a valid coordinate is entered. `Ok(None)` means end of input.
pub fn read_target<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
) -> io::Result<Option<Position>> {
    loop {
        write!(out, "\nEnter target (e.g., A5): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(pos) = ui::parse_coord(&line) {
            return Ok(Some(pos));
        }
        writeln!(out, "Invalid coordinate. Try again.")?;
    }
}

/// Per-player statistics of a computer-versus-computer game.
#[derive(Debug, Clone, Serialize)]
pub struct AutoPlayerSummary {
    pub name: String,
    pub shots: usize,
    pub hits: usize,
    pub ships_remaining: usize,
}

/// Result of [`auto_play`].
#[derive(Debug, Clone, Serialize)]
pub struct AutoPlayReport {
    /// Index of the winner: 0 for the first player, 1 for the second.
    pub winner: usize,
    pub turns: usize,
    pub players: [AutoPlayerSummary; 2],
}

/// Play two random-shooting computer players against each other. The first
/// player fires first and each uses its own random source.
pub fn auto_play<A: RandomSource, B: RandomSource>(
    fleet: &FleetConfig,
    rule: PlacementRule,
    rng_a: &mut A,
    rng_b: &mut B,
) -> Result<AutoPlayReport, GameError> {
    let mut players = [Player::with_rule("player1", rule), Player::with_rule("player2", rule)];
    players[0].auto_place_ships(rng_a, fleet)?;
    players[1].auto_place_ships(rng_b, fleet)?;

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    let mut turns = 0;
    let winner = loop {
        turns += 1;
        for attacker in 0..2 {
            let defender = 1 - attacker;
            let target = if attacker == 0 {
                players[defender].random_legal_target(rng_a)?
            } else {
                players[defender].random_legal_target(rng_b)?
            };
            let result = players[defender].receive_attack(target)?;
            shots[attacker] += 1;
            if matches!(result, AttackResult::Hit | AttackResult::Sunk | AttackResult::Win) {
                hits[attacker] += 1;
            }
            if result == AttackResult::Win {
                break;
            }
        }
        if let Some(idx) = players.iter().position(Player::defeated) {
            break 1 - idx;
        }
    };
    info!("{} won after {} turn(s)", players[winner].name(), turns);

    let summary = |i: usize| AutoPlayerSummary {
        name: players[i].name().to_string(),
        shots: shots[i],
        hits: hits[i],
        ships_remaining: players[i].board().remaining_ships(),
    };
    Ok(AutoPlayReport {
        winner,
        turns,
        players: [summary(0), summary(1)],
    })
}
