//! Line-oriented command loop over one combat session.

use std::io::{BufRead, Write};

use anyhow::Result;
use combat_core::{
    ActionResult, CombatController, CombatantView, Dice, GameError, MoveCatalog, MoveSlots,
    Winner,
};

/// Moves shown per `moves` page.
const PAGE_SIZE: usize = 4;

const HELP: &str = "commands: attack | move <id> | defend | item [name] | flee | moves [page] | status | help | quit";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the controller's string entry point.
    Act { key: String, arg: Option<String> },
    Moves { page: usize },
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_ascii_lowercase();
        let arg = words.next().map(str::to_owned);

        Some(match head.as_str() {
            "moves" => Self::Moves {
                page: arg.and_then(|page| page.parse().ok()).unwrap_or(0),
            },
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Act { key: head, arg },
        })
    }
}

/// Drives a controller from text commands.
pub struct Skirmish<'a, D: Dice> {
    combat: CombatController<'a, D>,
    moves: &'a MoveCatalog,
    json: bool,
}

impl<'a, D: Dice> Skirmish<'a, D> {
    pub fn new(combat: CombatController<'a, D>, moves: &'a MoveCatalog, json: bool) -> Self {
        Self {
            combat,
            moves,
            json,
        }
    }

    /// Read commands until the fight ends, the player quits, or input runs out.
    ///
    /// Each accepted player action is followed by the enemy's half-turn.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> Result<Option<Winner>> {
        self.print_status(output)?;
        writeln!(output, "{HELP}")?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            match command {
                Command::Quit => {
                    tracing::info!("player quit");
                    break;
                }
                Command::Help => writeln!(output, "{HELP}")?,
                Command::Status => self.print_status(output)?,
                Command::Moves { page } => self.print_moves(page, output)?,
                Command::Act { key, arg } => {
                    let result = self.combat.act_player_key(&key, arg.as_deref());
                    self.print_result(&result, output)?;
                    if result.ok && !result.ended {
                        let reply = self.combat.act_enemy();
                        self.print_result(&reply, output)?;
                    }
                }
            }
            if self.combat.is_ended() {
                break;
            }
        }

        if let Some(winner) = self.combat.winner() {
            writeln!(output, "winner: {winner}")?;
        }
        Ok(self.combat.winner())
    }

    fn print_result(&self, result: &ActionResult, output: &mut impl Write) -> Result<()> {
        if let Some(error) = &result.error {
            tracing::warn!(
                code = error.error_code(),
                severity = ?error.severity(),
                %error,
                "action rejected"
            );
        }
        if self.json {
            writeln!(output, "{}", serde_json::to_string(result)?)?;
            return Ok(());
        }
        if let Some(error) = &result.error {
            writeln!(output, "! {error} [{}]", error.error_code())?;
            return Ok(());
        }
        for entry in &result.log {
            writeln!(output, "  {entry}")?;
        }
        Ok(())
    }

    fn print_status(&self, output: &mut impl Write) -> Result<()> {
        let state = self.combat.public_state();
        if self.json {
            writeln!(output, "{}", serde_json::to_string(&state)?)?;
            return Ok(());
        }
        writeln!(output, "{}", describe(&state.player))?;
        writeln!(output, "{}", describe(&state.enemy))?;
        Ok(())
    }

    fn print_moves(&self, page: usize, output: &mut impl Write) -> Result<()> {
        let player = self.combat.player();
        let known: Vec<&str> = player.loadout().collect();
        let slots = MoveSlots::page(&known, page, PAGE_SIZE);
        for definition in self.moves.list_moves(&slots.ids) {
            writeln!(
                output,
                "  {:<12} {:<13} {} {} [{}] {}",
                definition.id,
                definition.name,
                definition.cost.pool,
                definition.cost.amount,
                definition.element,
                definition.description
            )?;
        }
        if slots.has_prev {
            writeln!(output, "  (moves {} for the previous page)", page - 1)?;
        }
        if slots.has_next {
            writeln!(output, "  (moves {} for more)", page + 1)?;
        }
        Ok(())
    }
}

fn describe(view: &CombatantView) -> String {
    let statuses: Vec<String> = view
        .status
        .iter()
        .map(|(key, instance)| format!("{key} {}", instance.duration))
        .collect();
    let mut line = format!(
        "{} [{}] HP {}/{} MP {}/{} SP {}/{} AC {}",
        view.name,
        view.class,
        view.hp.current,
        view.hp.maximum,
        view.mp.current,
        view.mp.maximum,
        view.sp.current,
        view.sp.maximum,
        view.ac
    );
    if !statuses.is_empty() {
        line.push_str(&format!(" ({})", statuses.join(", ")));
    }
    line
}
