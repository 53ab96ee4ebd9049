//! Two-combatant turn state machine.

use strum::IntoEnumIterator;

use crate::ai::{Decision, EnemyPolicy};
use crate::config::{CombatConfig, PolicyConfig};
use crate::env::{Dice, MoveOracle};
use crate::error::CombatError;
use crate::state::{AiMemory, Combatant, ItemKind};
use crate::status::tick_statuses;

use super::exchange::{Exchange, Resolution};
use super::{
    ActionKey, ActionResult, CombatantView, LogEntry, Phase, PlayerAction, PublicState, Side,
    Winner,
};

/// Orchestrates one encounter between a player and an enemy.
///
/// The controller borrows both combatants mutably for its whole lifetime and
/// is their only mutator; changes are visible to the owner once it is dropped
/// and through [`CombatController::public_state`] meanwhile.
///
/// # Half-turn pipeline
///
/// 1. reject if ended or out of turn (no mutation)
/// 2. note any blocking status, tick statuses, end on 0 HP
/// 3. blocked: log and pass the turn
/// 4. resolve the action; pass the turn unless the session ended
pub struct CombatController<'a, D: Dice> {
    player: &'a mut Combatant,
    enemy: &'a mut Combatant,
    moves: &'a dyn MoveOracle,
    dice: D,
    config: CombatConfig,
    policy: EnemyPolicy,
    turn: Side,
    winner: Option<Winner>,
    log: Vec<LogEntry>,
}

impl<'a, D: Dice> CombatController<'a, D> {
    pub fn new(
        player: &'a mut Combatant,
        enemy: &'a mut Combatant,
        moves: &'a dyn MoveOracle,
        dice: D,
    ) -> Self {
        Self::with_config(player, enemy, moves, dice, CombatConfig::default())
    }

    /// Construct a session, normalizing both combatants first.
    ///
    /// Normalization clamps every pool, truncates the enemy attack loadout,
    /// allocates enemy AI memory, and hands the player a potion when its
    /// inventory is empty.
    pub fn with_config(
        player: &'a mut Combatant,
        enemy: &'a mut Combatant,
        moves: &'a dyn MoveOracle,
        dice: D,
        config: CombatConfig,
    ) -> Self {
        player.clamp_resources();
        enemy.clamp_resources();

        if enemy.attacks.len() > CombatConfig::MAX_ATTACKS {
            tracing::warn!(
                enemy = %enemy.name,
                attacks = enemy.attacks.len(),
                "enemy loadout truncated"
            );
            enemy.attacks.truncate(CombatConfig::MAX_ATTACKS);
        }
        enemy.ai.get_or_insert_with(AiMemory::default);

        if player.inventory.is_empty()
            && let Err(error) = player.inventory.add(ItemKind::Potion, 1)
        {
            tracing::warn!(%error, "could not stock starting potion");
        }

        tracing::info!(player = %player.name, enemy = %enemy.name, "combat started");

        let policy = EnemyPolicy::new(config.policy.clone());
        Self {
            player,
            enemy,
            moves,
            dice,
            config,
            policy,
            turn: Side::Player,
            winner: None,
            log: Vec::new(),
        }
    }

    // ===== queries =====

    pub fn phase(&self) -> Phase {
        match (self.winner, self.turn) {
            (Some(winner), _) => Phase::Ended(winner),
            (None, Side::Player) => Phase::PlayerTurn,
            (None, Side::Enemy) => Phase::EnemyTurn,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn player(&self) -> &Combatant {
        &*self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &*self.enemy
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn policy_config(&self) -> &PolicyConfig {
        self.policy.config()
    }

    /// Log of the most recent half-turn.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Access the roll source, e.g. to queue scripted rolls between turns.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    pub fn public_state(&self) -> PublicState {
        let available_actions = if self.phase() == Phase::PlayerTurn {
            ActionKey::iter()
                .filter(|key| match key {
                    ActionKey::Move => self.player.loadout().next().is_some(),
                    ActionKey::Item => !self.player.inventory.is_empty(),
                    _ => true,
                })
                .collect()
        } else {
            Vec::new()
        };

        PublicState {
            player: CombatantView::from(&*self.player),
            enemy: CombatantView::from(&*self.enemy),
            turn: self.turn,
            active: !self.is_ended(),
            winner: self.winner,
            available_actions,
        }
    }

    // ===== half-turns =====

    /// Player half-turn.
    pub fn act_player(&mut self, action: PlayerAction) -> ActionResult {
        if let Err(error) = self.check_turn(Side::Player) {
            return self.rejected(error);
        }
        self.log.clear();
        if let Some(result) = self.begin_turn(Side::Player) {
            return result;
        }

        tracing::debug!(?action, "player acts");
        let resolution = {
            let mut exchange = self.exchange(Side::Player);
            match &action {
                PlayerAction::Attack => exchange.basic_attack(),
                PlayerAction::UseMove(id) => exchange.use_move(id),
                PlayerAction::Defend => exchange.defend(),
                PlayerAction::UseItem(item) => exchange.use_item(item),
                PlayerAction::Flee => exchange.flee(),
            }
        };
        self.finish(Side::Player, resolution)
    }

    /// String form of [`Self::act_player`]: `("move", Some("firebolt"))`.
    pub fn act_player_key(&mut self, key: &str, arg: Option<&str>) -> ActionResult {
        match PlayerAction::from_key(key, arg) {
            Ok(action) => self.act_player(action),
            Err(error) => self.rejected(error),
        }
    }

    /// Enemy half-turn: the policy picks one action and it resolves.
    pub fn act_enemy(&mut self) -> ActionResult {
        if let Err(error) = self.check_turn(Side::Enemy) {
            return self.rejected(error);
        }
        self.log.clear();
        if let Some(result) = self.begin_turn(Side::Enemy) {
            return result;
        }

        let decision = self.policy.decide(&mut *self.enemy, self.moves, &mut self.dice);
        tracing::debug!(?decision, "enemy acts");
        let resolution = {
            let mut exchange = self.exchange(Side::Enemy);
            match &decision {
                Decision::Taunt => exchange.taunt(),
                Decision::Move { id, .. } => exchange.use_move(id),
                Decision::BasicAttack => exchange.basic_attack(),
            }
        };
        self.finish(Side::Enemy, resolution)
    }

    // ===== internals =====

    fn check_turn(&self, side: Side) -> Result<(), CombatError> {
        if self.is_ended() {
            return Err(CombatError::SessionEnded);
        }
        if self.turn != side {
            return Err(CombatError::NotYourTurn {
                expected: self.turn,
            });
        }
        Ok(())
    }

    /// Tick, defeat check, and action lock. `Some` means the half-turn is over.
    ///
    /// The lock is read before the tick so a one-turn stun still costs the
    /// bearer the turn on which it expires.
    fn begin_turn(&mut self, side: Side) -> Option<ActionResult> {
        let owner = match side {
            Side::Player => &mut *self.player,
            Side::Enemy => &mut *self.enemy,
        };
        let blocker = owner.status.blocking_key();
        tick_statuses(owner, side, &mut self.dice, &mut self.log);

        if owner.is_defeated() {
            self.end(Winner::from(side.opponent()));
            return Some(self.result());
        }
        if let Some(key) = blocker {
            self.log.push(LogEntry::StatusBlocked { who: side, key });
            self.turn = side.opponent();
            return Some(self.result());
        }
        None
    }

    fn exchange(&mut self, side: Side) -> Exchange<'_> {
        let (actor, foe) = match side {
            Side::Player => (&mut *self.player, &mut *self.enemy),
            Side::Enemy => (&mut *self.enemy, &mut *self.player),
        };
        Exchange {
            side,
            actor,
            foe,
            moves: self.moves,
            dice: &mut self.dice,
            config: &self.config,
            log: &mut self.log,
        }
    }

    fn finish(&mut self, side: Side, resolution: Resolution) -> ActionResult {
        self.player.clamp_resources();
        self.enemy.clamp_resources();
        match resolution {
            Resolution::Continue => self.turn = side.opponent(),
            Resolution::Victory(victor) => self.end(Winner::from(victor)),
            Resolution::Fled => self.end(Winner::Fled),
        }
        self.result()
    }

    fn end(&mut self, winner: Winner) {
        if self.winner.is_some() {
            return;
        }
        self.winner = Some(winner);
        self.log.push(LogEntry::CombatEnd { winner });
        tracing::info!(%winner, "combat ended");
    }

    fn result(&self) -> ActionResult {
        ActionResult {
            ok: true,
            error: None,
            log: self.log.clone(),
            state: self.public_state(),
            ended: self.is_ended(),
            winner: self.winner,
        }
    }

    fn rejected(&self, error: CombatError) -> ActionResult {
        tracing::debug!(%error, "action rejected");
        ActionResult {
            ok: false,
            error: Some(error),
            log: Vec::new(),
            state: self.public_state(),
            ended: self.is_ended(),
            winner: self.winner,
        }
    }
}
