//! Structured combat log.
//!
//! Each half-turn produces a fresh list of [`LogEntry`] values. Entries carry
//! the acting side so the same variant covers both `player_*` and `enemy_*`
//! kinds; [`LogEntry::kind`] yields the flat kind string.

use core::fmt;

use crate::action::{MoveKind, Pool};
use crate::element::Element;
use crate::status::{StatusDuration, StatusKey};

use super::{HitCheck, Side, Winner};

/// What a status tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickKind {
    Damage,
    Heal,
    /// Informational only (control locks).
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusEndReason {
    Expired,
    /// Removed by a damaging hit.
    Consumed,
}

/// Why a move did not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveFailure {
    UnknownMove,
    NotInLoadout,
    InsufficientCost {
        pool: Pool,
        cost: u32,
        available: u32,
    },
}

/// Result of one effect of a move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectOutcome {
    Damage {
        amount: u32,
        multiplier: f64,
        hp: u32,
    },
    Heal {
        amount: u32,
        hp: u32,
    },
    Status {
        key: StatusKey,
        duration: StatusDuration,
    },
    /// A chance-gated status did not trigger.
    StatusResisted {
        key: StatusKey,
    },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum LogEntry {
    Attack {
        by: Side,
        check: HitCheck,
        damage: u32,
        target_hp: u32,
    },
    Move {
        by: Side,
        id: String,
        name: String,
        kind: MoveKind,
        element: Element,
        check: Option<HitCheck>,
        mp: u32,
        sp: u32,
    },
    MoveEffect {
        by: Side,
        target: Side,
        outcome: EffectOutcome,
    },
    MoveFail {
        by: Side,
        id: String,
        reason: MoveFailure,
    },
    StatusTick {
        who: Side,
        key: StatusKey,
        tick: TickKind,
        amount: u32,
        hp: u32,
    },
    StatusEnd {
        who: Side,
        key: StatusKey,
        reason: StatusEndReason,
    },
    StatusBlocked {
        who: Side,
        key: StatusKey,
    },
    Defend,
    Item {
        item: String,
        healed: u32,
        hp: u32,
    },
    ItemFail {
        item: String,
    },
    Flee {
        roll: i32,
        total: i32,
        dc: i32,
        success: bool,
    },
    Taunt,
    CombatEnd {
        winner: Winner,
    },
}

impl LogEntry {
    /// Flat kind string, e.g. `player_attack` or `enemy_move_fail`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Attack { by: Side::Player, .. } => "player_attack",
            Self::Attack { by: Side::Enemy, .. } => "enemy_attack",
            Self::Move { by: Side::Player, .. } => "player_move",
            Self::Move { by: Side::Enemy, .. } => "enemy_move",
            Self::MoveEffect { .. } => "move_effect",
            Self::MoveFail { by: Side::Player, .. } => "player_move_fail",
            Self::MoveFail { by: Side::Enemy, .. } => "enemy_move_fail",
            Self::StatusTick { .. } => "status_tick",
            Self::StatusEnd { .. } => "status_end",
            Self::StatusBlocked { .. } => "status_blocked",
            Self::Defend => "player_defend",
            Self::Item { .. } => "player_item",
            Self::ItemFail { .. } => "player_item_fail",
            Self::Flee { .. } => "player_flee",
            Self::Taunt => "enemy_taunt",
            Self::CombatEnd { .. } => "combat_end",
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                by,
                check,
                damage,
                target_hp,
            } => {
                write!(f, "{by} attacks: d20 {} (total {})", check.roll, check.total)?;
                if check.fumble {
                    f.write_str(", fumble")
                } else if !check.hit {
                    f.write_str(", miss")
                } else {
                    let crit = if check.crit { " critical" } else { "" };
                    write!(f, ",{crit} hit for {damage} (HP {target_hp})")
                }
            }
            Self::Move {
                by,
                name,
                element,
                check,
                mp,
                sp,
                ..
            } => {
                write!(f, "{by} uses {name} [{element}]")?;
                if let Some(check) = check {
                    let verdict = if check.hit { "hit" } else { "miss" };
                    write!(f, ": d20 {} (total {}) {verdict}", check.roll, check.total)?;
                }
                write!(f, " (MP {mp}, SP {sp})")
            }
            Self::MoveEffect { target, outcome, .. } => match outcome {
                EffectOutcome::Damage {
                    amount,
                    multiplier,
                    hp,
                } => write!(f, "  {target} takes {amount} damage (x{multiplier}) (HP {hp})"),
                EffectOutcome::Heal { amount, hp } => {
                    write!(f, "  {target} heals {amount} (HP {hp})")
                }
                EffectOutcome::Status { key, duration } => {
                    write!(f, "  {target} gains {key} ({duration})")
                }
                EffectOutcome::StatusResisted { key } => write!(f, "  {target} resists {key}"),
            },
            Self::MoveFail { by, id, reason } => match reason {
                MoveFailure::UnknownMove => write!(f, "{by} fumbles an unknown move: {id}"),
                MoveFailure::NotInLoadout => write!(f, "{by} does not know {id}"),
                MoveFailure::InsufficientCost {
                    pool,
                    cost,
                    available,
                } => write!(f, "{by} lacks {pool} for {id} ({available}/{cost})"),
            },
            Self::StatusTick {
                who,
                key,
                tick,
                amount,
                hp,
            } => match tick {
                TickKind::Damage => write!(f, "{who} suffers {amount} from {key} (HP {hp})"),
                TickKind::Heal => write!(f, "{who} regains {amount} from {key} (HP {hp})"),
                TickKind::Info => write!(f, "{who} is {key}"),
            },
            Self::StatusEnd { who, key, reason } => match reason {
                StatusEndReason::Expired => write!(f, "{who}'s {key} wears off"),
                StatusEndReason::Consumed => write!(f, "{who}'s {key} is spent"),
            },
            Self::StatusBlocked { who, key } => write!(f, "{who} can't act ({key})"),
            Self::Defend => f.write_str("player braces to defend"),
            Self::Item { item, healed, hp } => {
                write!(f, "player drinks a {item}, healing {healed} (HP {hp})")
            }
            Self::ItemFail { item } => write!(f, "player has no {item}"),
            Self::Flee {
                roll,
                total,
                dc,
                success,
            } => {
                let verdict = if *success { "escapes" } else { "fails to flee" };
                write!(f, "player {verdict}: d20 {roll} (total {total} vs DC {dc})")
            }
            Self::Taunt => f.write_str("enemy taunts instead of attacking"),
            Self::CombatEnd { winner } => write!(f, "combat over: {winner}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_depends_on_acting_side() {
        let fail = |by| LogEntry::MoveFail {
            by,
            id: "nope".into(),
            reason: MoveFailure::UnknownMove,
        };
        assert_eq!(fail(Side::Player).kind(), "player_move_fail");
        assert_eq!(fail(Side::Enemy).kind(), "enemy_move_fail");
        assert_eq!(LogEntry::Taunt.kind(), "enemy_taunt");
    }

    #[test]
    fn attack_display_reports_fumbles() {
        let entry = LogEntry::Attack {
            by: Side::Enemy,
            check: HitCheck::resolve(1, 4, 12),
            damage: 0,
            target_hp: 20,
        };
        assert_eq!(entry.to_string(), "enemy attacks: d20 1 (total 5), fumble");
    }
}
