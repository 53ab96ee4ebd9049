use combat_core::{
    CombatController, Combatant, Cost, Effect, Element, LogEntry, Move, MoveCatalog, MoveKind,
    PcgRng, PlayerAction, Pool, RollSpec, Side, Stat, StatusData, StatusKey, StatusSpec, Target,
};

fn special(id: &str, kind: MoveKind, target: Target, effect: Effect) -> Move {
    Move {
        id: id.into(),
        name: id.into(),
        description: String::new(),
        element: Element::Physical,
        kind,
        target,
        to_hit_bonus: 0,
        cost: Cost::new(Pool::Sp, 1),
        effects: vec![effect],
        on_hit: Vec::new(),
    }
}

fn catalog() -> MoveCatalog {
    MoveCatalog::new([
        special(
            "fangs",
            MoveKind::Attack,
            Target::Enemy,
            Effect::Damage {
                roll: RollSpec::new(1, 4).with_add(Stat::Str, 0.5),
            },
        ),
        special(
            "fortify",
            MoveKind::Buff,
            Target::Caster,
            Effect::ApplyStatus {
                status: StatusSpec::turns(StatusKey::AcUp, 2).with_data(StatusData {
                    ac_delta: Some(2),
                    ..StatusData::default()
                }),
                chance: None,
            },
        ),
        special(
            "mend",
            MoveKind::Heal,
            Target::Caster,
            Effect::Heal {
                roll: RollSpec::new(2, 5),
            },
        ),
    ])
    .unwrap()
}

fn duel(seed: u64) -> (Vec<LogEntry>, Combatant, Combatant) {
    let mut player = Combatant::builder("Bel", "Warrior")
        .hp(26)
        .sp(6)
        .ac(14)
        .to_hit(5)
        .damage(3, 10)
        .abilities(["fangs"])
        .build()
        .unwrap();
    let mut enemy = Combatant::builder("Viper", "Viper")
        .hp(13)
        .sp(6)
        .ac(13)
        .to_hit(4)
        .damage(1, 7)
        .attacks(["fangs", "fortify", "mend"])
        .enemy()
        .build()
        .unwrap();
    let moves = catalog();
    let mut history = Vec::new();

    {
        let mut combat =
            CombatController::new(&mut player, &mut enemy, &moves, PcgRng::seeded(seed));
        for round in 0..200 {
            let action = if round % 3 == 0 {
                PlayerAction::UseMove("fangs".into())
            } else {
                PlayerAction::Attack
            };
            let result = combat.act_player(action);
            assert!(result.ok);
            history.extend(result.log);
            if result.ended {
                break;
            }
            assert_eq!(combat.turn(), Side::Enemy);

            let result = combat.act_enemy();
            assert!(result.ok);
            history.extend(result.log);
            if result.ended {
                break;
            }
            assert_eq!(combat.turn(), Side::Player);
        }
        assert!(combat.is_ended());
    }
    (history, player, enemy)
}

#[test]
fn seeded_duel_terminates_with_one_end_entry() {
    let (history, player, enemy) = duel(42);
    let ends = history
        .iter()
        .filter(|entry| matches!(entry, LogEntry::CombatEnd { .. }))
        .count();
    assert_eq!(ends, 1);
    assert!(matches!(history.last(), Some(LogEntry::CombatEnd { .. })));
    assert!(player.is_defeated() || enemy.is_defeated());
}

#[test]
fn pools_stay_within_bounds() {
    for seed in 0..16 {
        let (_, player, enemy) = duel(seed);
        for combatant in [&player, &enemy] {
            assert!(combatant.hp.current <= combatant.hp.maximum);
            assert!(combatant.mp.current <= combatant.mp.maximum);
            assert!(combatant.sp.current <= combatant.sp.maximum);
        }
    }
}

#[test]
fn same_seed_replays_the_same_fight() {
    assert_eq!(duel(7).0, duel(7).0);
}
