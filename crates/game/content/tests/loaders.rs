use std::fs;

use combat_content::{
    ClassLoader, ConfigLoader, Content, ContentFactory, EnemyLoader, MoveLoader,
};
use combat_core::{
    CombatController, Effect, Element, LogEntry, MoveKind, PlayerAction, Pool, ScriptedDice,
    StatusKey, Target,
};

const DATA_FILES: [&str; 4] = ["moves.ron", "classes.ron", "enemies.ron", "combat.toml"];

fn data_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(file)
}

#[test]
fn embedded_catalog_has_every_move() {
    let moves = MoveLoader::embedded().unwrap();
    assert_eq!(moves.len(), 15);

    let kidney = moves.get("kidneyshot").unwrap();
    assert_eq!(kidney.cost.pool, Pool::Sp);
    assert_eq!(kidney.cost.amount, 3);
    assert!(matches!(
        kidney.on_hit.as_slice(),
        [Effect::ApplyStatus { status, chance: Some(chance) }]
            if status.key == StatusKey::Stunned && *chance == 0.5
    ));

    let guard = moves.get("guard").unwrap();
    assert_eq!(guard.target, Target::Caster);
    assert!(!guard.requires_roll());

    let ignite = moves.get("ignite").unwrap();
    assert_eq!(ignite.kind, MoveKind::Debuff);
    assert_eq!(ignite.element, Element::Fire);
}

#[test]
fn embedded_content_is_consistent() {
    let content = Content::embedded().unwrap();
    assert_eq!(
        content.classes.names().collect::<Vec<_>>(),
        ["Warrior", "Cleric", "Wizard", "Shambling Fool"]
    );
    assert_eq!(content.enemies.templates.len(), 7);
    assert_eq!(content.enemies.traits.len(), 5);

    for class in content.classes.iter() {
        let hero = class.build("Tester").unwrap();
        assert!(hero.attacks.len() <= 4, "{} loadout too large", class.name);
    }
}

#[test]
fn class_presets_match_their_stat_blocks() {
    let classes = ClassLoader::embedded().unwrap();
    let warrior = classes.get("warrior").unwrap().build("Beldor").unwrap();
    assert_eq!(warrior.attributes.str, 3);
    assert_eq!(warrior.hp.maximum, 26);
    assert_eq!(warrior.ac, 14);
    assert_eq!(warrior.to_hit, 5);
    assert_eq!((warrior.damage.min, warrior.damage.max), (3, 10));
    assert!(warrior.knows_move("kidneyshot"));

    let fool = classes.get("Shambling Fool").unwrap();
    assert_eq!(fool.attributes.cha, 4);
}

#[test]
fn generated_enemies_respect_floors() {
    let enemies = EnemyLoader::embedded().unwrap();
    for template in enemies.names().map(str::to_owned).collect::<Vec<_>>() {
        // one draw picks the trait
        for roll in 0..5 {
            let mut dice = ScriptedDice::new([roll]);
            let enemy = enemies
                .generate(Some(&template), 0, &mut dice)
                .unwrap()
                .unwrap();
            assert!(enemy.hp.maximum >= 6);
            assert!(enemy.ac >= 10);
            assert!(enemy.ai.is_some());
        }
    }
}

#[test]
fn kidney_shot_can_stun_the_enemy() {
    let content = Content::embedded().unwrap();
    let mut player = content
        .classes
        .get("Warrior")
        .unwrap()
        .build("Beldor")
        .unwrap();
    // neutral trait-free goblin
    let mut enemy = combat_content::scale(content.enemies.template("Goblin").unwrap(), None, 0)
        .unwrap();

    // d20 15, damage 4, stun chance passes
    let dice = ScriptedDice::new([15, 4, 0]);
    let mut combat = CombatController::new(&mut player, &mut enemy, &content.moves, dice);
    let result = combat.act_player(PlayerAction::UseMove("kidneyshot".into()));
    assert!(result.ok);
    assert!(result.state.enemy.status.contains(StatusKey::Stunned));
    assert_eq!(result.state.enemy.hp.current, 10);

    let result = combat.act_enemy();
    assert!(result.log.iter().any(|entry| matches!(
        entry,
        LogEntry::StatusBlocked { key: StatusKey::Stunned, .. }
    )));
}

#[test]
fn factory_loads_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    for file in DATA_FILES {
        fs::copy(data_path(file), dir.path().join(file)).unwrap();
    }

    let factory = ContentFactory::new(dir.path());
    let content = factory.load_content().unwrap();
    assert_eq!(content.moves.len(), 15);
    let config = factory.load_config().unwrap();
    assert_eq!(config, combat_core::CombatConfig::default());
}

#[test]
fn dangling_loadout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for file in DATA_FILES {
        fs::copy(data_path(file), dir.path().join(file)).unwrap();
    }
    fs::write(
        dir.path().join("classes.ron"),
        r#"[(name: "Monk", hp: 20, ac: 12, to_hit: 4, damage: (min: 1, max: 6), attacks: ["palm"])]"#,
    )
    .unwrap();

    let error = ContentFactory::new(dir.path()).load_content().unwrap_err();
    assert!(error.to_string().contains("Monk: palm"), "{error}");
}

#[test]
fn parse_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moves.ron");
    fs::write(&path, "(moves: [(id: \"x\"").unwrap();

    let error = MoveLoader::load(&path).unwrap_err();
    assert!(error.to_string().contains("moves.ron"), "{error}");

    let missing = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(missing.to_string().contains("Failed to read file"));
}

#[test]
fn invalid_move_is_reported() {
    let source = r#"(moves: [(
        id: "broken",
        name: "Broken",
        kind: attack,
        target: enemy,
        cost: (pool: SP, amount: 1),
        effects: [Damage(roll: (min: 6, max: 2))],
    )])"#;
    let error = MoveLoader::parse(source, "inline").unwrap_err();
    assert!(error.to_string().contains("broken"), "{error}");
    assert!(error.to_string().contains("CATALOG_INVALID_ROLL"), "{error}");
}
