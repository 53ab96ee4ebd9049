use std::io::Cursor;

use combat_cli::builder::load_combat_config;
use combat_cli::{CliConfig, Duel, Skirmish};
use combat_content::Content;
use combat_core::{CombatConfig, CombatController, Combatant, ScriptedDice, Winner};

fn goblin() -> Combatant {
    Combatant::builder("Goblin", "Goblin")
        .hp(14)
        .ac(10)
        .to_hit(3)
        .damage(1, 8)
        .enemy()
        .build()
        .unwrap()
}

fn hero(content: &Content) -> Combatant {
    content
        .classes
        .get("Warrior")
        .unwrap()
        .build("Beldor")
        .unwrap()
}

fn play(script: &str, rolls: Vec<i32>, json: bool) -> (Option<Winner>, String) {
    let content = Content::embedded().unwrap();
    let mut player = hero(&content);
    player.attributes.cha = 4;
    let mut enemy = goblin();

    let combat = CombatController::new(
        &mut player,
        &mut enemy,
        &content.moves,
        ScriptedDice::new(rolls),
    );
    let mut output = Vec::new();
    let winner = Skirmish::new(combat, &content.moves, json)
        .run(Cursor::new(script.to_owned()), &mut output)
        .unwrap();
    (winner, String::from_utf8(output).unwrap())
}

#[test]
fn quitting_leaves_no_winner() {
    let (winner, output) = play("quit\nattack\n", vec![], false);
    assert_eq!(winner, None);
    assert!(output.contains("Beldor [Warrior] HP 26/26"), "{output}");
    assert!(!output.contains("attacks"), "{output}");
}

#[test]
fn moves_lists_the_first_page() {
    let (_, output) = play("moves\nquit\n", vec![], false);
    assert!(output.contains("strike"), "{output}");
    assert!(output.contains("guard"), "{output}");
    assert!(output.contains("(moves 1 for more)"), "{output}");
    assert!(!output.contains("kidneyshot"), "{output}");

    let (_, output) = play("moves 1\nquit\n", vec![], false);
    assert!(output.contains("kidneyshot"), "{output}");
    assert!(output.contains("(moves 0 for the previous page)"), "{output}");
}

#[test]
fn unknown_command_is_reported_without_ending_the_turn() {
    let (winner, output) = play("dance\nstatus\n", vec![], false);
    assert_eq!(winner, None);
    assert!(
        output.contains("! unknown action: dance [COMBAT_UNKNOWN_ACTION]"),
        "{output}"
    );
    assert_eq!(output.matches("Goblin [Goblin] HP 14/14").count(), 2);
}

#[test]
fn successful_flee_stops_reading_input() {
    let (winner, output) = play("flee\nattack\n", vec![10], false);
    assert_eq!(winner, Some(Winner::Fled));
    assert!(output.contains("winner: fled"), "{output}");
}

#[test]
fn json_mode_prints_one_object_per_line() {
    let (_, output) = play("run\n", vec![10], true);
    let lines: Vec<serde_json::Value> = output
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // opening state, then the flee result
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["ended"], true);
    assert_eq!(lines[1]["winner"], "fled");
}

#[test]
fn same_seed_prepares_the_same_duel() {
    let content = Content::embedded().unwrap();
    let config = CliConfig {
        seed: Some(42),
        class: Some("wizard".into()),
        difficulty: 1,
        ..CliConfig::default()
    };

    let first = Duel::prepare(&config, &content).unwrap();
    let second = Duel::prepare(&config, &content).unwrap();
    assert_eq!(first.player.name, second.player.name);
    assert_eq!(first.enemy.name, second.enemy.name);
    assert_eq!(first.player.class, "Wizard");
    assert!(first.enemy.name.ends_with("Lv 2)"));
}

#[test]
fn unknown_class_lists_the_presets() {
    let content = Content::embedded().unwrap();
    let config = CliConfig {
        seed: Some(1),
        class: Some("Paladin".into()),
        ..CliConfig::default()
    };
    let error = Duel::prepare(&config, &content).err().unwrap();
    assert!(error.to_string().contains("Warrior, Cleric"), "{error}");
}

#[test]
fn data_directory_supplies_combat_tunables() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("combat.toml"), "defend_pct = 0.25\n").unwrap();
    let override_path = dir.path().join("override.toml");
    std::fs::write(&override_path, "flee_base_dc = 20\n").unwrap();

    let embedded = load_combat_config(&CliConfig::default()).unwrap();
    assert_eq!(embedded, CombatConfig::default());

    let mut config = CliConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..CliConfig::default()
    };
    let from_dir = load_combat_config(&config).unwrap();
    assert_eq!(from_dir.defend_pct, 0.25);

    config.config_path = Some(override_path);
    let explicit = load_combat_config(&config).unwrap();
    assert_eq!(explicit.flee_base_dc, 20);
    assert_eq!(explicit.defend_pct, CombatConfig::default().defend_pct);
}
