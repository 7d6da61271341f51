//! End-to-end game flow through the public controller API.

use ev_combat::{FixedRolls, ManualTime, TimeSource};
use ev_game::{
    Game, GameConfig, GameError, Intent, JsonFileStore, MemoryStore, Mode, SaveStore, Snapshot,
    View,
};
use ev_story::Story;

fn file_game(dir: &std::path::Path) -> Game {
    let config = GameConfig::default();
    let store = JsonFileStore::new(dir, &config.save_slot).unwrap();
    Game::new(Story::builtin(), config, store)
}

/// Run frames at 60 fps until the mode changes or `limit` seconds pass.
fn run_until_mode_changes(game: &mut Game, time: &mut ManualTime, limit: f64) -> Mode {
    let start = game.mode();
    let deadline = time.now() + limit;
    while game.mode() == start && time.now() < deadline {
        let now = time.advance(1.0 / 60.0);
        game.update(now).unwrap();
    }
    game.mode()
}

#[test]
fn save_then_load_in_a_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut game = file_game(dir.path());
    game.handle(Intent::Start, 0.0).unwrap();
    game.handle(Intent::Choose(0), 0.0).unwrap();
    game.combat_mut().player_mut().set_mp(17);
    game.handle(Intent::Save, 0.0).unwrap();
    assert_eq!(game.take_notices(), vec!["Game saved.".to_string()]);
    assert!(dir.path().join("savegame.json").is_file());

    let mut fresh = file_game(dir.path());
    assert_eq!(fresh.view(), View::MainMenu { has_save: true });
    fresh.handle(Intent::Load, 0.0).unwrap();
    assert_eq!(fresh.mode(), Mode::Narrative);
    assert_eq!(fresh.walker().current_scene_id(), "talk");
    assert_eq!(fresh.combat().player().mp(), 17);
    assert_eq!(fresh.take_notices(), vec!["Game loaded.".to_string()]);
}

#[test]
fn load_without_save_directory_contents() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = file_game(dir.path());
    game.handle(Intent::Load, 0.0).unwrap();
    assert_eq!(game.mode(), Mode::MainMenu);
    assert_eq!(game.notices(), ["No save found.".to_string()]);
}

#[test]
fn load_rejects_scene_outside_the_story() {
    let mut store = MemoryStore::new();
    store
        .save(&Snapshot::new("throne_room", ev_combat::Character::hero()))
        .unwrap();
    let mut game = Game::new(Story::builtin(), GameConfig::default(), store);

    let err = game.handle(Intent::Load, 0.0).unwrap_err();
    assert!(matches!(err, GameError::Save(_)));
    assert_eq!(game.mode(), Mode::MainMenu);
    assert_eq!(game.walker().current_scene_id(), "intro");
}

#[test]
fn corrupt_save_surfaces_as_notice() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("savegame.json"), "not json").unwrap();
    let mut game = file_game(dir.path());
    game.dispatch(Intent::Load, 0.0);
    assert_eq!(game.mode(), Mode::MainMenu);
    assert_eq!(game.notices().len(), 1);
    assert!(game.notices()[0].starts_with("save data error"));
}

#[test]
fn battle_won_returns_to_the_same_scene() {
    let mut game = Game::new(
        Story::builtin(),
        GameConfig::default().with_seed(11),
        MemoryStore::new(),
    );
    let mut time = ManualTime::default();
    game.handle(Intent::Start, time.now()).unwrap();
    game.handle(Intent::Choose(0), time.now()).unwrap();
    game.handle(Intent::Choose(0), time.now()).unwrap();
    assert_eq!(game.walker().current_scene_id(), "explore");

    game.handle(Intent::Choose(0), time.now()).unwrap();
    assert_eq!(game.mode(), Mode::Combat);
    game.handle(Intent::Skill, time.now()).unwrap();
    game.handle(Intent::Summon, time.now()).unwrap();

    // The battle resolves, then the screen holds for the post-battle delay.
    let mut ended_at = None;
    while ended_at.is_none() && time.now() < 120.0 {
        let now = time.advance(1.0 / 60.0);
        game.update(now).unwrap();
        if game.pending().is_some() {
            ended_at = Some(now);
        }
    }
    let ended_at = ended_at.unwrap();
    assert_eq!(game.mode(), Mode::Combat);
    match game.view() {
        View::Combat(view) => {
            assert!(!view.active);
            assert!(!view.skill_enabled);
            assert_eq!(
                view.log.last().map(String::as_str),
                Some("Victory! Gained 100 experience.")
            );
        }
        other => panic!("unexpected view {other:?}"),
    }

    assert_eq!(run_until_mode_changes(&mut game, &mut time, 10.0), Mode::Narrative);
    assert!(time.now() >= ended_at + 3.0);
    match game.view() {
        View::Narrative(view) => assert_eq!(view.scene_id, "explore"),
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn input_during_post_battle_delay_is_ignored() {
    let mut game = Game::with_rolls(
        Story::builtin(),
        GameConfig::default(),
        MemoryStore::new(),
        FixedRolls::default(),
    );
    game.handle(Intent::Start, 0.0).unwrap();
    game.handle(Intent::Choose(1), 0.0).unwrap();
    game.combat_mut().enemy_mut().set_hp(0);
    game.update(0.0).unwrap();
    assert!(game.pending().is_some());

    let mp = game.combat().player().mp();
    game.handle(Intent::Skill, 1.0).unwrap();
    game.handle(Intent::Summon, 1.0).unwrap();
    assert_eq!(game.combat().player().mp(), mp);
    assert!(game.combat().ally().is_none());

    game.update(2.9).unwrap();
    assert_eq!(game.mode(), Mode::Combat);
    game.update(3.0).unwrap();
    assert_eq!(game.mode(), Mode::Narrative);
}

#[test]
fn defeat_restart_and_play_again() {
    let mut game = Game::with_rolls(
        Story::builtin(),
        GameConfig::default(),
        MemoryStore::new(),
        FixedRolls::default(),
    );
    game.handle(Intent::Start, 0.0).unwrap();
    game.handle(Intent::Choose(1), 0.0).unwrap();
    game.combat_mut().player_mut().set_hp(0);
    game.update(0.5).unwrap();
    game.update(3.5).unwrap();
    assert_eq!(game.mode(), Mode::GameOver);

    game.handle(Intent::Restart, 4.0).unwrap();
    game.handle(Intent::Start, 4.0).unwrap();
    game.handle(Intent::Choose(1), 4.0).unwrap();
    assert_eq!(game.mode(), Mode::Combat);
    assert_eq!(game.combat().player().hp(), 100);
}
