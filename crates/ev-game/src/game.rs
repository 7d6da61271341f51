//! The mode controller.
//!
//! [`Game`] is the whole application state: configuration, the story
//! walker, the combat scheduler, the save store, a pending delayed
//! transition, queued notices, and the quit flag. There are no globals;
//! a front end owns exactly one `Game`.

use ev_combat::{BattleOutcome, Character, CombatScheduler, RollSource};
use ev_story::{Story, StoryError, StoryStep, StoryWalker};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::mode::{Intent, Mode};
use crate::save::{SaveStore, Snapshot};
use crate::view::{CombatView, NarrativeView, View};

/// Seconds between a battle ending and the screen changing.
pub const POST_BATTLE_DELAY: f64 = 3.0;

/// A mode change that fires once its due time has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    /// Timestamp at or after which the transition fires.
    pub due: f64,
    /// Mode to enter.
    pub target: Mode,
}

/// The game: modes, story, combat, and the save slot.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    mode: Mode,
    walker: StoryWalker,
    combat: CombatScheduler,
    store: Box<dyn SaveStore>,
    pending: Option<PendingTransition>,
    notices: Vec<String>,
    should_quit: bool,
}

impl Game {
    /// Create a game on the main menu.
    pub fn new<S: SaveStore + 'static>(story: Story, config: GameConfig, store: S) -> Self {
        let combat = CombatScheduler::new(Character::hero(), &config.combat_config());
        Self::with_combat(story, config, store, combat)
    }

    /// Create a game whose battles draw from a specific roll source.
    pub fn with_rolls<S, R>(story: Story, config: GameConfig, store: S, rolls: R) -> Self
    where
        S: SaveStore + 'static,
        R: RollSource + 'static,
    {
        let combat = CombatScheduler::with_rolls(Character::hero(), &config.combat_config(), rolls);
        Self::with_combat(story, config, store, combat)
    }

    fn with_combat<S: SaveStore + 'static>(
        story: Story,
        config: GameConfig,
        store: S,
        combat: CombatScheduler,
    ) -> Self {
        Self {
            config,
            mode: Mode::MainMenu,
            walker: StoryWalker::new(story),
            combat,
            store: Box::new(store),
            pending: None,
            notices: Vec::new(),
            should_quit: false,
        }
    }

    /// Apply one player intent at time `now`.
    ///
    /// Intents that mean nothing in the current mode are ignored. Refused
    /// combat actions are reported in the battle log, not as errors.
    pub fn handle(&mut self, intent: Intent, now: f64) -> GameResult<()> {
        if !intent.applies_to(self.mode) {
            tracing::debug!(?intent, mode = %self.mode, "intent ignored");
            return Ok(());
        }

        match intent {
            Intent::Start => self.enter(Mode::Narrative, now),
            Intent::Load => self.load(now),
            Intent::Save => self.save(),
            Intent::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
                Ok(())
            }
            Intent::Skill => {
                if let Err(err) = self.combat.cast_skill() {
                    tracing::debug!(%err, "skill refused");
                }
                Ok(())
            }
            Intent::Summon => {
                if let Err(err) = self.combat.summon_ally() {
                    tracing::debug!(%err, "summon refused");
                }
                Ok(())
            }
            Intent::Restart => self.enter(Mode::MainMenu, now),
            Intent::Choose(index) => self.choose(index, now),
        }
    }

    /// Like [`Game::handle`], but failures become notices instead of errors.
    pub fn dispatch(&mut self, intent: Intent, now: f64) {
        if let Err(err) = self.handle(intent, now) {
            tracing::warn!(?intent, %err, "intent failed");
            self.notices.push(err.to_string());
        }
    }

    /// Advance the game to time `now`. Call once per frame.
    ///
    /// Ticks the battle while in combat, schedules the post-battle screen
    /// change, and fires it once due.
    pub fn update(&mut self, now: f64) -> GameResult<()> {
        if let Some(pending) = self.pending {
            if now >= pending.due {
                self.pending = None;
                self.enter(pending.target, now)?;
            }
            return Ok(());
        }

        if self.mode != Mode::Combat {
            return Ok(());
        }
        let Some(outcome) = self.combat.tick(now) else {
            return Ok(());
        };
        let target = match outcome {
            BattleOutcome::Victory => Mode::Narrative,
            BattleOutcome::Defeat => Mode::GameOver,
        };
        let due = now + POST_BATTLE_DELAY;
        tracing::debug!(?outcome, %target, due, "post-battle transition scheduled");
        self.pending = Some(PendingTransition { due, target });
        Ok(())
    }

    /// What to draw this frame.
    pub fn view(&self) -> View {
        match self.mode {
            Mode::MainMenu => View::MainMenu {
                has_save: self.store.has_save(),
            },
            Mode::Narrative => View::Narrative(match self.walker.current_scene() {
                Some(scene) => NarrativeView::from_scene(scene),
                None => NarrativeView::missing(self.walker.current_scene_id()),
            }),
            Mode::Combat => View::Combat(CombatView::of(&self.combat)),
            Mode::GameOver => View::GameOver,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The configuration the game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The story walker.
    pub fn walker(&self) -> &StoryWalker {
        &self.walker
    }

    /// The combat scheduler.
    pub fn combat(&self) -> &CombatScheduler {
        &self.combat
    }

    /// Mutable access to the combat scheduler.
    pub fn combat_mut(&mut self) -> &mut CombatScheduler {
        &mut self.combat
    }

    /// The scheduled screen change, if a battle just ended.
    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Notices waiting to be shown, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Take every queued notice.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn enter(&mut self, mode: Mode, now: f64) -> GameResult<()> {
        match mode {
            Mode::Narrative => {
                self.walker.show_current()?;
            }
            Mode::Combat => self.combat.start(now),
            Mode::MainMenu | Mode::GameOver => {}
        }
        tracing::debug!(from = %self.mode, to = %mode, "mode changed");
        self.mode = mode;
        Ok(())
    }

    fn choose(&mut self, index: usize, now: f64) -> GameResult<()> {
        match self.walker.choose(index) {
            Ok(StoryStep::EnterCombat) => self.enter(Mode::Combat, now),
            Ok(StoryStep::Scene(_)) => Ok(()),
            Err(StoryError::InvalidChoice(index)) => {
                tracing::debug!(index, "no such choice");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self) -> GameResult<()> {
        let snapshot = Snapshot::new(self.walker.current_scene_id(), self.combat.player().clone());
        self.store.save(&snapshot)?;
        self.notices.push("Game saved.".to_string());
        Ok(())
    }

    fn load(&mut self, now: f64) -> GameResult<()> {
        let Some(snapshot) = self.store.load()? else {
            self.notices.push("No save found.".to_string());
            return Ok(());
        };
        if !self.walker.story().contains(&snapshot.scene) {
            return Err(GameError::Save(format!(
                "saved scene '{}' is not part of this story",
                snapshot.scene
            )));
        }

        self.walker.set_current(snapshot.scene);
        self.combat.replace_player(snapshot.player);
        self.enter(Mode::Narrative, now)?;
        self.notices.push("Game loaded.".to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::MemoryStore;
    use ev_combat::FixedRolls;

    fn game() -> Game {
        Game::with_rolls(
            Story::builtin(),
            GameConfig::default(),
            MemoryStore::new(),
            FixedRolls::default(),
        )
    }

    #[test]
    fn starts_on_main_menu() {
        let g = game();
        assert_eq!(g.mode(), Mode::MainMenu);
        assert_eq!(g.view(), View::MainMenu { has_save: false });
        assert!(!g.should_quit());
    }

    #[test]
    fn start_shows_current_scene() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        assert_eq!(g.mode(), Mode::Narrative);
        match g.view() {
            View::Narrative(view) => assert_eq!(view.scene_id, "intro"),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn wrong_mode_intents_are_ignored() {
        let mut g = game();
        g.handle(Intent::Skill, 0.0).unwrap();
        g.handle(Intent::Choose(0), 0.0).unwrap();
        g.handle(Intent::Save, 0.0).unwrap();
        assert_eq!(g.mode(), Mode::MainMenu);
        assert!(g.notices().is_empty());
    }

    #[test]
    fn choosing_combat_starts_battle() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Choose(1), 2.0).unwrap();
        assert_eq!(g.mode(), Mode::Combat);
        assert!(g.combat().is_active());
        assert_eq!(g.combat().clock().last_update(), 2.0);
    }

    #[test]
    fn invalid_choice_is_ignored() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Choose(8), 0.0).unwrap();
        assert_eq!(g.mode(), Mode::Narrative);
        assert_eq!(g.walker().current_scene_id(), "intro");
    }

    #[test]
    fn quit_only_from_menus() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Quit, 0.0).unwrap();
        assert!(!g.should_quit());

        let mut g = game();
        g.handle(Intent::Quit, 0.0).unwrap();
        assert!(g.should_quit());
    }

    #[test]
    fn combat_intents_reach_the_scheduler() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Choose(1), 0.0).unwrap();
        g.handle(Intent::Skill, 0.0).unwrap();
        g.handle(Intent::Summon, 0.0).unwrap();
        assert_eq!(g.combat().player().mp(), 20);
        assert!(g.combat().ally().is_some());
    }

    #[test]
    fn load_on_empty_slot_stays_on_menu() {
        let mut g = game();
        g.handle(Intent::Load, 0.0).unwrap();
        assert_eq!(g.mode(), Mode::MainMenu);
        assert_eq!(g.take_notices(), vec!["No save found.".to_string()]);
        assert!(g.notices().is_empty());
    }

    #[test]
    fn victory_returns_to_story_after_delay() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Choose(1), 10.0).unwrap();
        g.combat_mut().enemy_mut().set_hp(0);

        g.update(10.5).unwrap();
        assert_eq!(
            g.pending(),
            Some(PendingTransition {
                due: 13.5,
                target: Mode::Narrative
            })
        );
        assert_eq!(g.mode(), Mode::Combat);

        g.update(13.4).unwrap();
        assert_eq!(g.mode(), Mode::Combat);
        g.update(13.5).unwrap();
        assert_eq!(g.mode(), Mode::Narrative);
        assert!(g.pending().is_none());
    }

    #[test]
    fn defeat_leads_to_game_over_then_menu() {
        let mut g = game();
        g.handle(Intent::Start, 0.0).unwrap();
        g.handle(Intent::Choose(1), 0.0).unwrap();
        g.combat_mut().player_mut().set_hp(0);

        g.update(0.1).unwrap();
        g.update(3.2).unwrap();
        assert_eq!(g.mode(), Mode::GameOver);
        assert_eq!(g.view(), View::GameOver);

        g.handle(Intent::Restart, 4.0).unwrap();
        assert_eq!(g.mode(), Mode::MainMenu);
    }

    #[test]
    fn dispatch_turns_errors_into_notices() {
        let story = Story::new(
            "a",
            [ev_story::Scene::new("a", "A")
                .with_choice(ev_story::Choice::scene("broken", "b"))],
        )
        .unwrap();
        let mut g = Game::new(story, GameConfig::default(), MemoryStore::new());
        g.dispatch(Intent::Start, 0.0);
        g.dispatch(Intent::Choose(0), 0.0);
        assert_eq!(g.mode(), Mode::Narrative);
        assert_eq!(g.notices(), ["scene not found: b".to_string()]);
    }
}
