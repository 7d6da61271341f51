//! Render instructions produced by the controller each frame.
//!
//! Views are plain data. A front end draws them however it likes and never
//! reaches into the game state directly.

use ev_combat::{Character, CombatScheduler};
use ev_story::Scene;

/// Everything a front end needs to draw the current frame.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Title screen.
    MainMenu {
        /// Whether the save slot holds a save.
        has_save: bool,
    },
    /// A story scene.
    Narrative(NarrativeView),
    /// A battle.
    Combat(CombatView),
    /// Defeat screen.
    GameOver,
}

/// A story scene ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeView {
    /// Scene id.
    pub scene_id: String,
    /// Narrative text.
    pub text: String,
    /// Background asset key.
    pub background: String,
    /// Portrait asset key.
    pub portrait: String,
    /// Choice labels, in order. Choice `i` maps to `Intent::Choose(i)`.
    pub choices: Vec<String>,
}

impl NarrativeView {
    /// View of a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            scene_id: scene.id.clone(),
            text: scene.text.clone(),
            background: scene.background.clone(),
            portrait: scene.portrait.clone(),
            choices: scene.choices.iter().map(|c| c.text.clone()).collect(),
        }
    }

    /// Placeholder for a scene id that does not resolve.
    pub fn missing(scene_id: &str) -> Self {
        Self {
            scene_id: scene_id.to_string(),
            text: String::new(),
            background: String::new(),
            portrait: String::new(),
            choices: Vec::new(),
        }
    }
}

/// One combatant's bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantView {
    /// Display name.
    pub name: String,
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Current mana.
    pub mp: u32,
    /// Maximum mana.
    pub max_mp: u32,
    /// Hit points as a percentage (0-100).
    pub hp_percent: u16,
    /// Mana as a percentage (0-100).
    pub mp_percent: u16,
    /// Whether the combatant is still standing.
    pub alive: bool,
}

impl CombatantView {
    /// Snapshot a character's bars.
    pub fn of(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            hp: character.hp(),
            max_hp: character.max_hp,
            mp: character.mp(),
            max_mp: character.max_mp,
            hp_percent: percent(character.hp_fraction()),
            mp_percent: percent(character.mp_fraction()),
            alive: character.is_alive(),
        }
    }
}

fn percent(fraction: f64) -> u16 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u16
}

/// A battle ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatView {
    /// The player.
    pub player: CombatantView,
    /// The enemy.
    pub enemy: CombatantView,
    /// The ally, once summoned.
    pub ally: Option<CombatantView>,
    /// Whether the skill control should be enabled.
    pub skill_enabled: bool,
    /// Whether the summon control should be enabled.
    pub summon_enabled: bool,
    /// Remaining skill cooldown in seconds (the longer of skill and global).
    pub skill_cooldown: f64,
    /// Whether the battle is still running.
    pub active: bool,
    /// Battle log text, oldest first.
    pub log: Vec<String>,
}

impl CombatView {
    /// View of a scheduler's current state.
    pub fn of(combat: &CombatScheduler) -> Self {
        let player = combat.player();
        let active = combat.is_active();
        Self {
            player: CombatantView::of(player),
            enemy: CombatantView::of(combat.enemy()),
            ally: combat.ally().map(CombatantView::of),
            skill_enabled: active && combat.skill_ready(),
            summon_enabled: active && combat.summon_ready(),
            skill_cooldown: player.skill_cooldown.max(player.global_cooldown),
            active,
            log: combat.log().texts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_combat::CombatConfig;
    use ev_story::Story;

    #[test]
    fn narrative_view_lists_choices() {
        let story = Story::builtin();
        let view = NarrativeView::from_scene(story.scene("intro").unwrap());
        assert_eq!(view.scene_id, "intro");
        assert_eq!(view.portrait, "player");
        assert_eq!(
            view.choices,
            vec!["Talk to the creature".to_string(), "Prepare for battle".to_string()]
        );
    }

    #[test]
    fn combatant_percentages() {
        let mut hero = Character::hero();
        hero.set_hp(33);
        hero.set_mp(25);
        let view = CombatantView::of(&hero);
        assert_eq!(view.hp_percent, 33);
        assert_eq!(view.mp_percent, 50);
        assert!(view.alive);

        let wolf = CombatantView::of(&Character::spirit_wolf());
        assert_eq!(wolf.mp_percent, 100);
    }

    #[test]
    fn idle_scheduler_disables_controls() {
        let combat = CombatScheduler::new(Character::hero(), &CombatConfig::default());
        let view = CombatView::of(&combat);
        assert!(!view.active);
        assert!(!view.skill_enabled);
        assert!(!view.summon_enabled);
    }

    #[test]
    fn active_scheduler_view() {
        let mut combat = CombatScheduler::new(Character::hero(), &CombatConfig::default());
        combat.start(0.0);
        let view = CombatView::of(&combat);
        assert!(view.active);
        assert!(view.skill_enabled);
        assert!(view.summon_enabled);
        assert!(view.ally.is_none());
        assert_eq!(view.enemy.name, "Ruin Guardian");
        assert_eq!(view.log.first().map(String::as_str), Some("Battle start!"));

        combat.summon_ally().unwrap();
        let view = CombatView::of(&combat);
        assert!(!view.summon_enabled);
        assert_eq!(view.ally.map(|a| a.name), Some("Spirit Wolf".to_string()));
    }
}
