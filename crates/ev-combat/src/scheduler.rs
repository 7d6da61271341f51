//! The combat scheduler: cooldown decay, automatic attacks, player skills,
//! and battle termination.
//!
//! The scheduler owns the whole cast for the duration of a battle. The
//! player character outlives battles: [`CombatScheduler::start`] restores
//! it instead of replacing it, while the enemy is rebuilt and the ally
//! cleared.

use crate::character::Character;
use crate::clock::BattleClock;
use crate::config::CombatConfig;
use crate::error::{CombatError, CombatResult};
use crate::log::{BattleLog, LogKind};
use crate::roll::{RollSource, SeededRolls, roll_damage};
use crate::rules;

/// Lifecycle of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    /// No battle has been started.
    Inactive,
    /// The battle is running and accepts ticks and player actions.
    Active,
    /// The battle ended with the player standing.
    Victory,
    /// The battle ended with the player fallen.
    Defeat,
}

/// How a finished battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The enemy fell and the player survived.
    Victory,
    /// The player fell.
    Defeat,
}

/// One member of the fixed cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    /// The player character.
    Player,
    /// The enemy.
    Enemy,
    /// The summoned ally, if present.
    Ally,
}

impl Combatant {
    /// Order in which automatic attacks are evaluated each tick.
    pub const TURN_ORDER: [Combatant; 3] = [Combatant::Player, Combatant::Enemy, Combatant::Ally];
}

/// Drives a battle between the player, one enemy, and an optional ally.
#[derive(Debug)]
pub struct CombatScheduler {
    player: Character,
    enemy: Character,
    ally: Option<Character>,
    state: BattleState,
    clock: BattleClock,
    log: BattleLog,
    rolls: Box<dyn RollSource>,
    reward_experience: u32,
}

impl CombatScheduler {
    /// Create an idle scheduler for `player`, rolling from the configured seed.
    pub fn new(player: Character, config: &CombatConfig) -> Self {
        Self::with_rolls(player, config, SeededRolls::new(config.seed))
    }

    /// Create an idle scheduler with a specific roll source.
    pub fn with_rolls<R: RollSource + 'static>(
        player: Character,
        config: &CombatConfig,
        rolls: R,
    ) -> Self {
        Self {
            player,
            enemy: Character::ruin_guardian(),
            ally: None,
            state: BattleState::Inactive,
            clock: BattleClock::default(),
            log: BattleLog::new(config.max_log_lines),
            rolls: Box::new(rolls),
            reward_experience: config.reward_experience,
        }
    }

    /// Begin a battle at time `now`.
    ///
    /// The player is restored to full hp/mp with cooldowns cleared, a fresh
    /// enemy is created, any ally is dismissed, and the log is restarted.
    pub fn start(&mut self, now: f64) {
        self.player.restore();
        self.enemy = Character::ruin_guardian();
        self.ally = None;
        self.log.clear();
        self.clock.reset(now);
        self.state = BattleState::Active;

        self.log.push(0.0, LogKind::System, "Battle start!");
        self.log.push(
            0.0,
            LogKind::System,
            format!("{} vs {}", self.player.name, self.enemy.name),
        );
        tracing::info!(player = %self.player.name, enemy = %self.enemy.name, "battle started");
    }

    /// Deactivate the battle without resolving it. Later ticks do nothing.
    pub fn stop(&mut self) {
        if self.state == BattleState::Active {
            self.state = BattleState::Inactive;
            tracing::debug!("battle stopped");
        }
    }

    /// Run one tick at time `now`.
    ///
    /// Returns the outcome when this tick ends the battle. Does nothing and
    /// returns `None` unless the battle is active.
    pub fn tick(&mut self, now: f64) -> Option<BattleOutcome> {
        if self.state != BattleState::Active {
            return None;
        }
        let elapsed = self.clock.advance_to(now);

        self.player.decay_cooldowns(elapsed);
        self.enemy.decay_cooldowns(elapsed);
        if let Some(ally) = &mut self.ally {
            ally.decay_cooldowns(elapsed);
        }

        for actor in Combatant::TURN_ORDER {
            if self.ready_to_attack(actor) {
                let target = match actor {
                    Combatant::Enemy => self.enemy_target(),
                    // No swing at an enemy that already fell this tick.
                    Combatant::Player | Combatant::Ally => {
                        self.enemy.is_alive().then_some(Combatant::Enemy)
                    }
                };
                if let Some(target) = target {
                    self.auto_attack(actor, target);
                }
            }
        }

        let outcome = self.check_outcome()?;
        self.finish(outcome);
        Some(outcome)
    }

    /// Whether the battle is over, and how.
    ///
    /// The battle ends once the player's side (player and ally) or the
    /// enemy has no one standing. Which outcome is reported depends only on
    /// the player's own hp at the moment of the check, not on which side
    /// fell first.
    pub fn check_outcome(&self) -> Option<BattleOutcome> {
        let player_side_alive =
            self.player.is_alive() || self.ally.as_ref().is_some_and(Character::is_alive);
        let enemy_side_alive = self.enemy.is_alive();
        if player_side_alive && enemy_side_alive {
            return None;
        }
        if self.player.hp() == 0 {
            Some(BattleOutcome::Defeat)
        } else {
            Some(BattleOutcome::Victory)
        }
    }

    /// Cast Fireball at the enemy. Returns the damage dealt.
    ///
    /// Refused while either the skill or the global cooldown is running, or
    /// when the player lacks mana; a refusal changes nothing except adding
    /// a line to the battle log.
    pub fn cast_skill(&mut self) -> CombatResult<u32> {
        let result = self.try_cast_skill();
        if let Err(err) = &result {
            self.refuse(err);
        }
        result
    }

    /// Summon the ally. Only one ally can be summoned per battle.
    ///
    /// Refused when an ally (alive or fallen) is already present or the
    /// player lacks mana.
    pub fn summon_ally(&mut self) -> CombatResult<()> {
        let result = self.try_summon_ally();
        if let Err(err) = &result {
            self.refuse(err);
        }
        result
    }

    /// Whether a skill cast would currently go through.
    pub fn skill_ready(&self) -> bool {
        self.player.skill_cooldown <= 0.0
            && self.player.global_cooldown <= 0.0
            && self.player.mp() >= rules::FIREBALL_COST
    }

    /// Whether a summon would currently go through.
    pub fn summon_ready(&self) -> bool {
        self.ally.is_none() && self.player.mp() >= rules::SUMMON_COST
    }

    /// Current battle state.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Returns true while the battle accepts ticks and actions.
    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    /// The player character.
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// Mutable access to the player character.
    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    /// Replace the player character (e.g. from a save), returning the old one.
    pub fn replace_player(&mut self, player: Character) -> Character {
        std::mem::replace(&mut self.player, player)
    }

    /// The enemy.
    pub fn enemy(&self) -> &Character {
        &self.enemy
    }

    /// Mutable access to the enemy.
    pub fn enemy_mut(&mut self) -> &mut Character {
        &mut self.enemy
    }

    /// The ally, if one was summoned.
    pub fn ally(&self) -> Option<&Character> {
        self.ally.as_ref()
    }

    /// Mutable access to the ally, if one was summoned.
    pub fn ally_mut(&mut self) -> Option<&mut Character> {
        self.ally.as_mut()
    }

    /// A member of the cast, if present.
    pub fn combatant(&self, who: Combatant) -> Option<&Character> {
        match who {
            Combatant::Player => Some(&self.player),
            Combatant::Enemy => Some(&self.enemy),
            Combatant::Ally => self.ally.as_ref(),
        }
    }

    fn combatant_mut(&mut self, who: Combatant) -> Option<&mut Character> {
        match who {
            Combatant::Player => Some(&mut self.player),
            Combatant::Enemy => Some(&mut self.enemy),
            Combatant::Ally => self.ally.as_mut(),
        }
    }

    /// The battle log.
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// The battle clock.
    pub fn clock(&self) -> &BattleClock {
        &self.clock
    }

    fn ready_to_attack(&self, who: Combatant) -> bool {
        self.combatant(who)
            .is_some_and(|c| c.is_alive() && c.attack_cooldown <= 0.0)
    }

    /// The enemy prefers a living ally half of the time, otherwise the
    /// player. No target when both are down.
    fn enemy_target(&mut self) -> Option<Combatant> {
        let ally_alive = self.ally.as_ref().is_some_and(Character::is_alive);
        if ally_alive && self.rolls.chance() < rules::ALLY_TARGET_CHANCE {
            return Some(Combatant::Ally);
        }
        self.player.is_alive().then_some(Combatant::Player)
    }

    fn auto_attack(&mut self, attacker: Combatant, target: Combatant) {
        let Some(source) = self.combatant(attacker) else {
            return;
        };
        let attacker_name = source.name.clone();
        let attack = source.attack;
        let interval = source.attack_interval();

        let raw = roll_damage(attack, rules::ATTACK_SPREAD, self.rolls.as_mut());
        let Some(victim) = self.combatant_mut(target) else {
            return;
        };
        let dealt = victim.take_damage(raw);
        let victim_name = victim.name.clone();

        if let Some(source) = self.combatant_mut(attacker) {
            source.attack_cooldown = interval;
        }
        self.log.push(
            self.clock.elapsed(),
            LogKind::Attack,
            format!("{attacker_name} attacks {victim_name} for {dealt} damage!"),
        );
    }

    fn try_cast_skill(&mut self) -> CombatResult<u32> {
        self.ensure_active()?;
        let remaining = self.player.skill_cooldown.max(self.player.global_cooldown);
        if remaining > 0.0 {
            return Err(CombatError::OnCooldown { remaining });
        }
        if !self.player.use_mp(rules::FIREBALL_COST) {
            return Err(CombatError::InsufficientMana {
                needed: rules::FIREBALL_COST,
                available: self.player.mp(),
            });
        }

        let base = self.player.attack.saturating_mul(2);
        let raw = roll_damage(base, rules::FIREBALL_SPREAD, self.rolls.as_mut());
        let dealt = self.enemy.take_damage(raw);
        self.player.skill_cooldown = rules::FIREBALL_COOLDOWN;
        self.player.global_cooldown = rules::GLOBAL_COOLDOWN;

        self.log.push(
            self.clock.elapsed(),
            LogKind::Skill,
            format!(
                "{} casts Fireball on {} for {dealt} damage!",
                self.player.name, self.enemy.name
            ),
        );
        Ok(dealt)
    }

    fn try_summon_ally(&mut self) -> CombatResult<()> {
        self.ensure_active()?;
        if self.ally.is_some() {
            return Err(CombatError::AllyPresent);
        }
        if !self.player.use_mp(rules::SUMMON_COST) {
            return Err(CombatError::InsufficientMana {
                needed: rules::SUMMON_COST,
                available: self.player.mp(),
            });
        }

        let ally = Character::spirit_wolf();
        self.log.push(
            self.clock.elapsed(),
            LogKind::Summon,
            format!("{} summons {}!", self.player.name, ally.name),
        );
        tracing::debug!(ally = %ally.name, "ally summoned");
        self.ally = Some(ally);
        Ok(())
    }

    fn ensure_active(&self) -> CombatResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(CombatError::NotActive)
        }
    }

    fn refuse(&mut self, err: &CombatError) {
        // A finished battle keeps its final line last.
        if matches!(err, CombatError::NotActive) {
            return;
        }
        self.log
            .push(self.clock.elapsed(), LogKind::Refused, err.to_string());
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        let text = match outcome {
            BattleOutcome::Victory => {
                self.state = BattleState::Victory;
                format!("Victory! Gained {} experience.", self.reward_experience)
            }
            BattleOutcome::Defeat => {
                self.state = BattleState::Defeat;
                format!("Defeat... {} has fallen.", self.player.name)
            }
        };
        self.log.push(self.clock.elapsed(), LogKind::Outcome, text);
        tracing::info!(
            ?outcome,
            ticks = self.clock.ticks(),
            seconds = self.clock.elapsed(),
            "battle resolved"
        );
    }
}
