use crate::consts::{DEFAULT_BASE_DAMAGE, DEFAULT_DAMAGE_CAP};
use crate::error::{StrikeError, StrikeResult};
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreState {
    pub combo_count: u32,
    pub max_combo: u32,
    pub total_damage: u32,
    pub correct_count: u32,
    pub miss_count: u32,
}

/// Combo-scaled damage: `base + min(combo / step, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringModel {
    pub base_damage: u32,
    pub damage_cap: u32,
    pub combo_step: u32,
}

impl ScoringModel {
    pub fn new(base_damage: u32, damage_cap: u32, combo_step: u32) -> StrikeResult<Self> {
        if combo_step == 0 {
            return Err(StrikeError::Config("combo_step must be greater than 0".into()));
        }
        if base_damage.checked_add(damage_cap).is_none() {
            return Err(StrikeError::Config(format!(
                "base_damage {} plus damage_cap {} overflows",
                base_damage, damage_cap
            )));
        }
        Ok(Self {
            base_damage,
            damage_cap,
            combo_step,
        })
    }

    pub fn with_step(combo_step: u32) -> StrikeResult<Self> {
        Self::new(DEFAULT_BASE_DAMAGE, DEFAULT_DAMAGE_CAP, combo_step)
    }

    pub fn damage(&self, combo_count: u32) -> u32 {
        self.base_damage
            .saturating_add((combo_count / self.combo_step).min(self.damage_cap))
    }

    pub fn max_damage(&self) -> u32 {
        self.base_damage.saturating_add(self.damage_cap)
    }

    /// Records a completed group and applies its damage to `hp`. Returns the damage dealt.
    pub fn on_correct_unit(&self, score: &mut ScoreState, hp: &mut u32) -> u32 {
        score.combo_count = score.combo_count.saturating_add(1);
        score.max_combo = score.max_combo.max(score.combo_count);

        let damage = self.damage(score.combo_count);
        *hp = hp.saturating_sub(damage);
        score.total_damage = score.total_damage.saturating_add(damage);
        score.correct_count = score.correct_count.saturating_add(1);
        damage
    }

    pub fn on_miss(&self, score: &mut ScoreState) {
        score.miss_count = score.miss_count.saturating_add(1);
        score.combo_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(ScoringModel::with_step(0), Err(StrikeError::Config(_))));
    }

    #[test]
    fn test_overflowing_damage_rejected() {
        assert!(matches!(ScoringModel::new(u32::MAX, 1, 30), Err(StrikeError::Config(_))));
        assert!(ScoringModel::new(u32::MAX, 0, 30).is_ok());
    }

    #[test]
    fn test_total_damage_saturates() {
        let m = ScoringModel::new(u32::MAX - 10, 10, 1).unwrap();
        let mut s = ScoreState::default();
        let mut hp = 1;
        m.on_correct_unit(&mut s, &mut hp);
        m.on_correct_unit(&mut s, &mut hp);
        assert_eq!(s.total_damage, u32::MAX);
        assert_eq!(hp, 0);
    }

    #[test]
    fn test_miss_keeps_max_combo() {
        let m = ScoringModel::with_step(50).unwrap();
        let mut s = ScoreState::default();
        let mut hp = 100;
        m.on_correct_unit(&mut s, &mut hp);
        m.on_correct_unit(&mut s, &mut hp);
        m.on_miss(&mut s);
        assert_eq!(s.combo_count, 0);
        assert_eq!(s.max_combo, 2);
        assert_eq!(s.miss_count, 1);
        assert_eq!(hp, 80);
    }

    #[test]
    fn test_hp_clamps_at_zero() {
        let m = ScoringModel::with_step(50).unwrap();
        let mut s = ScoreState::default();
        let mut hp = 5;
        let dealt = m.on_correct_unit(&mut s, &mut hp);
        assert_eq!(dealt, 10);
        assert_eq!(hp, 0);
        assert_eq!(s.total_damage, 10);
    }
}
