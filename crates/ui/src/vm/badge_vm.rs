use crate::vm::dashboard_vm::CELEBRATION_COIN_THRESHOLD;

pub const SUPER_ACHIEVER: &str = "Super Achiever";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub name: String,
    pub glyph: &'static str,
}

#[must_use]
pub fn badge_glyph(name: &str) -> &'static str {
    match name {
        "Quiz Master" => "🧠",
        "Course Champion" => "🏆",
        "Program Finisher" => "🎓",
        SUPER_ACHIEVER => "🌟",
        _ => "🎖",
    }
}

/// Earned badges, plus a provisional Super Achiever badge once the balance
/// crosses the celebration threshold before the server has awarded it.
#[must_use]
pub fn map_badges(names: &[String], coins: i64) -> Vec<BadgeVm> {
    let mut badges: Vec<BadgeVm> = names
        .iter()
        .map(|name| BadgeVm {
            name: name.clone(),
            glyph: badge_glyph(name),
        })
        .collect();
    if coins >= CELEBRATION_COIN_THRESHOLD && !names.iter().any(|name| name == SUPER_ACHIEVER) {
        badges.push(BadgeVm {
            name: SUPER_ACHIEVER.to_owned(),
            glyph: badge_glyph(SUPER_ACHIEVER),
        });
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_badge_gets_the_fallback_glyph() {
        assert_eq!(badge_glyph("Mystery"), "🎖");
        assert_eq!(badge_glyph("Quiz Master"), "🧠");
    }

    #[test]
    fn super_achiever_appears_once_the_threshold_is_crossed() {
        let earned = vec!["Quiz Master".to_owned()];
        let badges = map_badges(&earned, 1_000);
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[1].name, SUPER_ACHIEVER);

        // Not duplicated when the server already awarded it.
        let earned = vec![SUPER_ACHIEVER.to_owned()];
        assert_eq!(map_badges(&earned, 1_500).len(), 1);

        assert_eq!(map_badges(&[], 999).len(), 0);
    }
}
