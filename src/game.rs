//! Trial mechanics: prize placement, player pick, goat reveal, switch
//! resolution.
//!
//! Doors are `u8` indices in {0, 1, 2}. The host's reveal is constrained
//! to a non-prize, non-chosen door, which makes the switch resolution
//! closed-form: the three indices sum to 3, so the remaining door is
//! always `3 - a - b` for any two distinct doors `a` and `b`.

use rand::Rng;

use crate::constants::DOOR_COUNT;

/// Player strategy for the final decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Keep the initial door.
    Stay,
    /// Move to the remaining unopened door after the host reveals a goat.
    Switch,
}

impl Strategy {
    /// Human-readable name used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Stay => "stay (keep choice)",
            Strategy::Switch => "switch doors",
        }
    }
}

/// Draw a door index uniformly from {0, 1, 2}.
#[inline(always)]
pub fn draw_door<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(0..DOOR_COUNT)
}

/// The one door that is neither `a` nor `b`. Requires `a != b`.
#[inline(always)]
fn third_door(a: u8, b: u8) -> u8 {
    DOOR_COUNT - a - b
}

/// The host opens one leftover door: never the prize, never the player's.
///
/// When the player's pick equals the prize, both other doors hold goats
/// and either is revealed with probability 1/2; otherwise only one goat
/// door remains and the choice is forced.
#[inline(always)]
pub fn host_reveal<R: Rng>(prize: u8, chosen: u8, rng: &mut R) -> u8 {
    if prize == chosen {
        (chosen + rng.random_range(1..DOOR_COUNT)) % DOOR_COUNT
    } else {
        third_door(prize, chosen)
    }
}

/// The door a switching player moves to after `revealed` is opened.
#[inline(always)]
pub fn switch_target(chosen: u8, revealed: u8) -> u8 {
    third_door(chosen, revealed)
}

/// Resolve one trial from fixed prize and player doors.
///
/// Stay keeps the initial door. Switch has the host reveal a goat and
/// moves to the remaining unopened door. Returns true on a win, i.e.
/// when the final door matches the prize. Total over the whole domain:
/// every (prize, chosen, strategy) combination produces an outcome.
pub fn resolve_trial<R: Rng>(prize: u8, chosen: u8, strategy: Strategy, rng: &mut R) -> bool {
    match strategy {
        Strategy::Stay => chosen == prize,
        Strategy::Switch => {
            let revealed = host_reveal(prize, chosen, rng);
            switch_target(chosen, revealed) == prize
        }
    }
}

/// Play one full trial: place the prize, pick a door independently,
/// resolve the strategy.
#[inline(always)]
pub fn play_trial<R: Rng>(strategy: Strategy, rng: &mut R) -> bool {
    let prize = draw_door(rng);
    let chosen = draw_door(rng);
    resolve_trial(prize, chosen, strategy, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_door_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let d = draw_door(&mut rng);
            assert!(d < DOOR_COUNT, "Door out of range: {}", d);
        }
    }

    #[test]
    fn test_draw_door_distribution() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0u64; 3];
        let n = 100_000;
        for _ in 0..n {
            counts[draw_door(&mut rng) as usize] += 1;
        }
        let expected = n as f64 / 3.0;
        for (door, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                ratio > 0.97 && ratio < 1.03,
                "Door {} has count {} (expected ~{:.0}, ratio {:.3})",
                door,
                count,
                expected,
                ratio
            );
        }
    }

    #[test]
    fn test_host_reveal_never_prize_nor_chosen() {
        let mut rng = SmallRng::seed_from_u64(7);
        for prize in 0..DOOR_COUNT {
            for chosen in 0..DOOR_COUNT {
                for _ in 0..100 {
                    let revealed = host_reveal(prize, chosen, &mut rng);
                    assert!(revealed < DOOR_COUNT);
                    assert_ne!(revealed, prize);
                    assert_ne!(revealed, chosen);
                }
            }
        }
    }

    #[test]
    fn test_host_reveal_covers_both_goats() {
        // When the pick is correct, both goat doors must be reachable.
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[host_reveal(0, 0, &mut rng) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1] && seen[2], "Only one goat door ever revealed");
    }

    #[test]
    fn test_switch_from_correct_pick_always_loses() {
        let mut rng = SmallRng::seed_from_u64(123);
        for door in 0..DOOR_COUNT {
            for _ in 0..100 {
                assert!(
                    !resolve_trial(door, door, Strategy::Switch, &mut rng),
                    "Switching away from the prize door must always lose"
                );
            }
        }
    }

    #[test]
    fn test_switch_from_wrong_pick_always_wins() {
        let mut rng = SmallRng::seed_from_u64(123);
        for prize in 0..DOOR_COUNT {
            for chosen in 0..DOOR_COUNT {
                if prize == chosen {
                    continue;
                }
                assert!(
                    resolve_trial(prize, chosen, Strategy::Switch, &mut rng),
                    "Switching from a wrong pick must always win"
                );
            }
        }
    }

    #[test]
    fn test_stay_outcome_matches_initial_pick() {
        let mut rng = SmallRng::seed_from_u64(5);
        for prize in 0..DOOR_COUNT {
            for chosen in 0..DOOR_COUNT {
                assert_eq!(
                    resolve_trial(prize, chosen, Strategy::Stay, &mut rng),
                    prize == chosen
                );
            }
        }
    }
}
