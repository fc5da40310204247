//! Typewriter effect for the hero role line.
//!
//! Cycles through a fixed list of roles, revealing one character per tick
//! and then deleting one character per tick. The state machine is pure: a
//! tick returns the next state plus the delay before the following tick, and
//! scheduling is left to [`crate::timer::TypewriterLoop`].

use std::time::Duration;

use crate::error::ConfigError;

/// Delays between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub pause_before_delete: Duration,
    pub pause_before_type: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause_before_delete: Duration::from_millis(1500),
            pause_before_type: Duration::from_millis(500),
        }
    }
}

/// Phase plus cursors. `char_index` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeState {
    Typing { role_index: usize, char_index: usize },
    Deleting { role_index: usize, char_index: usize },
}

impl Default for TypeState {
    fn default() -> Self {
        TypeState::Typing {
            role_index: 0,
            char_index: 0,
        }
    }
}

impl TypeState {
    pub fn role_index(&self) -> usize {
        match *self {
            TypeState::Typing { role_index, .. } | TypeState::Deleting { role_index, .. } => {
                role_index
            }
        }
    }

    pub fn char_index(&self) -> usize {
        match *self {
            TypeState::Typing { char_index, .. } | TypeState::Deleting { char_index, .. } => {
                char_index
            }
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, TypeState::Deleting { .. })
    }

    fn clamped(self, role_count: usize) -> TypeState {
        match self {
            TypeState::Typing {
                role_index,
                char_index,
            } => TypeState::Typing {
                role_index: role_index % role_count,
                char_index,
            },
            TypeState::Deleting {
                role_index,
                char_index,
            } => TypeState::Deleting {
                role_index: role_index % role_count,
                char_index,
            },
        }
    }

    /// Advance one tick.
    ///
    /// `roles` must be non-empty with no empty entries; [`Typewriter::new`]
    /// enforces that. Cursors outside the role list or the role are pulled
    /// back in range first.
    pub fn step(self, roles: &[String], timing: &Timing) -> (TypeState, Duration) {
        let role_len = |role_index: usize| roles[role_index].chars().count();
        match self.clamped(roles.len()) {
            TypeState::Typing {
                role_index,
                char_index,
            } => {
                let len = role_len(role_index);
                let char_index = (char_index + 1).min(len);
                if char_index == len {
                    (
                        TypeState::Deleting {
                            role_index,
                            char_index,
                        },
                        timing.pause_before_delete,
                    )
                } else {
                    (
                        TypeState::Typing {
                            role_index,
                            char_index,
                        },
                        timing.type_speed,
                    )
                }
            }
            TypeState::Deleting {
                role_index,
                char_index,
            } => {
                let char_index = char_index.min(role_len(role_index)).saturating_sub(1);
                if char_index == 0 {
                    (
                        TypeState::Typing {
                            role_index: (role_index + 1) % roles.len(),
                            char_index: 0,
                        },
                        timing.pause_before_type,
                    )
                } else {
                    (
                        TypeState::Deleting {
                            role_index,
                            char_index,
                        },
                        timing.delete_speed,
                    )
                }
            }
        }
    }
}

/// A role list is usable if it is non-empty and has no empty role.
pub fn check_roles(roles: &[String]) -> Result<(), ConfigError> {
    if roles.is_empty() {
        return Err(ConfigError::NoRoles);
    }
    match roles.iter().position(|r| r.is_empty()) {
        Some(idx) => Err(ConfigError::EmptyRole(idx)),
        None => Ok(()),
    }
}

/// Roles, timing and the current [`TypeState`].
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: Timing,
    state: TypeState,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timing: Timing) -> Result<Self, ConfigError> {
        check_roles(&roles)?;
        Ok(Self {
            roles,
            timing,
            state: TypeState::default(),
        })
    }

    /// Delay before the very first tick.
    pub fn initial_delay(&self) -> Duration {
        self.timing.type_speed
    }

    /// Apply one tick and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        let (next, delay) = self.state.step(&self.roles, &self.timing);
        if next.is_deleting() != self.state.is_deleting() {
            tracing::trace!(
                role = next.role_index(),
                deleting = next.is_deleting(),
                "typewriter phase change"
            );
        }
        self.state = next;
        delay
    }

    pub fn state(&self) -> TypeState {
        self.state
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn current_role(&self) -> &str {
        &self.roles[self.state.role_index()]
    }

    /// The visible prefix of the current role.
    pub fn current_text(&self) -> &str {
        let role = self.current_role();
        let end = role
            .char_indices()
            .nth(self.state.char_index())
            .map_or(role.len(), |(idx, _)| idx);
        &role[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|r| r.to_string()).collect()
    }

    fn writer(list: &[&str]) -> Typewriter {
        Typewriter::new(roles(list), Timing::default()).expect("valid roles")
    }

    #[test]
    fn starts_empty_and_typing() {
        let tw = writer(&["Dev"]);
        assert_eq!(tw.state(), TypeState::default());
        assert_eq!(tw.current_text(), "");
        assert!(!tw.state().is_deleting());
        assert_eq!(tw.initial_delay(), Duration::from_millis(100));
    }

    #[test]
    fn typing_takes_one_tick_per_char() {
        let mut tw = writer(&["Rust"]);
        let mut shown = Vec::new();
        for _ in 0..4 {
            tw.tick();
            shown.push(tw.current_text().to_string());
        }
        assert_eq!(shown, vec!["R", "Ru", "Rus", "Rust"]);
        assert!(tw.state().is_deleting());
    }

    #[test]
    fn delays_follow_phase() {
        let mut tw = writer(&["ab"]);
        let timing = Timing::default();
        assert_eq!(tw.tick(), timing.type_speed);
        assert_eq!(tw.tick(), timing.pause_before_delete);
        assert_eq!(tw.tick(), timing.delete_speed);
        assert_eq!(tw.tick(), timing.pause_before_type);
    }

    #[test]
    fn deleting_takes_one_tick_per_char() {
        let mut tw = writer(&["Rust", "Go"]);
        for _ in 0..4 {
            tw.tick();
        }
        let mut shown = Vec::new();
        for _ in 0..4 {
            tw.tick();
            shown.push(tw.current_text().to_string());
        }
        // the last tick already points at the next role, with nothing shown
        assert_eq!(shown, vec!["Rus", "Ru", "R", ""]);
        assert_eq!(tw.state().role_index(), 1);
    }

    #[test]
    fn full_cycle_advances_role_by_one() {
        let list = ["Aspiring Developer", "Problem Solver", "Quick Learner"];
        let mut tw = writer(&list);
        for expected in [1, 2, 0, 1] {
            let before = tw.state().role_index();
            let len = tw.current_role().chars().count();
            for _ in 0..2 * len {
                tw.tick();
            }
            assert_eq!(tw.state().role_index(), expected);
            assert_eq!(tw.state().role_index(), (before + 1) % list.len());
            assert!(!tw.state().is_deleting());
            assert_eq!(tw.state().char_index(), 0);
        }
    }

    #[test]
    fn cursors_stay_in_bounds() {
        let mut tw = writer(&["a", "Frontend Enthusiast", "ok"]);
        for _ in 0..500 {
            tw.tick();
            let state = tw.state();
            assert!(state.role_index() < tw.roles().len());
            assert!(state.char_index() <= tw.current_role().chars().count());
        }
    }

    #[test]
    fn single_char_role_cycles() {
        let mut tw = writer(&["x"]);
        tw.tick();
        assert_eq!(tw.current_text(), "x");
        assert!(tw.state().is_deleting());
        tw.tick();
        assert_eq!(tw.current_text(), "");
        assert_eq!(
            tw.state(),
            TypeState::Typing {
                role_index: 0,
                char_index: 0
            }
        );
    }

    #[test]
    fn slices_on_char_boundaries() {
        let mut tw = writer(&["Łódź 🚀"]);
        tw.tick();
        assert_eq!(tw.current_text(), "Ł");
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.current_text(), "Łódź 🚀");
    }

    #[test]
    fn step_pulls_stray_cursors_into_range() {
        let list = roles(&["ab", "xyz"]);
        let timing = Timing::default();

        let (next, _) = TypeState::Deleting {
            role_index: 0,
            char_index: 9,
        }
        .step(&list, &timing);
        assert_eq!(
            next,
            TypeState::Deleting {
                role_index: 0,
                char_index: 1
            }
        );

        let (next, _) = TypeState::Typing {
            role_index: 0,
            char_index: 9,
        }
        .step(&list, &timing);
        assert_eq!(
            next,
            TypeState::Deleting {
                role_index: 0,
                char_index: 2
            }
        );

        let (next, _) = TypeState::Typing {
            role_index: 5,
            char_index: 0,
        }
        .step(&list, &timing);
        assert_eq!(
            next,
            TypeState::Typing {
                role_index: 1,
                char_index: 1
            }
        );
    }

    #[test]
    fn rejects_bad_roles() {
        assert!(matches!(
            Typewriter::new(vec![], Timing::default()),
            Err(ConfigError::NoRoles)
        ));
        assert!(matches!(
            Typewriter::new(roles(&["ok", ""]), Timing::default()),
            Err(ConfigError::EmptyRole(1))
        ));
    }
}
