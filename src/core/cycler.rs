//! Hero background animation cycle
//!
//! An ordered list of named variants, each shown for its own duration
//! before the next one takes over. Wraps around forever.

/// One background treatment and how long it stays on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationVariant {
    pub class_name: &'static str,
    pub duration_ms: u32,
}

/// Class always kept on the hero animation element
pub const HERO_BASE_CLASS: &str = "disaster-animation";

pub const DISASTER_VARIANTS: [AnimationVariant; 4] = [
    AnimationVariant {
        class_name: "flood-animation",
        duration_ms: 10_000,
    },
    AnimationVariant {
        class_name: "earthquake-animation",
        duration_ms: 8_000,
    },
    AnimationVariant {
        class_name: "drought-animation",
        duration_ms: 12_000,
    },
    AnimationVariant {
        class_name: "cyclone-animation",
        duration_ms: 9_000,
    },
];

/// Full class attribute for the hero element: the base class plus
/// exactly one variant marker once started.
pub fn hero_class(active: Option<&AnimationVariant>) -> String {
    match active {
        Some(variant) => format!("{} {}", HERO_BASE_CLASS, variant.class_name),
        None => HERO_BASE_CLASS.to_string(),
    }
}

/// Position in the variant list
#[derive(Clone, Debug)]
pub struct AnimationCycle {
    variants: &'static [AnimationVariant],
    next: usize,
    active: Option<usize>,
}

impl AnimationCycle {
    pub fn new(variants: &'static [AnimationVariant]) -> Self {
        Self {
            variants,
            next: 0,
            active: None,
        }
    }

    pub fn disaster() -> Self {
        Self::new(&DISASTER_VARIANTS)
    }

    /// Switch to the next variant and return it.
    ///
    /// The caller applies it and schedules the following switch after
    /// the returned variant's duration.
    pub fn advance(&mut self) -> Option<AnimationVariant> {
        if self.variants.is_empty() {
            return None;
        }
        let index = self.next;
        self.active = Some(index);
        self.next = (index + 1) % self.variants.len();
        Some(self.variants[index])
    }

    /// Variant currently applied, if the cycle has started
    pub fn active(&self) -> Option<AnimationVariant> {
        self.active.map(|i| self.variants[i])
    }

    /// Class attribute for the hero element in the current state
    pub fn class_attr(&self) -> String {
        hero_class(self.active().as_ref())
    }

    pub fn variants(&self) -> &'static [AnimationVariant] {
        self.variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_started_has_base_class_only() {
        let cycle = AnimationCycle::disaster();
        assert!(cycle.active().is_none());
        assert_eq!(cycle.class_attr(), "disaster-animation");
    }

    #[test]
    fn test_visits_all_variants_in_order_then_repeats() {
        let mut cycle = AnimationCycle::disaster();
        let names: Vec<_> = (0..8)
            .map(|_| cycle.advance().unwrap().class_name)
            .collect();
        assert_eq!(
            names,
            [
                "flood-animation",
                "earthquake-animation",
                "drought-animation",
                "cyclone-animation",
                "flood-animation",
                "earthquake-animation",
                "drought-animation",
                "cyclone-animation",
            ]
        );
    }

    #[test]
    fn test_exactly_one_variant_class_active() {
        let mut cycle = AnimationCycle::disaster();
        for _ in 0..10 {
            cycle.advance();
            let class_attr = cycle.class_attr();
            let active = DISASTER_VARIANTS
                .iter()
                .filter(|v| class_attr.split_whitespace().any(|c| c == v.class_name))
                .count();
            assert_eq!(active, 1);
            assert!(class_attr.starts_with(HERO_BASE_CLASS));
        }
    }

    #[test]
    fn test_durations_follow_applied_variant() {
        let mut cycle = AnimationCycle::disaster();
        let durations: Vec<_> = (0..4).map(|_| cycle.advance().unwrap().duration_ms).collect();
        assert_eq!(durations, [10_000, 8_000, 12_000, 9_000]);
    }

    #[test]
    fn test_empty_cycle_never_advances() {
        let mut cycle = AnimationCycle::new(&[]);
        assert!(cycle.advance().is_none());
        assert_eq!(cycle.class_attr(), HERO_BASE_CLASS);
    }
}
