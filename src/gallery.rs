use std::time::Duration;

use crate::catalog::{composition, filter_projects, CategoryFilter, ProjectRecord};
use crate::reveal::{delay_ms, stagger_delay, Generation, RevealConfig, RevealState, RevealTracker};

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel<'a> {
    pub position: usize,
    pub project: &'a ProjectRecord,
    pub delay: Duration,
}

pub fn card_class(state: RevealState) -> String {
    format!(
        "glass-card relative rounded-2xl overflow-hidden hover-lift transition-all duration-500 group {}",
        state.card_class()
    )
}

pub fn card_style(delay: Duration) -> String {
    format!("animation-delay: {}", delay_ms(delay))
}

pub fn gallery_cards<'a>(filtered: &[&'a ProjectRecord], config: RevealConfig) -> Vec<CardModel<'a>> {
    let total = filtered.len();
    filtered
        .iter()
        .copied()
        .enumerate()
        .map(|(position, project)| CardModel {
            position,
            project,
            delay: stagger_delay(position, total, config.stagger),
        })
        .collect()
}

/// Moves the gallery from one filter to another. The revealed set survives
/// unless the filtered sequence differs, in which case a new mount generation
/// is started and returned.
pub fn switch_filter(
    tracker: &mut RevealTracker,
    catalog: &[ProjectRecord],
    from: CategoryFilter,
    to: CategoryFilter,
) -> Option<Generation> {
    if from == to {
        return None;
    }
    let before = composition(&filter_projects(catalog, from));
    let after = composition(&filter_projects(catalog, to));
    (before != after).then(|| tracker.remount())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::Category;
    use crate::reveal::{RevealEvent, PROJECT_REVEAL};

    fn reveal_all(tracker: &mut RevealTracker, count: usize) {
        let generation = tracker.generation();
        for position in 0..count {
            tracker.apply(RevealEvent::Entered {
                generation,
                position,
            });
        }
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        let catalog = sample_catalog();
        let filtered = filter_projects(&catalog, CategoryFilter::Only(Category::DevOps));
        assert!(gallery_cards(&filtered, PROJECT_REVEAL).is_empty());
    }

    #[test]
    fn test_cards_follow_positions() {
        let catalog = sample_catalog();
        let filtered = filter_projects(&catalog, CategoryFilter::Only(Category::Automation));
        let mut tracker = RevealTracker::new();
        let generation = tracker.remount();
        tracker.apply(RevealEvent::Entered {
            generation,
            position: 2,
        });

        let cards = gallery_cards(&filtered, PROJECT_REVEAL);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.iter().map(|c| c.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        let states = cards
            .iter()
            .map(|c| RevealState::of(&tracker, c.position))
            .collect::<Vec<_>>();
        assert_eq!(
            states,
            vec![
                RevealState::Pending,
                RevealState::Pending,
                RevealState::Revealed
            ]
        );
        assert_eq!(cards[1].delay, Duration::from_millis(200));
        assert_eq!(card_style(cards[2].delay), "animation-delay: 400ms");
        assert!(card_class(states[0]).contains("opacity-0"));
        assert!(card_class(states[2]).contains("animate-fade-in"));
        assert_eq!(cards[2].project.title, "Email Automation");
    }

    #[test]
    fn test_technologies_keep_stored_order() {
        let mut catalog = sample_catalog();
        catalog[0].technologies = vec!["React".into(), "Node.js".into(), "MySQL".into()];
        let filtered = filter_projects(&catalog, CategoryFilter::All);
        let cards = gallery_cards(&filtered, PROJECT_REVEAL);
        assert_eq!(cards[0].project.technologies, vec!["React", "Node.js", "MySQL"]);
    }

    #[test]
    fn test_reselecting_active_filter_keeps_revealed() {
        let catalog = sample_catalog();
        let mut tracker = RevealTracker::new();
        reveal_all(&mut tracker, 7);
        let before = tracker.clone();

        let automation = CategoryFilter::Only(Category::Automation);
        assert_eq!(
            switch_filter(&mut tracker, &catalog, CategoryFilter::All, CategoryFilter::All),
            None
        );
        assert_eq!(switch_filter(&mut tracker, &catalog, automation, automation), None);
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_composition_change_starts_new_generation() {
        let catalog = sample_catalog();
        let mut tracker = RevealTracker::new();
        reveal_all(&mut tracker, 7);
        let old = tracker.generation();

        let new = switch_filter(
            &mut tracker,
            &catalog,
            CategoryFilter::All,
            CategoryFilter::Only(Category::Automation),
        )
        .expect("a different sequence remounts");
        assert_ne!(new, old);
        assert_eq!(tracker.generation(), new);
        assert_eq!(tracker.revealed().count(), 0);

        // a card from the old grid reporting late changes nothing
        assert!(!tracker.apply(RevealEvent::Entered {
            generation: old,
            position: 1,
        }));
        assert_eq!(tracker.revealed().count(), 0);
    }

    #[test]
    fn test_empty_to_empty_keeps_generation() {
        let catalog = sample_catalog();
        let mut tracker = RevealTracker::new();
        let mobile = CategoryFilter::Only(Category::Mobile);
        let devops = CategoryFilter::Only(Category::DevOps);

        let generation = switch_filter(&mut tracker, &catalog, CategoryFilter::All, mobile)
            .expect("leaving All remounts");
        assert_eq!(switch_filter(&mut tracker, &catalog, mobile, devops), None);
        assert_eq!(
            switch_filter(
                &mut tracker,
                &catalog,
                devops,
                CategoryFilter::Only(Category::DataVisualization)
            ),
            None
        );
        assert_eq!(tracker.generation(), generation);
    }
}
