use crate::config::WidgetConfig;
use crate::event::PageEvent;
use crate::focus_guardian::FocusGuardian;
use crate::star_rating::{self, RatingIndex};
use dom::Node;
use widget_core::{FocusState, RatingStore};

/// Document-scoped widget state owned by the page host.
///
/// Lifecycle policy:
/// - Built once per document by [`PageWidgets::mount`].
/// - Dropped (and rebuilt) on full document navigations.
///
/// Every event is dispatched synchronously to completion; there are no
/// suspension points and no state shared across widget instances.
#[derive(Debug)]
pub struct PageWidgets {
    config: WidgetConfig,
    pub ratings: RatingStore,
    pub focus: FocusState,
    index: RatingIndex,
    guardian: FocusGuardian,
}

impl PageWidgets {
    /// Initialize both behaviors against a ready document.
    ///
    /// The focus guardian resolves (and focuses) the scan input; rating
    /// widgets are constructed for every marked container.
    pub fn mount(dom: &mut Node, config: WidgetConfig) -> Self {
        let mut ratings = RatingStore::new();
        let mut focus = FocusState::new();
        let guardian = FocusGuardian::mount(dom, &config, &mut focus);
        let index = star_rating::mount_all(dom, &config, &mut ratings);
        Self {
            config,
            ratings,
            focus,
            index,
            guardian,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn index(&self) -> &RatingIndex {
        &self.index
    }

    pub fn guardian(&self) -> &FocusGuardian {
        &self.guardian
    }

    /// Route one event to the behaviors. Returns `true` if any state or
    /// DOM mutation resulted.
    ///
    /// Clicks reach the rating widgets first (a star hit confirms that
    /// rating) and then fall through to the focus guardian, mirroring
    /// bubbling from the star to the document level. Pointer transitions
    /// only ever concern the rating widgets.
    pub fn dispatch(&mut self, dom: &mut Node, event: PageEvent) -> bool {
        match event {
            PageEvent::Click { target } => {
                let mut changed = false;
                if let Some((widget, ordinal)) = self.index.widget_for_star(target) {
                    changed |=
                        star_rating::confirm(dom, widget, &self.config, &mut self.ratings, ordinal);
                }
                changed |= self.guardian.on_click(dom, &mut self.focus, target);
                changed
            }
            PageEvent::PointerEnter { target } => {
                match self.index.widget_for_star(target) {
                    Some((widget, ordinal)) => {
                        star_rating::preview(dom, widget, &self.config, ordinal)
                    }
                    None => false,
                }
            }
            PageEvent::PointerLeave { target } => {
                match self.index.widget_for_star(target) {
                    Some((widget, _)) => {
                        star_rating::revert(dom, widget, &self.config, &self.ratings)
                    }
                    None => false,
                }
            }
        }
    }
}
