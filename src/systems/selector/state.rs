use bevy::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Expanding,
    /// Unselected options fading out; runs over the first half of the shrink.
    CollapsingFade,
    CollapsingShrink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandRequest {
    Ignored,
    Start {
        token: u64,
        /// Panel of an interrupted collapse, to be torn down before rebuilding.
        cancelled_panel: Option<Entity>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseStart {
    pub token: u64,
    pub panel: Option<Entity>,
}

/// Expansion state machine of one selector.
///
/// The logical state flips as soon as a transition is requested; `phase`
/// tracks the animation still catching up to it. Every transition takes a new
/// `token`, and animation callbacks carrying an older token are stale.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorState {
    expansion: ExpansionState,
    phase: AnimationPhase,
    token: u64,
    panel: Option<Entity>,
}

impl SelectorState {
    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion == ExpansionState::Expanded
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Live panel entity, including one that is still collapsing.
    pub fn panel(&self) -> Option<Entity> {
        self.panel
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.token == token
    }

    pub fn begin_expand(&mut self) -> ExpandRequest {
        if self.is_expanded() {
            return ExpandRequest::Ignored;
        }
        let cancelled_panel = self.panel.take();
        self.token = self.token.wrapping_add(1);
        self.expansion = ExpansionState::Expanded;
        self.phase = AnimationPhase::Expanding;
        ExpandRequest::Start {
            token: self.token,
            cancelled_panel,
        }
    }

    pub fn attach_panel(&mut self, panel: Entity) {
        self.panel = Some(panel);
    }

    pub fn begin_collapse(&mut self) -> Option<CollapseStart> {
        if !self.is_expanded() {
            return None;
        }
        self.token = self.token.wrapping_add(1);
        self.expansion = ExpansionState::Collapsed;
        self.phase = AnimationPhase::CollapsingFade;
        Some(CollapseStart {
            token: self.token,
            panel: self.panel,
        })
    }

    pub fn enter_shrink(&mut self, token: u64) {
        if self.is_current(token) && self.phase == AnimationPhase::CollapsingFade {
            self.phase = AnimationPhase::CollapsingShrink;
        }
    }

    /// Marks the animation for `token` as done. Returns false for stale tokens.
    pub fn finish(&mut self, token: u64) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.phase = AnimationPhase::Idle;
        if !self.is_expanded() {
            self.panel = None;
        }
        true
    }

    /// Drops a panel that vanished without finishing, e.g. despawned by the host.
    pub fn forget_panel(&mut self, panel: Entity) {
        if self.panel == Some(panel) {
            self.panel = None;
            self.expansion = ExpansionState::Collapsed;
            self.phase = AnimationPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_twice_is_ignored() {
        let mut state = SelectorState::default();
        let ExpandRequest::Start { token, cancelled_panel } = state.begin_expand() else {
            panic!("first expand should start");
        };
        assert_eq!(cancelled_panel, None);
        state.attach_panel(Entity::from_raw(7));

        assert_eq!(state.begin_expand(), ExpandRequest::Ignored);
        assert_eq!(state.token(), token);
        assert_eq!(state.panel(), Some(Entity::from_raw(7)));
    }

    #[test]
    fn collapse_while_collapsed_is_a_no_op() {
        let mut state = SelectorState::default();
        assert_eq!(state.begin_collapse(), None);
        assert_eq!(state.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn collapse_walks_named_phases_then_drops_panel() {
        let mut state = SelectorState::default();
        state.begin_expand();
        let panel = Entity::from_raw(3);
        state.attach_panel(panel);

        let collapse = state.begin_collapse().expect("expanded selector collapses");
        assert_eq!(collapse.panel, Some(panel));
        assert_eq!(state.expansion(), ExpansionState::Collapsed);
        assert_eq!(state.phase(), AnimationPhase::CollapsingFade);

        state.enter_shrink(collapse.token);
        assert_eq!(state.phase(), AnimationPhase::CollapsingShrink);

        assert!(state.finish(collapse.token));
        assert_eq!(state.phase(), AnimationPhase::Idle);
        assert_eq!(state.panel(), None);
    }

    #[test]
    fn expand_during_collapse_cancels_the_old_panel() {
        let mut state = SelectorState::default();
        let ExpandRequest::Start { token: first, .. } = state.begin_expand() else {
            panic!("first expand should start");
        };
        let old_panel = Entity::from_raw(11);
        state.attach_panel(old_panel);
        state.begin_collapse();

        let ExpandRequest::Start { token, cancelled_panel } = state.begin_expand() else {
            panic!("expand during collapse should start");
        };
        assert_eq!(cancelled_panel, Some(old_panel));
        assert!(!state.finish(first));
        assert!(state.is_current(token));
        assert_eq!(state.phase(), AnimationPhase::Expanding);
    }

    #[test]
    fn finishing_an_expansion_keeps_the_panel() {
        let mut state = SelectorState::default();
        let ExpandRequest::Start { token, .. } = state.begin_expand() else {
            panic!("expand should start");
        };
        state.attach_panel(Entity::from_raw(5));
        assert!(state.finish(token));
        assert!(state.is_expanded());
        assert_eq!(state.panel(), Some(Entity::from_raw(5)));
    }
}
