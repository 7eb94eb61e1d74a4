//! Interaction state and state-driven color resolution.
//!
//! The host control owns its [`InteractionState`], updates it synchronously
//! on pointer events, and passes the current value into every paint call.
//! No event wiring lives down here.

use gesso_engine::paint::Color;

/// Pointer-derived visual mode of a control.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InteractionState {
    #[default]
    Normal,
    /// Cursor over the control, button up.
    Hover,
    /// Primary button held over the control.
    Pressed,
}

/// The four-color palette a control's styling draws from.
///
/// Every slot holds a defined color; there is no unset sentinel, so the
/// renderer never has to guess. Hosts that want "no background" use a
/// transparent color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ColorStateTable {
    pub enabled: Color,
    pub disabled: Color,
    pub hover: Color,
    pub pressed: Color,
}

impl ColorStateTable {
    #[inline]
    pub const fn new(enabled: Color, disabled: Color, hover: Color, pressed: Color) -> Self {
        Self { enabled, disabled, hover, pressed }
    }

    /// Same color in every slot.
    #[inline]
    pub const fn uniform(c: Color) -> Self {
        Self { enabled: c, disabled: c, hover: c, pressed: c }
    }

    pub fn enabled(mut self, c: Color) -> Self {
        self.enabled = c;
        self
    }

    pub fn disabled(mut self, c: Color) -> Self {
        self.disabled = c;
        self
    }

    pub fn hover(mut self, c: Color) -> Self {
        self.hover = c;
        self
    }

    pub fn pressed(mut self, c: Color) -> Self {
        self.pressed = c;
        self
    }

    /// Resolves the concrete color for the control's current state.
    ///
    /// A disabled control always resolves to the `disabled` slot, whatever
    /// the interaction state says; enabled controls pick the slot matching
    /// the state. Pure: no side effects, no failure.
    #[inline]
    pub fn resolve(&self, enabled: bool, state: InteractionState) -> Color {
        if !enabled {
            return self.disabled;
        }
        match state {
            InteractionState::Normal => self.enabled,
            InteractionState::Hover => self.hover,
            InteractionState::Pressed => self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ColorStateTable {
        ColorStateTable::new(
            Color::rgb(1, 0, 0),
            Color::rgb(2, 0, 0),
            Color::rgb(3, 0, 0),
            Color::rgb(4, 0, 0),
        )
    }

    // ── disabled ──────────────────────────────────────────────────────────

    #[test]
    fn disabled_wins_over_every_interaction_state() {
        let t = table();
        for state in
            [InteractionState::Normal, InteractionState::Hover, InteractionState::Pressed]
        {
            assert_eq!(t.resolve(false, state), t.disabled);
        }
    }

    // ── enabled ───────────────────────────────────────────────────────────

    #[test]
    fn enabled_picks_the_matching_slot() {
        let t = table();
        assert_eq!(t.resolve(true, InteractionState::Normal), t.enabled);
        assert_eq!(t.resolve(true, InteractionState::Hover), t.hover);
        assert_eq!(t.resolve(true, InteractionState::Pressed), t.pressed);
    }

    #[test]
    fn enabled_never_returns_disabled_slot() {
        let t = table();
        for state in
            [InteractionState::Normal, InteractionState::Hover, InteractionState::Pressed]
        {
            assert_ne!(t.resolve(true, state), t.disabled);
        }
    }
}
