// the two brand submenus open independently: the wide one on hover or click, the narrow
// one only by tapping its header inside the open mobile menu
//
// the wide dropdown tracks hover and click separately and shows while either is set, so
// a click under the pointer never hides it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disclosure {
    Wide,
    Narrow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub wide_brands_hovered: bool,
    pub wide_brands_pinned: bool,
    pub narrow_brands_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // following any link also unpins the wide dropdown
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.wide_brands_pinned = false;
    }

    pub fn brands_open(&self, disclosure: Disclosure) -> bool {
        match disclosure {
            Disclosure::Wide => self.wide_brands_hovered || self.wide_brands_pinned,
            Disclosure::Narrow => self.narrow_brands_open,
        }
    }

    pub fn set_brands_hovered(&mut self, hovered: bool) {
        self.wide_brands_hovered = hovered;
    }

    // a click pins or unpins the wide dropdown; a tap flips the narrow list
    pub fn toggle_brands(&mut self, disclosure: Disclosure) {
        match disclosure {
            Disclosure::Wide => self.wide_brands_pinned = !self.wide_brands_pinned,
            Disclosure::Narrow => self.narrow_brands_open = !self.narrow_brands_open,
        }
    }

    // returns whether anything changed, so callers can skip redundant writes
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.scrolled != scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_closed_and_unscrolled() {
        let state = NavState::default();
        assert!(!state.menu_open);
        assert!(!state.brands_open(Disclosure::Wide));
        assert!(!state.brands_open(Disclosure::Narrow));
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_menu_twice_is_identity() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn disclosures_are_independent() {
        let mut state = NavState::default();

        state.toggle_brands(Disclosure::Narrow);
        assert!(state.brands_open(Disclosure::Narrow));
        assert!(!state.brands_open(Disclosure::Wide));

        state.set_brands_hovered(true);
        state.toggle_brands(Disclosure::Narrow);
        assert!(state.brands_open(Disclosure::Wide));
        assert!(!state.brands_open(Disclosure::Narrow));
    }

    #[test]
    fn close_menu_keeps_submenu_choice() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.toggle_brands(Disclosure::Narrow);

        state.close_menu();
        assert!(!state.menu_open);
        assert!(state.brands_open(Disclosure::Narrow));
    }

    #[test]
    fn click_while_hovering_keeps_dropdown_open() {
        let mut state = NavState::default();

        state.set_brands_hovered(true);
        assert!(state.brands_open(Disclosure::Wide));

        state.toggle_brands(Disclosure::Wide);
        assert!(state.brands_open(Disclosure::Wide));

        // unpinning under the pointer still leaves it open until the pointer leaves
        state.toggle_brands(Disclosure::Wide);
        assert!(state.brands_open(Disclosure::Wide));
        state.set_brands_hovered(false);
        assert!(!state.brands_open(Disclosure::Wide));
    }

    #[test]
    fn pinned_dropdown_survives_pointer_leaving() {
        let mut state = NavState::default();

        state.set_brands_hovered(true);
        state.toggle_brands(Disclosure::Wide);
        state.set_brands_hovered(false);
        assert!(state.brands_open(Disclosure::Wide));

        state.close_menu();
        assert!(!state.brands_open(Disclosure::Wide));
    }

    #[test]
    fn set_scrolled_reports_changes() {
        let mut state = NavState::default();
        assert!(!state.set_scrolled(false));
        assert!(state.set_scrolled(true));
        assert!(!state.set_scrolled(true));
        assert!(state.scrolled);
    }
}
