use crate::content::Section;

pub const SCROLLED_THRESHOLD_PX: u32 = 50;
pub const ACTIVE_SECTION_LOOKAHEAD_PX: u32 = 200;

/// Live vertical placement of a mounted section, in page pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: i32,
    pub height: i32,
}

impl SectionBounds {
    pub fn contains(self, probe: i64) -> bool {
        let top = i64::from(self.top);
        probe >= top && probe < top + i64::from(self.height)
    }
}

/// Pointer position as a percentage of the viewport on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerFraction {
    pub x: f64,
    pub y: f64,
}

impl PointerFraction {
    pub fn from_client(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x: percent_of(client_x, viewport_width),
            y: percent_of(client_y, viewport_height),
        }
    }

    pub fn css_vars(self) -> String {
        format!("--mouse-x: {:.2}%; --mouse-y: {:.2}%;", self.x, self.y)
    }
}

fn percent_of(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value / extent * 100.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scroll_offset: u32,
    pub pointer: PointerFraction,
    pub scrolled: bool,
    pub active: Section,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            pointer: PointerFraction::default(),
            scrolled: false,
            active: Section::Home,
        }
    }
}

impl ViewportState {
    /// Applies one scroll tick. `bounds` returns `None` for sections that are
    /// not mounted yet; those are skipped.
    pub fn on_scroll(self, scroll_offset: u32, bounds: impl Fn(Section) -> Option<SectionBounds>) -> Self {
        Self {
            scroll_offset,
            scrolled: scroll_offset > SCROLLED_THRESHOLD_PX,
            active: active_section(scroll_offset, bounds).unwrap_or(self.active),
            ..self
        }
    }

    pub fn on_pointer(self, pointer: PointerFraction) -> Self {
        Self { pointer, ..self }
    }
}

/// First section in declared order whose bounds contain the look-ahead probe.
pub fn active_section(
    scroll_offset: u32,
    bounds: impl Fn(Section) -> Option<SectionBounds>,
) -> Option<Section> {
    let probe = i64::from(scroll_offset) + i64::from(ACTIVE_SECTION_LOOKAHEAD_PX);

    Section::ALL
        .into_iter()
        .find(|section| bounds(*section).is_some_and(|placed| placed.contains(probe)))
}

/// Holds a listener registration until released. Releasing twice is a no-op,
/// and dropping the guard releases it.
pub struct Subscription<T> {
    handle: Option<T>,
}

impl<T> Subscription<T> {
    pub fn new(handle: T) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        drop(self.handle.take());
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn evenly_spaced(section: Section) -> Option<SectionBounds> {
        let index = Section::ALL.iter().position(|candidate| *candidate == section)?;
        Some(SectionBounds {
            top: i32::try_from(index).ok()? * 800,
            height: 800,
        })
    }

    #[test]
    fn lookahead_moves_highlight_to_next_section() {
        let state = ViewportState::default().on_scroll(700, evenly_spaced);
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn section_boundaries_are_half_open() {
        assert_eq!(active_section(600, evenly_spaced), Some(Section::About));
        assert_eq!(active_section(599, evenly_spaced), Some(Section::Home));
        assert_eq!(active_section(3000, evenly_spaced), Some(Section::Contact));
    }

    #[test]
    fn scrolled_flag_is_exclusive_at_threshold() {
        let state = ViewportState::default();
        assert!(!state.on_scroll(0, evenly_spaced).scrolled);
        assert!(!state.on_scroll(50, evenly_spaced).scrolled);
        assert!(state.on_scroll(51, evenly_spaced).scrolled);
    }

    #[test]
    fn past_the_last_section_keeps_previous_highlight() {
        let state = ViewportState::default()
            .on_scroll(3500, evenly_spaced)
            .on_scroll(9000, evenly_spaced);
        assert_eq!(state.active, Section::Contact);
        assert_eq!(state.scroll_offset, 9000);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let without_about = |section: Section| {
            if section == Section::About {
                None
            } else {
                evenly_spaced(section)
            }
        };

        let state = ViewportState::default().on_scroll(700, without_about);
        assert_eq!(state.active, Section::Home);

        let state = state.on_scroll(1500, without_about);
        assert_eq!(state.active, Section::Services);
    }

    #[test]
    fn nothing_mounted_stays_on_home() {
        let state = ViewportState::default().on_scroll(1200, |_| None);
        assert_eq!(state.active, Section::Home);
        assert!(state.scrolled);
    }

    #[test]
    fn overlapping_bounds_pick_the_first_declared_section() {
        let overlapping = |section: Section| match section {
            Section::Home => Some(SectionBounds { top: 0, height: 1000 }),
            Section::About => Some(SectionBounds { top: 500, height: 1000 }),
            _ => None,
        };
        assert_eq!(active_section(600, overlapping), Some(Section::Home));
    }

    #[test]
    fn returning_to_the_top_resets_highlight_and_threshold() {
        let state = ViewportState::default()
            .on_scroll(2500, evenly_spaced)
            .on_scroll(0, evenly_spaced);
        assert_eq!(state.active, Section::Home);
        assert!(!state.scrolled);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn pointer_fraction_is_a_percentage_of_viewport() {
        let pointer = PointerFraction::from_client(640.0, 180.0, 1280.0, 720.0);
        assert_eq!(pointer, PointerFraction { x: 50.0, y: 25.0 });

        let state = ViewportState::default().on_pointer(pointer);
        assert_eq!(state.pointer, pointer);
        assert_eq!(state.active, Section::Home);
    }

    #[test]
    fn zero_sized_viewport_does_not_divide_by_zero() {
        let pointer = PointerFraction::from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(pointer, PointerFraction::default());
    }

    struct CountOnDrop(Rc<Cell<usize>>);

    impl Drop for CountOnDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let mut subscription = Subscription::new(CountOnDrop(Rc::clone(&released)));
        assert!(subscription.is_active());

        subscription.release();
        subscription.release();
        assert!(!subscription.is_active());
        drop(subscription);

        assert_eq!(released.get(), 1);
    }

    #[test]
    fn dropping_subscription_releases_handle() {
        let released = Rc::new(Cell::new(0));
        {
            let _subscription = Subscription::new(CountOnDrop(Rc::clone(&released)));
        }
        assert_eq!(released.get(), 1);
    }
}
