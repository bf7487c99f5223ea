//! Color-stop picker state.
//!
//! A stop list is kept sorted by position ascending at all times; every
//! operation that moves a stop re-sorts and then re-locates the focused stop
//! by matching `(position, color)`, so the UI keeps highlighting the stop the
//! user is manipulating even though its index changed under the sort.

use serde::{Deserialize, Serialize};

/// Dragging a marker farther than this many pixels downward removes it.
pub const REMOVE_DRAG_THRESHOLD: f64 = 40.0;

/// Half the marker width; marker offsets are shifted left by this much so the
/// marker tip sits on the exact position.
pub const MARKER_HALF_WIDTH: f64 = 7.0;

const INSERTED_STOP_COLOR: &str = "#fff";

/// One color stop: a position within the picker's range and a CSS color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

impl ColorStop {
    pub fn new(position: f64, color: impl Into<String>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

/// How the preview bar paints the stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopBarMode {
    /// Each stop colors the span up to the next stop; the tail is white.
    #[default]
    Solid,
    /// Continuous gradient through the stops.
    Gradient,
}

/// Snapshot of the stop currently being manipulated.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusedStop {
    pub index: usize,
    pub position: f64,
    pub color: String,
}

/// The picker state machine: the sorted stop list, the range bounds, and the
/// focused stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPicker {
    stops: Vec<ColorStop>,
    min: f64,
    max: f64,
    focused: Option<FocusedStop>,
    drag_origin: Option<f64>,
}

impl StopPicker {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            stops: Vec::new(),
            min,
            max,
            focused: None,
            drag_origin: None,
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn focused(&self) -> Option<&FocusedStop> {
        self.focused.as_ref()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// The value was replaced from outside; focus does not survive that.
    pub fn replace_stops(&mut self, stops: Vec<ColorStop>) {
        self.stops = stops;
        self.sort();
        self.focused = None;
        self.drag_origin = None;
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn clamp(&self, position: f64) -> f64 {
        position.clamp(self.min.min(self.max), self.max.max(self.min))
    }

    /// Position to a `[0, 1]` ratio along the bar. Guards the degenerate
    /// `min == max` range.
    pub fn position_to_ratio(&self, position: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else {
            (self.clamp(position) - self.min) / span
        }
    }

    /// Pixel offset of a marker within a bar of the given width.
    pub fn marker_offset(&self, position: f64, bar_width: f64) -> f64 {
        self.position_to_ratio(position) * bar_width - MARKER_HALF_WIDTH
    }

    fn sort(&mut self) {
        self.stops
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Double-click on the bar background: insert a new stop at the clicked
    /// ratio, preserving sort order, and focus it. Returns its index.
    pub fn insert_at_ratio(&mut self, ratio: f64) -> usize {
        let position = self.min + self.span() * ratio.clamp(0.0, 1.0);
        let index = self
            .stops
            .iter()
            .position(|stop| stop.position > position)
            .unwrap_or(self.stops.len());
        self.stops
            .insert(index, ColorStop::new(position, INSERTED_STOP_COLOR));
        self.focused = Some(FocusedStop {
            index,
            position: self.clamp(position),
            color: INSERTED_STOP_COLOR.to_string(),
        });
        index
    }

    /// Click on a marker: focus a snapshot of that stop, position clamped
    /// into range.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(stop) = self.stops.get(index) else {
            self.focused = None;
            return false;
        };
        self.focused = Some(FocusedStop {
            index,
            position: self.clamp(stop.position),
            color: stop.color.clone(),
        });
        true
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
        self.drag_origin = None;
    }

    /// Records the focused stop's position at drag start.
    pub fn begin_drag(&mut self) {
        self.drag_origin = self.focused.as_ref().map(|f| f.position);
    }

    /// Horizontal drag: new position from the pixel delta scaled by the bar
    /// width. Returns true when the position actually changed.
    pub fn drag_by(&mut self, delta_px: f64, bar_width: f64) -> bool {
        if bar_width <= 0.0 {
            return false;
        }
        let (Some(origin), Some(focused)) = (self.drag_origin, self.focused.clone()) else {
            return false;
        };
        let position = self.clamp(origin + delta_px / bar_width * self.span());
        if position == focused.position {
            return false;
        }
        self.commit_focused(FocusedStop {
            position,
            ..focused
        });
        true
    }

    /// Drag release: dragging past the vertical threshold removes the stop.
    /// Returns true when a stop was removed.
    pub fn end_drag(&mut self, delta_y_px: f64) -> bool {
        self.drag_origin = None;
        if delta_y_px > REMOVE_DRAG_THRESHOLD {
            self.remove_focused()
        } else {
            false
        }
    }

    pub fn remove_focused(&mut self) -> bool {
        let Some(focused) = self.focused.take() else {
            return false;
        };
        if focused.index < self.stops.len() {
            self.stops.remove(focused.index);
            true
        } else {
            false
        }
    }

    /// Side color editor committed a new color for the focused stop.
    pub fn set_focused_color(&mut self, color: impl Into<String>) -> bool {
        let Some(focused) = self.focused.clone() else {
            return false;
        };
        self.commit_focused(FocusedStop {
            color: color.into(),
            ..focused
        });
        true
    }

    /// Side position input committed a new position for the focused stop.
    pub fn set_focused_position(&mut self, position: f64) -> bool {
        let Some(focused) = self.focused.clone() else {
            return false;
        };
        self.commit_focused(FocusedStop {
            position: self.clamp(position),
            ..focused
        });
        true
    }

    /// Writes the focused snapshot back into the list, re-sorts, and
    /// re-locates the stop by `(position, color)` so focus follows it to its
    /// new index.
    fn commit_focused(&mut self, focused: FocusedStop) {
        if let Some(stop) = self.stops.get_mut(focused.index) {
            stop.position = focused.position;
            stop.color.clone_from(&focused.color);
        }
        self.sort();
        let index = self
            .stops
            .iter()
            .position(|stop| stop.position == focused.position && stop.color == focused.color)
            .unwrap_or_else(|| focused.index.min(self.stops.len().saturating_sub(1)));
        self.focused = Some(FocusedStop { index, ..focused });
    }

    /// CSS stop list for the preview bar. Empty input renders solid black.
    pub fn css_stops(&self, mode: StopBarMode) -> String {
        if self.stops.is_empty() {
            return "black 0%, black 100%".to_string();
        }
        match mode {
            StopBarMode::Gradient => self
                .stops
                .iter()
                .map(|stop| {
                    format!(
                        "{} {}%",
                        stop.color,
                        self.position_to_ratio(stop.position) * 100.0
                    )
                })
                .collect::<Vec<_>>()
                .join(","),
            StopBarMode::Solid => {
                let mut pieces = Vec::with_capacity(self.stops.len() + 1);
                let mut last: Option<&ColorStop> = None;
                for stop in &self.stops {
                    let ratio = self.position_to_ratio(stop.position) * 100.0;
                    if let Some(prev) = last {
                        let prev_ratio = self.position_to_ratio(prev.position) * 100.0;
                        pieces.push(format!(
                            "{color} {prev_ratio}%, {color} {ratio}%",
                            color = stop.color
                        ));
                    } else {
                        pieces.push(format!("{} {ratio}%", stop.color));
                    }
                    last = Some(stop);
                }
                if let Some(prev) = last {
                    let prev_ratio = self.position_to_ratio(prev.position) * 100.0;
                    pieces.push(format!(
                        "{} {prev_ratio}%, white {prev_ratio}%, white 100%",
                        prev.color
                    ));
                }
                pieces.join(",")
            }
        }
    }

    /// Full CSS background for the preview bar.
    pub fn css_background(&self, mode: StopBarMode) -> String {
        format!("linear-gradient(to right, {})", self.css_stops(mode))
    }
}

impl Default for StopPicker {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker_with(stops: &[(f64, &str)]) -> StopPicker {
        let mut picker = StopPicker::new(0.0, 1.0);
        picker.replace_stops(
            stops
                .iter()
                .map(|(p, c)| ColorStop::new(*p, *c))
                .collect(),
        );
        picker
    }

    fn positions(picker: &StopPicker) -> Vec<f64> {
        picker.stops().iter().map(|s| s.position).collect()
    }

    fn assert_sorted(picker: &StopPicker) {
        let pos = positions(picker);
        let mut sorted = pos.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(pos, sorted, "stops must stay sorted by position");
    }

    #[test]
    fn insert_keeps_sort_order_and_focuses_the_new_stop() {
        let mut picker = picker_with(&[(0.0, "#000"), (1.0, "#fff")]);
        let index = picker.insert_at_ratio(0.5);
        assert_eq!(index, 1);
        assert_sorted(&picker);
        let focused = picker.focused().unwrap();
        assert_eq!(focused.index, 1);
        assert_eq!(focused.position, 0.5);
        assert_eq!(focused.color, "#fff");
    }

    #[test]
    fn insert_then_read_back_round_trips() {
        let mut picker = StopPicker::new(0.0, 1.0);
        picker.insert_at_ratio(0.25);
        let focused = picker.focused().unwrap().clone();
        assert_eq!(picker.stops()[focused.index].position, focused.position);
        assert_eq!(picker.stops()[focused.index].color, focused.color);
    }

    #[test]
    fn sort_invariant_holds_under_a_drag_sequence() {
        let mut picker = picker_with(&[(0.1, "#a00"), (0.5, "#0a0"), (0.9, "#00a")]);
        picker.select(0);
        picker.begin_drag();
        // drag the first stop across both others, 100px bar
        for delta in [10.0, 30.0, 55.0, 70.0, 85.0] {
            picker.drag_by(delta, 100.0);
            assert_sorted(&picker);
        }
        // the dragged stop is now last and still focused
        let focused = picker.focused().unwrap();
        assert_eq!(focused.color, "#a00");
        assert_eq!(focused.index, 2);
    }

    #[test]
    fn drag_clamps_into_range() {
        let mut picker = picker_with(&[(0.5, "#123")]);
        picker.select(0);
        picker.begin_drag();
        picker.drag_by(1000.0, 100.0);
        assert_eq!(picker.focused().unwrap().position, 1.0);
        picker.drag_by(-1000.0, 100.0);
        assert_eq!(picker.focused().unwrap().position, 0.0);
    }

    #[test]
    fn focus_follows_the_stop_across_resorts() {
        let mut picker = picker_with(&[(0.2, "#111"), (0.8, "#222")]);
        picker.select(1);
        picker.set_focused_position(0.1);
        assert_sorted(&picker);
        let focused = picker.focused().unwrap();
        assert_eq!(focused.index, 0);
        assert_eq!(focused.color, "#222");
        assert_eq!(picker.stops()[0].color, "#222");
    }

    #[test]
    fn vertical_drag_past_threshold_removes_the_stop() {
        let mut picker = picker_with(&[(0.2, "#111"), (0.8, "#222")]);
        picker.select(0);
        picker.begin_drag();
        assert!(!picker.end_drag(REMOVE_DRAG_THRESHOLD - 1.0));
        assert_eq!(picker.stops().len(), 2);

        picker.select(0);
        picker.begin_drag();
        assert!(picker.end_drag(REMOVE_DRAG_THRESHOLD + 1.0));
        assert_eq!(picker.stops().len(), 1);
        assert!(picker.focused().is_none());
    }

    #[test]
    fn degenerate_range_does_not_divide_by_zero() {
        let mut picker = StopPicker::new(3.0, 3.0);
        picker.replace_stops(vec![ColorStop::new(3.0, "#fff")]);
        assert_eq!(picker.position_to_ratio(3.0), 0.0);
        assert!(picker.marker_offset(3.0, 100.0).is_finite());
    }

    #[test]
    fn empty_stop_list_renders_solid_black() {
        let picker = StopPicker::default();
        assert_eq!(
            picker.css_background(StopBarMode::Gradient),
            "linear-gradient(to right, black 0%, black 100%)"
        );
    }

    #[test]
    fn solid_mode_paints_bands_with_a_white_tail() {
        let picker = picker_with(&[(0.0, "#000"), (0.5, "#f00")]);
        let css = picker.css_stops(StopBarMode::Solid);
        assert_eq!(css, "#000 0%,#f00 0%, #f00 50%,#f00 50%, white 50%, white 100%");
    }

    #[test]
    fn gradient_mode_paints_continuous_stops() {
        let picker = picker_with(&[(0.0, "#000"), (1.0, "#fff")]);
        assert_eq!(
            picker.css_stops(StopBarMode::Gradient),
            "#000 0%,#fff 100%"
        );
    }

    #[test]
    fn duplicate_positions_are_allowed() {
        let mut picker = picker_with(&[(0.5, "#111"), (0.5, "#222")]);
        picker.select(0);
        picker.set_focused_position(0.5);
        assert_eq!(picker.stops().len(), 2);
        assert_sorted(&picker);
    }
}
