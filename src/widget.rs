//! The channel wheel widget.
//!
//! `ChannelWheel` owns all of its state and is kept by the host across
//! frames. Pointer gestures and animation ticks are the only mutators apart
//! from [`ChannelWheel::set_selected_channel`]. Painting is a pure function
//! of the current state.
//!
//! # Examples
//!
//! ```
//! use channel_wheel::ChannelWheel;
//!
//! let mut wheel = ChannelWheel::default();
//! wheel.set_on_selection_changed(|name| println!("now showing {name}"));
//!
//! // Drag one slot to the right and let go.
//! wheel.on_press_start(100.0);
//! wheel.on_drag_move(184.0);
//! wheel.on_press_end();
//! assert_eq!(wheel.selected_channel(), "GREEN");
//! ```

use crate::animation::AnimationDriver;
use crate::catalog::{CatalogError, ChannelCatalog};
use crate::config::{ConfigError, WheelConfig, WHEEL_SIZE};
use crate::geometry::{self, round_half_up};
use crate::input::{handle_wheel_input, WheelInput};
use crate::palette::WheelStyle;
use crate::rendering::{paint_wheel, ItemVisual};
use crate::state::{DragSession, ScrollState, SelectionState};

type SelectionCallback = Box<dyn FnMut(&str)>;

/// Horizontally scrolling channel selector drawn as a pseudo-3D carousel.
pub struct ChannelWheel {
    catalog: ChannelCatalog,
    config: WheelConfig,
    style: WheelStyle,
    selection: SelectionState,
    scroll: ScrollState,
    drag: DragSession,
    animation: AnimationDriver,
    /// Single listener, replaced wholesale on registration
    on_selection_changed: Option<SelectionCallback>,
    repaint_requested: bool,
}

impl std::fmt::Debug for ChannelWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelWheel")
            .field("selected", &self.selected_channel())
            .field("offset", &self.scroll.offset())
            .field("target_offset", &self.scroll.target_offset())
            .field("dragging", &self.drag.is_dragging())
            .field("animating", &self.animation.is_running())
            .finish_non_exhaustive()
    }
}

impl Default for ChannelWheel {
    fn default() -> Self {
        Self::new(ChannelCatalog::default())
    }
}

impl ChannelWheel {
    /// Creates a wheel over a validated catalog with the stock configuration.
    pub fn new(catalog: ChannelCatalog) -> Self {
        let config = WheelConfig::default();
        Self {
            catalog,
            animation: AnimationDriver::new(config.tick_interval()),
            config,
            style: WheelStyle::default(),
            selection: SelectionState::new(),
            scroll: ScrollState::new(),
            drag: DragSession::new(),
            on_selection_changed: None,
            repaint_requested: false,
        }
    }

    /// Creates a wheel from parallel name and colour lists.
    ///
    /// Fails if the lists differ in length or are empty.
    pub fn from_channels<N, C>(names: N, colors: C) -> Result<Self, CatalogError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: IntoIterator<Item = egui::Color32>,
    {
        ChannelCatalog::new(names, colors).map(Self::new)
    }

    /// Replaces the geometry and animation parameters.
    ///
    /// Fails if the configuration does not pass [`WheelConfig::validate`].
    pub fn with_config(mut self, config: WheelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.animation = AnimationDriver::new(config.tick_interval());
        self.config = config;
        Ok(self)
    }

    /// Replaces the visual style.
    pub fn with_style(mut self, style: WheelStyle) -> Self {
        self.style = style;
        self
    }

    // ===== Queries =====

    /// Name of the channel in the selection slot.
    pub fn selected_channel(&self) -> &str {
        self.catalog.name(self.selection.selected_index())
    }

    /// Catalog index of the channel in the selection slot.
    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    pub fn catalog(&self) -> &ChannelCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Current scroll offset in slots.
    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Offset the snap animation is easing toward.
    pub fn target_offset(&self) -> f32 {
        self.scroll.target_offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Returns and clears the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    // ===== Host-facing mutations =====

    /// Jumps straight to the channel called `name`.
    ///
    /// Offsets are reset, no animation runs and the selection callback is not
    /// invoked. Unknown names are ignored.
    pub fn set_selected_channel(&mut self, name: &str) {
        let Some(index) = self.catalog.position(name) else {
            tracing::warn!(channel = name, "ignoring selection of unknown channel");
            return;
        };

        self.selection.select(index, self.catalog.len());
        self.scroll.reset();
        self.animation.stop();
        self.repaint_requested = true;
        tracing::debug!(channel = name, index, "channel selected directly");
    }

    /// Registers the selection-changed listener, replacing any previous one.
    ///
    /// The listener runs synchronously on every completed snap, including
    /// releases that leave the selection where it was.
    pub fn set_on_selection_changed(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_selection_changed = Some(Box::new(callback));
    }

    // ===== Gestures =====

    /// Pointer went down at widget-local `x`.
    pub fn on_press_start(&mut self, x: f32) {
        self.drag.begin(x, self.scroll.offset());
        self.animation.stop();
    }

    /// Pointer moved to widget-local `x`. Ignored outside a drag session.
    pub fn on_drag_move(&mut self, x: f32) {
        let Some(offset) = self.drag.offset_at(x, self.config.drag_slot_width()) else {
            return;
        };
        self.scroll.set_offset_clamped(offset, self.config.max_offset);
        self.repaint_requested = true;
    }

    /// Pointer released. Ends the drag session and snaps to the nearest item.
    ///
    /// Returns whether a snap happened (false outside a drag session).
    pub fn on_press_end(&mut self) -> bool {
        if !self.drag.end() {
            return false;
        }
        self.snap_to_nearest_item();
        true
    }

    fn snap_to_nearest_item(&mut self) {
        let rounded = round_half_up(self.scroll.offset());
        let slots = rounded as i64;
        self.selection.apply_snap(slots, self.catalog.len());

        let name = self.catalog.name(self.selection.selected_index());
        tracing::debug!(
            slots,
            index = self.selection.selected_index(),
            channel = name,
            "snapped to nearest channel"
        );
        if let Some(callback) = self.on_selection_changed.as_mut() {
            callback(name);
        }

        self.scroll.set_target(rounded);
        self.animation.start();
        tracing::debug!(target_offset = rounded, "snap animation started");

        if rounded.abs() > self.config.offset_reset_threshold {
            self.scroll.fold(rounded);
        }
        self.repaint_requested = true;
    }

    // ===== Animation =====

    /// Runs one animation tick. Returns whether the animation is still running.
    ///
    /// Does nothing while the animation is stopped.
    pub fn tick(&mut self) -> bool {
        if !self.animation.is_running() {
            return false;
        }

        if self.scroll.remaining() > self.config.animation_threshold {
            self.scroll.ease_toward_target(self.config.animation_speed);
            tracing::trace!(offset = self.scroll.offset(), "animation tick");
        } else {
            self.scroll.settle(self.config.animation_threshold);
            self.animation.stop();
            tracing::debug!(offset = self.scroll.offset(), "snap animation settled");
        }
        self.repaint_requested = true;
        self.animation.is_running()
    }

    // ===== Rendering =====

    /// Lays out the visible items around `center` for the current state.
    pub fn render_items(&self, center: egui::Pos2) -> Vec<ItemVisual<'_>> {
        geometry::render_items(
            center,
            self.selection.selected_index(),
            self.scroll.offset(),
            self.catalog.len(),
            &self.config,
        )
        .into_iter()
        .map(|info| ItemVisual {
            info,
            label: self.catalog.name(info.channel_index),
            color: self.catalog.color(info.channel_index),
        })
        .collect()
    }

    /// Handles input, advances the animation and paints the wheel.
    ///
    /// The response is marked changed whenever a release snapped the wheel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, mut response) = ui.allocate_exact_size(WHEEL_SIZE, egui::Sense::click_and_drag());

        let snapped = match handle_wheel_input(ui.ctx(), rect, &response, self.drag.is_dragging()) {
            WheelInput::PressStarted { x } => {
                self.on_press_start(x);
                false
            }
            WheelInput::Dragged { x } => {
                self.on_drag_move(x);
                false
            }
            WheelInput::Released => self.on_press_end(),
            WheelInput::Tapped => {
                self.on_press_start(0.0);
                self.on_press_end()
            }
            WheelInput::None => false,
        };
        if snapped {
            response.mark_changed();
        }

        let now = ui.input(|i| i.time);
        for _ in 0..self.animation.due_ticks(now) {
            if !self.tick() {
                break;
            }
        }

        if ui.is_rect_visible(rect) {
            let items = self.render_items(rect.center());
            paint_wheel(&ui.painter_at(rect), rect, &items, &self.style, &self.config);
        }

        if self.take_repaint_request() {
            ui.ctx().request_repaint();
        }
        if self.animation.is_running() {
            ui.ctx().request_repaint_after(self.config.tick_interval());
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rgb_wheel() -> ChannelWheel {
        ChannelWheel::from_channels(
            ["RED", "GREEN", "BLUE"],
            [egui::Color32::RED, egui::Color32::GREEN, egui::Color32::BLUE],
        )
        .unwrap()
    }

    fn run_to_rest(wheel: &mut ChannelWheel) -> usize {
        let mut ticks = 0;
        while wheel.tick() {
            ticks += 1;
            assert!(ticks < 1000, "animation never settled");
        }
        ticks
    }

    #[test]
    fn test_from_channels_rejects_mismatch() {
        let err = ChannelWheel::from_channels(["RED"], Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::LengthMismatch { names: 1, colors: 0 }));
    }

    #[test]
    fn test_with_config_rejects_invalid_values() {
        let negative_range = WheelConfig {
            max_offset: -1.0,
            ..WheelConfig::default()
        };
        assert!(matches!(
            rgb_wheel().with_config(negative_range),
            Err(ConfigError::Invalid { field: "max_offset", .. })
        ));

        let zero_width = WheelConfig {
            item_width: 0.0,
            ..WheelConfig::default()
        };
        assert!(matches!(
            rgb_wheel().with_config(zero_width),
            Err(ConfigError::Invalid { field: "item_width", .. })
        ));
    }

    #[test]
    fn test_drag_with_zero_max_offset_stays_put() {
        let config = WheelConfig {
            max_offset: 0.0,
            ..WheelConfig::default()
        };
        let mut wheel = rgb_wheel().with_config(config).unwrap();
        wheel.on_press_start(0.0);
        wheel.on_drag_move(10.0);
        assert_eq!(wheel.offset(), 0.0);
        wheel.on_press_end();
        run_to_rest(&mut wheel);
        assert_eq!(wheel.offset(), 0.0);
        assert_eq!(wheel.selected_channel(), "RED");
    }

    #[test]
    fn test_drag_move_outside_session_is_ignored() {
        let mut wheel = rgb_wheel();
        wheel.on_drag_move(500.0);
        assert_eq!(wheel.offset(), 0.0);
        assert!(!wheel.take_repaint_request());
        assert!(!wheel.on_press_end());
    }

    #[test]
    fn test_drag_clamps_offset() {
        let mut wheel = rgb_wheel();
        wheel.on_press_start(0.0);
        wheel.on_drag_move(-10_000.0);
        assert_eq!(wheel.offset(), wheel.config().max_offset);
        assert!(wheel.take_repaint_request());
        assert!(!wheel.take_repaint_request());
    }

    #[test]
    fn test_press_stops_animation() {
        let mut wheel = rgb_wheel();
        wheel.on_press_start(0.0);
        wheel.on_drag_move(30.0);
        wheel.on_press_end();
        assert!(wheel.is_animating());

        wheel.on_press_start(10.0);
        assert!(!wheel.is_animating());
        assert!(wheel.is_dragging());
        assert!(!wheel.tick());
    }

    #[test]
    fn test_small_drag_eases_back() {
        let mut wheel = rgb_wheel();
        wheel.on_press_start(100.0);
        wheel.on_drag_move(130.0);
        let offset = wheel.offset();
        assert!(offset < 0.0 && offset > -0.5);

        assert!(wheel.on_press_end());
        assert_eq!(wheel.selected_channel(), "RED");
        assert_eq!(wheel.target_offset(), 0.0);
        assert_eq!(wheel.offset(), offset);

        let mut last = wheel.offset().abs();
        while wheel.tick() {
            let now = (wheel.offset() - wheel.target_offset()).abs();
            assert!(now < last);
            last = now;
        }
        assert_eq!(wheel.offset(), 0.0);
        assert!(!wheel.is_animating());
    }

    #[test]
    fn test_callback_fires_on_every_release() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut wheel = rgb_wheel();
        let sink = Rc::clone(&seen);
        wheel.set_on_selection_changed(move |name| sink.borrow_mut().push(name.to_string()));

        wheel.on_press_start(50.0);
        wheel.on_press_end();
        wheel.on_press_start(50.0);
        wheel.on_drag_move(51.0);
        wheel.on_press_end();

        assert_eq!(*seen.borrow(), vec!["RED".to_string(), "RED".to_string()]);
    }

    #[test]
    fn test_callback_is_replaced() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut wheel = rgb_wheel();

        let counter = Rc::clone(&first);
        wheel.set_on_selection_changed(move |_| *counter.borrow_mut() += 1);
        let counter = Rc::clone(&second);
        wheel.set_on_selection_changed(move |_| *counter.borrow_mut() += 1);

        wheel.on_press_start(0.0);
        wheel.on_press_end();
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_set_selected_channel_stops_running_animation() {
        let mut wheel = rgb_wheel();
        wheel.on_press_start(0.0);
        wheel.on_drag_move(20.0);
        wheel.on_press_end();
        assert!(wheel.is_animating());

        wheel.set_selected_channel("BLUE");
        assert_eq!(wheel.selected_index(), 2);
        assert_eq!(wheel.offset(), 0.0);
        assert_eq!(wheel.target_offset(), 0.0);
        assert!(!wheel.is_animating());
        assert_eq!(run_to_rest(&mut wheel), 0);
    }

    #[test]
    fn test_set_selected_channel_unknown_is_noop() {
        let mut wheel = rgb_wheel();
        wheel.set_selected_channel("GREEN");
        wheel.take_repaint_request();
        wheel.set_selected_channel("CYAN");
        assert_eq!(wheel.selected_channel(), "GREEN");
        assert!(!wheel.take_repaint_request());
    }

    #[test]
    fn test_render_items_carry_labels_and_colors() {
        let wheel = rgb_wheel();
        let items = wheel.render_items(egui::pos2(145.0, 40.0));
        let centre = items.iter().find(|i| i.info.position == 0).unwrap();
        assert_eq!(centre.label, "RED");
        assert_eq!(centre.color, egui::Color32::RED);
        let right = items.iter().find(|i| i.info.position == 1).unwrap();
        assert_eq!(right.label, "GREEN");
    }

    #[test]
    fn test_show_allocates_fixed_size() {
        let ctx = egui::Context::default();
        let mut wheel = ChannelWheel::default();
        let mut size = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                size = Some(wheel.show(ui).rect.size());
            });
        });
        let size = size.expect("wheel was not shown");
        assert!((size - WHEEL_SIZE).length() < 0.5);
        assert_eq!(wheel.selected_channel(), "RED");
    }
}
