// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::Point;

use crate::config::MapperConfig;
use crate::error::MapperError;
use crate::events::{ListenerId, MapperEvent};
use crate::host::SliderHost;
use crate::transform::{AxisTransform, recenter_transform};

/// Scan point count before the user picks one.
pub const DEFAULT_NUM_POINTS: u32 = 10;

type Listener = Box<dyn FnMut(&MapperEvent)>;

/// Keeps the real value of two slider handles in sync with an integer
/// slider range under zoom, pan and resize.
///
/// Three coordinate systems are involved:
/// - the **real domain** the user is selecting (a frequency, a voltage);
/// - viewport **pixels**, related to reals by the current [`AxisTransform`];
/// - the slider's integer **range domain**, related to pixels by the
///   [`SliderHost`].
///
/// The handles are stored as reals. Their range positions are always derived
/// through the current transform, so zooming moves handles on screen but
/// never changes the values they select.
pub struct AxisMapper<H> {
    host: H,
    config: MapperConfig,
    transform: AxisTransform,
    min: f64,
    max: f64,
    num_points: u32,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<H: fmt::Debug> fmt::Debug for AxisMapper<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisMapper")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("transform", &self.transform)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("num_points", &self.num_points)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<H: SliderHost> AxisMapper<H> {
    /// Creates a mapper with the default configuration.
    ///
    /// The transform starts as the identity and the handles at `0` and `1`;
    /// callers normally follow up with [`AxisMapper::on_resize`] or
    /// [`AxisMapper::fit_to_view`] once the host has a size.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: MapperConfig::default(),
            transform: AxisTransform::identity(),
            min: 0.0,
            max: 1.0,
            num_points: DEFAULT_NUM_POINTS,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Creates a mapper after validating `config`.
    pub fn with_config(host: H, config: MapperConfig) -> Result<Self, MapperError> {
        config.validate()?;
        let mut mapper = Self::new(host);
        mapper.config = config;
        Ok(mapper)
    }

    /// Returns the slider host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the slider host mutably, e.g. to update its geometry.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> AxisTransform {
        self.transform
    }

    /// Installs `transform` as is, e.g. to restore a saved view.
    ///
    /// Unlike every other mutator this does not validate; a singular
    /// transform is tolerated by [`AxisMapper::pixel_to_real`].
    pub fn set_transform(&mut self, transform: AxisTransform) {
        self.install(transform);
    }

    // --- conversions ---

    /// Maps a real value to a viewport pixel.
    #[must_use]
    pub fn real_to_pixel(&self, real: f64) -> f64 {
        self.transform.real_to_pixel(real)
    }

    /// Maps a viewport pixel to a real value.
    ///
    /// If the current transform is singular the stored translation alone is
    /// used to reconstruct a value instead of failing.
    #[must_use]
    pub fn pixel_to_real(&self, pixel: f64) -> f64 {
        if self.transform.is_invertible() {
            self.transform.pixel_to_real(pixel)
        } else {
            tracing::warn!(
                scale = self.transform.scale(),
                translate = self.transform.translate(),
                "singular axis transform, falling back to translation only"
            );
            pixel - self.transform.translate()
        }
    }

    /// Maps the X coordinate of a real-space point to pixels, keeping Y.
    #[must_use]
    pub fn real_to_pixel_point(&self, pt: Point) -> Point {
        Point::new(self.real_to_pixel(pt.x), pt.y)
    }

    /// Real value under a viewport point; only `pt.x` is used.
    #[must_use]
    pub fn pixel_point_to_real(&self, pt: Point) -> f64 {
        self.pixel_to_real(pt.x)
    }

    /// Real value at slider range position `value`.
    #[must_use]
    pub fn range_to_real(&self, value: i32) -> f64 {
        self.pixel_to_real(self.host.range_to_pixel(value))
    }

    /// Slider range position of `real`, rounded and clamped to the range
    /// bounds.
    #[must_use]
    pub fn real_to_range(&self, real: f64) -> i32 {
        self.host.pixel_to_range(self.real_to_pixel(real))
    }

    /// Real interval covered by the viewport, lowest value first.
    ///
    /// This is the interval to hand to a ticker for axis labels.
    #[must_use]
    pub fn visible_real_range(&self) -> Range<f64> {
        let start = self.pixel_to_real(0.0);
        let end = self.pixel_to_real(self.host.viewport_width());
        if start <= end { start..end } else { end..start }
    }

    // --- view changes ---

    /// Centers `target_real` in the viewport at `target_scale` pixels per
    /// real unit.
    ///
    /// The scale is clamped to the configured span limits.
    pub fn recenter(&mut self, target_real: f64, target_scale: f64) -> Result<(), MapperError> {
        let width = self.viewport_width()?;
        self.install_centered(target_real, target_scale, width)
    }

    /// Zooms by `factor` (greater than 1 zooms in) toward `anchor_pixel`.
    ///
    /// The real value at the midpoint between the viewport center and the
    /// anchor becomes the new center. Handles keep their real values.
    pub fn zoom(&mut self, factor: f64, anchor_pixel: f64) -> Result<(), MapperError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(MapperError::InvalidFactor { factor });
        }
        if !anchor_pixel.is_finite() {
            return Err(MapperError::NonFinite);
        }
        let width = self.viewport_width()?;
        let center_pixel = (width * 0.5 + anchor_pixel) * 0.5;
        let center = self.pixel_to_real(center_pixel);
        self.install_centered(center, self.transform.scale() * factor, width)
    }

    /// Pans the view by `delta_pixels`, rounded to whole pixels, at the
    /// current scale.
    ///
    /// Positive deltas move the content right.
    pub fn pan(&mut self, delta_pixels: f64) -> Result<(), MapperError> {
        if !delta_pixels.is_finite() {
            return Err(MapperError::NonFinite);
        }
        let delta = libm::round(delta_pixels);
        if delta == 0.0 {
            return Ok(());
        }
        let width = self.viewport_width()?;
        let center = self.pixel_to_real(width * 0.5 - delta);
        self.install_centered(center, self.transform.scale(), width)
    }

    /// Handles a viewport resize from `old_width` to `new_width`.
    ///
    /// The real value under the old center moves to the new center and the
    /// scale is kept. If `old_width` is not a usable size (first layout
    /// pass), the configured default origin and scale are installed instead.
    pub fn on_resize(&mut self, old_width: f64, new_width: f64) -> Result<(), MapperError> {
        let new_width = valid_width(new_width)?;
        if !(old_width.is_finite() && old_width > 0.0) {
            let (origin, scale) = (self.config.default_origin, self.config.default_scale);
            return self.install_centered(origin, scale, new_width);
        }
        let center = self.pixel_to_real(old_width * 0.5);
        self.install_centered(center, self.transform.scale(), new_width)
    }

    /// Zooms so `[real_min, real_max]` covers `fit_fraction` of the
    /// viewport, centered, and moves the handles onto its ends.
    pub fn zoom_to_fit(&mut self, real_min: f64, real_max: f64) -> Result<(), MapperError> {
        if !(real_min.is_finite() && real_max.is_finite() && real_min < real_max) {
            return Err(MapperError::DegenerateSpan {
                min: real_min,
                max: real_max,
            });
        }
        let width = self.viewport_width()?;
        let half_span = real_max * 0.5 - real_min * 0.5;
        let center = real_min * 0.5 + real_max * 0.5;
        let scale = self.config.fit_fraction * width * 0.5 / half_span;
        self.install_centered(center, scale, width)?;
        self.update_min(real_min);
        self.update_max(real_max);
        Ok(())
    }

    /// Moves the handles to 1/3 and 2/3 of the slider range.
    ///
    /// The transform is left alone; the handles take whatever real values
    /// those positions map to. Listeners always receive both values, even
    /// when a handle was already in place.
    pub fn fit_to_view(&mut self) {
        let (lo, hi) = self.host.range_bounds();
        let (first, second) = if hi > lo {
            let span = i64::from(hi) - i64::from(lo);
            (
                third_of(lo, span, 1).unwrap_or(lo),
                third_of(lo, span, 2).unwrap_or(hi),
            )
        } else {
            (lo, lo)
        };
        let min = self.range_to_real(first);
        let max = self.range_to_real(second);
        self.min = min;
        self.max = max;
        self.emit(MapperEvent::MinChanged(min));
        self.emit(MapperEvent::MaxChanged(max));
    }

    // --- handles ---

    /// Real values of the lower and upper handle.
    #[must_use]
    pub fn handles(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Slider range positions of the lower and upper handle.
    #[must_use]
    pub fn handle_positions(&self) -> (i32, i32) {
        (self.real_to_range(self.min), self.real_to_range(self.max))
    }

    /// Sets the lower handle to a real value (spinbox edit).
    pub fn set_min(&mut self, real: f64) -> Result<(), MapperError> {
        if !real.is_finite() {
            return Err(MapperError::NonFinite);
        }
        self.update_min(real);
        Ok(())
    }

    /// Sets the upper handle to a real value (spinbox edit).
    pub fn set_max(&mut self, real: f64) -> Result<(), MapperError> {
        if !real.is_finite() {
            return Err(MapperError::NonFinite);
        }
        self.update_max(real);
        Ok(())
    }

    /// Moves the lower handle to a slider range position (drag).
    ///
    /// The position is clamped to the range bounds.
    pub fn set_min_position(&mut self, value: i32) -> Result<(), MapperError> {
        let real = self.range_to_real(self.clamp_position(value));
        self.set_min(real)
    }

    /// Moves the upper handle to a slider range position (drag).
    ///
    /// The position is clamped to the range bounds.
    pub fn set_max_position(&mut self, value: i32) -> Result<(), MapperError> {
        let real = self.range_to_real(self.clamp_position(value));
        self.set_max(real)
    }

    /// Number of scan points between the handles.
    #[must_use]
    pub fn num_points(&self) -> u32 {
        self.num_points
    }

    /// Sets the number of scan points; a scan needs at least both ends.
    pub fn set_num_points(&mut self, num_points: u32) -> Result<(), MapperError> {
        if num_points < 2 {
            return Err(MapperError::InvalidPointCount);
        }
        if num_points != self.num_points {
            self.num_points = num_points;
            self.emit(MapperEvent::NumPointsChanged(num_points));
        }
        Ok(())
    }

    /// Evenly spaced scan values from the lower to the upper handle,
    /// both ends included.
    #[must_use]
    pub fn scan_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let span = self.max - self.min;
        let last = f64::from(n - 1);
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.max
                } else {
                    self.min + span * (f64::from(i) / last)
                }
            })
            .collect()
    }

    // --- listeners ---

    /// Registers a listener called synchronously after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&MapperEvent) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(%id, "listener added");
        id
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(%id, "listener removed");
        }
        removed
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // --- internals ---

    fn viewport_width(&self) -> Result<f64, MapperError> {
        valid_width(self.host.viewport_width())
    }

    fn clamp_position(&self, value: i32) -> i32 {
        let (lo, hi) = self.host.range_bounds();
        if hi < lo { lo } else { value.clamp(lo, hi) }
    }

    /// Clamps `scale` to the span limits around `center` and installs the
    /// centered transform.
    fn install_centered(&mut self, center: f64, scale: f64, width: f64) -> Result<(), MapperError> {
        if !center.is_finite() {
            return Err(MapperError::NonFinite);
        }
        if scale.is_nan() || scale <= 0.0 {
            return Err(MapperError::InvalidScale { scale });
        }
        let clamped = self.config.clamp_scale(scale, center, width);
        if clamped != scale {
            tracing::debug!(requested = scale, clamped, "zoom clamped to span limits");
        }
        let transform = recenter_transform(center, clamped, width)?;
        self.install(transform);
        Ok(())
    }

    fn install(&mut self, transform: AxisTransform) {
        if transform == self.transform {
            return;
        }
        self.transform = transform;
        tracing::debug!(
            scale = transform.scale(),
            translate = transform.translate(),
            "axis transform replaced"
        );
        self.emit(MapperEvent::TransformChanged(transform));
    }

    fn update_min(&mut self, real: f64) {
        if real != self.min {
            self.min = real;
            self.emit(MapperEvent::MinChanged(real));
        }
    }

    fn update_max(&mut self, real: f64) {
        if real != self.max {
            self.max = real;
            self.emit(MapperEvent::MaxChanged(real));
        }
    }

    fn emit(&mut self, event: MapperEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

fn valid_width(width: f64) -> Result<f64, MapperError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(MapperError::InvalidViewport { width })
    }
}

/// `lo + span * k / 3`, computed in `i64`.
fn third_of(lo: i32, span: i64, k: i64) -> Option<i32> {
    i32::try_from(i64::from(lo) + span * k / 3).ok()
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::AxisMapper;
    use crate::{AxisTransform, FixedSlider, MapperError, MapperEvent};

    fn mapper() -> AxisMapper<FixedSlider> {
        let mut m = AxisMapper::new(FixedSlider::new((0, 1000), 800.0).with_groove(10.0..790.0));
        m.on_resize(0.0, 800.0).unwrap();
        m
    }

    #[test]
    fn first_layout_uses_default_view() {
        let m = mapper();
        assert_eq!(m.transform(), AxisTransform::new(1.0, 400.0));
        assert_eq!(m.pixel_to_real(400.0), 0.0);
    }

    #[test]
    fn singular_transform_falls_back_to_translation() {
        let mut m = mapper();
        m.set_transform(AxisTransform::new(0.0, 5.0));
        assert_eq!(m.pixel_to_real(12.0), 7.0);
    }

    #[test]
    fn zoom_about_center_keeps_center() {
        let mut m = mapper();
        m.recenter(3.0, 10.0).unwrap();
        m.zoom(4.0, 400.0).unwrap();
        assert_eq!(m.transform().scale(), 40.0);
        assert_eq!(m.pixel_to_real(400.0), 3.0);
    }

    #[test]
    fn zoom_moves_halfway_toward_anchor() {
        let mut m = mapper();
        // Real under pixel 600 is 200; the new center is the real under 500.
        m.zoom(2.0, 600.0).unwrap();
        assert_eq!(m.pixel_to_real(400.0), 100.0);
        assert_eq!(m.transform().scale(), 2.0);
    }

    #[test]
    fn zoom_rejects_bad_factor() {
        let mut m = mapper();
        let before = m.transform();
        assert_eq!(
            m.zoom(0.0, 400.0),
            Err(MapperError::InvalidFactor { factor: 0.0 })
        );
        assert!(m.zoom(f64::NAN, 400.0).is_err());
        assert_eq!(m.zoom(2.0, f64::INFINITY), Err(MapperError::NonFinite));
        assert_eq!(m.transform(), before);
    }

    #[test]
    fn pan_shifts_content() {
        let mut m = mapper();
        m.pan(100.0).unwrap();
        assert_eq!(m.real_to_pixel(0.0), 500.0);
        assert_eq!(m.transform().scale(), 1.0);
    }

    #[test]
    fn pan_moves_by_whole_pixels() {
        let mut m = mapper();
        let before = m.transform();
        m.pan(0.4).unwrap();
        assert_eq!(m.transform(), before);
        m.pan(2.6).unwrap();
        assert_eq!(m.real_to_pixel(0.0), 403.0);
        m.pan(-1.5).unwrap();
        assert_eq!(m.real_to_pixel(0.0), 401.0);
    }

    #[test]
    fn events_only_on_change() {
        let mut m = mapper();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        m.subscribe(move |e| sink.borrow_mut().push(*e));

        m.set_min(0.0).unwrap();
        m.set_max(1.0).unwrap();
        m.set_num_points(10).unwrap();
        assert!(seen.borrow().is_empty());

        m.set_min(-2.0).unwrap();
        m.set_num_points(3).unwrap();
        assert_eq!(
            *seen.borrow(),
            [MapperEvent::MinChanged(-2.0), MapperEvent::NumPointsChanged(3)]
        );
    }

    #[test]
    fn scan_points_cover_both_ends() {
        let mut m = mapper();
        m.set_min(1.0).unwrap();
        m.set_max(2.0).unwrap();
        m.set_num_points(5).unwrap();
        assert_eq!(m.scan_points(), [1.0, 1.25, 1.5, 1.75, 2.0]);
        m.set_num_points(2).unwrap();
        assert_eq!(m.scan_points(), [1.0, 2.0]);
    }

    #[test]
    fn scan_needs_two_points() {
        let mut m = mapper();
        assert_eq!(m.set_num_points(1), Err(MapperError::InvalidPointCount));
        assert_eq!(m.set_num_points(0), Err(MapperError::InvalidPointCount));
        assert_eq!(m.num_points(), 10);
        assert_eq!(m.scan_points().len(), 10);
    }
}
