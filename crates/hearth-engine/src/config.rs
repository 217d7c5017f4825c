//! World configuration and validation.
//!
//! Everything fixed at world creation (grid dimensions, margins, brush
//! radii, physical scaling, queue capacity) travels in one
//! [`WorldConfig`] validated before the tick loop starts.

use hearth_core::{ConfigError, Material};

/// Window margins around the grid, in pixels.
///
/// Window coordinates arriving in commands are offset by the west and
/// north margins to reach grid space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    /// Margin above the grid.
    pub north: i32,
    /// Margin right of the grid.
    pub east: i32,
    /// Margin below the grid.
    pub south: i32,
    /// Margin left of the grid.
    pub west: i32,
}

/// Configuration for a sandbox world.
///
/// The defaults describe the classic sandbox: a 150×155 grid inside
/// 15/15/40/15 margins, a radius-10 brush, dt 0.1, and a 100-slot
/// mutation queue.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Grid width in cells.
    pub grid_width: u32,
    /// Grid height in cells.
    pub grid_height: u32,
    /// Window margins around the grid.
    pub margins: Margins,
    /// Radii of the discs unioned into the paint brush.
    pub brush_radii: Vec<u32>,
    /// Element side-length folded into the conductivity prescale.
    pub element_size: f32,
    /// Simulation time-step folded into the conductivity prescale.
    pub dt: f32,
    /// Energy added per covered cell per paint stroke.
    pub paint_energy: f32,
    /// Energy a default fill resets to in temperature view.
    pub baseline_energy: f32,
    /// Material every cell starts with.
    pub default_material: Material,
    /// Capacity of the bounded mutation queue.
    pub queue_capacity: usize,
    /// Tick rate for the simulation thread; `None` means 60 Hz.
    pub tick_rate_hz: Option<f64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_width: 150,
            grid_height: 155,
            margins: Margins {
                north: 15,
                east: 15,
                south: 40,
                west: 15,
            },
            brush_radii: vec![10],
            element_size: 1.0,
            dt: 0.1,
            paint_energy: Material::Water.properties().heat_capacity * 10.0,
            baseline_energy: 0.0,
            default_material: Material::Aluminium,
            queue_capacity: 100,
            tick_rate_hz: None,
        }
    }
}

impl WorldConfig {
    /// Validate the configuration.
    ///
    /// Returns the first problem found; callers abort startup on any
    /// error, before spawning the tick thread.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.brush_radii.is_empty() {
            return Err(ConfigError::EmptyBrush);
        }
        let max_radius = self.brush_radii.iter().copied().max().unwrap_or(0);
        // The edge guard rejects strokes with center distance <= radius,
        // so a paintable center needs strictly more than 2r + 1 cells.
        if 2 * max_radius + 2 > self.grid_width.min(self.grid_height) {
            return Err(ConfigError::BrushTooLarge { max_radius });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidDt { value: self.dt });
        }
        if let Some(rate) = self.tick_rate_hz {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::InvalidTickRate { value: rate });
            }
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = WorldConfig {
            grid_width: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn rejects_empty_brush() {
        let config = WorldConfig {
            brush_radii: vec![],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyBrush));
    }

    #[test]
    fn rejects_brush_wider_than_grid() {
        let config = WorldConfig {
            grid_width: 20,
            grid_height: 20,
            brush_radii: vec![10],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BrushTooLarge { max_radius: 10 })
        );
    }

    #[test]
    fn rejects_bad_dt_and_tick_rate() {
        let config = WorldConfig {
            dt: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDt { .. })));

        let config = WorldConfig {
            tick_rate_hz: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickRate { .. })
        ));
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let config = WorldConfig {
            queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroQueueCapacity));
    }
}
