//! The tick engine: exclusive owner of all simulation state.
//!
//! One engine instance is moved onto the tick thread and never shared;
//! the only way in is the command channel, the only way out is the
//! published frame. Per tick, strictly in order: apply drained
//! mutations, run the diffusion step, render and hand off the frame.

use hearth_core::{ApplyOutcome, Command, Material, MaterialTable, TickId, ViewMode};
use hearth_sim::{apply, heat_flow, Brush, EditParams, EditorState, Grid};

use crate::config::WorldConfig;
use crate::frame::Frame;

/// Simulation engine advancing one grid through drain → diffuse →
/// render ticks.
#[derive(Debug)]
pub struct TickEngine {
    grid: Grid,
    table: MaterialTable,
    brush: Brush,
    state: EditorState,
    params: EditParams,
    frame: Frame,
    tick: TickId,
    background_clears: u64,
}

impl TickEngine {
    /// Build an engine from a validated configuration.
    ///
    /// This is the initialization-failure boundary: any
    /// [`ConfigError`](hearth_core::ConfigError) is returned before the
    /// caller enters the tick loop.
    pub fn new(config: &WorldConfig) -> Result<Self, hearth_core::ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(
                config.grid_width,
                config.grid_height,
                config.default_material,
            ),
            table: MaterialTable::new(config.element_size, config.dt),
            brush: Brush::from_radii(&config.brush_radii),
            state: EditorState::default(),
            params: EditParams {
                margin_west: config.margins.west,
                margin_north: config.margins.north,
                paint_energy: config.paint_energy,
                baseline_energy: config.baseline_energy,
            },
            frame: Frame::new(config.grid_width, config.grid_height),
            tick: TickId(0),
            background_clears: 0,
        })
    }

    /// Apply one queued mutation command.
    ///
    /// A view change clears the frame to the neutral background so the
    /// stale channel from the previous view never shows through.
    pub fn apply_command(&mut self, command: &Command) -> ApplyOutcome {
        let outcome = apply(
            &mut self.grid,
            &self.brush,
            &mut self.state,
            &self.params,
            command,
        );
        if outcome == ApplyOutcome::ViewChanged {
            self.frame.clear();
            self.background_clears += 1;
        }
        outcome
    }

    /// Advance one tick: diffuse, then render the frame.
    ///
    /// Diffusion runs in both view modes. A NaN abort is logged and
    /// swallowed; the loop continues on the next tick.
    pub fn execute_tick(&mut self) -> &Frame {
        if let Err(err) = heat_flow(&mut self.grid, &self.table) {
            log::warn!("tick {}: diffusion step aborted: {err}", self.tick);
        }
        self.tick = self.tick.next();
        self.render();
        &self.frame
    }

    fn render(&mut self) {
        self.frame.tick = self.tick;
        self.frame.view = self.state.view;
        match self.state.view {
            ViewMode::Temperature => {
                for (i, &material) in self.grid.materials().iter().enumerate() {
                    let energy = self.grid.energies()[i];
                    let temp = energy * self.table.inv_heat_capacity(material);
                    let texel = &mut self.frame.pixels[i * 4..i * 4 + 4];
                    texel[0] = temp.clamp(0.0, 255.0) as u8;
                    texel[3] = 255;
                }
            }
            ViewMode::Material => {
                for (i, &material) in self.grid.materials().iter().enumerate() {
                    let texel = &mut self.frame.pixels[i * 4..i * 4 + 4];
                    texel[1] = material_shade(material);
                    texel[3] = 255;
                }
            }
        }
    }

    /// The grid, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The material table, read-only.
    pub fn table(&self) -> &MaterialTable {
        &self.table
    }

    /// Current editor state (view mode and selected material).
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Number of completed ticks.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// How many times the frame was cleared to the background by view
    /// changes.
    pub fn background_clears(&self) -> u64 {
        self.background_clears
    }
}

/// Distinct green-channel shade per material.
fn material_shade(material: Material) -> u8 {
    match material {
        Material::Aluminium => 80,
        Material::Glass => 160,
        Material::Water => 240,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{FillValue, ViewTarget};

    fn small_config() -> WorldConfig {
        WorldConfig {
            grid_width: 10,
            grid_height: 10,
            brush_radii: vec![1],
            ..Default::default()
        }
    }

    fn paint_center(engine: &mut TickEngine) -> ApplyOutcome {
        // Window (20, 20) → grid (5, 5) under the default 15/15 margins.
        engine.apply_command(&Command::PaintPoint { x: 20, y: 20 })
    }

    // ── construction ───────────────────────────────────────────

    #[test]
    fn new_rejects_invalid_config() {
        let config = WorldConfig {
            grid_width: 0,
            ..small_config()
        };
        assert!(TickEngine::new(&config).is_err());
    }

    #[test]
    fn new_engine_starts_at_tick_zero() {
        let engine = TickEngine::new(&small_config()).unwrap();
        assert_eq!(engine.tick_id(), TickId(0));
        assert_eq!(engine.state().view, ViewMode::Temperature);
        assert_eq!(engine.background_clears(), 0);
    }

    // ── tick sequence ──────────────────────────────────────────

    #[test]
    fn execute_tick_diffuses_and_advances() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        assert_eq!(paint_center(&mut engine), ApplyOutcome::Applied);
        let center_before = engine.grid().cell(5, 5).unwrap().energy;
        let total_before = engine.grid().total_energy();

        let frame = engine.execute_tick();
        assert_eq!(frame.tick, TickId(1));

        assert!((engine.grid().total_energy() - total_before).abs() < 1e-3);
        assert!(engine.grid().cell(5, 5).unwrap().energy < center_before);
    }

    #[test]
    fn diffusion_runs_in_material_view_too() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        paint_center(&mut engine);
        engine.apply_command(&Command::SwitchView(ViewTarget::Material));
        let center_before = engine.grid().cell(5, 5).unwrap().energy;

        engine.execute_tick();

        assert!(engine.grid().cell(5, 5).unwrap().energy < center_before);
    }

    #[test]
    fn nan_abort_is_swallowed() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        engine.apply_command(&Command::FillRect {
            x1: 18,
            y1: 18,
            x2: 18,
            y2: 18,
            value: FillValue::Energy(f32::NAN),
        });
        // Must not panic; the tick still completes and advances.
        engine.execute_tick();
        assert_eq!(engine.tick_id(), TickId(1));
    }

    // ── rendering ──────────────────────────────────────────────

    #[test]
    fn temperature_view_writes_red_channel() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        engine.apply_command(&Command::FillRect {
            x1: 15,
            y1: 15,
            x2: 24,
            y2: 24,
            value: FillValue::Energy(1000.0),
        });
        let frame = engine.execute_tick();
        // Every cell is hot; red channel saturates, green untouched.
        assert!(frame.pixels.chunks_exact(4).all(|t| t[0] > 0 && t[3] == 255));
        assert!(frame.pixels.chunks_exact(4).all(|t| t[1] == 0));
    }

    #[test]
    fn material_view_writes_green_channel() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        engine.apply_command(&Command::SwitchView(ViewTarget::Material));
        let frame = engine.execute_tick();
        assert_eq!(frame.view, ViewMode::Material);
        assert!(frame
            .pixels
            .chunks_exact(4)
            .all(|t| t[1] == material_shade(Material::Aluminium)));
    }

    // ── view switching ─────────────────────────────────────────

    #[test]
    fn double_toggle_clears_background_exactly_twice() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        let toggle = Command::SwitchView(ViewTarget::Toggle);

        assert_eq!(engine.apply_command(&toggle), ApplyOutcome::ViewChanged);
        assert_eq!(engine.apply_command(&toggle), ApplyOutcome::ViewChanged);

        assert_eq!(engine.state().view, ViewMode::Temperature);
        assert_eq!(engine.background_clears(), 2);
    }

    #[test]
    fn switching_to_current_view_does_not_clear() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        let outcome = engine.apply_command(&Command::SwitchView(ViewTarget::Temperature));
        assert_eq!(outcome, ApplyOutcome::NoChange);
        assert_eq!(engine.background_clears(), 0);
    }

    #[test]
    fn view_switch_drops_stale_channel_data() {
        let mut engine = TickEngine::new(&small_config()).unwrap();
        engine.apply_command(&Command::FillRect {
            x1: 15,
            y1: 15,
            x2: 24,
            y2: 24,
            value: FillValue::Energy(1000.0),
        });
        engine.execute_tick();
        assert!(engine.frame().pixels[0] > 0, "red channel should be hot");

        engine.apply_command(&Command::SwitchView(ViewTarget::Material));
        let frame = engine.execute_tick();
        // The red channel was cleared before the material render.
        assert_eq!(frame.pixels[0], 0);
        assert!(frame.pixels[1] > 0);
    }
}
