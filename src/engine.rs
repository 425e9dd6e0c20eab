use std::collections::HashMap;

use crate::errors::{ConfigError, EngineError};
use crate::geometry::{Margin, Rect};
use crate::layout::{Layout, Tile};
use crate::snap_assist::SnapAssist;
use crate::transform::{self, TilePreview};
use crate::window_menu::{self, WindowMenu};
use crate::{Config, WindowId};

pub type TileChosenHandler = Box<dyn FnMut(&Tile, WindowId)>;

/// Context object owning the active layout set, gap configuration and the
/// per-(monitor, workspace) layout selection. Created and destroyed by
/// the composition root; work areas, scaling factors and occupied rects
/// come in per call as read-only inputs.
pub struct TilingEngine {
    config: Config,
    selected_layouts: HashMap<(usize, u32), usize>,
    tile_chosen_handlers: Vec<TileChosenHandler>,
}

impl TilingEngine {
    /// Validates every configured layout before accepting the set.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        if config.layouts.is_empty() {
            return Err(ConfigError::NoLayouts.into());
        }
        for layout in &config.layouts {
            layout.validate()?;
        }

        Ok(Self {
            config,
            selected_layouts: HashMap::new(),
            tile_chosen_handlers: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.config.layouts
    }

    /// Replaces the whole layout set. Selections pointing past the new
    /// set fall back to the default layout; nothing is patched in place.
    pub fn replace_layouts(&mut self, layouts: Vec<Layout>) -> Result<(), EngineError> {
        if layouts.is_empty() {
            return Err(ConfigError::NoLayouts.into());
        }
        for layout in &layouts {
            layout.validate()?;
        }

        self.config.layouts = layouts;
        self.selected_layouts
            .retain(|_, layout_index| *layout_index < self.config.layouts.len());

        log::debug!("layout set replaced ({} layouts)", self.config.layouts.len());
        Ok(())
    }

    /// Active layout for a (monitor, workspace) pair. Pairs that never
    /// selected anything use the configured default.
    pub fn selected_layout(&self, monitor_index: usize, workspace_index: u32) -> &Layout {
        let layout_index = self
            .selected_layouts
            .get(&(monitor_index, workspace_index))
            .copied()
            .unwrap_or_else(|| self.default_layout_index());

        &self.config.layouts[layout_index]
    }

    pub fn select_layout(
        &mut self,
        monitor_index: usize,
        workspace_index: u32,
        name: &str,
    ) -> Result<(), EngineError> {
        let Some(layout_index) = self
            .config
            .layouts
            .iter()
            .position(|layout| layout.name == name)
        else {
            return Err(ConfigError::UnknownLayout(name.to_string()).into());
        };

        self.selected_layouts
            .insert((monitor_index, workspace_index), layout_index);

        log::debug!(
            "monitor {} workspace {} now uses layout '{}'",
            monitor_index,
            workspace_index,
            name
        );
        Ok(())
    }

    /// Advances the selection to the next layout in configured order,
    /// wrapping at the end.
    pub fn cycle_layout(&mut self, monitor_index: usize, workspace_index: u32) -> &Layout {
        let current = self
            .selected_layouts
            .get(&(monitor_index, workspace_index))
            .copied()
            .unwrap_or_else(|| self.default_layout_index());
        let next = (current + 1) % self.config.layouts.len();

        self.selected_layouts
            .insert((monitor_index, workspace_index), next);

        &self.config.layouts[next]
    }

    /// Previews of the active layout against a container rectangle.
    /// Recompute after any container, gap or scale change; no previews
    /// are cached across calls.
    pub fn previews_for(
        &self,
        monitor_index: usize,
        workspace_index: u32,
        container: Rect,
        scaling_factor: f64,
    ) -> Vec<TilePreview> {
        let layout = self.selected_layout(monitor_index, workspace_index);

        transform::compute_previews(
            layout,
            container,
            &self.effective_inner_gaps(),
            &self.effective_outer_gaps(),
            scaling_factor,
        )
    }

    /// Snap-assist strip for the active layout at a monitor's scaling
    /// factor.
    pub fn snap_assist_for(
        &self,
        monitor_index: usize,
        workspace_index: u32,
        scaling_factor: f64,
    ) -> SnapAssist {
        SnapAssist::new(
            self.selected_layout(monitor_index, workspace_index),
            &self.effective_inner_gaps(),
            scaling_factor,
        )
    }

    /// Window-menu tile entries for a window on the given monitor and
    /// workspace. Occupied rects are derived externally from the live
    /// window-to-tile assignments.
    pub fn window_menu_for(
        &self,
        monitor_index: usize,
        workspace_index: u32,
        work_area: Rect,
        occupied: &[Rect],
    ) -> WindowMenu {
        window_menu::build_window_menu(
            &self.config.layouts,
            self.selected_layout(monitor_index, workspace_index),
            work_area,
            occupied,
        )
    }

    /// Registers a handler for the tile-chosen notification. The window
    /// placement itself stays with the host.
    pub fn on_tile_chosen(&mut self, handler: TileChosenHandler) {
        self.tile_chosen_handlers.push(handler);
    }

    /// Signals that a target tile was resolved for a window, from a drag
    /// drop or a menu activation.
    pub fn notify_tile_chosen(&mut self, tile: &Tile, window: WindowId) {
        log::debug!(
            "tile chosen for window {}: x={:.3} y={:.3} w={:.3} h={:.3}",
            window,
            tile.x,
            tile.y,
            tile.width,
            tile.height
        );

        for handler in &mut self.tile_chosen_handlers {
            handler(tile, window);
        }
    }

    fn default_layout_index(&self) -> usize {
        self.config
            .layouts
            .iter()
            .position(|layout| layout.name == self.config.default_layout)
            .unwrap_or(0)
    }

    fn effective_inner_gaps(&self) -> Margin {
        if self.config.gaps_enabled {
            self.config.inner_gaps
        } else {
            Margin::default()
        }
    }

    fn effective_outer_gaps(&self) -> Margin {
        if self.config.gaps_enabled {
            self.config.outer_gaps
        } else {
            Margin::default()
        }
    }
}
